use crate::dom::{ImageData, NodeId};

use super::{ImageStyleState, RenderMode, SessionContext, resolve};

fn image_data(name: &str) -> ImageData {
    ImageData {
        src: format!("http://example.test/{name}.png"),
        alt: name.to_string(),
        srcset: String::new(),
        natural_width: 320,
        natural_height: 240,
        complete: true,
    }
}

fn add_image(session: &mut SessionContext, parent: NodeId, name: &str) -> NodeId {
    let image = session.document.create_image(image_data(name));
    session.document.append_child(parent, image);
    image
}

#[test]
fn image_target_resolves_to_itself() {
    let mut session = SessionContext::new();
    let body = session.document.create_element("body");
    let image = add_image(&mut session, body, "a");
    assert_eq!(resolve(&session, image), Some(image));
}

#[test]
fn container_with_single_image_resolves_to_it() {
    let mut session = SessionContext::new();
    let container = session.document.create_element("div");
    let caption = session.document.create_element("span");
    session.document.append_child(container, caption);
    let image = add_image(&mut session, container, "a");
    assert_eq!(resolve(&session, container), Some(image));
}

#[test]
fn ambiguous_container_falls_back_to_parent_scan() {
    let mut session = SessionContext::new();
    let parent = session.document.create_element("div");
    let container = session.document.create_element("div");
    session.document.append_child(parent, container);
    let _first = add_image(&mut session, container, "a");
    let _second = add_image(&mut session, container, "b");
    let sibling = add_image(&mut session, parent, "c");

    // The clicked subtree is excluded from the parent scan, so its two
    // images do not make the sibling ambiguous.
    assert_eq!(resolve(&session, container), Some(sibling));
}

#[test]
fn click_with_no_nearby_image_clears_the_target() {
    let mut session = SessionContext::new();
    let body = session.document.create_element("body");
    let paragraph = session.document.create_element("p");
    session.document.append_child(body, paragraph);
    let stray = add_image(&mut session, body, "a");

    session.current = Some(stray);
    // body holds exactly one image, so the paragraph still resolves there.
    assert_eq!(session.on_context_click(paragraph), Some(stray));

    let _second = add_image(&mut session, body, "b");
    assert_eq!(session.on_context_click(paragraph), None);
    assert_eq!(session.current, None);
}

#[test]
fn clicks_inside_the_open_dialog_keep_the_subject() {
    let mut session = SessionContext::new();
    let body = session.document.create_element("body");
    let image = add_image(&mut session, body, "a");

    session.current = Some(image);
    session.dialog.open = true;
    let space = session.dialog.space;
    assert_eq!(resolve(&session, space), Some(image));

    // With no current image the dialog surface resolves like any other node.
    session.current = None;
    assert_eq!(resolve(&session, space), None);

    // A closed dialog gets no special treatment.
    session.dialog.open = false;
    session.current = Some(image);
    assert_eq!(resolve(&session, space), None);
}

#[test]
fn store_creates_one_entry_lazily() {
    let mut session = SessionContext::new();
    let body = session.document.create_element("body");
    let image = add_image(&mut session, body, "a");

    assert!(session.store.get(image).is_none());
    let entry = session.store.entry(image).clone();
    assert_eq!(entry, ImageStyleState::default());
    assert_eq!(entry.scale, 100.0);
    assert_eq!(entry.rotate, "0deg");
    assert!(!entry.reverse);
    assert_eq!(entry.render, RenderMode::CrispEdges);

    session.store.entry(image).scale = 150.0;
    assert_eq!(session.store.get(image).unwrap().scale, 150.0);
}

#[test]
fn render_mode_keywords_round_trip() {
    for mode in RenderMode::ALL {
        assert_eq!(RenderMode::from_keyword(mode.as_str()), Some(mode));
    }
    assert_eq!(RenderMode::from_keyword("blurry"), None);
}
