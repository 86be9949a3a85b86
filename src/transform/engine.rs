use crate::dialog;
use crate::dom::NodeId;
use crate::fetch::SizeFetcher;
use crate::session::{ImageStyleState, RenderMode, SessionContext};

use super::attrs::{
    ATTR_DEFAULT_STYLE, ATTR_PREFIX, ATTR_RENDER, ATTR_ROTATE_Y, ATTR_ROTATE_Z, ATTR_SCALE,
    TRANSFORM_ORDER,
};
use super::command::{Command, CommandSource};

/// Applies one command from the menu vocabulary to the current image.
///
/// Returns the acknowledgment: false when there is no current image (except
/// `reset-all`, which is global, and `dialog`, where nothing happening is
/// still a clean outcome) or when the identifier is unrecognized.
pub fn apply(
    session: &mut SessionContext,
    menu_item_id: &str,
    source: CommandSource,
    fetcher: &dyn SizeFetcher,
) -> bool {
    let Some(command) = Command::parse(menu_item_id) else {
        log::debug!("unrecognized command identifier: {menu_item_id}");
        return false;
    };

    if command == Command::ResetAll {
        reset_all(session);
        return true;
    }

    let Some(image) = session.current else {
        return command == Command::Dialog;
    };

    match command {
        Command::Dialog => {
            dialog::open(session, image, fetcher);
            return true;
        }
        Command::Reset => {
            reset_image(session, image);
            dialog::clear_space_sizing(session);
            return true;
        }
        _ => {}
    }

    ensure_default_style(session, image);
    session.store.entry(image);
    let in_dialog = session.document.contains(session.dialog.content, image);
    let mut recenter = false;

    match &command {
        Command::Reverse => {
            // Attribute presence is the source of truth for the toggle.
            let flipped = session.document.has_attribute(image, ATTR_ROTATE_Y);
            if flipped {
                session.document.remove_attribute(image, ATTR_ROTATE_Y);
            } else {
                session
                    .document
                    .set_attribute(image, ATTR_ROTATE_Y, "rotateY(180deg)");
            }
            session.store.entry(image).reverse = !flipped;
        }
        Command::Render(keyword) => {
            let Some(mode) = RenderMode::from_keyword(keyword) else {
                log::debug!("ignoring unknown render mode: {keyword}");
                return true;
            };
            session.store.entry(image).render = mode;
            session
                .document
                .set_attribute(image, ATTR_RENDER, &format!("render({})", mode.as_str()));
        }
        Command::Percent(value) => {
            session.store.entry(image).scale = *value;
            // Dialog sizing is explicit width/height, so the attribute keeps
            // the raw percentage there; on the page it feeds the transform.
            let encoded = if in_dialog {
                format!("{value}")
            } else {
                format!("scale({})", value / 100.0)
            };
            session.document.set_attribute(image, ATTR_SCALE, &encoded);
            recenter = true;
        }
        Command::Degrees(value) => {
            let angle = format!("{value}deg");
            session
                .document
                .set_attribute(image, ATTR_ROTATE_Z, &format!("rotateZ({angle})"));
            session.store.entry(image).rotate = angle;
        }
        Command::Reset | Command::ResetAll | Command::Dialog => unreachable!(),
    }

    rebuild_transform(session, image, in_dialog);
    if in_dialog {
        apply_dialog_sizing(session, image, recenter);
    }

    // Menu-driven changes must show up in the open dialog's info panel;
    // dialog-origin commands skip this to avoid a refresh loop.
    if session.dialog.open && source == CommandSource::Menu {
        dialog::open(session, image, fetcher);
    }

    true
}

fn ensure_default_style(session: &mut SessionContext, image: NodeId) {
    if !session.document.has_attribute(image, ATTR_DEFAULT_STYLE) {
        let css = session.document.style(image).css_text();
        session.document.set_attribute(image, ATTR_DEFAULT_STYLE, &css);
    }
}

/// Concatenates the extension attributes into the `transform` style property.
/// The default-style marker and the render attribute never participate; the
/// scale attribute is skipped in dialog context.
fn rebuild_transform(session: &mut SessionContext, image: NodeId, in_dialog: bool) {
    let mut functions = Vec::new();
    for name in TRANSFORM_ORDER {
        if in_dialog && name == ATTR_SCALE {
            continue;
        }
        if let Some(value) = session.document.attribute(image, name) {
            functions.push(value.to_string());
        }
    }
    let style = session.document.style_mut(image);
    if functions.is_empty() {
        style.remove_property("transform");
    } else {
        style.set_property("transform", &functions.join(" "));
    }
}

/// Restores the recorded default style, drops every extension attribute, and
/// returns the state entry to defaults. With the attributes gone the scale-100
/// baseline has nothing to project, so the restored style stands untouched.
pub(crate) fn reset_image(session: &mut SessionContext, image: NodeId) {
    if let Some(default) = session
        .document
        .attribute(image, ATTR_DEFAULT_STYLE)
        .map(str::to_string)
    {
        session.document.style_mut(image).set_css_text(&default);
    }
    for name in session.document.attribute_names(image) {
        if name.starts_with(ATTR_PREFIX) {
            session.document.remove_attribute(image, &name);
        }
    }
    session.store.insert(image, ImageStyleState::default());
}

fn reset_all(session: &mut SessionContext) {
    for image in session.document.elements_with_attribute(ATTR_DEFAULT_STYLE) {
        reset_image(session, image);
    }
    dialog::clear_space_sizing(session);
}

/// Dialog-context sizing: explicit pixel dimensions from natural × scale,
/// rendering quality, and the pannable space sized to the larger of the
/// scaled diagonal plus margin or twice the viewport minus the image.
fn apply_dialog_sizing(session: &mut SessionContext, image: NodeId, recenter: bool) {
    let Some(data) = session.document.image(image).cloned() else {
        return;
    };
    let state = session.store.entry(image).clone();
    let factor = state.scale / 100.0;
    let scaled_w = f64::from(data.natural_width) * factor;
    let scaled_h = f64::from(data.natural_height) * factor;

    {
        let style = session.document.style_mut(image);
        style.set_property("width", &format!("{scaled_w}px"));
        style.set_property("height", &format!("{scaled_h}px"));
        style.set_property("image-rendering", state.render.as_str());
    }

    let (view_w, view_h) = session.dialog.viewport;
    let old = dialog::space_size(session).unwrap_or((view_w, view_h));
    let diagonal = (scaled_w * scaled_w + scaled_h * scaled_h).sqrt();
    let space_w = (diagonal + 20.0).max(2.0 * view_w - scaled_w);
    let space_h = (diagonal + 20.0).max(2.0 * view_h - scaled_h);
    dialog::set_space_size(session, space_w, space_h);

    if recenter {
        // Hold the visual center across the resize.
        session.dialog.scroll.0 = (session.dialog.scroll.0 + (space_w - old.0) / 2.0).max(0.0);
        session.dialog.scroll.1 = (session.dialog.scroll.1 + (space_h - old.1) / 2.0).max(0.0);
        session.dialog.scroll_dirty = true;
    }
}
