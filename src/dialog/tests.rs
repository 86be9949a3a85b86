use crate::dom::{ImageData, NodeId};
use crate::fetch::{FetchError, Result as FetchResult, SizeFetcher};
use crate::session::SessionContext;
use crate::transform::{ATTR_ROTATE_Z, CommandSource, apply};

use super::{
    SIZE_PLACEHOLDER, close, format_size, notify_loaded, open, pan, space_size,
    srcset_candidates, wheel,
};

struct StubFetcher;

impl SizeFetcher for StubFetcher {
    fn fetch_size(&self, _src: &str) -> FetchResult<u64> {
        Ok(4096)
    }
}

fn session_with_image(width: u32, height: u32, complete: bool) -> (SessionContext, NodeId) {
    let mut session = SessionContext::new();
    let body = session.document.create_element("body");
    let image = session.document.create_image(ImageData {
        src: "http://example.test/photo.png".into(),
        alt: "photo".into(),
        srcset: "photo.png 1x, photo@2x.png 2x".into(),
        natural_width: width,
        natural_height: height,
        complete,
    });
    session.document.append_child(body, image);
    session.current = Some(image);
    (session, image)
}

#[test]
fn open_waits_for_the_image_to_load() {
    let (mut session, image) = session_with_image(400, 300, false);
    open(&mut session, image, &StubFetcher);
    assert!(!session.dialog.open);
    assert_eq!(session.dialog.pending, Some(image));

    notify_loaded(&mut session, image, &StubFetcher);
    assert!(session.dialog.open);
    assert_eq!(session.dialog.pending, None);
    assert!(session.dialog.subject.is_some());
}

#[test]
fn first_open_shows_a_minimal_clone() {
    let (mut session, image) = session_with_image(400, 300, true);
    session.document.set_attribute(image, "class", "hero");
    assert!(apply(&mut session, "45deg", CommandSource::Menu, &StubFetcher));
    assert!(apply(&mut session, "reverse", CommandSource::Menu, &StubFetcher));

    open(&mut session, image, &StubFetcher);
    let subject = session.dialog.subject.expect("subject");
    assert_ne!(subject, image);
    assert!(session.document.contains(session.dialog.space, subject));

    // Extension attributes travel, host-page attributes do not.
    assert_eq!(
        session.document.attribute(subject, ATTR_ROTATE_Z),
        Some("rotateZ(45deg)")
    );
    assert!(!session.document.has_attribute(subject, "class"));
    assert_eq!(
        session.document.image(subject).unwrap().src,
        "http://example.test/photo.png"
    );

    // Rotation and flip carry over into the fresh entry; scale restarts.
    let state = session.store.get(subject).expect("seeded state");
    assert_eq!(state.rotate, "45deg");
    assert!(state.reverse);
}

#[test]
fn oversized_images_open_scaled_to_fit() {
    let (mut session, image) = session_with_image(2000, 1000, true);
    session.dialog.viewport = (900.0, 600.0);
    open(&mut session, image, &StubFetcher);
    let subject = session.dialog.subject.expect("subject");

    // fit = floor(min((900-40)/2000, (600-40)/1000) * 100)
    assert_eq!(session.store.get(subject).unwrap().scale, 43.0);
    assert_eq!(session.document.style(subject).get("width"), Some("860px"));
    assert_eq!(session.document.style(subject).get("height"), Some("430px"));
}

#[test]
fn small_images_are_not_enlarged_on_open() {
    let (mut session, image) = session_with_image(100, 80, true);
    session.dialog.viewport = (900.0, 600.0);
    open(&mut session, image, &StubFetcher);
    let subject = session.dialog.subject.expect("subject");
    assert_eq!(session.store.get(subject).unwrap().scale, 100.0);
}

#[test]
fn already_scaled_sources_skip_the_fit() {
    let (mut session, image) = session_with_image(2000, 1000, true);
    assert!(apply(&mut session, "150%", CommandSource::Menu, &StubFetcher));
    open(&mut session, image, &StubFetcher);
    let subject = session.dialog.subject.expect("subject");
    assert_eq!(session.store.get(subject).unwrap().scale, 100.0);
}

#[test]
fn wheel_rotation_wraps_into_a_full_turn() {
    let (mut session, image) = session_with_image(100, 80, true);
    open(&mut session, image, &StubFetcher);
    let subject = session.dialog.subject.expect("subject");

    session.store.entry(subject).rotate = "350deg".into();
    assert!(wheel(&mut session, true, true, &StubFetcher));
    assert_eq!(session.store.get(subject).unwrap().rotate, "0deg");

    assert!(wheel(&mut session, false, true, &StubFetcher));
    assert_eq!(session.store.get(subject).unwrap().rotate, "350deg");
}

#[test]
fn wheel_zoom_is_floored_at_one() {
    let (mut session, image) = session_with_image(100, 80, true);
    open(&mut session, image, &StubFetcher);
    let subject = session.dialog.subject.expect("subject");

    session.store.entry(subject).scale = 5.0;
    assert!(wheel(&mut session, false, false, &StubFetcher));
    assert_eq!(session.store.get(subject).unwrap().scale, 1.0);
    assert!(wheel(&mut session, false, false, &StubFetcher));
    assert_eq!(session.store.get(subject).unwrap().scale, 1.0);

    assert!(wheel(&mut session, true, false, &StubFetcher));
    assert_eq!(session.store.get(subject).unwrap().scale, 11.0);
}

#[test]
fn percent_commands_keep_the_visual_center() {
    let (mut session, image) = session_with_image(400, 300, true);
    assert!(apply(&mut session, "150%", CommandSource::Menu, &StubFetcher));
    session.dialog.viewport = (900.0, 600.0);
    open(&mut session, image, &StubFetcher);
    assert!(space_size(&session).is_none());
    session.dialog.scroll = (0.0, 0.0);
    session.dialog.scroll_dirty = false;

    assert!(apply(&mut session, "200%", CommandSource::DialogControl, &StubFetcher));
    // Scaled 800x600: diagonal + 20 = 1020; the space grows from the
    // viewport fallback (900, 600) and the scroll keeps the center.
    assert_eq!(space_size(&session), Some((1020.0, 1020.0)));
    assert_eq!(session.dialog.scroll, (60.0, 210.0));
    assert!(session.dialog.scroll_dirty);
}

#[test]
fn reset_clears_the_space_sizing() {
    let (mut session, image) = session_with_image(400, 300, true);
    assert!(apply(&mut session, "150%", CommandSource::Menu, &StubFetcher));
    open(&mut session, image, &StubFetcher);
    assert!(apply(&mut session, "200%", CommandSource::DialogControl, &StubFetcher));
    assert!(space_size(&session).is_some());

    assert!(apply(&mut session, "reset", CommandSource::DialogControl, &StubFetcher));
    assert!(space_size(&session).is_none());
}

#[test]
fn panning_moves_the_scroll_by_the_raw_delta() {
    let (mut session, image) = session_with_image(400, 300, true);
    open(&mut session, image, &StubFetcher);
    session.dialog.scroll = (100.0, 100.0);

    pan(&mut session, 30.0, -20.0);
    assert_eq!(session.dialog.scroll, (70.0, 120.0));
    assert!(session.dialog.scroll_dirty);

    // Clamped at the origin.
    pan(&mut session, 500.0, 500.0);
    assert_eq!(session.dialog.scroll, (0.0, 0.0));
}

#[test]
fn metadata_lists_one_row_per_srcset_candidate() {
    let (mut session, image) = session_with_image(400, 300, true);
    open(&mut session, image, &StubFetcher);

    let rows = &session.dialog.metadata;
    assert_eq!(rows[0].label, "URL");
    assert_eq!(rows[0].value, "http://example.test/photo.png");
    assert_eq!(rows[1].label, "File size");
    assert_eq!(rows[1].value, "4.0 KB");
    assert_eq!(rows[2].value, "400px");
    assert_eq!(rows[3].value, "300px");
    assert_eq!(rows[4].value, "photo");
    let candidates: Vec<&str> = rows
        .iter()
        .filter(|row| row.label == "srcset")
        .map(|row| row.value.as_str())
        .collect();
    assert_eq!(candidates, vec!["photo.png 1x", "photo@2x.png 2x"]);
}

#[test]
fn srcset_parsing_trims_and_drops_empties() {
    assert_eq!(
        srcset_candidates(" a.png 1x , b.png 2x ,, "),
        vec!["a.png 1x", "b.png 2x"]
    );
    assert!(srcset_candidates("").is_empty());
}

#[test]
fn size_formatting_picks_sensible_units() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(2048), "2.0 KB");
    assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
}

#[test]
fn fetch_failure_renders_the_placeholder() {
    struct FailingFetcher;
    impl SizeFetcher for FailingFetcher {
        fn fetch_size(&self, _src: &str) -> FetchResult<u64> {
            Err(FetchError::MissingLength("http://example.test".into()))
        }
    }

    let (mut session, image) = session_with_image(100, 80, true);
    open(&mut session, image, &FailingFetcher);
    let row = session
        .dialog
        .metadata
        .iter()
        .find(|row| row.label == "File size")
        .expect("size row");
    assert_eq!(row.value, SIZE_PLACEHOLDER);
}

#[test]
fn closing_keeps_the_surface_for_reuse() {
    let (mut session, image) = session_with_image(100, 80, true);
    open(&mut session, image, &StubFetcher);
    let first_subject = session.dialog.subject;
    close(&mut session);
    assert!(!session.dialog.open);

    open(&mut session, image, &StubFetcher);
    assert!(session.dialog.open);
    // Reopening repopulates the same space element with a fresh clone.
    assert_ne!(session.dialog.subject, first_subject);
    assert_eq!(
        session
            .document
            .children(session.dialog.space)
            .len(),
        1
    );
}
