use crate::dom::{Document, ImageData, NodeId};
use crate::fetch::SizeFetcher;
use crate::session::{ImageStyleState, SessionContext};
use crate::transform::{self, ATTR_PREFIX, CommandSource};

use super::metadata::{SIZE_PLACEHOLDER, format_size, metadata_rows};

/// Fixed padding subtracted from the viewport when computing the initial
/// fit-to-viewport scale.
pub const FIT_PADDING: f64 = 40.0;

/// Opens (or refreshes) the inspection dialog for `image`.
///
/// An image that has not finished loading parks the request; a later load
/// notification completes it. There is no timeout — an image that never loads
/// never opens the dialog.
pub fn open(session: &mut SessionContext, image: NodeId, fetcher: &dyn SizeFetcher) {
    let Some(data) = session.document.image(image).cloned() else {
        return;
    };
    if !data.complete {
        session.dialog.pending = Some(image);
        return;
    }
    session.dialog.pending = None;

    // Opening counts as targeting: the source gets its state entry here.
    let source_state = session.store.entry(image).clone();

    let in_dialog = session.document.contains(session.dialog.content, image);
    let subject = if in_dialog {
        image
    } else {
        let clone = clone_image(&mut session.document, image);
        let space = session.dialog.space;
        session.document.clear_children(space);
        session.document.append_child(space, clone);
        clone
    };

    let first_view = session.store.get(subject).is_none();
    if first_view {
        // Fresh dialog entry: rotation and flip carry over from the page
        // image, scale and rendering restart at their defaults.
        session.store.insert(
            subject,
            ImageStyleState {
                rotate: source_state.rotate.clone(),
                reverse: source_state.reverse,
                ..ImageStyleState::default()
            },
        );
    }

    session.current = Some(subject);
    session.dialog.subject = Some(subject);
    session.dialog.open = true;

    // A source still at the 100% default starts the dialog view scaled to
    // fit, but only if that shrinks it.
    if first_view && source_state.scale == 100.0 {
        let fit = fit_scale(&data, session.dialog.viewport);
        if fit < 100.0 {
            transform::apply(
                session,
                &format!("{fit}%"),
                CommandSource::DialogControl,
                fetcher,
            );
        }
    }

    let size_text = match fetcher.fetch_size(&data.src) {
        Ok(bytes) => format_size(bytes),
        Err(error) => {
            log::debug!("file size lookup failed for {}: {error}", data.src);
            SIZE_PLACEHOLDER.to_string()
        }
    };
    session.dialog.metadata = metadata_rows(&data, &size_text);
}

pub fn close(session: &mut SessionContext) {
    session.dialog.open = false;
}

/// Marks `image` as decoded and completes a pending open for it. A pending
/// open that was superseded stays inert.
pub fn notify_loaded(session: &mut SessionContext, image: NodeId, fetcher: &dyn SizeFetcher) {
    if let Some(data) = session.document.image_mut(image) {
        data.complete = true;
    }
    if session.dialog.pending == Some(image) {
        open(session, image, fetcher);
    }
}

/// Minimal clone for the dialog: image payload, inline style, and the
/// extension attributes only. Not a live alias of the page element.
fn clone_image(document: &mut Document, source: NodeId) -> NodeId {
    let data = document.image(source).cloned().unwrap_or_default();
    let clone = document.create_image(data);
    *document.style_mut(clone) = document.style(source).clone();
    for name in document.attribute_names(source) {
        if name.starts_with(ATTR_PREFIX) {
            let value = document.attribute(source, &name).unwrap_or("").to_string();
            document.set_attribute(clone, &name, &value);
        }
    }
    clone
}

fn fit_scale(data: &ImageData, viewport: (f64, f64)) -> f64 {
    let fit_w = (viewport.0 - FIT_PADDING) / f64::from(data.natural_width.max(1));
    let fit_h = (viewport.1 - FIT_PADDING) / f64::from(data.natural_height.max(1));
    (fit_h.min(fit_w) * 100.0).floor()
}
