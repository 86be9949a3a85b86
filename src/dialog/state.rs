use crate::dom::{Document, NodeId};
use crate::session::SessionContext;

use super::metadata::MetaRow;

/// The inspection dialog's isolated surface. The content root and the
/// reusable space element are created once per session and kept for the whole
/// page lifetime; opening only repopulates them.
#[derive(Debug)]
pub struct DialogState {
    pub open: bool,
    /// The dialog's shadow-isolated rendering surface.
    pub content: NodeId,
    /// Reusable pannable container hosting the (possibly cloned) image.
    pub space: NodeId,
    /// The image currently shown inside the dialog.
    pub subject: Option<NodeId>,
    /// An open request waiting for the image to finish loading.
    pub pending: Option<NodeId>,
    /// Available viewport inside the dialog, in px.
    pub viewport: (f64, f64),
    /// Scroll position of the pannable viewport.
    pub scroll: (f64, f64),
    /// Set when a command moved the scroll position and the front end still
    /// has to pick it up.
    pub scroll_dirty: bool,
    pub metadata: Vec<MetaRow>,
}

impl DialogState {
    pub fn new(document: &mut Document) -> Self {
        let content = document.create_element("dialog");
        let space = document.create_element("div");
        document.append_child(content, space);
        Self {
            open: false,
            content,
            space,
            subject: None,
            pending: None,
            viewport: (900.0, 600.0),
            scroll: (0.0, 0.0),
            scroll_dirty: false,
            metadata: Vec::new(),
        }
    }
}

pub fn space_size(session: &SessionContext) -> Option<(f64, f64)> {
    let style = session.document.style(session.dialog.space);
    let width = parse_px(style.get("width")?)?;
    let height = parse_px(style.get("height")?)?;
    Some((width, height))
}

pub fn set_space_size(session: &mut SessionContext, width: f64, height: f64) {
    let style = session.document.style_mut(session.dialog.space);
    style.set_property("width", &format!("{width}px"));
    style.set_property("height", &format!("{height}px"));
}

pub fn clear_space_sizing(session: &mut SessionContext) {
    let style = session.document.style_mut(session.dialog.space);
    style.remove_property("width");
    style.remove_property("height");
}

fn parse_px(value: &str) -> Option<f64> {
    value.strip_suffix("px")?.trim().parse().ok()
}
