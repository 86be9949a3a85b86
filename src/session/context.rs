use crate::dialog::DialogState;
use crate::dispatch::MenuMessage;
use crate::dom::{Document, NodeId};
use crate::fetch::SizeFetcher;
use crate::transform::{self, CommandSource};

use super::resolver;
use super::store::StyleStore;

/// Everything one content-script injection owns: the document surface, the
/// current target, the style store, and the dialog. Constructed once and
/// threaded through every handler.
#[derive(Debug)]
pub struct SessionContext {
    pub document: Document,
    /// The image bound to incoming commands. Set only by right-click
    /// resolution or an explicit dialog open.
    pub current: Option<NodeId>,
    pub store: StyleStore,
    pub dialog: DialogState,
}

impl SessionContext {
    pub fn new() -> Self {
        let mut document = Document::new();
        let dialog = DialogState::new(&mut document);
        Self {
            document,
            current: None,
            store: StyleStore::new(),
            dialog,
        }
    }

    /// Right-click entry point: resolves the target and rebinds `current`.
    pub fn on_context_click(&mut self, target: NodeId) -> Option<NodeId> {
        match resolver::resolve(self, target) {
            Some(image) => {
                self.current = Some(image);
                Some(image)
            }
            None => {
                log::debug!("right-click target did not resolve to an image");
                self.current = None;
                None
            }
        }
    }

    /// Menu message entry point. The returned boolean is the acknowledgment
    /// sent back to the dispatcher.
    pub fn on_message(&mut self, message: &MenuMessage, fetcher: &dyn SizeFetcher) -> bool {
        transform::apply(self, &message.menu_item_id, CommandSource::Menu, fetcher)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
