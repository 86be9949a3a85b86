use crate::dom::NodeId;

use super::SessionContext;

/// Decides which image a right-click addresses. Read-only; the caller owns
/// the `current` rebinding.
///
/// Resolution order: commands inside the open dialog keep the dialog's
/// subject; an image target wins outright; then a unique image among the
/// target's descendants; then a unique image under the target's parent with
/// the clicked subtree excluded; otherwise there is no target.
pub fn resolve(session: &SessionContext, target: NodeId) -> Option<NodeId> {
    let document = &session.document;

    if session.dialog.open
        && document.contains(session.dialog.content, target)
        && session.current.is_some()
    {
        return session.current;
    }

    if document.is_image(target) {
        return Some(target);
    }

    let inside = document.descendant_images(target);
    if inside.len() == 1 {
        return Some(inside[0]);
    }

    if let Some(parent) = document.parent(target) {
        let around: Vec<NodeId> = document
            .descendant_images(parent)
            .into_iter()
            .filter(|&image| !document.contains(target, image))
            .collect();
        if around.len() == 1 {
            return Some(around[0]);
        }
    }

    None
}
