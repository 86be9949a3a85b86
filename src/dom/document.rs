use std::collections::BTreeMap;

use super::InlineStyle;

/// Handle into a [`Document`]'s element arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Payload carried by `img` elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageData {
    pub src: String,
    pub alt: String,
    pub srcset: String,
    pub natural_width: u32,
    pub natural_height: u32,
    /// Whether decoding has finished and the natural dimensions are readable.
    pub complete: bool,
}

#[derive(Debug)]
struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    style: InlineStyle,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    image: Option<ImageData>,
}

/// Arena-owned element tree. Elements are never removed from the arena;
/// detaching only unlinks them from their parent. State keyed by [`NodeId`]
/// therefore lives exactly as long as the document that owns the element.
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            style: InlineStyle::new(),
            parent: None,
            children: Vec::new(),
            image: None,
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn create_image(&mut self, data: ImageData) -> NodeId {
        let id = self.create_element("img");
        self.nodes[id.0].image = Some(data);
        id
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|&node| node != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Detaches every child of `parent`, leaving them parentless in the arena.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children = std::mem::take(&mut self.nodes[parent.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    /// Inclusive ancestry test: `contains(node, node)` is true.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.nodes[id.0].parent;
        }
        false
    }

    pub fn is_image(&self, id: NodeId) -> bool {
        self.nodes[id.0].image.is_some()
    }

    pub fn image(&self, id: NodeId) -> Option<&ImageData> {
        self.nodes[id.0].image.as_ref()
    }

    pub fn image_mut(&mut self, id: NodeId) -> Option<&mut ImageData> {
        self.nodes[id.0].image.as_mut()
    }

    pub fn style(&self, id: NodeId) -> &InlineStyle {
        &self.nodes[id.0].style
    }

    pub fn style_mut(&mut self, id: NodeId) -> &mut InlineStyle {
        &mut self.nodes[id.0].style
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0].attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.nodes[id.0].attributes.contains_key(name)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        self.nodes[id.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        self.nodes[id.0].attributes.remove(name);
    }

    pub fn attribute_names(&self, id: NodeId) -> Vec<String> {
        self.nodes[id.0].attributes.keys().cloned().collect()
    }

    /// Images strictly below `id`, pre-order.
    pub fn descendant_images(&self, id: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            if self.is_image(node) {
                found.push(node);
            }
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        found
    }

    /// Every element in the arena carrying `name`, in creation order.
    pub fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| self.has_attribute(*id, name))
            .collect()
    }
}
