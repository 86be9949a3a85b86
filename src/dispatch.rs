use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The one message shape exchanged between the dispatcher and a session.
/// Always answered with a boolean acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuMessage {
    #[serde(rename = "menuItemId")]
    pub menu_item_id: String,
}

/// One node of the static context-menu tree. Leaf identifiers double as the
/// command vocabulary consumed by the transform engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    fn leaf(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            children: Vec::new(),
        }
    }

    fn parent(id: &str, title: &str, children: Vec<MenuItem>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            children,
        }
    }

    /// Leaves in tree order.
    pub fn leaves(&self) -> Vec<&MenuItem> {
        if self.children.is_empty() {
            return vec![self];
        }
        self.children.iter().flat_map(MenuItem::leaves).collect()
    }
}

/// Builds the static tree, once, at construction time.
pub fn menu_tree() -> MenuItem {
    let zoom = (1..=12)
        .map(|step| {
            let id = format!("{}%", step * 25);
            MenuItem::leaf(&id, &id)
        })
        .collect();
    let rotate = (0..9)
        .map(|step| {
            let id = format!("{}deg", step * 40);
            MenuItem::leaf(&id, &format!("{}°", step * 40))
        })
        .collect();
    MenuItem::parent(
        "image-controller",
        "Image Controller",
        vec![
            MenuItem::parent("zoom", "Zoom", zoom),
            MenuItem::parent("rotate", "Rotate", rotate),
            MenuItem::leaf("reverse", "Reverse"),
            MenuItem::leaf("dialog", "Dialog"),
            MenuItem::parent(
                "reset-menus",
                "Reset",
                vec![
                    MenuItem::leaf("reset", "Reset"),
                    MenuItem::leaf("reset-all", "Reset all"),
                ],
            ),
        ],
    )
}

pub type TabId = u64;

/// Background-process side of the system: owns the menu tree, tracks the
/// active tab, and turns menu clicks into messages for that tab's session.
/// It knows nothing about images.
#[derive(Debug)]
pub struct Dispatcher {
    root: MenuItem,
    tabs: HashMap<TabId, String>,
    active: Option<TabId>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            root: menu_tree(),
            tabs: HashMap::new(),
            active: None,
        }
    }

    pub fn menu(&self) -> &MenuItem {
        &self.root
    }

    pub fn register_tab(&mut self, id: TabId, url: &str) {
        self.tabs.insert(id, url.to_string());
    }

    pub fn remove_tab(&mut self, id: TabId) {
        self.tabs.remove(&id);
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub fn activate(&mut self, id: TabId) {
        self.active = Some(id);
    }

    /// A menu click: produces the message for the active tab, or drops it.
    /// Only http(s) pages carry the content script, so everything else is
    /// filtered here; failures are logged and never retried.
    pub fn click(&self, menu_item_id: &str) -> Option<MenuMessage> {
        let Some(active) = self.active else {
            log::warn!("menu click {menu_item_id} dropped: no active tab");
            return None;
        };
        let Some(url) = self.tabs.get(&active) else {
            log::warn!("menu click {menu_item_id} dropped: tab {active} is gone");
            return None;
        };
        if !url.starts_with("http") {
            return None;
        }
        Some(MenuMessage {
            menu_item_id: menu_item_id.to_string(),
        })
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
