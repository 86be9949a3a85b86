use std::collections::HashMap;

use serde::Serialize;

use crate::dom::NodeId;

/// Rendering quality applied to a tracked image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    #[default]
    CrispEdges,
    Pixelated,
    Smooth,
    HighQuality,
}

impl RenderMode {
    pub const ALL: [RenderMode; 4] = [
        RenderMode::CrispEdges,
        RenderMode::Pixelated,
        RenderMode::Smooth,
        RenderMode::HighQuality,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::CrispEdges => "crisp-edges",
            RenderMode::Pixelated => "pixelated",
            RenderMode::Smooth => "smooth",
            RenderMode::HighQuality => "high-quality",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == keyword)
    }
}

/// Per-image transform state. The on-page attribute values are a projection of
/// this record; the record itself is never derived back from the DOM.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageStyleState {
    /// Percentage of natural size. Not clamped; malformed commands may park a
    /// NaN here, preserved deliberately.
    pub scale: f64,
    /// Angle string in degrees, `"{n}deg"`.
    pub rotate: String,
    /// Horizontal flip toggle.
    pub reverse: bool,
    pub render: RenderMode,
}

impl Default for ImageStyleState {
    fn default() -> Self {
        Self {
            scale: 100.0,
            rotate: "0deg".to_string(),
            reverse: false,
            render: RenderMode::default(),
        }
    }
}

/// Lazily-populated store of [`ImageStyleState`] keyed by element identity.
/// There is no delete API; entries share the lifetime of the owning document.
#[derive(Debug, Default)]
pub struct StyleStore {
    entries: HashMap<NodeId, ImageStyleState>,
}

impl StyleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, image: NodeId) -> Option<&ImageStyleState> {
        self.entries.get(&image)
    }

    /// Creates a defaulted entry on first access.
    pub fn entry(&mut self, image: NodeId) -> &mut ImageStyleState {
        self.entries.entry(image).or_default()
    }

    pub fn insert(&mut self, image: NodeId, state: ImageStyleState) {
        self.entries.insert(image, state);
    }
}
