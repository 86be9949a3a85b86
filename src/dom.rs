mod document;
mod style;


pub use document::{Document, ImageData, NodeId};
pub use style::InlineStyle;
