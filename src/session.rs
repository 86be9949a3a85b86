mod context;
mod resolver;
mod store;

#[cfg(test)]
mod tests;

pub use context::SessionContext;
pub use resolver::resolve;
pub use store::{ImageStyleState, RenderMode, StyleStore};
