mod metadata;
mod open;
mod state;
mod viewport;

#[cfg(test)]
mod tests;

pub use metadata::{MetaRow, SIZE_PLACEHOLDER, format_size, metadata_rows, srcset_candidates};
pub use open::{FIT_PADDING, close, notify_loaded, open};
pub use state::{DialogState, clear_space_sizing, set_space_size, space_size};
pub use viewport::{MIN_WHEEL_SCALE, WHEEL_STEP, pan, wheel};
