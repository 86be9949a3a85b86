mod attrs;
mod command;
mod engine;


pub use attrs::{
    ATTR_DEFAULT_STYLE, ATTR_PREFIX, ATTR_RENDER, ATTR_ROTATE_Y, ATTR_ROTATE_Z, ATTR_SCALE,
};
pub use command::{Command, CommandSource, leading_number};
pub use engine::apply;
