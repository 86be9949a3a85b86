/// Extension-owned attribute namespace. The attributes are the durable
/// transform record; the element's `transform` style property is rebuilt from
/// them wholesale on every change.
pub const ATTR_PREFIX: &str = "data-image-control-";

/// One-time capture of the pre-extension inline style; the reset target.
/// Never overwritten once set.
pub const ATTR_DEFAULT_STYLE: &str = "data-image-control-default-style";
pub const ATTR_ROTATE_Y: &str = "data-image-control-rotateY";
pub const ATTR_ROTATE_Z: &str = "data-image-control-rotateZ";
pub const ATTR_SCALE: &str = "data-image-control-scale";
pub const ATTR_RENDER: &str = "data-image-control-render";

/// Concatenation order for the rebuilt `transform` value.
pub const TRANSFORM_ORDER: [&str; 3] = [ATTR_ROTATE_Y, ATTR_ROTATE_Z, ATTR_SCALE];
