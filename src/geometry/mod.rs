pub(crate) mod color;
pub(crate) mod path;
pub(crate) mod transform;
pub(crate) mod view_box;
