pub(crate) mod code_point;
pub(crate) mod model;
