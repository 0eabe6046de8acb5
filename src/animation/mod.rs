pub(crate) mod keyframes;
pub(crate) mod options;
pub(crate) mod timing;
