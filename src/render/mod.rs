pub(crate) mod format;
pub(crate) mod frame_loop;
pub(crate) mod handle;
pub(crate) mod raster;
pub(crate) mod svg;
pub(crate) mod timeline;
