//! Frame sinks.
//!
//! Sinks consume raster frames in presentation order; they are fed by
//! [`crate::render_frames`] and [`crate::run_frame_loop`].

/// PNG file sequences.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
