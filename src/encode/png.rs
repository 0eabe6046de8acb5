use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{StrokesError, StrokesResult};
use crate::render::raster::FrameRGBA;

/// Writes each frame to `<dir>/<prefix><index>.png` (straight alpha).
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    cfg: Option<SinkConfig>,
    written: Vec<PathBuf>,
    scratch: Vec<u8>,
}

impl PngSequenceSink {
    /// Sink writing into `dir` (created on `begin`).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: "frame-".to_owned(),
            cfg: None,
            written: Vec::new(),
            scratch: Vec::new(),
        }
    }

    /// Use `prefix` instead of `frame-` for file names.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}{:05}.png", self.prefix, idx.0))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> StrokesResult<()> {
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("failed to create output directory '{}'", self.dir.display())
        })?;
        self.cfg = Some(cfg);
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> StrokesResult<()> {
        let Some(cfg) = &self.cfg else {
            return Err(StrokesError::render("push_frame called before begin"));
        };
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(StrokesError::render(format!(
                "frame {} is {}x{}, sink expects {}x{}",
                idx.0, frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let path = self.frame_path(idx);
        write_png(&path, frame, &mut self.scratch)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> StrokesResult<()> {
        tracing::debug!(dir = %self.dir.display(), frames = self.written.len(), "png sequence written");
        Ok(())
    }
}

/// Write one frame as a PNG file, converting premultiplied pixels to straight alpha.
pub fn write_png(path: &Path, frame: &FrameRGBA, scratch: &mut Vec<u8>) -> StrokesResult<()> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(StrokesError::render(format!(
            "frame buffer holds {} bytes, expected {expected}",
            frame.data.len()
        )));
    }
    scratch.clear();
    scratch.extend_from_slice(&frame.data);
    if frame.premultiplied {
        unpremultiply_rgba8(scratch);
    }
    image::save_buffer_with_format(
        path,
        scratch,
        frame.width,
        frame.height,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

fn unpremultiply_rgba8(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
