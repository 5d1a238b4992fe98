use image::RgbaImage;

use crate::{
    config::RenderConfig,
    foundation::{
        core::FrameIndex,
        error::{FlipbookError, FlipbookResult},
    },
};

/// Encoder session contract: `begin`, then `push_frame` per frame, then `end`.
///
/// Ordering contract: `push_frame` is called with strictly increasing `FrameIndex` values, and
/// every frame has the width/height given to `begin`. Session settings (loop count, delay,
/// quality, transparency) are global and fixed at `begin`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: &RenderConfig) -> FlipbookResult<()>;
    /// Push one frame in playback order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &RgbaImage) -> FlipbookResult<()>;
    /// Called once after the last frame. Returns only after all output is flushed.
    fn end(&mut self) -> FlipbookResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<RenderConfig>,
    frames: Vec<(FrameIndex, RgbaImage)>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The config captured in `begin`, if any.
    pub fn config(&self) -> Option<&RenderConfig> {
        self.cfg.as_ref()
    }

    /// Captured frames in playback order.
    pub fn frames(&self) -> &[(FrameIndex, RgbaImage)] {
        &self.frames
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: &RenderConfig) -> FlipbookResult<()> {
        self.cfg = Some(cfg.clone());
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RgbaImage) -> FlipbookResult<()> {
        if self.cfg.is_none() {
            return Err(FlipbookError::validation("in-memory sink not started"));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> FlipbookResult<()> {
        self.ended = true;
        Ok(())
    }
}
