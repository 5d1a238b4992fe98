use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::foundation::{
    core::Rgb8,
    error::{FlipbookError, FlipbookResult},
};

/// Settings for one conversion run. Supplied once and never mutated while assembling.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output width in pixels. Every frame is scaled to exactly this width.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Delay between frames in milliseconds.
    pub delay_ms: u32,
    /// `Some(0)` loops forever, `Some(n)` repeats `n` times, `None` plays once.
    pub repeat: Option<u16>,
    /// Quantizer sample factor, `1` (best) to `30` (fastest).
    pub quality: u8,
    /// Emit pixels equal to `transparent_color` as transparent.
    pub transparent: bool,
    pub transparent_color: Rgb8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            delay_ms: 500,
            repeat: Some(0),
            quality: 20,
            transparent: true,
            transparent_color: Rgb8::BLACK,
        }
    }
}

impl RenderConfig {
    pub const MIN_QUALITY: u8 = 1;
    pub const MAX_QUALITY: u8 = 30;

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> FlipbookResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlipbookError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_reader(r: impl Read) -> FlipbookResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| FlipbookError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> FlipbookResult<()> {
        let max = u32::from(u16::MAX);
        if self.width == 0 || self.height == 0 {
            return Err(FlipbookError::validation(
                "output width/height must be non-zero",
            ));
        }
        if self.width > max || self.height > max {
            return Err(FlipbookError::validation(format!(
                "output width/height must be at most {max} (got {}x{})",
                self.width, self.height
            )));
        }
        if !(Self::MIN_QUALITY..=Self::MAX_QUALITY).contains(&self.quality) {
            return Err(FlipbookError::validation(format!(
                "quality must be in {}..={} (got {})",
                Self::MIN_QUALITY,
                Self::MAX_QUALITY,
                self.quality
            )));
        }
        Ok(())
    }

    /// Frame delay in GIF units (1/100 s), rounded half-up.
    pub fn delay_centis(&self) -> u16 {
        let cs = (u64::from(self.delay_ms) + 5) / 10;
        u16::try_from(cs).unwrap_or(u16::MAX)
    }

    /// The colour key, if transparency is enabled.
    pub fn transparent_key(&self) -> Option<Rgb8> {
        self.transparent.then_some(self.transparent_color)
    }
}
