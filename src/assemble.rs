use std::path::{Path, PathBuf};

use crate::{
    assets::decode_frame,
    config::RenderConfig,
    encode::{gif::GifSink, sink::FrameSink},
    foundation::{core::FrameIndex, error::FlipbookResult},
    render::Raster,
};

/// Outcome of one assembly run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssembleStats {
    /// Frames handed to the sink.
    pub frames_encoded: u64,
    /// Inputs that failed to decode, in input order.
    pub skipped: Vec<PathBuf>,
}

/// Encode `paths` in order into a GIF at `out_path`, replacing any existing file.
///
/// Frames that fail to decode are logged and skipped. An empty `paths` is not special-cased and
/// produces a GIF with no frames.
pub fn assemble_gif(
    paths: &[PathBuf],
    out_path: impl AsRef<Path>,
    cfg: &RenderConfig,
) -> FlipbookResult<AssembleStats> {
    let mut sink = GifSink::new(out_path.as_ref());
    assemble_frames(paths, cfg, &mut sink)
}

/// Decode each path, draw it onto one reused raster and push the raster into `sink`.
#[tracing::instrument(skip_all, fields(inputs = paths.len(), width = cfg.width, height = cfg.height))]
pub fn assemble_frames(
    paths: &[PathBuf],
    cfg: &RenderConfig,
    sink: &mut dyn FrameSink,
) -> FlipbookResult<AssembleStats> {
    cfg.validate()?;
    sink.begin(cfg)?;

    let mut raster = Raster::new(cfg.width, cfg.height)?;
    let mut stats = AssembleStats::default();

    for path in paths {
        let img = match decode_frame(path) {
            Ok(img) => img,
            Err(err) if err.is_frame_local() => {
                tracing::error!(path = %path.display(), error = %err, "skipping frame");
                stats.skipped.push(path.clone());
                continue;
            }
            Err(err) => return Err(err),
        };

        raster.clear();
        raster.draw_scaled(&img);

        let idx = FrameIndex(stats.frames_encoded);
        sink.push_frame(idx, raster.pixels())?;
        stats.frames_encoded += 1;
        tracing::debug!(
            path = %path.display(),
            frame = idx.0,
            src_width = img.width(),
            src_height = img.height(),
            "encoded frame"
        );
    }

    sink.end()?;
    tracing::info!(
        encoded = stats.frames_encoded,
        skipped = stats.skipped.len(),
        "assembly finished"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/assemble.rs"]
mod tests;
