use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use image::RgbaImage;

use crate::{
    config::RenderConfig,
    encode::sink::FrameSink,
    foundation::{
        core::{FrameIndex, Rgb8},
        error::{FlipbookError, FlipbookResult},
    },
    render::raster::flatten_for_palette,
};

type GifEncoder = ::gif::Encoder<BufWriter<File>>;

/// Per-session settings resolved from [`RenderConfig`] at `begin`.
#[derive(Clone, Copy, Debug)]
struct Session {
    width: u16,
    height: u16,
    delay: u16,
    speed: i32,
    key: Option<Rgb8>,
}

/// Sink that encodes frames into a GIF file.
///
/// The output file is created (or truncated) at `begin`. `end` writes the trailer, flushes and
/// syncs the file. If the sink is dropped without `end`, for instance when an error aborts the
/// run mid-way, `Drop` still writes the trailer and flushes, logging rather than returning any
/// failure.
pub struct GifSink {
    out_path: PathBuf,
    encoder: Option<GifEncoder>,
    session: Option<Session>,
    scratch: Vec<u8>,
    last_idx: Option<FrameIndex>,
    frames_written: u64,
}

impl GifSink {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            encoder: None,
            session: None,
            scratch: Vec::new(),
            last_idx: None,
            frames_written: 0,
        }
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    fn encode_err(&self, source: ::gif::EncodingError) -> FlipbookError {
        FlipbookError::Encode {
            path: self.out_path.clone(),
            source,
        }
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: &RenderConfig) -> FlipbookResult<()> {
        if self.encoder.is_some() {
            return Err(FlipbookError::validation("gif sink already started"));
        }
        cfg.validate()?;
        let session = Session {
            width: u16::try_from(cfg.width)
                .map_err(|_| FlipbookError::validation("gif width exceeds 65535"))?,
            height: u16::try_from(cfg.height)
                .map_err(|_| FlipbookError::validation("gif height exceeds 65535"))?,
            delay: cfg.delay_centis(),
            speed: i32::from(cfg.quality),
            key: cfg.transparent_key(),
        };

        let file = File::create(&self.out_path)
            .map_err(|e| FlipbookError::output(&self.out_path, e))?;
        // Frames carry local palettes, so the global colour table stays empty.
        let mut encoder =
            ::gif::Encoder::new(BufWriter::new(file), session.width, session.height, &[])
                .map_err(|e| self.encode_err(e))?;
        if let Some(repeat) = cfg.repeat {
            let repeat = match repeat {
                0 => ::gif::Repeat::Infinite,
                n => ::gif::Repeat::Finite(n),
            };
            encoder.set_repeat(repeat).map_err(|e| self.encode_err(e))?;
        }

        tracing::debug!(
            out = %self.out_path.display(),
            width = session.width,
            height = session.height,
            delay_cs = session.delay,
            repeat = ?cfg.repeat,
            key = ?session.key.map(|k| k.to_string()),
            "gif session started"
        );

        self.scratch = vec![0u8; usize::from(session.width) * usize::from(session.height) * 4];
        self.encoder = Some(encoder);
        self.session = Some(session);
        self.last_idx = None;
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RgbaImage) -> FlipbookResult<()> {
        let session = self
            .session
            .ok_or_else(|| FlipbookError::validation("gif sink not started"))?;
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(FlipbookError::validation(
                "gif sink received out-of-order frame index",
            ));
        }
        if frame.width() != u32::from(session.width) || frame.height() != u32::from(session.height)
        {
            return Err(FlipbookError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                session.width,
                session.height
            )));
        }

        flatten_for_palette(&mut self.scratch, frame.as_raw(), session.key)?;
        let mut gif_frame = ::gif::Frame::from_rgba_speed(
            session.width,
            session.height,
            &mut self.scratch,
            session.speed,
        );
        gif_frame.delay = session.delay;
        gif_frame.dispose = if session.key.is_some() {
            ::gif::DisposalMethod::Background
        } else {
            ::gif::DisposalMethod::Any
        };

        let result = match self.encoder.as_mut() {
            Some(encoder) => encoder.write_frame(&gif_frame),
            None => return Err(FlipbookError::validation("gif sink is already finalized")),
        };
        result.map_err(|e| self.encode_err(e))?;

        self.last_idx = Some(idx);
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> FlipbookResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| FlipbookError::validation("gif sink not started"))?;
        self.session = None;

        let out = |e| FlipbookError::output(&self.out_path, e);
        let writer = encoder.into_inner().map_err(out)?;
        let file = writer.into_inner().map_err(|e| out(e.into_error()))?;
        file.sync_all().map_err(out)?;

        tracing::debug!(
            out = %self.out_path.display(),
            frames = self.frames_written,
            "gif session finished"
        );
        Ok(())
    }
}

impl Drop for GifSink {
    fn drop(&mut self) {
        let Some(encoder) = self.encoder.take() else {
            return;
        };
        let flushed = encoder.into_inner().and_then(|mut w| w.flush());
        if let Err(e) = flushed {
            tracing::warn!(
                out = %self.out_path.display(),
                error = %e,
                "failed to finalize abandoned gif output"
            );
        }
    }
}
