use std::{io::IsTerminal as _, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use flipbook::{FlipbookError, RenderConfig, Rgb8};

/// Assemble a directory of still frames into an animated GIF.
#[derive(Parser, Debug)]
#[command(name = "flipbook", version)]
struct Cli {
    /// Directory containing the frames. Files are taken in byte-wise name order.
    #[arg(long = "in")]
    in_dir: PathBuf,

    /// Output GIF path. An existing file is overwritten.
    #[arg(long)]
    out: PathBuf,

    /// Frame file extension (case-insensitive).
    #[arg(long, default_value = flipbook::DEFAULT_FRAME_EXTENSION)]
    ext: String,

    /// Base settings as JSON. Flags below override individual fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output width in pixels [default: 64].
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels [default: 64].
    #[arg(long)]
    height: Option<u32>,

    /// Delay between frames in milliseconds [default: 76].
    #[arg(long)]
    delay_ms: Option<u32>,

    /// Loop count; 0 loops forever [default: 0].
    #[arg(long, conflicts_with = "no_loop")]
    repeat: Option<u16>,

    /// Play the animation once without looping.
    #[arg(long)]
    no_loop: bool,

    /// Quantizer sample factor, 1 (best) to 30 (fastest) [default: 20].
    #[arg(long)]
    quality: Option<u8>,

    /// Disable the transparent colour key.
    #[arg(long)]
    no_transparent: bool,

    /// Colour emitted as transparent, as #rrggbb [default: #000000].
    #[arg(long)]
    transparent_color: Option<Rgb8>,

    /// Log per-frame diagnostics.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_config(&self) -> anyhow::Result<RenderConfig> {
        let mut cfg = match &self.config {
            Some(path) => RenderConfig::from_path(path)?,
            None => RenderConfig {
                width: 64,
                height: 64,
                delay_ms: 76,
                ..RenderConfig::default()
            },
        };

        if let Some(width) = self.width {
            cfg.width = width;
        }
        if let Some(height) = self.height {
            cfg.height = height;
        }
        if let Some(delay_ms) = self.delay_ms {
            cfg.delay_ms = delay_ms;
        }
        if self.no_loop {
            cfg.repeat = None;
        } else if let Some(repeat) = self.repeat {
            cfg.repeat = Some(repeat);
        }
        if let Some(quality) = self.quality {
            cfg.quality = quality;
        }
        if self.no_transparent {
            cfg.transparent = false;
        }
        if let Some(color) = self.transparent_color {
            cfg.transparent_color = color;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = cli.render_config()?;
    let frames = flipbook::scan_frames_with_extension(&cli.in_dir, &cli.ext)
        .with_context(|| "scan frame directory")?;

    if frames.is_empty() {
        return Err(FlipbookError::NoFrames { dir: cli.in_dir }.into());
    }

    eprintln!("found {} frame files:", frames.len());
    for path in &frames {
        eprintln!("  {}", path.display());
    }

    let stats = flipbook::assemble_gif(&frames, &cli.out, &cfg)
        .with_context(|| format!("assemble gif '{}'", cli.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {} skipped)",
        cli.out.display(),
        stats.frames_encoded,
        stats.skipped.len()
    );
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(level)
        .with_target(false)
        .init();
}
