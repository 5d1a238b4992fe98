//! Flipbook assembles a directory of still frames into an animated GIF.
//!
//! - [`scan_frames`] lists the frames of a directory in playback order
//! - [`assemble_gif`] decodes each frame, scales it onto a fixed-size raster and encodes it
//! - [`RenderConfig`] carries size, timing, looping and transparency settings for a run
#![forbid(unsafe_code)]

pub mod assemble;
pub mod assets;
pub mod config;
pub mod encode;
pub mod foundation;
pub mod render;
pub mod scan;

pub use assemble::{AssembleStats, assemble_frames, assemble_gif};
pub use config::RenderConfig;
pub use encode::gif::GifSink;
pub use encode::sink::{FrameSink, InMemorySink};
pub use foundation::core::{FrameIndex, Rgb8};
pub use foundation::error::{FlipbookError, FlipbookResult};
pub use render::Raster;
pub use scan::{DEFAULT_FRAME_EXTENSION, scan_frames, scan_frames_with_extension};
