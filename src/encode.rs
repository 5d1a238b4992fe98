//! Encoding sinks.
//!
//! Sinks consume rendered frames in playback order and are driven by
//! [`crate::assemble::assemble_frames`].

/// GIF file output via the `gif` crate.
pub mod gif;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
