pub mod decode;

pub use decode::{decode_frame, decode_frame_bytes};
