#![allow(dead_code)]

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use image::{Rgba, RgbaImage};

/// Fresh, empty fixture directory under `target/`.
pub fn fixture_dir(suite: &str, name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join(suite).join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_solid_png(dir: &Path, name: &str, size: u32, rgba: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(size, size, Rgba(rgba))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

pub struct DecodedFrame {
    pub width: u16,
    pub height: u16,
    pub delay: u16,
    pub rgba: Vec<u8>,
}

pub struct DecodedGif {
    pub width: u16,
    pub height: u16,
    pub repeat: gif::Repeat,
    pub frames: Vec<DecodedFrame>,
}

pub fn decode_gif(path: &Path) -> DecodedGif {
    let mut opts = gif::DecodeOptions::new();
    opts.set_color_output(gif::ColorOutput::RGBA);
    let mut dec = opts.read_info(File::open(path).unwrap()).unwrap();

    let mut frames = Vec::new();
    while let Some(f) = dec.read_next_frame().unwrap() {
        frames.push(DecodedFrame {
            width: f.width,
            height: f.height,
            delay: f.delay,
            rgba: f.buffer.to_vec(),
        });
    }

    DecodedGif {
        width: dec.width(),
        height: dec.height(),
        repeat: dec.repeat(),
        frames,
    }
}
