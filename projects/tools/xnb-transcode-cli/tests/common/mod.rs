#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use xnb_transcode_cli::batch::{BatchObserver, FileFailure};

/// Pixels of [`color_xnb`] textures built by [`write_valid`]: red, green,
/// translucent blue, transparent.
pub const PIXELS_2X2: [u8; 16] = [
    255, 0, 0, 255, //
    0, 255, 0, 255, //
    0, 0, 255, 128, //
    0, 0, 0, 0,
];

/// Minimal XNA 4.0 `Color` texture.
pub fn color_xnb(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    const READER: &str = "Microsoft.Xna.Framework.Content.Texture2DReader";

    let mut payload = vec![1u8, READER.len() as u8];
    payload.extend_from_slice(READER.as_bytes());
    payload.extend_from_slice(&0i32.to_le_bytes()); // reader version
    payload.push(0); // shared resources
    payload.push(1); // primary type id
    payload.extend_from_slice(&0i32.to_le_bytes()); // SurfaceFormat.Color
    payload.extend_from_slice(&width.to_le_bytes());
    payload.extend_from_slice(&height.to_le_bytes());
    payload.extend_from_slice(&1u32.to_le_bytes());
    payload.extend_from_slice(&(pixels.len() as u32).to_le_bytes());
    payload.extend_from_slice(pixels);

    let mut data = b"XNBw\x05\x00".to_vec();
    data.extend_from_slice(&((10 + payload.len()) as u32).to_le_bytes());
    data.extend_from_slice(&payload);
    data
}

pub fn write(root: &Path, relative: &str, data: &[u8]) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, data).unwrap();
    path
}

pub fn write_valid(root: &Path, relative: &str) -> PathBuf {
    write(root, relative, &color_xnb(2, 2, &PIXELS_2X2))
}

pub fn write_corrupt(root: &Path, relative: &str) -> PathBuf {
    let mut data = color_xnb(2, 2, &PIXELS_2X2);
    data.truncate(data.len() - 3);
    write(root, relative, &data)
}

/// Records every progress callback.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<(usize, usize, PathBuf, bool)>,
}

impl BatchObserver for RecordingObserver {
    fn on_file_finished(
        &mut self,
        processed: usize,
        total: usize,
        path: &Path,
        failure: Option<&FileFailure>,
    ) {
        self.events
            .push((processed, total, path.to_path_buf(), failure.is_none()));
    }
}
