use std::path::Path;

use crate::shared::frame::Frame;

/// Loads an image file as an RGB frame with the given sequence number.
pub fn load_frame(path: &Path, sequence: u64) -> Result<Frame, Box<dyn std::error::Error>> {
    let img = image::open(path)?.to_rgb8();
    let (width, height) = img.dimensions();
    Ok(Frame::new(img.into_raw(), width, height, 3, sequence))
}

/// Writes an RGB frame to an image file, format inferred from the
/// extension.
pub fn save_frame(path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
    if frame.channels() != 3 {
        return Err(format!("expected 3-channel frame, got {}", frame.channels()).into());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let img = image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .ok_or("frame data does not match its dimensions")?;
    img.save(path)?;
    Ok(())
}
