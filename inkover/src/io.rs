//! Image source and sink: decoding a picked file into a session source, and
//! persisting a flattened raster the way the phone app's media store did.

use std::io::Write;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use inkover_core::SourceImage;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode an image file into a session source.
///
/// Any raster format the `image` crate understands is accepted; pixels are
/// converted to RGBA8. A failure leaves the session imageless - a valid,
/// inert state.
pub fn load_image(path: &Path) -> Result<SourceImage, SourceError> {
    let decoded = image::open(path)?;
    Ok(SourceImage::new(decoded.to_rgba8()))
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("no pictures directory on this platform")]
    NoPicturesDir,
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// The save filename for an export at the given local time:
/// `Edited_<yyyyMMdd_HHmmss>.jpg`.
#[must_use]
pub fn edited_filename(at: chrono::NaiveDateTime) -> String {
    format!("Edited_{}.jpg", at.format("%Y%m%d_%H%M%S"))
}

/// Accepts a finished raster plus a suggested filename, encodes and
/// persists it, and reports the written location.
pub trait ImageSink {
    fn save(&self, raster: &RgbaImage, file_name: &str) -> Result<PathBuf, SinkError>;
}

/// Sink writing maximum-quality JPEGs into a directory.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
    /// Sink into the platform pictures directory.
    pub fn pictures() -> Result<Self, SinkError> {
        dirs::picture_dir()
            .map(Self::new)
            .ok_or(SinkError::NoPicturesDir)
    }
}

impl ImageSink for DirectorySink {
    fn save(&self, raster: &RgbaImage, file_name: &str) -> Result<PathBuf, SinkError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        let file = std::fs::File::create(&path)?;
        let mut writer = std::io::BufWriter::new(file);
        // JPEG carries no alpha; the flatten output is opaque everywhere the
        // image landed, and unreached fill encodes as black.
        let rgb = image::DynamicImage::ImageRgba8(raster.clone()).into_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, 100);
        rgb.write_with_encoder(encoder)?;
        writer.flush()?;
        log::info!("saved {}", path.display());
        Ok(path)
    }
}
