use image::codecs::bmp::BmpEncoder;
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, ImageError, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::canvas::PixelBuffer;

/// Where Ctrl+S / Ctrl+O read and write unless the command line says otherwise.
pub const DEFAULT_DOCUMENT: &str = "artwork.bmp";

// ============================================================================
// ERRORS
// ============================================================================

/// Error type for image load/save
#[derive(Debug)]
pub enum IoError {
    Io(std::io::Error),
    Image(ImageError),
    InvalidDimensions { width: u32, height: u32 },
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::Io(e) => write!(f, "I/O error: {}", e),
            IoError::Image(e) => write!(f, "Image error: {}", e),
            IoError::InvalidDimensions { width, height } => {
                write!(f, "Invalid image dimensions: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::Io(e) => Some(e),
            IoError::Image(e) => Some(e),
            IoError::InvalidDimensions { .. } => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io(e)
    }
}

impl From<ImageError> for IoError {
    fn from(e: ImageError) -> Self {
        IoError::Image(e)
    }
}

// ============================================================================
// SAVE FORMATS
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveFormat {
    Bmp,
    Png,
}

impl SaveFormat {
    /// Pick the format from a path's extension, defaulting to BMP.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "png" => SaveFormat::Png,
            _ => SaveFormat::Bmp,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SaveFormat::Bmp => "bmp",
            SaveFormat::Png => "png",
        }
    }
}

// ============================================================================
// LOAD / SAVE
// ============================================================================

/// Convert the canvas to an `image` buffer (row-major RGBA8).
pub fn to_rgba_image(buffer: &PixelBuffer) -> Result<RgbaImage, IoError> {
    RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.to_rgba_bytes()).ok_or(
        IoError::InvalidDimensions {
            width: buffer.width(),
            height: buffer.height(),
        },
    )
}

pub fn from_rgba_image(img: &RgbaImage) -> Result<PixelBuffer, IoError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(IoError::InvalidDimensions { width, height });
    }
    PixelBuffer::from_rgba_bytes(width, height, img.as_raw())
        .ok_or(IoError::InvalidDimensions { width, height })
}

/// Encode the canvas and write it to `path`. The format follows the extension
/// (`.png`, anything else is written as a 32-bit BMP).
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<(), IoError> {
    let image = to_rgba_image(buffer)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match SaveFormat::from_path(path) {
        SaveFormat::Bmp => {
            let mut encoder = BmpEncoder::new(&mut writer);
            encoder.encode(
                image.as_raw(),
                image.width(),
                image.height(),
                image::ColorType::Rgba8,
            )?;
        }
        SaveFormat::Png => {
            let encoder = PngEncoder::new(&mut writer);
            encoder.write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                image::ColorType::Rgba8,
            )?;
        }
    }
    Ok(())
}

/// Decode any image the `image` crate recognises into a new canvas of the
/// image's size.
pub fn load_image(path: &Path) -> Result<PixelBuffer, IoError> {
    let img = image::open(path)?.to_rgba8();
    from_rgba_image(&img)
}

// ============================================================================
// FILE DIALOGS
// ============================================================================

/// A path without an extension gets the one of the format it will be
/// written in.
pub fn with_format_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        return path;
    }
    let format = SaveFormat::from_path(&path);
    path.with_extension(format.extension())
}

pub fn pick_save_path(current: &Path) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .add_filter("Bitmap", &["bmp"])
        .add_filter("PNG", &["png"]);
    if let Some(name) = current.file_name().and_then(|n| n.to_str()) {
        dialog = dialog.set_file_name(name);
    }
    dialog.save_file().map(with_format_extension)
}

pub fn pick_open_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Images", &["bmp", "png"])
        .pick_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_save_format_from_path() {
        assert_eq!(SaveFormat::from_path(Path::new("a.png")), SaveFormat::Png);
        assert_eq!(SaveFormat::from_path(Path::new("a.PNG")), SaveFormat::Png);
        assert_eq!(SaveFormat::from_path(Path::new("a.bmp")), SaveFormat::Bmp);
        assert_eq!(SaveFormat::from_path(Path::new("artwork")), SaveFormat::Bmp);
    }

    #[test]
    fn test_missing_extension_added() {
        assert_eq!(
            with_format_extension(PathBuf::from("out/artwork")),
            PathBuf::from("out/artwork.bmp")
        );
        assert_eq!(
            with_format_extension(PathBuf::from("icon.png")),
            PathBuf::from("icon.png")
        );
    }

    #[test]
    fn test_rgba_image_conversion() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.set(2, 1, crate::canvas::Color::new(9, 8, 7, 6));
        let img = to_rgba_image(&buf).unwrap();
        assert_eq!(img.get_pixel(2, 1).0, [9, 8, 7, 6]);
        assert_eq!(from_rgba_image(&img).unwrap(), buf);
    }

    #[test]
    fn test_empty_image_rejected() {
        let img = RgbaImage::new(0, 4);
        assert!(matches!(
            from_rgba_image(&img),
            Err(IoError::InvalidDimensions { width: 0, height: 4 })
        ));
    }
}
