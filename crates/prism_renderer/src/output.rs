//! Writing rendered images to disk.

use crate::renderer::ImageBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0:?} (expected .png or .ppm)")]
    UnsupportedFormat(String),
}

pub type OutputResult<T> = std::result::Result<T, OutputError>;

/// Strip the alpha channel from RGBA bytes.
fn rgba_to_rgb(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4).flat_map(|px| [px[0], px[1], px[2]]).collect()
}

/// Write a binary PPM (P6) to any writer.
pub fn write_ppm<W: Write>(image: &ImageBuffer, gamma: f32, mut writer: W) -> OutputResult<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&rgba_to_rgb(&image.to_rgba(gamma)))?;
    writer.flush()?;
    Ok(())
}

/// Save an image, choosing the format from the file extension.
pub fn save_image(image: &ImageBuffer, path: impl AsRef<Path>, gamma: f32) -> OutputResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => image::save_buffer(
            path,
            &image.to_rgba(gamma),
            image.width,
            image.height,
            image::ColorType::Rgba8,
        )?,
        "ppm" => write_ppm(image, gamma, BufWriter::new(File::create(path)?))?,
        _ => return Err(OutputError::UnsupportedFormat(path.display().to_string())),
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn checker() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, Color::ONE);
        image.set(1, 1, Color::new(1.0, 0.0, 0.0));
        image
    }

    #[test]
    fn test_write_ppm() {
        let mut bytes = Vec::new();
        write_ppm(&checker(), 2.0, &mut bytes).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);

        let body = &bytes[header.len()..];
        assert_eq!(body.len(), 2 * 2 * 3);
        assert_eq!(&body[0..3], &[255, 255, 255]);
        assert_eq!(&body[3..6], &[0, 0, 0]);
        assert_eq!(&body[9..12], &[255, 0, 0]);
    }

    #[test]
    fn test_save_png_and_ppm() {
        let dir = std::env::temp_dir().join(format!("prism_output_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let png = dir.join("checker.png");
        save_image(&checker(), &png, 2.0).unwrap();
        let decoded = image::open(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 255]);

        let ppm = dir.join("checker.PPM");
        save_image(&checker(), &ppm, 2.0).unwrap();
        assert_eq!(std::fs::read(&ppm).unwrap().len(), 11 + 12);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unsupported_extension() {
        let err = save_image(&checker(), "image.exr", 2.0).unwrap_err();
        assert!(matches!(err, OutputError::UnsupportedFormat(_)));

        let err = save_image(&checker(), "no_extension", 2.0).unwrap_err();
        assert!(matches!(err, OutputError::UnsupportedFormat(_)));
    }
}
