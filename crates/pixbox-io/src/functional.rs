use std::path::Path;

use image::ImageEncoder;
use pixbox_image::{ImageSize, Rgba8Image};

use crate::error::IoError;

/// File name used when the caller does not choose one.
pub const DEFAULT_OUTPUT_FILENAME: &str = "processed-image.png";

/// Reads an image from the given file path as RGBA8.
///
/// The method tries to read from any image format supported by the image crate
/// and converts the result to four 8-bit channels.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGBA8 image containing the image data.
pub fn read_image_any_rgba8(file_path: impl AsRef<Path>) -> Result<Rgba8Image, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(&file_path)?;
    log::debug!("read {} bytes from {}", bytes.len(), file_path.display());

    decode_image_rgba8(&bytes)
}

/// Decodes an image held in memory as RGBA8.
///
/// # Arguments
///
/// * `bytes` - The encoded image, in any format supported by the image crate.
pub fn decode_image_rgba8(bytes: &[u8]) -> Result<Rgba8Image, IoError> {
    let img = image::load_from_memory(bytes)?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Rgba8Image::new(size, img.into_rgba8().into_raw())?)
}

/// Encodes an RGBA8 image as PNG.
///
/// # Arguments
///
/// * `image` - The image to encode.
///
/// # Returns
///
/// The PNG file contents.
///
/// # Errors
///
/// Fails with [`IoError::ImageTooLarge`] if a dimension does not fit in `u32`.
pub fn encode_image_png_rgba8(image: &Rgba8Image) -> Result<Vec<u8>, IoError> {
    let (width, height) = encoder_size(image.size())?;

    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    encoder.write_image(
        image.as_slice(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

// the png header stores each dimension as a u32
fn encoder_size(size: ImageSize) -> Result<(u32, u32), IoError> {
    let too_large = || IoError::ImageTooLarge(size.width, size.height);
    let width = u32::try_from(size.width).map_err(|_| too_large())?;
    let height = u32::try_from(size.height).map_err(|_| too_large())?;
    Ok((width, height))
}

/// Writes an RGBA8 image to the given path as PNG.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The image to write.
pub fn write_image_png_rgba8(
    file_path: impl AsRef<Path>,
    image: &Rgba8Image,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let png_data = encode_image_png_rgba8(image)?;
    std::fs::write(file_path, &png_data)?;
    log::debug!("wrote {} bytes to {}", png_data.len(), file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> Result<Rgba8Image, IoError> {
        #[rustfmt::skip]
        let data = vec![
            255, 0, 0, 255,     0, 255, 0, 128,     0, 0, 255, 0,
            10, 20, 30, 40,     50, 60, 70, 80,     90, 100, 110, 120,
        ];
        Ok(Rgba8Image::new([3, 2].into(), data)?)
    }

    #[test]
    fn read_missing_file() {
        let res = read_image_any_rgba8("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn decode_garbage() {
        let res = decode_image_rgba8(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));
    }

    #[test]
    fn write_read_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join(DEFAULT_OUTPUT_FILENAME);

        let image = sample_image()?;
        write_image_png_rgba8(&file_path, &image)?;

        let read = read_image_any_rgba8(&file_path)?;
        assert_eq!(read, image);

        Ok(())
    }

    #[test]
    fn encoder_size_fits_u32() -> Result<(), IoError> {
        let image = sample_image()?;
        assert_eq!(encoder_size(image.size())?, (3, 2));
        Ok(())
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn encoder_size_rejects_dimensions_beyond_u32() {
        let width = u32::MAX as usize + 1;
        let res = encoder_size(ImageSize { width, height: 1 });
        assert!(matches!(res, Err(IoError::ImageTooLarge(w, 1)) if w == width));

        let res = encoder_size(ImageSize {
            width: 1,
            height: usize::MAX,
        });
        assert!(matches!(res, Err(IoError::ImageTooLarge(1, h)) if h == usize::MAX));
    }

    #[test]
    fn decode_rgb_adds_opaque_alpha() -> Result<(), IoError> {
        let rgb = image::RgbImage::from_raw(1, 1, vec![1, 2, 3]).ok_or_else(|| {
            IoError::InvalidImageType("failed to build test image".to_string())
        })?;
        let mut buf = Vec::new();
        rgb.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)?;

        let image = decode_image_rgba8(&buf)?;
        assert_eq!(image.as_slice(), &[1, 2, 3, 255]);

        Ok(())
    }
}
