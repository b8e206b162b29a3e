use crate::parallel;
use pixbox_image::{Image, ImageError, Rgba8Image};

/// Define the RGB weights for the grayscale conversion.
const RW: f64 = 0.299;
const GW: f64 = 0.587;
const BW: f64 = 0.114;

/// Compute the luma of a single RGB triplet.
///
/// Y = round(0.299 * R + 0.587 * G + 0.114 * B)
///
/// The weighted sum is rounded half away from zero and clamped to [0, 255].
///
/// # Example
///
/// ```
/// use pixbox_imgproc::color::luminance_u8;
///
/// assert_eq!(luminance_u8(200, 100, 50), 124);
/// assert_eq!(luminance_u8(255, 255, 255), 255);
/// ```
pub fn luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = RW * r as f64 + GW * g as f64 + BW * b as f64;
    y.round().clamp(0.0, 255.0) as u8
}

/// Convert an RGBA8 image to a gray RGBA8 image using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// The R, G and B channels of the output are set to Y and alpha is copied
/// unchanged.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output gray RGBA image.
///
/// Precondition: the input and output images must have the same size.
pub fn gray_from_rgba_u8(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // parallelize the grayscale conversion by rows
    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let y = luminance_u8(src_pixel[0], src_pixel[1], src_pixel[2]);
        dst_pixel[0] = y;
        dst_pixel[1] = y;
        dst_pixel[2] = y;
        dst_pixel[3] = src_pixel[3];
    });

    Ok(())
}

/// Convert an RGBA8 image to grayscale, returning a new image.
///
/// # Example
///
/// ```
/// use pixbox_image::{Image, ImageSize};
/// use pixbox_imgproc::color::grayscale;
///
/// let image = Image::<u8, 4>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![200, 100, 50, 255],
/// )
/// .unwrap();
///
/// let gray = grayscale(&image).unwrap();
/// assert_eq!(gray.as_slice(), &[124, 124, 124, 255]);
/// ```
pub fn grayscale(src: &Rgba8Image) -> Result<Rgba8Image, ImageError> {
    let mut dst = Rgba8Image::from_size_val(src.size(), 0)?;
    gray_from_rgba_u8(src, &mut dst)?;
    Ok(dst)
}
