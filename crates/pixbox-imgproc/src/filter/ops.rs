use pixbox_image::{Image, ImageError, Rgba8Image};

use super::kernels;
use crate::parallel::{self, ExecutionStrategy};

/// Divide a non-negative sum by a positive count, rounding half away from zero.
///
/// The result is clamped to the `u8` range.
#[inline]
fn round_div_u8(sum: u64, count: u64) -> u8 {
    ((2 * sum + count) / (2 * count)).min(u8::MAX as u64) as u8
}

/// Smooth an image with a square averaging kernel and execution strategy control.
///
/// Every output pixel is the per-channel average of the input pixels inside
/// the `kernel_size x kernel_size` window centered on it. Neighbors that fall
/// outside the image are skipped, so border pixels are averaged over fewer
/// samples instead of being padded.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The side length of the kernel. Must be odd.
/// * `strategy` - Execution strategy: `Serial`, `ParallelRows` or `Fixed`.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn box_average_with_strategy<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel_size: usize,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    let offset = kernels::validate_kernel_size(kernel_size)?;

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let (width, height) = (src.width(), src.height());
    let src_data = src.as_slice();

    parallel::for_each_row(strategy, dst.as_slice_mut(), width * C, |y, dst_row| {
        // clip the window to the image instead of padding it
        let y0 = y.saturating_sub(offset);
        let y1 = y.saturating_add(offset).min(height - 1);

        for (x, dst_pixel) in dst_row.chunks_exact_mut(C).enumerate() {
            let x0 = x.saturating_sub(offset);
            let x1 = x.saturating_add(offset).min(width - 1);

            let mut sum = [0u64; C];
            let mut count = 0u64;

            for sy in y0..=y1 {
                let row_start = sy * width;
                let window = &src_data[(row_start + x0) * C..(row_start + x1 + 1) * C];
                for sample in window.chunks_exact(C) {
                    sum.iter_mut()
                        .zip(sample.iter())
                        .for_each(|(acc, &v)| *acc += v as u64);
                    count += 1;
                }
            }

            if count == 0 {
                let center = (y * width + x) * C;
                dst_pixel.copy_from_slice(&src_data[center..center + C]);
                continue;
            }

            dst_pixel
                .iter_mut()
                .zip(sum.iter())
                .for_each(|(out, &s)| *out = round_div_u8(s, count));
        }
    })
}

/// Smooth an image with a square averaging kernel.
///
/// Uses [`ExecutionStrategy::ParallelRows`]. The output does not depend on the
/// strategy.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The side length of the kernel. Must be odd.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn box_average<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel_size: usize,
) -> Result<(), ImageError> {
    box_average_with_strategy(src, dst, kernel_size, ExecutionStrategy::default())
}

/// Smooth an RGBA8 image with a square averaging kernel, returning a new image.
///
/// A kernel size of one is the identity.
///
/// # Example
///
/// ```
/// use pixbox_image::{Image, ImageSize};
/// use pixbox_imgproc::filter::smooth;
///
/// let image = Image::<u8, 4>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0, 0, 0, 255, 255, 255, 255, 255],
/// )
/// .unwrap();
///
/// let smoothed = smooth(&image, 3).unwrap();
/// assert_eq!(smoothed.as_slice(), &[128, 128, 128, 255, 128, 128, 128, 255]);
/// assert!(smooth(&image, 4).is_err());
/// ```
pub fn smooth(src: &Rgba8Image, kernel_size: usize) -> Result<Rgba8Image, ImageError> {
    let mut dst = Rgba8Image::from_size_val(src.size(), 0)?;
    box_average(src, &mut dst, kernel_size)?;
    Ok(dst)
}
