//! Composition of the grayscale conversion and the neighborhood filter.
//!
//! The order is fixed: when enabled, grayscale runs before smoothing. The
//! source image is only borrowed, so the pipeline can be re-run against the
//! same source with different parameters.

use pixbox_image::{ImageError, ImageSize, Rgba8Image};

use crate::color;
use crate::filter::{self, NeighborhoodSize};
use crate::parallel::ExecutionStrategy;

/// Parameters of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterParams {
    /// Convert to grayscale before smoothing.
    pub grayscale: bool,
    /// The smoothing neighborhood.
    pub neighborhood: NeighborhoodSize,
    /// How rows are scheduled. Does not affect the output.
    pub strategy: ExecutionStrategy,
}

impl FilterParams {
    /// Create parameters with the default execution strategy.
    pub fn new(grayscale: bool, neighborhood: NeighborhoodSize) -> Self {
        Self {
            grayscale,
            neighborhood,
            strategy: ExecutionStrategy::default(),
        }
    }

    /// Set the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Run the pipeline on an RGBA8 image.
///
/// Computes `smooth(grayscale(src), k)` when `params.grayscale` is set and
/// `smooth(src, k)` otherwise.
///
/// # Example
///
/// ```
/// use pixbox_image::Image;
/// use pixbox_imgproc::filter::NeighborhoodSize;
/// use pixbox_imgproc::pipeline::{process, FilterParams};
///
/// let image = Image::<u8, 4>::new([1, 1].into(), vec![200, 100, 50, 255]).unwrap();
/// let params = FilterParams::new(true, NeighborhoodSize::Subtle);
///
/// let out = process(&image, &params).unwrap();
/// assert_eq!(out.as_slice(), &[124, 124, 124, 255]);
/// ```
pub fn process(src: &Rgba8Image, params: &FilterParams) -> Result<Rgba8Image, ImageError> {
    let kernel_size = params.neighborhood.kernel_size();
    smooth_with(src, kernel_size, params.grayscale, params.strategy)
}

fn smooth_with(
    src: &Rgba8Image,
    kernel_size: usize,
    grayscale: bool,
    strategy: ExecutionStrategy,
) -> Result<Rgba8Image, ImageError> {
    let start = std::time::Instant::now();
    let size = src.size();

    let mut dst = Rgba8Image::from_size_val(size, 0)?;
    if grayscale {
        log::debug!(
            "converting {}x{} image to grayscale",
            size.width,
            size.height
        );
        let gray = color::grayscale(src)?;
        log::debug!("applying {kernel_size}x{kernel_size} filter");
        filter::box_average_with_strategy(&gray, &mut dst, kernel_size, strategy)?;
    } else {
        log::debug!(
            "applying {kernel_size}x{kernel_size} filter to {}x{} image",
            size.width,
            size.height
        );
        filter::box_average_with_strategy(src, &mut dst, kernel_size, strategy)?;
    }

    log::debug!("pipeline finished in {:?}", start.elapsed());
    Ok(dst)
}

/// Run the pipeline on a raw RGBA8 buffer.
///
/// # Errors
///
/// Fails with [`ImageError::InvalidChannelShape`], [`ImageError::EmptyImage`]
/// or [`ImageError::SizeOverflow`] if `data` is not a `width * height * 4`
/// buffer.
pub fn process_rgba8(
    size: ImageSize,
    data: &[u8],
    params: &FilterParams,
) -> Result<Vec<u8>, ImageError> {
    let src = Rgba8Image::from_size_slice(size, data)?;
    Ok(process(&src, params)?.into_vec())
}

/// Convert a raw RGBA8 buffer to grayscale.
///
/// # Errors
///
/// Fails if `data` is not a `width * height * 4` buffer.
pub fn grayscale_rgba8(size: ImageSize, data: &[u8]) -> Result<Vec<u8>, ImageError> {
    let src = Rgba8Image::from_size_slice(size, data)?;
    Ok(color::grayscale(&src)?.into_vec())
}

/// Smooth a raw RGBA8 buffer with any odd kernel size.
///
/// # Errors
///
/// Fails if `data` is not a `width * height * 4` buffer or the kernel size is
/// zero or even.
pub fn smooth_rgba8(
    size: ImageSize,
    data: &[u8],
    kernel_size: usize,
) -> Result<Vec<u8>, ImageError> {
    let src = Rgba8Image::from_size_slice(size, data)?;
    Ok(filter::smooth(&src, kernel_size)?.into_vec())
}
