/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image has a zero dimension.
    #[error("Image dimensions must be positive, got {0}x{1}")]
    EmptyImage(usize, usize),

    /// Error when the number of values implied by the image size overflows.
    #[error("Image size {0}x{1} is too large to address")]
    SizeOverflow(usize, usize),

    /// Error when the source and destination image sizes do not match.
    #[error("Invalid image size. Expected {0}x{1}, got {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds for image of size {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the kernel size is zero or even.
    #[error("Kernel size must be odd and >= 1, got {0}")]
    InvalidKernelSize(usize),

    /// Error when the worker pool could not be set up.
    #[error("Parallel execution failed: {0}")]
    ParallelError(String),
}

impl ImageError {
    /// Returns true if the error describes a malformed or mismatched pixel buffer.
    pub fn is_buffer_error(&self) -> bool {
        matches!(
            self,
            ImageError::InvalidChannelShape(..)
                | ImageError::EmptyImage(..)
                | ImageError::SizeOverflow(..)
                | ImageError::InvalidImageSize(..)
        )
    }

    /// Returns true if the error describes an invalid kernel size.
    pub fn is_kernel_error(&self) -> bool {
        matches!(self, ImageError::InvalidKernelSize(_))
    }
}
