/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] pixbox_image::ImageError),

    /// Error to decode or encode the image.
    #[error("Failed to decode the image. {0}")]
    ImageDecodeError(#[from] image::ImageError),

    /// The image is too large to encode.
    #[error("Image of size {0}x{1} exceeds the encoder limits")]
    ImageTooLarge(usize, usize),

    /// The file is not a recognized image format.
    #[error("Invalid file type. Please upload an image file: {0}")]
    InvalidImageType(String),

    /// The file exceeds the upload size ceiling.
    #[error("File is too large. Maximum size is {max_mb}MB.")]
    FileTooLarge {
        /// Size of the rejected file in bytes.
        size: u64,
        /// The ceiling in whole mebibytes.
        max_mb: u64,
    },
}
