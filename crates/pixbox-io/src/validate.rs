use std::io::Read;
use std::path::Path;

use crate::error::IoError;

/// Default upload ceiling: 10 MiB.
pub const DEFAULT_MAX_SIZE: u64 = 10 * 1024 * 1024;

const MIB: u64 = 1024 * 1024;

// enough bytes for the magic numbers of every format the image crate guesses
const HEADER_LEN: u64 = 64;

/// Constraints a file must satisfy before it is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Largest accepted file size in bytes.
    pub max_size: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl UploadPolicy {
    /// Create a policy with the given size ceiling in bytes.
    pub fn new(max_size: u64) -> Self {
        Self { max_size }
    }

    fn check_size(&self, size: u64) -> Result<(), IoError> {
        if size > self.max_size {
            // rounded like the message shown to users
            let max_mb = (self.max_size + MIB / 2) / MIB;
            return Err(IoError::FileTooLarge { size, max_mb });
        }
        Ok(())
    }

    /// Validate an in-memory file.
    ///
    /// The content must be recognized as an image and must not exceed the
    /// size ceiling.
    pub fn validate_bytes(&self, bytes: &[u8]) -> Result<image::ImageFormat, IoError> {
        let format = image::guess_format(bytes)
            .map_err(|_| IoError::InvalidImageType("unrecognized content".to_string()))?;
        self.check_size(bytes.len() as u64)?;
        Ok(format)
    }

    /// Validate a file on disk.
    ///
    /// The format is guessed from the file header and falls back to the
    /// extension. Only the header is read.
    pub fn validate_file(&self, file_path: impl AsRef<Path>) -> Result<image::ImageFormat, IoError> {
        let file_path = file_path.as_ref();
        if !file_path.exists() {
            return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
        }

        let size = std::fs::metadata(file_path)?.len();

        let mut header = Vec::with_capacity(HEADER_LEN as usize);
        std::fs::File::open(file_path)?
            .take(HEADER_LEN)
            .read_to_end(&mut header)?;

        let format = image::guess_format(&header)
            .or_else(|_| image::ImageFormat::from_path(file_path))
            .map_err(|_| IoError::InvalidImageType(file_path.display().to_string()))?;

        self.check_size(size)?;

        log::debug!(
            "accepted {} ({:?}, {} bytes)",
            file_path.display(),
            format,
            size
        );
        Ok(format)
    }
}

/// Validate a file on disk against [`UploadPolicy::default`].
pub fn validate_image_file(file_path: impl AsRef<Path>) -> Result<image::ImageFormat, IoError> {
    UploadPolicy::default().validate_file(file_path)
}
