#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access, encoding/decoding
/// failures and rejected uploads.
pub mod error;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_any_rgba8`] for automatic format detection.
pub mod functional;

/// Checks applied to files before they are decoded.
pub mod validate;

pub use crate::error::IoError;
