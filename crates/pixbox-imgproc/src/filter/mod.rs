//! Filter operations
//!
//! This module provides the neighborhood averaging filter used to smooth images.

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;

pub use kernels::NeighborhoodSize;
