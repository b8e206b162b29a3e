#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image filtering module.
pub mod filter;

/// pixel inspection utilities.
pub mod inspect;

/// module containing parallelization utilities.
pub mod parallel;

/// grayscale and smoothing composition.
pub mod pipeline;
