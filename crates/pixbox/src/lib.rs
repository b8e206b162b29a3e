#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pixbox_image as image;

#[doc(inline)]
pub use pixbox_imgproc as imgproc;

#[doc(inline)]
pub use pixbox_io as io;
