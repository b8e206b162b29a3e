use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixbox_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size, or `None` if it overflows `usize`.
    pub fn num_pixels(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Number of values needed to store `channels` values per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::SizeOverflow`] if the count does not fit in `usize`.
    pub fn num_values(&self, channels: usize) -> Result<usize, ImageError> {
        self.num_pixels()
            .and_then(|n| n.checked_mul(channels))
            .ok_or(ImageError::SizeOverflow(self.width, self.height))
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixels are stored interleaved in row-major order, so the data has
/// length `width * height * CHANNELS` and the value of channel `c` at `(x, y)`
/// lives at `(y * width + x) * CHANNELS + c`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

/// An 8-bit RGBA image. Channel order is R, G, B, A.
pub type Rgba8Image = Image<u8, 4>;

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If either dimension is zero, the size overflows `usize` or the length of
    /// the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixbox_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 4],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 4);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::EmptyImage(size.width, size.height));
        }

        // check if the data length matches the image size
        let expected = size.num_values(CHANNELS)?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixbox_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.as_slice().len(), 10 * 20 * 4);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.num_values(CHANNELS)?];
        Image::new(size, data)
    }

    /// Create a new image by copying the given slice.
    ///
    /// Fails the same way as [`Image::new`] when the slice length does not
    /// match the size.
    pub fn from_size_slice(size: ImageSize, data: &[T]) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        Image::new(size, data.to_vec())
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable flat row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a single channel value at `[y, x, c]`, or `None` when out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, c] = index;
        if y >= self.height() || x >= self.width() || c >= CHANNELS {
            return None;
        }
        self.data.get((y * self.width() + x) * CHANNELS + c)
    }

    /// Get all the channels of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the coordinates are
    /// outside the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixbox_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     vec![1, 2, 3, 4, 5, 6, 7, 8],
    /// ).unwrap();
    ///
    /// assert_eq!(image.pixel(1, 0).unwrap(), &[5, 6, 7, 8]);
    /// assert!(image.pixel(2, 0).is_err());
    /// ```
    pub fn pixel(&self, x: usize, y: usize) -> Result<&[T], ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        let start = (y * self.width() + x) * CHANNELS;
        Ok(&self.data[start..start + CHANNELS])
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.num_pixels(), Some(200));
        assert_eq!(image_size.num_values(4), Ok(800));
        assert_eq!(ImageSize::from([3, 4]), ImageSize { width: 3, height: 4 });
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 4],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 4);
        assert_eq!(image.cols(), 10);
        assert_eq!(image.rows(), 20);

        Ok(())
    }

    #[test]
    fn image_invalid_length() {
        let res = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 15],
        );
        assert_eq!(res, Err(ImageError::InvalidChannelShape(15, 16)));
    }

    #[test]
    fn image_empty_size() {
        let res = Image::<u8, 4>::new(
            ImageSize {
                width: 0,
                height: 3,
            },
            vec![],
        );
        assert_eq!(res, Err(ImageError::EmptyImage(0, 3)));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn image_size_overflow() {
        let size = ImageSize {
            width: 1 << 62,
            height: 4,
        };
        assert_eq!(size.num_pixels(), None);
        assert_eq!(size.num_values(4), Err(ImageError::SizeOverflow(1 << 62, 4)));

        // the wrapped product would be zero, which must not match an empty buffer
        let res = Image::<u8, 4>::new(size, vec![]);
        assert_eq!(res, Err(ImageError::SizeOverflow(1 << 62, 4)));

        let res = Image::<u8, 4>::new(
            ImageSize {
                width: usize::MAX / 2,
                height: 3,
            },
            vec![0; 16],
        );
        assert!(res.is_err_and(|e| e.is_buffer_error()));

        let res = Image::<u8, 4>::from_size_val(
            ImageSize {
                width: usize::MAX,
                height: 1,
            },
            0,
        );
        assert_eq!(res, Err(ImageError::SizeOverflow(usize::MAX, 1)));
    }

    #[test]
    fn image_get() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                0, 1, 2, 3,     4, 5, 6, 7,
                8, 9, 10, 11,   12, 13, 14, 15,
            ],
        )?;
        assert_eq!(image.get([1, 0, 2]), Some(&10));
        assert_eq!(image.get([0, 1, 3]), Some(&7));
        assert_eq!(image.get([2, 0, 0]), None);
        assert_eq!(image.get([0, 0, 4]), None);
        assert_eq!(image.pixel(1, 1)?, &[12, 13, 14, 15]);
        assert_eq!(
            image.pixel(0, 2),
            Err(ImageError::PixelIndexOutOfBounds(0, 2, 2, 2))
        );

        Ok(())
    }

    #[test]
    fn image_from_slice() -> Result<(), ImageError> {
        let data = [7u8; 3 * 2 * 4];
        let image = Image::<u8, 4>::from_size_slice([3, 2].into(), &data)?;
        assert_eq!(image.into_vec(), data.to_vec());

        Ok(())
    }
}
