//! Read single pixels and describe their color.

use pixbox_image::{ImageError, Rgba8Image};

use crate::color::luminance_u8;

/// The channel values of one pixel together with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelInfo {
    /// Column of the pixel.
    pub x: usize,
    /// Row of the pixel.
    pub y: usize,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl PixelInfo {
    /// Read the pixel at `(x, y)` from an RGBA8 image.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the coordinates are
    /// outside the image.
    ///
    /// # Example
    ///
    /// ```
    /// use pixbox_image::Image;
    /// use pixbox_imgproc::inspect::PixelInfo;
    ///
    /// let image = Image::<u8, 4>::new([1, 1].into(), vec![255, 128, 0, 255]).unwrap();
    /// let info = PixelInfo::from_image(&image, 0, 0).unwrap();
    ///
    /// assert_eq!(info.hex(), "#ff8000");
    /// ```
    pub fn from_image(image: &Rgba8Image, x: usize, y: usize) -> Result<Self, ImageError> {
        let px = image.pixel(x, y)?;
        Ok(Self {
            x,
            y,
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// The color as a lowercase `#rrggbb` string.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Hue in degrees in `[0, 360]`, saturation and lightness in percent, each
    /// rounded.
    pub fn hsl(&self) -> (u16, u8, u8) {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        // achromatic
        if max == min {
            return (0, 0, (l * 100.0).round() as u8);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let h = sector / 6.0;

        // a hue of 359.5 or more rounds up to 360, not 0
        let hue = (h * 360.0).round() as u16;
        (hue, (s * 100.0).round() as u8, (l * 100.0).round() as u8)
    }

    /// Each channel as a rounded percentage of full scale, in R, G, B, A order.
    pub fn channel_percentages(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|v| (v as f64 / 255.0 * 100.0).round() as u8)
    }

    /// The luma of the pixel, as computed by the grayscale conversion.
    pub fn luminance(&self) -> u8 {
        luminance_u8(self.r, self.g, self.b)
    }
}

impl std::fmt::Display for PixelInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (h, s, l) = self.hsl();
        write!(
            f,
            "({}, {}) rgba({}, {}, {}, {}) {} hsl({}, {}%, {}%)",
            self.x,
            self.y,
            self.r,
            self.g,
            self.b,
            self.a,
            self.hex(),
            h,
            s,
            l
        )
    }
}
