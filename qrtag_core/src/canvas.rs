use image::RgbaImage;

use crate::Color;

/// A rectangular grid of RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Return a fully transparent canvas of `width` by `height` pixels.
    #[inline]
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Return a canvas of `width` by `height` pixels filled with `color`.
    #[inline]
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, color.into()),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the `(width, height)` of the canvas.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Get the color at position `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|pixel| Color::from(*pixel))
    }

    /// Set the color at position `(x, y)`.
    /// # Panics
    /// Panics if position `(x, y)` is out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let (width, height) = self.dimensions();
        let pixel = self.image.get_pixel_mut_checked(x, y).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the size is {}x{} but the index is ({}, {})",
                width, height, x, y
            )
        });
        *pixel = color.into();
    }

    /// Fill a rectangle with its upper-left corner at (`x`, `y`) of size `width` and `height` with
    /// `color`.
    /// # Panics
    /// Panics if any access is out of bounds.
    pub fn fill(&mut self, color: Color, x: u32, y: u32, width: u32, height: u32) {
        for row in y..(y + height) {
            for col in x..(x + width) {
                self.set(col, row, color);
            }
        }
    }

    /// Copy `src` onto this canvas with its upper-left corner at (`x`, `y`).
    ///
    /// Destination pixels are replaced, not blended, so transparent source pixels erase whatever
    /// was underneath. The part of `src` falling outside of the canvas is clipped.
    /// # Example
    /// ```
    /// use qrtag_core::{Canvas, Color};
    /// let mut dst = Canvas::filled(4, 4, Color::WHITE);
    /// dst.place(&Canvas::transparent(8, 1), 2, 0);
    /// assert_eq!(dst.get(1, 0), Some(Color::WHITE));
    /// assert_eq!(dst.get(2, 0), Some(Color::TRANSPARENT));
    /// assert_eq!(dst.get(2, 1), Some(Color::WHITE));
    /// ```
    pub fn place(&mut self, src: &Canvas, x: u32, y: u32) {
        let cols = src.width().min(self.width().saturating_sub(x));
        let rows = src.height().min(self.height().saturating_sub(y));
        for j in 0..rows {
            for i in 0..cols {
                let pixel = *src.image.get_pixel(i, j);
                self.image.put_pixel(x + i, y + j, pixel);
            }
        }
    }

    /// Peek at the underlying image.
    #[inline]
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl From<RgbaImage> for Canvas {
    fn from(image: RgbaImage) -> Self {
        Self { image }
    }
}

impl From<Canvas> for RgbaImage {
    fn from(value: Canvas) -> Self {
        value.image
    }
}

impl AsRef<Canvas> for Canvas {
    fn as_ref(&self) -> &Canvas {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_place_clips_to_destination() {
        let mut dst = Canvas::transparent(3, 3);
        let src = Canvas::filled(5, 5, Color::BLACK);
        dst.place(&src, 1, 1);
        for y in 0..3 {
            for x in 0..3 {
                let expected = if x >= 1 && y >= 1 { Color::BLACK } else { Color::TRANSPARENT };
                assert_eq!(dst.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_place_outside_is_noop() {
        let mut dst = Canvas::filled(2, 2, Color::WHITE);
        dst.place(&Canvas::filled(2, 2, Color::BLACK), 5, 5);
        assert_eq!(dst, Canvas::filled(2, 2, Color::WHITE));
    }

    #[test]
    fn test_fill() {
        let mut canvas = Canvas::transparent(4, 4);
        canvas.fill(Color::BLACK, 1, 2, 2, 2);
        assert_eq!(canvas.get(0, 2), Some(Color::TRANSPARENT));
        assert_eq!(canvas.get(1, 2), Some(Color::BLACK));
        assert_eq!(canvas.get(2, 3), Some(Color::BLACK));
        assert_eq!(canvas.get(3, 3), Some(Color::TRANSPARENT));
        assert_eq!(canvas.get(4, 0), None);
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the size is 2x2 but the index is (2, 0)")]
    fn test_set_out_of_bounds() {
        Canvas::transparent(2, 2).set(2, 0, Color::BLACK);
    }
}
