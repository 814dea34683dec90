use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::{Color, Error, Result};

/// Inverse scale factor of the generated image: the bigger the magnitude, the smaller the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Magnitude(NonZeroU32);

impl Magnitude {
    pub const ONE: Magnitude = Magnitude(NonZeroU32::MIN);

    /// Construct a new magnitude. Returns `None` for zero.
    /// # Example
    /// ```
    /// use qrtag_core::Magnitude;
    /// assert_eq!(Magnitude::new(2).map(Magnitude::get), Some(2));
    /// assert!(Magnitude::new(0).is_none());
    /// ```
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Scale a base length down by this magnitude.
    #[inline]
    pub fn scale(self, length: u32) -> u32 {
        length / self.get()
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Magnitude {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value).ok_or(Error::InvalidMagnitude(value))
    }
}

/// How the width of a label raster is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelSizing {
    /// A fixed width fitted for 5 character captions and 4 digit indices at the default font
    /// size. Keeps every generated image laid out identically.
    #[default]
    Fixed,
    /// The width of the rendered text, from the glyph advances.
    Measured,
}

/// Where the label font comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontSource {
    /// The monospaced face bundled with the library.
    #[default]
    Embedded,
    /// A TrueType file read when the font is loaded.
    File(PathBuf),
}

/// Layout and style of the generated images.
///
/// Lengths are stored at magnitude 1; the accessors return them scaled down by the
/// [Magnitude].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_pixel_size: u32,
    base_font_size: u32,
    label_padding: u32,
    fixed_label_width: u32,
    magnitude: Magnitude,
    foreground: Color,
    background: Color,
    label_sizing: LabelSizing,
    font: FontSource,
}

impl Config {
    pub const DEFAULT_PIXEL_SIZE: u32 = 1024;
    pub const DEFAULT_FONT_SIZE: u32 = 150;
    pub const DEFAULT_LABEL_PADDING: u32 = 20;
    pub const DEFAULT_LABEL_WIDTH: u32 = 670;

    /// Construct the default configuration: a 1024 px black on white code with 150 px labels.
    pub fn new() -> Self {
        Self {
            base_pixel_size: Self::DEFAULT_PIXEL_SIZE,
            base_font_size: Self::DEFAULT_FONT_SIZE,
            label_padding: Self::DEFAULT_LABEL_PADDING,
            fixed_label_width: Self::DEFAULT_LABEL_WIDTH,
            magnitude: Magnitude::ONE,
            foreground: Color::BLACK,
            background: Color::WHITE,
            label_sizing: LabelSizing::Fixed,
            font: FontSource::Embedded,
        }
    }

    /// Set the magnitude. Fails for zero.
    pub fn with_magnitude(mut self, magnitude: u32) -> Result<Self> {
        self.magnitude = Magnitude::try_from(magnitude)?;
        Ok(self)
    }

    /// Set the colors of the QR modules and label text (`foreground`) and of the empty space
    /// around them (`background`).
    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Set the side of the QR raster at magnitude 1.
    pub fn with_pixel_size(mut self, pixel_size: u32) -> Self {
        self.base_pixel_size = pixel_size;
        self
    }

    /// Set the label font size at magnitude 1.
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.base_font_size = font_size;
        self
    }

    pub fn with_label_sizing(mut self, sizing: LabelSizing) -> Self {
        self.label_sizing = sizing;
        self
    }

    pub fn with_font(mut self, font: FontSource) -> Self {
        self.font = font;
        self
    }

    pub fn magnitude(&self) -> Magnitude {
        self.magnitude
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn label_sizing(&self) -> LabelSizing {
        self.label_sizing
    }

    pub fn font(&self) -> &FontSource {
        &self.font
    }

    /// Side of the square QR raster.
    pub fn pixel_size(&self) -> u32 {
        self.magnitude.scale(self.base_pixel_size)
    }

    /// Label font size in pixels, which is also the height of the label row below the code.
    pub fn font_size(&self) -> u32 {
        self.magnitude.scale(self.base_font_size)
    }

    /// Height of a single label raster.
    pub fn label_height(&self) -> u32 {
        self.magnitude.scale(self.base_font_size + self.label_padding)
    }

    /// Width of a single label raster under [LabelSizing::Fixed].
    pub fn fixed_label_width(&self) -> u32 {
        self.magnitude.scale(self.fixed_label_width)
    }

    /// Get the `(width, height)` of the final image.
    /// # Example
    /// ```
    /// use qrtag_core::Config;
    /// assert_eq!(Config::new().output_dimensions(), (1024, 1174));
    /// assert_eq!(Config::new().with_magnitude(2).unwrap().output_dimensions(), (512, 587));
    /// ```
    pub fn output_dimensions(&self) -> (u32, u32) {
        let pixel_size = self.pixel_size();
        (pixel_size, pixel_size + self.font_size())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
