use std::io::Cursor;

use image::ImageFormat;
use log::debug;

use qrtag_core::{format_index, Canvas, Color, Config, Label, Result};

use crate::compose::{place_below, place_right};
use crate::{Encoder, LabelFont, RasterRenderer};

/// Generator of labeled QR codes.
///
/// The font is loaded once on construction, so a single generator can produce any number of
/// images.
pub struct Generator {
    config: Config,
    font: LabelFont,
    encoder: Encoder,
    renderer: RasterRenderer,
}

impl Generator {
    /// Construct a new generator, loading the font configured in `config`.
    pub fn new(config: Config) -> Result<Self> {
        let font = LabelFont::load(config.font())?;
        let renderer = RasterRenderer::new()
            .with_dark_color(config.foreground())
            .with_light_color(config.background());
        Ok(Self {
            config,
            font,
            encoder: Encoder::new(),
            renderer,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compose the labeled QR code for `url` without encoding it.
    ///
    /// The code takes the top [Config::pixel_size] square; `label` and the zero-padded `index`
    /// fill the row below it, side by side.
    pub fn compose(&self, url: &str, label: &str, index: u32) -> Result<Canvas> {
        let label = Label::new(label)?;
        let index = format_index(index)?;

        let matrix = self.encoder.encode(url)?;
        let pixel_size = self.config.pixel_size();
        let code = self.renderer.render(&matrix, pixel_size)?;
        debug!(
            "rendered {} modules into {} px for {} B of data",
            matrix.size(),
            pixel_size,
            url.len()
        );

        let foreground = self.config.foreground();
        let left = self.font.rasterize(label.as_str(), foreground, &self.config);
        let right = self.font.rasterize(&index, foreground, &self.config);
        let row = place_right(&left, &right);
        let canvas = place_below(&code, &row, self.config.font_size());
        debug!(
            "composed '{}' and '{}' into a {}x{} image",
            label,
            index,
            canvas.width(),
            canvas.height()
        );
        Ok(canvas)
    }

    /// Generate the labeled QR code for `url` as PNG bytes.
    /// # Example
    /// ```
    /// use qrtag_core::Config;
    /// use qrtag_encode::Generator;
    /// let generator = Generator::new(Config::new().with_magnitude(4).unwrap()).unwrap();
    /// let png = generator.generate("https://example.com/box/0001.html", "boxyd", 1).unwrap();
    /// assert!(png.starts_with(b"\x89PNG"));
    /// ```
    pub fn generate(&self, url: &str, label: &str, index: u32) -> Result<Vec<u8>> {
        encode_png(&self.compose(url, label, index)?)
    }
}

/// Encode `canvas` as a PNG byte stream.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    canvas.as_image().write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Generate a black on white labeled QR code with the default configuration.
///
/// The font is loaded on every call; use a [Generator] to produce many images.
pub fn generate(url: &str, label: &str, index: u32) -> Result<Vec<u8>> {
    Generator::new(Config::new())?.generate(url, label, index)
}

/// Same as [generate], with the image scaled down by `magnitude`.
pub fn generate_with_magnitude(url: &str, label: &str, index: u32, magnitude: u32) -> Result<Vec<u8>> {
    let config = Config::new().with_magnitude(magnitude)?;
    Generator::new(config)?.generate(url, label, index)
}

/// Same as [generate_with_magnitude], with custom `foreground` and `background` colors.
pub fn generate_with_color(
    url: &str,
    label: &str,
    index: u32,
    magnitude: u32,
    foreground: Color,
    background: Color,
) -> Result<Vec<u8>> {
    let config = Config::new()
        .with_magnitude(magnitude)?
        .with_colors(foreground, background);
    Generator::new(config)?.generate(url, label, index)
}
