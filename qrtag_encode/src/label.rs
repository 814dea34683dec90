use std::path::Path;

use itertools::Itertools;
use log::debug;
use rusttype::{point, Font, Scale};

use qrtag_core::{Canvas, Color, Config, Error, FontSource, LabelSizing, Result};

/// DejaVu Sans Mono, see `assets/DejaVuSansMono.LICENSE`.
static EMBEDDED_FONT: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

/// A parsed font face used to rasterize labels.
pub struct LabelFont {
    font: Font<'static>,
}

impl LabelFont {
    /// Load the font face from `source`.
    pub fn load(source: &FontSource) -> Result<Self> {
        let font = match source {
            FontSource::Embedded => Font::try_from_bytes(EMBEDDED_FONT)
                .ok_or_else(|| Error::FontParse(Path::new("<embedded>").to_path_buf()))?,
            FontSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| Error::FontRead {
                    path: path.clone(),
                    source,
                })?;
                Font::try_from_vec(bytes).ok_or_else(|| Error::FontParse(path.clone()))?
            }
        };
        debug!("loaded label font from {:?} with {} glyphs", source, font.glyph_count());
        Ok(Self { font })
    }

    /// Get the rusttype [Scale] for an em size of `px` pixels.
    ///
    /// rusttype scales so that ascent minus descent spans the requested height, while font sizes
    /// are expressed in ems.
    fn scale(&self, px: f32) -> Scale {
        let metrics = self.font.v_metrics_unscaled();
        let units_per_em = self.font.units_per_em().max(1) as f32;
        Scale::uniform(px * (metrics.ascent - metrics.descent) / units_per_em)
    }

    /// Measure the width in pixels of `text` at the font size of `config`.
    /// # Example
    /// ```
    /// use qrtag_core::{Config, FontSource};
    /// use qrtag_encode::LabelFont;
    /// let font = LabelFont::load(&FontSource::Embedded).unwrap();
    /// let config = Config::new();
    /// assert_eq!(font.measure("", &config), 0);
    /// assert!(font.measure("0001", &config) < font.measure("00001", &config));
    /// ```
    pub fn measure(&self, text: &str, config: &Config) -> u32 {
        let scale = self.scale(config.font_size() as f32);
        let advances: f32 = text
            .chars()
            .map(|c| self.font.glyph(c).scaled(scale).h_metrics().advance_width)
            .sum();
        let kerning: f32 = text
            .chars()
            .tuple_windows()
            .map(|(first, second)| self.font.pair_kerning(scale, first, second))
            .sum();
        (advances + kerning).max(0.0).ceil() as u32
    }

    /// Rasterize `text` in `color` onto a new transparent canvas.
    ///
    /// The canvas is [Config::label_height] pixels tall and its width follows
    /// [Config::label_sizing]. The text is left aligned with its baseline at [Config::font_size];
    /// glyphs or parts of glyphs outside of the canvas are dropped.
    pub fn rasterize(&self, text: &str, color: Color, config: &Config) -> Canvas {
        let font_size = config.font_size();
        let width = match config.label_sizing() {
            LabelSizing::Fixed => config.fixed_label_width(),
            LabelSizing::Measured => self.measure(text, config),
        };
        let mut canvas = Canvas::transparent(width, config.label_height());
        let scale = self.scale(font_size as f32);
        for glyph in self.font.layout(text, scale, point(0.0, font_size as f32)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let (x, y) = (gx as i32 + bb.min.x, gy as i32 + bb.min.y);
                if x < 0 || y < 0 {
                    return;
                }
                let (x, y) = (x as u32, y as u32);
                let Some(current) = canvas.get(x, y) else {
                    return;
                };
                let ink = color.with_coverage(coverage);
                if ink.a > current.a {
                    canvas.set(x, y, ink);
                }
            });
        }
        canvas
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use qrtag_core::ErrorKind;

    use super::*;

    fn embedded() -> LabelFont {
        LabelFont::load(&FontSource::Embedded).unwrap()
    }

    fn ink(canvas: &Canvas) -> Vec<(u32, u32, Color)> {
        let (width, height) = canvas.dimensions();
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter_map(|(x, y)| canvas.get(x, y).filter(|c| c.a > 0).map(|c| (x, y, c)))
            .collect()
    }

    #[test]
    fn test_fixed_dimensions() {
        let font = embedded();
        for magnitude in [1, 2, 5] {
            let config = Config::new().with_magnitude(magnitude).unwrap();
            let canvas = font.rasterize("boxyd", Color::BLACK, &config);
            assert_eq!(canvas.dimensions(), (670 / magnitude, 170 / magnitude));
        }
    }

    #[test]
    fn test_measured_width() {
        let font = embedded();
        let config = Config::new().with_label_sizing(LabelSizing::Measured);
        let canvas = font.rasterize("0001", Color::BLACK, &config);
        assert_eq!(canvas.width(), font.measure("0001", &config));
        assert!(canvas.width() > 0 && canvas.width() < config.fixed_label_width());
        // Monospaced: every character advances by the same amount.
        assert_eq!(font.measure("boxyd", &config), font.measure("00000", &config));
    }

    #[test]
    fn test_ink_uses_color() {
        let orange = Color::rgb(255, 187, 1);
        let canvas = embedded().rasterize("0001", orange, &Config::new());
        let ink = ink(&canvas);
        assert!(!ink.is_empty());
        // Digits rise well above the middle of the em box.
        assert!(ink.iter().any(|&(_, y, _)| y < Config::new().font_size() / 2));
        for (_, _, color) in ink {
            assert_eq!((color.r, color.g, color.b), (orange.r, orange.g, orange.b));
        }
    }

    #[test]
    fn test_empty_text_is_transparent() {
        let canvas = embedded().rasterize("", Color::BLACK, &Config::new());
        assert!(ink(&canvas).is_empty());
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        let font = embedded();
        let config = Config::new().with_magnitude(2).unwrap();
        assert_eq!(
            font.rasterize("boxyd", Color::BLACK, &config),
            font.rasterize("boxyd", Color::BLACK, &config)
        );
    }

    #[test]
    fn test_missing_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ttf");
        let err = LabelFont::load(&FontSource::File(path.clone())).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Asset);
        assert!(matches!(err, Error::FontRead { path: p, .. } if p == path));
    }

    #[test]
    fn test_corrupt_font_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a TrueType font").unwrap();
        let err = LabelFont::load(&FontSource::File(file.path().to_path_buf())).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Asset);
        assert!(matches!(err, Error::FontParse(_)));
    }

    #[test]
    fn test_font_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EMBEDDED_FONT).unwrap();
        let font = LabelFont::load(&FontSource::File(file.path().to_path_buf())).unwrap();
        let config = Config::new();
        assert_eq!(
            font.rasterize("12", Color::BLACK, &config),
            embedded().rasterize("12", Color::BLACK, &config)
        );
    }
}
