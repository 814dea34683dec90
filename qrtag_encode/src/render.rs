use qrtag_core::{Canvas, Color, Error, Result};

use crate::{Encoder, QrMatrix};

pub struct RasterRenderer {
    light_color: Color,
    dark_color: Color,
}

impl RasterRenderer {
    /// Construct a new [RasterRenderer] that renders dark modules black and light ones white.
    pub fn new() -> Self {
        Self {
            light_color: Color::WHITE,
            dark_color: Color::BLACK,
        }
    }

    /// Set the light module `color` to be used when rendering.
    pub fn with_light_color(mut self, color: Color) -> Self {
        self.light_color = color;
        self
    }

    /// Set the dark module `color` to be used when rendering.
    pub fn with_dark_color(mut self, color: Color) -> Self {
        self.dark_color = color;
        self
    }

    /// Invert the light and dark colors.
    pub fn inverted(mut self) -> Self {
        std::mem::swap(&mut self.light_color, &mut self.dark_color);
        self
    }

    pub fn light_color(&self) -> Color {
        self.light_color
    }

    pub fn dark_color(&self) -> Color {
        self.dark_color
    }

    /// Render `matrix` into a canvas of exactly `size` by `size` pixels.
    ///
    /// Every pixel takes the color of the module it falls into, so modules are stretched to fill
    /// the canvas even when `size` is not a multiple of the matrix size.
    pub fn render(&self, matrix: &QrMatrix, size: u32) -> Result<Canvas> {
        let modules = matrix.size() as u64;
        if (size as u64) < modules {
            return Err(Error::CanvasTooSmall(size, modules as u32));
        }
        let module_at = |pixel: u32| (pixel as u64 * modules / size as u64) as usize;
        let mut canvas = Canvas::filled(size, size, self.light_color);
        for y in 0..size {
            let i = module_at(y);
            for x in 0..size {
                if matrix.get(i, module_at(x)) == Some(true) {
                    canvas.set(x, y, self.dark_color);
                }
            }
        }
        Ok(canvas)
    }
}

impl Default for RasterRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `payload` and render it as a `size` by `size` raster with `foreground` modules on a
/// `background`.
/// # Example
/// ```
/// use qrtag_core::Color;
/// let canvas = qrtag_encode::render_qr("https://example.com", 256, Color::BLACK, Color::WHITE).unwrap();
/// assert_eq!(canvas.dimensions(), (256, 256));
/// ```
pub fn render_qr(payload: &str, size: u32, foreground: Color, background: Color) -> Result<Canvas> {
    let matrix = Encoder::new().encode(payload)?;
    RasterRenderer::new()
        .with_dark_color(foreground)
        .with_light_color(background)
        .render(&matrix, size)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render_exact_size() {
        let matrix = Encoder::new().encode("https://example.com").unwrap();
        for size in [matrix.size() as u32, 100, 333, 1024] {
            let canvas = RasterRenderer::new().render(&matrix, size).unwrap();
            assert_eq!(canvas.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_render_one_pixel_per_module() {
        let matrix = Encoder::new().encode("qrtag").unwrap();
        let size = matrix.size() as u32;
        let canvas = RasterRenderer::new().render(&matrix, size).unwrap();
        for y in 0..size {
            for x in 0..size {
                let expected = match matrix.get(y as usize, x as usize) {
                    Some(true) => Color::BLACK,
                    _ => Color::WHITE,
                };
                assert_eq!(canvas.get(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_render_uses_colors() {
        let orange = Color::rgb(255, 187, 1);
        let grey = Color::rgb(54, 54, 54);
        let canvas = render_qr("https://example.com", 300, orange, grey).unwrap();
        let modules = Encoder::new().encode("https://example.com").unwrap().size() as u64;
        // First pixel of the top-left finder pattern, right after the quiet zone.
        let edge = (Encoder::QUIET_ZONE as u64 * 300).div_ceil(modules) as u32;
        assert_eq!(canvas.get(0, 0), Some(grey));
        assert_eq!(canvas.get(edge - 1, edge - 1), Some(grey));
        assert_eq!(canvas.get(edge, edge), Some(orange));
    }

    #[test]
    fn test_inverted() {
        let renderer = RasterRenderer::new().inverted();
        assert_eq!(renderer.dark_color(), Color::WHITE);
        assert_eq!(renderer.light_color(), Color::BLACK);
    }

    #[test]
    fn test_canvas_too_small() {
        let matrix = Encoder::new().encode("https://example.com").unwrap();
        let size = matrix.size() as u32 - 1;
        let err = RasterRenderer::new().render(&matrix, size).unwrap_err();
        assert!(matches!(err, Error::CanvasTooSmall(s, _) if s == size));
    }
}
