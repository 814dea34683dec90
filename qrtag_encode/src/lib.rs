//! Generation of labeled QR code images.
//!
//! A payload is encoded at error correction level H and rendered as a square raster. A caption
//! and a zero-padded index are rasterized with a monospaced font and placed side by side below
//! the code, and the result is encoded as PNG.
//!
//! ```
//! let png = qrtag_encode::generate_with_magnitude("https://example.com", "boxyd", 1, 4).unwrap();
//! assert!(!png.is_empty());
//! ```

pub mod compose;
mod encode;
mod label;
mod pipeline;
mod render;

pub use encode::{Encoder, QrMatrix};
pub use label::LabelFont;
pub use pipeline::{encode_png, generate, generate_with_color, generate_with_magnitude, Generator};
pub use render::{render_qr, RasterRenderer};
