mod canvas;
mod color;
mod config;
mod error;
mod text;

pub use canvas::Canvas;
pub use color::Color;
pub use config::{Config, FontSource, LabelSizing, Magnitude};
pub use error::{Error, ErrorKind, Result};
pub use text::{format_index, Label, INDEX_DIGITS};
