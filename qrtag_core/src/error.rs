use std::path::PathBuf;

/// Broad category of an [Error].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an input outside of what the layout supports.
    Validation,
    /// The payload does not fit in a QR code, or the image could not be produced.
    Encoding,
    /// The label font is missing or corrupt.
    Asset,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("label of {0} characters is too long, limited to {1} characters")]
    LabelTooLong(usize, usize),
    #[error("index {0} does not fit in {1} digits")]
    IndexTooLarge(u32, usize),
    #[error("magnitude must be a positive integer, got {0}")]
    InvalidMagnitude(u32),
    #[error("invalid color '{0}', expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error("cannot encode {0} B of data with error correction level H")]
    DataTooBig(usize),
    #[error("cannot encode QR code: {0}")]
    Qr(String),
    #[error("a {0} px canvas cannot hold {1} modules")]
    CanvasTooSmall(u32, u32),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("cannot read font file {}", path.display())]
    FontRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse font file {}", .0.display())]
    FontParse(PathBuf),
}

impl Error {
    /// Get the [ErrorKind] of this error.
    /// # Example
    /// ```
    /// use qrtag_core::{Error, ErrorKind};
    /// assert_eq!(Error::LabelTooLong(7, 5).kind(), ErrorKind::Validation);
    /// assert_eq!(Error::DataTooBig(4096).kind(), ErrorKind::Encoding);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LabelTooLong(..)
            | Error::IndexTooLarge(..)
            | Error::InvalidMagnitude(_)
            | Error::InvalidColor(_) => ErrorKind::Validation,
            Error::DataTooBig(_)
            | Error::Qr(_)
            | Error::CanvasTooSmall(..)
            | Error::Image(_) => ErrorKind::Encoding,
            Error::FontRead { .. } | Error::FontParse(_) => ErrorKind::Asset,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
