use std::fmt;

use crate::{Error, Result};

/// Number of digits an index is padded to.
pub const INDEX_DIGITS: usize = 4;

/// Format `index` as a zero-padded decimal string of [INDEX_DIGITS] digits.
///
/// Indices that need more digits are rejected: the label raster is sized for four.
/// # Example
/// ```
/// use qrtag_core::format_index;
/// assert_eq!(format_index(1).unwrap(), "0001");
/// assert_eq!(format_index(4567).unwrap(), "4567");
/// assert!(format_index(10_000).is_err());
/// ```
pub fn format_index(index: u32) -> Result<String> {
    let formatted = format!("{:0width$}", index, width = INDEX_DIGITS);
    if formatted.len() > INDEX_DIGITS {
        return Err(Error::IndexTooLarge(index, INDEX_DIGITS));
    }
    Ok(formatted)
}

/// Caption printed below a QR code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// Maximum number of characters of a label.
    pub const MAX_LEN: usize = 5;

    /// Construct a new label, failing if `text` is longer than [Label::MAX_LEN] characters.
    /// # Example
    /// ```
    /// use qrtag_core::Label;
    /// assert!(Label::new("boxyd").is_ok());
    /// assert!(Label::new("toolong").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        let len = text.chars().count();
        if len > Self::MAX_LEN {
            return Err(Error::LabelTooLong(len, Self::MAX_LEN));
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Label {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}
