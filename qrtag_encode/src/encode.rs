use bitvec::vec::BitVec;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

use qrtag_core::{Error, Result};

/// Encoder for a QR code at the highest error correction level.
#[derive(Debug, Clone)]
pub struct Encoder {
    quiet_zone: usize,
}

impl Encoder {
    /// Width in modules of the light border required around a QR code.
    pub const QUIET_ZONE: usize = 4;

    /// Construct a new encoder adding the standard quiet zone around the code.
    pub fn new() -> Self {
        Self {
            quiet_zone: Self::QUIET_ZONE,
        }
    }

    /// Set the width in modules of the light border around the code.
    pub fn with_quiet_zone(mut self, quiet_zone: usize) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// Encode `data` with error correction level H.
    pub fn encode<T: AsRef<[u8]>>(&self, data: T) -> Result<QrMatrix> {
        let data = data.as_ref();
        let code = QrCode::with_error_correction_level(data, EcLevel::H).map_err(|err| match err {
            QrError::DataTooLong => Error::DataTooBig(data.len()),
            other => Error::Qr(other.to_string()),
        })?;
        Ok(QrMatrix::from_code(&code, self.quiet_zone))
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// A square matrix of modules, quiet zone included. `true` is dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    data: BitVec,
    size: usize,
    quiet_zone: usize,
}

impl QrMatrix {
    fn from_code(code: &QrCode, quiet_zone: usize) -> Self {
        let width = code.width();
        let size = width + 2 * quiet_zone;
        let mut data = BitVec::repeat(false, size * size);
        for i in 0..width {
            for j in 0..width {
                let dark = code[(j, i)] == qrcode::Color::Dark;
                data.set((i + quiet_zone) * size + j + quiet_zone, dark);
            }
        }
        Self {
            data,
            size,
            quiet_zone,
        }
    }

    /// Get the side of the matrix in modules, including the quiet zone.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the side of the code itself in modules.
    pub fn code_size(&self) -> usize {
        self.size - 2 * self.quiet_zone
    }

    /// Get the module at row `i` and column `j`, `true` being dark.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<bool> {
        if i < self.size && j < self.size {
            self.data.get(self.size * i + j).map(|bit| *bit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_quiet_zone_is_light() {
        let matrix = Encoder::new().encode("http://35.176.98.167:8080/box/0001.html").unwrap();
        let size = matrix.size();
        assert_eq!(size, matrix.code_size() + 2 * Encoder::QUIET_ZONE);
        for k in 0..size {
            for q in 0..Encoder::QUIET_ZONE {
                assert_eq!(matrix.get(q, k), Some(false));
                assert_eq!(matrix.get(k, q), Some(false));
                assert_eq!(matrix.get(size - 1 - q, k), Some(false));
                assert_eq!(matrix.get(k, size - 1 - q), Some(false));
            }
        }
        assert_eq!(matrix.get(size, 0), None);
    }

    #[test]
    fn test_finder_pattern_corner_is_dark() {
        let matrix = Encoder::new().with_quiet_zone(0).encode("hello").unwrap();
        assert_eq!(matrix.size(), matrix.code_size());
        // Outer ring of the top-left finder pattern.
        for k in 0..7 {
            assert_eq!(matrix.get(0, k), Some(true));
            assert_eq!(matrix.get(k, 0), Some(true));
        }
        assert_eq!(matrix.get(1, 1), Some(false));
    }

    #[test]
    fn test_data_too_big() {
        let data: String = (0..4096).map(|k| char::from(b'!' + (k * 7 % 90) as u8)).collect();
        let err = Encoder::new().encode(&data).unwrap_err();
        assert!(matches!(err, Error::DataTooBig(4096)));
    }
}
