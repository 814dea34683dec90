//! Labeled QR code images.
//!
//! Re-exports the data model from [qrtag_core] and the pipeline from [qrtag_encode].

pub use qrtag_core::*;
pub use qrtag_encode::*;
