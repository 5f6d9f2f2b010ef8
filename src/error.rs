//! Error types for the coder.

use thiserror::Error;

/// Errors returned by [`encode_symbols`](crate::encode_symbols) and [`decode`](crate::decode).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A symbol outside the byte alphabet was handed to the encoder.
    #[error("invalid symbol {value} at index {index}, symbols must be in 0..=255")]
    InvalidSymbol { index: usize, value: u32 },

    /// The frequency table lookup found no symbol owning `probability`.
    #[error("model corruption: no symbol owns probability {probability} (total {total})")]
    ModelCorruption { probability: u32, total: u32 },
}

/// A specialized Result type for coder operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        let err = Error::InvalidSymbol { index: 3, value: 256 };
        assert_eq!(
            err.to_string(),
            "invalid symbol 256 at index 3, symbols must be in 0..=255"
        );

        let err = Error::ModelCorruption { probability: 300, total: 257 };
        assert_eq!(
            err.to_string(),
            "model corruption: no symbol owns probability 300 (total 257)"
        );
    }
}
