//! Adaptive order-0 arithmetic coder for byte streams.
//!
//! Symbols are coded against a cumulative frequency table that starts uniform
//! and learns as it goes; the coding interval is 16 bits wide, with E3
//! (underflow) bits deferred until the next settled bit.
//!
//! ```
//! let input = b"abracadabra";
//! let compressed = ac16::encode(input);
//! assert_eq!(ac16::decode(&compressed, input.len()).unwrap(), input);
//! ```

pub mod codec;
pub mod entropy_coding;
pub mod error;
pub mod helpers;
pub mod models;

pub use codec::{decode, encode, encode_symbols, encoded_bits};
pub use entropy_coding::{ArithmeticCoder, PRECISION};
pub use error::{Error, Result};
pub use models::{CumulativeFrequencies, Model, MAX_TOTAL, SYMBOLS};
