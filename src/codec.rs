//! Whole-buffer entry points.
//!
//! Every call builds its own coder, bit I/O and model from scratch, so calls are
//! independent of each other. The output carries no header: the caller has to
//! keep the symbol count and hand it back to [`decode`].

use log::debug;

use crate::entropy_coding::{ACReader, ACWrite, ACWriter, ArithmeticCoder};
use crate::error::{Error, Result};
use crate::helpers::ACStats;
use crate::models::CumulativeFrequencies;

/// Compresses `symbols` into an MSB-first packed bit stream.
///
/// The empty input still produces the two terminating bits, i.e. `[0x40]`.
pub fn encode(symbols: &[u8]) -> Vec<u8> {
    let mut writer = ACWriter::with_capacity(symbols.len() / 2 + 1);
    let model = encode_with(symbols, &mut writer);

    debug!(
        "encoded {} symbols into {} bits ({} rescales)",
        symbols.len(),
        writer.bit_len(),
        model.rescales()
    );
    writer.into_inner()
}

/// Like [`encode`], for symbols held in a wider integer type.
///
/// Fails with [`Error::InvalidSymbol`] on the first value above 255.
pub fn encode_symbols(symbols: &[u32]) -> Result<Vec<u8>> {
    let bytes = symbols
        .iter()
        .enumerate()
        .map(|(index, &value)| u8::try_from(value).map_err(|_| Error::InvalidSymbol { index, value }))
        .collect::<Result<Vec<u8>>>()?;

    Ok(encode(&bytes))
}

/// Exact number of bits [`encode`] writes for `symbols`.
pub fn encoded_bits(symbols: &[u8]) -> u64 {
    let mut stats = ACStats::new();
    encode_with(symbols, &mut stats);
    stats.bits()
}

/// Reconstructs `length` symbols from `bits`.
///
/// Bits past the end of `bits` read as 0. `length` is trusted: asking for more
/// symbols than were encoded yields a garbage tail, asking for fewer yields a
/// prefix of the original input.
pub fn decode(bits: &[u8], length: usize) -> Result<Vec<u8>> {
    let mut reader = ACReader::new(bits);
    let mut ac = ArithmeticCoder::new_decoder(&mut reader);
    let mut model = CumulativeFrequencies::new();

    let mut symbols = Vec::with_capacity(length);
    for _ in 0..length {
        symbols.push(ac.decode(&mut model, &mut reader)?);
    }

    debug!(
        "decoded {} symbols from {} bytes ({} rescales)",
        length,
        bits.len(),
        model.rescales()
    );
    Ok(symbols)
}

fn encode_with<W: ACWrite>(symbols: &[u8], io: &mut W) -> CumulativeFrequencies {
    let mut ac = ArithmeticCoder::new_coder();
    let mut model = CumulativeFrequencies::new();

    for &symbol in symbols {
        ac.encode(symbol, &mut model, io);
    }
    ac.flush(io);
    model
}
