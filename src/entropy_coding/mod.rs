pub mod ac_io;

pub use ac_io::{ACRead, ACReader, ACWrite, ACWriter};

use crate::error::{Error, Result};
use crate::models::Model;

pub const PRECISION: u32 = u16::BITS; // 16
const PREC_SHIFT: u32 = PRECISION - 1; // 15
const RMID: u16 = 1 << PREC_SHIFT; // 0x8000, top bit, range middle
const Q1: u16 = 1 << (PREC_SHIFT - 1); // 0x4000, second bit, quarter 1

/// The `ArithmeticCoder` encodes/decodes symbols given a cumulative frequency model
///
/// The interval `[x1, x2]` is kept in 16 bits; both bounds are truncated after
/// every update, and a symbol's sub-interval is computed with truncating division
/// shared by both directions.
#[derive(Clone, Debug)]
pub struct ArithmeticCoder {
    x1: u16, // low
    x2: u16, // high
    x: u16,  // state
}

impl ArithmeticCoder {
    pub fn new_coder() -> Self {
        Self { x1: 0, x2: u16::MAX, x: 0 }
    }

    pub fn new_decoder<R: ACRead>(reader: &mut R) -> Self {
        let x = reader.read_u16();
        Self { x1: 0, x2: u16::MAX, x }
    }

    pub fn low(&self) -> u16 {
        self.x1
    }

    pub fn high(&self) -> u16 {
        self.x2
    }

    pub fn encode<M: Model, W: ACWrite>(&mut self, symbol: u8, model: &mut M, io: &mut W) {
        let (lo, hi) = model.bounds(symbol);
        self.narrow(lo, hi, model.total());
        model.update(symbol);

        loop {
            if (self.x1 ^ self.x2) & RMID == 0 {
                // Renormalize range -> write matching bit to stream
                io.write_bit(u8::from(self.x1 & RMID != 0));
            } else if self.x1 & Q1 != 0 && self.x2 & Q1 == 0 {
                // E3 renorm (special case) -> increase parity
                io.inc_parity();
                self.x1 &= !Q1;
                self.x2 |= Q1;
            } else {
                break;
            }
            self.shift();
        }
    }

    pub fn flush<W: ACWrite>(&mut self, io: &mut W) {
        // assert state is normalized
        debug_assert!(self.x1 & RMID == 0 && self.x2 & RMID != 0);
        io.inc_parity();
        io.write_bit(u8::from(self.x1 & Q1 != 0));
    }

    pub fn decode<M: Model, R: ACRead>(&mut self, model: &mut M, io: &mut R) -> Result<u8> {
        let total = model.total();
        let probability = self.probability(total);
        let symbol = model
            .symbol(probability)
            .ok_or(Error::ModelCorruption { probability, total })?;

        let (lo, hi) = model.bounds(symbol);
        self.narrow(lo, hi, total);
        model.update(symbol);

        loop {
            if (self.x1 ^ self.x2) & RMID == 0 {
                // top bit settled, nothing to fix
            } else if self.x1 & Q1 != 0 && self.x2 & Q1 == 0 {
                // E3 renorm (special case) -> fix parity
                self.x1 &= !Q1;
                self.x2 |= Q1;
                self.x ^= Q1;
            } else {
                break;
            }
            self.shift();
            self.x = (self.x << 1) | u16::from(io.read_bit());
        }

        Ok(symbol)
    }

    /// Narrows the interval to `[lo, hi)` out of `total`.
    fn narrow(&mut self, lo: u32, hi: u32, total: u32) {
        let range = self.range();
        debug_assert!(lo < hi && hi <= total && total < range);

        let x1 = u32::from(self.x1);
        self.x2 = truncate(x1 + scale(hi, range, total) - 1);
        self.x1 = truncate(x1 + scale(lo, range, total));
        debug_assert!(self.x1 <= self.x2);
    }

    /// Inverse of `narrow`: the cumulative count that `x` falls on.
    fn probability(&self, total: u32) -> u32 {
        debug_assert!(self.x1 <= self.x && self.x <= self.x2);
        let offset = u32::from(self.x) - u32::from(self.x1) + 1;
        let probability = u32::from(truncate((offset * total - 1) / self.range()));
        debug_assert!(probability < total);
        probability
    }

    fn range(&self) -> u32 {
        u32::from(self.x2) - u32::from(self.x1) + 1
    }

    fn shift(&mut self) {
        self.x1 <<= 1;
        self.x2 = (self.x2 << 1) | 1;
    }
}

impl Default for ArithmeticCoder {
    fn default() -> Self {
        Self::new_coder()
    }
}

// range <= 2^16 and count <= total < 2^14, so the product fits
#[inline(always)]
fn scale(count: u32, range: u32, total: u32) -> u32 {
    count * range / total
}

#[inline(always)]
fn truncate(x: u32) -> u16 {
    (x & u32::from(u16::MAX)) as u16
}
