use log::trace;

use super::Model;
use crate::entropy_coding::PRECISION;

/// Size of the byte alphabet
pub const SYMBOLS: usize = 256;
/// Cumulative table length: one lower bound per symbol, the total, and a sentinel
pub const TABLE_LEN: usize = SYMBOLS + 2;
/// The total is halved as soon as it reaches this value (2^14)
pub const MAX_TOTAL: u32 = 1 << (PRECISION - 2);

/// Adaptive order-0 model over bytes.
///
/// `table[s]` is the number of observations of symbols below `s`, so symbol `s`
/// owns `[table[s], table[s + 1])`. Every symbol starts with weight 1 and never
/// drops below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CumulativeFrequencies {
    table: [u32; TABLE_LEN],
    total: u32,
    rescales: u64,
}

impl CumulativeFrequencies {
    pub fn new() -> Self {
        Self {
            table: std::array::from_fn(|i| i as u32),
            total: SYMBOLS as u32,
            rescales: 0,
        }
    }

    pub fn table(&self) -> &[u32; TABLE_LEN] {
        &self.table
    }

    /// Number of times the counts have been halved
    pub fn rescales(&self) -> u64 {
        self.rescales
    }

    /// Current weight of `symbol`
    pub fn freq(&self, symbol: u8) -> u32 {
        let s = usize::from(symbol);
        self.table[s + 1] - self.table[s]
    }

    /// Reference lookup, scans the whole table.
    pub fn find_linear(&self, probability: u32) -> Option<u8> {
        (0..SYMBOLS)
            .find(|&s| self.table[s] <= probability && probability < self.table[s + 1])
            .and_then(|s| u8::try_from(s).ok())
    }

    /// Halves all weights, rounding small ones to 1.
    ///
    /// The step of each entry is taken from the old table, so the result only
    /// depends on the weights before the call.
    fn rescale(&mut self) {
        let mut prev = self.table[0];
        for i in 1..=SYMBOLS {
            let old = self.table[i];
            let inc = old - prev;
            let step = if inc <= 2 { 1 } else { inc / 2 };
            self.table[i] = self.table[i - 1] + step;
            prev = old;
        }

        self.total = self.table[SYMBOLS];
        self.table[SYMBOLS + 1] = self.total + 1;
        self.rescales += 1;
        debug_assert!(self.table.windows(2).all(|w| w[0] < w[1]), "rescale broke monotonicity");
        trace!("rescaled model #{}, total {}", self.rescales, self.total);
    }
}

impl Default for CumulativeFrequencies {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for CumulativeFrequencies {
    fn total(&self) -> u32 {
        self.total
    }

    fn bounds(&self, symbol: u8) -> (u32, u32) {
        let s = usize::from(symbol);
        (self.table[s], self.table[s + 1])
    }

    fn symbol(&self, probability: u32) -> Option<u8> {
        let (mut bot, mut top) = (0, SYMBOLS);
        while bot < top {
            let mid = (bot + top) / 2;
            if probability < self.table[mid] {
                top = mid;
            } else if probability >= self.table[mid + 1] {
                bot = mid + 1;
            } else {
                return u8::try_from(mid).ok();
            }
        }

        None
    }

    fn update(&mut self, symbol: u8) {
        for entry in &mut self.table[usize::from(symbol) + 1..] {
            *entry += 1;
        }
        self.total += 1;

        if self.total >= MAX_TOTAL {
            self.rescale();
        }
    }
}
