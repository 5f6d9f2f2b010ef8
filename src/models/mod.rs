pub mod cumulative;

pub use self::cumulative::*;

/// A symbol model driving the [`ArithmeticCoder`](crate::entropy_coding::ArithmeticCoder)
pub trait Model {
    /// Sum of all symbol weights
    fn total(&self) -> u32;
    /// Half-open cumulative range `[lo, hi)` owned by `symbol`
    fn bounds(&self, symbol: u8) -> (u32, u32);
    /// The symbol owning `probability`, if any
    fn symbol(&self, probability: u32) -> Option<u8>;
    /// Records one occurrence of `symbol`
    fn update(&mut self, symbol: u8);
}
