use crate::entropy_coding::ACWrite;

/// Counts the bits the coder would write, without storing them
#[derive(Debug, Default)]
pub struct ACStats {
    bit_count: u64,
    rev_bits: u64,
}

impl ACStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bits(&self) -> u64 {
        self.bit_count
    }

    /// Bytes in compressed size, including the padded last byte
    pub fn result(&self) -> u64 {
        self.bit_count.div_ceil(8)
    }
}

impl ACWrite for ACStats {
    fn inc_parity(&mut self) {
        self.rev_bits += 1;
    }

    fn write_bit(&mut self, _bit: u8) {
        self.bit_count += 1 + self.rev_bits;
        self.rev_bits = 0;
    }
}
