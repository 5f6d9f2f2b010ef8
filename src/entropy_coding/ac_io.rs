pub trait ACRead {
    /// Read bit or 0 past the end
    fn read_bit(&mut self) -> u8;
    /// Read 2 bytes BE as u16 and pad with 0s past the end
    fn read_u16(&mut self) -> u16;
}

pub trait ACWrite {
    /// Increases the number of reverse bits to write
    fn inc_parity(&mut self);
    /// Writes a bit followed by the pending reverse bits
    fn write_bit(&mut self, bit: u8);
}

/// Reads bits MSB-first from a byte slice, yielding 0s once it runs out.
pub struct ACReader<'a> {
    inner: &'a [u8],
    pos: usize,
    offset: u8,
}

impl<'a> ACReader<'a> {
    pub fn new(inner: &'a [u8]) -> Self {
        Self { inner, pos: 0, offset: 0 }
    }

    pub fn shift_bit(&mut self) -> u8 {
        let Some(&byte) = self.inner.get(self.pos) else {
            return 0;
        };

        let bit = (byte >> (7 - self.offset)) & 1;
        self.offset += 1;
        if self.offset == 8 {
            self.offset = 0;
            self.pos += 1;
        }
        bit
    }
}

impl ACRead for ACReader<'_> {
    fn read_bit(&mut self) -> u8 {
        self.shift_bit()
    }

    fn read_u16(&mut self) -> u16 {
        (0..u16::BITS).fold(0, |x, _| (x << 1) | u16::from(self.shift_bit()))
    }
}

/// Packs bits MSB-first into a growing buffer.
///
/// A byte is appended as soon as its first bit is pushed, so the buffer always
/// holds the partially filled last byte with its unused low bits cleared.
#[derive(Debug, Default)]
pub struct ACWriter {
    inner: Vec<u8>,
    offset: u8,
    rev_bits: u64,
}

impl ACWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: Vec::with_capacity(capacity), ..Self::default() }
    }

    pub fn push_bit(&mut self, bit: u8) {
        debug_assert!(bit <= 1, "Provided value wasn't a valid bit");

        if self.offset == 0 {
            self.inner.push(0);
        }
        if let Some(last) = self.inner.last_mut() {
            *last |= (bit & 1) << (7 - self.offset);
        }
        self.offset = (self.offset + 1) % 8;
    }

    /// Reverse bits waiting for the next written bit
    pub fn pending(&self) -> u64 {
        self.rev_bits
    }

    /// Number of bits pushed so far
    pub fn bit_len(&self) -> u64 {
        let full = self.inner.len() as u64 * 8;
        match self.offset {
            0 => full,
            used => full - u64::from(8 - used),
        }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl ACWrite for ACWriter {
    fn inc_parity(&mut self) {
        self.rev_bits += 1;
    }

    fn write_bit(&mut self, bit: u8) {
        self.push_bit(bit);
        while self.rev_bits > 0 {
            self.rev_bits -= 1;
            self.push_bit(bit ^ 1);
        }
    }
}
