// ABOUTME: Bit-granular read/write cursor over byte buffers, most significant bit first
// ABOUTME: Field codecs check buffer sizes up front; the cursor itself never does

use bytes::{BufMut, Bytes, BytesMut};

/// Number of bytes needed to hold `bits` bits.
pub const fn bytes_for_bits(bits: usize) -> usize {
    bits.div_ceil(8)
}

fn mask(n_bits: u8) -> u8 {
    ((1u16 << n_bits) - 1) as u8
}

/// Reads `n_bits` bits starting `o_bits` bits into `bytes[0]`.
///
/// ```text
/// Byte 0            Byte 1
/// [7|6|5|4|3|2|1|0] [7|6|5|4|3|2|1|0]
/// ```
///
/// `o_bits < 8` and `n_bits <= 8`, so at most two bytes are touched. The
/// caller guarantees those bytes exist.
pub fn read_bits(bytes: &[u8], o_bits: u8, n_bits: u8) -> u8 {
    debug_assert!(o_bits < 8);
    debug_assert!(n_bits <= 8);

    if n_bits == 0 {
        return 0;
    }

    // Read only from the first byte
    if o_bits + n_bits <= 8 {
        return (bytes[0] >> (8 - o_bits - n_bits)) & mask(n_bits);
    }

    // High-order bits from the first byte, the rest from the second one
    let bits_in_first = 8 - o_bits;
    let bits_in_second = n_bits - bits_in_first;
    (read_bits(bytes, o_bits, bits_in_first) << bits_in_second)
        | read_bits(&bytes[1..], 0, bits_in_second)
}

/// Sequential reader over a parameter or subparameter value.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    byte_offset: usize,
    bit_offset: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            byte_offset: 0,
            bit_offset: 0,
        }
    }

    /// Reads the next `n_bits` (at most 8) and advances the cursor.
    ///
    /// Callers must have checked [`BitReader::can_read`] for the widest
    /// run of bits they are about to consume.
    pub fn read(&mut self, n_bits: u8) -> u8 {
        let value = read_bits(&self.bytes[self.byte_offset..], self.bit_offset, n_bits);
        self.advance(n_bits);
        value
    }

    fn advance(&mut self, n_bits: u8) {
        let bits = self.bit_offset + n_bits;
        self.byte_offset += usize::from(bits / 8);
        self.bit_offset = bits % 8;
    }

    /// Current `(byte_offset, bit_offset)` position.
    pub fn position(&self) -> (usize, u8) {
        (self.byte_offset, self.bit_offset)
    }

    /// Total bits consumed so far.
    pub fn bits_consumed(&self) -> usize {
        self.byte_offset * 8 + usize::from(self.bit_offset)
    }

    /// Buffer length needed to read `n_bits` more bits from the current position.
    pub fn bytes_needed(&self, n_bits: usize) -> usize {
        bytes_for_bits(self.bits_consumed() + n_bits)
    }

    pub fn can_read(&self, n_bits: usize) -> bool {
        self.bytes_needed(n_bits) <= self.bytes.len()
    }

    /// Length of the underlying buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Owned bit builder used on the encode path.
///
/// Bits are only ever appended: every write lands in a region that has
/// never been written before, so the buffer needs no pre-zeroing step.
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    buf: BytesMut,
    bit_offset: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            bit_offset: 0,
        }
    }

    /// Appends the low `n_bits` (at most 8) of `value`.
    pub fn write(&mut self, n_bits: u8, value: u8) {
        debug_assert!(n_bits <= 8);

        if n_bits == 0 {
            return;
        }

        if self.bit_offset == 0 {
            self.buf.put_u8(0);
        }

        let o_bits = self.bit_offset;
        let last = self.buf.len() - 1;

        if o_bits + n_bits <= 8 {
            self.buf[last] |= (value & mask(n_bits)) << (8 - o_bits - n_bits);
        } else {
            let bits_in_first = 8 - o_bits;
            let bits_in_second = n_bits - bits_in_first;
            self.buf[last] |= (value >> bits_in_second) & mask(bits_in_first);
            self.buf
                .put_u8((value & mask(bits_in_second)) << (8 - bits_in_second));
        }

        self.bit_offset = (o_bits + n_bits) % 8;
    }

    /// Total bits written so far.
    pub fn bit_len(&self) -> usize {
        match self.bit_offset {
            0 => self.buf.len() * 8,
            partial => (self.buf.len() - 1) * 8 + usize::from(partial),
        }
    }

    /// Bytes written so far, counting a trailing partial byte.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_inner(self) -> BytesMut {
        self.buf
    }

    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}
