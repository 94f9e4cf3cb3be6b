use crate::error::ConversionError;
use crate::utf::*;

/// One UTF-8 encoded code point, either being assembled from input bytes or
/// packed from a scalar value.
pub(crate) struct Utf8Sequence {
    full_length: u8,
    current_length: u8,
    bytes: [u8; 4],
}

impl Utf for Utf8Sequence {
    type Point = u8;

    #[inline]
    fn build(byte: Self::Point) -> Option<Self> {
        if matches!(byte, 0x80..=0xBF) || Self::is_invalid(byte) {
            return None;
        }
        let full_length = match byte.leading_ones() {
            0 => 1,
            n @ 2..=4 => n,
            _ => return None,
        } as u8;
        Some(Self {
            full_length,
            current_length: 1,
            bytes: [byte, 0, 0, 0],
        })
    }

    #[inline]
    fn is_complete(&self) -> bool {
        self.current_length == self.full_length
    }

    #[inline]
    fn add_point(&mut self, point: Self::Point) -> bool {
        if self.is_complete() || (point & 0b1100_0000) != 0b1000_0000 {
            return false;
        }
        self.bytes[self.current_length as usize] = point;
        self.current_length += 1;
        true
    }

    #[inline]
    fn get_codepoint(&self) -> u32 {
        let mut codepoint = match self.full_length {
            1 => return self.bytes[0] as u32,
            2 => self.bytes[0] & 0b0001_1111,
            3 => self.bytes[0] & 0b0000_1111,
            _ => self.bytes[0] & 0b0000_0111,
        } as u32;
        for &byte in &self.bytes[1..self.current_len()] {
            codepoint = (codepoint << 6) | (byte & 0b0011_1111) as u32;
        }
        codepoint
    }

    #[inline]
    fn is_valid(&self) -> bool {
        let codepoint = self.get_codepoint();
        self.is_complete()
            && is_valid_codepoint(codepoint)
            && Self::encoded_len(codepoint) == self.full_len()
    }
}

impl Utf8Sequence {
    /// Packs a scalar value (at most `U+10FFFF`) into its RFC 3629 form.
    #[inline]
    pub const fn encode(scalar: u32) -> Self {
        let full_length = Self::encoded_len(scalar);
        let bytes = match full_length {
            1 => [scalar as u8, 0, 0, 0],
            2 => [
                0b1100_0000 | (scalar >> 6) as u8,
                0b1000_0000 | (scalar & 0x3F) as u8,
                0,
                0,
            ],
            3 => [
                0b1110_0000 | (scalar >> 12) as u8,
                0b1000_0000 | ((scalar >> 6) & 0x3F) as u8,
                0b1000_0000 | (scalar & 0x3F) as u8,
                0,
            ],
            _ => [
                0b1111_0000 | ((scalar >> 18) & 0x07) as u8,
                0b1000_0000 | ((scalar >> 12) & 0x3F) as u8,
                0b1000_0000 | ((scalar >> 6) & 0x3F) as u8,
                0b1000_0000 | (scalar & 0x3F) as u8,
            ],
        };
        Self {
            full_length: full_length as u8,
            current_length: full_length as u8,
            bytes,
        }
    }

    /// Checks a complete sequence that started at `offset` and returns its
    /// scalar value.
    pub fn scalar(&self, offset: usize) -> Result<u32, ConversionError> {
        if !self.is_complete() {
            return Err(ConversionError::Truncated { offset });
        }
        let codepoint = self.get_codepoint();
        if codepoint > MAXIMUM_CHARACTER_VALUE {
            return Err(ConversionError::OutOfRange { codepoint, offset });
        }
        if is_surrogate(codepoint) {
            return Err(ConversionError::SurrogateCodePoint { codepoint, offset });
        }
        if Self::encoded_len(codepoint) != self.full_len() {
            return Err(ConversionError::Overlong { codepoint, offset });
        }
        Ok(codepoint)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.current_len()]
    }

    const fn encoded_len(codepoint: u32) -> usize {
        match codepoint {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        }
    }

    const fn is_invalid(byte: u8) -> bool {
        matches!(byte, 0xC0 | 0xC1 | 0xF5..)
    }

    pub const fn current_len(&self) -> usize {
        self.current_length as usize
    }

    pub const fn full_len(&self) -> usize {
        self.full_length as usize
    }
}
