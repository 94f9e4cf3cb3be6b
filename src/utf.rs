pub(crate) mod utf16sequence;
pub(crate) mod utf8sequence;

/// Largest Unicode scalar value.
pub const MAXIMUM_CHARACTER_VALUE: u32 = 0x10_FFFF;
/// Largest value in the Basic Multilingual Plane.
pub const MAXIMUM_BMP_VALUE: u32 = 0xFFFF;

pub const SURROGATE_HIGH_MIN: u32 = 0xD800;
pub const SURROGATE_HIGH_MAX: u32 = 0xDBFF;
pub const SURROGATE_LOW_MIN: u32 = 0xDC00;
pub const SURROGATE_LOW_MAX: u32 = 0xDFFF;

/// High surrogate of a supplementary scalar is `LEAD_OFFSET + (scalar >> 10)`.
pub(crate) const LEAD_OFFSET: u32 = SURROGATE_HIGH_MIN - (0x1_0000 >> 10);
/// `0x10000 - (0xD800 << 10) - 0xDC00`, mod 2^32.
pub(crate) const SURROGATE_OFFSET: u32 = 0xFCA0_2400;

/// Longest UTF-16 input accepted by [`convert_utf16_to_utf8`](crate::convert_utf16_to_utf8).
///
/// This is `usize::MAX / 1.5` in exact integer arithmetic, so the required
/// output size `len + len / 2` always fits in a `usize`.
pub const MAX_UTF16_INPUT_LEN: usize = usize::MAX / 3 * 2;

pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// A sequence of code units that together encode one code point.
pub(crate) trait Utf: Sized {
    type Point;

    fn build(point: Self::Point) -> Option<Self>;
    fn is_complete(&self) -> bool;
    fn add_point(&mut self, point: Self::Point) -> bool;
    fn get_codepoint(&self) -> u32;
    fn is_valid(&self) -> bool {
        self.is_complete() && is_valid_codepoint(self.get_codepoint())
    }
}

pub(crate) const fn is_valid_codepoint(codepoint: u32) -> bool {
    char::from_u32(codepoint).is_some()
}

pub(crate) const fn is_high_surrogate(unit: u32) -> bool {
    SURROGATE_HIGH_MIN <= unit && unit <= SURROGATE_HIGH_MAX
}

pub(crate) const fn is_low_surrogate(unit: u32) -> bool {
    SURROGATE_LOW_MIN <= unit && unit <= SURROGATE_LOW_MAX
}

pub(crate) const fn is_surrogate(unit: u32) -> bool {
    SURROGATE_HIGH_MIN <= unit && unit <= SURROGATE_LOW_MAX
}

/// Byte order of 16-bit code units in a byte buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl Endianness {
    #[inline]
    pub const fn read_unit(self, bytes: [u8; 2]) -> u16 {
        match self {
            Endianness::BigEndian => u16::from_be_bytes(bytes),
            Endianness::LittleEndian => u16::from_le_bytes(bytes),
        }
    }

    #[inline]
    pub const fn write_unit(self, unit: u16) -> [u8; 2] {
        match self {
            Endianness::BigEndian => unit.to_be_bytes(),
            Endianness::LittleEndian => unit.to_le_bytes(),
        }
    }

    /// Byte-order mark for this byte order.
    pub const fn bom(self) -> [u8; 2] {
        match self {
            Endianness::BigEndian => UTF16_BE_BOM,
            Endianness::LittleEndian => UTF16_LE_BOM,
        }
    }

    /// Byte order announced by a leading UTF-16 byte-order mark, if any.
    pub fn from_bom(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0xFE, 0xFF, ..] => Some(Endianness::BigEndian),
            [0xFF, 0xFE, ..] => Some(Endianness::LittleEndian),
            _ => None,
        }
    }
}
