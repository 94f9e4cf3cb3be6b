//! Conversion between UTF-8 and UTF-16 (either byte order), plus UTF-8
//! validation.
//!
//! All operations work on caller-owned byte slices and never allocate,
//! except the `encode_utf16`/`decode_utf16` conveniences.
//!
//! ```
//! use charutil::{convert_utf16_to_utf8, convert_utf8_to_utf16, is_utf8_valid, Endianness};
//!
//! let text = "Hello \u{1F600}".as_bytes();
//! assert!(is_utf8_valid(text));
//!
//! let mut utf16 = vec![0; text.len() * 2];
//! let length = convert_utf8_to_utf16(text, &mut utf16, Endianness::LittleEndian).unwrap();
//! utf16.truncate(length);
//!
//! let mut utf8 = vec![0; utf16.len() + utf16.len() / 2];
//! let length = convert_utf16_to_utf8(&utf16, &mut utf8, Endianness::LittleEndian).unwrap();
//! assert_eq!(&utf8[..length], text);
//! ```

mod error;
mod utf;
mod utf16_to_utf8;
mod utf8_to_utf16;
mod validate;

pub use error::ConversionError;
pub use utf::{
    Endianness, MAXIMUM_BMP_VALUE, MAXIMUM_CHARACTER_VALUE, MAX_UTF16_INPUT_LEN,
    SURROGATE_HIGH_MAX, SURROGATE_HIGH_MIN, SURROGATE_LOW_MAX, SURROGATE_LOW_MIN, UTF16_BE_BOM,
    UTF16_LE_BOM, UTF8_BOM,
};
pub use utf16_to_utf8::{convert_utf16_to_utf8, decode_utf16, utf8_capacity_for};
pub use utf8_to_utf16::{convert_utf8_to_utf16, encode_utf16, utf16_capacity_for};
pub use validate::{is_utf8_valid, validate_utf8};
