use thiserror::Error;

/// Reasons a validation or conversion can fail.
///
/// Offsets are byte positions in the input where the offending sequence
/// starts (or, for continuation bytes, where the bad byte sits).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("input ends in the middle of a sequence starting at byte {offset}")]
    Truncated { offset: usize },
    #[error("invalid UTF-8 lead byte {byte:#04x} at byte {offset}")]
    InvalidLeadByte { byte: u8, offset: usize },
    #[error("invalid UTF-8 continuation byte {byte:#04x} at byte {offset}")]
    InvalidContinuation { byte: u8, offset: usize },
    #[error("overlong encoding of U+{codepoint:04X} at byte {offset}")]
    Overlong { codepoint: u32, offset: usize },
    #[error("code point {codepoint:#x} at byte {offset} is beyond U+10FFFF")]
    OutOfRange { codepoint: u32, offset: usize },
    #[error("surrogate code point U+{codepoint:04X} encoded at byte {offset}")]
    SurrogateCodePoint { codepoint: u32, offset: usize },
    #[error("unpaired surrogate {unit:#06x} at byte {offset}")]
    UnpairedSurrogate { unit: u16, offset: usize },
    #[error("UTF-16 input has odd length {length}")]
    OddLength { length: usize },
    #[error("input of {length} bytes exceeds the supported maximum of {maximum}")]
    InputTooLong { length: usize, maximum: usize },
    #[error("output buffer holds {actual} bytes but {required} are required")]
    OutputTooSmall { required: usize, actual: usize },
}
