use crate::error::ConversionError;
use crate::utf::{utf8sequence::Utf8Sequence, Utf};

/// Returns true if `input` is well-formed UTF-8 per RFC 3629.
///
/// Empty input is valid. Overlong forms, surrogate code points and values
/// beyond `U+10FFFF` are all rejected.
pub fn is_utf8_valid(input: &[u8]) -> bool {
    validate_utf8(input).is_ok()
}

/// Like [`is_utf8_valid`], but reports the first violation.
pub fn validate_utf8(input: &[u8]) -> Result<(), ConversionError> {
    for_each_scalar(input, |_| ())
}

/// Decodes `input` and hands every scalar value to `emit`, stopping at the
/// first malformed sequence.
pub(crate) fn for_each_scalar(
    input: &[u8],
    mut emit: impl FnMut(u32),
) -> Result<(), ConversionError> {
    let mut pending: Option<(usize, Utf8Sequence)> = None;
    for (offset, &byte) in input.iter().enumerate() {
        if let Some((start, sequence)) = pending.as_mut() {
            if !sequence.add_point(byte) {
                return Err(ConversionError::InvalidContinuation { byte, offset });
            }
            if sequence.is_complete() {
                emit(sequence.scalar(*start)?);
                pending = None;
            }
            continue;
        }
        let sequence =
            Utf8Sequence::build(byte).ok_or(ConversionError::InvalidLeadByte { byte, offset })?;
        if sequence.is_complete() {
            emit(sequence.scalar(offset)?);
        } else {
            pending = Some((offset, sequence));
        }
    }
    match pending {
        Some((offset, _)) => Err(ConversionError::Truncated { offset }),
        None => Ok(()),
    }
}
