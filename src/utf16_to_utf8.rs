use itertools::Itertools;

use crate::error::ConversionError;
use crate::utf::{
    utf16sequence::Utf16Sequence, utf8sequence::Utf8Sequence, Endianness, Utf,
    MAX_UTF16_INPUT_LEN,
};

/// Output capacity [`convert_utf16_to_utf8`] requires for `utf16_len` input
/// bytes, or `None` if the input is longer than [`MAX_UTF16_INPUT_LEN`].
pub const fn utf8_capacity_for(utf16_len: usize) -> Option<usize> {
    if utf16_len > MAX_UTF16_INPUT_LEN {
        None
    } else {
        Some(utf16_len + (utf16_len >> 1))
    }
}

/// Converts UTF-16 `input` into UTF-8 written to `output`, returning the
/// number of bytes written.
///
/// `input` is read in the given byte order unless it is at least four bytes
/// long and starts with a byte-order mark, in which case the mark decides.
/// The mark itself is kept and comes out as `EF BB BF`.
///
/// `output` must hold at least `input.len() + input.len() / 2` bytes. Odd
/// input lengths, inputs beyond [`MAX_UTF16_INPUT_LEN`] and short outputs fail
/// before anything is written. On any other error the contents of `output`
/// are unspecified.
pub fn convert_utf16_to_utf8(
    input: &[u8],
    output: &mut [u8],
    endianness: Endianness,
) -> Result<usize, ConversionError> {
    if input.is_empty() {
        return Ok(0);
    }
    if input.len() % 2 != 0 {
        return Err(ConversionError::OddLength {
            length: input.len(),
        });
    }
    let required = utf8_capacity_for(input.len()).ok_or(ConversionError::InputTooLong {
        length: input.len(),
        maximum: MAX_UTF16_INPUT_LEN,
    })?;
    if output.len() < required {
        return Err(ConversionError::OutputTooSmall {
            required,
            actual: output.len(),
        });
    }

    let endianness = if input.len() >= 4 {
        Endianness::from_bom(input).unwrap_or(endianness)
    } else {
        endianness
    };

    // A unit never grows past 3 bytes and a pair never past 4, so `output`
    // cannot overrun.
    let mut written = 0;
    let mut pending: Option<(usize, Utf16Sequence)> = None;
    for (index, (first, second)) in input.iter().copied().tuples().enumerate() {
        let offset = index * 2;
        let unit = endianness.read_unit([first, second]);
        let sequence = match pending.take() {
            Some((start, mut sequence)) => {
                if !sequence.add_point(unit) {
                    return Err(ConversionError::UnpairedSurrogate {
                        unit: sequence.lead(),
                        offset: start,
                    });
                }
                sequence
            }
            None => {
                let sequence = Utf16Sequence::build(unit)
                    .ok_or(ConversionError::UnpairedSurrogate { unit, offset })?;
                if !sequence.is_complete() {
                    pending = Some((offset, sequence));
                    continue;
                }
                sequence
            }
        };
        debug_assert!(sequence.is_valid());
        let encoded = Utf8Sequence::encode(sequence.get_codepoint());
        let bytes = encoded.as_bytes();
        output[written..written + bytes.len()].copy_from_slice(bytes);
        written += bytes.len();
    }
    if let Some((offset, sequence)) = pending {
        return Err(ConversionError::UnpairedSurrogate {
            unit: sequence.lead(),
            offset,
        });
    }
    Ok(written)
}

/// Allocating form of [`convert_utf16_to_utf8`].
pub fn decode_utf16(input: &[u8], endianness: Endianness) -> Result<Vec<u8>, ConversionError> {
    if input.len() % 2 != 0 {
        return Err(ConversionError::OddLength {
            length: input.len(),
        });
    }
    let capacity = utf8_capacity_for(input.len()).ok_or(ConversionError::InputTooLong {
        length: input.len(),
        maximum: MAX_UTF16_INPUT_LEN,
    })?;
    let mut output = vec![0; capacity];
    let length = convert_utf16_to_utf8(input, &mut output, endianness)?;
    output.truncate(length);
    Ok(output)
}
