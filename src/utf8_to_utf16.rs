use crate::error::ConversionError;
use crate::utf::{utf16sequence::Utf16Sequence, Endianness};
use crate::validate::for_each_scalar;

/// Output capacity [`convert_utf8_to_utf16`] requires for `utf8_len` input bytes.
pub const fn utf16_capacity_for(utf8_len: usize) -> Option<usize> {
    utf8_len.checked_mul(2)
}

/// Converts UTF-8 `input` into UTF-16 code units written to `output` in the
/// given byte order, returning the number of bytes written.
///
/// `output` must hold at least twice as many bytes as `input`; otherwise the
/// call fails before anything is written. No byte-order mark is inserted, and
/// a `U+FEFF` already present in the input is converted like any other
/// character. On error the contents of `output` are unspecified.
pub fn convert_utf8_to_utf16(
    input: &[u8],
    output: &mut [u8],
    endianness: Endianness,
) -> Result<usize, ConversionError> {
    if input.is_empty() {
        return Ok(0);
    }
    let required = utf16_capacity_for(input.len()).ok_or(ConversionError::InputTooLong {
        length: input.len(),
        maximum: usize::MAX / 2,
    })?;
    if output.len() < required {
        return Err(ConversionError::OutputTooSmall {
            required,
            actual: output.len(),
        });
    }

    // Every sequence of n bytes yields at most 2n bytes, so `output` cannot overrun.
    let mut written = 0;
    for_each_scalar(input, |scalar| {
        for &unit in Utf16Sequence::encode(scalar).units() {
            output[written..written + 2].copy_from_slice(&endianness.write_unit(unit));
            written += 2;
        }
    })?;
    Ok(written)
}

/// Allocating form of [`convert_utf8_to_utf16`].
pub fn encode_utf16(input: &[u8], endianness: Endianness) -> Result<Vec<u8>, ConversionError> {
    let capacity = utf16_capacity_for(input.len()).ok_or(ConversionError::InputTooLong {
        length: input.len(),
        maximum: usize::MAX / 2,
    })?;
    let mut output = vec![0; capacity];
    let length = convert_utf8_to_utf16(input, &mut output, endianness)?;
    output.truncate(length);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    use super::*;

    fn convert(input: &[u8], endianness: Endianness) -> Result<Vec<u8>, ConversionError> {
        let mut output = vec![0; input.len() * 2];
        let length = convert_utf8_to_utf16(input, &mut output, endianness)?;
        assert!(length <= output.len());
        output.truncate(length);
        Ok(output)
    }

    #[test]
    fn empty() {
        assert_eq!(convert_utf8_to_utf16(b"", &mut [], Endianness::LittleEndian), Ok(0));
    }

    #[rstest]
    #[case::little(
        Endianness::LittleEndian,
        &[0x48, 0x00, 0x65, 0x00, 0x6C, 0x00, 0x6C, 0x00, 0x6F, 0x00]
    )]
    #[case::big(
        Endianness::BigEndian,
        &[0x00, 0x48, 0x00, 0x65, 0x00, 0x6C, 0x00, 0x6C, 0x00, 0x6F]
    )]
    fn hello(#[case] endianness: Endianness, #[case] expected: &[u8]) {
        let output = convert(b"Hello", endianness).unwrap();
        assert_eq!(output.len() / 2, 5);
        assert_eq!(output, expected);
    }

    #[rstest]
    #[case::chinese_le("\u{4F60}\u{597D}", Endianness::LittleEndian, &[0x60, 0x4F, 0x7D, 0x59])]
    #[case::chinese_be("\u{4F60}\u{597D}", Endianness::BigEndian, &[0x4F, 0x60, 0x59, 0x7D])]
    #[case::russian("\u{041C}\u{0438}\u{0440}", Endianness::LittleEndian, &[0x1C, 0x04, 0x38, 0x04, 0x40, 0x04])]
    #[case::various_surrogates(
        "\u{10437}\u{24B62}",
        Endianness::LittleEndian,
        &[0x01, 0xD8, 0x37, 0xDC, 0x52, 0xD8, 0x62, 0xDF]
    )]
    #[case::various_surrogates_be(
        "\u{10437}\u{24B62}",
        Endianness::BigEndian,
        &[0xD8, 0x01, 0xDC, 0x37, 0xD8, 0x52, 0xDF, 0x62]
    )]
    #[case::emoji(
        "\u{1F600} Hello, World!\u{1F600} \u{1F30D}",
        Endianness::LittleEndian,
        &[
            0x3D, 0xD8, 0x00, 0xDE, 0x20, 0x00, 0x48, 0x00, 0x65, 0x00, 0x6C, 0x00, 0x6C, 0x00,
            0x6F, 0x00, 0x2C, 0x00, 0x20, 0x00, 0x57, 0x00, 0x6F, 0x00, 0x72, 0x00, 0x6C, 0x00,
            0x64, 0x00, 0x21, 0x00, 0x3D, 0xD8, 0x00, 0xDE, 0x20, 0x00, 0x3C, 0xD8, 0x0D, 0xDF,
        ]
    )]
    #[case::bom_is_ordinary(
        "\u{FEFF}Hello",
        Endianness::LittleEndian,
        &[0xFF, 0xFE, 0x48, 0x00, 0x65, 0x00, 0x6C, 0x00, 0x6C, 0x00, 0x6F, 0x00]
    )]
    fn converts(#[case] text: &str, #[case] endianness: Endianness, #[case] expected: &[u8]) {
        assert_eq!(convert(text.as_bytes(), endianness).unwrap(), expected);
    }

    #[rstest]
    #[case::c0(&[0xC0, 0x80], ConversionError::InvalidLeadByte { byte: 0xC0, offset: 0 })]
    #[case::overlong(&[0xE0, 0x81, 0x81], ConversionError::Overlong { codepoint: 0x41, offset: 0 })]
    #[case::surrogate(&[0xED, 0xB0, 0x80], ConversionError::SurrogateCodePoint { codepoint: 0xDC00, offset: 0 })]
    #[case::too_large(&[0xF7, 0xBF, 0xBF, 0xBF], ConversionError::InvalidLeadByte { byte: 0xF7, offset: 0 })]
    #[case::bad_continuation(&[b'a', 0xC3, b'b'], ConversionError::InvalidContinuation { byte: b'b', offset: 2 })]
    #[case::truncated(&[b'a', 0xF0, 0x9F, 0x98], ConversionError::Truncated { offset: 1 })]
    fn rejects(#[case] input: &[u8], #[case] error: ConversionError) {
        assert_eq!(convert(input, Endianness::LittleEndian), Err(error));
    }

    #[test]
    fn output_too_small() {
        let mut output = [0xAA; 9];
        assert_eq!(
            convert_utf8_to_utf16(b"Hello", &mut output, Endianness::LittleEndian),
            Err(ConversionError::OutputTooSmall {
                required: 10,
                actual: 9
            })
        );
        assert_eq!(output, [0xAA; 9]);
    }

    #[test]
    fn larger_output_is_fine() {
        let mut output = [0; 64];
        let length = convert_utf8_to_utf16(b"Hi", &mut output, Endianness::BigEndian).unwrap();
        assert_eq!(&output[..length], &[0x00, b'H', 0x00, b'i']);
    }

    #[test]
    fn allocating() {
        assert_eq!(
            encode_utf16("\u{1F600}".as_bytes(), Endianness::default()).unwrap(),
            [0x3D, 0xD8, 0x00, 0xDE]
        );
        assert!(encode_utf16(&[0xC1, 0x81], Endianness::default()).is_err());
    }

    #[test]
    fn capacity() {
        assert_eq!(utf16_capacity_for(0), Some(0));
        assert_eq!(utf16_capacity_for(7), Some(14));
        assert_eq!(utf16_capacity_for(usize::MAX), None);
    }

    #[quickcheck]
    fn matches_std(text: String) -> bool {
        let expected: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
        convert(text.as_bytes(), Endianness::LittleEndian) == Ok(expected)
    }

    #[quickcheck]
    fn within_bounds(text: String) -> bool {
        let bytes = text.as_bytes();
        [Endianness::LittleEndian, Endianness::BigEndian]
            .into_iter()
            .all(|endianness| match convert(bytes, endianness) {
                Ok(output) => output.len() <= bytes.len() * 2 && output.len() % 2 == 0,
                Err(_) => false,
            })
    }
}
