use crate::utf::*;

#[derive(Clone, Copy)]
enum Utf16Type {
    Bmp(u16),
    Surrogate { data: [u16; 2], is_complete: bool },
}

/// One UTF-16 encoded code point: a single BMP unit or a surrogate pair.
pub(crate) struct Utf16Sequence(Utf16Type);

impl Utf for Utf16Sequence {
    type Point = u16;

    /// A low surrogate cannot start a sequence.
    #[inline]
    fn build(point: Self::Point) -> Option<Self> {
        let unit = point as u32;
        let data = if is_high_surrogate(unit) {
            Utf16Type::Surrogate {
                data: [point, 0],
                is_complete: false,
            }
        } else if is_low_surrogate(unit) {
            return None;
        } else {
            Utf16Type::Bmp(point)
        };
        Some(Self(data))
    }

    #[inline]
    fn is_complete(&self) -> bool {
        match self.0 {
            Utf16Type::Bmp(_) => true,
            Utf16Type::Surrogate { is_complete, .. } => is_complete,
        }
    }

    #[inline]
    fn add_point(&mut self, point: Self::Point) -> bool {
        match self.0 {
            Utf16Type::Bmp(_) => false,
            Utf16Type::Surrogate {
                ref mut data,
                ref mut is_complete,
            } => {
                if *is_complete || !is_low_surrogate(point as u32) {
                    false
                } else {
                    data[1] = point;
                    *is_complete = true;
                    true
                }
            }
        }
    }

    #[inline]
    fn get_codepoint(&self) -> u32 {
        match self.0 {
            Utf16Type::Bmp(unit) => unit as u32,
            Utf16Type::Surrogate { data, .. } => {
                let high = data[0] as u32;
                let low = data[1] as u32;
                (high << 10).wrapping_add(low).wrapping_add(SURROGATE_OFFSET)
            }
        }
    }
}

impl Utf16Sequence {
    /// Splits a scalar value (not a surrogate, at most `U+10FFFF`) into one
    /// unit or a surrogate pair.
    #[inline]
    pub const fn encode(scalar: u32) -> Self {
        if scalar > MAXIMUM_BMP_VALUE {
            let high = (LEAD_OFFSET + (scalar >> 10)) as u16;
            let low = (SURROGATE_LOW_MIN + (scalar & 0x3FF)) as u16;
            Self(Utf16Type::Surrogate {
                data: [high, low],
                is_complete: true,
            })
        } else {
            Self(Utf16Type::Bmp(scalar as u16))
        }
    }

    #[inline]
    pub fn units(&self) -> &[u16] {
        match &self.0 {
            Utf16Type::Bmp(unit) => std::slice::from_ref(unit),
            Utf16Type::Surrogate { data, .. } => &data[..],
        }
    }

    /// The leading unit, which for an incomplete pair is the lone high surrogate.
    pub const fn lead(&self) -> u16 {
        match self.0 {
            Utf16Type::Bmp(unit) => unit,
            Utf16Type::Surrogate { data, .. } => data[0],
        }
    }
}
