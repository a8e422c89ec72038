//! Keyboard types and the characters each one admits.

/// The kind of keyboard a field asks for, numbered `0..=9`.
///
/// On a terminal there is no soft keyboard to swap, so the type becomes an
/// input filter: a number pad field simply refuses letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyboardType {
    /// Anything printable.
    #[default]
    Default,
    /// Printable ASCII only.
    AsciiCapable,
    /// Digits, ASCII punctuation and spaces.
    NumbersAndPunctuation,
    /// No whitespace.
    Url,
    /// Digits only.
    NumberPad,
    /// Digits plus `+ * # , ;`.
    PhonePad,
    /// Names and phone numbers: anything printable.
    NamePhonePad,
    /// No whitespace.
    EmailAddress,
    /// Digits and at most one decimal point.
    DecimalPad,
    /// Anything printable.
    Twitter,
}

impl KeyboardType {
    /// All types in code order.
    pub const ALL: [KeyboardType; 10] = [
        KeyboardType::Default,
        KeyboardType::AsciiCapable,
        KeyboardType::NumbersAndPunctuation,
        KeyboardType::Url,
        KeyboardType::NumberPad,
        KeyboardType::PhonePad,
        KeyboardType::NamePhonePad,
        KeyboardType::EmailAddress,
        KeyboardType::DecimalPad,
        KeyboardType::Twitter,
    ];

    /// Look up a type by its numeric code. Codes outside `0..=9` fall back
    /// to [`KeyboardType::Default`].
    pub fn from_code(code: i64) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .unwrap_or_default()
    }

    /// The numeric code of this type.
    pub fn code(self) -> u8 {
        Self::ALL
            .iter()
            .position(|kind| *kind == self)
            .map_or(0, |idx| idx as u8)
    }

    /// Whether `c` may be inserted into a field whose current content is
    /// `existing`.
    pub fn accepts(self, c: char, existing: &[char]) -> bool {
        if c.is_control() {
            return false;
        }
        match self {
            KeyboardType::Default | KeyboardType::NamePhonePad | KeyboardType::Twitter => true,
            KeyboardType::AsciiCapable => c.is_ascii(),
            KeyboardType::NumbersAndPunctuation => {
                c.is_ascii_digit() || c.is_ascii_punctuation() || c == ' '
            }
            KeyboardType::Url | KeyboardType::EmailAddress => !c.is_whitespace(),
            KeyboardType::NumberPad => c.is_ascii_digit(),
            KeyboardType::PhonePad => c.is_ascii_digit() || "+*#,;".contains(c),
            KeyboardType::DecimalPad => {
                c.is_ascii_digit() || (c == '.' && !existing.contains(&'.'))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for (code, kind) in KeyboardType::ALL.iter().enumerate() {
            assert_eq!(KeyboardType::from_code(code as i64), *kind);
            assert_eq!(kind.code() as usize, code);
        }
    }

    #[test]
    fn out_of_range_codes_fall_back_to_default() {
        assert_eq!(KeyboardType::from_code(15), KeyboardType::Default);
        assert_eq!(KeyboardType::from_code(10), KeyboardType::Default);
        assert_eq!(KeyboardType::from_code(-1), KeyboardType::Default);
    }

    #[test]
    fn number_pad_rejects_letters() {
        assert!(KeyboardType::NumberPad.accepts('7', &[]));
        assert!(!KeyboardType::NumberPad.accepts('a', &[]));
        assert!(!KeyboardType::NumberPad.accepts('.', &[]));
    }

    #[test]
    fn decimal_pad_allows_one_point() {
        assert!(KeyboardType::DecimalPad.accepts('.', &['1']));
        assert!(!KeyboardType::DecimalPad.accepts('.', &['1', '.', '5']));
    }

    #[test]
    fn email_rejects_whitespace() {
        assert!(KeyboardType::EmailAddress.accepts('@', &[]));
        assert!(!KeyboardType::EmailAddress.accepts(' ', &[]));
    }

    #[test]
    fn control_chars_never_accepted() {
        for kind in KeyboardType::ALL {
            assert!(!kind.accepts('\u{7}', &[]));
        }
    }

    #[test]
    fn ascii_capable_rejects_unicode() {
        assert!(KeyboardType::AsciiCapable.accepts('e', &[]));
        assert!(!KeyboardType::AsciiCapable.accepts('é', &[]));
        assert!(KeyboardType::Default.accepts('é', &[]));
    }
}
