/// Transcoding direction, fixed for the duration of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Hexadecimal to Hexlish
    #[default]
    Encode,
    /// Hexlish to hexadecimal
    Decode,
}

/// Map one hexadecimal digit to its Hexlish letter.
/// Both cases of a-f collapse to the same letter; the original case is lost.
pub const fn encode_digit(ch: char) -> Option<char> {
    match ch {
        '0' => Some('A'),
        '1' => Some('C'),
        '2' => Some('E'),
        '3' => Some('H'),
        '4' => Some('I'),
        '5' => Some('J'),
        '6' => Some('L'),
        '7' => Some('M'),
        '8' => Some('N'),
        '9' => Some('O'),
        'A' | 'a' => Some('P'),
        'B' | 'b' => Some('R'),
        'C' | 'c' => Some('S'),
        'D' | 'd' => Some('T'),
        'E' | 'e' => Some('U'),
        'F' | 'f' => Some('V'),
        _ => None,
    }
}

/// Map one Hexlish letter back to its hexadecimal digit.
/// Inverse of the upper-case half of the encode table; always yields
/// upper-case hex.
pub const fn decode_letter(ch: char) -> Option<char> {
    match ch {
        'A' => Some('0'),
        'C' => Some('1'),
        'E' => Some('2'),
        'H' => Some('3'),
        'I' => Some('4'),
        'J' => Some('5'),
        'L' => Some('6'),
        'M' => Some('7'),
        'N' => Some('8'),
        'O' => Some('9'),
        'P' => Some('A'),
        'R' => Some('B'),
        'S' => Some('C'),
        'T' => Some('D'),
        'U' => Some('E'),
        'V' => Some('F'),
        _ => None,
    }
}

/// Look up one character in the table for the given mode.
/// `None` means the character has no mapping; the caller decides whether to
/// drop it or pass it through.
pub const fn translate(ch: char, mode: Mode) -> Option<char> {
    match mode {
        Mode::Encode => encode_digit(ch),
        Mode::Decode => decode_letter(ch),
    }
}

/// Whitespace the transcoder removes from lines instead of passing through
pub const fn is_stripped_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_covers_every_hex_digit() {
        let digits = "0123456789ABCDEF";
        let hexlish = "ACEHIJLMNOPRSTUV";
        for (d, h) in digits.chars().zip(hexlish.chars()) {
            assert_eq!(encode_digit(d), Some(h));
            assert_eq!(encode_digit(d.to_ascii_lowercase()), Some(h));
        }
    }

    #[test]
    fn test_decode_is_inverse_of_upper_case_encode() {
        for h in "ACEHIJLMNOPRSTUV".chars() {
            let d = decode_letter(h).expect("every Hexlish letter decodes");
            assert_eq!(encode_digit(d), Some(h));
        }
    }

    #[test]
    fn test_encode_then_decode_upper_cases_hex() {
        for d in "0123456789abcdefABCDEF".chars() {
            let encoded = encode_digit(d).unwrap();
            assert_eq!(decode_letter(encoded), Some(d.to_ascii_uppercase()));
        }
    }

    #[test]
    fn test_unmapped_characters_miss() {
        assert_eq!(encode_digit('G'), None);
        assert_eq!(encode_digit('-'), None);
        // B is a hex digit but not a Hexlish letter
        assert_eq!(decode_letter('B'), None);
        assert_eq!(decode_letter('0'), None);
        assert_eq!(decode_letter('a'), None);
    }

    #[test]
    fn test_translate_dispatches_by_mode() {
        assert_eq!(translate('D', Mode::Encode), Some('T'));
        assert_eq!(translate('T', Mode::Decode), Some('D'));
        assert_eq!(translate('T', Mode::Encode), None);
    }

    #[test]
    fn test_stripped_whitespace_set() {
        for ch in [' ', '\t', '\n', '\r'] {
            assert!(is_stripped_whitespace(ch));
        }
        // Only the four ASCII whitespace characters are stripped
        assert!(!is_stripped_whitespace('\u{a0}'));
        assert!(!is_stripped_whitespace('-'));
    }
}
