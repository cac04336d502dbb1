//! WinAnsiEncoding (Windows code page 1252) for the standard Type1 fonts.

/// Code written in place of characters the encoding cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Maps a character to its WinAnsi code.
///
/// Stars have no WinAnsi code and become `*`; anything else without a code becomes `?`.
pub fn win_ansi_code(c: char) -> u8 {
    let cp = c as u32;
    match cp {
        0x20..=0x7E | 0xA0..=0xFF => cp as u8,
        _ => match c {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            '★' | '☆' => b'*',
            _ => REPLACEMENT,
        },
    }
}

/// Encodes a string for a `Tj` operand.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_and_latin1_pass_through() {
        assert_eq!(to_win_ansi("CP4D & MQ"), b"CP4D & MQ".to_vec());
        assert_eq!(to_win_ansi("é"), vec![0xE9]);
    }

    #[test]
    fn test_cp1252_specials() {
        assert_eq!(to_win_ansi("–•€"), vec![0x96, 0x95, 0x80]);
    }

    #[test]
    fn test_unrepresentable_characters() {
        assert_eq!(to_win_ansi("★ ELA"), b"* ELA".to_vec());
        assert_eq!(to_win_ansi("漢"), vec![REPLACEMENT]);
        assert_eq!(to_win_ansi("\n"), vec![REPLACEMENT]);
    }
}
