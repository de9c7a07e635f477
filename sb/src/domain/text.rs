//! Blank-text checks for user input
//!
//! "Blank" uses the ECMAScript whitespace set (WhiteSpace plus
//! LineTerminator), which differs from `char::is_whitespace`: U+FEFF counts
//! as whitespace and U+0085 does not.

/// ECMAScript WhiteSpace or LineTerminator code point
pub fn is_ecma_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// True when `s` is empty or only whitespace
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_ecma_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank(" \t\r\n\u{000B}\u{000C}"));
        assert!(!is_blank("  x  "));
    }

    #[test]
    fn test_byte_order_mark_is_blank() {
        assert!(is_blank("\u{FEFF}"));
        assert!(is_blank(" \u{FEFF}\u{00A0}\u{3000}\u{2028}"));
    }

    #[test]
    fn test_next_line_is_not_blank() {
        assert!(!is_blank("\u{0085}"));
    }

    #[test]
    fn test_zero_width_space_is_not_blank() {
        assert!(!is_blank("\u{200B}"));
    }
}
