//! Byte classification helpers shared by every parser.
//!
//! All predicates work on single ASCII bytes. Bytes outside the ASCII range
//! (for example continuation bytes of multi-byte UTF-8 sequences) are never
//! hex digits, alphanumerics or color-name characters, so they always act as
//! word boundaries.

/// Returns `true` for `0-9`, `a-f` and `A-F`.
#[inline]
pub const fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

/// Returns `true` for ASCII letters and digits.
#[inline]
pub const fn is_alphanumeric(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// Returns `true` for bytes that may appear inside a color name.
///
/// Color names are alphanumeric, plus `-` for composite palette names such as
/// `bg-red-500`.
#[inline]
pub const fn is_valid_color_char(byte: u8) -> bool {
    is_alphanumeric(byte) || byte == b'-'
}

/// Returns `true` for the whitespace bytes accepted between CSS function
/// arguments: space, `\t`, `\n`, vertical tab, form feed and `\r`.
#[inline]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns `true` for ASCII digits and `.`, the bytes of an unsigned CSS number.
#[inline]
pub const fn is_number_char(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b'.'
}

/// Decodes a hex digit into its value.
///
/// Callers must check [`is_hex_digit`] first; any other byte decodes to 0.
#[inline]
pub const fn hex_nibble(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digits() {
        for byte in b"0123456789abcdefABCDEF" {
            assert!(is_hex_digit(*byte), "{} should be hex", *byte as char);
        }
        for byte in b"gGzZ #-x" {
            assert!(!is_hex_digit(*byte));
        }
    }

    #[test]
    fn test_hex_nibble() {
        assert_eq!(hex_nibble(b'0'), 0);
        assert_eq!(hex_nibble(b'9'), 9);
        assert_eq!(hex_nibble(b'a'), 10);
        assert_eq!(hex_nibble(b'F'), 15);
    }

    #[test]
    fn test_color_chars() {
        assert!(is_valid_color_char(b'a'));
        assert!(is_valid_color_char(b'7'));
        assert!(is_valid_color_char(b'-'));
        assert!(!is_valid_color_char(b'_'));
        assert!(!is_valid_color_char(b';'));
        assert!(!is_valid_color_char(0xC3));
    }

    #[test]
    fn test_space_includes_vertical_tab() {
        assert!(is_space(0x0B));
        assert!(is_space(b'\t'));
        assert!(!is_space(b','));
    }
}
