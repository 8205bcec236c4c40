//! CSS functional color notation: `rgb()`, `rgba()`, `hsl()` and `hsla()`.
//!
//! Both the legacy comma syntax (`rgb(255, 0, 0)`, `rgba(0,255,0,0.5)`) and
//! the modern space syntax (`rgb(255 0 0 / 50%)`) are accepted, but a single
//! literal may not mix them. The arguments are read with a small byte
//! [`Cursor`] rather than a pattern engine; number runs are consumed greedily
//! and never split.
//!
//! # Examples
//!
//! ```
//! use colorscan_core::css::{parse_hsl_function, parse_rgb_function, FunctionPrefix};
//!
//! let m = parse_rgb_function(b"rgb(255, 0, 0)", 0, FunctionPrefix::Rgb).unwrap();
//! assert_eq!((m.consumed, m.rgb_hex.as_str()), (14, "ff0000"));
//!
//! let m = parse_hsl_function(b"hsl(120,100%,50%)", 0, FunctionPrefix::Hsl).unwrap();
//! assert_eq!(m.rgb_hex, "00ff00");
//!
//! // Mixed separators decline.
//! assert!(parse_rgb_function(b"rgb(255 0, 0)", 0, FunctionPrefix::Rgb).is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::classify::{is_number_char, is_space};
use crate::color::{hex_from_channels, ColorMatch};
use crate::convert::hsl_to_rgb;
use crate::error::OptionsError;

// ============================================================================
// Prefixes
// ============================================================================

/// Name of a CSS color function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionPrefix {
    /// `rgb(`
    Rgb,
    /// `rgba(`
    Rgba,
    /// `hsl(`
    Hsl,
    /// `hsla(`
    Hsla,
}

impl FunctionPrefix {
    /// Every prefix.
    pub const ALL: [FunctionPrefix; 4] = [Self::Rgb, Self::Rgba, Self::Hsl, Self::Hsla];

    /// Returns the function name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
        }
    }

    /// Length of the shortest literal this function can form.
    pub const fn min_len(self) -> usize {
        match self {
            // rgb(0,0,0)
            Self::Rgb => 10,
            Self::Rgba => 11,
            // hsl(0,0%,0%)
            Self::Hsl => 12,
            Self::Hsla => 13,
        }
    }

    /// Returns `true` for `hsl` and `hsla`.
    pub const fn is_hsl(self) -> bool {
        matches!(self, Self::Hsl | Self::Hsla)
    }
}

impl fmt::Display for FunctionPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunctionPrefix {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|prefix| prefix.as_str() == s)
            .ok_or_else(|| OptionsError::UnknownPrefix(s.to_string()))
    }
}

// ============================================================================
// Tokenizer
// ============================================================================

/// Forward-only reader over a line.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(line: &'a [u8], pos: usize) -> Self {
        Self { line, pos }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Consumes `expected` if the input continues with it.
    pub(crate) fn eat(&mut self, expected: &[u8]) -> bool {
        let matched = self
            .line
            .get(self.pos..)
            .is_some_and(|rest| rest.starts_with(expected));
        if matched {
            self.pos += expected.len();
        }
        matched
    }

    /// Consumes the longest run of bytes matching `pred`.
    pub(crate) fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while self.line.get(self.pos).is_some_and(|&b| pred(b)) {
            self.pos += 1;
        }
        &self.line[start..self.pos]
    }

    /// Consumes one byte if it matches `pred`.
    pub(crate) fn take_one(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        if self.line.get(self.pos).is_some_and(|&b| pred(b)) {
            self.pos += 1;
        }
        &self.line[start..self.pos]
    }

    pub(crate) fn skip_spaces(&mut self) {
        self.take_while(is_space);
    }

    /// Consumes a non-empty run of bytes matching `pred`.
    fn expect_run(&mut self, pred: impl Fn(u8) -> bool) -> Option<&'a [u8]> {
        let run = self.take_while(pred);
        (!run.is_empty()).then_some(run)
    }
}

/// Separator between two channels: an optional single captured space, any
/// further spaces, an optional comma, and trailing spaces.
#[derive(Debug, Clone, Copy)]
struct Separator<'a> {
    space: &'a [u8],
    comma: &'a [u8],
}

fn read_separator<'a>(cursor: &mut Cursor<'a>) -> Separator<'a> {
    let space = cursor.take_one(is_space);
    cursor.skip_spaces();
    let comma = cursor.take_one(|b| b == b',');
    cursor.skip_spaces();
    Separator { space, comma }
}

/// Everything after the third channel: `ws* ("/"? ","?) ws* ALPHA "%"? ws* ")"`.
#[derive(Debug, Clone, Copy)]
struct Tail<'a> {
    sep: &'a [u8],
    alpha: &'a [u8],
    alpha_unit: &'a [u8],
    /// Position just past the closing parenthesis.
    end: usize,
}

fn read_tail<'a>(cursor: &mut Cursor<'a>) -> Option<Tail<'a>> {
    cursor.skip_spaces();
    let sep_start = cursor.pos();
    cursor.take_one(|b| b == b'/');
    cursor.take_one(|b| b == b',');
    let sep = &cursor.line[sep_start..cursor.pos()];
    cursor.skip_spaces();
    let alpha = cursor.take_while(is_number_char);
    let alpha_unit = cursor.take_one(|b| b == b'%');
    cursor.skip_spaces();
    if !cursor.eat(b")") {
        return None;
    }
    Some(Tail {
        sep,
        alpha,
        alpha_unit,
        end: cursor.pos(),
    })
}

// ============================================================================
// Shared validation
// ============================================================================

/// Checks that a literal uses either the comma or the space syntax.
///
/// Any comma puts the literal in comma syntax, where exactly two commas are
/// required, or three when an alpha value is present. Otherwise both channel
/// separators must be spaces and an alpha value must follow a `/`.
fn separators_valid(first: Separator<'_>, second: Separator<'_>, tail: &Tail<'_>) -> bool {
    let has_alpha = !tail.alpha.is_empty();
    let min_commas = if has_alpha { 3 } else { 2 };

    let commas = [first.comma, second.comma, tail.sep]
        .iter()
        .flat_map(|part| part.iter())
        .filter(|&&b| b == b',')
        .count();

    if commas > 0 {
        return commas == min_commas;
    }
    if first.space.len() + second.space.len() >= 2 {
        return !has_alpha || tail.sep == b"/";
    }
    false
}

fn parse_number(bytes: &[u8]) -> Option<f64> {
    std::str::from_utf8(bytes).ok()?.parse::<f64>().ok()
}

/// Resolves the alpha capture to a fraction no greater than 1.
fn parse_alpha(tail: &Tail<'_>) -> Option<f64> {
    if tail.alpha.is_empty() {
        return Some(1.0);
    }
    let mut alpha = parse_number(tail.alpha)?;
    if tail.alpha_unit == b"%" {
        alpha /= 100.0;
    }
    Some(alpha.min(1.0))
}

#[inline]
fn remaining_at_least(line: &[u8], offset: usize, prefix: FunctionPrefix) -> bool {
    line.len()
        .checked_sub(offset)
        .is_some_and(|remaining| remaining >= prefix.min_len())
}

// ============================================================================
// rgb() / rgba()
// ============================================================================

/// Parses an `rgb()` or `rgba()` literal starting with `prefix` at `offset`.
///
/// Channels are either all percentages or all plain numbers. Plain numbers
/// are capped at 255 and percentages scale to `0..=255`.
pub fn parse_rgb_function(line: &[u8], offset: usize, prefix: FunctionPrefix) -> Option<ColorMatch> {
    if !remaining_at_least(line, offset, prefix) {
        return None;
    }

    let mut cursor = Cursor::new(line, offset);
    if !cursor.eat(prefix.as_str().as_bytes()) || !cursor.eat(b"(") {
        return None;
    }
    cursor.skip_spaces();

    let mut values = [&[][..]; 3];
    let mut units = [&[][..]; 3];
    let mut seps = [Separator {
        space: &[],
        comma: &[],
    }; 2];

    for i in 0..3 {
        values[i] = cursor.expect_run(is_number_char)?;
        units[i] = cursor.take_one(|b| b == b'%');
        if i < 2 {
            seps[i] = read_separator(&mut cursor);
        }
    }
    let tail = read_tail(&mut cursor)?;

    if !separators_valid(seps[0], seps[1], &tail) {
        return None;
    }
    let alpha = parse_alpha(&tail)?;

    let percents = units.iter().filter(|unit| !unit.is_empty()).count();
    if percents != 0 && percents != 3 {
        return None;
    }

    let mut channels = [0.0; 3];
    for (channel, value) in channels.iter_mut().zip(values) {
        let value = parse_number(value)?;
        *channel = if percents == 3 {
            value / 100.0 * 255.0
        } else {
            value.min(255.0)
        };
    }

    let [r, g, b] = channels;
    Some(ColorMatch::new(
        tail.end - offset,
        hex_from_channels(r * alpha, g * alpha, b * alpha),
    ))
}

// ============================================================================
// hsl() / hsla()
// ============================================================================

/// Parses an `hsl()` or `hsla()` literal starting with `prefix` at `offset`.
///
/// The hue may carry a `deg` or `turn` unit and wraps around at 360 degrees.
/// Saturation and lightness are integer percentages capped at 100.
pub fn parse_hsl_function(line: &[u8], offset: usize, prefix: FunctionPrefix) -> Option<ColorMatch> {
    if !remaining_at_least(line, offset, prefix) {
        return None;
    }

    let mut cursor = Cursor::new(line, offset);
    if !cursor.eat(prefix.as_str().as_bytes()) || !cursor.eat(b"(") {
        return None;
    }
    cursor.skip_spaces();

    let hue = cursor.expect_run(is_number_char)?;
    let degrees = cursor.take_while(|b| matches!(b, b'd' | b'e' | b'g'));
    let turns = cursor.take_while(|b| matches!(b, b't' | b'u' | b'r' | b'n'));
    let first = read_separator(&mut cursor);

    let saturation = cursor.expect_run(|b| b.is_ascii_digit())?;
    if !cursor.eat(b"%") {
        return None;
    }
    let second = read_separator(&mut cursor);

    let lightness = cursor.expect_run(|b| b.is_ascii_digit())?;
    if !cursor.eat(b"%") {
        return None;
    }
    let tail = read_tail(&mut cursor)?;

    if !separators_valid(first, second, &tail) {
        return None;
    }
    let alpha = parse_alpha(&tail)?;

    let is_turn = match (degrees, turns) {
        (b"", b"") | (b"deg", b"") => false,
        (b"", b"turn") => true,
        _ => return None,
    };

    let mut h = parse_number(hue)?;
    if is_turn {
        h *= 360.0;
    }
    if h > 360.0 {
        h -= 360.0 * (h / 360.0).floor();
    }
    let s = parse_number(saturation)?.min(100.0);
    let l = parse_number(lightness)?.min(100.0);

    let (r, g, b) = hsl_to_rgb(h / 360.0, s / 100.0, l / 100.0)?;
    Some(ColorMatch::new(
        tail.end - offset,
        hex_from_channels(r * alpha, g * alpha, b * alpha),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(text: &str, prefix: FunctionPrefix) -> Option<String> {
        parse_rgb_function(text.as_bytes(), 0, prefix).map(|m| m.rgb_hex.to_string())
    }

    fn hsl(text: &str, prefix: FunctionPrefix) -> Option<String> {
        parse_hsl_function(text.as_bytes(), 0, prefix).map(|m| m.rgb_hex.to_string())
    }

    mod cursor_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_runs_and_single_bytes() {
            let mut cursor = Cursor::new(b"12.5%  ,x", 0);
            assert_eq!(cursor.take_while(is_number_char), b"12.5");
            assert_eq!(cursor.take_one(|b| b == b'%'), b"%");
            assert_eq!(cursor.take_one(is_space), b" ");
            cursor.skip_spaces();
            assert!(cursor.eat(b","));
            assert!(!cursor.eat(b"y"));
            assert_eq!(cursor.take_one(is_space), b"");
            assert_eq!(cursor.pos(), 8);
        }

        #[test]
        fn test_reads_stop_at_end() {
            let mut cursor = Cursor::new(b"rgb", 0);
            assert!(cursor.eat(b"rgb"));
            assert!(!cursor.eat(b"("));
            assert_eq!(cursor.take_while(is_number_char), b"");
        }
    }

    mod rgb_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_comma_syntax() {
            assert_eq!(rgb("rgb(255, 0, 0)", FunctionPrefix::Rgb).as_deref(), Some("ff0000"));
            assert_eq!(rgb("rgb(255 , 0 , 0)", FunctionPrefix::Rgb).as_deref(), Some("ff0000"));
            assert_eq!(
                rgb("rgba(0,255,0,0.5)", FunctionPrefix::Rgba).as_deref(),
                Some("007f00")
            );
        }

        #[test]
        fn test_space_syntax() {
            assert_eq!(rgb("rgb(255 0 0)", FunctionPrefix::Rgb).as_deref(), Some("ff0000"));
            assert_eq!(
                rgb("rgb(0 128 255 / 50%)", FunctionPrefix::Rgb).as_deref(),
                Some("00407f")
            );
            assert_eq!(
                rgb("rgb( 0\t128\t255 )", FunctionPrefix::Rgb).as_deref(),
                Some("0080ff")
            );
        }

        #[test]
        fn test_consumed_through_paren() {
            let m = parse_rgb_function(b"color: rgb(255, 0, 0);", 7, FunctionPrefix::Rgb).unwrap();
            assert_eq!(m.consumed, 14);
        }

        #[test]
        fn test_percentages() {
            assert_eq!(
                rgb("rgb(100%, 50%, 0%)", FunctionPrefix::Rgb).as_deref(),
                Some("ff7f00")
            );
            assert_eq!(
                rgb("rgb(33.3% 66.6% 99.9%)", FunctionPrefix::Rgb).as_deref(),
                Some("54a9fe")
            );
            assert_eq!(rgb("rgb(50%, 0, 0)", FunctionPrefix::Rgb), None);
        }

        #[test]
        fn test_clamping() {
            assert_eq!(rgb("rgb(300, 0, 0)", FunctionPrefix::Rgb).as_deref(), Some("ff0000"));
            assert_eq!(
                rgb("rgba(255,0,0,2)", FunctionPrefix::Rgba).as_deref(),
                Some("ff0000")
            );
            assert_eq!(
                rgb("rgba(255,0,0,150%)", FunctionPrefix::Rgba).as_deref(),
                Some("ff0000")
            );
            // Percentages are not capped before scaling; the channel saturates.
            assert_eq!(
                rgb("rgb(200%, 0%, 0%)", FunctionPrefix::Rgb).as_deref(),
                Some("ff0000")
            );
        }

        #[test]
        fn test_alpha_with_plain_prefix() {
            assert_eq!(
                rgb("rgb(255,0,0,0.5)", FunctionPrefix::Rgb).as_deref(),
                Some("7f0000")
            );
        }

        #[test]
        fn test_malformed_declines() {
            // truncated
            assert_eq!(rgb("rgb(255, 0, 0", FunctionPrefix::Rgb), None);
            assert_eq!(rgb("rgb(255, 0)", FunctionPrefix::Rgb), None);
            // mixed separators
            assert_eq!(rgb("rgb(255 0, 0)", FunctionPrefix::Rgb), None);
            assert_eq!(rgb("rgb(0,255,0 / 0.5)", FunctionPrefix::Rgb), None);
            // space syntax alpha without slash
            assert_eq!(rgb("rgb(255 0 0 0.5)", FunctionPrefix::Rgb), None);
            // no separators at all
            assert_eq!(rgb("rgb(255.0.0)", FunctionPrefix::Rgb), None);
            // trailing comma without alpha
            assert_eq!(rgb("rgb(0,255,0,)", FunctionPrefix::Rgb), None);
            // number that does not parse
            assert_eq!(rgb("rgb(1.2.3, 0, 0)", FunctionPrefix::Rgb), None);
            assert_eq!(rgb("rgba(1, 2, 3, ..)", FunctionPrefix::Rgba), None);
        }

        #[test]
        fn test_prefix_must_match() {
            assert_eq!(rgb("rgba(0,255,0,0.5)", FunctionPrefix::Rgb), None);
            assert_eq!(rgb("rgb(0,255,0)", FunctionPrefix::Rgba), None);
            assert_eq!(rgb("RGB(0,255,0)", FunctionPrefix::Rgb), None);
        }

        #[test]
        fn test_short_remainder() {
            assert_eq!(rgb("rgb(0,0,0)", FunctionPrefix::Rgb).as_deref(), Some("000000"));
            assert_eq!(rgb("rgb(0,0,0", FunctionPrefix::Rgb), None);
            assert_eq!(parse_rgb_function(b"rgb(0,0,0)", 11, FunctionPrefix::Rgb), None);
        }
    }

    mod hsl_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_primary_colors() {
            assert_eq!(
                hsl("hsl(0, 100%, 50%)", FunctionPrefix::Hsl).as_deref(),
                Some("ff0000")
            );
            assert_eq!(
                hsl("hsl(120,100%,50%)", FunctionPrefix::Hsl).as_deref(),
                Some("00ff00")
            );
            assert_eq!(
                hsl("hsl(240 100% 50%)", FunctionPrefix::Hsl).as_deref(),
                Some("0000ff")
            );
        }

        #[test]
        fn test_mixed_values() {
            assert_eq!(
                hsl("hsl(210, 50%, 40%)", FunctionPrefix::Hsl).as_deref(),
                Some("326599")
            );
            assert_eq!(
                hsl("hsl(300 100% 25%)", FunctionPrefix::Hsl).as_deref(),
                Some("7f007f")
            );
            assert_eq!(
                hsl("hsl(0, 0%, 50%)", FunctionPrefix::Hsl).as_deref(),
                Some("7f7f7f")
            );
        }

        #[test]
        fn test_hue_wraps() {
            assert_eq!(
                hsl("hsl(720, 100%, 50%)", FunctionPrefix::Hsl),
                hsl("hsl(0, 100%, 50%)", FunctionPrefix::Hsl)
            );
        }

        #[test]
        fn test_hue_units() {
            assert_eq!(
                hsl("hsl(120deg 100% 50% / 0.5)", FunctionPrefix::Hsl).as_deref(),
                Some("007f00")
            );
            assert_eq!(
                hsl("hsl(0.5turn 100% 50%)", FunctionPrefix::Hsl).as_deref(),
                Some("00feff")
            );
            assert_eq!(hsl("hsl(1rad, 100%, 50%)", FunctionPrefix::Hsl), None);
            assert_eq!(hsl("hsl(10dg, 100%, 50%)", FunctionPrefix::Hsl), None);
            assert_eq!(hsl("hsl(10degturn, 100%, 50%)", FunctionPrefix::Hsl), None);
        }

        #[test]
        fn test_clamping() {
            assert_eq!(
                hsl("hsl(0, 150%, 50%)", FunctionPrefix::Hsl).as_deref(),
                Some("ff0000")
            );
            assert_eq!(
                hsl("hsla(240, 100%, 50%, 1.5)", FunctionPrefix::Hsla).as_deref(),
                Some("0000ff")
            );
        }

        #[test]
        fn test_malformed_declines() {
            assert_eq!(hsl("hsl(0, 100%, 50)", FunctionPrefix::Hsl), None);
            assert_eq!(hsl("hsl(0 100%, 50%)", FunctionPrefix::Hsl), None);
            assert_eq!(hsl("hsl(0, 100.5%, 50%)", FunctionPrefix::Hsl), None);
            assert_eq!(hsl("hsl(0, 100%, 50%", FunctionPrefix::Hsl), None);
            assert_eq!(hsl("hsl(0 100% 50% 0.5)", FunctionPrefix::Hsl), None);
            assert_eq!(hsl("hsl(0,0%,0%", FunctionPrefix::Hsl), None);
        }

        #[test]
        fn test_minimal_literal() {
            let m = parse_hsl_function(b"hsl(0,0%,0%)", 0, FunctionPrefix::Hsl).unwrap();
            assert_eq!(m, ColorMatch::new(12, "000000"));
        }
    }

    mod prefix_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_prefix_names() {
            assert_eq!("hsla".parse::<FunctionPrefix>(), Ok(FunctionPrefix::Hsla));
            assert_eq!(
                "rgbx".parse::<FunctionPrefix>(),
                Err(OptionsError::UnknownPrefix("rgbx".to_string()))
            );
            assert!(FunctionPrefix::Hsl.is_hsl());
            assert_eq!(FunctionPrefix::Rgba.to_string(), "rgba");
        }
    }
}
