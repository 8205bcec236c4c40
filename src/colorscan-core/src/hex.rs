//! Hex color literals.
//!
//! Two independent forms are recognized:
//!
//! - `0xAARRGGBB`, a fixed ten-byte literal with a leading alpha byte
//!   ([`parse_argb_hex`]);
//! - `#RGB`, `#RRGGBB` and `#RRGGBBAA` ([`parse_rgba_hex`]), restricted by
//!   [`HexOptions`].
//!
//! Alpha is premultiplied into the returned RGB value.

use bitflags::bitflags;
use compact_str::CompactString;

use crate::classify::{hex_nibble, is_alphanumeric, is_hex_digit};
use crate::color::{premultiply, ColorMatch};
use crate::error::OptionsError;

/// Total length of an `0xAARRGGBB` literal.
const ARGB_LEN: usize = 10;

/// Digits past the `#` from which on digits are alpha.
const ALPHA_START: usize = 7;

bitflags! {
    /// Digit counts accepted after a `#`.
    ///
    /// ```
    /// use colorscan_core::hex::HexLengths;
    ///
    /// let lengths = HexLengths::SHORT | HexLengths::LONG;
    /// assert!(lengths.allows(3));
    /// assert!(!lengths.allows(8));
    /// assert_eq!(lengths.max_digits(), Some(6));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HexLengths: u8 {
        /// `#RGB`
        const SHORT = 0b0000_0001;
        /// `#RRGGBB`
        const LONG  = 0b0000_0010;
        /// `#RRGGBBAA`
        const ALPHA = 0b0000_0100;
    }
}

impl HexLengths {
    const DIGITS: [(HexLengths, usize); 3] = [
        (HexLengths::SHORT, 3),
        (HexLengths::LONG, 6),
        (HexLengths::ALPHA, 8),
    ];

    /// Returns `true` if a literal with `digits` hex digits is enabled.
    pub fn allows(self, digits: usize) -> bool {
        Self::DIGITS
            .iter()
            .any(|&(flag, n)| n == digits && self.contains(flag))
    }

    /// Smallest enabled digit count.
    pub fn min_digits(self) -> Option<usize> {
        self.enabled_digits().min()
    }

    /// Largest enabled digit count.
    pub fn max_digits(self) -> Option<usize> {
        self.enabled_digits().max()
    }

    fn enabled_digits(self) -> impl Iterator<Item = usize> {
        Self::DIGITS
            .into_iter()
            .filter(move |&(flag, _)| self.contains(flag))
            .map(|(_, n)| n)
    }
}

/// Options of the `#` hex parser.
///
/// Always built through [`HexOptions::new`] or [`HexOptions::from_lengths`],
/// so the bounds are consistent with the enabled lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexOptions {
    minlen: usize,
    maxlen: usize,
    valid_lengths: HexLengths,
}

impl Default for HexOptions {
    fn default() -> Self {
        Self {
            minlen: 3,
            maxlen: 6,
            valid_lengths: HexLengths::SHORT | HexLengths::LONG,
        }
    }
}

impl HexOptions {
    /// Creates options with explicit digit bounds.
    pub fn new(
        minlen: usize,
        maxlen: usize,
        valid_lengths: HexLengths,
    ) -> Result<Self, OptionsError> {
        if valid_lengths.is_empty() {
            return Err(OptionsError::NoHexLengths);
        }
        if minlen > maxlen {
            return Err(OptionsError::InvalidBounds { minlen, maxlen });
        }
        Ok(Self {
            minlen,
            maxlen,
            valid_lengths,
        })
    }

    /// Creates options whose bounds span exactly the enabled lengths.
    pub fn from_lengths(valid_lengths: HexLengths) -> Result<Self, OptionsError> {
        match (valid_lengths.min_digits(), valid_lengths.max_digits()) {
            (Some(minlen), Some(maxlen)) => Self::new(minlen, maxlen, valid_lengths),
            _ => Err(OptionsError::NoHexLengths),
        }
    }

    /// Fewest digits a literal may have.
    pub fn minlen(&self) -> usize {
        self.minlen
    }

    /// Most digits a literal may have.
    pub fn maxlen(&self) -> usize {
        self.maxlen
    }

    /// Enabled digit counts.
    pub fn valid_lengths(&self) -> HexLengths {
        self.valid_lengths
    }
}

/// Parses an `0xAARRGGBB` literal at `offset`.
///
/// # Examples
///
/// ```
/// use colorscan_core::hex::parse_argb_hex;
///
/// let m = parse_argb_hex(b"0x80ff0000", 0).unwrap();
/// assert_eq!((m.consumed, m.rgb_hex.as_str()), (10, "800000"));
/// ```
pub fn parse_argb_hex(line: &[u8], offset: usize) -> Option<ColorMatch> {
    let remaining = line.len().checked_sub(offset)?;
    if remaining < ARGB_LEN {
        return None;
    }
    if line[offset] != b'0' || !matches!(line[offset + 1], b'x' | b'X') {
        return None;
    }

    let start = offset + 2;
    let limit = line.len().min(start + 9);
    let mut alpha: u32 = 0;
    let mut rgb: u32 = 0;
    let mut digits = 0;

    for &byte in &line[start..limit] {
        if !is_hex_digit(byte) {
            break;
        }
        let nibble = u32::from(hex_nibble(byte));
        if digits < 2 {
            alpha = (alpha << 4) | nibble;
        } else {
            rgb = (rgb << 4) | nibble;
        }
        digits += 1;
    }

    let end = start + digits;
    if line.get(end).is_some_and(|&b| is_alphanumeric(b)) {
        return None;
    }
    if end - offset != ARGB_LEN {
        return None;
    }

    Some(ColorMatch::new(ARGB_LEN, premultiply(rgb, alpha)))
}

/// Parses a `#` hex literal at `offset`.
///
/// `#RGB` and `#RRGGBB` are returned as written (lowercased); the short form
/// is not expanded. `#RRGGBBAA` is premultiplied.
///
/// # Examples
///
/// ```
/// use colorscan_core::hex::{parse_rgba_hex, HexOptions};
///
/// let opts = HexOptions::default();
/// let m = parse_rgba_hex(b"color: #FF8000;", 7, &opts).unwrap();
/// assert_eq!((m.consumed, m.rgb_hex.as_str()), (7, "ff8000"));
///
/// let short = parse_rgba_hex(b"#abc", 0, &opts).unwrap();
/// assert_eq!(short.rgb_hex, "abc");
/// ```
pub fn parse_rgba_hex(line: &[u8], offset: usize, opts: &HexOptions) -> Option<ColorMatch> {
    if line.get(offset) != Some(&b'#') {
        return None;
    }
    if line.len() < offset + 1 + opts.minlen {
        return None;
    }
    if offset > 0 && is_alphanumeric(line[offset - 1]) {
        return None;
    }

    let start = offset + 1;
    let limit = line.len().min(start + opts.maxlen + 1);
    let mut rgb: u32 = 0;
    let mut alpha: u32 = 0;
    let mut digits = 0;

    for &byte in &line[start..limit] {
        if !is_hex_digit(byte) {
            break;
        }
        digits += 1;
        let nibble = u32::from(hex_nibble(byte));
        if digits >= ALPHA_START {
            alpha = (alpha << 4) | nibble;
        } else {
            rgb = (rgb << 4) | nibble;
        }
    }

    let end = start + digits;
    if line.get(end).is_some_and(|&b| is_alphanumeric(b)) {
        return None;
    }

    let length = digits + 1;
    if !matches!(length, 4 | 7 | 9) {
        return None;
    }

    if digits >= ALPHA_START {
        return Some(ColorMatch::new(length, premultiply(rgb, alpha)));
    }
    if !opts.valid_lengths.allows(digits) {
        return None;
    }

    let rgb_hex: CompactString = line[start..end]
        .iter()
        .map(|&b| char::from(b.to_ascii_lowercase()))
        .collect();
    Some(ColorMatch::new(length, rgb_hex))
}
