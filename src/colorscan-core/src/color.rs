//! Recognized color values and their hex representation.
//!
//! Every parser reports its result as a [`ColorMatch`]: the number of bytes
//! the literal occupies and the normalized RGB value as lowercase hex. Alpha
//! never survives parsing: translucent literals are premultiplied into an
//! opaque RGB value before they are returned.
//!
//! # Examples
//!
//! ```
//! use colorscan_core::color::ColorMatch;
//!
//! let m = ColorMatch::new(7, "ff8000");
//! assert_eq!(m.rgb(), Some((255, 128, 0)));
//! assert_eq!(m.to_string(), "#ff8000");
//!
//! // Short form is kept as written and expanded on demand.
//! let short = ColorMatch::new(4, "f80");
//! assert_eq!(short.rgb(), Some((255, 136, 0)));
//! ```

use crate::classify::{hex_nibble, is_hex_digit};
use compact_str::{format_compact, CompactString};
use std::fmt;

/// A color literal recognized at some offset of a line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorMatch {
    /// Number of bytes of the line occupied by the literal.
    pub consumed: usize,
    /// Lowercase RGB hex without a leading `#`.
    ///
    /// Six digits, except for the `#RGB` short form which keeps its three
    /// digits.
    pub rgb_hex: CompactString,
}

impl ColorMatch {
    /// Creates a new match.
    #[inline]
    pub fn new(consumed: usize, rgb_hex: impl Into<CompactString>) -> Self {
        Self {
            consumed,
            rgb_hex: rgb_hex.into(),
        }
    }

    /// Returns the matched color as 8-bit channels.
    ///
    /// Three-digit values are expanded the CSS way (`f80` is `ff8800`).
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let value = parse_rgb_hex(&self.rgb_hex)?;
        Some(unpack(value))
    }

    /// Returns the color as a packed `0xRRGGBB` value.
    pub fn to_u32(&self) -> Option<u32> {
        parse_rgb_hex(&self.rgb_hex)
    }
}

impl fmt::Display for ColorMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.rgb_hex)
    }
}

// ============================================================================
// Hex formatting
// ============================================================================

/// Formats a packed `0xRRGGBB` value as six lowercase hex digits.
#[inline]
pub fn hex_from_u32(value: u32) -> CompactString {
    format_compact!("{:06x}", value & 0x00FF_FFFF)
}

/// Formats unrounded channels as six lowercase hex digits.
///
/// Each channel is floored and saturated into `0..=255`.
pub(crate) fn hex_from_channels(r: f64, g: f64, b: f64) -> CompactString {
    format_compact!(
        "{:02x}{:02x}{:02x}",
        r.floor() as u8,
        g.floor() as u8,
        b.floor() as u8
    )
}

/// Bakes an 8-bit alpha into a packed RGB value.
///
/// Each channel becomes `floor(channel * alpha / 255)`.
pub(crate) fn premultiply(rgb: u32, alpha: u32) -> CompactString {
    let alpha = f64::from(alpha & 0xFF) / 255.0;
    let (r, g, b) = unpack(rgb);
    hex_from_channels(
        f64::from(r) * alpha,
        f64::from(g) * alpha,
        f64::from(b) * alpha,
    )
}

#[inline]
fn unpack(value: u32) -> (u8, u8, u8) {
    (
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    )
}

// ============================================================================
// Hex parsing
// ============================================================================

/// Parses `RGB` or `RRGGBB` hex, with or without a leading `#`, into a packed
/// `0xRRGGBB` value.
///
/// # Examples
///
/// ```
/// use colorscan_core::color::parse_rgb_hex;
///
/// assert_eq!(parse_rgb_hex("#FF8000"), Some(0xFF8000));
/// assert_eq!(parse_rgb_hex("f80"), Some(0xFF8800));
/// assert_eq!(parse_rgb_hex("#12345"), None);
/// ```
pub fn parse_rgb_hex(hex: &str) -> Option<u32> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    if !digits.iter().all(|&b| is_hex_digit(b)) {
        return None;
    }

    match digits.len() {
        3 => Some(digits.iter().fold(0u32, |acc, &b| {
            let n = u32::from(hex_nibble(b));
            (acc << 8) | (n << 4) | n
        })),
        6 => Some(
            digits
                .iter()
                .fold(0u32, |acc, &b| (acc << 4) | u32::from(hex_nibble(b))),
        ),
        _ => None,
    }
}
