//! Color literal recognition for `colorscan`.
//!
//! Given a line of text and a byte offset, the parsers in this crate decide
//! whether a color literal starts there and, if so, how many bytes it spans
//! and which RGB value it denotes:
//!
//! - [`hex`]: `#RGB`, `#RRGGBB`, `#RRGGBBAA` and `0xAARRGGBB`
//! - [`css`]: `rgb()`, `rgba()`, `hsl()` and `hsla()`
//! - [`names`]: named colors, optionally extended with the Tailwind palette
//!
//! A parser that does not recognize a literal declines by returning `None`;
//! malformed input is never an error. [`matcher`] picks the parser for a
//! position and [`scanner`] walks whole lines.
//!
//! # Examples
//!
//! ## Scanning a line
//!
//! ```
//! use colorscan_core::{Matcher, MatcherOptions, NameCache, scan_line};
//!
//! let matcher = Matcher::new(&MatcherOptions::all()).unwrap();
//! let mut cache = NameCache::default();
//!
//! let spans = scan_line(&matcher, &mut cache, b"fill: hsl(120deg 100% 50%); stroke: navy");
//! let hex: Vec<&str> = spans.iter().map(|s| s.rgb_hex.as_str()).collect();
//! assert_eq!(hex, ["00ff00", "000080"]);
//! ```
//!
//! ## Calling a parser directly
//!
//! ```
//! use colorscan_core::hex::parse_argb_hex;
//!
//! // Alpha is premultiplied into the result.
//! let m = parse_argb_hex(b"0x80ff0000", 0).unwrap();
//! assert_eq!(m.rgb_hex, "800000");
//! assert_eq!(m.consumed, 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::match_same_arms)]

pub mod classify;
pub mod color;
pub mod convert;
pub mod css;
pub mod error;
pub mod hex;
pub mod matcher;
pub mod names;
pub mod palette;
pub mod scanner;
pub mod trie;

// Re-export commonly used types at the crate root for convenience
pub use color::ColorMatch;
pub use css::{parse_hsl_function, parse_rgb_function, FunctionPrefix};
pub use error::{OptionsError, Result};
pub use hex::{parse_argb_hex, parse_rgba_hex, HexLengths, HexOptions};
pub use matcher::{Matcher, MatcherOptions};
pub use names::{parse_name, NameCache, NameOptions, SharedNameCache, TailwindMode};
pub use palette::{ChainedColors, ColorSource, CssColors, ExtendedPalette, StaticColors};
pub use scanner::{scan_line, ColorSpan, LineSpans, Scanner};
