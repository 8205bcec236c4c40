//! Dispatching a position to the right parser.
//!
//! A [`Matcher`] is compiled once from user-facing [`MatcherOptions`] and then
//! asked, position by position, whether a color literal starts there. Each
//! position goes to at most one parser: a `#` goes to the hex parser, a known
//! prefix (`0x`, `rgb`, `rgba`, `hsl`, `hsla`) to the parser for that prefix,
//! and anything else to the named color parser.

use smallvec::SmallVec;

use crate::color::ColorMatch;
use crate::css::{parse_hsl_function, parse_rgb_function, FunctionPrefix};
use crate::error::Result;
use crate::hex::{parse_argb_hex, parse_rgba_hex, HexLengths, HexOptions};
use crate::names::{parse_name, NameCache, NameOptions, SharedNameCache, TailwindMode};
use crate::trie::Trie;

const ARGB_PREFIXES: [&str; 2] = ["0x", "0X"];

/// Switches selecting which literal forms are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct MatcherOptions {
    /// Named colors (`blue`, `AliceBlue`).
    pub names: bool,
    /// `#RGB`
    pub rgb_short: bool,
    /// `#RRGGBB`
    pub rrggbb: bool,
    /// `#RRGGBBAA`
    pub rrggbbaa: bool,
    /// `0xAARRGGBB`
    pub aarrggbb: bool,
    /// `rgb()` and `rgba()`
    pub rgb_fn: bool,
    /// `hsl()` and `hsla()`
    pub hsl_fn: bool,
    /// Everything CSS knows: names, all `#` forms and both functions.
    pub css: bool,
    /// Both CSS functions.
    pub css_fn: bool,
    /// Extended palette mode for named colors.
    pub tailwind: TailwindMode,
    /// Skip base palette names ending in a digit.
    pub strip_digits: bool,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            names: true,
            rgb_short: true,
            rrggbb: true,
            rrggbbaa: false,
            aarrggbb: false,
            rgb_fn: false,
            hsl_fn: false,
            css: false,
            css_fn: false,
            tailwind: TailwindMode::Disabled,
            strip_digits: false,
        }
    }
}

impl MatcherOptions {
    /// Options with every literal form enabled.
    pub fn all() -> Self {
        Self {
            aarrggbb: true,
            css: true,
            ..Self::default()
        }
    }

    fn hex_lengths(&self) -> HexLengths {
        let mut lengths = HexLengths::empty();
        lengths.set(HexLengths::SHORT, self.css || self.rgb_short);
        lengths.set(HexLengths::LONG, self.css || self.rrggbb);
        lengths.set(HexLengths::ALPHA, self.css || self.rrggbbaa);
        lengths
    }
}

/// Compiled set of parsers.
#[derive(Debug, Clone)]
pub struct Matcher {
    hex: Option<HexOptions>,
    names: Option<NameOptions>,
    prefixes: SmallVec<[&'static str; 6]>,
    prefix_trie: Trie,
}

impl Matcher {
    /// Compiles `options` into a matcher.
    pub fn new(options: &MatcherOptions) -> Result<Self> {
        let lengths = options.hex_lengths();
        let hex = if lengths.is_empty() {
            None
        } else {
            Some(HexOptions::from_lengths(lengths)?)
        };

        let names = (options.css || options.names).then_some(NameOptions {
            tailwind: options.tailwind,
            strip_digits: options.strip_digits,
        });

        let mut prefixes: SmallVec<[&'static str; 6]> = SmallVec::new();
        if options.aarrggbb {
            prefixes.extend(ARGB_PREFIXES);
        }
        if options.css || options.css_fn || options.rgb_fn {
            prefixes.extend([FunctionPrefix::Rgb, FunctionPrefix::Rgba].map(FunctionPrefix::as_str));
        }
        if options.css || options.css_fn || options.hsl_fn {
            prefixes.extend([FunctionPrefix::Hsl, FunctionPrefix::Hsla].map(FunctionPrefix::as_str));
        }
        let prefix_trie = Trie::from_keys(prefixes.iter());

        tracing::debug!(
            hex = ?hex.map(|h| h.valid_lengths()),
            names = ?names.map(|n| n.tailwind),
            prefixes = ?prefixes,
            "Compiled color matcher"
        );

        Ok(Self {
            hex,
            names,
            prefixes,
            prefix_trie,
        })
    }

    /// Options of the `#` parser, if enabled.
    pub fn hex_options(&self) -> Option<&HexOptions> {
        self.hex.as_ref()
    }

    /// Options of the named color parser, if enabled.
    pub fn name_options(&self) -> Option<&NameOptions> {
        self.names.as_ref()
    }

    /// Enabled literal prefixes.
    pub fn prefixes(&self) -> &[&'static str] {
        &self.prefixes
    }

    /// Tries to match a literal at `offset`, building `cache` as needed.
    pub fn parse(&self, cache: &mut NameCache, line: &[u8], offset: usize) -> Option<ColorMatch> {
        self.parse_with(line, offset, |opts| parse_name(cache, line, offset, opts))
    }

    /// Like [`Matcher::parse`] with a cache shared between threads.
    pub fn parse_shared(
        &self,
        cache: &SharedNameCache,
        line: &[u8],
        offset: usize,
    ) -> Option<ColorMatch> {
        self.parse_with(line, offset, |opts| cache.parse(line, offset, opts))
    }

    fn parse_with(
        &self,
        line: &[u8],
        offset: usize,
        name_parser: impl FnOnce(&NameOptions) -> Option<ColorMatch>,
    ) -> Option<ColorMatch> {
        if line.get(offset) == Some(&b'#') {
            if let Some(hex) = &self.hex {
                return parse_rgba_hex(line, offset, hex);
            }
        }

        if let Some(prefix) = self.prefix_trie.longest_prefix(line, offset) {
            if ARGB_PREFIXES.iter().any(|argb| *argb == prefix) {
                return parse_argb_hex(line, offset);
            }
            let function: FunctionPrefix = prefix.parse().ok()?;
            return if function.is_hsl() {
                parse_hsl_function(line, offset, function)
            } else {
                parse_rgb_function(line, offset, function)
            };
        }

        self.names.as_ref().and_then(name_parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptionsError;

    fn parse(matcher: &Matcher, line: &str, offset: usize) -> Option<ColorMatch> {
        let mut cache = NameCache::default();
        matcher.parse(&mut cache, line.as_bytes(), offset)
    }

    mod compile_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_defaults() {
            let matcher = Matcher::new(&MatcherOptions::default()).unwrap();
            let hex = matcher.hex_options().unwrap();
            assert_eq!((hex.minlen(), hex.maxlen()), (3, 6));
            assert!(matcher.name_options().is_some());
            assert!(matcher.prefixes().is_empty());
        }

        #[test]
        fn test_css_enables_everything_but_argb() {
            let options = MatcherOptions {
                names: false,
                rgb_short: false,
                rrggbb: false,
                css: true,
                ..MatcherOptions::default()
            };
            let matcher = Matcher::new(&options).unwrap();
            assert_eq!(matcher.hex_options().unwrap().valid_lengths(), HexLengths::all());
            assert!(matcher.name_options().is_some());
            assert_eq!(matcher.prefixes(), &["rgb", "rgba", "hsl", "hsla"]);
        }

        #[test]
        fn test_no_hex_lengths() {
            let options = MatcherOptions {
                rgb_short: false,
                rrggbb: false,
                ..MatcherOptions::default()
            };
            let matcher = Matcher::new(&options).unwrap();
            assert!(matcher.hex_options().is_none());
        }

        #[test]
        fn test_invalid_hex_options_surface() {
            assert_eq!(
                HexOptions::from_lengths(HexLengths::empty()).unwrap_err(),
                OptionsError::NoHexLengths
            );
        }
    }

    mod dispatch_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_each_form() {
            let matcher = Matcher::new(&MatcherOptions::all()).unwrap();
            assert_eq!(parse(&matcher, "#ff8000", 0), Some(ColorMatch::new(7, "ff8000")));
            assert_eq!(parse(&matcher, "0x80ff0000", 0), Some(ColorMatch::new(10, "800000")));
            assert_eq!(
                parse(&matcher, "rgba(0,255,0,0.5)", 0),
                Some(ColorMatch::new(17, "007f00"))
            );
            assert_eq!(
                parse(&matcher, "hsl(0, 100%, 50%)", 0),
                Some(ColorMatch::new(17, "ff0000"))
            );
            assert_eq!(parse(&matcher, "navy", 0), Some(ColorMatch::new(4, "000080")));
        }

        #[test]
        fn test_disabled_forms_decline() {
            let matcher = Matcher::new(&MatcherOptions::default()).unwrap();
            assert_eq!(parse(&matcher, "rgb(255, 0, 0)", 0), None);
            assert_eq!(parse(&matcher, "0x80ff0000", 0), None);
            assert_eq!(parse(&matcher, "#ff000080", 0), None);
        }

        #[test]
        fn test_prefix_does_not_fall_through() {
            let options = MatcherOptions {
                rgb_fn: true,
                ..MatcherOptions::default()
            };
            let matcher = Matcher::new(&options).unwrap();
            // A malformed function is not retried as a name.
            assert_eq!(parse(&matcher, "rgb(red)", 0), None);
        }

        #[test]
        fn test_shared_cache() {
            let matcher = Matcher::new(&MatcherOptions::default()).unwrap();
            let shared = SharedNameCache::default();
            assert_eq!(
                matcher.parse_shared(&shared, b"color: teal", 7),
                Some(ColorMatch::new(4, "008080"))
            );
        }

        #[test]
        fn test_names_disabled() {
            let options = MatcherOptions {
                names: false,
                ..MatcherOptions::default()
            };
            let matcher = Matcher::new(&options).unwrap();
            assert_eq!(parse(&matcher, "red", 0), None);
            assert_eq!(parse(&matcher, "#f00", 0), Some(ColorMatch::new(4, "f00")));
        }
    }
}
