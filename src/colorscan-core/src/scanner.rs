//! Scanning whole lines and texts for color literals.

use compact_str::CompactString;
use std::ops::Range;

use crate::color::{parse_rgb_hex, ColorMatch};
use crate::error::Result;
use crate::matcher::{Matcher, MatcherOptions};
use crate::names::NameCache;

/// A color literal found in a line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorSpan {
    /// Byte range of the literal within its line.
    pub range: Range<usize>,
    /// Lowercase RGB hex without `#` (three digits for `#RGB`).
    pub rgb_hex: CompactString,
}

impl ColorSpan {
    fn from_match(offset: usize, m: ColorMatch) -> Self {
        Self {
            range: offset..offset + m.consumed,
            rgb_hex: m.rgb_hex,
        }
    }

    /// Returns the color as 8-bit channels, expanding `#RGB`.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let value = parse_rgb_hex(&self.rgb_hex)?;
        Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }

    /// Returns the color as six-digit hex, expanding `#RGB`.
    pub fn rgb_hex_long(&self) -> CompactString {
        match self.rgb_hex.len() {
            3 => self.rgb_hex.chars().flat_map(|c| [c, c]).collect(),
            _ => self.rgb_hex.clone(),
        }
    }

    /// Returns the literal's bytes in `line`.
    pub fn literal<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        line.get(self.range.clone()).unwrap_or_default()
    }
}

/// Finds every literal in `line`, left to right.
///
/// After a match, scanning resumes right after the literal, so literals never
/// overlap.
///
/// # Examples
///
/// ```
/// use colorscan_core::matcher::{Matcher, MatcherOptions};
/// use colorscan_core::names::NameCache;
/// use colorscan_core::scanner::scan_line;
///
/// let matcher = Matcher::new(&MatcherOptions::default()).unwrap();
/// let mut cache = NameCache::default();
///
/// let spans = scan_line(&matcher, &mut cache, b"border: 1px solid #333; color: red");
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].range, 18..22);
/// assert_eq!(spans[1].rgb_hex, "ff0000");
/// ```
pub fn scan_line(matcher: &Matcher, cache: &mut NameCache, line: &[u8]) -> Vec<ColorSpan> {
    let mut spans = Vec::new();
    let mut offset = 0;

    while offset < line.len() {
        match matcher.parse(cache, line, offset) {
            Some(m) if m.consumed > 0 => {
                let consumed = m.consumed;
                spans.push(ColorSpan::from_match(offset, m));
                offset += consumed;
            }
            _ => offset += 1,
        }
    }

    spans
}

/// The literals of one line of a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpans {
    /// Zero-based line number.
    pub line: usize,
    /// Literals in the line.
    pub spans: Vec<ColorSpan>,
}

/// A [`Matcher`] together with the name cache it uses.
#[derive(Debug)]
pub struct Scanner {
    matcher: Matcher,
    cache: NameCache,
}

impl Scanner {
    /// Creates a scanner over the CSS named colors.
    pub fn new(matcher: Matcher) -> Self {
        Self::with_cache(matcher, NameCache::default())
    }

    /// Creates a scanner with a caller-built name cache.
    pub fn with_cache(matcher: Matcher, cache: NameCache) -> Self {
        Self { matcher, cache }
    }

    /// Compiles `options` and creates a scanner.
    pub fn from_options(options: &MatcherOptions) -> Result<Self> {
        Ok(Self::new(Matcher::new(options)?))
    }

    /// Returns the compiled matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Returns the name cache.
    pub fn cache(&self) -> &NameCache {
        &self.cache
    }

    /// Scans a single line.
    pub fn scan_line(&mut self, line: &[u8]) -> Vec<ColorSpan> {
        scan_line(&self.matcher, &mut self.cache, line)
    }

    /// Scans `text` line by line, returning only lines with literals.
    ///
    /// Lines end at `\n`; a trailing `\r` is not part of the line.
    pub fn scan_text(&mut self, text: &[u8]) -> Vec<LineSpans> {
        let mut found = Vec::new();

        for (number, line) in lines(text).enumerate() {
            let spans = self.scan_line(line);
            if !spans.is_empty() {
                tracing::trace!(line = number, spans = spans.len(), "Found color literals");
                found.push(LineSpans {
                    line: number,
                    spans,
                });
            }
        }

        found
    }
}

/// Splits `text` into lines without their terminators.
pub fn lines(text: &[u8]) -> impl Iterator<Item = &[u8]> {
    text.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::TailwindMode;
    use pretty_assertions::assert_eq;

    fn scan(options: &MatcherOptions, line: &str) -> Vec<(Range<usize>, String)> {
        let matcher = Matcher::new(options).unwrap();
        let mut cache = NameCache::default();
        scan_line(&matcher, &mut cache, line.as_bytes())
            .into_iter()
            .map(|span| (span.range, span.rgb_hex.to_string()))
            .collect()
    }

    #[test]
    fn test_scan_css_declarations() {
        let found = scan(
            &MatcherOptions::all(),
            "a { color: red; background: rgb(0 0 255 / 50%); border-color: #0f0 }",
        );
        assert_eq!(
            found,
            vec![
                (11..14, "ff0000".to_string()),
                (28..46, "00007f".to_string()),
                (62..66, "0f0".to_string()),
            ]
        );
    }

    #[test]
    fn test_literals_do_not_overlap() {
        // `def` is inside the hex literal and is skipped with it.
        let found = scan(&MatcherOptions::default(), "#abcdef");
        assert_eq!(found, vec![(0..7, "abcdef".to_string())]);
    }

    #[test]
    fn test_words_are_not_split() {
        let found = scan(&MatcherOptions::default(), "blueberry tangerine redwood");
        assert!(found.is_empty());
    }

    #[test]
    fn test_tailwind_classes() {
        let options = MatcherOptions {
            tailwind: TailwindMode::Normal,
            ..MatcherOptions::default()
        };
        let found = scan(&options, r#"<div class="bg-sky-500 text-white">"#);
        assert_eq!(
            found,
            vec![
                (12..22, "0ea5e9".to_string()),
                (23..33, "ffffff".to_string()),
            ]
        );
    }

    #[test]
    fn test_span_helpers() {
        let line = b"x #f80 y";
        let matcher = Matcher::new(&MatcherOptions::default()).unwrap();
        let mut cache = NameCache::default();
        let spans = scan_line(&matcher, &mut cache, line);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].literal(line), b"#f80");
        assert_eq!(spans[0].rgb(), Some((0xFF, 0x88, 0x00)));
        assert_eq!(spans[0].rgb_hex_long(), "ff8800");
    }

    #[test]
    fn test_scan_text_numbers_lines() {
        let mut scanner = Scanner::from_options(&MatcherOptions::default()).unwrap();
        let found = scanner.scan_text(b"nothing here\r\ncolor: navy;\r\n\n#fff\n");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].line, 1);
        assert_eq!(found[0].spans[0].range, 7..11);
        assert_eq!(found[1].line, 3);
        assert_eq!(found[1].spans[0].rgb_hex, "fff");
        assert_eq!(scanner.cache().generation(), 1);
    }

    #[test]
    fn test_lines_strip_carriage_return() {
        let collected: Vec<&[u8]> = lines(b"a\r\nb\nc").collect();
        assert_eq!(collected, vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
    }
}
