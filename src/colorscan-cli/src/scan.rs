//! Running the scanner over files and stdin.

use std::fmt;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use colorscan_core::scanner::lines;
use colorscan_core::{ChainedColors, CssColors, Matcher, NameCache, Scanner};
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::error::ConfigResult;
use crate::report::{write_findings, Finding, OutputFormat};

/// Something to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Input {
    /// Reads the whole input as bytes.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        match self {
            Self::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                Ok(buf)
            }
            Self::File(path) => std::fs::read(path),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Totals of a scan run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Inputs scanned successfully.
    pub scanned: usize,
    /// Inputs that could not be read.
    pub failed: usize,
    /// Literals reported.
    pub findings: usize,
}

/// Builds a scanner from the configuration.
///
/// `[palette]` names are added on top of the CSS named colors.
pub fn build_scanner(config: &ScanConfig) -> ConfigResult<Scanner> {
    let options = config.matchers.to_options()?;
    let palette = config.palette_colors()?;
    let matcher = Matcher::new(&options)?;

    debug!(
        palette = palette.len(),
        tailwind = %options.tailwind,
        "Built scanner"
    );

    let cache = NameCache::new(ChainedColors::new(CssColors, palette));
    Ok(Scanner::with_cache(matcher, cache))
}

/// Scans `text` and returns its findings, labelled with `path`.
pub fn scan_bytes(scanner: &mut Scanner, path: &str, text: &[u8]) -> Vec<Finding> {
    let source_lines: Vec<&[u8]> = lines(text).collect();
    let mut findings = Vec::new();

    for found in scanner.scan_text(text) {
        let line = source_lines.get(found.line).copied().unwrap_or_default();
        for span in found.spans {
            findings.push(Finding {
                path: path.to_string(),
                line: found.line + 1,
                column: span.range.start + 1,
                length: span.range.len(),
                rgb_hex: span.rgb_hex_long().to_string(),
                literal: String::from_utf8_lossy(span.literal(line)).into_owned(),
            });
        }
    }

    findings
}

/// Scans every input and writes findings to `out` as they are produced.
///
/// Unreadable inputs are logged and counted, and do not stop the run. Only
/// write failures are returned as errors.
pub fn scan_inputs<W: Write>(
    scanner: &mut Scanner,
    inputs: &[Input],
    format: OutputFormat,
    out: &mut W,
) -> io::Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for input in inputs {
        let name = input.to_string();
        let text = match input.read() {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %name, error = %err, "Failed to read input");
                summary.failed += 1;
                continue;
            }
        };

        let findings = scan_bytes(scanner, &name, &text);
        debug!(path = %name, bytes = text.len(), findings = findings.len(), "Scanned input");

        write_findings(out, format, &findings)?;
        summary.scanned += 1;
        summary.findings += findings.len();
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_findings_are_one_based() {
        let mut scanner = build_scanner(&ScanConfig::default()).unwrap();
        let findings = scan_bytes(&mut scanner, "a.css", b"\np { color: #F80; }");
        assert_eq!(
            findings,
            vec![Finding {
                path: "a.css".to_string(),
                line: 2,
                column: 12,
                length: 4,
                rgb_hex: "ff8800".to_string(),
                literal: "#F80".to_string(),
            }]
        );
    }

    #[test]
    fn test_palette_extends_names() {
        let config: ScanConfig = toml::from_str("[palette]\nbrand = \"#ff5a1f\"\n").unwrap();
        let mut scanner = build_scanner(&config).unwrap();
        let findings = scan_bytes(&mut scanner, "-", b"brand red");
        let hex: Vec<&str> = findings.iter().map(|f| f.rgb_hex.as_str()).collect();
        assert_eq!(hex, ["ff5a1f", "ff0000"]);
    }

    #[test]
    fn test_non_utf8_input() {
        let mut scanner = build_scanner(&ScanConfig::default()).unwrap();
        let findings = scan_bytes(&mut scanner, "-", b"\xff\xfe navy \xc3");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].column, 4);
    }

    #[test]
    fn test_missing_input_is_counted() {
        let mut scanner = build_scanner(&ScanConfig::default()).unwrap();
        let mut out = Vec::new();
        let inputs = [Input::File(PathBuf::from("/nonexistent/colorscan/input.css"))];
        let summary = scan_inputs(&mut scanner, &inputs, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(summary, ScanSummary { scanned: 0, failed: 1, findings: 0 });
        assert!(out.is_empty());
    }

    #[test]
    fn test_input_names() {
        assert_eq!(Input::Stdin.to_string(), "-");
        assert_eq!(Input::File(PathBuf::from("x/y.css")).to_string(), "x/y.css");
    }
}
