//! Output of scan results.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// How findings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `path:line:col: #rrggbb literal`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// A color literal found in an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Input name (`-` for stdin).
    pub path: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column.
    pub column: usize,
    /// Length of the literal in bytes.
    pub length: usize,
    /// Six-digit lowercase RGB hex, without `#`.
    pub rgb_hex: String,
    /// The literal as written (lossily decoded).
    pub literal: String,
}

/// Writes `findings` to `out` in the given format.
pub fn write_findings<W: Write>(
    out: &mut W,
    format: OutputFormat,
    findings: &[Finding],
) -> io::Result<()> {
    for finding in findings {
        match format {
            OutputFormat::Text => writeln!(
                out,
                "{}:{}:{}: #{} {}",
                finding.path, finding.line, finding.column, finding.rgb_hex, finding.literal
            )?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, finding)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
