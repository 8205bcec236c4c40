//! colorscan - report color literals found in text files.
//!
//! This crate provides:
//! - TOML configuration of the recognized literal forms and extra palette names
//! - Scanning of files and stdin with `colorscan-core`
//! - Text and JSON-lines reports

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod error;
pub mod report;
pub mod scan;

pub use config::{Overrides, ScanConfig, default_config_path};
pub use error::{ConfigError, ConfigResult};
pub use report::{Finding, OutputFormat, write_findings};
pub use scan::{Input, ScanSummary, build_scanner, scan_bytes, scan_inputs};
