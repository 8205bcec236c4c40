//! Scanner configuration.
//!
//! Read from `<config_dir>/colorscan/config.toml` unless a path is given:
//!
//! ```toml
//! [matchers]
//! css = true
//! tailwind = "normal"
//!
//! [palette]
//! brand = "#ff5a1f"
//!
//! [output]
//! format = "json"
//! ```
//!
//! Every section and key is optional.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use colorscan_core::color::parse_rgb_hex;
use colorscan_core::{MatcherOptions, StaticColors, TailwindMode};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::report::OutputFormat;

/// Directory under the platform config dir.
pub const APP_DIR_NAME: &str = "colorscan";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Scanner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Literal forms to recognize.
    pub matchers: MatchersConfig,

    /// Extra color names, as `name = "#rrggbb"`.
    pub palette: BTreeMap<String, String>,

    /// Output settings.
    pub output: OutputConfig,
}

/// `[matchers]` section. Mirrors [`MatcherOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MatchersConfig {
    /// Named colors.
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
    /// Every CSS form.
    pub css: bool,
    /// Both CSS functions.
    pub css_fn: bool,
    /// Tailwind palette mode, as a boolean or a mode name.
    pub tailwind: TailwindSetting,
    /// Skip base names ending in a digit.
    pub strip_digits: bool,
}

impl Default for MatchersConfig {
    fn default() -> Self {
        let options = MatcherOptions::default();
        Self {
            names: options.names,
            rgb_short: options.rgb_short,
            rrggbb: options.rrggbb,
            rrggbbaa: options.rrggbbaa,
            aarrggbb: options.aarrggbb,
            rgb_fn: options.rgb_fn,
            hsl_fn: options.hsl_fn,
            css: options.css,
            css_fn: options.css_fn,
            tailwind: TailwindSetting::default(),
            strip_digits: options.strip_digits,
        }
    }
}

impl MatchersConfig {
    /// Converts the section into matcher options.
    pub fn to_options(&self) -> ConfigResult<MatcherOptions> {
        Ok(MatcherOptions {
            names: self.names,
            rgb_short: self.rgb_short,
            rrggbb: self.rrggbb,
            rrggbbaa: self.rrggbbaa,
            aarrggbb: self.aarrggbb,
            rgb_fn: self.rgb_fn,
            hsl_fn: self.hsl_fn,
            css: self.css,
            css_fn: self.css_fn,
            tailwind: self.tailwind.resolve()?,
            strip_digits: self.strip_digits,
        })
    }
}

/// `tailwind` accepts either a boolean or a mode name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TailwindSetting {
    /// `true` is the normal mode, `false` disables the palette.
    Enabled(bool),
    /// `"normal"`, `"lsp"` or `"both"`.
    Mode(String),
}

impl Default for TailwindSetting {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

impl From<TailwindMode> for TailwindSetting {
    fn from(mode: TailwindMode) -> Self {
        Self::Mode(mode.as_str().to_string())
    }
}

impl TailwindSetting {
    /// Resolves the setting to a mode.
    pub fn resolve(&self) -> ConfigResult<TailwindMode> {
        match self {
            Self::Enabled(enabled) => Ok(TailwindMode::from(*enabled)),
            Self::Mode(name) => name
                .parse()
                .map_err(|_| ConfigError::InvalidTailwindMode(name.clone())),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format.
    pub format: OutputFormat,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--tailwind`
    pub tailwind: Option<TailwindMode>,
    /// `--css`
    pub css: bool,
    /// `--no-names`
    pub no_names: bool,
    /// `--format`
    pub format: Option<OutputFormat>,
}

impl ScanConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Loads `path` if given, else the default file if it exists, else
    /// defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(mode) = overrides.tailwind {
            self.matchers.tailwind = mode.into();
        }
        if overrides.css {
            self.matchers.css = true;
        }
        if overrides.no_names {
            self.matchers.names = false;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
    }

    /// Decodes `[palette]` into a color source.
    pub fn palette_colors(&self) -> ConfigResult<StaticColors> {
        self.palette
            .iter()
            .map(|(name, value)| {
                parse_rgb_hex(value.trim())
                    .map(|rgb| (name.as_str(), rgb))
                    .ok_or_else(|| ConfigError::InvalidPaletteColor {
                        name: name.clone(),
                        value: value.clone(),
                    })
            })
            .collect()
    }
}

/// Default configuration file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}
