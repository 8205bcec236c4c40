//! Named color recognition.
//!
//! Names are matched with a longest-prefix lookup in a [`Trie`] built from a
//! [`ColorSource`] and, optionally, an [`ExtendedPalette`]. The table and the
//! trie are built lazily and cached in a [`NameCache`]; the cache is rebuilt
//! only when the requested palette configuration changes.
//!
//! A name only matches on word boundaries: the bytes on either side of it must
//! not be color-name characters, so `blue` is found in `color: blue;` but not
//! in `blueberry` or `darkblue`.
//!
//! # Examples
//!
//! ```
//! use colorscan_core::names::{parse_name, NameCache, NameOptions};
//!
//! let mut cache = NameCache::default();
//! let line = b"color: blue;";
//!
//! let m = parse_name(&mut cache, line, 7, &NameOptions::default()).unwrap();
//! assert_eq!(m.consumed, 4);
//! assert_eq!(m.rgb_hex, "0000ff");
//!
//! assert!(parse_name(&mut cache, b"blueberry", 0, &NameOptions::default()).is_none());
//! ```

#![allow(clippy::non_std_lazy_statics)] // Using once_cell for broader compatibility

use ahash::AHashMap;
use compact_str::CompactString;
use once_cell::sync::Lazy;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt;
use std::str::FromStr;

use crate::classify::is_valid_color_char;
use crate::color::{hex_from_u32, ColorMatch};
use crate::error::OptionsError;
use crate::palette::{ColorSource, CssColors, ExtendedPalette};
use crate::trie::Trie;

// ============================================================================
// Options
// ============================================================================

/// How the extended (Tailwind) palette participates in name matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TailwindMode {
    /// Only the base palette is used.
    #[default]
    Disabled,
    /// The extended palette is folded into the name table.
    Normal,
    /// Colors come from a language server instead; the name table is not
    /// extended.
    Lsp,
    /// Both the extended palette and a language server are used.
    Both,
}

impl TailwindMode {
    /// Returns `true` if the extended palette belongs in the name table.
    #[inline]
    pub const fn includes_palette(self) -> bool {
        matches!(self, Self::Normal | Self::Both)
    }

    /// Returns the mode's configuration name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Normal => "normal",
            Self::Lsp => "lsp",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for TailwindMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TailwindMode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "disabled" | "false" | "off" | "none" => Ok(Self::Disabled),
            "normal" | "true" | "on" => Ok(Self::Normal),
            "lsp" => Ok(Self::Lsp),
            "both" => Ok(Self::Both),
            _ => Err(OptionsError::UnknownTailwindMode(s.to_string())),
        }
    }
}

impl From<bool> for TailwindMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Normal
        } else {
            Self::Disabled
        }
    }
}

/// Per-call options of the named color parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NameOptions {
    /// Extended palette mode.
    pub tailwind: TailwindMode,
    /// Skip base palette names that end in a digit (`Gray50`, `Grey100`).
    pub strip_digits: bool,
}

impl NameOptions {
    /// Creates options with the given Tailwind mode.
    pub const fn with_tailwind(tailwind: TailwindMode) -> Self {
        Self {
            tailwind,
            strip_digits: false,
        }
    }
}

// ============================================================================
// Color table
// ============================================================================

/// Mapping from color name to six-digit RGB hex, with the name length bounds.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    colors: AHashMap<CompactString, CompactString>,
    min_len: usize,
    max_len: usize,
}

impl ColorTable {
    /// Inserts or replaces a name, returning `true` if it was new.
    fn insert(&mut self, name: &str, rgb_hex: CompactString) -> bool {
        if name.is_empty() {
            return false;
        }
        if self.colors.is_empty() {
            self.min_len = name.len();
            self.max_len = name.len();
        } else {
            self.min_len = self.min_len.min(name.len());
            self.max_len = self.max_len.max(name.len());
        }
        self.colors.insert(CompactString::new(name), rgb_hex).is_none()
    }

    /// Returns the hex value of a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(CompactString::as_str)
    }

    /// Length of the shortest name, or 0 when empty.
    #[inline]
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Length of the longest name, or 0 when empty.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns the number of names.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the table has no names.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

// ============================================================================
// Cache
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BuildKey {
    include_palette: bool,
    strip_digits: bool,
}

/// Lazily built name table and trie.
///
/// The cache starts empty. The first lookup builds it, and it is rebuilt only
/// when the requested configuration differs from the one it was built with.
pub struct NameCache {
    source: Box<dyn ColorSource + Send + Sync>,
    extended: ExtendedPalette,
    table: ColorTable,
    trie: Trie,
    built: Option<BuildKey>,
    generation: u64,
}

impl fmt::Debug for NameCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCache")
            .field("names", &self.table.len())
            .field("built", &self.built)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Default for NameCache {
    fn default() -> Self {
        Self::new(CssColors)
    }
}

impl NameCache {
    /// Creates an unbuilt cache over `source`, with the Tailwind palette as
    /// the extended palette.
    pub fn new(source: impl ColorSource + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
            extended: ExtendedPalette::tailwind(),
            table: ColorTable::default(),
            trie: Trie::new(),
            built: None,
            generation: 0,
        }
    }

    /// Replaces the extended palette. The cache is invalidated.
    pub fn with_extended(mut self, extended: ExtendedPalette) -> Self {
        self.extended = extended;
        self.built = None;
        self
    }

    /// Returns `true` if a lookup with this configuration would rebuild.
    pub fn is_stale(&self, include_palette: bool, strip_digits: bool) -> bool {
        self.built
            != Some(BuildKey {
                include_palette,
                strip_digits,
            })
    }

    /// Rebuilds the table and trie unless they already match the requested
    /// configuration. Returns `true` if a rebuild happened.
    pub fn rebuild_if_stale(&mut self, include_palette: bool, strip_digits: bool) -> bool {
        if !self.is_stale(include_palette, strip_digits) {
            return false;
        }
        self.rebuild(BuildKey {
            include_palette,
            strip_digits,
        });
        true
    }

    fn rebuild(&mut self, key: BuildKey) {
        let mut table = ColorTable::default();
        let mut trie = Trie::new();

        for (name, value) in self.source.color_map() {
            if key.strip_digits && name.ends_with(|c: char| c.is_ascii_digit()) {
                continue;
            }
            let rgb_hex = hex_from_u32(value);
            let lower = name.to_ascii_lowercase();
            table.insert(&lower, rgb_hex.clone());
            trie.insert(&lower);
            table.insert(&name, rgb_hex);
            trie.insert(&name);
        }

        if key.include_palette {
            for (name, rgb_hex) in self.extended.entries() {
                table.insert(&name, CompactString::new(rgb_hex));
                trie.insert(&name);
            }
        }

        self.table = table;
        self.trie = trie;
        self.built = Some(key);
        self.generation += 1;

        tracing::debug!(
            names = self.table.len(),
            include_palette = key.include_palette,
            strip_digits = key.strip_digits,
            generation = self.generation,
            "Rebuilt named color cache"
        );
    }

    /// Looks up a name at `offset` against the current table.
    ///
    /// Does not rebuild; an unbuilt cache matches nothing.
    pub fn lookup(&self, line: &[u8], offset: usize) -> Option<ColorMatch> {
        if self.table.is_empty() {
            return None;
        }

        let remaining = line.len().checked_sub(offset)?;
        if remaining < self.table.min_len() {
            return None;
        }
        if offset > 0 && is_valid_color_char(line[offset - 1]) {
            return None;
        }

        let window = &line[..line.len().min(offset + self.table.max_len())];
        let prefix = self.trie.longest_prefix(window, offset)?;

        let end = offset + prefix.len();
        if line.get(end).is_some_and(|&b| is_valid_color_char(b)) {
            return None;
        }

        let rgb_hex = self.table.get(prefix)?;
        Some(ColorMatch::new(prefix.len(), rgb_hex))
    }

    /// Returns the current table.
    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    /// Returns the current trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Number of rebuilds so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Matches a color name starting at `offset`.
///
/// Builds or rebuilds `cache` first when `opts` asks for a different palette
/// configuration than the cached one.
pub fn parse_name(
    cache: &mut NameCache,
    line: &[u8],
    offset: usize,
    opts: &NameOptions,
) -> Option<ColorMatch> {
    cache.rebuild_if_stale(opts.tailwind.includes_palette(), opts.strip_digits);
    cache.lookup(line, offset)
}

// ============================================================================
// Shared cache
// ============================================================================

static GLOBAL_NAME_CACHE: Lazy<SharedNameCache> =
    Lazy::new(|| SharedNameCache::new(NameCache::default()));

/// A [`NameCache`] that can be used from several threads.
///
/// Lookups share a read lock. The staleness check is repeated under the write
/// lock, so concurrent callers requesting the same configuration rebuild it
/// once.
#[derive(Debug)]
pub struct SharedNameCache {
    inner: RwLock<NameCache>,
}

impl Default for SharedNameCache {
    fn default() -> Self {
        Self::new(NameCache::default())
    }
}

impl SharedNameCache {
    /// Wraps a cache.
    pub fn new(cache: NameCache) -> Self {
        Self {
            inner: RwLock::new(cache),
        }
    }

    /// Returns the process-wide cache over the CSS named colors.
    pub fn global() -> &'static SharedNameCache {
        &GLOBAL_NAME_CACHE
    }

    /// Thread-safe counterpart of [`parse_name`].
    pub fn parse(&self, line: &[u8], offset: usize, opts: &NameOptions) -> Option<ColorMatch> {
        let include_palette = opts.tailwind.includes_palette();
        {
            let cache = self.inner.read();
            if !cache.is_stale(include_palette, opts.strip_digits) {
                return cache.lookup(line, offset);
            }
        }

        let mut cache = self.inner.write();
        cache.rebuild_if_stale(include_palette, opts.strip_digits);
        RwLockWriteGuard::downgrade(cache).lookup(line, offset)
    }

    /// Returns read access to the cache.
    pub fn read(&self) -> RwLockReadGuard<'_, NameCache> {
        self.inner.read()
    }
}
