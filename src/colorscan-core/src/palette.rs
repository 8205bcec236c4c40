//! Color name providers.
//!
//! The named-color parser does not own any color data. It asks a
//! [`ColorSource`] for the base table whenever its cache is built, and
//! optionally folds in an [`ExtendedPalette`] whose names are synthesized from
//! prefixes (`bg-red-500`, `text-slate-900`, ...).

#![allow(clippy::unreadable_literal)] // Hex color values represent colors, not numbers

use compact_str::{format_compact, CompactString};
use std::borrow::Cow;

use crate::color::hex_from_u32;

/// A provider of named colors.
///
/// Names are reported exactly as the provider spells them; the cache inserts
/// each one both as given and lowercased.
pub trait ColorSource {
    /// Returns every `(name, 0xRRGGBB)` pair of the palette.
    fn color_map(&self) -> Vec<(Cow<'_, str>, u32)>;
}

impl<T: ColorSource + ?Sized> ColorSource for Box<T> {
    fn color_map(&self) -> Vec<(Cow<'_, str>, u32)> {
        (**self).color_map()
    }
}

// ============================================================================
// CSS named colors
// ============================================================================

/// The CSS named colors, spelled in CamelCase the way editor hosts expose
/// their palette (`AliceBlue`, `RebeccaPurple`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColors;

impl ColorSource for CssColors {
    fn color_map(&self) -> Vec<(Cow<'_, str>, u32)> {
        CSS_COLORS
            .iter()
            .map(|&(name, value)| (Cow::Borrowed(name), value))
            .collect()
    }
}

const CSS_COLORS: &[(&str, u32)] = &[
    ("AliceBlue", 0xF0F8FF),
    ("AntiqueWhite", 0xFAEBD7),
    ("Aqua", 0x00FFFF),
    ("Aquamarine", 0x7FFFD4),
    ("Azure", 0xF0FFFF),
    ("Beige", 0xF5F5DC),
    ("Bisque", 0xFFE4C4),
    ("Black", 0x000000),
    ("BlanchedAlmond", 0xFFEBCD),
    ("Blue", 0x0000FF),
    ("BlueViolet", 0x8A2BE2),
    ("Brown", 0xA52A2A),
    ("BurlyWood", 0xDEB887),
    ("CadetBlue", 0x5F9EA0),
    ("Chartreuse", 0x7FFF00),
    ("Chocolate", 0xD2691E),
    ("Coral", 0xFF7F50),
    ("CornflowerBlue", 0x6495ED),
    ("Cornsilk", 0xFFF8DC),
    ("Crimson", 0xDC143C),
    ("Cyan", 0x00FFFF),
    ("DarkBlue", 0x00008B),
    ("DarkCyan", 0x008B8B),
    ("DarkGoldenRod", 0xB8860B),
    ("DarkGray", 0xA9A9A9),
    ("DarkGrey", 0xA9A9A9),
    ("DarkGreen", 0x006400),
    ("DarkKhaki", 0xBDB76B),
    ("DarkMagenta", 0x8B008B),
    ("DarkOliveGreen", 0x556B2F),
    ("DarkOrange", 0xFF8C00),
    ("DarkOrchid", 0x9932CC),
    ("DarkRed", 0x8B0000),
    ("DarkSalmon", 0xE9967A),
    ("DarkSeaGreen", 0x8FBC8F),
    ("DarkSlateBlue", 0x483D8B),
    ("DarkSlateGray", 0x2F4F4F),
    ("DarkSlateGrey", 0x2F4F4F),
    ("DarkTurquoise", 0x00CED1),
    ("DarkViolet", 0x9400D3),
    ("DeepPink", 0xFF1493),
    ("DeepSkyBlue", 0x00BFFF),
    ("DimGray", 0x696969),
    ("DimGrey", 0x696969),
    ("DodgerBlue", 0x1E90FF),
    ("FireBrick", 0xB22222),
    ("FloralWhite", 0xFFFAF0),
    ("ForestGreen", 0x228B22),
    ("Fuchsia", 0xFF00FF),
    ("Gainsboro", 0xDCDCDC),
    ("GhostWhite", 0xF8F8FF),
    ("Gold", 0xFFD700),
    ("GoldenRod", 0xDAA520),
    ("Gray", 0x808080),
    ("Grey", 0x808080),
    ("Green", 0x008000),
    ("GreenYellow", 0xADFF2F),
    ("HoneyDew", 0xF0FFF0),
    ("HotPink", 0xFF69B4),
    ("IndianRed", 0xCD5C5C),
    ("Indigo", 0x4B0082),
    ("Ivory", 0xFFFFF0),
    ("Khaki", 0xF0E68C),
    ("Lavender", 0xE6E6FA),
    ("LavenderBlush", 0xFFF0F5),
    ("LawnGreen", 0x7CFC00),
    ("LemonChiffon", 0xFFFACD),
    ("LightBlue", 0xADD8E6),
    ("LightCoral", 0xF08080),
    ("LightCyan", 0xE0FFFF),
    ("LightGoldenRodYellow", 0xFAFAD2),
    ("LightGray", 0xD3D3D3),
    ("LightGrey", 0xD3D3D3),
    ("LightGreen", 0x90EE90),
    ("LightPink", 0xFFB6C1),
    ("LightSalmon", 0xFFA07A),
    ("LightSeaGreen", 0x20B2AA),
    ("LightSkyBlue", 0x87CEFA),
    ("LightSlateGray", 0x778899),
    ("LightSlateGrey", 0x778899),
    ("LightSteelBlue", 0xB0C4DE),
    ("LightYellow", 0xFFFFE0),
    ("Lime", 0x00FF00),
    ("LimeGreen", 0x32CD32),
    ("Linen", 0xFAF0E6),
    ("Magenta", 0xFF00FF),
    ("Maroon", 0x800000),
    ("MediumAquaMarine", 0x66CDAA),
    ("MediumBlue", 0x0000CD),
    ("MediumOrchid", 0xBA55D3),
    ("MediumPurple", 0x9370DB),
    ("MediumSeaGreen", 0x3CB371),
    ("MediumSlateBlue", 0x7B68EE),
    ("MediumSpringGreen", 0x00FA9A),
    ("MediumTurquoise", 0x48D1CC),
    ("MediumVioletRed", 0xC71585),
    ("MidnightBlue", 0x191970),
    ("MintCream", 0xF5FFFA),
    ("MistyRose", 0xFFE4E1),
    ("Moccasin", 0xFFE4B5),
    ("NavajoWhite", 0xFFDEAD),
    ("Navy", 0x000080),
    ("OldLace", 0xFDF5E6),
    ("Olive", 0x808000),
    ("OliveDrab", 0x6B8E23),
    ("Orange", 0xFFA500),
    ("OrangeRed", 0xFF4500),
    ("Orchid", 0xDA70D6),
    ("PaleGoldenRod", 0xEEE8AA),
    ("PaleGreen", 0x98FB98),
    ("PaleTurquoise", 0xAFEEEE),
    ("PaleVioletRed", 0xDB7093),
    ("PapayaWhip", 0xFFEFD5),
    ("PeachPuff", 0xFFDAB9),
    ("Peru", 0xCD853F),
    ("Pink", 0xFFC0CB),
    ("Plum", 0xDDA0DD),
    ("PowderBlue", 0xB0E0E6),
    ("Purple", 0x800080),
    ("RebeccaPurple", 0x663399),
    ("Red", 0xFF0000),
    ("RosyBrown", 0xBC8F8F),
    ("RoyalBlue", 0x4169E1),
    ("SaddleBrown", 0x8B4513),
    ("Salmon", 0xFA8072),
    ("SandyBrown", 0xF4A460),
    ("SeaGreen", 0x2E8B57),
    ("SeaShell", 0xFFF5EE),
    ("Sienna", 0xA0522D),
    ("Silver", 0xC0C0C0),
    ("SkyBlue", 0x87CEEB),
    ("SlateBlue", 0x6A5ACD),
    ("SlateGray", 0x708090),
    ("SlateGrey", 0x708090),
    ("Snow", 0xFFFAFA),
    ("SpringGreen", 0x00FF7F),
    ("SteelBlue", 0x4682B4),
    ("Tan", 0xD2B48C),
    ("Teal", 0x008080),
    ("Thistle", 0xD8BFD8),
    ("Tomato", 0xFF6347),
    ("Turquoise", 0x40E0D0),
    ("Violet", 0xEE82EE),
    ("Wheat", 0xF5DEB3),
    ("White", 0xFFFFFF),
    ("WhiteSmoke", 0xF5F5F5),
    ("Yellow", 0xFFFF00),
    ("YellowGreen", 0x9ACD32),
];

// ============================================================================
// Caller-supplied sources
// ============================================================================

/// A palette given as a plain list of names and packed RGB values.
#[derive(Debug, Clone, Default)]
pub struct StaticColors {
    colors: Vec<(CompactString, u32)>,
}

impl StaticColors {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color, replacing any earlier entry with the same name.
    pub fn insert(&mut self, name: impl Into<CompactString>, rgb: u32) {
        let name = name.into();
        match self.colors.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = rgb,
            None => self.colors.push((name, rgb)),
        }
    }

    /// Returns the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<S: Into<CompactString>> FromIterator<(S, u32)> for StaticColors {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut palette = Self::new();
        for (name, rgb) in iter {
            palette.insert(name, rgb);
        }
        palette
    }
}

impl ColorSource for StaticColors {
    fn color_map(&self) -> Vec<(Cow<'_, str>, u32)> {
        self.colors
            .iter()
            .map(|(name, rgb)| (Cow::Borrowed(name.as_str()), *rgb))
            .collect()
    }
}

/// Two sources read one after the other; later names override earlier ones
/// when the cache is built.
#[derive(Debug, Clone, Default)]
pub struct ChainedColors<A, B> {
    first: A,
    second: B,
}

impl<A, B> ChainedColors<A, B> {
    /// Chains `second` after `first`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: ColorSource, B: ColorSource> ColorSource for ChainedColors<A, B> {
    fn color_map(&self) -> Vec<(Cow<'_, str>, u32)> {
        let mut colors = self.first.color_map();
        colors.extend(self.second.color_map());
        colors
    }
}

// ============================================================================
// Extended palette
// ============================================================================

/// Extra names folded into the named-color table on demand.
///
/// Each color is registered once per prefix as `prefix-name`.
#[derive(Debug, Clone, Default)]
pub struct ExtendedPalette {
    colors: Vec<(CompactString, CompactString)>,
    prefixes: Vec<CompactString>,
}

impl ExtendedPalette {
    /// Creates a palette from `(name, rrggbb)` pairs and name prefixes.
    pub fn new<C, P>(colors: C, prefixes: P) -> Self
    where
        C: IntoIterator<Item = (CompactString, CompactString)>,
        P: IntoIterator<Item = CompactString>,
    {
        Self {
            colors: colors.into_iter().collect(),
            prefixes: prefixes.into_iter().collect(),
        }
    }

    /// The Tailwind CSS default palette with its utility-class prefixes.
    pub fn tailwind() -> Self {
        let mut colors: Vec<(CompactString, CompactString)> = Vec::with_capacity(
            TAILWIND_FAMILIES.len() * TAILWIND_SHADES.len() + TAILWIND_SINGLES.len(),
        );

        for &(name, value) in TAILWIND_SINGLES {
            colors.push((CompactString::new(name), hex_from_u32(value)));
        }
        for (family, values) in TAILWIND_FAMILIES {
            for (shade, value) in TAILWIND_SHADES.iter().zip(values.iter()) {
                colors.push((format_compact!("{family}-{shade}"), hex_from_u32(*value)));
            }
        }

        Self {
            colors,
            prefixes: TAILWIND_PREFIXES
                .iter()
                .map(|&prefix| CompactString::new(prefix))
                .collect(),
        }
    }

    /// Iterates over every synthesized `(prefix-name, rrggbb)` pair.
    pub fn entries(&self) -> impl Iterator<Item = (CompactString, &str)> + '_ {
        self.prefixes.iter().flat_map(move |prefix| {
            self.colors
                .iter()
                .map(move |(name, hex)| (format_compact!("{prefix}-{name}"), hex.as_str()))
        })
    }

    /// Returns the number of base colors (before prefixing).
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Returns the name prefixes.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(CompactString::as_str)
    }
}

const TAILWIND_PREFIXES: &[&str] = &[
    "bg",
    "border",
    "border-x",
    "border-y",
    "border-s",
    "border-e",
    "border-t",
    "border-r",
    "border-b",
    "border-l",
    "text",
    "decoration",
    "divide",
    "outline",
    "ring",
    "ring-offset",
    "shadow",
    "accent",
    "caret",
    "fill",
    "stroke",
    "from",
    "via",
    "to",
    "placeholder",
];

const TAILWIND_SINGLES: &[(&str, u32)] = &[("black", 0x000000), ("white", 0xFFFFFF)];

const TAILWIND_SHADES: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

const TAILWIND_FAMILIES: &[(&str, [u32; 11])] = &[
    (
        "slate",
        [
            0xF8FAFC, 0xF1F5F9, 0xE2E8F0, 0xCBD5E1, 0x94A3B8, 0x64748B, 0x475569, 0x334155,
            0x1E293B, 0x0F172A, 0x020617,
        ],
    ),
    (
        "gray",
        [
            0xF9FAFB, 0xF3F4F6, 0xE5E7EB, 0xD1D5DB, 0x9CA3AF, 0x6B7280, 0x4B5563, 0x374151,
            0x1F2937, 0x111827, 0x030712,
        ],
    ),
    (
        "zinc",
        [
            0xFAFAFA, 0xF4F4F5, 0xE4E4E7, 0xD4D4D8, 0xA1A1AA, 0x71717A, 0x52525B, 0x3F3F46,
            0x27272A, 0x18181B, 0x09090B,
        ],
    ),
    (
        "neutral",
        [
            0xFAFAFA, 0xF5F5F5, 0xE5E5E5, 0xD4D4D4, 0xA3A3A3, 0x737373, 0x525252, 0x404040,
            0x262626, 0x171717, 0x0A0A0A,
        ],
    ),
    (
        "stone",
        [
            0xFAFAF9, 0xF5F5F4, 0xE7E5E4, 0xD6D3D1, 0xA8A29E, 0x78716C, 0x57534E, 0x44403C,
            0x292524, 0x1C1917, 0x0C0A09,
        ],
    ),
    (
        "red",
        [
            0xFEF2F2, 0xFEE2E2, 0xFECACA, 0xFCA5A5, 0xF87171, 0xEF4444, 0xDC2626, 0xB91C1C,
            0x991B1B, 0x7F1D1D, 0x450A0A,
        ],
    ),
    (
        "orange",
        [
            0xFFF7ED, 0xFFEDD5, 0xFED7AA, 0xFDBA74, 0xFB923C, 0xF97316, 0xEA580C, 0xC2410C,
            0x9A3412, 0x7C2D12, 0x431407,
        ],
    ),
    (
        "amber",
        [
            0xFFFBEB, 0xFEF3C7, 0xFDE68A, 0xFCD34D, 0xFBBF24, 0xF59E0B, 0xD97706, 0xB45309,
            0x92400E, 0x78350F, 0x451A03,
        ],
    ),
    (
        "yellow",
        [
            0xFEFCE8, 0xFEF9C3, 0xFEF08A, 0xFDE047, 0xFACC15, 0xEAB308, 0xCA8A04, 0xA16207,
            0x854D0E, 0x713F12, 0x422006,
        ],
    ),
    (
        "lime",
        [
            0xF7FEE7, 0xECFCCB, 0xD9F99D, 0xBEF264, 0xA3E635, 0x84CC16, 0x65A30D, 0x4D7C0F,
            0x3F6212, 0x365314, 0x1A2E05,
        ],
    ),
    (
        "green",
        [
            0xF0FDF4, 0xDCFCE7, 0xBBF7D0, 0x86EFAC, 0x4ADE80, 0x22C55E, 0x16A34A, 0x15803D,
            0x166534, 0x14532D, 0x052E16,
        ],
    ),
    (
        "emerald",
        [
            0xECFDF5, 0xD1FAE5, 0xA7F3D0, 0x6EE7B7, 0x34D399, 0x10B981, 0x059669, 0x047857,
            0x065F46, 0x064E3B, 0x022C22,
        ],
    ),
    (
        "teal",
        [
            0xF0FDFA, 0xCCFBF1, 0x99F6E4, 0x5EEAD4, 0x2DD4BF, 0x14B8A6, 0x0D9488, 0x0F766E,
            0x115E59, 0x134E4A, 0x042F2E,
        ],
    ),
    (
        "cyan",
        [
            0xECFEFF, 0xCFFAFE, 0xA5F3FC, 0x67E8F9, 0x22D3EE, 0x06B6D4, 0x0891B2, 0x0E7490,
            0x155E75, 0x164E63, 0x083344,
        ],
    ),
    (
        "sky",
        [
            0xF0F9FF, 0xE0F2FE, 0xBAE6FD, 0x7DD3FC, 0x38BDF8, 0x0EA5E9, 0x0284C7, 0x0369A1,
            0x075985, 0x0C4A6E, 0x082F49,
        ],
    ),
    (
        "blue",
        [
            0xEFF6FF, 0xDBEAFE, 0xBFDBFE, 0x93C5FD, 0x60A5FA, 0x3B82F6, 0x2563EB, 0x1D4ED8,
            0x1E40AF, 0x1E3A8A, 0x172554,
        ],
    ),
    (
        "indigo",
        [
            0xEEF2FF, 0xE0E7FF, 0xC7D2FE, 0xA5B4FC, 0x818CF8, 0x6366F1, 0x4F46E5, 0x4338CA,
            0x3730A3, 0x312E81, 0x1E1B4B,
        ],
    ),
    (
        "violet",
        [
            0xF5F3FF, 0xEDE9FE, 0xDDD6FE, 0xC4B5FD, 0xA78BFA, 0x8B5CF6, 0x7C3AED, 0x6D28D9,
            0x5B21B6, 0x4C1D95, 0x2E1065,
        ],
    ),
    (
        "purple",
        [
            0xFAF5FF, 0xF3E8FF, 0xE9D5FF, 0xD8B4FE, 0xC084FC, 0xA855F7, 0x9333EA, 0x7E22CE,
            0x6B21A8, 0x581C87, 0x3B0764,
        ],
    ),
    (
        "fuchsia",
        [
            0xFDF4FF, 0xFAE8FF, 0xF5D0FE, 0xF0ABFC, 0xE879F9, 0xD946EF, 0xC026D3, 0xA21CAF,
            0x86198F, 0x701A75, 0x4A044E,
        ],
    ),
    (
        "pink",
        [
            0xFDF2F8, 0xFCE7F3, 0xFBCFE8, 0xF9A8D4, 0xF472B6, 0xEC4899, 0xDB2777, 0xBE185D,
            0x9D174D, 0x831843, 0x500724,
        ],
    ),
    (
        "rose",
        [
            0xFFF1F2, 0xFFE4E6, 0xFECDD3, 0xFDA4AF, 0xFB7185, 0xF43F5E, 0xE11D48, 0xBE123C,
            0x9F1239, 0x881337, 0x4C0519,
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_css_colors_are_camel_case() {
        let map = CssColors.color_map();
        assert!(map.len() > 140);
        assert!(map.iter().any(|(name, v)| name == "AliceBlue" && *v == 0xF0F8FF));
        assert!(map.iter().any(|(name, v)| name == "RebeccaPurple" && *v == 0x663399));
    }

    #[test]
    fn test_static_colors_replace_duplicates() {
        let mut palette = StaticColors::new();
        palette.insert("brand", 0x112233);
        palette.insert("brand", 0x445566);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.color_map(), vec![(Cow::Borrowed("brand"), 0x445566)]);
    }

    #[test]
    fn test_chained_colors_keep_order() {
        let chained = ChainedColors::new(
            StaticColors::from_iter([("a", 1)]),
            StaticColors::from_iter([("b", 2)]),
        );
        let names: Vec<_> = chained
            .color_map()
            .into_iter()
            .map(|(n, _)| n.into_owned())
            .collect();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_tailwind_entries_are_prefixed() {
        let palette = ExtendedPalette::tailwind();
        let entries: Vec<_> = palette.entries().collect();
        assert_eq!(
            entries.len(),
            palette.color_count() * palette.prefixes().count()
        );
        assert!(entries
            .iter()
            .any(|(name, hex)| name == "bg-red-500" && *hex == "ef4444"));
        assert!(entries
            .iter()
            .any(|(name, hex)| name == "ring-offset-white" && *hex == "ffffff"));
        assert!(!entries.iter().any(|(name, _)| name == "red-500"));
    }

    #[test]
    fn test_tailwind_default_palette_is_complete() {
        let palette = ExtendedPalette::tailwind();
        assert_eq!(palette.color_count(), 22 * 11 + 2);
        for side in ["border-x", "border-y", "border-t", "border-r", "border-b", "border-l"] {
            assert!(palette.prefixes().any(|prefix| prefix == side), "{side}");
        }
        assert!(palette
            .entries()
            .any(|(name, hex)| name == "border-l-fuchsia-600" && hex == "c026d3"));
    }
}
