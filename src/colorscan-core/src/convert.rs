//! HSL to RGB conversion.
//!
//! Inputs are fractions: hue, saturation and lightness all normalized to
//! `0.0..=1.0` by the caller. Outputs are unrounded channels in `0.0..=255.0`
//! so that callers can apply alpha before flooring.

/// Computes one RGB channel from the HSL intermediates `p` and `q`.
///
/// `t` is the hue shifted by the channel offset. It is wrapped into range by
/// adding or subtracting one period once, so it must already lie within one
/// period of `0.0..=1.0`. The result is scaled to `0.0..=255.0`.
pub fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    let channel = if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    };

    255.0 * channel
}

/// Converts normalized HSL components to RGB channels in `0.0..=255.0`.
///
/// Returns `None` when any component exceeds 1. A saturation of zero yields
/// the achromatic gray for the given lightness.
///
/// # Examples
///
/// ```
/// use colorscan_core::convert::hsl_to_rgb;
///
/// let (r, g, b) = hsl_to_rgb(0.0, 1.0, 0.5).unwrap();
/// assert_eq!((r.floor(), g.floor(), b.floor()), (255.0, 0.0, 0.0));
/// assert!(hsl_to_rgb(0.0, 1.5, 0.5).is_none());
/// ```
#[allow(clippy::many_single_char_names)]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Option<(f64, f64, f64)> {
    if h > 1.0 || s > 1.0 || l > 1.0 {
        return None;
    }

    if s == 0.0 {
        let gray = l * 255.0;
        return Some((gray, gray, gray));
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Some((
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ))
}
