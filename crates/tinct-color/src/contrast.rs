//! WCAG 2.1 relative luminance, contrast ratios, and accessibility tiers.
//!
//! Luminance is computed in sRGB space (the WCAG definition) even though
//! all color adjustments happen in OKLCH — the two spaces answer
//! different questions, and conflating them produces ramps that pass
//! visually but fail audits.

use serde::{Deserialize, Serialize};

use crate::color::{Color, srgb_to_linear};

/// WCAG accessibility tier for a color judged as text.
///
/// Tier boundaries follow WCAG 2.1: AAA at 7:1, AA at 4.5:1, A (large
/// text) at 3:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "A")]
    A,
    Fail,
}

impl AccessLevel {
    /// Classify a contrast ratio (conventionally the better of the
    /// white and black ratios for a given color).
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::A
        } else {
            Self::Fail
        }
    }

    /// The tier name as it appears in exports ("AAA", "AA", "A", "Fail").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Fail => "Fail",
        }
    }
}

/// Relative luminance per WCAG 2.1.
///
/// Linearizes the sRGB channels and weights them 0.2126 / 0.7152 /
/// 0.0722. Returns a value in [0.0, 1.0].
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// WCAG 2.1 contrast ratio between two colors: `(L1 + 0.05) / (L2 + 0.05)`
/// with L1 >= L2. Always in [1.0, 21.0], symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    ratio_from_luminance(la, lb)
}

/// Contrast ratio from two precomputed relative luminances.
#[must_use]
pub fn ratio_from_luminance(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick pure white or pure black, whichever contrasts better against
/// `bg`.
///
/// Best-of-two, not guaranteed AA/AAA — callers needing a guarantee
/// check the [`AccessLevel`] on the underlying ramp stop instead.
#[must_use]
pub fn best_foreground(bg: Color) -> Color {
    let lum = relative_luminance(bg);
    let vs_white = ratio_from_luminance(1.0, lum);
    let vs_black = ratio_from_luminance(lum, 0.0);
    if vs_white >= vs_black {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn luminance_endpoints() {
        assert!(approx_eq(relative_luminance(Color::BLACK), 0.0, 1e-6));
        assert!(approx_eq(relative_luminance(Color::WHITE), 1.0, 1e-6));
    }

    #[test]
    fn luminance_channel_weights() {
        let red = Color::srgb(1.0, 0.0, 0.0);
        assert!(approx_eq(relative_luminance(red), 0.2126, 1e-4));
        let green = Color::srgb(0.0, 1.0, 0.0);
        assert!(approx_eq(relative_luminance(green), 0.7152, 1e-4));
        let blue = Color::srgb(0.0, 0.0, 1.0);
        assert!(approx_eq(relative_luminance(blue), 0.0722, 1e-4));
    }

    #[test]
    fn contrast_black_white_is_21() {
        assert!(approx_eq(contrast_ratio(Color::BLACK, Color::WHITE), 21.0, 1e-3));
    }

    #[test]
    fn contrast_is_symmetric_and_at_least_one() {
        let a = Color::srgb(0.8, 0.2, 0.3);
        let b = Color::srgb(0.1, 0.1, 0.4);
        let ab = contrast_ratio(a, b);
        assert!(approx_eq(ab, contrast_ratio(b, a), 1e-9));
        assert!(ab >= 1.0);
        assert!(approx_eq(contrast_ratio(a, a), 1.0, 1e-9));
    }

    #[test]
    fn classify_tier_boundaries() {
        assert_eq!(AccessLevel::classify(7.0), AccessLevel::Aaa);
        assert_eq!(AccessLevel::classify(6.999), AccessLevel::Aa);
        assert_eq!(AccessLevel::classify(4.5), AccessLevel::Aa);
        assert_eq!(AccessLevel::classify(4.499), AccessLevel::A);
        assert_eq!(AccessLevel::classify(3.0), AccessLevel::A);
        assert_eq!(AccessLevel::classify(2.999), AccessLevel::Fail);
    }

    #[test]
    fn level_serde_names() {
        assert_eq!(serde_json::to_string(&AccessLevel::Aaa).unwrap(), "\"AAA\"");
        assert_eq!(serde_json::to_string(&AccessLevel::Fail).unwrap(), "\"Fail\"");
    }

    #[test]
    fn best_foreground_on_extremes() {
        assert_eq!(best_foreground(Color::WHITE), Color::BLACK);
        assert_eq!(best_foreground(Color::BLACK), Color::WHITE);
    }

    #[test]
    fn best_foreground_on_mid_blue() {
        // #3b82f6 is a mid blue — white text wins.
        let blue = Color::parse("#3b82f6").unwrap();
        assert_eq!(best_foreground(blue), Color::WHITE);
    }
}
