//! Ramp generation — an N-stop perceptual scale from one seed color.
//!
//! A ramp anchors an arbitrary seed to its "natural" position on a
//! canonical lightness scale, reproduces the seed verbatim at that
//! position, and interpolates OKLCH lightness/chroma toward fixed light
//! and dark endpoints on either side. Every stop carries its WCAG
//! luminance, contrast against white and black, and accessibility tier
//! so downstream mappers never redo the math.
//!
//! With no contrast shift applied, luminance is monotonically
//! non-increasing from the lightest stop to the darkest.

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorError, srgb_to_linear};
use crate::contrast::{AccessLevel, ratio_from_luminance};

// ─── Stop tables ────────────────────────────────────────────────────

static LABELS_11: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Canonical target lightness per stop of the full 11-step scale.
///
/// A seed is anchored to whichever of these its own OKLCH lightness is
/// nearest — a linear scan over at most 11 entries.
static TARGETS_11: [f64; 11] = [
    0.985, 0.967, 0.922, 0.870, 0.708, 0.556, 0.439, 0.371, 0.269, 0.205, 0.145,
];

/// A supported stop layout: parallel label and target-lightness arrays.
///
/// The 10-step table drops the 950 cap; the 9-step table drops both
/// extremes. Targets stay aligned with the canonical 11-step values so
/// a seed lands on the same perceptual position regardless of layout.
#[derive(Debug, Clone, Copy)]
pub struct StopTable {
    labels: &'static [&'static str],
    targets: &'static [f64],
}

impl StopTable {
    /// The conventional 11-stop layout (50…950).
    #[must_use]
    pub const fn eleven() -> Self {
        Self {
            labels: &LABELS_11,
            targets: &TARGETS_11,
        }
    }

    /// 10 stops: 50…900.
    #[must_use]
    pub fn ten() -> Self {
        Self {
            labels: &LABELS_11[..10],
            targets: &TARGETS_11[..10],
        }
    }

    /// 9 stops: 100…900.
    #[must_use]
    pub fn nine() -> Self {
        Self {
            labels: &LABELS_11[1..10],
            targets: &TARGETS_11[1..10],
        }
    }

    /// Look up a table by stop count. Only 9, 10, and 11 are supported.
    #[must_use]
    pub fn for_count(count: usize) -> Option<Self> {
        match count {
            9 => Some(Self::nine()),
            10 => Some(Self::ten()),
            11 => Some(Self::eleven()),
            _ => None,
        }
    }

    /// Number of stops in this layout.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Stop labels, lightest first.
    #[must_use]
    pub const fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Index of the target lightness nearest `l`.
    #[must_use]
    pub fn nearest_position(&self, l: f64) -> usize {
        let mut best = 0;
        let mut best_dist = f64::MAX;
        for (i, target) in self.targets.iter().enumerate() {
            let dist = (target - l).abs();
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }
        best
    }
}

impl Default for StopTable {
    fn default() -> Self {
        Self::eleven()
    }
}

// ─── Ramp data model ────────────────────────────────────────────────

/// WCAG contrast of a stop against pure white and pure black.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastPair {
    pub white: f64,
    pub black: f64,
}

/// Accessibility verdict for a stop used as a text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessibility {
    pub level: AccessLevel,
    pub text_on_white: bool,
    pub text_on_black: bool,
}

/// One stop of a generated ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampStop {
    pub label: String,
    pub hex: String,
    pub luminance: f64,
    pub contrast: ContrastPair,
    pub accessibility: Accessibility,
    /// The OKLCH point behind `hex`, kept for downstream derivation.
    #[serde(skip)]
    pub color: Color,
}

/// An ordered perceptual scale derived from one seed color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    pub stops: Vec<RampStop>,
    /// Index of the stop that reproduces the seed verbatim.
    pub base_index: usize,
}

impl Ramp {
    /// Find a stop by label.
    #[must_use]
    pub fn stop(&self, label: &str) -> Option<&RampStop> {
        self.stops.iter().find(|s| s.label == label)
    }

    /// Stop at a position index, clamped into range rather than panicking.
    #[must_use]
    pub fn at_clamped(&self, index: usize) -> &RampStop {
        &self.stops[index.min(self.stops.len() - 1)]
    }

    /// Stop at a fractional offset along the ramp (0.0 = lightest,
    /// 1.0 = darkest), rounded to the nearest index.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample(&self, fraction: f64) -> &RampStop {
        let max = self.stops.len() - 1;
        let idx = (fraction.clamp(0.0, 1.0) * max as f64).round() as usize;
        &self.stops[idx]
    }
}

// ─── Interpolation endpoints ────────────────────────────────────────

/// Lightness of the light endpoint every ramp fades toward.
const LIGHT_END_L: f64 = 0.985;
/// Lightness of the dark endpoint.
const DARK_END_L: f64 = 0.145;
/// Chroma fades faster than lightness rises on the light side.
const LIGHT_CHROMA_FACTOR: f64 = 0.8;
/// Chroma retention on the dark side.
const DARK_CHROMA_FACTOR: f64 = 0.9;

// ─── Contrast-shift warp coefficients ───────────────────────────────
//
// Empirical constants carried over from the production tuning of the
// warp. Named, not re-derived; changing any of them reshapes every
// shifted ramp.

/// Overall warp gain applied to `shift * center_dist * strength`.
const WARP_GAIN: f64 = 0.3;
/// Expansion: position past which the dark half darkens instead of
/// lightening.
const EXPAND_DARK_CROSSOVER: f64 = 0.7;
/// Expansion: damped lightening applied to the upper-middle dark half.
const EXPAND_DARK_GAIN: f64 = 0.2;
/// Compression: pull factor for the light half (gentle).
const COMPRESS_LIGHT: f64 = 0.25;
/// Compression: pull factor for the dark half (aggressive).
const COMPRESS_DARK: f64 = 1.3;
/// Chroma damping proportional to the applied lightness delta.
const CHROMA_DAMP: f64 = 0.4;

// ─── Generation ─────────────────────────────────────────────────────

/// Generate a ramp from a seed color string.
///
/// Parses the seed (hex or `oklch()`), anchors it to its nearest
/// canonical position, and interpolates the remaining stops. The stop
/// at the base position reproduces the seed's hex exactly when
/// `contrast_shift` is 0.
///
/// # Errors
///
/// Any parse failure is a total failure for the ramp — callers never
/// receive partially-valid stops.
pub fn generate_ramp(
    seed: &str,
    table: StopTable,
    contrast_shift: f64,
) -> Result<Ramp, ColorError> {
    let color = Color::parse(seed)?;
    Ok(generate_ramp_from(color, table, contrast_shift))
}

/// Generate a ramp from an already-parsed seed color.
#[must_use]
pub fn generate_ramp_from(seed: Color, table: StopTable, contrast_shift: f64) -> Ramp {
    let n = table.len();
    let base = table.nearest_position(seed.l);

    let light_end_c = (seed.c * 0.05).max(0.002);
    let dark_end_c = (seed.c * 0.6).max(0.02);

    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let point = if i == base {
            // Exact fidelity: the seed's OKLCH verbatim.
            seed
        } else if i < base {
            let f = (base - i) as f64 / base as f64;
            let l = lerp(seed.l, LIGHT_END_L, f);
            let c = lerp(seed.c, light_end_c, LIGHT_CHROMA_FACTOR * f);
            Color::oklch(l.clamp(0.01, 0.99), c.max(0.0), seed.h)
        } else {
            let f = (i - base) as f64 / (n - 1 - base) as f64;
            let l = lerp(seed.l, DARK_END_L, f);
            let c = lerp(seed.c, dark_end_c, DARK_CHROMA_FACTOR * f);
            Color::oklch(l.clamp(0.01, 0.99), c.max(0.0), seed.h)
        };
        points.push(point);
    }

    if contrast_shift != 0.0 {
        for (i, point) in points.iter_mut().enumerate() {
            *point = warp_stop(*point, i, n, contrast_shift);
        }
    }

    let stops = points
        .into_iter()
        .enumerate()
        .map(|(i, point)| make_stop(table.labels[i], point))
        .collect();

    Ramp { stops, base_index: base }
}

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Apply the contrast-shift warp to one stop.
///
/// Expansion (`shift > 0`) pushes stops away from the middle of the
/// scale: the light half gets lighter, the upper-middle dark half gets
/// a damped lightening, and the deep end gets darker. Compression
/// (`shift < 0`) pulls both halves toward mid-lightness, harder on the
/// dark half. Chroma is damped in proportion to the lightness delta.
fn warp_stop(point: Color, index: usize, n: usize, shift: f64) -> Color {
    let position = index as f64 / (n - 1) as f64;
    let center_dist = (position - 0.5).abs();
    let strength = (position * std::f64::consts::PI).sin();
    let amount = shift.abs() * center_dist * strength * WARP_GAIN;

    let delta = if shift > 0.0 {
        if position < 0.5 {
            amount
        } else if position < EXPAND_DARK_CROSSOVER {
            amount * EXPAND_DARK_GAIN
        } else {
            -amount
        }
    } else if position < 0.5 {
        -amount * COMPRESS_LIGHT
    } else {
        amount * COMPRESS_DARK
    };

    let l = (point.l + delta).clamp(0.01, 0.99);
    let c = (point.c * (1.0 - delta.abs() * CHROMA_DAMP)).max(0.0);
    Color::oklch(l, c, point.h)
}

/// Derive hex, luminance, contrast, and accessibility for one stop.
///
/// Luminance is computed from the quantized 8-bit channels so it
/// matches the emitted hex, not the unrounded OKLCH point.
fn make_stop(label: &str, point: Color) -> RampStop {
    let mapped = point.to_gamut();
    let (r, g, b) = mapped.to_rgb8();
    let hex = format!("#{r:02x}{g:02x}{b:02x}");

    let luminance = 0.2126 * srgb_to_linear(f64::from(r) / 255.0)
        + 0.7152 * srgb_to_linear(f64::from(g) / 255.0)
        + 0.0722 * srgb_to_linear(f64::from(b) / 255.0);

    let white = ratio_from_luminance(1.0, luminance);
    let black = ratio_from_luminance(luminance, 0.0);
    let level = AccessLevel::classify(white.max(black));

    RampStop {
        label: label.to_owned(),
        hex,
        luminance,
        contrast: ContrastPair { white, black },
        accessibility: Accessibility {
            level,
            text_on_white: white >= 4.5,
            text_on_black: black >= 4.5,
        },
        color: mapped,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
