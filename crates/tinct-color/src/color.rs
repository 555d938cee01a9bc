//! OKLCH-native color type and the sRGB conversion pipeline.
//!
//! All interpolation and warping in tinct happens in OKLCH, the
//! cylindrical form of Björn Ottosson's Oklab space, because equal
//! numerical steps there produce equal visual steps. Colors enter as
//! hex or `oklch()` strings, live as OKLCH, and leave as `#rrggbb` hex
//! or 4-decimal `oklch()` CSS strings.
//!
//! Conversion pipeline:
//!
//!   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ hex / css
//!
//! Gamut mapping reduces chroma (preserving lightness and hue) when an
//! OKLCH point falls outside the displayable sRGB range.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to interpret a color string.
///
/// Any unparseable seed is a hard failure for the operation that needed
/// it — ramps are never built from guessed colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is neither a valid hex color nor a valid `oklch()` form.
    #[error("unparseable color: {0:?}")]
    Parse(String),
    /// A numeric component parsed but was NaN or infinite.
    #[error("non-finite component in color: {0:?}")]
    NonFinite(String),
}

/// A perceptual color stored in OKLCH with alpha.
///
/// - `l`: lightness, 0.0 (black) to 1.0 (white)
/// - `c`: chroma, 0.0 (gray) to ~0.37 (most vivid in sRGB)
/// - `h`: hue angle in degrees, [0, 360)
/// - `alpha`: opacity, 0.0 to 1.0
#[derive(Clone, Copy)]
pub struct Color {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub alpha: f64,
}

impl Color {
    /// Create a color from OKLCH values.
    #[inline]
    #[must_use]
    pub const fn oklch(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    /// Create a color from OKLCH values with alpha.
    #[inline]
    #[must_use]
    pub const fn oklcha(l: f64, c: f64, h: f64, alpha: f64) -> Self {
        Self { l, c, h, alpha }
    }

    /// Create a color from sRGB components in 0.0–1.0.
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h, alpha: 1.0 }
    }

    /// Create a color from 8-bit sRGB values.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Perceptual gray at the given OKLCH lightness.
    #[inline]
    #[must_use]
    pub const fn gray(lightness: f64) -> Self {
        Self::oklch(lightness, 0.0, 0.0)
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    /// Parse a color string.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (hash optional)
    /// and the CSS `oklch(L C H)` / `oklch(L C H / A)` forms that
    /// tinct's own design-system export emits (`L` may carry a `%`).
    ///
    /// # Errors
    ///
    /// [`ColorError::Parse`] when the string matches neither form, and
    /// [`ColorError::NonFinite`] when an `oklch()` component is NaN or
    /// infinite — NaN never passes through silently.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        if let Some(body) = trimmed
            .strip_prefix("oklch(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_oklch_body(body, s);
        }
        parse_hex(trimmed).ok_or_else(|| ColorError::Parse(s.to_owned()))
    }

    // ─── Perceptual operations ───────────────────────────────────────

    /// Increase lightness by `amount`, clamped to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        Self {
            l: (self.l + amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Decrease lightness by `amount`, clamped to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    /// Set lightness to an absolute value, clamped to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn set_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Set chroma to an absolute value, clamped to >= 0.0.
    #[inline]
    #[must_use]
    pub fn set_chroma(self, c: f64) -> Self {
        Self { c: c.max(0.0), ..self }
    }

    /// Set hue to an absolute angle, normalized to [0, 360).
    #[inline]
    #[must_use]
    pub fn set_hue(self, h: f64) -> Self {
        Self {
            h: normalize_hue(h),
            ..self
        }
    }

    /// Return a copy with the given alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Whether this color is fully opaque.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether this color has no visible chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-7
    }

    // ─── Conversions out ─────────────────────────────────────────────

    /// Convert to sRGB components, channel-clamped to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to a hex string: `#rrggbb`, or `#rrggbbaa` when alpha < 1.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = to_u8(self.alpha.clamp(0.0, 1.0));
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Format as a 4-decimal CSS `oklch()` string.
    ///
    /// This is the form the design-system CSS export emits, and
    /// [`Color::parse`] re-ingests it losslessly.
    #[must_use]
    pub fn to_css_oklch(self) -> String {
        if self.is_opaque() {
            format!("oklch({:.4} {:.4} {:.4})", self.l, self.c, self.h)
        } else {
            format!(
                "oklch({:.4} {:.4} {:.4} / {:.4})",
                self.l, self.c, self.h, self.alpha
            )
        }
    }

    /// Whether this OKLCH point lies inside the sRGB gamut.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&g) && (0.0..=1.0).contains(&b)
    }

    /// Reduce chroma until the color fits the sRGB gamut, preserving
    /// lightness and hue. Binary search, 24 iterations.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }
        let mut lo: f64 = 0.0;
        let mut hi: f64 = self.c;
        for _ in 0..24 {
            let mid = (lo + hi) * 0.5;
            let candidate = Self { c: mid, ..self };
            if candidate.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Self { c: lo, ..self }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
        } else {
            write!(
                f,
                "Color::oklcha({:.4}, {:.4}, {:.1}, {:.2})",
                self.l, self.c, self.h, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-9;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.alpha - other.alpha).abs() < EPS
            && (self.is_achromatic() || other.is_achromatic() || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// Colors cross the JSON boundary as hex strings — the canonical theme
// interchange format uses `#rrggbb` values throughout.

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

// ─── Hue helpers ─────────────────────────────────────────────────────

/// Normalize a hue angle to [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc).
#[inline]
fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────

#[inline]
fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

#[inline]
fn oklab_ab_to_oklch(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    // The matrix constants don't cancel exactly for grays; residual
    // chroma up to ~1e-7 is conversion noise, not color.
    if c < 1e-6 {
        return (0.0, 0.0);
    }
    (c, normalize_hue(b.atan2(a).to_degrees()))
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────
//
// Matrices from Björn Ottosson's Oklab specification; the intermediate
// space is LMS cone response with a cube-root nonlinearity.

#[inline]
fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = l_ok + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l_ok - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l_ok - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    (
        4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
        -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
        -0.004_196_086_3 * l - 0.703_418_614_8 * m + 1.707_614_701_0 * s,
    )
}

#[inline]
fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
    let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
    let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    (
        0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_,
        1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_,
        0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_,
    )
}

// ─── Linear sRGB ↔ sRGB (gamma) ─────────────────────────────────────

/// Apply the sRGB transfer function to one linear component.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Remove the sRGB transfer function from one encoded component.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Composite conversions ──────────────────────────────────────────

fn srgb_to_oklch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (l, a, b_ok) =
        linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Parsing ────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    let color = match bytes.len() {
        3 => {
            let r = hex_digit(bytes[0])?;
            let g = hex_digit(bytes[1])?;
            let b = hex_digit(bytes[2])?;
            Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b)
        }
        4 => {
            let r = hex_digit(bytes[0])?;
            let g = hex_digit(bytes[1])?;
            let b = hex_digit(bytes[2])?;
            let a = hex_digit(bytes[3])?;
            Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b)
                .with_alpha(f64::from(a << 4 | a) / 255.0)
        }
        6 => {
            let r = hex_byte(&bytes[0..2])?;
            let g = hex_byte(&bytes[2..4])?;
            let b = hex_byte(&bytes[4..6])?;
            Color::rgb8(r, g, b)
        }
        8 => {
            let r = hex_byte(&bytes[0..2])?;
            let g = hex_byte(&bytes[2..4])?;
            let b = hex_byte(&bytes[4..6])?;
            let a = hex_byte(&bytes[6..8])?;
            Color::rgb8(r, g, b).with_alpha(f64::from(a) / 255.0)
        }
        _ => return None,
    };
    Some(color)
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = hex_digit(bytes[0])?;
    let lo = hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Parse the inside of `oklch(...)`: `L C H` or `L C H / A`, where L
/// may be expressed as a percentage.
fn parse_oklch_body(body: &str, original: &str) -> Result<Color, ColorError> {
    let (components, alpha_part) = match body.split_once('/') {
        Some((lhs, rhs)) => (lhs, Some(rhs)),
        None => (body, None),
    };

    let mut parts = components.split_whitespace();
    let l = parse_component(parts.next(), original)?;
    let c = parse_component(parts.next(), original)?;
    let h = parse_component(parts.next(), original)?;
    if parts.next().is_some() {
        return Err(ColorError::Parse(original.to_owned()));
    }

    let alpha = match alpha_part {
        Some(a) => parse_component(Some(a.trim()), original)?,
        None => 1.0,
    };

    for v in [l, c, h, alpha] {
        if !v.is_finite() {
            return Err(ColorError::NonFinite(original.to_owned()));
        }
    }

    Ok(Color::oklcha(
        l.clamp(0.0, 1.0),
        c.max(0.0),
        normalize_hue(h),
        alpha.clamp(0.0, 1.0),
    ))
}

fn parse_component(part: Option<&str>, original: &str) -> Result<f64, ColorError> {
    let part = part.ok_or_else(|| ColorError::Parse(original.to_owned()))?;
    if let Some(pct) = part.strip_suffix('%') {
        let v: f64 = pct
            .parse()
            .map_err(|_| ColorError::Parse(original.to_owned()))?;
        return Ok(v / 100.0);
    }
    part.parse()
        .map_err(|_| ColorError::Parse(original.to_owned()))
}

/// Convert a 0.0–1.0 float to u8 with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8
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

    // ── Roundtrips ──────────────────────────────────────────────────

    #[test]
    fn srgb_roundtrip_primaries() {
        let cases: [(f64, f64, f64); 8] = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 1.0, 0.0),
            (0.0, 1.0, 1.0),
            (1.0, 0.0, 1.0),
            (1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
        ];
        for (r, g, b) in cases {
            let color = Color::srgb(r, g, b);
            let (rr, rg, rb) = color.to_srgb();
            assert!(
                approx_eq(r, rr, 1e-6) && approx_eq(g, rg, 1e-6) && approx_eq(b, rb, 1e-6),
                "roundtrip failed for ({r}, {g}, {b}): got ({rr}, {rg}, {rb})"
            );
        }
    }

    #[test]
    fn hex_roundtrip_is_exact() {
        for hex in ["#3b82f6", "#c86432", "#000000", "#ffffff", "#0a0a0a"] {
            let color = Color::parse(hex).unwrap();
            assert_eq!(color.to_hex(), hex);
        }
    }

    #[test]
    fn css_oklch_roundtrip() {
        let color = Color::parse("#3b82f6").unwrap();
        let css = color.to_css_oklch();
        let back = Color::parse(&css).unwrap();
        assert_eq!(color.to_hex(), back.to_hex());
    }

    // ── Parsing ─────────────────────────────────────────────────────

    #[test]
    fn parse_short_hex() {
        let color = Color::parse("#f80").unwrap();
        assert_eq!(color.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn parse_hex_without_hash() {
        let color = Color::parse("00ff00").unwrap();
        assert_eq!(color.to_rgb8(), (0, 255, 0));
    }

    #[test]
    fn parse_hex_with_alpha() {
        let color = Color::parse("#ff000080").unwrap();
        assert!(approx_eq(color.alpha, 128.0 / 255.0, 0.01));
    }

    #[test]
    fn parse_oklch_form() {
        let color = Color::parse("oklch(0.62 0.19 259.5)").unwrap();
        assert!(approx_eq(color.l, 0.62, 1e-9));
        assert!(approx_eq(color.c, 0.19, 1e-9));
        assert!(approx_eq(color.h, 259.5, 1e-9));
    }

    #[test]
    fn parse_oklch_percent_lightness_and_alpha() {
        let color = Color::parse("oklch(55% 0.16 250 / 0.33)").unwrap();
        assert!(approx_eq(color.l, 0.55, 1e-9));
        assert!(approx_eq(color.alpha, 0.33, 1e-9));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Color::parse("xyz").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("").is_err());
        assert!(Color::parse("oklch(0.5 0.1)").is_err());
        assert!(Color::parse("oklch(0.5 0.1 90 20)").is_err());
    }

    #[test]
    fn parse_rejects_nan() {
        assert_eq!(
            Color::parse("oklch(NaN 0.1 90)"),
            Err(ColorError::NonFinite("oklch(NaN 0.1 90)".into()))
        );
        assert!(Color::parse("oklch(inf 0.1 90)").is_err());
    }

    // ── Known values ────────────────────────────────────────────────

    #[test]
    fn black_and_white_endpoints() {
        let black = Color::srgb(0.0, 0.0, 0.0);
        assert!(approx_eq(black.l, 0.0, 1e-6));
        let white = Color::srgb(1.0, 1.0, 1.0);
        assert!(approx_eq(white.l, 1.0, 1e-6));
        assert!(white.is_achromatic());
    }

    #[test]
    fn red_hue_near_30() {
        let red = Color::srgb(1.0, 0.0, 0.0);
        assert!(red.h > 20.0 && red.h < 35.0, "red hue was {}", red.h);
        assert!(red.c > 0.2);
    }

    // ── Operations ──────────────────────────────────────────────────

    #[test]
    fn lighten_darken_clamp() {
        let c = Color::oklch(0.9, 0.1, 90.0);
        assert!(approx_eq(c.lighten(0.5).l, 1.0, 1e-9));
        assert!(approx_eq(c.darken(0.95).l, 0.0, 1e-9));
        assert!(approx_eq(c.lighten(0.05).l, 0.95, 1e-9));
    }

    #[test]
    fn set_hue_normalizes() {
        let c = Color::oklch(0.5, 0.1, 0.0).set_hue(-30.0);
        assert!(approx_eq(c.h, 330.0, 1e-9));
    }

    // ── Gamut ───────────────────────────────────────────────────────

    #[test]
    fn gamut_mapping_preserves_lightness_and_hue() {
        let wild = Color::oklch(0.5, 0.4, 180.0);
        assert!(!wild.in_srgb_gamut());
        let mapped = wild.to_gamut();
        assert!(mapped.in_srgb_gamut());
        assert!(mapped.c < wild.c);
        assert!(approx_eq(mapped.l, wild.l, 1e-9));
        assert!(approx_eq(mapped.h, wild.h, 1e-9));
    }

    #[test]
    fn in_gamut_colors_untouched() {
        let c = Color::srgb(0.4, 0.6, 0.5);
        assert!(c.in_srgb_gamut());
        assert_eq!(c.to_gamut(), c);
    }

    // ── Serde ───────────────────────────────────────────────────────

    #[test]
    fn serde_as_hex_string() {
        let color = Color::parse("#3b82f6").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#3b82f6\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_hex(), "#3b82f6");
    }

    #[test]
    fn serde_rejects_invalid() {
        let result: Result<Color, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    // ── Display / alpha hex ─────────────────────────────────────────

    #[test]
    fn alpha_hex_emission() {
        let c = Color::parse("#336699").unwrap().with_alpha(0.5);
        assert_eq!(c.to_hex(), "#33669980");
    }

    #[test]
    fn display_is_hex() {
        let red = Color::srgb(1.0, 0.0, 0.0);
        assert_eq!(format!("{red}"), "#ff0000");
    }
}
