//! Design-system token mapper — canonical theme → ~40 CSS-level tokens.
//!
//! Builds independent perceptual ramps for the neutral, primary,
//! secondary, and destructive families, selects per-mode anchor stops,
//! and derives the interaction/elevation tokens (ring, input, card,
//! popover) by nudging OKLCH lightness instead of generating more
//! ramps. Foreground pairs pick whichever of pure white/black has the
//! higher WCAG contrast — best-of-two, not a guaranteed tier; the
//! underlying ramp stop's accessibility level is the place to check
//! for guarantees.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

use tinct_color::ramp::Ramp;
use tinct_color::{Color, Mode, StopTable, best_foreground, generate_ramp_from};

use crate::theme::ThemeBlock;

// ─── Override inputs ────────────────────────────────────────────────

/// Font family stack for the three slots the export emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    pub sans: String,
    pub serif: String,
    pub mono: String,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            sans: "ui-sans-serif, system-ui, sans-serif".to_owned(),
            serif: "ui-serif, Georgia, serif".to_owned(),
            mono: "ui-monospace, SFMono-Regular, monospace".to_owned(),
        }
    }
}

/// One shadow specification, expanded into 8 elevation tiers by
/// [`compute_shadow_vars`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowSpec {
    pub color: String,
    pub opacity: f64,
    pub blur: String,
    pub spread: String,
    pub offset_x: String,
    pub offset_y: String,
}

impl Default for ShadowSpec {
    fn default() -> Self {
        Self {
            color: "#000000".to_owned(),
            opacity: 0.1,
            blur: "3px".to_owned(),
            spread: "0px".to_owned(),
            offset_x: "0px".to_owned(),
            offset_y: "1px".to_owned(),
        }
    }
}

/// Caller-supplied overrides applied on top of the derived tokens.
///
/// Precedence, applied uniformly: explicit override values > the raw
/// theme block's derivation > static defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenOverrides {
    /// Per-token color replacements, keyed by token name
    /// (e.g. `"primary"`), used verbatim when parseable.
    pub colors: BTreeMap<String, String>,
    pub fonts: Option<FontSet>,
    /// Scalar radius in rem; expands to sm/md/lg/xl via fixed ratios.
    pub radius: Option<f64>,
    pub letter_spacing: Option<String>,
    pub shadow: Option<ShadowSpec>,
}

// ─── Output ─────────────────────────────────────────────────────────

/// The derived token map for one mode.
///
/// Color tokens keep their emission order (the CSS export is stable);
/// [`DesignTokens::color`] does a linear lookup by name.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignTokens {
    pub mode: Mode,
    pub colors: Vec<(String, Color)>,
    pub fonts: FontSet,
    /// Base radius in rem plus the expanded sm/md/lg/xl scale.
    pub radius: f64,
    pub letter_spacing: String,
    /// `(var-name, css-value)` pairs for the 8 elevation tiers.
    pub shadows: Vec<(String, String)>,
}

impl DesignTokens {
    /// Look up a color token by name.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
    }

    /// A color token as hex, for assertions and JSON surfaces.
    #[must_use]
    pub fn hex(&self, name: &str) -> Option<String> {
        self.color(name).map(Color::to_hex)
    }

    /// The radius scale expanded at fixed ratios: sm 0.75×, md 1×,
    /// lg 1.5×, xl 2×.
    #[must_use]
    pub fn radius_scale(&self) -> [(&'static str, String); 4] {
        [
            ("radius-sm", format!("{}rem", self.radius * 0.75)),
            ("radius-md", format!("{}rem", self.radius)),
            ("radius-lg", format!("{}rem", self.radius * 1.5)),
            ("radius-xl", format!("{}rem", self.radius * 2.0)),
        ]
    }
}

// ─── Anchor stops ───────────────────────────────────────────────────

/// Per-mode anchor stop indices into the 11-stop ramp.
struct DesignAnchors {
    primary: usize,
    border: usize,
    muted: usize,
    muted_fg: usize,
    accent: usize,
}

/// Light picks mid-dark accents on light surfaces; dark mirrors.
const fn design_anchors(mode: Mode) -> DesignAnchors {
    match mode {
        // 600 / 200 / 100 / 600 / 300
        Mode::Light => DesignAnchors {
            primary: 6,
            border: 2,
            muted: 1,
            muted_fg: 6,
            accent: 3,
        },
        // 400 / 800 / 900 / 300 / 700
        Mode::Dark => DesignAnchors {
            primary: 4,
            border: 8,
            muted: 9,
            muted_fg: 3,
            accent: 7,
        },
    }
}

/// Lightness nudge for ring/input focus affordances.
const INTERACTION_NUDGE: f64 = 0.10;
/// Surface elevation nudges for card and popover.
const CARD_NUDGE: f64 = 0.02;
const POPOVER_NUDGE: f64 = 0.03;
/// Destructive fallback when the tertiary accent carries no usable
/// chroma — a gray accent cannot signal danger.
const DESTRUCTIVE_FALLBACK: Color = Color::oklch(0.637, 0.208, 25.33); // #ef4444
const DESTRUCTIVE_MIN_CHROMA: f64 = 0.03;

const DEFAULT_RADIUS_REM: f64 = 0.5;
const DEFAULT_LETTER_SPACING: &str = "0em";

// ─── Mapper ─────────────────────────────────────────────────────────

/// Derive the full design-system token map for one mode.
///
/// Ramps are built fresh on every call; nothing is cached.
#[must_use]
pub fn map_to_design_tokens(
    block: &ThemeBlock,
    mode: Mode,
    overrides: Option<&TokenOverrides>,
) -> DesignTokens {
    let anchors = design_anchors(mode);
    let table = StopTable::eleven();

    // Seed fallback chains. The canonical block always carries every
    // field, but converter-produced blocks funnel through the same
    // chains, so they live here rather than at each call site.
    let neutral_seed = pick_seed(&[block.ui, block.ui_2, block.ui_3, block.bg]);
    let secondary_seed = pick_seed(&[block.sc, block.ac_1, block.ac_2, block.pr]);
    let destructive_seed = if block.ac_3.c >= DESTRUCTIVE_MIN_CHROMA {
        block.ac_3
    } else {
        log::debug!("tertiary accent is achromatic; destructive falls back to red");
        DESTRUCTIVE_FALLBACK
    };

    let neutral = generate_ramp_from(neutral_seed, table, 0.0);
    let primary_ramp = generate_ramp_from(block.pr, table, 0.0);
    let secondary_ramp = generate_ramp_from(secondary_seed, table, 0.0);
    let destructive_ramp = generate_ramp_from(destructive_seed, table, 0.0);

    let background = block.bg;
    let card = elevate(background, CARD_NUDGE, mode);
    let popover = elevate(background, POPOVER_NUDGE, mode);

    let primary = stop(&primary_ramp, anchors.primary);
    let secondary = stop(&secondary_ramp, anchors.muted);
    let muted = stop(&neutral, anchors.muted);
    let muted_fg = stop(&neutral, anchors.muted_fg);
    let accent = stop(&secondary_ramp, anchors.accent);
    let destructive = stop(&destructive_ramp, anchors.primary);
    let border = stop(&neutral, anchors.border);

    // Focus/interaction affordances: one lightness nudge instead of a
    // whole new ramp. Light mode darkens, dark mode lightens.
    let ring = nudge(primary, INTERACTION_NUDGE, mode);
    let input = nudge(border, INTERACTION_NUDGE, mode);

    // Charts sample all five accent families at the primary anchor so
    // they stay distinct in hue but matched in weight.
    let charts = [block.pr, block.sc, block.ac_1, block.ac_2, block.ac_3].map(|seed| {
        let ramp = generate_ramp_from(seed, table, 0.0);
        stop(&ramp, anchors.primary)
    });

    let mut colors: Vec<(String, Color)> = Vec::with_capacity(32);
    let mut push = |name: &str, color: Color| colors.push((name.to_owned(), color));

    push("background", background);
    push("background-foreground", best_foreground(background));
    push("card", card);
    push("card-foreground", best_foreground(card));
    push("popover", popover);
    push("popover-foreground", best_foreground(popover));
    push("primary", primary);
    push("primary-foreground", best_foreground(primary));
    push("secondary", secondary);
    push("secondary-foreground", best_foreground(secondary));
    push("muted", muted);
    push("muted-foreground", muted_fg);
    push("accent", accent);
    push("accent-foreground", best_foreground(accent));
    push("destructive", destructive);
    push("destructive-foreground", best_foreground(destructive));
    push("border", border);
    push("input", input);
    push("ring", ring);
    for (i, chart) in charts.iter().enumerate() {
        push(&format!("chart-{}", i + 1), *chart);
    }
    // Sidebar mirrors the main surface tokens.
    push("sidebar", card);
    push("sidebar-foreground", best_foreground(card));
    push("sidebar-primary", primary);
    push("sidebar-primary-foreground", best_foreground(primary));
    push("sidebar-accent", accent);
    push("sidebar-accent-foreground", best_foreground(accent));
    push("sidebar-border", border);
    push("sidebar-ring", ring);

    // Override layer: explicit values win over everything derived.
    if let Some(ov) = overrides {
        for (name, raw) in &ov.colors {
            match Color::parse(raw) {
                Ok(color) => {
                    if let Some(entry) = colors.iter_mut().find(|(n, _)| n == name) {
                        entry.1 = color;
                    } else {
                        colors.push((name.clone(), color));
                    }
                }
                Err(err) => log::warn!("ignoring unparseable override for {name}: {err}"),
            }
        }
    }

    let fonts = overrides
        .and_then(|ov| ov.fonts.clone())
        .unwrap_or_default();
    let radius = overrides
        .and_then(|ov| ov.radius)
        .unwrap_or(DEFAULT_RADIUS_REM);
    let letter_spacing = overrides
        .and_then(|ov| ov.letter_spacing.clone())
        .unwrap_or_else(|| DEFAULT_LETTER_SPACING.to_owned());
    let shadow_spec = overrides
        .and_then(|ov| ov.shadow.clone())
        .unwrap_or_default();

    DesignTokens {
        mode,
        colors,
        fonts,
        radius,
        letter_spacing,
        shadows: compute_shadow_vars(&shadow_spec),
    }
}

/// First seed in the chain whose lightness leaves room for a ramp.
/// Pure white or black seeds degenerate into single-tone ramps, so
/// they only win as the terminus.
fn pick_seed(chain: &[Color]) -> Color {
    chain
        .iter()
        .copied()
        .find(|c| c.l > 0.02 && c.l < 0.98)
        .or_else(|| chain.last().copied())
        .unwrap_or(Color::gray(0.5))
}

fn stop(ramp: &Ramp, index: usize) -> Color {
    ramp.at_clamped(index).color
}

/// Nudge lightness for a focus/interaction affordance.
fn nudge(color: Color, amount: f64, mode: Mode) -> Color {
    if mode.is_dark() {
        color.lighten(amount).to_gamut()
    } else {
        color.darken(amount).to_gamut()
    }
}

/// Surface elevation: move slightly away from pure background.
fn elevate(bg: Color, amount: f64, mode: Mode) -> Color {
    if mode.is_dark() {
        bg.lighten(amount).to_gamut()
    } else {
        bg.darken(amount).to_gamut()
    }
}

// ─── Shadow tiers ───────────────────────────────────────────────────

/// One elevation tier: y-offset and blur multipliers on the base spec,
/// an opacity multiplier, and whether a secondary ambient layer rides
/// along at the spec's full opacity.
struct ShadowTier {
    suffix: &'static str,
    y_mult: f64,
    blur_mult: f64,
    opacity_mult: f64,
    ambient: bool,
}

const SHADOW_TIERS: [ShadowTier; 8] = [
    ShadowTier { suffix: "-2xs", y_mult: 0.5, blur_mult: 0.5, opacity_mult: 0.5, ambient: false },
    ShadowTier { suffix: "-xs", y_mult: 0.5, blur_mult: 1.0, opacity_mult: 0.5, ambient: false },
    ShadowTier { suffix: "-sm", y_mult: 1.0, blur_mult: 1.0, opacity_mult: 1.0, ambient: true },
    ShadowTier { suffix: "", y_mult: 1.0, blur_mult: 1.5, opacity_mult: 1.0, ambient: true },
    ShadowTier { suffix: "-md", y_mult: 2.0, blur_mult: 2.0, opacity_mult: 1.0, ambient: true },
    ShadowTier { suffix: "-lg", y_mult: 3.0, blur_mult: 3.0, opacity_mult: 1.0, ambient: true },
    ShadowTier { suffix: "-xl", y_mult: 4.0, blur_mult: 4.0, opacity_mult: 1.0, ambient: true },
    ShadowTier { suffix: "-2xl", y_mult: 6.0, blur_mult: 8.0, opacity_mult: 1.5, ambient: false },
];

/// Expand one shadow spec into the 8 elevation tiers (2xs…2xl).
///
/// Pure function of the spec. Each tier is 1–2 layered CSS shadow
/// strings: the main layer scales offset/blur/opacity, and the mid
/// tiers add a tighter ambient layer at the spec's full opacity.
#[must_use]
pub fn compute_shadow_vars(spec: &ShadowSpec) -> Vec<(String, String)> {
    let x = parse_px(&spec.offset_x);
    let y = parse_px(&spec.offset_y);
    let blur = parse_px(&spec.blur);
    let spread = parse_px(&spec.spread);
    let color = Color::parse(&spec.color).unwrap_or(Color::BLACK);

    SHADOW_TIERS
        .iter()
        .map(|tier| {
            let alpha = (spec.opacity * tier.opacity_mult).clamp(0.0, 1.0);
            let mut value = layer(x, y * tier.y_mult, blur * tier.blur_mult, spread, color, alpha);
            if tier.ambient {
                let ambient_alpha = spec.opacity.clamp(0.0, 1.0);
                let ambient = layer(
                    x,
                    (y * tier.y_mult * 0.5).max(1.0),
                    blur * tier.blur_mult * 0.5,
                    spread - 1.0,
                    color,
                    ambient_alpha,
                );
                let _ = write!(value, ", {ambient}");
            }
            (format!("shadow{}", tier.suffix), value)
        })
        .collect()
}

fn layer(x: f64, y: f64, blur: f64, spread: f64, color: Color, alpha: f64) -> String {
    format!(
        "{}px {}px {}px {}px {}",
        trim_px(x),
        trim_px(y),
        trim_px(blur),
        trim_px(spread),
        color.with_alpha(alpha).to_hex()
    )
}

/// Format a px quantity without a trailing `.0`.
fn trim_px(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round())
    } else {
        format!("{v}")
    }
}

/// Parse a `"3px"`-style length, tolerating a bare number. Unparseable
/// lengths collapse to 0 rather than failing the whole token map.
fn parse_px(s: &str) -> f64 {
    s.trim()
        .trim_end_matches("px")
        .trim()
        .parse()
        .unwrap_or(0.0)
}

// ─── CSS export ─────────────────────────────────────────────────────

/// Emit the design-system CSS: a `:root` block for light, a `.dark`
/// block, and a `@theme inline` alias block. Colors are 4-decimal
/// `oklch()` strings.
#[must_use]
pub fn to_css(light: &DesignTokens, dark: &DesignTokens) -> String {
    let mut out = String::new();

    emit_block(&mut out, ":root", light, true);
    emit_block(&mut out, ".dark", dark, false);

    out.push_str("@theme inline {\n");
    for (name, _) in &light.colors {
        let _ = writeln!(out, "  --color-{name}: var(--{name});");
    }
    out.push_str("  --font-sans: var(--font-sans);\n");
    out.push_str("  --font-serif: var(--font-serif);\n");
    out.push_str("  --font-mono: var(--font-mono);\n");
    for (name, _) in &light.radius_scale() {
        let _ = writeln!(out, "  --{name}: var(--{name});");
    }
    out.push_str("}\n");
    out
}

fn emit_block(out: &mut String, selector: &str, tokens: &DesignTokens, full: bool) {
    let _ = writeln!(out, "{selector} {{");
    for (name, color) in &tokens.colors {
        let _ = writeln!(out, "  --{name}: {};", color.to_css_oklch());
    }
    if full {
        let _ = writeln!(out, "  --font-sans: {};", tokens.fonts.sans);
        let _ = writeln!(out, "  --font-serif: {};", tokens.fonts.serif);
        let _ = writeln!(out, "  --font-mono: {};", tokens.fonts.mono);
        let _ = writeln!(out, "  --radius: {}rem;", tokens.radius);
        let _ = writeln!(out, "  --tracking-normal: {};", tokens.letter_spacing);
        for (name, value) in &tokens.radius_scale() {
            let _ = writeln!(out, "  --{name}: {value};");
        }
    }
    for (name, value) in &tokens.shadows {
        let _ = writeln!(out, "  --{name}: {value};");
    }
    out.push_str("}\n");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::theme::tests::fixture;

    #[test]
    fn white_background_gets_black_foreground() {
        let theme = fixture();
        let tokens = map_to_design_tokens(&theme.light, Mode::Light, None);
        assert_eq!(tokens.hex("background-foreground").unwrap(), "#000000");
    }

    #[test]
    fn token_count_and_uniqueness() {
        let theme = fixture();
        let tokens = map_to_design_tokens(&theme.light, Mode::Light, None);
        assert_eq!(tokens.colors.len(), 32);
        let mut names: Vec<_> = tokens.colors.iter().map(|(n, _)| n.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 32, "token names must be unique");
    }

    #[test]
    fn ring_nudges_primary_lightness_per_mode() {
        let theme = fixture();
        let light = map_to_design_tokens(&theme.light, Mode::Light, None);
        assert!(light.color("ring").unwrap().l < light.color("primary").unwrap().l);
        let dark = map_to_design_tokens(&theme.dark, Mode::Dark, None);
        assert!(dark.color("ring").unwrap().l > dark.color("primary").unwrap().l);
    }

    #[test]
    fn card_elevates_away_from_background() {
        let theme = fixture();
        let light = map_to_design_tokens(&theme.light, Mode::Light, None);
        assert!(light.color("card").unwrap().l < light.color("background").unwrap().l);
        assert!(light.color("popover").unwrap().l < light.color("card").unwrap().l);
        let dark = map_to_design_tokens(&theme.dark, Mode::Dark, None);
        assert!(dark.color("card").unwrap().l > dark.color("background").unwrap().l);
    }

    #[test]
    fn destructive_is_red_even_for_blue_primary() {
        let theme = fixture();
        let tokens = map_to_design_tokens(&theme.light, Mode::Light, None);
        let destructive = tokens.color("destructive").unwrap();
        // Hue-independent of the blue primary: red family sits near 25 degrees.
        assert!(
            destructive.h < 60.0 || destructive.h > 340.0,
            "destructive hue {} is not in the red family",
            destructive.h
        );
    }

    #[test]
    fn color_override_wins_verbatim() {
        let theme = fixture();
        let mut ov = TokenOverrides::default();
        ov.colors.insert("primary".to_owned(), "#123456".to_owned());
        let tokens = map_to_design_tokens(&theme.light, Mode::Light, Some(&ov));
        assert_eq!(tokens.hex("primary").unwrap(), "#123456");
    }

    #[test]
    fn unparseable_override_is_skipped() {
        let theme = fixture();
        let mut ov = TokenOverrides::default();
        ov.colors.insert("primary".to_owned(), "bogus".to_owned());
        let with = map_to_design_tokens(&theme.light, Mode::Light, Some(&ov));
        let without = map_to_design_tokens(&theme.light, Mode::Light, None);
        assert_eq!(with.hex("primary"), without.hex("primary"));
    }

    #[test]
    fn radius_scale_ratios() {
        let theme = fixture();
        let ov = TokenOverrides {
            radius: Some(0.5),
            ..TokenOverrides::default()
        };
        let tokens = map_to_design_tokens(&theme.light, Mode::Light, Some(&ov));
        let scale = tokens.radius_scale();
        assert_eq!(scale[0], ("radius-sm", "0.375rem".to_owned()));
        assert_eq!(scale[1], ("radius-md", "0.5rem".to_owned()));
        assert_eq!(scale[2], ("radius-lg", "0.75rem".to_owned()));
        assert_eq!(scale[3], ("radius-xl", "1rem".to_owned()));
    }

    #[test]
    fn shadow_vars_cover_all_tiers() {
        let vars = compute_shadow_vars(&ShadowSpec::default());
        let names: Vec<_> = vars.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            [
                "shadow-2xs", "shadow-xs", "shadow-sm", "shadow", "shadow-md", "shadow-lg",
                "shadow-xl", "shadow-2xl"
            ]
        );
        // Mid tiers carry the ambient second layer.
        assert!(vars[3].1.contains(", "), "default tier should be layered");
        assert!(!vars[0].1.contains(", "), "2xs is a single layer");
    }

    #[test]
    fn shadow_layers_use_spec_color_and_opacity() {
        let spec = ShadowSpec {
            color: "#336699".to_owned(),
            opacity: 0.5,
            ..ShadowSpec::default()
        };
        let vars = compute_shadow_vars(&spec);
        // Full-opacity-multiplier tiers embed alpha 0.5 -> 0x80.
        assert!(vars[2].1.contains("#33669980"), "got {}", vars[2].1);
    }

    #[test]
    fn css_export_structure() {
        let theme = fixture();
        let light = map_to_design_tokens(&theme.light, Mode::Light, None);
        let dark = map_to_design_tokens(&theme.dark, Mode::Dark, None);
        let css = to_css(&light, &dark);
        assert!(css.starts_with(":root {"));
        assert!(css.contains(".dark {"));
        assert!(css.contains("@theme inline {"));
        assert!(css.contains("--color-background: var(--background);"));
        // 4-decimal oklch emission.
        assert!(css.contains("--background: oklch(1.0000 0.0000 0.0000);"));
    }

    #[test]
    fn fonts_default_when_no_override() {
        let theme = fixture();
        let tokens = map_to_design_tokens(&theme.dark, Mode::Dark, None);
        assert_eq!(tokens.fonts, FontSet::default());
        assert_eq!(tokens.letter_spacing, "0em");
    }
}
