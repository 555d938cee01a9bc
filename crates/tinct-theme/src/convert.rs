//! Cross-format converters — foreign theme schemas ↔ canonical theme.
//!
//! Every importer runs the same machinery: a per-schema table of
//! [`FieldRule`]s pulls seed colors out of the foreign JSON (first
//! matching path wins, the fallback terminates the chain), ramps are
//! rebuilt from those seeds, and stops are re-projected onto the
//! canonical anchors. Round-trips are lossy by design: only the 13
//! canonical colors survive, everything else regenerates.

use serde_json::{Map, Value, json};

use tinct_color::ramp::Ramp;
use tinct_color::{Color, Mode, NeutralTones, StopTable, generate_ramp_from};

use crate::design::map_to_design_tokens;
use crate::theme::{Theme, ThemeBlock, ThemeError};

// ─── Field extraction ───────────────────────────────────────────────

/// How to pull one seed color out of a foreign schema: dotted lookup
/// paths tried in order, then a literal fallback.
struct FieldRule {
    slot: &'static str,
    paths: &'static [&'static str],
    fallback: &'static str,
}

/// Dotted-path lookup into a JSON object tree.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    let mut node = value;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

/// Resolve a rule against one schema node. The fallback is a literal
/// under our control, so an unparseable chain ends in mid-gray rather
/// than an error.
fn extract_color(value: &Value, rule: &FieldRule) -> Color {
    for path in rule.paths {
        if let Some(raw) = lookup(value, path) {
            match Color::parse(raw) {
                Ok(color) => return color,
                Err(err) => {
                    log::debug!("{} candidate {path:?} unparseable: {err}", rule.slot);
                }
            }
        }
    }
    log::debug!("{} fell through to fallback {}", rule.slot, rule.fallback);
    Color::parse(rule.fallback).unwrap_or(Color::gray(0.5))
}

/// Build a ramp from the first seed a rule chain yields. This is the
/// shared core of every importer.
fn ramp_from_schema(value: &Value, rule: &FieldRule) -> Ramp {
    generate_ramp_from(extract_color(value, rule), StopTable::eleven(), 0.0)
}

/// Accent stop index used when re-projecting foreign accents: the
/// design mapper's primary anchor for the mode.
const fn accent_anchor(mode: Mode) -> usize {
    match mode {
        Mode::Light => 6,
        Mode::Dark => 4,
    }
}

// ─── Rule tables ────────────────────────────────────────────────────

/// shadcn / tweakcn vocabulary. The neutral chain prefers the muted
/// surfaces because `background` is usually pure white or black, which
/// seeds a chroma-free ramp.
static SHADCN_NEUTRAL: FieldRule = FieldRule {
    slot: "neutral",
    paths: &["muted", "secondary", "card", "background"],
    fallback: "#8a8a8a",
};

static SHADCN_ACCENTS: [FieldRule; 5] = [
    FieldRule { slot: "pr", paths: &["primary", "ring"], fallback: "#3b82f6" },
    FieldRule { slot: "sc", paths: &["secondary", "accent", "primary"], fallback: "#8b5cf6" },
    FieldRule { slot: "ac_1", paths: &["chart-2", "accent", "primary"], fallback: "#10b981" },
    FieldRule { slot: "ac_2", paths: &["chart-4", "chart-3", "primary"], fallback: "#f59e0b" },
    FieldRule { slot: "ac_3", paths: &["destructive", "chart-1"], fallback: "#ef4444" },
];

/// ray.so-style vocabulary: syntax roles instead of surface tokens.
static RAYSO_NEUTRAL: FieldRule = FieldRule {
    slot: "neutral",
    paths: &["comment", "punctuation", "foreground"],
    fallback: "#8a8a8a",
};

static RAYSO_ACCENTS: [FieldRule; 5] = [
    FieldRule { slot: "pr", paths: &["accent", "keyword"], fallback: "#3b82f6" },
    FieldRule { slot: "sc", paths: &["function", "variable"], fallback: "#8b5cf6" },
    FieldRule { slot: "ac_1", paths: &["string"], fallback: "#10b981" },
    FieldRule { slot: "ac_2", paths: &["number", "constant"], fallback: "#f59e0b" },
    FieldRule { slot: "ac_3", paths: &["error", "keyword"], fallback: "#ef4444" },
];

// ─── Importers ──────────────────────────────────────────────────────

/// Build one canonical block from a per-mode schema node and the
/// schema's rule tables.
fn block_from_node(node: &Value, mode: Mode, neutral: &FieldRule, accents: &[FieldRule; 5]) -> ThemeBlock {
    let neutral_ramp = ramp_from_schema(node, neutral);
    let tones = NeutralTones::from_ramp(&neutral_ramp, mode);

    let anchor = accent_anchor(mode);
    let accents = accents.each_ref().map(|rule| {
        let ramp = ramp_from_schema(node, rule);
        ramp.at_clamped(anchor).color
    });

    ThemeBlock::from_parts(tones, accents)
}

/// Import a shadcn-shaped theme (`{light:{token:hex}, dark:{...}}`).
///
/// # Errors
///
/// [`ThemeError::MissingField`] when a mode map is absent entirely;
/// individual missing tokens fall through their chains instead.
pub fn shadcn_to_canonical(value: &Value) -> Result<Theme, ThemeError> {
    let light = mode_node(value, "light").ok_or(ThemeError::MissingField("light"))?;
    let dark = mode_node(value, "dark").ok_or(ThemeError::MissingField("dark"))?;
    Ok(Theme {
        light: block_from_node(light, Mode::Light, &SHADCN_NEUTRAL, &SHADCN_ACCENTS),
        dark: block_from_node(dark, Mode::Dark, &SHADCN_NEUTRAL, &SHADCN_ACCENTS),
    })
}

/// shadcn themes store mode maps at the top level or under `cssVars`.
fn mode_node<'a>(value: &'a Value, mode: &str) -> Option<&'a Value> {
    value
        .get(mode)
        .or_else(|| value.pointer(&format!("/cssVars/{mode}")))
        .filter(|node| node.is_object())
}

/// Import a tweakcn export, which nests the shadcn vocabulary under
/// `styles.{mode}`.
///
/// # Errors
///
/// [`ThemeError::MissingField`] when `styles.light` or `styles.dark`
/// is absent.
pub fn tweakcn_to_canonical(value: &Value) -> Result<Theme, ThemeError> {
    let styles = value.get("styles").unwrap_or(value);
    shadcn_to_canonical(styles)
}

// ─── Exporters ──────────────────────────────────────────────────────

/// Export the canonical theme as a shadcn-shaped token map by running
/// the design mapper per mode.
#[must_use]
pub fn canonical_to_shadcn(theme: &Theme) -> Value {
    let mut out = Map::new();
    for mode in [Mode::Light, Mode::Dark] {
        let tokens = map_to_design_tokens(theme.block(mode), mode, None);
        let map: Map<String, Value> = tokens
            .colors
            .iter()
            .map(|(name, color)| (name.clone(), Value::String(color.to_hex())))
            .collect();
        out.insert(mode.as_str().to_owned(), Value::Object(map));
    }
    Value::Object(out)
}

/// Canonical block → ray.so syntax-role map.
fn rayso_node(block: &ThemeBlock) -> Value {
    json!({
        "background": block.bg.to_hex(),
        "foreground": block.tx.to_hex(),
        "comment": block.tx_3.to_hex(),
        "punctuation": block.tx_2.to_hex(),
        "accent": block.pr.to_hex(),
        "keyword": block.pr.to_hex(),
        "function": block.sc.to_hex(),
        "variable": block.tx_2.to_hex(),
        "string": block.ac_1.to_hex(),
        "number": block.ac_2.to_hex(),
        "error": block.ac_3.to_hex(),
    })
}

/// tweakcn → ray.so, via the canonical model.
///
/// # Errors
///
/// Propagates the tweakcn import failure.
pub fn tweakcn_to_rayso(value: &Value) -> Result<Value, ThemeError> {
    let theme = tweakcn_to_canonical(value)?;
    Ok(json!({
        "light": rayso_node(&theme.light),
        "dark": rayso_node(&theme.dark),
    }))
}

/// ray.so → shadcn, via the canonical model.
///
/// # Errors
///
/// [`ThemeError::MissingField`] when a mode map is absent.
pub fn rayso_to_shadcn(value: &Value) -> Result<Value, ThemeError> {
    let light = mode_node(value, "light").ok_or(ThemeError::MissingField("light"))?;
    let dark = mode_node(value, "dark").ok_or(ThemeError::MissingField("dark"))?;
    let theme = Theme {
        light: block_from_node(light, Mode::Light, &RAYSO_NEUTRAL, &RAYSO_ACCENTS),
        dark: block_from_node(dark, Mode::Dark, &RAYSO_NEUTRAL, &RAYSO_ACCENTS),
    };
    Ok(canonical_to_shadcn(&theme))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
