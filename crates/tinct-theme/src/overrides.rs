//! Override normalizer and merger.
//!
//! Stored provider overrides arrive in three legacy raw shapes plus
//! the normalized one. All shape handling happens over
//! `serde_json::Value` at this boundary; the rest of the crate only
//! ever sees the normalized form:
//!
//! ```text
//! (a) { palettes: { light: { ..colors, shadow: {..} }, dark: {..} } }
//! (b) { light: { palettes: { light: {..} } }, dark: { .. } }
//! (c) { light: { ..colors }, dark: { ..colors } }
//!
//! normalized: { light: {..}, dark: {..}, shadows: { light: {..} } }
//! ```
//!
//! `normalize` is idempotent: a present `shadows.light|dark` returns
//! the input unchanged before any shape detection runs, so a second
//! pass can never drop shadow data. `merge` never re-normalizes.

use serde_json::{Map, Value};

use tinct_color::Mode;

use crate::design::TokenOverrides;
use crate::theme::ThemeError;

/// Provider ids overrides may target. Anything else is refused before
/// a merge can happen.
pub static KNOWN_PROVIDERS: [&str; 5] = ["shadcn", "vscode", "shiki", "zed", "terminal"];

/// Refuse unregistered provider ids.
///
/// # Errors
///
/// [`ThemeError::InvalidProvider`] for any id not in
/// [`KNOWN_PROVIDERS`].
pub fn validate_provider(id: &str) -> Result<(), ThemeError> {
    if KNOWN_PROVIDERS.contains(&id) {
        Ok(())
    } else {
        Err(ThemeError::InvalidProvider(id.to_owned()))
    }
}

// ─── Normalization ──────────────────────────────────────────────────

/// Bring any of the three legacy raw shapes into the normalized form.
///
/// Embedded `shadow` objects move to `shadows.{mode}` with
/// `offset_x`/`offset_y` renamed to `offsetX`/`offsetY`. Fonts,
/// radius, and letter spacing pass through untouched. Already
/// normalized input is returned as-is.
#[must_use]
pub fn normalize(raw: &Value) -> Value {
    // Idempotence short-circuit, before shape detection.
    if raw.pointer("/shadows/light").is_some() || raw.pointer("/shadows/dark").is_some() {
        return raw.clone();
    }

    let mut out = Map::new();
    for (key, value) in raw.as_object().into_iter().flatten() {
        if key != "palettes" && key != "light" && key != "dark" {
            out.insert(key.clone(), value.clone());
        }
    }

    let mut shadows = Map::new();
    for mode in [Mode::Light, Mode::Dark] {
        let m = mode.as_str();
        // Shape (b) nests palettes inside each mode; shape (a) holds
        // one palettes map at the top; shape (c) is already flat.
        let source = if raw.pointer(&format!("/{m}/palettes")).is_some() {
            log::debug!("{m} override uses double-nested palette shape");
            raw.pointer(&format!("/{m}/palettes/{m}"))
        } else if raw.get("palettes").is_some() {
            raw.pointer(&format!("/palettes/{m}"))
        } else {
            raw.get(m)
        };
        let Some(Value::Object(map)) = source else {
            continue;
        };
        let mut colors = map.clone();
        if let Some(shadow) = colors.remove("shadow") {
            shadows.insert(m.to_owned(), shadow_to_camel(&shadow));
        }
        out.insert(m.to_owned(), Value::Object(colors));
    }
    if !shadows.is_empty() {
        out.insert("shadows".to_owned(), Value::Object(shadows));
    }
    Value::Object(out)
}

/// Rebuild the shape-(a) storage form from a normalized value: colors
/// re-nest under `palettes.{mode}` and shadows return to
/// `palettes.{mode}.shadow` with snake_case offsets.
#[must_use]
pub fn denormalize(normalized: &Value) -> Value {
    let mut out = Map::new();
    for (key, value) in normalized.as_object().into_iter().flatten() {
        if key != "light" && key != "dark" && key != "shadows" {
            out.insert(key.clone(), value.clone());
        }
    }

    let mut palettes = Map::new();
    for mode in [Mode::Light, Mode::Dark] {
        let m = mode.as_str();
        let mut map = normalized
            .get(m)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        if let Some(shadow) = normalized.pointer(&format!("/shadows/{m}")) {
            map.insert("shadow".to_owned(), shadow_to_snake(shadow));
        }
        if !map.is_empty() {
            palettes.insert(m.to_owned(), Value::Object(map));
        }
    }
    out.insert("palettes".to_owned(), Value::Object(palettes));
    Value::Object(out)
}

fn shadow_to_camel(shadow: &Value) -> Value {
    rename_keys(shadow, &[("offset_x", "offsetX"), ("offset_y", "offsetY")])
}

fn shadow_to_snake(shadow: &Value) -> Value {
    rename_keys(shadow, &[("offsetX", "offset_x"), ("offsetY", "offset_y")])
}

fn rename_keys(value: &Value, renames: &[(&str, &str)]) -> Value {
    let Some(map) = value.as_object() else {
        return value.clone();
    };
    let renamed = map
        .iter()
        .map(|(k, v)| {
            let key = renames
                .iter()
                .find(|(from, _)| from == k)
                .map_or(k.as_str(), |(_, to)| to);
            (key.to_owned(), v.clone())
        })
        .collect();
    Value::Object(renamed)
}

// ─── Merging ────────────────────────────────────────────────────────

/// Shallow per-provider, per-field overwrite of `base` by `partial`.
///
/// Both arguments are maps keyed by provider id. Inputs are taken
/// as-is; this never re-normalizes.
///
/// # Errors
///
/// [`ThemeError::InvalidProvider`] if `partial` targets an
/// unregistered provider; `base` is left unmerged in that case.
pub fn merge(base: &Value, partial: &Value) -> Result<Value, ThemeError> {
    if let Some(providers) = partial.as_object() {
        for id in providers.keys() {
            validate_provider(id)?;
        }
    }

    let mut out = base.as_object().cloned().unwrap_or_default();
    for (provider, fields) in partial.as_object().into_iter().flatten() {
        let entry = out
            .entry(provider.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        match (entry.as_object_mut(), fields.as_object()) {
            (Some(dst), Some(src)) => {
                for (key, value) in src {
                    dst.insert(key.clone(), value.clone());
                }
            }
            _ => *entry = fields.clone(),
        }
    }
    Ok(Value::Object(out))
}

// ─── Bridge to the design mapper ────────────────────────────────────

/// Extract one mode's [`TokenOverrides`] from a normalized override
/// value. Non-string color entries and malformed shadow objects are
/// skipped, not fatal.
#[must_use]
pub fn design_overrides(normalized: &Value, mode: Mode) -> TokenOverrides {
    let mut ov = TokenOverrides::default();

    if let Some(colors) = normalized.get(mode.as_str()).and_then(Value::as_object) {
        for (name, value) in colors {
            if let Some(s) = value.as_str() {
                ov.colors.insert(name.clone(), s.to_owned());
            }
        }
    }

    if let Some(shadow) = normalized.pointer(&format!("/shadows/{}", mode.as_str())) {
        match serde_json::from_value(shadow.clone()) {
            Ok(spec) => ov.shadow = Some(spec),
            Err(err) => log::warn!("ignoring malformed shadow override: {err}"),
        }
    }

    ov.fonts = normalized
        .get("fonts")
        .and_then(|v| serde_json::from_value(v.clone()).ok());
    ov.radius = normalized.get("radius").and_then(Value::as_f64);
    ov.letter_spacing = normalized
        .get("letterSpacing")
        .and_then(Value::as_str)
        .map(str::to_owned);
    ov
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn shape_a() -> Value {
        json!({
            "palettes": {
                "light": {
                    "background": "#fff",
                    "shadow": {"color": "#000", "opacity": 0.1, "offset_x": "0px"}
                }
            }
        })
    }

    fn shape_b() -> Value {
        json!({
            "light": {"palettes": {"light": {"background": "#fff"}}},
            "dark": {"palettes": {"dark": {"background": "#111"}}}
        })
    }

    fn shape_c() -> Value {
        json!({
            "light": {"background": "#fff"},
            "dark": {"background": "#111"},
            "radius": 0.75
        })
    }

    #[test]
    fn shadow_moves_out_of_palette() {
        let normalized = normalize(&shape_a());
        assert_eq!(
            normalized,
            json!({
                "light": {"background": "#fff"},
                "shadows": {"light": {"color": "#000", "opacity": 0.1, "offsetX": "0px"}}
            })
        );
    }

    #[test]
    fn denormalize_restores_snake_case_shadow() {
        let stored = denormalize(&normalize(&shape_a()));
        assert_eq!(
            stored.pointer("/palettes/light/shadow/offset_x"),
            Some(&json!("0px"))
        );
    }

    #[test]
    fn normalize_is_idempotent_on_all_shapes() {
        for raw in [shape_a(), shape_b(), shape_c()] {
            let once = normalize(&raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn roundtrip_fixpoint() {
        for raw in [shape_a(), shape_b(), shape_c()] {
            let once = normalize(&raw);
            assert_eq!(normalize(&denormalize(&once)), once);
        }
    }

    #[test]
    fn double_nested_shape_flattens() {
        let normalized = normalize(&shape_b());
        assert_eq!(normalized["light"]["background"], "#fff");
        assert_eq!(normalized["dark"]["background"], "#111");
    }

    #[test]
    fn extras_pass_through_untouched() {
        let normalized = normalize(&shape_c());
        assert_eq!(normalized["radius"], 0.75);
    }

    #[test]
    fn merge_is_shallow_per_field() {
        let base = json!({"shadcn": {"primary": "#111", "radius": 0.5}});
        let partial = json!({"shadcn": {"primary": "#222"}, "vscode": {"accent": "#333"}});
        let merged = merge(&base, &partial).unwrap();
        assert_eq!(
            merged,
            json!({
                "shadcn": {"primary": "#222", "radius": 0.5},
                "vscode": {"accent": "#333"}
            })
        );
    }

    #[test]
    fn unknown_provider_is_refused_before_merging() {
        let base = json!({"shadcn": {"primary": "#111"}});
        let partial = json!({"emacs": {"primary": "#222"}});
        let err = merge(&base, &partial).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidProvider(id) if id == "emacs"));
    }

    #[test]
    fn design_bridge_extracts_mode_fields() {
        let normalized = normalize(&json!({
            "palettes": {
                "light": {
                    "primary": "#123456",
                    "shadow": {"color": "#000", "opacity": 0.2, "offset_x": "1px"}
                }
            },
            "radius": 1.0,
            "letterSpacing": "0.01em"
        }));
        let ov = design_overrides(&normalized, Mode::Light);
        assert_eq!(ov.colors["primary"], "#123456");
        assert_eq!(ov.radius, Some(1.0));
        assert_eq!(ov.letter_spacing.as_deref(), Some("0.01em"));
        let shadow = ov.shadow.unwrap();
        assert_eq!(shadow.opacity, 0.2);
        assert_eq!(shadow.offset_x, "1px");
        // Unspecified fields fall back to the defaults.
        assert_eq!(shadow.blur, "3px");
    }

    #[test]
    fn dark_bridge_ignores_light_entries() {
        let normalized = normalize(&shape_a());
        let ov = design_overrides(&normalized, Mode::Dark);
        assert!(ov.colors.is_empty());
        assert!(ov.shadow.is_none());
    }
}
