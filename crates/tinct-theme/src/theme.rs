//! The canonical theme model — tinct's interchange format.
//!
//! A [`ThemeBlock`] is the 13-color per-mode record every converter
//! reads and writes: 8 neutral tones ordered by the mode's anchor
//! direction plus 5 accents. A [`Theme`] pairs a light and a dark
//! block. Values cross the JSON boundary as `#rrggbb` strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinct_color::anchor::NeutralTones;
use tinct_color::{Color, ColorError, Mode};

/// Errors from theme-level operations.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("malformed theme json: {0}")]
    Json(#[from] serde_json::Error),

    /// Override validation refused an unregistered provider id.
    /// Unvalidated overrides are never merged.
    #[error("invalid provider: {0:?}")]
    InvalidProvider(String),

    /// A foreign schema was missing a field no fallback chain covers.
    #[error("foreign theme is missing required field {0:?}")]
    MissingField(&'static str),
}

/// Name of one of the 13 canonical colors.
///
/// The editor mapper's static tables index the theme through this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalKey {
    Bg,
    Bg2,
    Ui,
    Ui2,
    Ui3,
    Tx3,
    Tx2,
    Tx,
    Pr,
    Sc,
    Ac1,
    Ac2,
    Ac3,
}

impl CanonicalKey {
    pub const ALL: [Self; 13] = [
        Self::Bg,
        Self::Bg2,
        Self::Ui,
        Self::Ui2,
        Self::Ui3,
        Self::Tx3,
        Self::Tx2,
        Self::Tx,
        Self::Pr,
        Self::Sc,
        Self::Ac1,
        Self::Ac2,
        Self::Ac3,
    ];

    /// The JSON field name for this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::Bg2 => "bg_2",
            Self::Ui => "ui",
            Self::Ui2 => "ui_2",
            Self::Ui3 => "ui_3",
            Self::Tx3 => "tx_3",
            Self::Tx2 => "tx_2",
            Self::Tx => "tx",
            Self::Pr => "pr",
            Self::Sc => "sc",
            Self::Ac1 => "ac_1",
            Self::Ac2 => "ac_2",
            Self::Ac3 => "ac_3",
        }
    }
}

/// One mode's 13 canonical colors.
///
/// Neutral tones follow a monotonic lightness order consistent with
/// the mode's anchor direction (light: bg lightest; dark: bg darkest).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeBlock {
    pub bg: Color,
    pub bg_2: Color,
    pub ui: Color,
    pub ui_2: Color,
    pub ui_3: Color,
    pub tx_3: Color,
    pub tx_2: Color,
    pub tx: Color,
    pub pr: Color,
    pub sc: Color,
    pub ac_1: Color,
    pub ac_2: Color,
    pub ac_3: Color,
}

impl ThemeBlock {
    /// Look up a canonical color by key.
    #[must_use]
    pub const fn get(&self, key: CanonicalKey) -> Color {
        match key {
            CanonicalKey::Bg => self.bg,
            CanonicalKey::Bg2 => self.bg_2,
            CanonicalKey::Ui => self.ui,
            CanonicalKey::Ui2 => self.ui_2,
            CanonicalKey::Ui3 => self.ui_3,
            CanonicalKey::Tx3 => self.tx_3,
            CanonicalKey::Tx2 => self.tx_2,
            CanonicalKey::Tx => self.tx,
            CanonicalKey::Pr => self.pr,
            CanonicalKey::Sc => self.sc,
            CanonicalKey::Ac1 => self.ac_1,
            CanonicalKey::Ac2 => self.ac_2,
            CanonicalKey::Ac3 => self.ac_3,
        }
    }

    /// Build a block from derived neutral tones and five accents.
    #[must_use]
    pub const fn from_parts(neutrals: NeutralTones, accents: [Color; 5]) -> Self {
        Self {
            bg: neutrals.bg,
            bg_2: neutrals.bg_2,
            ui: neutrals.ui,
            ui_2: neutrals.ui_2,
            ui_3: neutrals.ui_3,
            tx_3: neutrals.tx_3,
            tx_2: neutrals.tx_2,
            tx: neutrals.tx,
            pr: accents[0],
            sc: accents[1],
            ac_1: accents[2],
            ac_2: accents[3],
            ac_3: accents[4],
        }
    }

    /// The 8 neutral tones in canonical order (bg first).
    #[must_use]
    pub const fn neutrals(&self) -> [Color; 8] {
        [
            self.bg, self.bg_2, self.ui, self.ui_2, self.ui_3, self.tx_3, self.tx_2, self.tx,
        ]
    }

    /// Whether the neutral tones follow the mode's lightness direction:
    /// descending from bg for light mode, ascending for dark.
    #[must_use]
    pub fn neutral_order_ok(&self, mode: Mode) -> bool {
        self.neutrals().windows(2).all(|pair| {
            if mode.is_dark() {
                pair[0].l <= pair[1].l
            } else {
                pair[0].l >= pair[1].l
            }
        })
    }
}

/// A complete theme: one block per mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub light: ThemeBlock,
    pub dark: ThemeBlock,
}

impl Theme {
    /// The block for a mode.
    #[must_use]
    pub const fn block(&self, mode: Mode) -> &ThemeBlock {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// Parse a canonical theme from its JSON interchange form.
    ///
    /// # Errors
    ///
    /// Malformed JSON or an unparseable color value.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the JSON interchange form, `#rrggbb` values.
    ///
    /// # Errors
    ///
    /// Only if the serializer itself fails, which plain structs do not.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;
    use tinct_color::derive_neutral_ramp;

    use super::*;

    /// A plausible blue-accent theme used across the crate's tests.
    pub(crate) fn fixture() -> Theme {
        let json = r##"{
            "light": {
                "bg": "#ffffff", "bg_2": "#f6f6f5", "ui": "#e8e8e6",
                "ui_2": "#dadad8", "ui_3": "#c6c6c4", "tx_3": "#8f8f8d",
                "tx_2": "#4c4c4a", "tx": "#000000",
                "pr": "#3b82f6", "sc": "#8b5cf6", "ac_1": "#10b981",
                "ac_2": "#f59e0b", "ac_3": "#ef4444"
            },
            "dark": {
                "bg": "#0d0d0e", "bg_2": "#1a1a1c", "ui": "#2a2a2d",
                "ui_2": "#3a3a3e", "ui_3": "#4a4a4f", "tx_3": "#77777c",
                "tx_2": "#b4b4b8", "tx": "#f3f3f4",
                "pr": "#60a5fa", "sc": "#a78bfa", "ac_1": "#34d399",
                "ac_2": "#fbbf24", "ac_3": "#f87171"
            }
        }"##;
        Theme::from_json(json).unwrap()
    }

    #[test]
    fn json_roundtrip() {
        let theme = fixture();
        let json = theme.to_json().unwrap();
        let back = Theme::from_json(&json).unwrap();
        assert_eq!(theme, back);
    }

    #[test]
    fn rejects_bad_color_value() {
        let json = r#"{"light":{"bg":"nope"},"dark":{}}"#;
        assert!(Theme::from_json(json).is_err());
    }

    #[test]
    fn neutral_order_holds_per_mode() {
        let theme = fixture();
        assert!(theme.light.neutral_order_ok(Mode::Light));
        assert!(theme.dark.neutral_order_ok(Mode::Dark));
        assert!(!theme.light.neutral_order_ok(Mode::Dark));
    }

    #[test]
    fn get_by_key_matches_fields() {
        let block = fixture().light;
        assert_eq!(block.get(CanonicalKey::Bg), block.bg);
        assert_eq!(block.get(CanonicalKey::Pr), block.pr);
        assert_eq!(block.get(CanonicalKey::Ac3), block.ac_3);
    }

    #[test]
    fn from_parts_keeps_neutral_order() {
        let neutrals = derive_neutral_ramp("#8a8a8a", Mode::Light).unwrap();
        let accent = Color::parse("#3b82f6").unwrap();
        let block = ThemeBlock::from_parts(neutrals, [accent; 5]);
        assert!(block.neutral_order_ok(Mode::Light));
    }
}
