//! Editor theme mapper — canonical theme → editor token JSON.
//!
//! Three immutable static tables drive the whole mapping: semantic
//! syntax categories to canonical colors, categories to TextMate scope
//! selectors, and editor UI surfaces to canonical colors with fixed
//! per-surface alpha overlays. Alphas below 1.0 are emitted as
//! `#rrggbbaa`; opaque surfaces stay `#rrggbb`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use tinct_color::Mode;

use crate::theme::{CanonicalKey, ThemeBlock};

use CanonicalKey::{Ac1, Ac2, Ac3, Bg, Bg2, Pr, Sc, Tx, Tx2, Tx3, Ui, Ui2, Ui3};

// ─── Static tables ──────────────────────────────────────────────────

/// Semantic syntax category → canonical color.
///
/// Category names double as the `name` field of each emitted token
/// rule and as the lookup key into [`SCOPE_MAP`].
static SEMANTIC_TOKENS: &[(&str, CanonicalKey)] = &[
    ("comment", Tx3),
    ("documentation", Tx3),
    ("punctuation", Tx2),
    ("punctuation.delimiter", Tx3),
    ("punctuation.bracket", Tx2),
    ("operator", Tx2),
    ("keyword", Pr),
    ("keyword.control", Pr),
    ("keyword.import", Pr),
    ("storage", Pr),
    ("storage.modifier", Sc),
    ("string", Ac1),
    ("string.escape", Ac2),
    ("string.regexp", Ac2),
    ("number", Ac2),
    ("boolean", Ac2),
    ("constant", Ac2),
    ("constant.builtin", Ac2),
    ("character", Ac1),
    ("function", Sc),
    ("function.builtin", Sc),
    ("function.macro", Ac3),
    ("method", Sc),
    ("constructor", Ac2),
    ("class", Ac2),
    ("type", Sc),
    ("type.builtin", Sc),
    ("type.parameter", Ac2),
    ("interface", Sc),
    ("enum", Ac2),
    ("enum.member", Ac2),
    ("namespace", Tx),
    ("module", Tx),
    ("variable", Tx),
    ("variable.builtin", Ac3),
    ("variable.parameter", Tx2),
    ("property", Tx2),
    ("field", Tx2),
    ("attribute", Ac2),
    ("decorator", Ac3),
    ("tag", Pr),
    ("tag.attribute", Sc),
    ("label", Ac2),
    ("markup.heading", Pr),
    ("markup.bold", Tx),
    ("markup.italic", Tx2),
    ("markup.link", Sc),
    ("markup.quote", Tx3),
    ("markup.list", Tx2),
    ("markup.raw", Ac1),
    ("diff.inserted", Ac1),
    ("diff.deleted", Ac3),
    ("diff.changed", Ac2),
    ("invalid", Ac3),
];

/// Semantic category → TextMate scope selectors.
static SCOPE_MAP: &[(&str, &[&str])] = &[
    ("comment", &["comment", "comment.block", "comment.line"]),
    ("documentation", &["comment.block.documentation"]),
    ("punctuation", &["punctuation"]),
    ("punctuation.delimiter", &["punctuation.separator", "punctuation.terminator"]),
    ("punctuation.bracket", &["punctuation.section", "meta.brace"]),
    ("operator", &["keyword.operator"]),
    ("keyword", &["keyword"]),
    ("keyword.control", &["keyword.control"]),
    ("keyword.import", &["keyword.control.import", "keyword.control.export"]),
    ("storage", &["storage", "storage.type"]),
    ("storage.modifier", &["storage.modifier"]),
    ("string", &["string", "string.quoted"]),
    ("string.escape", &["constant.character.escape"]),
    ("string.regexp", &["string.regexp"]),
    ("number", &["constant.numeric"]),
    ("boolean", &["constant.language.boolean"]),
    ("constant", &["constant", "variable.other.constant"]),
    ("constant.builtin", &["constant.language"]),
    ("character", &["constant.character"]),
    ("function", &["entity.name.function", "support.function"]),
    ("function.builtin", &["support.function.builtin"]),
    ("function.macro", &["entity.name.function.macro"]),
    ("method", &["entity.name.function.method", "meta.function-call.method"]),
    ("constructor", &["entity.name.function.constructor"]),
    ("class", &["entity.name.class", "entity.name.type.class", "support.class"]),
    ("type", &["entity.name.type", "support.type"]),
    ("type.builtin", &["support.type.primitive", "keyword.type"]),
    ("type.parameter", &["entity.name.type.parameter"]),
    ("interface", &["entity.name.type.interface"]),
    ("enum", &["entity.name.type.enum"]),
    ("enum.member", &["variable.other.enummember"]),
    ("namespace", &["entity.name.namespace", "entity.name.type.namespace"]),
    ("module", &["entity.name.module", "support.module"]),
    ("variable", &["variable", "variable.other.readwrite"]),
    ("variable.builtin", &["variable.language"]),
    ("variable.parameter", &["variable.parameter"]),
    ("property", &["variable.other.property", "support.type.property-name"]),
    ("field", &["variable.other.object.property"]),
    ("attribute", &["entity.other.attribute-name"]),
    ("decorator", &["meta.decorator", "punctuation.decorator"]),
    ("tag", &["entity.name.tag"]),
    ("tag.attribute", &["entity.other.attribute-name.html"]),
    ("label", &["entity.name.label"]),
    ("markup.heading", &["markup.heading", "entity.name.section"]),
    ("markup.bold", &["markup.bold"]),
    ("markup.italic", &["markup.italic"]),
    ("markup.link", &["markup.underline.link", "string.other.link"]),
    ("markup.quote", &["markup.quote"]),
    ("markup.list", &["markup.list"]),
    ("markup.raw", &["markup.inline.raw", "markup.fenced_code.block"]),
    ("diff.inserted", &["markup.inserted"]),
    ("diff.deleted", &["markup.deleted"]),
    ("diff.changed", &["markup.changed"]),
    ("invalid", &["invalid", "invalid.illegal"]),
];

/// Editor UI surface → canonical color with per-mode alpha overlay.
///
/// Alphas are `(light, dark)`; 1.0 means opaque. Selection and match
/// overlays run more transparent in light mode where the underlying
/// surfaces are brighter.
static UI_SURFACES: &[(&str, CanonicalKey, f64, f64)] = &[
    ("editor.background", Bg, 1.0, 1.0),
    ("editor.foreground", Tx, 1.0, 1.0),
    ("editorLineNumber.foreground", Tx3, 1.0, 1.0),
    ("editorLineNumber.activeForeground", Tx, 1.0, 1.0),
    ("editorCursor.foreground", Pr, 1.0, 1.0),
    ("editor.selectionBackground", Pr, 0.15, 0.25),
    ("editor.inactiveSelectionBackground", Pr, 0.08, 0.15),
    ("editor.selectionHighlightBackground", Pr, 0.10, 0.18),
    ("editor.wordHighlightBackground", Sc, 0.12, 0.20),
    ("editor.wordHighlightStrongBackground", Sc, 0.20, 0.30),
    ("editor.findMatchBackground", Ac2, 0.35, 0.40),
    ("editor.findMatchHighlightBackground", Ac2, 0.18, 0.22),
    ("editor.lineHighlightBackground", Bg2, 0.60, 0.60),
    ("editorWhitespace.foreground", Ui2, 1.0, 1.0),
    ("editorIndentGuide.background", Ui, 1.0, 1.0),
    ("editorIndentGuide.activeBackground", Ui3, 1.0, 1.0),
    ("editorRuler.foreground", Ui, 1.0, 1.0),
    ("editorBracketMatch.background", Pr, 0.15, 0.22),
    ("editorBracketMatch.border", Pr, 0.50, 0.50),
    ("editorGutter.background", Bg, 1.0, 1.0),
    ("editorGutter.addedBackground", Ac1, 1.0, 1.0),
    ("editorGutter.deletedBackground", Ac3, 1.0, 1.0),
    ("editorGutter.modifiedBackground", Ac2, 1.0, 1.0),
    ("editorOverviewRuler.border", Ui, 1.0, 1.0),
    ("editorWidget.background", Bg2, 1.0, 1.0),
    ("editorWidget.border", Ui2, 1.0, 1.0),
    ("editorSuggestWidget.background", Bg2, 1.0, 1.0),
    ("editorSuggestWidget.selectedBackground", Pr, 0.18, 0.28),
    ("editorHoverWidget.background", Bg2, 1.0, 1.0),
    ("editorHoverWidget.border", Ui2, 1.0, 1.0),
    ("editorError.foreground", Ac3, 1.0, 1.0),
    ("editorWarning.foreground", Ac2, 1.0, 1.0),
    ("editorInfo.foreground", Sc, 1.0, 1.0),
    ("diffEditor.insertedTextBackground", Ac1, 0.12, 0.18),
    ("diffEditor.removedTextBackground", Ac3, 0.12, 0.18),
    ("activityBar.background", Bg2, 1.0, 1.0),
    ("activityBar.foreground", Tx, 1.0, 1.0),
    ("activityBar.inactiveForeground", Tx3, 1.0, 1.0),
    ("activityBar.border", Ui, 1.0, 1.0),
    ("activityBarBadge.background", Pr, 1.0, 1.0),
    ("sideBar.background", Bg2, 1.0, 1.0),
    ("sideBar.foreground", Tx2, 1.0, 1.0),
    ("sideBar.border", Ui, 1.0, 1.0),
    ("sideBarTitle.foreground", Tx, 1.0, 1.0),
    ("sideBarSectionHeader.background", Bg2, 1.0, 1.0),
    ("list.activeSelectionBackground", Pr, 0.15, 0.25),
    ("list.activeSelectionForeground", Tx, 1.0, 1.0),
    ("list.inactiveSelectionBackground", Ui, 0.50, 0.50),
    ("list.hoverBackground", Ui, 0.40, 0.40),
    ("list.highlightForeground", Pr, 1.0, 1.0),
    ("statusBar.background", Bg2, 1.0, 1.0),
    ("statusBar.foreground", Tx2, 1.0, 1.0),
    ("statusBar.border", Ui, 1.0, 1.0),
    ("statusBar.debuggingBackground", Ac2, 1.0, 1.0),
    ("statusBar.noFolderBackground", Bg2, 1.0, 1.0),
    ("titleBar.activeBackground", Bg2, 1.0, 1.0),
    ("titleBar.activeForeground", Tx, 1.0, 1.0),
    ("titleBar.inactiveBackground", Bg2, 1.0, 1.0),
    ("titleBar.inactiveForeground", Tx3, 1.0, 1.0),
    ("tab.activeBackground", Bg, 1.0, 1.0),
    ("tab.activeForeground", Tx, 1.0, 1.0),
    ("tab.inactiveBackground", Bg2, 1.0, 1.0),
    ("tab.inactiveForeground", Tx3, 1.0, 1.0),
    ("tab.border", Ui, 1.0, 1.0),
    ("tab.activeBorderTop", Pr, 1.0, 1.0),
    ("panel.background", Bg, 1.0, 1.0),
    ("panel.border", Ui, 1.0, 1.0),
    ("panelTitle.activeForeground", Tx, 1.0, 1.0),
    ("panelTitle.inactiveForeground", Tx3, 1.0, 1.0),
    ("input.background", Bg, 1.0, 1.0),
    ("input.foreground", Tx, 1.0, 1.0),
    ("input.border", Ui2, 1.0, 1.0),
    ("input.placeholderForeground", Tx3, 1.0, 1.0),
    ("inputOption.activeBorder", Pr, 1.0, 1.0),
    ("dropdown.background", Bg2, 1.0, 1.0),
    ("dropdown.foreground", Tx, 1.0, 1.0),
    ("dropdown.border", Ui2, 1.0, 1.0),
    ("button.background", Pr, 1.0, 1.0),
    ("button.hoverBackground", Pr, 0.85, 0.85),
    ("badge.background", Pr, 1.0, 1.0),
    ("scrollbarSlider.background", Ui2, 0.40, 0.40),
    ("scrollbarSlider.hoverBackground", Ui3, 0.55, 0.55),
    ("scrollbarSlider.activeBackground", Ui3, 0.70, 0.70),
    ("badge.foreground", Bg, 1.0, 1.0),
    ("breadcrumb.foreground", Tx3, 1.0, 1.0),
    ("breadcrumb.focusForeground", Tx, 1.0, 1.0),
    ("menu.background", Bg2, 1.0, 1.0),
    ("menu.foreground", Tx, 1.0, 1.0),
    ("menu.selectionBackground", Pr, 0.15, 0.25),
    ("notificationCenterHeader.background", Bg2, 1.0, 1.0),
    ("notifications.background", Bg2, 1.0, 1.0),
    ("notifications.foreground", Tx, 1.0, 1.0),
    ("notifications.border", Ui, 1.0, 1.0),
    ("gitDecoration.addedResourceForeground", Ac1, 1.0, 1.0),
    ("gitDecoration.modifiedResourceForeground", Ac2, 1.0, 1.0),
    ("gitDecoration.deletedResourceForeground", Ac3, 1.0, 1.0),
    ("gitDecoration.untrackedResourceForeground", Ac1, 1.0, 1.0),
    ("gitDecoration.ignoredResourceForeground", Tx3, 1.0, 1.0),
    ("focusBorder", Pr, 0.60, 0.60),
    ("foreground", Tx, 1.0, 1.0),
    ("descriptionForeground", Tx3, 1.0, 1.0),
    ("errorForeground", Ac3, 1.0, 1.0),
    ("widget.shadow", Tx, 0.10, 0.30),
    ("selection.background", Pr, 0.20, 0.30),
    ("textLink.foreground", Pr, 1.0, 1.0),
    ("textLink.activeForeground", Sc, 1.0, 1.0),
];

/// Scope selectors for a semantic category.
#[must_use]
pub fn scopes_for(category: &str) -> &'static [&'static str] {
    SCOPE_MAP
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(&[], |(_, scopes)| scopes)
}

// ─── Output model ───────────────────────────────────────────────────

/// One syntax highlighting rule in the emitted theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenColor {
    pub name: String,
    pub scope: Vec<String>,
    pub settings: TokenSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSettings {
    pub foreground: String,
}

/// A complete editor theme in the standard editor theme JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorTheme {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub colors: BTreeMap<String, String>,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColor>,
}

impl EditorTheme {
    /// Serialize to the editor theme JSON interchange form.
    ///
    /// # Errors
    ///
    /// Only if the serializer itself fails, which plain structs do not.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ─── Mapper ─────────────────────────────────────────────────────────

/// Map one canonical block to a full editor theme.
///
/// Every emission comes from the three static tables; nothing is
/// derived at runtime beyond the alpha blend.
#[must_use]
pub fn map_to_editor_theme(block: &ThemeBlock, mode: Mode, name: &str) -> EditorTheme {
    let colors = UI_SURFACES
        .iter()
        .map(|&(surface, key, alpha_light, alpha_dark)| {
            let alpha = if mode.is_dark() { alpha_dark } else { alpha_light };
            (surface.to_owned(), block.get(key).with_alpha(alpha).to_hex())
        })
        .collect();

    let token_colors = SEMANTIC_TOKENS
        .iter()
        .map(|&(category, key)| TokenColor {
            name: category.to_owned(),
            scope: scopes_for(category).iter().map(|s| (*s).to_owned()).collect(),
            settings: TokenSettings {
                foreground: block.get(key).to_hex(),
            },
        })
        .collect();

    EditorTheme {
        name: name.to_owned(),
        kind: mode.as_str().to_owned(),
        colors,
        token_colors,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
