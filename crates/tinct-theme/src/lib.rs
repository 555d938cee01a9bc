//! # tinct-theme — from a 13-color canonical theme to provider tokens
//!
//! The canonical theme (8 neutrals + 5 accents per mode) is the
//! interchange format every mapper and converter in tinct reads and
//! writes. This crate turns it into the richer vocabularies each
//! output target wants, and reconciles the heterogeneous override
//! shapes that accumulate around stored themes.
//!
//! # Architecture
//!
//! ```text
//! theme.rs:     canonical Theme/ThemeBlock model (serde interchange)
//!     │
//!     ├─▶ design.rs:   ~40 design-system tokens + shadow tiers + CSS
//!     ├─▶ editor.rs:   semantic token colors, scopes, UI surfaces
//!     └─▶ terminal.rs: ANSI-16 set + Alacritty/kitty/WT/gpl emitters
//!
//! overrides.rs: normalize / merge / denormalize legacy raw shapes
//! convert.rs:   best-effort bridges to and from foreign theme schemas
//! ```
//!
//! Everything is a synchronous, side-effect-free function of its
//! inputs; ramps are regenerated per call and never cached here.

// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// Static token tables are long by nature — one entry per surface.
#![allow(clippy::too_many_lines)]

pub mod convert;
pub mod design;
pub mod editor;
pub mod overrides;
pub mod terminal;
pub mod theme;

pub use convert::{
    canonical_to_shadcn, rayso_to_shadcn, shadcn_to_canonical, tweakcn_to_canonical,
    tweakcn_to_rayso,
};
pub use design::{DesignTokens, ShadowSpec, TokenOverrides, map_to_design_tokens};
pub use editor::{EditorTheme, map_to_editor_theme};
pub use overrides::{denormalize, design_overrides, merge, normalize};
pub use terminal::{AnsiPalette, map_to_ansi};
pub use theme::{CanonicalKey, Theme, ThemeBlock, ThemeError};
