//! # tinct-color — perceptual color core
//!
//! Everything in tinct that touches raw color math lives here: OKLCH
//! parsing and conversion, WCAG contrast, ramp generation, and the
//! per-mode anchor tables that turn a ramp into named neutral tones.
//!
//! # Architecture
//!
//! ```text
//! seed string ("#3b82f6", "oklch(0.62 0.19 259)")
//!     │
//!     ▼
//! color.rs:    parse → OKLCH ↔ Oklab ↔ linear sRGB ↔ sRGB pipeline
//!     │
//!     ▼
//! ramp.rs:     anchor the seed to its natural scale position, then
//!              interpolate toward light/dark endpoints (11/10/9 stops)
//!     │
//!     ▼
//! contrast.rs: sRGB relative luminance, WCAG ratios, AAA/AA/A tiers
//!     │
//!     ▼
//! anchor.rs:   mode-directional stop tables → 8 named neutral tones
//! ```
//!
//! Every function here is a pure, synchronous function of its inputs.
//! Nothing caches, nothing blocks, nothing shares mutable state.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// Loop indices feed interpolation factors.
#![allow(clippy::cast_precision_loss)]

pub mod anchor;
pub mod color;
pub mod contrast;
pub mod ramp;

pub use anchor::{Mode, NeutralTones, derive_neutral_ramp};
pub use color::{Color, ColorError};
pub use contrast::{AccessLevel, best_foreground, contrast_ratio, relative_luminance};
pub use ramp::{Ramp, RampStop, StopTable, generate_ramp, generate_ramp_from};
