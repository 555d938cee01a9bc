//! Per-mode anchor tables — semantic token name → ramp stop index.
//!
//! The canonical neutral scale reads in opposite directions per mode:
//! light backgrounds start at the lightest stop (bg = 50) and text runs
//! dark, while dark mode mirrors the whole table (bg = 950). The
//! tables are immutable constant data; lookups clamp into range rather
//! than erroring on a miss.

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorError};
use crate::ramp::{Ramp, StopTable, generate_ramp_from};

/// Theme mode. Determines anchor direction for every mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// The other mode — used by the terminal mapper's opposite-mode
    /// substitution.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Stop indices (into the 11-stop table) for the 8 neutral tones, in
/// canonical order: bg, bg_2, ui, ui_2, ui_3, tx_3, tx_2, tx.
///
/// Light ascends 50→900; dark is the exact mirror, 950→100. The text
/// tiers skip mid-stops so the three tx tones stay clearly separated.
static LIGHT_NEUTRAL_ANCHORS: [usize; 8] = [0, 1, 2, 3, 4, 6, 8, 9];
static DARK_NEUTRAL_ANCHORS: [usize; 8] = [10, 9, 8, 7, 6, 4, 2, 1];

/// The anchor table for a mode.
#[must_use]
pub fn neutral_anchors(mode: Mode) -> &'static [usize; 8] {
    match mode {
        Mode::Light => &LIGHT_NEUTRAL_ANCHORS,
        Mode::Dark => &DARK_NEUTRAL_ANCHORS,
    }
}

/// The 8 neutral tones picked from one ramp via the mode's anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutralTones {
    pub bg: Color,
    pub bg_2: Color,
    pub ui: Color,
    pub ui_2: Color,
    pub ui_3: Color,
    pub tx_3: Color,
    pub tx_2: Color,
    pub tx: Color,
}

impl NeutralTones {
    /// Pick the mode's 8 anchor stops out of an already-generated ramp.
    ///
    /// Indices are clamped into the ramp, so shorter stop layouts never
    /// panic — the darkest/lightest available stop stands in.
    #[must_use]
    pub fn from_ramp(ramp: &Ramp, mode: Mode) -> Self {
        let anchors = neutral_anchors(mode);
        let pick = |i: usize| ramp.at_clamped(anchors[i]).color;
        Self {
            bg: pick(0),
            bg_2: pick(1),
            ui: pick(2),
            ui_2: pick(3),
            ui_3: pick(4),
            tx_3: pick(5),
            tx_2: pick(6),
            tx: pick(7),
        }
    }

    /// Tones in canonical order.
    #[must_use]
    pub const fn ordered(&self) -> [Color; 8] {
        [
            self.bg, self.bg_2, self.ui, self.ui_2, self.ui_3, self.tx_3, self.tx_2, self.tx,
        ]
    }
}

/// Derive the 8 canonical neutral tones from a single seed.
///
/// One ramp generation per call; no caching.
///
/// # Errors
///
/// Propagates the seed parse failure — a neutral set is never built
/// from a guessed color.
pub fn derive_neutral_ramp(seed: &str, mode: Mode) -> Result<NeutralTones, ColorError> {
    let color = Color::parse(seed)?;
    let ramp = generate_ramp_from(color, StopTable::eleven(), 0.0);
    Ok(NeutralTones::from_ramp(&ramp, mode))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::generate_ramp;

    #[test]
    fn light_neutrals_descend_in_lightness() {
        let tones = derive_neutral_ramp("#8a8a8a", Mode::Light).unwrap();
        let ordered = tones.ordered();
        for pair in ordered.windows(2) {
            assert!(
                pair[0].l >= pair[1].l,
                "light neutrals out of order: {} < {}",
                pair[0].l,
                pair[1].l
            );
        }
        assert!(tones.bg.l > 0.9, "light bg should be near-white");
        assert!(tones.tx.l < 0.3, "light tx should be dark");
    }

    #[test]
    fn dark_neutrals_ascend_in_lightness() {
        let tones = derive_neutral_ramp("#8a8a8a", Mode::Dark).unwrap();
        let ordered = tones.ordered();
        for pair in ordered.windows(2) {
            assert!(pair[0].l <= pair[1].l, "dark neutrals out of order");
        }
        assert!(tones.bg.l < 0.3, "dark bg should be near-black");
        assert!(tones.tx.l > 0.8, "dark tx should be bright");
    }

    #[test]
    fn modes_mirror_each_other() {
        let light = neutral_anchors(Mode::Light);
        let dark = neutral_anchors(Mode::Dark);
        for (a, b) in light.iter().zip(dark.iter()) {
            assert_eq!(a + b, 10, "anchors should mirror around the 11-stop scale");
        }
    }

    #[test]
    fn clamped_lookup_on_short_ramp() {
        // A 9-stop ramp has no index 10; dark anchors clamp instead of
        // panicking.
        let ramp = generate_ramp("#8a8a8a", StopTable::nine(), 0.0).unwrap();
        let tones = NeutralTones::from_ramp(&ramp, Mode::Dark);
        assert_eq!(tones.bg, ramp.stops.last().unwrap().color);
    }

    #[test]
    fn bad_seed_propagates() {
        assert!(derive_neutral_ramp("##", Mode::Light).is_err());
    }

    #[test]
    fn opposite_mode() {
        assert_eq!(Mode::Light.opposite(), Mode::Dark);
        assert_eq!(Mode::Dark.opposite(), Mode::Light);
        assert!(Mode::Dark.is_dark());
    }
}
