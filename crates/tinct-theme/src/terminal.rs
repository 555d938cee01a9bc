//! Terminal mapper — canonical theme → ANSI-16 palette and configs.
//!
//! Chromatic slots (1-6 and 9-14) are sampled at fixed fractional
//! offsets along ramps seeded from the theme's primary weight at six
//! canonical hues. The true-black and true-white end slots borrow the
//! *opposite* mode's background and foreground so that text painted in
//! those slots stays legible against either mode's surfaces.

use std::fmt::Write as _;

use serde_json::json;
use tinct_color::{Color, Mode, StopTable, generate_ramp_from};

use crate::theme::Theme;

// ─── Sampling constants ─────────────────────────────────────────────

/// Canonical ANSI hues in OKLCH degrees: red, green, yellow, blue,
/// magenta, cyan.
static ANSI_HUES: [f64; 6] = [25.0, 145.0, 95.0, 260.0, 330.0, 195.0];

/// Chroma floor for chromatic slots. A gray primary still has to
/// produce distinguishable reds and greens.
const ANSI_MIN_CHROMA: f64 = 0.09;

/// Ramp sample fractions per mode. Bright variants sit closer to the
/// light end; light mode samples slightly lighter overall so the
/// colors read against white.
const DARK_NORMAL_FRACTION: f64 = 0.6;
const DARK_BRIGHT_FRACTION: f64 = 0.45;
const LIGHT_NORMAL_FRACTION: f64 = 0.55;
const LIGHT_BRIGHT_FRACTION: f64 = 0.40;

static SLOT_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

// ─── Palette ────────────────────────────────────────────────────────

/// A full 16-slot ANSI palette plus the surrounding terminal colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnsiPalette {
    pub mode: Mode,
    /// Slots 0-15: normal black..white, then bright black..white.
    pub colors: [Color; 16],
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    pub selection: Color,
}

impl AnsiPalette {
    /// Normal slot by ANSI name, `"red"` through `"white"`.
    #[must_use]
    pub fn normal(&self, name: &str) -> Option<Color> {
        SLOT_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.colors[i])
    }

    /// Bright slot by ANSI name.
    #[must_use]
    pub fn bright(&self, name: &str) -> Option<Color> {
        SLOT_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.colors[i + 8])
    }
}

/// Build the ANSI-16 palette for one mode.
///
/// Takes the whole theme because the end slots substitute colors from
/// the opposite mode's block.
#[must_use]
pub fn map_to_ansi(theme: &Theme, mode: Mode) -> AnsiPalette {
    let block = theme.block(mode);
    let opposite = theme.block(mode.opposite());
    let table = StopTable::eleven();

    let (normal_fraction, bright_fraction) = if mode.is_dark() {
        (DARK_NORMAL_FRACTION, DARK_BRIGHT_FRACTION)
    } else {
        (LIGHT_NORMAL_FRACTION, LIGHT_BRIGHT_FRACTION)
    };

    let chroma = block.pr.c.max(ANSI_MIN_CHROMA);
    let sample = |hue: f64, fraction: f64| {
        let seed = Color::oklch(block.pr.l, chroma, hue);
        let ramp = generate_ramp_from(seed, table, 0.0);
        ramp.sample(fraction).color
    };

    let mut colors = [Color::BLACK; 16];
    // End slots: opposite-mode substitution.
    colors[0] = opposite.bg;
    colors[15] = opposite.tx;
    // Same-mode grays for the inner neutral slots.
    colors[7] = block.tx_2;
    colors[8] = block.tx_3;
    for (i, hue) in ANSI_HUES.iter().enumerate() {
        colors[i + 1] = sample(*hue, normal_fraction);
        colors[i + 9] = sample(*hue, bright_fraction);
    }

    AnsiPalette {
        mode,
        colors,
        background: block.bg,
        foreground: block.tx,
        cursor: block.pr,
        selection: block.ui_2,
    }
}

// ─── Exporters ──────────────────────────────────────────────────────

/// Alacritty `colors:` YAML block. Emitted by hand: the structure is
/// four fixed maps and quoting hex strings through a YAML serializer
/// buys nothing.
#[must_use]
pub fn alacritty_yaml(palette: &AnsiPalette) -> String {
    let mut out = String::from("colors:\n");
    out.push_str("  primary:\n");
    let _ = writeln!(out, "    background: '{}'", palette.background.to_hex());
    let _ = writeln!(out, "    foreground: '{}'", palette.foreground.to_hex());
    out.push_str("  cursor:\n");
    let _ = writeln!(out, "    text: '{}'", palette.background.to_hex());
    let _ = writeln!(out, "    cursor: '{}'", palette.cursor.to_hex());
    out.push_str("  normal:\n");
    for (i, name) in SLOT_NAMES.iter().enumerate() {
        let _ = writeln!(out, "    {name}: '{}'", palette.colors[i].to_hex());
    }
    out.push_str("  bright:\n");
    for (i, name) in SLOT_NAMES.iter().enumerate() {
        let _ = writeln!(out, "    {name}: '{}'", palette.colors[i + 8].to_hex());
    }
    out
}

/// kitty `key value` conf lines.
#[must_use]
pub fn kitty_conf(palette: &AnsiPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "background {}", palette.background.to_hex());
    let _ = writeln!(out, "foreground {}", palette.foreground.to_hex());
    let _ = writeln!(out, "cursor {}", palette.cursor.to_hex());
    let _ = writeln!(out, "selection_background {}", palette.selection.to_hex());
    let _ = writeln!(out, "selection_foreground {}", palette.foreground.to_hex());
    for (i, color) in palette.colors.iter().enumerate() {
        let _ = writeln!(out, "color{i} {}", color.to_hex());
    }
    out
}

/// One Windows Terminal `schemes` array entry.
#[must_use]
pub fn windows_terminal_scheme(palette: &AnsiPalette, name: &str) -> serde_json::Value {
    let hex = |i: usize| palette.colors[i].to_hex();
    json!({
        "name": name,
        "background": palette.background.to_hex(),
        "foreground": palette.foreground.to_hex(),
        "cursorColor": palette.cursor.to_hex(),
        "selectionBackground": palette.selection.to_hex(),
        "black": hex(0),
        "red": hex(1),
        "green": hex(2),
        "yellow": hex(3),
        "blue": hex(4),
        "purple": hex(5),
        "cyan": hex(6),
        "white": hex(7),
        "brightBlack": hex(8),
        "brightRed": hex(9),
        "brightGreen": hex(10),
        "brightYellow": hex(11),
        "brightBlue": hex(12),
        "brightPurple": hex(13),
        "brightCyan": hex(14),
        "brightWhite": hex(15),
    })
}

/// GIMP `.gpl` palette: padded decimal RGB triplets, one per slot.
#[must_use]
pub fn gpl_palette(palette: &AnsiPalette, name: &str) -> String {
    let mut out = String::from("GIMP Palette\n");
    let _ = writeln!(out, "Name: {name}");
    out.push_str("Columns: 8\n#\n");
    for (i, color) in palette.colors.iter().enumerate() {
        let (r, g, b) = color.to_rgb8();
        let label = if i < 8 {
            SLOT_NAMES[i].to_owned()
        } else {
            format!("bright-{}", SLOT_NAMES[i - 8])
        };
        let _ = writeln!(out, "{r:>3} {g:>3} {b:>3}\t{label}");
    }
    out
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
    fn dark_black_borrows_light_background() {
        let theme = fixture();
        let palette = map_to_ansi(&theme, Mode::Dark);
        assert_eq!(palette.colors[0], theme.light.bg);
        assert_eq!(palette.colors[15], theme.light.tx);
    }

    #[test]
    fn light_black_borrows_dark_background() {
        let theme = fixture();
        let palette = map_to_ansi(&theme, Mode::Light);
        assert_eq!(palette.colors[0], theme.dark.bg);
        assert_eq!(palette.colors[15], theme.dark.tx);
    }

    #[test]
    fn chromatic_slots_hit_their_hue_families() {
        let theme = fixture();
        let palette = map_to_ansi(&theme, Mode::Dark);
        let red = palette.normal("red").unwrap();
        let green = palette.normal("green").unwrap();
        let blue = palette.normal("blue").unwrap();
        assert!(red.h < 60.0 || red.h > 340.0, "red hue {}", red.h);
        assert!((100.0..190.0).contains(&green.h), "green hue {}", green.h);
        assert!((220.0..300.0).contains(&blue.h), "blue hue {}", blue.h);
    }

    #[test]
    fn bright_variants_are_lighter_than_normal() {
        let theme = fixture();
        let palette = map_to_ansi(&theme, Mode::Dark);
        for name in &SLOT_NAMES[1..7] {
            let normal = palette.normal(name).unwrap();
            let bright = palette.bright(name).unwrap();
            assert!(
                bright.l > normal.l,
                "{name}: bright {} should exceed normal {}",
                bright.l,
                normal.l
            );
        }
    }

    #[test]
    fn gray_primary_still_gets_chromatic_slots() {
        let mut theme = fixture();
        theme.dark.pr = Color::gray(0.6);
        let palette = map_to_ansi(&theme, Mode::Dark);
        let red = palette.normal("red").unwrap();
        assert!(red.c > 0.02, "red chroma {} is too gray", red.c);
    }

    #[test]
    fn alacritty_yaml_shape() {
        let theme = fixture();
        let palette = map_to_ansi(&theme, Mode::Dark);
        let yaml = alacritty_yaml(&palette);
        assert!(yaml.starts_with("colors:\n  primary:\n"));
        assert!(yaml.contains(&format!("    background: '{}'", theme.dark.bg.to_hex())));
        assert!(yaml.contains("  normal:\n    black: '"));
        assert!(yaml.contains("  bright:\n"));
    }

    #[test]
    fn kitty_conf_lists_all_sixteen() {
        let theme = fixture();
        let palette = map_to_ansi(&theme, Mode::Light);
        let conf = kitty_conf(&palette);
        for i in 0..16 {
            assert!(conf.contains(&format!("color{i} #")), "missing color{i}");
        }
        assert!(conf.starts_with("background #ffffff\n"));
    }

    #[test]
    fn windows_terminal_scheme_fields() {
        let theme = fixture();
        let palette = map_to_ansi(&theme, Mode::Dark);
        let scheme = windows_terminal_scheme(&palette, "fixture-dark");
        assert_eq!(scheme["name"], "fixture-dark");
        assert_eq!(scheme["black"], theme.light.bg.to_hex());
        assert!(scheme["brightWhite"].is_string());
        assert_eq!(scheme.as_object().unwrap().len(), 21);
    }

    #[test]
    fn gpl_palette_rows_are_padded() {
        let theme = fixture();
        let palette = map_to_ansi(&theme, Mode::Light);
        let gpl = gpl_palette(&palette, "fixture");
        assert!(gpl.starts_with("GIMP Palette\nName: fixture\nColumns: 8\n#\n"));
        // Light mode black borrows the dark bg (#0d0d0e -> 13 13 14).
        assert!(gpl.contains(" 13  13  14\tblack\n"), "got:\n{gpl}");
        assert_eq!(gpl.lines().count(), 4 + 16);
    }
}
