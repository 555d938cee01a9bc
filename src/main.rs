// SPDX-License-Identifier: MIT
//
// tinct — perceptual color engine and theme-token derivation.
//
// This is the CLI that wires together the library crates:
//
//   tinct-color → OKLCH color math, WCAG contrast, ramp generation
//   tinct-theme → canonical theme model, provider mappers, converters
//
// Two subcommands:
//
//   tinct ramp <seed>              → inspect the derived ramp as JSON
//   tinct export --format <fmt>    → read canonical theme JSON, emit a
//                                    provider export to stdout or a file
//
// The theme flows:
//
//   json → Theme → mapper (design/editor/terminal) → provider text

use std::fs;
use std::io::Read as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use tinct_color::{Mode, StopTable, generate_ramp};
use tinct_theme::terminal::{alacritty_yaml, gpl_palette, kitty_conf, windows_terminal_scheme};
use tinct_theme::{Theme, design, map_to_ansi, map_to_design_tokens, map_to_editor_theme};

#[derive(Parser)]
#[command(name = "tinct", version, about = "Derive theme tokens from seed colors")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a color ramp from a seed and print it as JSON.
    Ramp {
        /// Seed color: hex (#3b82f6) or oklch(0.62 0.21 259).
        seed: String,
        /// Number of stops in the ramp.
        #[arg(long, default_value_t = 11, value_parser = clap::value_parser!(u8).range(9..=11))]
        stops: u8,
        /// Contrast shift in [-1, 1]; negative compresses, positive expands.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        contrast_shift: f64,
    },
    /// Export a canonical theme to a provider format.
    Export {
        /// Output format.
        #[arg(long, value_enum)]
        format: Format,
        /// Mode to export for single-mode formats.
        #[arg(long, value_enum, default_value_t = ModeArg::Dark)]
        mode: ModeArg,
        /// Theme JSON path; reads stdin when omitted.
        #[arg(long)]
        theme: Option<PathBuf>,
        /// Theme name embedded in named formats.
        #[arg(long, default_value = "tinct")]
        name: String,
        /// Write to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Design-system CSS custom properties (:root/.dark/@theme inline).
    Css,
    /// Editor theme JSON with tokenColors.
    Vscode,
    /// Alacritty colors YAML block.
    Alacritty,
    /// kitty key-value conf lines.
    Kitty,
    /// Windows Terminal schemes entry.
    WindowsTerminal,
    /// GIMP palette of the ANSI-16 set.
    Gpl,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Light => Self::Light,
            ModeArg::Dark => Self::Dark,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Ramp {
            seed,
            stops,
            contrast_shift,
        } => {
            let table =
                StopTable::for_count(stops as usize).context("unsupported stop count")?;
            let ramp = generate_ramp(&seed, table, contrast_shift)
                .with_context(|| format!("cannot parse seed {seed:?}"))?;
            println!("{}", serde_json::to_string_pretty(&ramp)?);
            Ok(())
        }
        Command::Export {
            format,
            mode,
            theme,
            name,
            out,
        } => {
            let json = read_theme(theme.as_deref())?;
            let theme = Theme::from_json(&json).context("malformed theme json")?;
            let mode = Mode::from(mode);
            let output = render(&theme, format, mode, &name)?;
            match out {
                Some(path) => {
                    fs::write(&path, output)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    log::info!("wrote {}", path.display());
                }
                None => print!("{output}"),
            }
            Ok(())
        }
    }
}

fn read_theme(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read theme from stdin")?;
            Ok(buf)
        }
    }
}

fn render(theme: &Theme, format: Format, mode: Mode, name: &str) -> Result<String> {
    let output = match format {
        Format::Css => {
            let light = map_to_design_tokens(&theme.light, Mode::Light, None);
            let dark = map_to_design_tokens(&theme.dark, Mode::Dark, None);
            design::to_css(&light, &dark)
        }
        Format::Vscode => {
            let editor = map_to_editor_theme(theme.block(mode), mode, name);
            let mut json = editor.to_json()?;
            json.push('\n');
            json
        }
        Format::Alacritty => alacritty_yaml(&map_to_ansi(theme, mode)),
        Format::Kitty => kitty_conf(&map_to_ansi(theme, mode)),
        Format::WindowsTerminal => {
            let scheme = windows_terminal_scheme(&map_to_ansi(theme, mode), name);
            let mut json = serde_json::to_string_pretty(&scheme)?;
            json.push('\n');
            json
        }
        Format::Gpl => gpl_palette(&map_to_ansi(theme, mode), name),
    };
    Ok(output)
}
