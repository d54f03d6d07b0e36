/// CLI argument parsing and headless commands.
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::color::{self, Color, RandomSource, SeededRandom, ThreadRandom};
use crate::engine::{self, Palette};

#[derive(Parser, Debug)]
#[command(
    name = "palette-studio",
    version,
    about = "Palette Studio - A terminal-based color palette generator"
)]
pub struct Cli {
    /// Seed the color generator for reproducible palettes
    #[arg(long)]
    pub seed: Option<u64>,
    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,
    /// Do not touch the system clipboard when copying
    #[arg(long)]
    pub no_clipboard: bool,
    /// Open the editor on these colors instead of a random palette
    #[arg(long, value_name = "HEX,...", value_delimiter = ',')]
    pub palette: Vec<Color>,
    /// Where to write logs
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print freshly generated palettes
    Generate {
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
    },
    /// Show the luminance and overlay text class of a color
    Contrast { color: String },
}

impl Cli {
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        }
    }

    /// Palette given with `--palette`, if any. Rejects lists outside 1 to 8
    /// colors.
    pub fn starting_palette(&self) -> Result<Option<Palette>> {
        if self.palette.is_empty() {
            return Ok(None);
        }
        Ok(Some(Palette::from_colors(self.palette.clone())?))
    }
}

/// Execute a headless command, writing to stdout.
pub fn run(command: Command, random: &mut dyn RandomSource) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(command, random, &mut out)
}

fn run_with(command: Command, random: &mut dyn RandomSource, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Generate { count } => handle_generate(count, random, out)?,
        Command::Contrast { color } => handle_contrast(&color, out)?,
    }
    Ok(())
}

fn handle_generate(count: usize, random: &mut dyn RandomSource, out: &mut dyn Write) -> Result<()> {
    for _ in 0..count {
        let palette = engine::regenerate(random);
        let line = palette
            .colors()
            .iter()
            .map(|c| format!("{}:{}", c.display_hex(), color::contrast_class(*c)))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn handle_contrast(value: &str, out: &mut dyn Write) -> Result<()> {
    let Ok(parsed) = value.parse::<Color>() else {
        writeln!(out, "Invalid color format. Please provide a hex code like #RRGGBB.")?;
        return Ok(());
    };
    writeln!(
        out,
        "{} luminance {:.3} {}",
        parsed.display_hex(),
        color::luminance(parsed),
        color::contrast_class(parsed)
    )?;
    Ok(())
}
