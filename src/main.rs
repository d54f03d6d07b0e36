mod app;
mod cli;
mod color;
mod engine;
mod error;
mod event;
mod logging;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;

use engine::{ClipboardSink, NoopClipboard, PaletteEngine, SystemClipboard, SystemClock};

fn main() -> Result<()> {
    let mut cli_opts = cli::Cli::parse();
    let log_path = cli_opts
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    if let Err(err) = logging::init(&log_path) {
        eprintln!("Logging disabled: {err}");
    }

    let mut random = cli_opts.random_source();
    if let Some(command) = cli_opts.command.take() {
        return cli::run(command, random.as_mut());
    }

    let clipboard: Box<dyn ClipboardSink> = if cli_opts.no_clipboard {
        Box::new(NoopClipboard)
    } else {
        Box::new(SystemClipboard)
    };
    let mut engine = PaletteEngine::new(random, clipboard, Box::new(SystemClock));
    if let Some(palette) = cli_opts.starting_palette()? {
        engine = engine.starting_with(palette);
    }
    let mut app = app::App::new(engine, cli_opts.dark);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
