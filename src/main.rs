//! CLI entry point for tintpick.

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use tintpick::cli::{Cli, OutputFormat};
use tintpick::state::State;
use tintpick::{logging, tui};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let _guard = cli
        .log_file
        .as_ref()
        .map(|path| logging::init(path, &cli.log_level));

    let path = cli.palette_path();
    let state = State::load(&path)
        .wrap_err_with(|| format!("failed to load palette from {}", path.display()))?;

    if cli.print {
        match cli.output {
            OutputFormat::All => print!("{}", state.table_string()),
            OutputFormat::Hex => println!("{}", state.hex_string()),
            OutputFormat::Hsv => println!("{}", state.hsv_string()),
            OutputFormat::Rgb => println!("{}", state.rgb_string()),
        }
        return Ok(());
    }

    tui::run(Arc::new(state))
}
