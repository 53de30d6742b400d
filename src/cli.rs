//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Color format for `--print` output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table with hex, HSV and RGB columns
    #[default]
    All,
    /// Hex strings
    Hex,
    /// RGB triples
    Rgb,
    /// HSV triples
    Hsv,
}

/// Interactive terminal HSV palette picker.
#[derive(Parser, Debug)]
#[command(name = "tintpick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the current palette contents and exit
    #[arg(short, long)]
    pub print: bool,

    /// Color format for --print output
    #[arg(short, long, value_enum, default_value_t = OutputFormat::All)]
    pub output: OutputFormat,

    /// Palette file to load and save (defaults to the user config dir)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write logs to this file (logging is off without it)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// The palette file to operate on.
    pub fn palette_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(crate::config::default_palette_path)
    }
}
