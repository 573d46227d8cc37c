//! CLI argument definitions for the location selector.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cl-location",
    version,
    about = "Chilean location selector - cascade regions, provinces and communes",
    long_about = "Drive the region/province/commune selector without a browser.\n\n\
                  Option pools are loaded from CSV files named in territory.toml;\n\
                  province and commune lists are filtered by value prefix."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Territory config file (default: <DATA_DIR>/territory.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the territory CSV files (default: $CL_TERRITORY_DIR or bundled data).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the hierarchy levels with their control ids and pool sizes.
    Levels,

    /// Print the options of one level, optionally filtered by a parent value.
    Options(OptionsArgs),

    /// Change the region (and optionally province/commune) and show the selectors.
    Select(SelectArgs),

    /// Restore the selectors from a stored commune value.
    Restore(RestoreArgs),
}

#[derive(Parser)]
pub struct OptionsArgs {
    /// Level to list (region, province, commune).
    #[arg(value_enum)]
    pub level: LevelArg,

    /// Only show options whose value starts with this prefix.
    #[arg(long = "parent", value_name = "VALUE")]
    pub parent: Option<String>,
}

#[derive(Parser)]
pub struct SelectArgs {
    /// Region value to select.
    #[arg(long = "region", value_name = "VALUE")]
    pub region: String,

    /// Province value to select after the region cascade.
    #[arg(long = "province", value_name = "VALUE")]
    pub province: Option<String>,

    /// Commune value to select after the province cascade.
    #[arg(long = "commune", value_name = "VALUE")]
    pub commune: Option<String>,

    /// Print the selectors as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RestoreArgs {
    /// Stored commune value (e.g. 13101).
    #[arg(value_name = "COMMUNE")]
    pub commune: String,

    /// Print the selectors as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI hierarchy level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LevelArg {
    Region,
    Province,
    Commune,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
