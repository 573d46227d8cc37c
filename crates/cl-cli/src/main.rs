//! Chilean location selector CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use cl_cli::commands::{
    SelectRequest, load_config, run_levels, run_options, run_restore, run_select,
};
use cl_cli::logging::{LogConfig, LogFormat, init_logging};
use cl_cli::render::{print_levels, print_options, print_selectors};
use cl_model::Level;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LevelArg, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref(), cli.data_dir.as_deref())?;
    match &cli.command {
        Command::Levels => print_levels(&run_levels(&config)?),
        Command::Options(args) => {
            let level = level_from_arg(args.level);
            let options = run_options(&config, level, args.parent.as_deref())?;
            print_options(level, &options);
        }
        Command::Select(args) => {
            let request = SelectRequest {
                region: args.region.clone(),
                province: args.province.clone(),
                commune: args.commune.clone(),
            };
            let filter = run_select(&config, &request)?;
            print_selectors(&filter, args.json)?;
        }
        Command::Restore(args) => {
            let filter = run_restore(&config, &args.commune)?;
            print_selectors(&filter, args.json)?;
        }
    }
    Ok(())
}

fn level_from_arg(arg: LevelArg) -> Level {
    match arg {
        LevelArg::Region => Level::Region,
        LevelArg::Province => Level::Province,
        LevelArg::Commune => Level::Commune,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    }
    .with_format(format)
    .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
