mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Show {
            source,
            queries,
            output,
            strict,
        } => commands::show(source, queries, *output, *strict),
        Commands::Get { key, source } => commands::get(key, source),
        Commands::Check { path, strict } => commands::check(path, *strict),
        Commands::Normalize { path, strict } => commands::normalize(path, *strict),
        Commands::Profiles { profiles_dir } => commands::list_profiles(profiles_dir.as_deref()),
        Commands::Install {
            preset,
            target,
            profiles_dir,
            force,
        } => commands::install(*preset, target, profiles_dir.as_deref(), *force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
