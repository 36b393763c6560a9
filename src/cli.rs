use clap::{Args, Parser, Subcommand, ValueEnum};
use perf_prefs::Preset;
use std::path::PathBuf;

/// CLI arguments for perf-prefs
#[derive(Parser, Debug)]
#[command(name = "perf-prefs")]
#[command(about = "Inspect and install browser preference presets for performance testing")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved preferences as JSON
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Glob patterns to filter preference names (OR logic)
        #[arg(short, long = "query")]
        queries: Vec<String>,

        /// JSON output layout
        #[arg(short, long, value_enum, default_value_t = OutputType::JsonObject)]
        output: OutputType,

        /// Fail if a preference is declared more than once
        #[arg(long)]
        strict: bool,
    },

    /// Print a single preference value without JSON wrapping
    Get {
        /// Exact preference name
        key: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Validate a user.js file
    Check {
        path: PathBuf,

        /// Fail if a preference is declared more than once
        #[arg(long)]
        strict: bool,
    },

    /// Print a user.js file in canonical form
    Normalize {
        path: PathBuf,

        /// Fail if a preference is declared more than once
        #[arg(long)]
        strict: bool,
    },

    /// List the browser profiles found in profiles.ini
    Profiles {
        /// Profiles directory (defaults to MOZ_PROFILES_DIR, then the OS location)
        #[arg(long)]
        profiles_dir: Option<PathBuf>,
    },

    /// Write a preset as user.js into a profile directory
    Install {
        #[arg(value_enum)]
        preset: Preset,

        #[command(flatten)]
        target: InstallTarget,

        /// Profiles directory used to resolve --profile
        #[arg(long, requires = "profile")]
        profiles_dir: Option<PathBuf>,

        /// Replace an existing user.js
        #[arg(long)]
        force: bool,
    },
}

/// Where preferences are read from
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Bundled preset
    #[arg(value_enum)]
    pub preset: Option<Preset>,

    /// Path to a user.js file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Which profile directory to install into
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct InstallTarget {
    /// Profile name as listed by `perf-prefs profiles`
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Explicit profile directory
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputType {
    /// A single object mapping names to values
    JsonObject,
    /// An array of {key, value, explanation} objects
    JsonArray,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_preset_with_queries() {
        let cli = Cli::parse_from([
            "perf-prefs",
            "show",
            "minimum",
            "-q",
            "toolkit.*",
            "--query",
            "dom.*",
            "--output",
            "json-array",
        ]);
        match cli.command {
            Commands::Show {
                source,
                queries,
                output,
                strict,
            } => {
                assert_eq!(source.preset, Some(Preset::Minimum));
                assert!(source.file.is_none());
                assert_eq!(queries, vec!["toolkit.*", "dom.*"]);
                assert_eq!(output, OutputType::JsonArray);
                assert!(!strict);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_source_is_exclusive() {
        assert!(Cli::try_parse_from(["perf-prefs", "show", "full", "--file", "x.js"]).is_err());
        assert!(Cli::try_parse_from(["perf-prefs", "show"]).is_err());
    }

    #[test]
    fn test_install_requires_target() {
        assert!(Cli::try_parse_from(["perf-prefs", "install", "full"]).is_err());
        let cli = Cli::parse_from(["perf-prefs", "-v", "install", "full", "--dir", "/tmp/p"]);
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Commands::Install { force: false, .. }));
    }
}
