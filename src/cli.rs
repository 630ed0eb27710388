//! Command-line interface for codefmt.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// File or directory to process
    pub path: PathBuf,

    /// Target indentation width (also the tab width)
    pub indent_width: Option<usize>,

    /// Skip tab replacement
    pub no_tabs: bool,

    /// Skip indentation rewriting
    pub no_indent: bool,

    /// Skip documentation block normalization
    pub no_docu: bool,

    /// Report what would change without writing files
    pub simulate: bool,

    /// Exclude patterns for files/directories (glob patterns)
    pub exclude: Vec<String>,

    /// Additional extensions to skip
    pub skip_extensions: Vec<String>,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Enable debug output
    pub debug: bool,

    /// Silent mode (errors only)
    pub silent: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("codefmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replace tabs, fix indentation width and normalize documentation blocks")
        .arg(
            Arg::new("path")
                .help("Source file or directory to process")
                .value_name("PATH")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent-width")
                .short('w')
                .long("indent-width")
                .help("Target indentation width in spaces [default: 2]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("no-tabs")
                .long("no-tabs")
                .help("Do not replace tab characters")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-indent")
                .long("no-indent")
                .help("Do not rewrite indentation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-docu")
                .long("no-docu")
                .help("Do not normalize the documentation block")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("simulate")
                .short('n')
                .long("simulate")
                .help("Show which files would change without writing them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help("Exclude files/directories matching pattern (glob syntax, can be repeated)")
                .value_name("PATTERN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("skip-ext")
                .short('x')
                .long("skip-ext")
                .help("Additional file extension to skip (can be repeated, e.g., -x md -x json)")
                .value_name("EXT")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config, inferred widths, block spans)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (only errors are printed)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        path: matches
            .get_one::<PathBuf>("path")
            .cloned()
            .unwrap_or_default(),
        indent_width: matches.get_one::<usize>("indent-width").copied(),
        no_tabs: matches.get_flag("no-tabs"),
        no_indent: matches.get_flag("no-indent"),
        no_docu: matches.get_flag("no-docu"),
        simulate: matches.get_flag("simulate"),
        exclude: matches
            .get_many::<String>("exclude")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        skip_extensions: matches
            .get_many::<String>("skip-ext")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        debug: matches.get_flag("debug"),
        silent: matches.get_flag("silent"),
    }
}
