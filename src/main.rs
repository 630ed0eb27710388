//! codefmt - Batch normalizer for source file whitespace and documentation blocks

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io;

use anyhow::Context;
use codefmt::process::file_line;
use codefmt::{parse_args, run, CliArgs, Config, Result};
use tracing::{debug, Level};

fn main() -> Result<()> {
    let args = parse_args();
    init_logging(&args);

    if !args.path.exists() {
        anyhow::bail!("path does not exist: {}", args.path.display());
    }

    let config = build_config(&args)?;
    if !args.silent && args.simulate {
        eprintln!("Simulating: no files will be written.");
    }

    let summary = run(&args.path, &config, args.simulate, |report| {
        if report.is_dirty() && !args.silent {
            println!("{}", file_line(report, args.simulate));
        }
    })
    .context("run aborted")?;

    if !args.silent {
        println!("{summary}");
    }

    Ok(())
}

/// Route tracing output to stderr at a level chosen by `--debug` / `--silent`
fn init_logging(args: &CliArgs) {
    let level = if args.debug {
        Level::DEBUG
    } else if args.silent {
        Level::ERROR
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Build configuration from CLI args and optional config file
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        debug!("using explicit config file: {}", config_path.display());
        Config::from_toml_file(config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?
    } else {
        let discovered = Config::discover_config_files(&args.path);
        for f in &discovered {
            debug!("discovered config file: {}", f.display());
        }
        Config::from_discovered_files(&args.path)
    };

    // Override with CLI arguments
    if let Some(width) = args.indent_width {
        config.indent_width = width;
    }
    if args.no_tabs {
        config.replace_tabs = false;
    }
    if args.no_indent {
        config.fix_indent = false;
    }
    if args.no_docu {
        config.fix_docu = false;
    }
    for pattern in &args.exclude {
        config.exclude.push(pattern.clone());
    }
    for ext in &args.skip_extensions {
        config
            .excluded_extensions
            .push(ext.trim_start_matches('.').to_string());
    }

    debug!(?config, "effective configuration");

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}
