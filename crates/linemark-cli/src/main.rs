use anyhow::{Context, Result, bail};
use clap::Parser;
use linemark_config::{Config, OutputFormat};
use linemark_engine::{Lookahead, PatternRegistry, classify_document, report, split_lines};
use log::LevelFilter;
use std::io::{self, Read, Write};
use std::path::Path;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let source = read_input(&cli)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &config, &source, &mut out)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins over the -v flags
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// An explicit path must exist; the default location is optional.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };

    match loaded {
        Some(config) => {
            log::debug!("loaded config: {config:?}");
            Ok(config)
        }
        None => {
            log::debug!("no config file, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_input(cli: &Cli) -> Result<String> {
    if cli.reads_stdin() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))
}

fn run(cli: &Cli, config: &Config, source: &str, out: &mut impl Write) -> Result<()> {
    let format: OutputFormat = cli.format.map(Into::into).unwrap_or(config.format);
    let lookahead: Lookahead = cli.lookahead.map(Into::into).unwrap_or(config.lookahead);

    let registry = PatternRegistry::compile(&config.patterns())
        .context("Failed to compile pattern registry")?;
    log::debug!("{} patterns compiled", registry.len());

    let lines = split_lines(source);
    let doc = classify_document(&registry, &lines, lookahead);
    let report = report::normalize(&doc, cli.show_ranges);

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, &report)?;
        }
        OutputFormat::Table => {
            let table = report::render_table(&report);
            if !table.is_empty() {
                writeln!(out, "{table}")?;
            }
        }
    }
    Ok(())
}
