use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use linemark_config::OutputFormat;
use linemark_engine::Lookahead;

/// Classify each line of a markdown document by structural role.
#[derive(Debug, Clone, Parser)]
#[command(name = "linemark", version, about)]
pub struct Cli {
    /// Markdown file to classify, or `-` for stdin
    pub input: PathBuf,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lookahead policy (overrides the config file)
    #[arg(long, value_enum)]
    pub lookahead: Option<LookaheadArg>,

    /// Include matched byte ranges per pattern
    #[arg(long)]
    pub show_ranges: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Yaml,
    Table,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Table => OutputFormat::Table,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LookaheadArg {
    EveryLine,
    FirstLineOnly,
}

impl From<LookaheadArg> for Lookahead {
    fn from(arg: LookaheadArg) -> Self {
        match arg {
            LookaheadArg::EveryLine => Lookahead::EveryLine,
            LookaheadArg::FirstLineOnly => Lookahead::FirstLineOnly,
        }
    }
}
