use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "songtag")]
#[command(version = "0.1.0")]
#[command(about = "Batch-edit album metadata and cover art for a folder of MP3 files")]
pub struct Cli {
    /// Show debug output
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,

    /// Only print warnings, errors and the final summary
    #[arg(long, short = 'q', default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for status lines
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Runtime logging configuration derived from CLI flags
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub output_format: OutputFormat,
    pub verbose: bool,
    pub quiet: bool,
}

impl LogConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            output_format: cli.output,
            verbose: cli.verbose,
            quiet: cli.quiet,
        }
    }

    /// JSON output keeps stdout to one event per line, so prompts move to stderr.
    pub fn prompts_to_stderr(&self) -> bool {
        self.output_format == OutputFormat::Json
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            verbose: false,
            quiet: false,
        }
    }
}
