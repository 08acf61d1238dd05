mod batch;
mod cli;
mod editor;
mod file_utils;
mod logger;
mod mpeg;
mod prompt;
mod session;

use crate::{cli::Cli, cli::LogConfig, logger::Logger, prompt::Prompter};
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = LogConfig::from_cli(&cli);

    let prompt_out: Box<dyn Write> = if config.prompts_to_stderr() {
        Box::new(std::io::stderr().lock())
    } else {
        Box::new(std::io::stdout().lock())
    };
    let logger = Logger::new(config);
    let mut prompter = Prompter::new(std::io::stdin().lock(), prompt_out);

    let outcome = session::run(&mut prompter, &logger)?;
    logger.debug(&format!("Session finished: {:?}", outcome));

    Ok(())
}
