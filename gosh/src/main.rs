//! `gosh`: an interactive shell with a fixed set of builtins.
//!
//! Reads one command per line from stdin until `exit` or end of input.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gosh::config::{ShellConfig, load_config};
use gosh::{Registry, Shell, exit_codes, logging};
use tracing::debug;

#[derive(Parser)]
#[command(name = "gosh", version, about = "Minimal interactive command shell")]
struct Cli {
    /// Read prompt and farewell settings from this TOML file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the prompt string.
    #[arg(long, value_name = "TEXT")]
    prompt: Option<String>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ShellConfig::default(),
    };
    if let Some(prompt) = cli.prompt {
        config.prompt = prompt;
        config.validate()?;
    }
    debug!(?config, "starting shell");

    let registry = Registry::with_builtins(&config);
    let mut shell = Shell::new(registry, config, io::stdin().lock(), io::stdout(), io::stderr());
    shell.run()
}
