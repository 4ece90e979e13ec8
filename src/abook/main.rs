use abook::api::AbookApi;
use abook::config::{resolve_config_dir, AbookConfig};
use abook::error::Result;
use abook::logging::init_logger;
use abook::repl;
use clap::Parser;
use std::io;
use tracing::{debug, info};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match resolve_config_dir(cli.config_dir) {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading config");
            AbookConfig::load(&dir)?
        }
        None => AbookConfig::default(),
    };

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    info!("starting session");
    let mut api = AbookApi::default();
    let stdin = io::stdin();
    repl::run(&mut api, &config.prompt, stdin.lock(), io::stdout().lock())
}
