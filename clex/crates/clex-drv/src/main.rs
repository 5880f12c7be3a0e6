use std::error::Error as _;

use clap::Parser;
use clex_drv::{logging, run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.no_color) {
        eprintln!("Warning: {}", e);
    }

    match run(&cli) {
        Ok(summary) if summary.is_clean() => {},
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.usage_hint() {
                eprintln!("{}", hint);
            }
            if let Some(source) = e.source() {
                eprintln!("Details: {}", source);
            }
            std::process::exit(1);
        },
    }
}
