//! ocelgen CLI: replay activity traces into an OCEL document.
//!
//! ```text
//! ocelgen generate --traces traces.json --korean --out ocel.json
//! ocelgen schema > schema.json
//! ```

mod commands;
mod parse;
mod run;

use std::process;

use tracing_subscriber::EnvFilter;

use commands::build_cli;
use parse::{matches_to_action, CliAction};

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    let result = match action {
        CliAction::Generate(args) => run::generate(&args).map(|summary| println!("{}", summary)),
        CliAction::Schema => run::print_schema(&mut std::io::stdout().lock()),
    };

    if let Err(e) = result {
        eprintln!("(error) {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so `ocelgen schema` output stays clean.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
