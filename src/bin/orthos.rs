//! orthos CLI binary.

use std::process;

use clap::Parser;
use orthos::cli::{args::*, commands::*};
use orthos::observability::{TracingConfig, init_tracing};

fn main() {
    let args = OrthosArgs::parse();

    init_tracing(TracingConfig::for_verbosity(args.verbosity()));

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
