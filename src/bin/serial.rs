//! Single-orbit reference renderer. Given the same `--seed` it produces
//! the same image on every run.

use clap::Parser;
use flame::cli::{self, Mode, RenderArgs};

fn main() {
    cli::init_logging();
    let args = RenderArgs::parse();
    if let Err(e) = cli::run(&args, Mode::Serial) {
        eprintln!("Error rendering flame: {}", e);
        std::process::exit(1);
    }
}
