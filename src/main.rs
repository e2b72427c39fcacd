use clap::Parser;
use flame::cli::{self, Mode, RenderArgs};

fn main() {
    cli::init_logging();
    let args = RenderArgs::parse();
    if let Err(e) = cli::run(&args, Mode::Parallel) {
        eprintln!("Error rendering flame: {}", e);
        std::process::exit(1);
    }
}
