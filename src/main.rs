//! CLI entry point for aed.

mod app;
mod cli;
#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod test_tree;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();
    app::logging::init(args.is_interactive());
    std::process::exit(app::entry::run(args));
}
