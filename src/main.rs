use appenv::cli::{run, Cli};
use clap::Parser;

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
