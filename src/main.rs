use clap::Parser;
use puckval::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
