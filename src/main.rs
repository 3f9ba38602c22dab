//! # dev
//!
//! Developer tasks for the CMake project.
//!
//! ## Usage
//!
//! ```bash
//! dev build    # cmake configure + build + install, output teed to build.log
//! dev clean    # remove build/ and local/
//! ```

use anyhow::Result;
use clap::Parser;
use std::process;

mod build;
mod clean;
mod cli;
mod runner;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders the usage text; bad invocations exit 1, --help exits 0
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:?}");
        let code = err
            .downcast_ref::<runner::CommandFailed>()
            .map_or(1, runner::CommandFailed::code);
        process::exit(code);
    }
}

fn run(cli: cli::Cli) -> Result<()> {
    let root = std::env::current_dir()?;
    match cli.cmd {
        cli::Cmd::Build => build::build(&root),
        cli::Cmd::Clean => clean::clean(&root),
    }
}
