use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dev")]
#[command(about = "Developer tasks for the CMake project")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Configure, compile, and install via cmake, logging output to build.log.
    Build,

    /// Remove the build/ and local/ directories.
    Clean,
}
