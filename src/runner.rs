//! Subprocess runner that tees child stdout to the console and a log sink.

use anyhow::{Context, Result};
use std::fmt;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// A spawned command exited with a non-zero status.
#[derive(Debug)]
pub struct CommandFailed {
    command: Vec<String>,
    code: i32,
}

impl CommandFailed {
    pub fn code(&self) -> i32 {
        self.code
    }

    #[cfg(test)]
    pub fn command(&self) -> &[String] {
        &self.command
    }
}

impl fmt::Display for CommandFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "command `{}` exited with status {}",
            self.command.join(" "),
            self.code
        )
    }
}

impl std::error::Error for CommandFailed {}

/// Run `argv` in `dir`, copying every line of the child's stdout to our own
/// stdout and to `sink` before the next line is read, so both destinations
/// track a long-running build in real time.
///
/// Lines are copied byte-for-byte, trailing newline included as produced by
/// the child. stderr is not redirected and stays on the console.
pub fn run<W: Write>(dir: &Path, argv: &[&str], sink: &mut W) -> Result<()> {
    let (program, args) = argv.split_first().context("Empty command")?;

    let mut child = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("Spawning {program}"))?;

    // stdout is piped above, so the handle is always present
    let stdout = child.stdout.take().context("Child stdout not captured")?;
    let mut reader = BufReader::new(stdout);
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let mut console = io::stdout().lock();
        console.write_all(&line)?;
        console.flush()?;
        sink.write_all(&line)?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Waiting for {program}"))?;
    if !status.success() {
        let command = argv.iter().map(|s| (*s).to_string()).collect();
        return Err(CommandFailed {
            command,
            code: status.code().unwrap_or(1),
        }
        .into());
    }
    Ok(())
}
