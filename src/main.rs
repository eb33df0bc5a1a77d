use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use leveled_logger::{LeveledLogger, errorf, fatalf, infof};
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};

/// Writes leveled log lines to stderr or to a file.
#[derive(Parser)]
#[command(name = "leveled-logger", version)]
struct Cli {
    /// Append to this file instead of writing to stderr.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Let debug lines through.
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write one message at the given level.
    Emit {
        #[arg(value_enum)]
        level: EmitLevel,
        words: Vec<String>,
    },
    /// Write the message with a stack dump and exit with a failure status.
    Fatal { words: Vec<String> },
}

#[derive(Clone, Copy, ValueEnum)]
enum EmitLevel {
    Info,
    Warning,
    Error,
    Debug,
}

fn open_sink(output: Option<&PathBuf>) -> Result<Box<dyn Write + Send>> {
    match output {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stderr())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = LeveledLogger::new(open_sink(cli.output.as_ref())?);

    match cli.command {
        Command::Emit { level, words } => {
            let message = words.join(" ");
            match level {
                EmitLevel::Info => infof!(logger, "{message}"),
                EmitLevel::Warning => logger.warning(&message),
                EmitLevel::Error => errorf!(logger, "{message}"),
                EmitLevel::Debug => logger.debug(cli.debug, &message),
            }
        }
        Command::Fatal { words } => fatalf!(logger, "{}", words.join(" ")),
    }

    Ok(())
}
