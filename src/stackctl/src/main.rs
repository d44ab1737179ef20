#![allow(special_module_name)]
use crate::lib::diagnosis::{diagnose, Diagnosis};
use crate::lib::environment::{Environment, EnvironmentImpl};
use crate::lib::error::StackResult;
use crate::lib::logger::{create_root_logger, LoggingMode};
use crate::util::stderr_wrapper::StderrWriter;
use anyhow::{Context, Error};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

mod commands;
mod lib;
mod util;

/// Manages local multi-container stacks.
#[derive(Parser)]
#[command(name = "stackctl", version, arg_required_else_help = true)]
pub struct CliOpts {
    /// Displays detailed information about operations, including the output of docker compose.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppresses informational messages. -qq limits to errors only; -qqqq disables them all.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    quiet: u8,

    /// The logging mode to use. You can log to stderr, a file, or both.
    #[arg(long = "log", default_value = "stderr", value_parser = ["stderr", "tee", "file"], global = true)]
    logmode: String,

    /// The file to log to, if logging to a file (see --log).
    #[arg(long, global = true)]
    logfile: Option<String>,

    /// The directory holding one subdirectory per stack.
    #[arg(long, env = "STACKCTL_STACKS_DIR", global = true, value_name = "DIR")]
    stacks_dir: Option<PathBuf>,

    /// The docker executable used to run stacks.
    #[arg(long, env = "STACKCTL_DOCKER", global = true, value_name = "PATH")]
    docker: Option<String>,

    #[command(subcommand)]
    command: commands::StackCommand,
}

/// Setup a logger with the proper configuration, based on arguments.
fn setup_logging(opts: &CliOpts) -> StackResult<(i64, slog::Logger)> {
    let verbose_level = opts.verbose as i64 - opts.quiet as i64;

    let logfile = || PathBuf::from(opts.logfile.as_deref().unwrap_or("log.txt"));
    let mode = match opts.logmode.as_str() {
        "tee" => LoggingMode::Tee(logfile()),
        "file" => LoggingMode::File(logfile()),
        _ => LoggingMode::Stderr,
    };

    let log = create_root_logger(verbose_level, mode).context("Failed to open the log file")?;
    Ok((verbose_level, log))
}

fn print_error_and_diagnosis(err: Error, error_diagnosis: Diagnosis) -> std::io::Result<()> {
    let mut stderr = StderrWriter::new();

    for (level, cause) in err.chain().enumerate() {
        let (color, prefix) = if level == 0 {
            (term::color::RED, "Error")
        } else {
            (term::color::YELLOW, "Caused by")
        };
        stderr.label(color, &format!("{prefix}: "))?;
        stderr.line(&cause.to_string())?;
    }

    if let Some(error_explanation) = error_diagnosis.0 {
        stderr.label(term::color::YELLOW, "Error explanation:")?;
        stderr.line("")?;
        stderr.line(&error_explanation)?;
    }
    if let Some(action_suggestion) = error_diagnosis.1 {
        stderr.label(term::color::YELLOW, "How to resolve the error:")?;
        stderr.line("")?;
        stderr.line(&action_suggestion)?;
    }
    Ok(())
}

fn inner_main() -> StackResult {
    let cli_opts = CliOpts::parse();

    let (verbose_level, log) = setup_logging(&cli_opts)?;

    let env = EnvironmentImpl::new(cli_opts.stacks_dir, cli_opts.docker)?
        .with_logger(log)
        .with_verbose_level(verbose_level);

    slog::trace!(
        env.get_logger(),
        "Trace mode enabled. Lots of logs coming up."
    );
    commands::exec(&env, cli_opts.command)
}

fn main() {
    let result = inner_main();
    if let Err(err) = result {
        let error_diagnosis = diagnose(&err);
        // Nothing sensible is left to do if stderr itself is gone.
        let _ = print_error_and_diagnosis(err, error_diagnosis);
        std::process::exit(255);
    }
}
