//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the signal handler,
//! validates the root, runs the flattener and maps the outcome to an exit status.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use flattener::cli::Args;
use flattener::output as out;
use flattener::{
    CONFIG_ENV, Config, FlattenError, Flattener, default_config_path, load_config_from_xml,
    shutdown,
};

use crate::logging::init_tracing;

/// How the process should exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every file moved (or nothing to do).
    Clean,
    /// The walk finished but some files were left behind or errors were skipped.
    Partial,
    /// No root directory given.
    Usage,
    /// Configuration error or fatal abort.
    Failed,
    /// Stopped by Ctrl-C.
    Interrupted,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Clean => 0,
            RunStatus::Failed => 1,
            RunStatus::Usage => 2,
            RunStatus::Partial => 3,
            RunStatus::Interrupted => 130,
        }
    }
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<RunStatus> {
    if args.print_config {
        print_config_location();
        return Ok(RunStatus::Clean);
    }

    // Defaults < config file < CLI flags.
    let mut cfg = match load_config_from_xml() {
        Ok(loaded) => loaded.unwrap_or_default(),
        Err(e) => {
            out::print_error(&e.to_string());
            return Ok(RunStatus::Failed);
        }
    };
    args.apply_overrides(&mut cfg);

    if cfg.root.as_os_str().is_empty() {
        Args::command().print_help()?;
        println!();
        return Ok(RunStatus::Usage);
    }

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)
        .context("Failed to initialize logging")?;

    // The guard is dropped on SIGINT so buffered file logs are flushed.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; stopping after the current entry...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })?;
    }

    debug!("Starting flattener: {:?}", args);
    let status = flatten_root(&cfg);

    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }
    Ok(status)
}

fn flatten_root(cfg: &Config) -> RunStatus {
    if let Err(e) = cfg.validate() {
        debug!(code = e.code(), kind = e.kind(), error = %e, "Invalid root directory");
        out::print_error(&e.to_string());
        return RunStatus::Failed;
    }

    out::print_user("Starting flattening process");
    let mut flattener = Flattener::new(cfg);
    let outcome = flattener.run();
    let report = flattener.report();

    match outcome {
        Ok(()) => {
            info!(
                dirs = report.dirs_processed,
                succeeded = report.succeeded,
                failed = report.failed,
                "Flattening finished"
            );
            out::print_summary("Finished flattening process with:", report);
            if report.is_clean() {
                RunStatus::Clean
            } else {
                RunStatus::Partial
            }
        }
        Err(FlattenError::Interrupted) => {
            info!(code = FlattenError::Interrupted.code(), kind = "interrupted", "Flattening aborted by user");
            out::print_summary("Interrupted; partial results:", report);
            RunStatus::Interrupted
        }
        Err(e) => {
            info!(code = e.code(), kind = e.kind(), error = %e, "Flattening aborted");
            out::print_error(&e.to_string());
            out::print_summary("Aborted flattening process with:", report);
            RunStatus::Failed
        }
    }
}

fn print_config_location() {
    if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {}\n", cfg_env));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default flattener config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there; built-in defaults are used.");
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
}
