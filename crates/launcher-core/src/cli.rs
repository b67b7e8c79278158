//! Shared launcher entry logic for the binaries

use crate::env::EnvLookup;
use crate::error::LaunchError;
use crate::interpreter::{resolve_interpreter, INTERPRETER_DIR_ENV};
use crate::launch::{launch, LaunchOutcome};
use crate::root::resolve_root;
use crate::tool::ToolConfig;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::ffi::OsString;
use tracing::{debug, warn};

/// Free-form arguments forwarded to a tool
#[derive(Args, Debug, Default, Clone)]
pub struct ForwardArgs {
    /// Arguments passed through to the tool unchanged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

/// Resolve, launch and report one tool run
///
/// Returns the outcome for the caller to exit with. Errors are limited to
/// setup failures before anything was spawned.
pub async fn run_tool<T: ToolConfig + ?Sized>(
    tool: &T,
    env: &impl EnvLookup,
    args: Vec<OsString>,
) -> Result<LaunchOutcome> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let root = resolve_root(env, tool.root_marker(), &cwd);
    let interpreter = resolve_interpreter(env);
    debug!(
        tool = tool.name(),
        root = %root.display(),
        interpreter = %interpreter.display(),
        "resolved launch"
    );

    let spec = tool.launch_spec(&root, interpreter, args);
    if !spec.entry_point.exists() {
        warn!(
            entry_point = %spec.entry_point.display(),
            "{} entry point not found",
            tool.display_name()
        );
    }

    ignore_interrupts();
    let outcome = launch(&spec).await;

    if let Some(error) = &outcome.spawn_error {
        eprintln!("{} {}", "error:".red().bold(), error);
        if matches!(error, LaunchError::Spawn { .. }) {
            eprintln!(
                "{}",
                format!(
                    "Set {} to your Lua 5.1 installation directory.",
                    INTERPRETER_DIR_ENV
                )
                .dimmed()
            );
        }
    }

    Ok(outcome)
}

/// Let Ctrl+C reach the child only; its exit status is relayed afterwards
fn ignore_interrupts() {
    ctrlc::set_handler(|| {}).ok();
}
