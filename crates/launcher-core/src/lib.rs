//! Launcher Core - Shared library for the vendored Lua tool launchers
//!
//! This library resolves a Lua 5.1 interpreter, builds the argument vector for a
//! vendored tool (busted, luacheck), runs it as a child process with inherited
//! standard streams and hands back the child's exit status. It is used by the
//! `run-busted`, `run-luacheck` and `lua-tools` binaries, which differ only in the
//! [`ToolConfig`] they pass in.
//!
//! # Architecture
//!
//! - **Resolution** - Pure functions over an [`EnvLookup`] capability for the
//!   interpreter path and repository root
//! - **Construction** - [`LaunchSpec`] assembles the argv, including the one-shot
//!   `package.path` expression for tools that need extra search paths
//! - **Execution** - [`launch`] spawns exactly one child and returns a
//!   [`LaunchOutcome`]; the binary decides when to exit
//!
//! # Feature Flags
//!
//! - `doctor` (default): Enables interpreter version checking via `semver`
//!
//! # Example Usage
//!
//! ```ignore
//! use launcher_core::{tool::Luacheck, ProcessEnv};
//!
//! let env = ProcessEnv;
//! let args = std::env::args_os().skip(1).collect();
//! let outcome = launcher_core::run_tool(&Luacheck, &env, args).await?;
//! std::process::exit(outcome.exit_code);
//! ```

pub mod cli;
pub mod env;
pub mod error;
pub mod interpreter;
pub mod launch;
pub mod logging;
pub mod quote;
pub mod root;
pub mod search_path;
pub mod spec;
pub mod tool;

#[cfg(feature = "doctor")]
pub mod doctor;

// Re-export main types for convenience
pub use cli::{run_tool, ForwardArgs};
pub use env::{EnvLookup, ProcessEnv};
pub use error::LaunchError;
pub use interpreter::resolve_interpreter;
pub use launch::{launch, LaunchOutcome, FAILURE_EXIT_CODE};
pub use root::resolve_root;
pub use spec::LaunchSpec;
pub use tool::ToolConfig;
