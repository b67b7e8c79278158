//! Tool configuration trait and the vendored tool presets
//!
//! Each launcher binary picks one [`ToolConfig`]; everything else about the
//! launch (interpreter resolution, argv layout, exit handling) is shared.

use crate::spec::LaunchSpec;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Configuration trait for a vendored tool
///
/// Implementations define:
/// - Tool identity (name, display name)
/// - Where the vendored copy lives relative to the repository root
/// - Extra module search paths and fixed flags
/// - Arguments used when the caller passes none
pub trait ToolConfig: Send + Sync {
    /// Internal tool name (used in logs)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Path relative to the repository root whose presence marks the root
    fn root_marker(&self) -> &'static str;

    /// Script the interpreter runs first
    fn entry_point(&self, root: &Path) -> PathBuf;

    /// Module search path templates to prepend to `package.path`
    fn search_paths(&self, _root: &Path) -> Vec<PathBuf> {
        Vec::new()
    }

    /// Flags always passed to the tool, before forwarded arguments
    fn fixed_args(&self) -> Vec<OsString> {
        Vec::new()
    }

    /// Arguments substituted when the caller supplies none
    fn default_args(&self) -> Vec<OsString> {
        Vec::new()
    }

    /// Assemble the launch specification for one invocation
    fn launch_spec(&self, root: &Path, interpreter: PathBuf, args: Vec<OsString>) -> LaunchSpec {
        let forwarded_arguments = if args.is_empty() {
            self.default_args()
        } else {
            args
        };

        LaunchSpec {
            interpreter_path: interpreter,
            working_directory: root.to_path_buf(),
            entry_point: self.entry_point(root),
            tool_search_paths: self.search_paths(root),
            fixed_args: self.fixed_args(),
            forwarded_arguments,
        }
    }
}

/// Directory holding the vendored busted release
pub const BUSTED_DIR: &str = "busted-2.1.1";

/// Directory holding the vendored luacheck sources
pub const LUACHECK_DIR: &str = "luacheck-src";

/// Target linted when `run-luacheck` is called without arguments
pub const DEFAULT_LINT_TARGET: &str = "AltArmy_TBC";

/// busted unit test runner, started through a bootstrap script that sets `arg`
#[derive(Debug, Clone, Copy, Default)]
pub struct Busted;

impl ToolConfig for Busted {
    fn name(&self) -> &'static str {
        "busted"
    }

    fn display_name(&self) -> &'static str {
        "busted"
    }

    fn root_marker(&self) -> &'static str {
        BUSTED_DIR
    }

    fn entry_point(&self, root: &Path) -> PathBuf {
        root.join("scripts").join("busted_bootstrap.lua")
    }
}

/// luacheck linter, run from source with its modules on `package.path`
#[derive(Debug, Clone, Copy, Default)]
pub struct Luacheck;

impl ToolConfig for Luacheck {
    fn name(&self) -> &'static str {
        "luacheck"
    }

    fn display_name(&self) -> &'static str {
        "luacheck"
    }

    fn root_marker(&self) -> &'static str {
        LUACHECK_DIR
    }

    fn entry_point(&self, root: &Path) -> PathBuf {
        root.join(LUACHECK_DIR).join("bin").join("luacheck.lua")
    }

    fn search_paths(&self, root: &Path) -> Vec<PathBuf> {
        let src = root.join(LUACHECK_DIR);
        vec![
            src.join("src").join("?.lua"),
            src.join("src").join("?").join("init.lua"),
            src.join("?.lua"),
        ]
    }

    fn fixed_args(&self) -> Vec<OsString> {
        vec![OsString::from("-q")]
    }

    fn default_args(&self) -> Vec<OsString> {
        vec![OsString::from(DEFAULT_LINT_TARGET)]
    }
}
