//! Launch specification for a single tool invocation

use crate::quote::render_command_line;
use crate::search_path::interpreter_flags;
use std::ffi::OsString;
use std::path::PathBuf;

/// Everything needed to run one tool once
///
/// Built fresh per invocation and consumed by [`crate::launch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    /// Interpreter executable
    pub interpreter_path: PathBuf,
    /// Directory the child runs in (repository root)
    pub working_directory: PathBuf,
    /// Script the interpreter executes first
    pub entry_point: PathBuf,
    /// Module search path templates, prepended to `package.path`
    pub tool_search_paths: Vec<PathBuf>,
    /// Tool flags placed between the entry point and forwarded arguments
    pub fixed_args: Vec<OsString>,
    /// Caller arguments (or the tool's defaults), one argv element each
    pub forwarded_arguments: Vec<OsString>,
}

impl LaunchSpec {
    /// Interpreter flags derived from the search paths (`-e <chunk>` or nothing)
    pub fn interpreter_args(&self) -> Vec<String> {
        interpreter_flags(&self.tool_search_paths)
    }

    /// Arguments passed to the interpreter, in order: interpreter flags,
    /// entry point, fixed tool flags, forwarded arguments
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = self
            .interpreter_args()
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(self.entry_point.clone().into_os_string());
        args.extend(self.fixed_args.iter().cloned());
        args.extend(self.forwarded_arguments.iter().cloned());
        args
    }

    /// Full argument vector including the interpreter itself
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = vec![self.interpreter_path.clone().into_os_string()];
        argv.extend(self.args());
        argv
    }

    /// The argv rendered as one command string for the host shell
    pub fn command_line(&self) -> String {
        render_command_line(&self.argv())
    }
}
