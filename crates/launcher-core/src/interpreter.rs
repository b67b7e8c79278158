//! Lua 5.1 interpreter resolution
//!
//! `LUA_51_PATH` names the installation directory and wins when set. Otherwise
//! a platform default is used. Both launchers resolve through here so one
//! variable configures every tool.

use crate::env::EnvLookup;
use std::path::{Path, PathBuf};

/// Environment variable naming the Lua 5.1 installation directory
pub const INTERPRETER_DIR_ENV: &str = "LUA_51_PATH";

/// Installation directory used when `LUA_51_PATH` is unset
#[cfg(windows)]
pub const DEFAULT_INTERPRETER_DIR: &str = r"C:\Program Files (x86)\Lua\5.1";
#[cfg(not(windows))]
pub const DEFAULT_INTERPRETER_DIR: &str = "/usr/local/bin";

/// File name of the interpreter inside the installation directory
#[cfg(windows)]
pub const INTERPRETER_EXE: &str = "lua.exe";
#[cfg(not(windows))]
pub const INTERPRETER_EXE: &str = "lua";

/// Installation directory: the override verbatim, or the platform default
pub fn resolve_interpreter_dir(env: &impl EnvLookup) -> PathBuf {
    env.non_empty(INTERPRETER_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INTERPRETER_DIR))
}

/// Full path to the interpreter executable
pub fn resolve_interpreter(env: &impl EnvLookup) -> PathBuf {
    interpreter_in(&resolve_interpreter_dir(env))
}

/// Interpreter executable inside an installation directory
pub fn interpreter_in(dir: &Path) -> PathBuf {
    dir.join(INTERPRETER_EXE)
}
