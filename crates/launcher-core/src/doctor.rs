//! Environment checks for the Lua tool launchers
//!
//! Reports whether the resolved interpreter runs and is a Lua 5.1, and whether
//! each tool's entry point exists under the repository root.

use crate::env::EnvLookup;
use crate::interpreter::resolve_interpreter;
use crate::quote::render_command_line;
use crate::root::resolve_root;
use crate::tool::ToolConfig;
use colored::Colorize;
use semver::{Version, VersionReq};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Interpreter series the vendored tools are written against
pub const REQUIRED_LUA_VERSION: &str = "~5.1";

/// Interpreter detection result
#[derive(Debug, Clone)]
pub struct InterpreterInfo {
    pub path: PathBuf,
    pub banner: Option<String>,
    pub version: Option<Version>,
    pub available: bool,
}

impl InterpreterInfo {
    /// Whether the detected version is in the required series
    pub fn is_supported(&self) -> bool {
        self.version.as_ref().is_some_and(is_supported_version)
    }
}

/// Per-tool check result
#[derive(Debug, Clone)]
pub struct ToolReport {
    pub name: &'static str,
    pub root: PathBuf,
    pub entry_point: PathBuf,
    pub entry_point_present: bool,
    pub command_line: String,
}

/// Full doctor report
#[derive(Debug, Clone)]
pub struct DoctorReport {
    pub interpreter: InterpreterInfo,
    pub tools: Vec<ToolReport>,
}

impl DoctorReport {
    /// Interpreter is usable and every entry point exists
    pub fn healthy(&self) -> bool {
        self.interpreter.available
            && self.interpreter.is_supported()
            && self.tools.iter().all(|t| t.entry_point_present)
    }

    /// Print the report to stdout
    pub fn print(&self) {
        let interp = &self.interpreter;
        println!("{}", "Interpreter".bold());
        println!("  {} {}", "path:".dimmed(), interp.path.display());
        match (&interp.banner, interp.available) {
            (Some(banner), true) if interp.is_supported() => {
                println!("  {} {}", "✓".green(), banner)
            }
            (Some(banner), true) => println!(
                "  {} {} (need Lua {})",
                "✗".red(),
                banner,
                REQUIRED_LUA_VERSION.trim_start_matches('~')
            ),
            _ => println!("  {} {}", "✗".red(), "not found or failed to run".red()),
        }

        for tool in &self.tools {
            println!();
            println!("{}", tool.name.bold());
            println!("  {} {}", "root:".dimmed(), tool.root.display());
            if tool.entry_point_present {
                println!("  {} {}", "✓".green(), tool.entry_point.display());
            } else {
                println!(
                    "  {} {} {}",
                    "✗".red(),
                    tool.entry_point.display(),
                    "(missing)".red()
                );
            }
            println!("  {} {}", "runs:".dimmed(), tool.command_line.yellow());
        }
    }
}

/// Whether `version` is in the required Lua series
pub fn is_supported_version(version: &Version) -> bool {
    VersionReq::parse(REQUIRED_LUA_VERSION)
        .map(|req| req.matches(version))
        .unwrap_or(false)
}

/// Extract the version from a `lua -v` banner such as
/// `Lua 5.1.5  Copyright (C) 1994-2012 Lua.org, PUC-Rio`
pub fn parse_lua_version(banner: &str) -> Option<Version> {
    let mut words = banner.split_whitespace();
    words.find(|w| *w == "Lua")?;
    let raw = words.next()?;

    let normalized = match raw.split('.').count() {
        2 => format!("{raw}.0"),
        3 => raw.to_string(),
        _ => return None,
    };
    Version::parse(&normalized).ok()
}

/// Run `<interpreter> -v` and parse its banner
///
/// Lua 5.1 prints the banner on stderr, later versions on stdout; both are read.
pub fn check_interpreter(path: &Path) -> InterpreterInfo {
    let output = Command::new(path).arg("-v").output();

    match output {
        Ok(out) if out.status.success() => {
            let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&out.stderr));
            let banner = text.lines().map(str::trim).find(|l| !l.is_empty());
            InterpreterInfo {
                path: path.to_path_buf(),
                version: banner.and_then(parse_lua_version),
                banner: banner.map(str::to_string),
                available: true,
            }
        }
        _ => InterpreterInfo {
            path: path.to_path_buf(),
            banner: None,
            version: None,
            available: false,
        },
    }
}

/// Check the interpreter and every tool in `tools`
pub fn run_doctor(env: &impl EnvLookup, cwd: &Path, tools: &[&dyn ToolConfig]) -> DoctorReport {
    let interpreter_path = resolve_interpreter(env);
    let interpreter = check_interpreter(&interpreter_path);

    let tools = tools
        .iter()
        .map(|tool| {
            let root = resolve_root(env, tool.root_marker(), cwd);
            let spec = tool.launch_spec(&root, interpreter_path.clone(), Vec::<OsString>::new());
            ToolReport {
                name: tool.display_name(),
                entry_point_present: spec.entry_point.is_file(),
                command_line: render_command_line(&spec.argv()),
                entry_point: spec.entry_point,
                root,
            }
        })
        .collect();

    DoctorReport { interpreter, tools }
}
