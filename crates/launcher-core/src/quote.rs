//! Command line rendering
//!
//! Launching never goes through a shell: the argv is handed to the spawn
//! primitive element by element. These helpers only render that argv as a
//! single string (debug logs, `doctor` output) in a form the host shell would
//! split back into the same elements.

use std::ffi::OsStr;
use std::iter;

/// Quote one argument for a POSIX shell
pub fn quote_posix(arg: &str) -> String {
    let quoted = shell_words::quote(arg);
    // shell-words leaves these bare, but shells still expand them
    if quoted == arg && arg.contains(['~', '{', '}', '!']) {
        return format!("'{arg}'");
    }
    quoted.into_owned()
}

/// Quote one argument following the MSVCRT argv parsing rules
pub fn quote_windows(arg: &str) -> String {
    let needs_quotes = arg.is_empty()
        || arg
            .chars()
            .any(|c| matches!(c, ' ' | '\t' | '\n' | '\x0b' | '"'));
    if !needs_quotes {
        return arg.to_string();
    }

    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    let mut backslashes = 0usize;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                out.extend(iter::repeat('\\').take(backslashes * 2 + 1));
                out.push('"');
                backslashes = 0;
            }
            _ => {
                out.extend(iter::repeat('\\').take(backslashes));
                out.push(c);
                backslashes = 0;
            }
        }
    }
    // Backslashes before the closing quote must not escape it
    out.extend(iter::repeat('\\').take(backslashes * 2));
    out.push('"');
    out
}

/// Quote one argument for the host platform
pub fn quote(arg: &str) -> String {
    if cfg!(windows) {
        quote_windows(arg)
    } else {
        quote_posix(arg)
    }
}

/// Render a full argv as one command string for the host platform
pub fn render_command_line<S: AsRef<OsStr>>(argv: &[S]) -> String {
    argv.iter()
        .map(|arg| quote(&arg.as_ref().to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ")
}
