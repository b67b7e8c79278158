//! Repository root discovery
//!
//! The vendored tools live at fixed places under the repository root, so the
//! launchers look for a marker path (e.g. `luacheck-src`) from the current
//! directory upward. `LUA_TOOLS_ROOT` short-circuits the search.

use crate::env::EnvLookup;
use std::path::{Path, PathBuf};

/// Environment variable overriding the repository root
pub const ROOT_ENV: &str = "LUA_TOOLS_ROOT";

/// Resolve the repository root for a tool whose vendored copy is at `marker`
///
/// Falls back to `cwd` when no ancestor contains the marker.
pub fn resolve_root(env: &impl EnvLookup, marker: &str, cwd: &Path) -> PathBuf {
    if let Some(root) = env.non_empty(ROOT_ENV) {
        return PathBuf::from(root);
    }

    find_marker_root(marker, cwd).unwrap_or_else(|| cwd.to_path_buf())
}

/// Nearest ancestor of `start` (inclusive) that contains `marker`
pub fn find_marker_root(marker: &str, start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).exists())
        .map(Path::to_path_buf)
}
