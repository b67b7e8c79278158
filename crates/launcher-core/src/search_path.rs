//! Lua module search path injection
//!
//! Extra `package.path` entries are prepended through a one-shot `-e` chunk
//! rather than `LUA_PATH`, which sibling processes would inherit.

use std::path::Path;
use tracing::warn;

/// Separator between `package.path` templates
pub const PATH_LIST_SEPARATOR: char = ';';

/// Join path templates with `;` and normalize separators to `/`
///
/// The chunk is Lua source text, so templates must be valid UTF-8. Invalid
/// sequences (e.g. a non-UTF-8 repository root) are replaced with U+FFFD and a
/// warning is logged; Lua will then not find modules under that template.
pub fn join_search_paths<P: AsRef<Path>>(templates: &[P]) -> String {
    templates
        .iter()
        .map(|t| {
            let template = t.as_ref();
            if template.to_str().is_none() {
                warn!(
                    template = %template.display(),
                    "search path is not valid UTF-8; Lua will not resolve modules under it"
                );
            }
            template.to_string_lossy().into_owned()
        })
        .collect::<Vec<_>>()
        .join(&PATH_LIST_SEPARATOR.to_string())
        .replace('\\', "/")
}

/// Lua chunk prepending `templates` to `package.path`
///
/// Returns `None` for an empty template list.
pub fn package_path_chunk<P: AsRef<Path>>(templates: &[P]) -> Option<String> {
    if templates.is_empty() {
        return None;
    }

    let joined = escape_lua_single_quoted(&join_search_paths(templates));
    Some(format!("package.path='{joined}{PATH_LIST_SEPARATOR}'..package.path"))
}

/// Interpreter flags that apply the search path chunk (`-e <chunk>`)
pub fn interpreter_flags<P: AsRef<Path>>(templates: &[P]) -> Vec<String> {
    package_path_chunk(templates)
        .map(|chunk| vec!["-e".to_string(), chunk])
        .unwrap_or_default()
}

fn escape_lua_single_quoted(s: &str) -> String {
    s.replace('\'', "\\'")
}
