//! Environment lookup capability
//!
//! Resolution functions take an [`EnvLookup`] instead of reading the process
//! environment directly, so tests can supply a plain map.

use std::collections::HashMap;
use std::ffi::OsString;

/// Read-only access to environment variables
pub trait EnvLookup {
    /// Value of `key`, or `None` when unset
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Value of `key`, treating an empty value as unset
    fn non_empty(&self, key: &str) -> Option<OsString> {
        self.var_os(key).filter(|value| !value.is_empty())
    }
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.get(key).map(OsString::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_lookup() {
        let mut env = HashMap::new();
        env.insert("LUA_51_PATH".to_string(), "/opt/lua".to_string());
        assert_eq!(env.var_os("LUA_51_PATH"), Some(OsString::from("/opt/lua")));
        assert_eq!(env.var_os("MISSING"), None);
    }

    #[test]
    fn test_empty_value_is_unset() {
        let mut env = HashMap::new();
        env.insert("LUA_51_PATH".to_string(), String::new());
        assert_eq!(env.var_os("LUA_51_PATH"), Some(OsString::new()));
        assert_eq!(env.non_empty("LUA_51_PATH"), None);
    }
}
