//! Launch tests against real child processes
//!
//! `/bin/sh` stands in for the Lua interpreter: the entry point is a shell
//! script, so argv order, working directory and exit codes can be observed.
#![cfg(unix)]

use launcher_core::tool::{Busted, Luacheck, ToolConfig};
use launcher_core::{launch, run_tool, LaunchError, LaunchSpec, FAILURE_EXIT_CODE};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sh_spec(dir: &Path, script: &str, args: &[&str]) -> LaunchSpec {
    let entry = dir.join("entry.sh");
    fs::write(&entry, script).unwrap();
    LaunchSpec {
        interpreter_path: PathBuf::from("/bin/sh"),
        working_directory: dir.to_path_buf(),
        entry_point: entry,
        tool_search_paths: Vec::new(),
        fixed_args: Vec::new(),
        forwarded_arguments: args.iter().map(OsString::from).collect(),
    }
}

#[tokio::test]
async fn test_exit_code_propagates() {
    let tmp = TempDir::new().unwrap();
    for code in [0, 1, 2, 42, 127, 255] {
        let arg = code.to_string();
        let spec = sh_spec(tmp.path(), "exit \"$1\"\n", &[arg.as_str()]);
        let outcome = launch(&spec).await;
        assert_eq!(outcome.exit_code, code, "child exited with {code}");
        assert!(outcome.spawn_error.is_none());
    }
}

#[tokio::test]
async fn test_missing_interpreter_exits_with_failure_code() {
    let tmp = TempDir::new().unwrap();
    let mut spec = sh_spec(tmp.path(), "exit 0\n", &[]);
    spec.interpreter_path = tmp.path().join("no-such-dir").join("lua");

    let outcome = launch(&spec).await;
    assert_eq!(outcome.exit_code, FAILURE_EXIT_CODE);
    assert!(matches!(outcome.spawn_error, Some(LaunchError::Spawn { .. })));
}

#[tokio::test]
async fn test_signal_death_exits_with_failure_code() {
    let tmp = TempDir::new().unwrap();
    let spec = sh_spec(tmp.path(), "kill -9 $$\n", &[]);

    let outcome = launch(&spec).await;
    assert_eq!(outcome.exit_code, FAILURE_EXIT_CODE);
    assert!(matches!(outcome.spawn_error, Some(LaunchError::NoStatus { .. })));
}

#[tokio::test]
async fn test_arguments_arrive_unsplit_in_order() {
    let tmp = TempDir::new().unwrap();
    let mut spec = sh_spec(
        tmp.path(),
        "printf '%s\\n' \"$@\" > args.txt\n",
        &["My Addon", "it's", "$HOME", "*.lua"],
    );
    spec.fixed_args = vec![OsString::from("-q")];

    let outcome = launch(&spec).await;
    assert_eq!(outcome.exit_code, 0);

    let recorded = fs::read_to_string(tmp.path().join("args.txt")).unwrap();
    let recorded: Vec<&str> = recorded.lines().collect();
    assert_eq!(recorded, vec!["-q", "My Addon", "it's", "$HOME", "*.lua"]);
}

#[tokio::test]
async fn test_child_runs_in_working_directory() {
    let tmp = TempDir::new().unwrap();
    let work = tmp.path().join("repo root");
    fs::create_dir_all(&work).unwrap();
    let spec = sh_spec(&work, "pwd -P > cwd.txt\n", &[]);

    let outcome = launch(&spec).await;
    assert_eq!(outcome.exit_code, 0);

    let recorded = fs::read_to_string(work.join("cwd.txt")).unwrap();
    assert_eq!(
        PathBuf::from(recorded.trim_end()),
        fs::canonicalize(&work).unwrap()
    );
}

/// Lay out a repository with `lua` symlinked to `/bin/sh` and a bootstrap
/// script in place of busted
fn fake_busted_repo(bootstrap: &str) -> (TempDir, HashMap<String, String>) {
    let tmp = TempDir::new().unwrap();
    let lua_dir = tmp.path().join("lua51");
    fs::create_dir_all(&lua_dir).unwrap();
    std::os::unix::fs::symlink("/bin/sh", lua_dir.join("lua")).unwrap();

    let root = tmp.path().join("repo");
    fs::create_dir_all(root.join("scripts")).unwrap();
    fs::create_dir_all(root.join("busted-2.1.1")).unwrap();
    fs::write(root.join("scripts").join("busted_bootstrap.lua"), bootstrap).unwrap();

    let mut env = HashMap::new();
    env.insert("LUA_51_PATH".to_string(), lua_dir.to_string_lossy().into_owned());
    env.insert("LUA_TOOLS_ROOT".to_string(), root.to_string_lossy().into_owned());
    (tmp, env)
}

#[tokio::test]
async fn test_run_tool_uses_configured_interpreter() {
    let (tmp, env) = fake_busted_repo("printf '%s\\n' \"$#\" > count.txt\nexit 7\n");

    let outcome = run_tool(&Busted, &env, Vec::new()).await.unwrap();
    assert_eq!(outcome.exit_code, 7);

    let count = fs::read_to_string(tmp.path().join("repo").join("count.txt")).unwrap();
    assert_eq!(count.trim(), "0");
}

#[tokio::test]
async fn test_run_tool_forwards_caller_arguments() {
    let (tmp, env) = fake_busted_repo("printf '%s\\n' \"$@\" > args.txt\n");
    let args = vec![OsString::from("--tags=unit"), OsString::from("spec/core spec.lua")];

    let outcome = run_tool(&Busted, &env, args).await.unwrap();
    assert!(outcome.success());

    let recorded = fs::read_to_string(tmp.path().join("repo").join("args.txt")).unwrap();
    assert_eq!(recorded.lines().collect::<Vec<_>>(), vec!["--tags=unit", "spec/core spec.lua"]);
}

#[tokio::test]
async fn test_run_tool_missing_interpreter() {
    let (tmp, mut env) = fake_busted_repo("exit 0\n");
    env.insert(
        "LUA_51_PATH".to_string(),
        tmp.path().join("missing").to_string_lossy().into_owned(),
    );

    let outcome = run_tool(&Busted, &env, Vec::new()).await.unwrap();
    assert_eq!(outcome.exit_code, FAILURE_EXIT_CODE);
    assert!(!outcome.success());
}

/// Install an executable `lua` script in `dir`
///
/// The file is copied by a separate process so no write handle to it is ever
/// open here when it gets executed.
fn install_fake_lua(dir: &Path, script: &str) {
    fs::write(dir.join("lua.src"), script).unwrap();
    let status = std::process::Command::new("/bin/sh")
        .arg("-c")
        .arg("cp lua.src lua && chmod 755 lua")
        .current_dir(dir)
        .status()
        .unwrap();
    assert!(status.success());
}

#[tokio::test]
async fn test_run_tool_luacheck_default_layout() {
    let tmp = TempDir::new().unwrap();
    let lua_dir = tmp.path().join("lua51");
    fs::create_dir_all(&lua_dir).unwrap();
    install_fake_lua(&lua_dir, "#!/bin/sh\nprintf '%s\\n' \"$@\" > argv.txt\nexit 3\n");

    let root = tmp.path().join("repo");
    fs::create_dir_all(root.join("luacheck-src").join("bin")).unwrap();
    fs::write(root.join("luacheck-src").join("bin").join("luacheck.lua"), "-- luacheck").unwrap();

    let mut env = HashMap::new();
    env.insert("LUA_51_PATH".to_string(), lua_dir.to_string_lossy().into_owned());
    env.insert("LUA_TOOLS_ROOT".to_string(), root.to_string_lossy().into_owned());

    let outcome = run_tool(&Luacheck, &env, Vec::new()).await.unwrap();
    assert_eq!(outcome.exit_code, 3);
    assert!(outcome.spawn_error.is_none());

    let src = root.join("luacheck-src");
    let chunk = format!(
        "package.path='{};{};{};'..package.path",
        src.join("src").join("?.lua").display(),
        src.join("src").join("?").join("init.lua").display(),
        src.join("?.lua").display(),
    );
    let entry = src.join("bin").join("luacheck.lua");
    let entry = entry.to_string_lossy();

    let recorded = fs::read_to_string(root.join("argv.txt")).unwrap();
    assert_eq!(
        recorded.lines().collect::<Vec<_>>(),
        vec!["-e", chunk.as_str(), entry.as_ref(), "-q", "AltArmy_TBC"]
    );
}

#[test]
fn test_busted_spec_uses_bootstrap_entry() {
    let spec = Busted.launch_spec(Path::new("/repo"), PathBuf::from("/bin/sh"), Vec::new());
    assert_eq!(spec.entry_point, PathBuf::from("/repo/scripts/busted_bootstrap.lua"));
}
