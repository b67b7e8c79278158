//! run-luacheck - Run the vendored luacheck linter under Lua 5.1
//!
//! Arguments are forwarded to luacheck after `-q`; with none, the addon
//! directory `AltArmy_TBC` is linted.

use anyhow::Result;
use launcher_core::tool::Luacheck;
use launcher_core::ProcessEnv;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    launcher_core::logging::init();

    let args = std::env::args_os().skip(1).collect();
    let outcome = launcher_core::run_tool(&Luacheck, &ProcessEnv, args).await?;

    std::process::exit(outcome.exit_code);
}
