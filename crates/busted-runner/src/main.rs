//! run-busted - Run the vendored busted test suite under Lua 5.1
//!
//! Every argument is forwarded to busted unchanged; with none, busted applies
//! its own defaults.

use anyhow::Result;
use launcher_core::tool::Busted;
use launcher_core::ProcessEnv;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    launcher_core::logging::init();

    let args = std::env::args_os().skip(1).collect();
    let outcome = launcher_core::run_tool(&Busted, &ProcessEnv, args).await?;

    std::process::exit(outcome.exit_code);
}
