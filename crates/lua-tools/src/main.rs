//! lua-tools - Launch vendored Lua tooling under Lua 5.1

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use launcher_core::doctor::run_doctor;
use launcher_core::tool::{Busted, Luacheck, ToolConfig};
use launcher_core::{ForwardArgs, ProcessEnv};

#[derive(Parser, Debug)]
#[command(name = "lua-tools")]
#[command(about = "Launch vendored Lua tooling (busted, luacheck) under Lua 5.1")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the busted unit tests (arguments are forwarded to busted)
    #[command(disable_help_flag = true)]
    Test(ForwardArgs),
    /// Run luacheck (arguments are forwarded; defaults to AltArmy_TBC)
    #[command(disable_help_flag = true)]
    Lint(ForwardArgs),
    /// Check the Lua interpreter and vendored tool locations
    Doctor,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    launcher_core::logging::init();

    let args = Args::parse();
    let env = ProcessEnv;

    match args.command {
        Command::Test(forward) => {
            let outcome = launcher_core::run_tool(&Busted, &env, forward.args).await?;
            std::process::exit(outcome.exit_code);
        }
        Command::Lint(forward) => {
            let outcome = launcher_core::run_tool(&Luacheck, &env, forward.args).await?;
            std::process::exit(outcome.exit_code);
        }
        Command::Doctor => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            let tools: [&dyn ToolConfig; 2] = [&Busted, &Luacheck];
            let report = run_doctor(&env, &cwd, &tools);
            report.print();

            println!();
            if report.healthy() {
                println!("{}", "All checks passed.".green());
                Ok(())
            } else {
                println!("{}", "Some checks failed.".red());
                std::process::exit(1);
            }
        }
    }
}
