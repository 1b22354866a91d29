// Copyright 2026 Boundless Foundation, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command-line tasks for Trident pool deployments.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trident_cli::{commands::cpp::CppCommands, config::GlobalConfig};

#[derive(Subcommand, Clone, Debug)]
enum Command {
    /// Commands for constant-product pools
    #[command(subcommand)]
    Cpp(Box<CppCommands>),
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "CLI for Trident pool deployments", arg_required_else_help = true)]
struct MainArgs {
    /// Subcommand to run
    #[command(subcommand)]
    command: Command,

    #[command(flatten, next_help_heading = "Global Options")]
    config: GlobalConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Loaded before parsing so that .env values act as argument fallbacks.
    let dotenv = dotenvy::dotenv();

    let args = MainArgs::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(args.config.log_level.into())
                .from_env_lossy(),
        )
        .init();

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment variables from {:?}", path),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => bail!("failed to load .env file: {}", e),
    }

    run(&args).await
}

async fn run(args: &MainArgs) -> Result<()> {
    match &args.command {
        Command::Cpp(cmd) => cmd.run(&args.config).await,
    }
}
