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

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use trident_pools::{EtherscanVerifier, PoolParams, PoolVerification};

use super::CppContext;
use crate::{
    config::{EtherscanConfig, GlobalConfig, NetworkConfig, PoolArgs},
    display::DisplayManager,
};

/// Verify the source of a deployed constant-product pool on the block explorer
#[derive(Args, Clone, Debug)]
pub struct CppVerify {
    /// Pool parameters
    #[clap(flatten)]
    pub pool: PoolArgs,

    /// Network and deployment configuration
    #[clap(flatten, next_help_heading = "Network")]
    pub network_config: NetworkConfig,

    /// Block explorer configuration
    #[clap(flatten, next_help_heading = "Explorer")]
    pub etherscan_config: EtherscanConfig,
}

impl CppVerify {
    /// Run the command
    pub async fn run(&self, global_config: &GlobalConfig) -> Result<()> {
        let ctx = CppContext::load(&self.network_config, global_config)?;
        let pool = PoolParams::from(&self.pool).resolve(&ctx.deployment);
        let resolver = ctx.resolver(&self.network_config)?;

        let contract = &self.network_config.contract;
        let source = ctx
            .project
            .build_info(contract)
            .with_context(|| format!("Failed to load the build info of {contract}"))?
            .contract_source(contract);
        let api_url = match &self.etherscan_config.etherscan_api_url {
            Some(url) => url.clone(),
            None => ctx.deployment.explorer_api_url.parse().with_context(|| {
                format!("Invalid explorer API URL for network '{}'", ctx.network)
            })?,
        };
        let verifier = EtherscanVerifier::new(
            api_url,
            self.etherscan_config.require_api_key()?,
            source,
            self.etherscan_config.http_timeout,
        )?
        .with_poll_interval(self.etherscan_config.poll_interval)
        .with_max_polls(self.etherscan_config.max_polls);

        let pipeline = PoolVerification::new(resolver, Arc::new(verifier), ctx.master_deployer);
        let display = DisplayManager::with_network(&ctx.network);
        let (resolved, receipt) = pipeline
            .run(&pool, |resolved| println!("Verify cpp {:#x}", resolved.address()))
            .await
            .with_context(|| format!("Failed to verify pool {pool}"))?;

        display.pool(resolved.pool());
        display.item("Submission", &receipt.guid);
        display.success(&format!("Verified pool {:#x}", resolved.address()));
        Ok(())
    }
}
