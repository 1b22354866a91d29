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

use anyhow::{Context, Result};
use clap::Args;
use trident_pools::PoolParams;

use super::CppContext;
use crate::{
    config::{GlobalConfig, NetworkConfig, PoolArgs},
    display::DisplayManager,
};

/// Print the deterministic address of a constant-product pool
#[derive(Args, Clone, Debug)]
pub struct CppAddress {
    /// Pool parameters
    #[clap(flatten)]
    pub pool: PoolArgs,

    /// Network and deployment configuration
    #[clap(flatten, next_help_heading = "Network")]
    pub network_config: NetworkConfig,
}

impl CppAddress {
    /// Run the command
    pub async fn run(&self, global_config: &GlobalConfig) -> Result<()> {
        let ctx = CppContext::load(&self.network_config, global_config)?;
        let pool = PoolParams::from(&self.pool).resolve(&ctx.deployment);
        let resolver = ctx.resolver(&self.network_config)?;

        let address = resolver
            .resolve(&pool)
            .await
            .with_context(|| format!("Failed to resolve the address of pool {pool}"))?;

        let display = DisplayManager::with_network(&ctx.network);
        display.header("Constant Product Pool");
        display.pool(&pool);
        display.address("MasterDeployer", ctx.master_deployer);
        display.address("Pool factory", ctx.pool_factory);
        display.item("Resolver", resolver.name());
        display.address("Address", address);
        display.item("Deploy data", format!("{:#x}", pool.deploy_data().as_bytes()));
        Ok(())
    }
}
