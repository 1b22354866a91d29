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

//! Commands for constant-product pools.

mod address;
mod verify;

pub use address::CppAddress;
pub use verify::CppVerify;

use std::sync::Arc;

use alloy::{primitives::Address, providers::ProviderBuilder};
use anyhow::{Context, Result};
use clap::Subcommand;
use trident_pools::{Create2Resolver, Deployment, PoolAddressResolver, RegistryResolver};

use crate::{
    config::{GlobalConfig, NetworkConfig, ResolverKind},
    config_file::Config,
    hardhat::{HardhatProject, MASTER_DEPLOYER, POOL_FACTORY},
};

/// Commands for constant-product pools
#[derive(Subcommand, Clone, Debug)]
#[command(after_help = "\x1b[1;4mConfiguration:\x1b[0m
  Contract addresses are read from the hardhat-deploy deployments of the selected network.

  Alternatively set environment variables:
    \x1b[1mNETWORK\x1b[0m                   Network name (default: kovan)
    \x1b[1mHARDHAT_ROOT\x1b[0m              Hardhat project root (default: .)
    \x1b[1mMASTER_DEPLOYER_ADDRESS\x1b[0m   MasterDeployer address override
    \x1b[1mPOOL_FACTORY_ADDRESS\x1b[0m      ConstantProductPoolFactory address override
    \x1b[1mETHERSCAN_API_KEY\x1b[0m         Explorer API key used by verify")]
pub enum CppCommands {
    /// Print the deterministic address of a constant-product pool
    Address(CppAddress),
    /// Verify the source of a deployed constant-product pool on the block explorer
    Verify(Box<CppVerify>),
}

impl CppCommands {
    /// Run the command
    pub async fn run(&self, global_config: &GlobalConfig) -> Result<()> {
        match self {
            Self::Address(cmd) => cmd.run(global_config).await,
            Self::Verify(cmd) => cmd.run(global_config).await,
        }
    }
}

/// Trident deployment the cpp commands operate on.
pub(crate) struct CppContext {
    pub(crate) network: String,
    pub(crate) deployment: Deployment,
    pub(crate) project: HardhatProject,
    pub(crate) master_deployer: Address,
    pub(crate) pool_factory: Address,
}

impl CppContext {
    /// Load the deployment selected by `network_config`.
    pub(crate) fn load(
        network_config: &NetworkConfig,
        global_config: &GlobalConfig,
    ) -> Result<Self> {
        let project = HardhatProject::new(&network_config.hardhat_root);
        let config = Config::load_or_default(global_config.config.as_deref(), project.root())?;
        let network = network_config.network.clone();
        let deployment = config.deployment(&network)?;

        let master_deployer = lookup_address(
            network_config.master_deployer,
            &project,
            &network,
            MASTER_DEPLOYER,
            deployment.master_deployer_address,
        )?;
        let pool_factory = lookup_address(
            network_config.pool_factory,
            &project,
            &network,
            POOL_FACTORY,
            deployment.pool_factory_address,
        )?;
        tracing::debug!(%master_deployer, %pool_factory, network, "loaded deployment");

        Ok(Self { network, deployment, project, master_deployer, pool_factory })
    }

    /// Build the pool address resolver selected by `network_config`.
    pub(crate) fn resolver(
        &self,
        network_config: &NetworkConfig,
    ) -> Result<Arc<dyn PoolAddressResolver>> {
        match network_config.resolver {
            ResolverKind::Create2 => {
                let artifact = self.project.artifact(&network_config.contract)?;
                Ok(Arc::new(Create2Resolver::new(
                    self.pool_factory,
                    self.master_deployer,
                    artifact.bytecode,
                )))
            }
            ResolverKind::Registry => {
                let provider =
                    ProviderBuilder::new().connect_http(network_config.require_rpc_url()?);
                Ok(Arc::new(RegistryResolver::new(self.pool_factory, provider)))
            }
        }
    }
}

/// Resolve a contract address: command line override, then hardhat-deploy artifacts, then the
/// network table.
fn lookup_address(
    cli_override: Option<Address>,
    project: &HardhatProject,
    network: &str,
    name: &str,
    table: Option<Address>,
) -> Result<Address> {
    if let Some(address) = cli_override {
        return Ok(address);
    }
    if let Some(address) = project.deployment_address(network, name)? {
        return Ok(address);
    }
    table.with_context(|| {
        format!(
            "No {name} deployment found for network '{network}'.\n\nExpected {}/deployments/{network}/{name}.json, or pass the address on the command line",
            project.root().display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardhat::test_utils::write_project;
    use tracing::level_filters::LevelFilter;
    use trident_pools::PoolParams;

    fn configs(root: &std::path::Path, network: &str) -> (NetworkConfig, GlobalConfig) {
        let network_config = NetworkConfig {
            network: network.to_string(),
            hardhat_root: root.to_path_buf(),
            master_deployer: None,
            pool_factory: None,
            resolver: ResolverKind::Create2,
            rpc_url: None,
            contract: crate::hardhat::CONSTANT_PRODUCT_POOL.to_string(),
        };
        let global_config = GlobalConfig { log_level: LevelFilter::WARN, config: None };
        (network_config, global_config)
    }

    #[test]
    fn addresses_from_deployments() {
        let dir = tempfile::tempdir().unwrap();
        write_project(
            dir.path(),
            "kovan",
            "0x1111111111111111111111111111111111111111",
            "0x2222222222222222222222222222222222222222",
        );
        let (network_config, global_config) = configs(dir.path(), "kovan");

        let ctx = CppContext::load(&network_config, &global_config).unwrap();
        assert_eq!(ctx.master_deployer, Address::repeat_byte(0x11));
        assert_eq!(ctx.pool_factory, Address::repeat_byte(0x22));
        assert_eq!(ctx.deployment.chain_id, 42);
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        write_project(
            dir.path(),
            "kovan",
            "0x1111111111111111111111111111111111111111",
            "0x2222222222222222222222222222222222222222",
        );
        let (mut network_config, global_config) = configs(dir.path(), "kovan");
        network_config.master_deployer = Some(Address::repeat_byte(0x99));

        let ctx = CppContext::load(&network_config, &global_config).unwrap();
        assert_eq!(ctx.master_deployer, Address::repeat_byte(0x99));
        assert_eq!(ctx.pool_factory, Address::repeat_byte(0x22));
    }

    #[test]
    fn missing_deployment_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (network_config, global_config) = configs(dir.path(), "kovan");

        let err = CppContext::load(&network_config, &global_config).err().unwrap();
        assert!(err.to_string().contains("No MasterDeployer deployment found"));
    }

    #[tokio::test]
    async fn create2_resolver_from_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        write_project(
            dir.path(),
            "kovan",
            "0x1111111111111111111111111111111111111111",
            "0x2222222222222222222222222222222222222222",
        );
        let (network_config, global_config) = configs(dir.path(), "kovan");
        let ctx = CppContext::load(&network_config, &global_config).unwrap();

        let pool = PoolParams::default().resolve(&ctx.deployment);
        let resolved = ctx.resolver(&network_config).unwrap().resolve(&pool).await.unwrap();

        let artifact = ctx.project.artifact(&network_config.contract).unwrap();
        let expected =
            Create2Resolver::new(ctx.pool_factory, ctx.master_deployer, artifact.bytecode)
                .pool_address(&pool);
        assert_eq!(resolved, expected);
    }

    #[test]
    fn registry_resolver_requires_rpc_url() {
        let dir = tempfile::tempdir().unwrap();
        write_project(
            dir.path(),
            "kovan",
            "0x1111111111111111111111111111111111111111",
            "0x2222222222222222222222222222222222222222",
        );
        let (mut network_config, global_config) = configs(dir.path(), "kovan");
        network_config.resolver = ResolverKind::Registry;
        let ctx = CppContext::load(&network_config, &global_config).unwrap();

        assert!(ctx.resolver(&network_config).is_err());
    }
}
