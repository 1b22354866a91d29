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

//! Network table file (`trident.toml`) for networks missing from the built-in deployments.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::Address;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use trident_pools::Deployment;

/// Name of the configuration file looked up in the hardhat project root.
pub const CONFIG_FILE_NAME: &str = "trident.toml";

/// Main configuration file (trident.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Custom networks, taking precedence over the built-in ones with the same name
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub networks: Vec<CustomNetwork>,
}

/// Custom network entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomNetwork {
    /// Network name, as passed to --network
    pub name: String,
    /// EIP-155 chain ID
    pub chain_id: u64,
    /// Wrapped native token, the default token A
    pub wrapped_native_address: Address,
    /// Reference stablecoin, the default token B
    pub stablecoin_address: Address,
    /// MasterDeployer contract address
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub master_deployer_address: Option<Address>,
    /// ConstantProductPoolFactory contract address
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pool_factory_address: Option<Address>,
    /// Etherscan-compatible API URL
    pub explorer_api_url: String,
}

impl CustomNetwork {
    fn to_deployment(&self) -> Result<Deployment> {
        let mut builder = Deployment::builder();
        builder
            .chain_id(self.chain_id)
            .wrapped_native_address(self.wrapped_native_address)
            .stablecoin_address(self.stablecoin_address)
            .explorer_api_url(self.explorer_api_url.clone());
        if let Some(addr) = self.master_deployer_address {
            builder.master_deployer_address(addr);
        }
        if let Some(addr) = self.pool_factory_address {
            builder.pool_factory_address(addr);
        }
        builder.build().with_context(|| format!("Invalid network entry {}", self.name))
    }
}

impl Config {
    /// Load the configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load `explicit` if given, otherwise `trident.toml` in `project_root` if it exists.
    pub fn load_or_default(explicit: Option<&Path>, project_root: &Path) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = project_root.join(CONFIG_FILE_NAME);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };
        tracing::debug!("Loading network config from {}", path.display());
        Self::load(&path)
    }

    /// Deployment for `network`, from this file or the built-in table.
    pub fn deployment(&self, network: &str) -> Result<Deployment> {
        if let Some(custom) = self.networks.iter().find(|n| n.name == network) {
            return custom.to_deployment();
        }
        match Deployment::from_network_name(network) {
            Some(deployment) => Ok(deployment),
            None => bail!(
                "Unknown network '{network}'.\n\nAdd a [[networks]] entry to {CONFIG_FILE_NAME} to use it"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
[[networks]]
name = "localhost"
chain_id = 31337
wrapped_native_address = "0x1111111111111111111111111111111111111111"
stablecoin_address = "0x2222222222222222222222222222222222222222"
master_deployer_address = "0x3333333333333333333333333333333333333333"
explorer_api_url = "http://localhost:4000/api"
"#;

    #[test]
    fn custom_network_deployment() {
        let config: Config = toml::from_str(CONFIG).unwrap();
        let deployment = config.deployment("localhost").unwrap();
        assert_eq!(deployment.chain_id, 31337);
        assert_eq!(deployment.wrapped_native_address, Address::repeat_byte(0x11));
        assert_eq!(deployment.master_deployer_address, Some(Address::repeat_byte(0x33)));
        assert_eq!(deployment.pool_factory_address, None);
        assert_eq!(deployment.explorer_api_url, "http://localhost:4000/api");
    }

    #[test]
    fn falls_back_to_builtin_networks() {
        let config = Config::default();
        assert_eq!(config.deployment("kovan").unwrap().chain_id, 42);
        let err = config.deployment("localhost").unwrap_err();
        assert!(err.to_string().contains("Unknown network"));
    }

    #[test]
    fn loads_from_project_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_or_default(None, dir.path()).unwrap().networks.is_empty());

        fs::write(dir.path().join(CONFIG_FILE_NAME), CONFIG).unwrap();
        let config = Config::load_or_default(None, dir.path()).unwrap();
        assert_eq!(config.networks.len(), 1);

        let missing = dir.path().join("missing.toml");
        assert!(Config::load_or_default(Some(&missing), dir.path()).is_err());
    }
}
