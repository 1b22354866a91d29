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

//! Readers for the hardhat project the pools were deployed from.
//!
//! Contract addresses come from hardhat-deploy's `deployments/<network>/<Name>.json`, creation
//! bytecode from `artifacts/<source>/<Contract>.json` and the compiler input from the build-info
//! file that the contract's `.dbg.json` points at.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::{Address, Bytes};
use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize};
use trident_pools::ContractSource;

/// hardhat-deploy name of the MasterDeployer deployment.
pub const MASTER_DEPLOYER: &str = "MasterDeployer";

/// hardhat-deploy name of the constant-product pool factory deployment.
pub const POOL_FACTORY: &str = "ConstantProductPoolFactory";

/// Fully qualified name of the constant-product pool contract.
pub const CONSTANT_PRODUCT_POOL: &str =
    "contracts/pool/constant-product/ConstantProductPool.sol:ConstantProductPool";

#[derive(Deserialize)]
struct DeploymentFile {
    address: Address,
}

/// Compiled contract artifact.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Contract name.
    pub contract_name: String,
    /// Source file the contract is defined in.
    pub source_name: String,
    /// Creation bytecode, without constructor arguments.
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
struct DebugFile {
    #[serde(rename = "buildInfo")]
    build_info: PathBuf,
}

/// Compiler input and version of a hardhat compilation.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// Full solc version, e.g. `0.8.7+commit.e28d00a7`.
    pub solc_long_version: String,
    /// Solidity standard JSON input.
    pub input: serde_json::Value,
}

impl BuildInfo {
    /// Source of `contract_name` as the explorer expects it.
    pub fn contract_source(&self, contract_name: &str) -> ContractSource {
        ContractSource::new(contract_name, &self.solc_long_version, self.input.clone())
    }
}

/// A hardhat project on disk.
#[derive(Debug, Clone)]
pub struct HardhatProject {
    root: PathBuf,
}

impl HardhatProject {
    /// Creates a new [HardhatProject] rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Address of the deployment `name` on `network`, or `None` when it was not deployed there.
    pub fn deployment_address(&self, network: &str, name: &str) -> Result<Option<Address>> {
        let path = self.root.join("deployments").join(network).join(format!("{name}.json"));
        if !path.exists() {
            tracing::debug!("No deployment file at {}", path.display());
            return Ok(None);
        }
        let deployment: DeploymentFile = read_json(&path)?;
        Ok(Some(deployment.address))
    }

    /// Compiled artifact of the fully qualified contract `name`.
    pub fn artifact(&self, name: &str) -> Result<ContractArtifact> {
        let (dir, contract) = self.artifact_dir(name)?;
        read_json(&dir.join(format!("{contract}.json")))
    }

    /// Build info the fully qualified contract `name` was compiled in.
    pub fn build_info(&self, name: &str) -> Result<BuildInfo> {
        let (dir, contract) = self.artifact_dir(name)?;
        let debug: DebugFile = read_json(&dir.join(format!("{contract}.dbg.json")))?;
        read_json(&dir.join(debug.build_info))
    }

    fn artifact_dir<'a>(&self, name: &'a str) -> Result<(PathBuf, &'a str)> {
        let (source, contract) = name.split_once(':').with_context(|| {
            format!("{name} is not a fully qualified contract name (<source>:<contract>)")
        })?;
        Ok((self.root.join("artifacts").join(source), contract))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}
