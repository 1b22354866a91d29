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

//! Common configuration options for commands in the Trident CLI.

use std::{num::ParseIntError, path::PathBuf, time::Duration};

use alloy::primitives::Address;
use anyhow::{Context, Result};
use clap::{ArgAction, Args, ValueEnum};
use tracing::level_filters::LevelFilter;
use trident_pools::PoolParams;
use url::Url;

use crate::hardhat::CONSTANT_PRODUCT_POOL;

fn parse_secs(arg: &str) -> Result<Duration, ParseIntError> {
    Ok(Duration::from_secs(arg.parse()?))
}

/// Common configuration options for all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalConfig {
    /// Log level (error, warn, info, debug, trace)
    #[clap(long, env = "LOG_LEVEL", global = true, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Path to a trident.toml file declaring additional networks.
    ///
    /// Defaults to trident.toml in the hardhat project root, when present.
    #[clap(long, env = "TRIDENT_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

/// Parameters of the constant-product pool to operate on.
#[derive(Args, Debug, Clone, Default)]
pub struct PoolArgs {
    /// Token A. Defaults to the network's wrapped native token.
    #[clap(long)]
    pub token_a: Option<Address>,

    /// Token B. Defaults to the network's reference stablecoin.
    #[clap(long)]
    pub token_b: Option<Address>,

    /// Fee tier in basis points [default: 30]
    #[clap(long)]
    pub fee: Option<u64>,

    /// Whether the pool keeps a TWAP oracle [default: true]
    #[clap(long, action = ArgAction::Set)]
    pub twap: Option<bool>,
}

impl From<&PoolArgs> for PoolParams {
    fn from(args: &PoolArgs) -> Self {
        PoolParams {
            token_a: args.token_a,
            token_b: args.token_b,
            fee_tier: args.fee,
            twap: args.twap,
        }
    }
}

/// How the pool address is obtained.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolverKind {
    /// Compute the CREATE2 address from the pool creation bytecode.
    #[default]
    Create2,
    /// Query the pool factory's registry over RPC.
    Registry,
}

/// Where to find the Trident deployment for the selected network.
#[derive(Args, Debug, Clone)]
pub struct NetworkConfig {
    /// Network name, matching the hardhat-deploy deployments directory
    #[clap(long, env = "NETWORK", default_value = "kovan")]
    pub network: String,

    /// Root of the hardhat project holding `deployments/` and `artifacts/`
    #[clap(long, env = "HARDHAT_ROOT", default_value = ".")]
    pub hardhat_root: PathBuf,

    /// Address of the MasterDeployer contract, overriding the deployment artifacts
    #[clap(long, env = "MASTER_DEPLOYER_ADDRESS")]
    pub master_deployer: Option<Address>,

    /// Address of the ConstantProductPoolFactory contract, overriding the deployment artifacts
    #[clap(long, env = "POOL_FACTORY_ADDRESS")]
    pub pool_factory: Option<Address>,

    /// How to resolve the pool address
    #[clap(long, value_enum, default_value_t = ResolverKind::Create2)]
    pub resolver: ResolverKind,

    /// RPC URL, required by the registry resolver
    #[clap(long, env = "RPC_URL")]
    pub rpc_url: Option<Url>,

    /// Fully qualified name of the pool contract
    #[clap(long, default_value = CONSTANT_PRODUCT_POOL)]
    pub contract: String,
}

impl NetworkConfig {
    /// Access [Self::rpc_url] or return an error that can be shown to the user.
    pub fn require_rpc_url(&self) -> Result<Url> {
        self.rpc_url
            .clone()
            .context("RPC URL not provided.\n\nThe registry resolver queries the pool factory on-chain.\nSet RPC_URL or pass --rpc-url")
    }
}

/// Configuration of the block explorer used for source verification.
#[derive(Args, Debug, Clone)]
pub struct EtherscanConfig {
    /// Explorer API key
    #[clap(long, env = "ETHERSCAN_API_KEY", hide_env_values = true)]
    pub etherscan_api_key: Option<String>,

    /// Explorer API URL, overriding the network default
    #[clap(long, env = "ETHERSCAN_API_URL")]
    pub etherscan_api_url: Option<Url>,

    /// Seconds between verification status checks
    #[clap(long, default_value = "3", value_parser = parse_secs)]
    pub poll_interval: Duration,

    /// Number of status checks before giving up on a pending verification
    #[clap(
        long,
        default_value_t = trident_pools::etherscan::DEFAULT_MAX_POLLS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_polls: u32,

    /// HTTP timeout in seconds for explorer requests
    #[clap(long, default_value = "30", value_parser = parse_secs)]
    pub http_timeout: Duration,
}

impl EtherscanConfig {
    /// Access [Self::etherscan_api_key] or return an error that can be shown to the user.
    pub fn require_api_key(&self) -> Result<&str> {
        self.etherscan_api_key.as_deref().context(
            "Explorer API key not provided.\n\nSet ETHERSCAN_API_KEY (a .env file is loaded) or pass --etherscan-api-key",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestArgs {
        #[clap(flatten)]
        pool: PoolArgs,
        #[clap(flatten)]
        network: NetworkConfig,
        #[clap(flatten)]
        etherscan: EtherscanConfig,
    }

    #[test]
    fn defaults() {
        let args = TestArgs::try_parse_from(["test"]).unwrap();
        assert_eq!(PoolParams::from(&args.pool), PoolParams::default());
        assert_eq!(args.network.resolver, ResolverKind::Create2);
        assert_eq!(args.network.contract, CONSTANT_PRODUCT_POOL);
        assert_eq!(args.etherscan.poll_interval, Duration::from_secs(3));
    }

    #[test]
    fn pool_arguments() {
        let args = TestArgs::try_parse_from([
            "test",
            "--token-a",
            "0x1111111111111111111111111111111111111111",
            "--fee",
            "5",
            "--twap",
            "false",
            "--resolver",
            "registry",
        ])
        .unwrap();
        let params = PoolParams::from(&args.pool);
        assert_eq!(params.token_a, Some(Address::repeat_byte(0x11)));
        assert_eq!(params.token_b, None);
        assert_eq!(params.fee_tier, Some(5));
        assert_eq!(params.twap, Some(false));
        assert_eq!(args.network.resolver, ResolverKind::Registry);
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(TestArgs::try_parse_from(["test", "--token-a", "0x1234"]).is_err());
        assert!(TestArgs::try_parse_from(["test", "--fee", "-1"]).is_err());
        assert!(TestArgs::try_parse_from(["test", "--twap", "maybe"]).is_err());
        assert!(TestArgs::try_parse_from(["test", "--max-polls", "0"]).is_err());
    }
}
