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

//! Per-network defaults and Trident contract addresses.

use std::{borrow::Cow, str::FromStr};

use alloy::primitives::{address, Address};
use derive_builder::Builder;

pub use alloy_chains::NamedChain;

/// Per-network configuration: default pool tokens, Trident contract addresses and the block
/// explorer used for source verification.
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
pub struct Deployment {
    /// EIP-155 chain ID of the network.
    pub chain_id: u64,

    /// Wrapped native asset (WETH9 or equivalent), the default first token of a pool.
    pub wrapped_native_address: Address,

    /// Reference stablecoin, the default second token of a pool.
    pub stablecoin_address: Address,

    /// Address of the [MasterDeployer] contract, when it is known ahead of time.
    ///
    /// Deployment artifacts and command line overrides take precedence over this value.
    ///
    /// [MasterDeployer]: https://github.com/sushiswap/trident/blob/master/contracts/deployer/MasterDeployer.sol
    #[builder(setter(strip_option), default)]
    pub master_deployer_address: Option<Address>,

    /// Address of the ConstantProductPoolFactory, when it is known ahead of time.
    #[builder(setter(strip_option), default)]
    pub pool_factory_address: Option<Address>,

    /// Etherscan-compatible API endpoint used to verify contract sources.
    #[builder(setter(into))]
    pub explorer_api_url: Cow<'static, str>,
}

impl Deployment {
    /// Create a new [DeploymentBuilder].
    pub fn builder() -> DeploymentBuilder {
        DeploymentBuilder::default()
    }

    /// Lookup the [Deployment] for a named chain.
    pub const fn from_chain(chain: NamedChain) -> Option<Deployment> {
        match chain {
            NamedChain::Mainnet => Some(MAINNET),
            NamedChain::Kovan => Some(KOVAN),
            NamedChain::Polygon => Some(POLYGON),
            _ => None,
        }
    }

    /// Lookup the [Deployment] by chain ID.
    pub fn from_chain_id(chain_id: impl Into<u64>) -> Option<Deployment> {
        let chain = NamedChain::try_from(chain_id.into()).ok()?;
        Self::from_chain(chain)
    }

    /// Lookup the [Deployment] by network name, e.g. `kovan` or `mainnet`.
    pub fn from_network_name(name: &str) -> Option<Deployment> {
        let chain = NamedChain::from_str(name).ok()?;
        Self::from_chain(chain)
    }
}

/// [Deployment] for Ethereum mainnet.
pub const MAINNET: Deployment = Deployment {
    chain_id: 1,
    wrapped_native_address: address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
    stablecoin_address: address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
    master_deployer_address: None,
    pool_factory_address: None,
    explorer_api_url: Cow::Borrowed("https://api.etherscan.io/api"),
};

/// [Deployment] for the Kovan testnet, the reference network for pool verification.
pub const KOVAN: Deployment = Deployment {
    chain_id: 42,
    wrapped_native_address: address!("0xd0A1E359811322d97991E03f863a0C30C2cF029C"),
    stablecoin_address: address!("0xb7a4F3E9097C08dA09517b5aB877F7a917224ede"),
    master_deployer_address: None,
    pool_factory_address: None,
    explorer_api_url: Cow::Borrowed("https://api-kovan.etherscan.io/api"),
};

/// [Deployment] for Polygon PoS.
pub const POLYGON: Deployment = Deployment {
    chain_id: 137,
    wrapped_native_address: address!("0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619"),
    stablecoin_address: address!("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174"),
    master_deployer_address: None,
    pool_factory_address: None,
    explorer_api_url: Cow::Borrowed("https://api.polygonscan.com/api"),
};
