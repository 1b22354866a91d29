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

//! Canonical constant-product pool parameters and their ABI encodings.
//!
//! The pool factory sorts the token pair before deploying and derives the CREATE2 salt from the
//! encoded parameters, so every address computation in this crate starts from a [PoolSpec], which
//! can only be built in canonical order.

use std::fmt;

use alloy::{
    primitives::{keccak256, Address, Bytes, B256, U256},
    sol_types::SolValue,
};

use crate::deployments::Deployment;

/// Default swap fee, in basis points (0.30%).
pub const DEFAULT_FEE_TIER: u64 = 30;

/// Pools are deployed with the TWAP oracle enabled unless requested otherwise.
pub const DEFAULT_TWAP: bool = true;

/// Orders a token pair ascending by the numeric value of the addresses.
///
/// This is the same comparison the factory performs on-chain (`tokenA < tokenB`), so
/// `canonicalize(a, b) == canonicalize(b, a)` for every pair.
pub fn canonicalize(a: Address, b: Address) -> (Address, Address) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Canonical description of a constant-product pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolSpec {
    token0: Address,
    token1: Address,
    fee_tier: u64,
    twap: bool,
}

impl PoolSpec {
    /// Creates a [PoolSpec], sorting the token pair.
    pub fn new(token_a: Address, token_b: Address, fee_tier: u64, twap: bool) -> Self {
        let (token0, token1) = canonicalize(token_a, token_b);
        Self { token0, token1, fee_tier, twap }
    }

    /// The lower of the two token addresses.
    pub fn token0(&self) -> Address {
        self.token0
    }

    /// The higher of the two token addresses.
    pub fn token1(&self) -> Address {
        self.token1
    }

    /// Swap fee in basis points.
    pub fn fee_tier(&self) -> u64 {
        self.fee_tier
    }

    /// Whether the pool keeps a TWAP oracle.
    pub fn twap(&self) -> bool {
        self.twap
    }

    /// Encodes the pool as `abi.encode(address, address, uint256, bool)`.
    pub fn deploy_data(&self) -> DeployData {
        let encoded =
            (self.token0, self.token1, U256::from(self.fee_tier), self.twap).abi_encode_params();
        DeployData(encoded.into())
    }
}

impl fmt::Display for PoolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#x}/{:#x} fee={} twap={}",
            self.token0, self.token1, self.fee_tier, self.twap
        )
    }
}

/// Pool parameters as supplied by the operator. Missing values fall back to the network defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolParams {
    /// First token of the pair. Defaults to the network's wrapped native asset.
    pub token_a: Option<Address>,
    /// Second token of the pair. Defaults to the network's reference stablecoin.
    pub token_b: Option<Address>,
    /// Swap fee in basis points. Defaults to [DEFAULT_FEE_TIER].
    pub fee_tier: Option<u64>,
    /// TWAP oracle flag. Defaults to [DEFAULT_TWAP].
    pub twap: Option<bool>,
}

impl PoolParams {
    /// Fill in missing parameters from `deployment` and build the canonical [PoolSpec].
    pub fn resolve(&self, deployment: &Deployment) -> PoolSpec {
        PoolSpec::new(
            self.token_a.unwrap_or(deployment.wrapped_native_address),
            self.token_b.unwrap_or(deployment.stablecoin_address),
            self.fee_tier.unwrap_or(DEFAULT_FEE_TIER),
            self.twap.unwrap_or(DEFAULT_TWAP),
        )
    }
}

/// ABI encoded pool parameters, as passed to the pool factory and the pool constructor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeployData(Bytes);

impl DeployData {
    /// The CREATE2 salt the factory uses for this pool, `keccak256(deployData)`.
    pub fn salt(&self) -> B256 {
        keccak256(&self.0)
    }

    /// Raw encoded bytes.
    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }
}

impl AsRef<[u8]> for DeployData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<DeployData> for Bytes {
    fn from(value: DeployData) -> Self {
        value.0
    }
}

/// Arguments of the pool constructor, `constructor(bytes deployData, address masterDeployer)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorArguments {
    /// Encoded pool parameters.
    pub deploy_data: DeployData,
    /// Address of the MasterDeployer that owns the factory.
    pub master_deployer: Address,
}

impl ConstructorArguments {
    /// Create the constructor arguments for `pool`.
    pub fn new(pool: &PoolSpec, master_deployer: Address) -> Self {
        Self { deploy_data: pool.deploy_data(), master_deployer }
    }

    /// `abi.encode(deployData, masterDeployer)`, appended to the creation code on deployment.
    pub fn abi_encode(&self) -> Bytes {
        (self.deploy_data.0.clone(), self.master_deployer).abi_encode_params().into()
    }
}
