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

//! Resolution of the address a pool factory deployed (or will deploy) a pool at.

use alloy::{
    network::Ethereum,
    primitives::{keccak256, Address, Bytes, B256},
    providers::Provider,
};
use async_trait::async_trait;

use crate::{
    contracts::IPoolFactory,
    pool::{ConstructorArguments, PoolSpec},
};

/// Errors raised while resolving a pool address.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ResolveError {
    /// The factory has no pool registered for these parameters.
    #[error("no pool deployed for {pool} (salt {salt})")]
    NotDeployed {
        /// The canonical pool that was looked up.
        pool: PoolSpec,
        /// `keccak256(deployData)` used as the registry key.
        salt: B256,
    },

    /// The factory query failed.
    #[error("RPC error: {0}")]
    Rpc(#[from] alloy::contract::Error),
}

/// Resolves the deterministic address of a constant-product pool.
#[async_trait]
pub trait PoolAddressResolver: Send + Sync {
    /// Return the address of `pool`.
    async fn resolve(&self, pool: &PoolSpec) -> Result<Address, ResolveError>;

    /// Short name for logging.
    fn name(&self) -> String;
}

/// Computes pool addresses offline, the way the factory's `new ConstantProductPool{salt: ..}`
/// does: `create2(factory, keccak256(deployData), keccak256(creationCode ++ constructorArgs))`.
#[derive(Clone, Debug)]
pub struct Create2Resolver {
    pool_factory: Address,
    master_deployer: Address,
    creation_code: Bytes,
}

impl Create2Resolver {
    /// Creates a new [Create2Resolver] from the factory address, the MasterDeployer passed to
    /// every pool constructor, and the pool creation bytecode.
    pub fn new(pool_factory: Address, master_deployer: Address, creation_code: Bytes) -> Self {
        Self { pool_factory, master_deployer, creation_code }
    }

    /// `keccak256` of the pool init code, including the constructor arguments.
    pub fn init_code_hash(&self, pool: &PoolSpec) -> B256 {
        let args = ConstructorArguments::new(pool, self.master_deployer).abi_encode();
        let mut init_code = Vec::with_capacity(self.creation_code.len() + args.len());
        init_code.extend_from_slice(&self.creation_code);
        init_code.extend_from_slice(&args);
        keccak256(init_code)
    }

    /// Deterministic address of `pool`.
    pub fn pool_address(&self, pool: &PoolSpec) -> Address {
        let salt = pool.deploy_data().salt();
        self.pool_factory.create2(salt, self.init_code_hash(pool))
    }
}

#[async_trait]
impl PoolAddressResolver for Create2Resolver {
    async fn resolve(&self, pool: &PoolSpec) -> Result<Address, ResolveError> {
        let address = self.pool_address(pool);
        tracing::debug!(%address, factory = %self.pool_factory, "computed CREATE2 pool address");
        Ok(address)
    }

    fn name(&self) -> String {
        format!("Create2Resolver({:#x})", self.pool_factory)
    }
}

/// Looks the pool up in the factory's `configAddress` registry over RPC.
///
/// Unlike [Create2Resolver], this fails with [ResolveError::NotDeployed] when the factory never
/// deployed a pool with these parameters.
#[derive(Clone, Debug)]
pub struct RegistryResolver<P> {
    pool_factory: Address,
    provider: P,
}

impl<P> RegistryResolver<P>
where
    P: Provider<Ethereum> + Clone + 'static,
{
    /// Creates a new [RegistryResolver] querying the factory at `pool_factory`.
    pub fn new(pool_factory: Address, provider: P) -> Self {
        Self { pool_factory, provider }
    }
}

#[async_trait]
impl<P> PoolAddressResolver for RegistryResolver<P>
where
    P: Provider<Ethereum> + Clone + 'static,
{
    async fn resolve(&self, pool: &PoolSpec) -> Result<Address, ResolveError> {
        let salt = pool.deploy_data().salt();
        let factory = IPoolFactory::new(self.pool_factory, self.provider.clone());
        let address = factory.configAddress(salt).call().await?;
        if address.is_zero() {
            return Err(ResolveError::NotDeployed { pool: *pool, salt });
        }
        tracing::debug!(%address, factory = %self.pool_factory, "found pool in factory registry");
        Ok(address)
    }

    fn name(&self) -> String {
        format!("RegistryResolver({:#x})", self.pool_factory)
    }
}
