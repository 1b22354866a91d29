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

//! The pool verification task: resolve the pool address, report it, then verify its source.

use std::sync::Arc;

use alloy::primitives::Address;

use crate::{
    etherscan::{ContractVerifier, VerificationReceipt, VerifyError},
    pool::{ConstructorArguments, PoolSpec},
    resolver::{PoolAddressResolver, ResolveError},
};

/// Errors from [PoolVerification].
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// The pool address could not be resolved. Nothing was submitted.
    #[error("failed to resolve pool address: {0}")]
    Resolve(#[from] ResolveError),

    /// The explorer did not verify the pool.
    #[error("failed to verify pool: {0}")]
    Verify(#[from] VerifyError),
}

/// A pool whose address has been resolved, ready to be verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPool {
    pool: PoolSpec,
    address: Address,
    constructor_arguments: ConstructorArguments,
}

impl ResolvedPool {
    /// The canonical pool parameters.
    pub fn pool(&self) -> &PoolSpec {
        &self.pool
    }

    /// The resolved pool address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Constructor arguments the pool was deployed with.
    pub fn constructor_arguments(&self) -> &ConstructorArguments {
        &self.constructor_arguments
    }
}

/// Resolves and verifies constant-product pools deployed through a MasterDeployer.
pub struct PoolVerification {
    resolver: Arc<dyn PoolAddressResolver>,
    verifier: Arc<dyn ContractVerifier>,
    master_deployer: Address,
}

impl PoolVerification {
    /// Creates a new [PoolVerification].
    pub fn new(
        resolver: Arc<dyn PoolAddressResolver>,
        verifier: Arc<dyn ContractVerifier>,
        master_deployer: Address,
    ) -> Self {
        Self { resolver, verifier, master_deployer }
    }

    /// Resolve the address of `pool`.
    pub async fn resolve(&self, pool: &PoolSpec) -> Result<ResolvedPool, PipelineError> {
        tracing::debug!(%pool, resolver = self.resolver.name(), "resolving pool address");
        let address = self.resolver.resolve(pool).await?;
        Ok(ResolvedPool {
            pool: *pool,
            address,
            constructor_arguments: ConstructorArguments::new(pool, self.master_deployer),
        })
    }

    /// Submit a resolved pool for source verification.
    pub async fn verify(
        &self,
        resolved: &ResolvedPool,
    ) -> Result<VerificationReceipt, PipelineError> {
        tracing::debug!(
            address = %resolved.address,
            verifier = self.verifier.name(),
            "verifying pool source"
        );
        Ok(self.verifier.verify(resolved.address, &resolved.constructor_arguments).await?)
    }

    /// Resolve `pool`, hand the result to `report`, then verify it.
    ///
    /// Stops at the first failing step; `report` and the verifier are only reached once an
    /// address has been resolved.
    pub async fn run(
        &self,
        pool: &PoolSpec,
        report: impl FnOnce(&ResolvedPool),
    ) -> Result<(ResolvedPool, VerificationReceipt), PipelineError> {
        let resolved = self.resolve(pool).await?;
        tracing::info!(address = %resolved.address, "resolved pool address");
        report(&resolved);
        let receipt = self.verify(&resolved).await?;
        Ok((resolved, receipt))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use alloy::primitives::{address, B256};
    use async_trait::async_trait;
    use tracing_test::traced_test;

    use super::*;
    use crate::{deployments::KOVAN, pool::PoolParams};

    const MASTER_DEPLOYER: Address = address!("0x00000000000000000000000000000000000000aa");

    /// Resolver that answers from a fixed table keyed by canonical pool.
    struct StaticResolver {
        pools: Vec<(PoolSpec, Address)>,
    }

    #[async_trait]
    impl PoolAddressResolver for StaticResolver {
        async fn resolve(&self, pool: &PoolSpec) -> Result<Address, ResolveError> {
            self.pools
                .iter()
                .find(|(known, _)| known == pool)
                .map(|(_, address)| *address)
                .ok_or(ResolveError::NotDeployed { pool: *pool, salt: B256::ZERO })
        }

        fn name(&self) -> String {
            "StaticResolver".to_string()
        }
    }

    #[derive(Default)]
    struct RecordingVerifier {
        calls: Mutex<Vec<(Address, ConstructorArguments)>>,
        reject: bool,
    }

    #[async_trait]
    impl ContractVerifier for RecordingVerifier {
        async fn verify(
            &self,
            address: Address,
            constructor_arguments: &ConstructorArguments,
        ) -> Result<VerificationReceipt, VerifyError> {
            self.calls.lock().unwrap().push((address, constructor_arguments.clone()));
            if self.reject {
                return Err(VerifyError::AlreadyVerified(address));
            }
            Ok(VerificationReceipt { address, guid: "guid".to_string() })
        }

        fn name(&self) -> String {
            "RecordingVerifier".to_string()
        }
    }

    fn default_pool() -> PoolSpec {
        PoolParams::default().resolve(&KOVAN)
    }

    fn task(
        pools: Vec<(PoolSpec, Address)>,
        verifier: Arc<RecordingVerifier>,
    ) -> PoolVerification {
        PoolVerification::new(Arc::new(StaticResolver { pools }), verifier, MASTER_DEPLOYER)
    }

    #[tokio::test]
    #[traced_test]
    async fn verifies_resolved_pool_with_constructor_arguments() {
        let pool = default_pool();
        let pool_address = Address::repeat_byte(0x44);
        let verifier = Arc::new(RecordingVerifier::default());
        let task = task(vec![(pool, pool_address)], verifier.clone());

        let mut reported = None;
        let (resolved, receipt) =
            task.run(&pool, |resolved| reported = Some(resolved.address())).await.unwrap();

        assert_eq!(reported, Some(pool_address));
        assert_eq!(receipt.address, pool_address);
        assert_eq!(resolved.constructor_arguments().deploy_data, pool.deploy_data());

        let calls = verifier.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, pool_address);
        assert_eq!(
            calls[0].1,
            ConstructorArguments {
                deploy_data: pool.deploy_data(),
                master_deployer: MASTER_DEPLOYER
            }
        );
        assert!(logs_contain("resolved pool address"));
    }

    #[tokio::test]
    async fn unresolved_pool_is_never_submitted() {
        let verifier = Arc::new(RecordingVerifier::default());
        let task = task(vec![], verifier.clone());

        let mut reported = false;
        let err = task.run(&default_pool(), |_| reported = true).await.unwrap_err();

        assert!(matches!(err, PipelineError::Resolve(ResolveError::NotDeployed { .. })));
        assert!(!reported);
        assert!(verifier.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn verification_failure_is_propagated() {
        let pool = default_pool();
        let verifier = Arc::new(RecordingVerifier { reject: true, ..Default::default() });
        let task = task(vec![(pool, Address::repeat_byte(0x44))], verifier.clone());

        let err = task.run(&pool, |_| {}).await.unwrap_err();

        assert!(matches!(err, PipelineError::Verify(VerifyError::AlreadyVerified(_))));
        assert_eq!(verifier.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn swapped_tokens_resolve_and_submit_identically() {
        let pool = default_pool();
        let swapped = PoolParams {
            token_a: Some(KOVAN.stablecoin_address),
            token_b: Some(KOVAN.wrapped_native_address),
            ..Default::default()
        }
        .resolve(&KOVAN);
        let verifier = Arc::new(RecordingVerifier::default());
        let task = task(vec![(pool, Address::repeat_byte(0x44))], verifier.clone());

        let (a, _) = task.run(&pool, |_| {}).await.unwrap();
        let (b, _) = task.run(&swapped, |_| {}).await.unwrap();

        assert_eq!(a, b);
        let calls = verifier.calls.lock().unwrap();
        assert_eq!(calls[0], calls[1]);
    }
}
