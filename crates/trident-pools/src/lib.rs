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

//! Deterministic address resolution and source verification for Trident constant-product pools.

pub mod contracts;
pub mod deployments;
pub mod etherscan;
pub mod pipeline;
pub mod pool;
pub mod resolver;

pub use deployments::Deployment;
pub use etherscan::{ContractSource, ContractVerifier, EtherscanVerifier, VerifyError};
pub use pipeline::{PipelineError, PoolVerification, ResolvedPool};
pub use pool::{canonicalize, ConstructorArguments, DeployData, PoolParams, PoolSpec};
pub use resolver::{Create2Resolver, PoolAddressResolver, RegistryResolver, ResolveError};
