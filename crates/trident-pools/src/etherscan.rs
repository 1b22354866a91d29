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

//! Source verification through an Etherscan-compatible explorer API.

use std::time::Duration;

use alloy::primitives::{hex, Address};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::pool::ConstructorArguments;

/// Delay between two `checkverifystatus` queries.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Number of `checkverifystatus` queries before giving up on a pending submission.
pub const DEFAULT_MAX_POLLS: u32 = 20;

/// Errors returned by a [ContractVerifier].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum VerifyError {
    /// HTTP error talking to the explorer.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The explorer already holds verified source for this address.
    #[error("contract {0:#x} is already verified")]
    AlreadyVerified(Address),

    /// The explorer refused the submission or failed to match the bytecode.
    #[error("verification rejected: {0}")]
    Rejected(String),

    /// The submission was still queued after the configured number of status checks.
    #[error("verification {guid} still pending after {polls} status checks")]
    StillPending {
        /// Submission GUID returned by the explorer.
        guid: String,
        /// Number of status checks performed.
        polls: u32,
    },

    /// The explorer answered with something that is not an API response.
    #[error("invalid explorer response: {0}")]
    InvalidResponse(String),

    /// The standard JSON input could not be serialized.
    #[error("failed to encode source: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result of a successful verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationReceipt {
    /// Verified contract address.
    pub address: Address,
    /// Submission GUID assigned by the explorer.
    pub guid: String,
}

/// Publishes the source of a deployed contract.
#[async_trait]
pub trait ContractVerifier: Send + Sync {
    /// Submit the source of the contract at `address`, deployed with `constructor_arguments`.
    async fn verify(
        &self,
        address: Address,
        constructor_arguments: &ConstructorArguments,
    ) -> Result<VerificationReceipt, VerifyError>;

    /// Short name for logging.
    fn name(&self) -> String;
}

/// Compiler input of the contract being verified.
#[derive(Clone, Debug)]
pub struct ContractSource {
    /// Fully qualified name,
    /// e.g. `contracts/pool/constant-product/ConstantProductPool.sol:ConstantProductPool`.
    pub contract_name: String,
    /// Compiler version in explorer form, e.g. `v0.8.7+commit.e28d00a7`.
    pub compiler_version: String,
    /// Solidity standard JSON input used to compile the contract.
    pub standard_json_input: serde_json::Value,
}

impl ContractSource {
    /// Creates a new [ContractSource]. A `v` is prepended to `solc_version` when missing.
    pub fn new(
        contract_name: impl Into<String>,
        solc_version: &str,
        standard_json_input: serde_json::Value,
    ) -> Self {
        let compiler_version = if solc_version.starts_with('v') {
            solc_version.to_string()
        } else {
            format!("v{solc_version}")
        };
        Self { contract_name: contract_name.into(), compiler_version, standard_json_input }
    }
}

#[derive(Deserialize, Debug)]
struct ApiResponse {
    status: String,
    result: String,
}

impl ApiResponse {
    fn is_ok(&self) -> bool {
        self.status == "1"
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum VerificationStatus {
    Pending,
    Verified,
    AlreadyVerified,
    Failed(String),
}

impl VerificationStatus {
    fn from_result(result: &str) -> Self {
        if result.starts_with("Pending") {
            Self::Pending
        } else if result.starts_with("Pass") {
            Self::Verified
        } else if is_already_verified(result) {
            Self::AlreadyVerified
        } else {
            Self::Failed(result.to_string())
        }
    }
}

fn is_already_verified(result: &str) -> bool {
    result.to_ascii_lowercase().contains("already verified")
}

/// [ContractVerifier] for Etherscan and explorers implementing its `contract` module API.
pub struct EtherscanVerifier {
    client: Client,
    api_url: Url,
    api_key: String,
    source: ContractSource,
    poll_interval: Duration,
    max_polls: u32,
}

impl EtherscanVerifier {
    /// Creates a new [EtherscanVerifier].
    pub fn new(
        api_url: Url,
        api_key: impl Into<String>,
        source: ContractSource,
        timeout: Duration,
    ) -> Result<Self, VerifyError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            api_key: api_key.into(),
            source,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: DEFAULT_MAX_POLLS,
        })
    }

    /// Set the delay between status checks.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Set the number of status checks before reporting [VerifyError::StillPending].
    ///
    /// An accepted submission is always checked at least once.
    pub fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = max_polls.max(1);
        self
    }

    async fn submit(
        &self,
        address: Address,
        constructor_arguments: &ConstructorArguments,
    ) -> Result<String, VerifyError> {
        let source_code = serde_json::to_string(&self.source.standard_json_input)?;
        let form = [
            ("apikey", self.api_key.clone()),
            ("module", "contract".to_string()),
            ("action", "verifysourcecode".to_string()),
            ("contractaddress", format!("{address:#x}")),
            ("sourceCode", source_code),
            ("codeformat", "solidity-standard-json-input".to_string()),
            ("contractname", self.source.contract_name.clone()),
            ("compilerversion", self.source.compiler_version.clone()),
            // Field name is misspelled in the explorer API.
            ("constructorArguements", hex::encode(constructor_arguments.abi_encode())),
        ];

        tracing::debug!(%address, contract = %self.source.contract_name, "submitting source");
        let response: ApiResponse = self
            .client
            .post(self.api_url.clone())
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.is_ok() {
            return Ok(response.result);
        }
        if is_already_verified(&response.result) {
            return Err(VerifyError::AlreadyVerified(address));
        }
        Err(VerifyError::Rejected(response.result))
    }

    async fn check_status(&self, guid: &str) -> Result<VerificationStatus, VerifyError> {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("module", "contract")
            .append_pair("action", "checkverifystatus")
            .append_pair("guid", guid);

        let response: ApiResponse =
            self.client.get(url).send().await?.error_for_status()?.json().await?;
        if response.result.is_empty() {
            return Err(VerifyError::InvalidResponse(format!(
                "empty status for submission {guid}"
            )));
        }
        Ok(VerificationStatus::from_result(&response.result))
    }
}

#[async_trait]
impl ContractVerifier for EtherscanVerifier {
    async fn verify(
        &self,
        address: Address,
        constructor_arguments: &ConstructorArguments,
    ) -> Result<VerificationReceipt, VerifyError> {
        let guid = self.submit(address, constructor_arguments).await?;
        tracing::info!(%address, %guid, "source submitted for verification");

        for poll in 1..=self.max_polls {
            tokio::time::sleep(self.poll_interval).await;
            match self.check_status(&guid).await? {
                VerificationStatus::Pending => {
                    tracing::warn!(%guid, poll, "verification pending");
                }
                VerificationStatus::Verified => {
                    return Ok(VerificationReceipt { address, guid });
                }
                VerificationStatus::AlreadyVerified => {
                    return Err(VerifyError::AlreadyVerified(address));
                }
                VerificationStatus::Failed(reason) => return Err(VerifyError::Rejected(reason)),
            }
        }

        Err(VerifyError::StillPending { guid, polls: self.max_polls })
    }

    fn name(&self) -> String {
        format!("EtherscanVerifier({})", self.api_url)
    }
}
