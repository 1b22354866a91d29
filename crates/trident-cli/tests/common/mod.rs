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

use std::{fs, path::Path};

use alloy::primitives::{address, bytes, Address, Bytes};
use assert_cmd::Command;
use serde_json::json;

pub const MASTER_DEPLOYER: Address = address!("0x1111111111111111111111111111111111111111");
pub const POOL_FACTORY: Address = address!("0x2222222222222222222222222222222222222222");
pub const POOL_BYTECODE: Bytes = bytes!("6080604052348015600f57600080fd5b50");

/// Environment variables read by the CLI, cleared so the host environment does not leak in.
const CLI_ENV: &[&str] = &[
    "NETWORK",
    "HARDHAT_ROOT",
    "MASTER_DEPLOYER_ADDRESS",
    "POOL_FACTORY_ADDRESS",
    "RPC_URL",
    "ETHERSCAN_API_KEY",
    "ETHERSCAN_API_URL",
    "LOG_LEVEL",
    "TRIDENT_CONFIG",
    "RUST_LOG",
];

/// The `trident` binary running inside `root`.
pub fn trident(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trident").unwrap();
    for var in CLI_ENV {
        cmd.env_remove(var);
    }
    cmd.current_dir(root).env("NO_COLOR", "1");
    cmd
}

/// Write a hardhat project with Trident deployed on `network`.
pub fn write_project(root: &Path, network: &str) {
    let deployments = root.join("deployments").join(network);
    fs::create_dir_all(&deployments).unwrap();
    for (name, address) in
        [("MasterDeployer", MASTER_DEPLOYER), ("ConstantProductPoolFactory", POOL_FACTORY)]
    {
        fs::write(
            deployments.join(format!("{name}.json")),
            json!({ "address": address, "abi": [] }).to_string(),
        )
        .unwrap();
    }

    let artifacts = root.join("artifacts/contracts/pool/constant-product/ConstantProductPool.sol");
    fs::create_dir_all(&artifacts).unwrap();
    fs::write(
        artifacts.join("ConstantProductPool.json"),
        json!({
            "_format": "hh-sol-artifact-1",
            "contractName": "ConstantProductPool",
            "sourceName": "contracts/pool/constant-product/ConstantProductPool.sol",
            "abi": [],
            "bytecode": POOL_BYTECODE,
            "deployedBytecode": "0x6080604052"
        })
        .to_string(),
    )
    .unwrap();
    fs::write(
        artifacts.join("ConstantProductPool.dbg.json"),
        json!({ "_format": "hh-sol-dbg-1", "buildInfo": "../../../../build-info/2f1b3c.json" })
            .to_string(),
    )
    .unwrap();

    let build_info = root.join("artifacts/build-info");
    fs::create_dir_all(&build_info).unwrap();
    fs::write(
        build_info.join("2f1b3c.json"),
        json!({
            "_format": "hh-sol-build-info-1",
            "id": "2f1b3c",
            "solcVersion": "0.8.7",
            "solcLongVersion": "0.8.7+commit.e28d00a7",
            "input": { "language": "Solidity", "sources": {}, "settings": {} },
            "output": {}
        })
        .to_string(),
    )
    .unwrap();
}
