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

//! Display utilities for consistent CLI output formatting

use alloy::primitives::Address;
use colored::Colorize;
use std::fmt::Display;
use trident_pools::PoolSpec;

/// Standard display formatter for CLI output
pub struct DisplayManager {
    /// Network name to display in headers
    network: String,
}

impl DisplayManager {
    /// Create a display manager with network context
    pub fn with_network(network: impl Into<String>) -> Self {
        Self { network: network.into() }
    }

    /// Print a section header with the network badge
    pub fn header(&self, title: &str) {
        println!("\n{} [{}]", title.bold(), self.network.blue().bold());
    }

    /// Print a labeled value with standard indentation
    pub fn item(&self, label: &str, value: impl Display) {
        println!("  {:<16} {}", format!("{}:", label), value);
    }

    /// Print an address with standard formatting
    pub fn address(&self, label: &str, address: Address) {
        self.item(label, format_address(address).dimmed());
    }

    /// Print the canonical parameters of a pool
    pub fn pool(&self, pool: &PoolSpec) {
        self.address("Token 0", pool.token0());
        self.address("Token 1", pool.token1());
        self.item("Fee tier", format!("{} bps", pool.fee_tier()));
        self.item("TWAP", pool.twap());
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("\n{} {}", "✓".green().bold(), message.green().bold());
    }
}

/// Format an address for display
pub fn format_address(address: Address) -> String {
    format!("{:#x}", address)
}
