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

//! Contract interfaces used to look up deployed pools.

alloy::sol!(
    #[sol(rpc)]
    /// Registry kept by every Trident pool factory.
    interface IPoolFactory {
        /// Pool deployed for a given `keccak256(deployData)`, or the zero address.
        function configAddress(bytes32 salt) external view returns (address);
    }
);
