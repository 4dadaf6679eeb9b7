// Copyright 2024. The Tari Project
//
// Redistribution and use in source and binary forms, with or without modification, are permitted provided that the
// following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this list of conditions and the following
// disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice, this list of conditions and the
// following disclaimer in the documentation and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors may be used to endorse or promote
// products derived from this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES,
// INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
// SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY,
// WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE
// USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use serde::{Deserialize, Serialize};

use crate::address::ADDRESS_LENGTH;

/// Symbol used for token contracts that are missing from the token registry. Amounts are then shown as raw
/// integers, because the decimals are unknown.
pub const UNKNOWN_TOKEN_SYMBOL: &str = "Wei UNKN";

/// An ERC-20 token, as resolved from the token registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub contract_address: [u8; ADDRESS_LENGTH],
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

impl TokenDescriptor {
    pub fn new<N: Into<String>, S: Into<String>>(
        contract_address: [u8; ADDRESS_LENGTH],
        name: N,
        symbol: S,
        decimals: u32,
    ) -> Self {
        Self {
            contract_address,
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    pub fn unknown(contract_address: [u8; ADDRESS_LENGTH]) -> Self {
        Self::new(contract_address, "Unknown token", UNKNOWN_TOKEN_SYMBOL, 0)
    }

    pub fn is_unknown(&self) -> bool {
        self.symbol == UNKNOWN_TOKEN_SYMBOL && self.decimals == 0
    }

    /// Lower case hex of the contract address with a `0x` prefix. Contract addresses are shown without a checksum.
    pub fn contract_address_hex(&self) -> String {
        format!("0x{}", hex::encode(self.contract_address))
    }
}
