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

use std::{path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand};
use ethereum_confirm_layout::{address::ADDRESS_LENGTH, TokenDescriptor};
use primitive_types::U256;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Preview Ethereum confirmation screens on the console", long_about = None)]
pub struct Cli {
    /// Configuration file with an `[ethereum_layout]` section
    #[clap(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    /// log4rs YAML configuration. Warnings and errors go to stderr when omitted
    #[clap(long, env = "ETH_LAYOUT_LOG_CONFIGURATION", parse(from_os_str))]
    pub log_config: Option<PathBuf>,
    /// Log debug output to stderr (ignored with --log-config)
    #[clap(short, long)]
    pub verbose: bool,
    #[clap(subcommand)]
    pub command: PreviewCommand,
}

#[derive(Debug, Subcommand)]
pub enum PreviewCommand {
    /// Native asset transfer
    Transfer(TransferArgs),
    /// ERC-20 transfer
    TokenTransfer(TokenTransferArgs),
    /// Fee confirmation, the final step before signing
    Fee(FeeArgs),
    /// Contract call data
    Data(DataArgs),
}

#[derive(Debug, Args)]
pub struct ChainArgs {
    #[clap(long, default_value_t = 1)]
    pub chain_id: u64,
    #[clap(long)]
    pub tx_type: Option<u32>,
}

#[derive(Debug, Args)]
pub struct TransferArgs {
    /// Recipient address, omit to deploy a contract
    #[clap(long)]
    pub to: Option<HexBytes>,
    /// Value in wei
    #[clap(long, parse(try_from_str = parse_u256))]
    pub value: U256,
    #[clap(flatten)]
    pub chain: ChainArgs,
}

#[derive(Debug, Args)]
pub struct TokenTransferArgs {
    #[clap(long)]
    pub to: Option<HexBytes>,
    /// Value in the smallest token unit
    #[clap(long, parse(try_from_str = parse_u256))]
    pub value: U256,
    #[clap(long)]
    pub contract: HexBytes,
    #[clap(long)]
    pub symbol: String,
    #[clap(long)]
    pub decimals: u32,
    #[clap(long, default_value = "Token")]
    pub name: String,
    #[clap(flatten)]
    pub chain: ChainArgs,
}

impl TokenTransferArgs {
    pub fn token(&self) -> Result<TokenDescriptor, String> {
        let contract = <[u8; ADDRESS_LENGTH]>::try_from(self.contract.0.as_slice()).map_err(|_| {
            format!(
                "Token contract must be {} bytes, got {}",
                ADDRESS_LENGTH,
                self.contract.0.len()
            )
        })?;
        Ok(TokenDescriptor::new(
            contract,
            self.name.as_str(),
            self.symbol.as_str(),
            self.decimals,
        ))
    }
}

#[derive(Debug, Args)]
pub struct FeeArgs {
    /// Amount being spent, in wei or in the smallest token unit with --token-symbol
    #[clap(long, parse(try_from_str = parse_u256))]
    pub spending: U256,
    #[clap(long, parse(try_from_str = parse_u256))]
    pub gas_price: U256,
    #[clap(long, parse(try_from_str = parse_u256))]
    pub gas_limit: U256,
    #[clap(long)]
    pub token_symbol: Option<String>,
    #[clap(long)]
    pub token_decimals: Option<u32>,
    #[clap(flatten)]
    pub chain: ChainArgs,
}

impl FeeArgs {
    pub fn token(&self) -> Option<TokenDescriptor> {
        match (&self.token_symbol, self.token_decimals) {
            (Some(symbol), Some(decimals)) => Some(TokenDescriptor::new(
                [0u8; ADDRESS_LENGTH],
                symbol.as_str(),
                symbol.as_str(),
                decimals,
            )),
            _ => None,
        }
    }
}

#[derive(Debug, Args)]
pub struct DataArgs {
    /// Leading bytes of the call data
    #[clap(long)]
    pub data: HexBytes,
    /// Length of the complete call data, defaults to the length of --data
    #[clap(long)]
    pub total: Option<u64>,
}

/// Hex encoded bytes, with or without a `0x` prefix
#[derive(Debug, Clone)]
pub struct HexBytes(pub Vec<u8>);

impl FromStr for HexBytes {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        hex::decode(s).map(HexBytes)
    }
}

fn parse_u256(s: &str) -> Result<U256, String> {
    let s = s.replace('_', "");
    U256::from_dec_str(&s).map_err(|e| format!("Invalid decimal amount '{}': {:?}", s, e))
}
