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

use log::*;
use sha3::{Digest, Keccak256};

use crate::{
    error::LayoutError,
    networks::{NetworkDescriptor, NetworkLookup},
    text::chunk_str,
};

const LOG_TARGET: &str = "hardware::ethereum::address";

pub const ADDRESS_LENGTH: usize = 20;
/// Shown in place of a recipient when the transaction deploys a contract
pub const NO_RECIPIENT: &str = "new contract?";
/// Default number of address characters per display line
pub const ADDRESS_LINE_WIDTH: usize = 17;

/// The `to` field of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressTarget {
    Recipient([u8; ADDRESS_LENGTH]),
    ContractCreation,
}

impl AddressTarget {
    /// An absent or empty `to` field means contract creation. Any other length than [`ADDRESS_LENGTH`] is rejected.
    pub fn from_bytes(bytes: Option<&[u8]>) -> Result<Self, LayoutError> {
        match bytes {
            None => Ok(AddressTarget::ContractCreation),
            Some(b) if b.is_empty() => Ok(AddressTarget::ContractCreation),
            Some(b) => {
                let address = <[u8; ADDRESS_LENGTH]>::try_from(b).map_err(|_| LayoutError::InvalidAddressLength {
                    expected: ADDRESS_LENGTH,
                    actual: b.len(),
                })?;
                Ok(AddressTarget::Recipient(address))
            },
        }
    }

    pub fn is_contract_creation(&self) -> bool {
        matches!(self, AddressTarget::ContractCreation)
    }
}

/// Produces the canonical display string of an address on a given network.
pub trait AddressCodec {
    fn encode(&self, address: &[u8; ADDRESS_LENGTH], network: Option<&NetworkDescriptor>) -> String;
}

/// Mixed case checksum encoding. EIP-55 everywhere, RSKIP-60 (chain id salted) on networks that require it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecksumAddressCodec;

impl AddressCodec for ChecksumAddressCodec {
    fn encode(&self, address: &[u8; ADDRESS_LENGTH], network: Option<&NetworkDescriptor>) -> String {
        let lower = hex::encode(address);
        let mut hasher = Keccak256::new();
        if let Some(network) = network.filter(|n| n.rskip60) {
            hasher.update(format!("{}0x", network.chain_id).as_bytes());
        }
        hasher.update(lower.as_bytes());
        let digest = hasher.finalize();

        let mut encoded = String::with_capacity(2 + lower.len());
        encoded.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                digest[i / 2] >> 4
            } else {
                digest[i / 2] & 0x0f
            };
            if nibble & 0x08 == 0 {
                encoded.push(c);
            } else {
                encoded.push(c.to_ascii_uppercase());
            }
        }
        encoded
    }
}

pub fn split_address(address: &str, line_width: usize) -> Vec<String> {
    chunk_str(address, line_width)
}

/// Canonical form of `target` wrapped into display lines. Always returns at least one line.
pub fn present_address<N, C>(
    target: &AddressTarget,
    chain_id: u64,
    networks: &N,
    codec: &C,
    line_width: usize,
) -> Vec<String>
where
    N: NetworkLookup + ?Sized,
    C: AddressCodec + ?Sized,
{
    let address = match target {
        AddressTarget::Recipient(bytes) => codec.encode(bytes, networks.by_chain_id(chain_id)),
        AddressTarget::ContractCreation => {
            debug!(target: LOG_TARGET, "No recipient, showing contract creation");
            NO_RECIPIENT.to_string()
        },
    };
    trace!(target: LOG_TARGET, "Presenting address {} on chain {}", address, chain_id);
    split_address(&address, line_width)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::networks::StaticNetworks;

    fn address(s: &str) -> [u8; ADDRESS_LENGTH] {
        let bytes = hex::decode(s.trim_start_matches("0x")).unwrap();
        <[u8; ADDRESS_LENGTH]>::try_from(bytes.as_slice()).unwrap()
    }

    #[test]
    fn eip55_checksums() {
        let vectors = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];
        let eth = StaticNetworks.by_chain_id(1);
        for expected in vectors {
            assert_eq!(ChecksumAddressCodec.encode(&address(expected), eth), expected);
            assert_eq!(ChecksumAddressCodec.encode(&address(expected), None), expected);
        }
    }

    #[test]
    fn rskip60_checksums_are_salted_with_the_chain_id() {
        let bytes = address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
        let rsk = ChecksumAddressCodec.encode(&bytes, StaticNetworks.by_chain_id(30));
        assert_eq!(rsk, "0x5aaEB6053f3e94c9b9a09f33669435E7ef1bEAeD");
        let rsk_testnet = ChecksumAddressCodec.encode(&bytes, StaticNetworks.by_chain_id(31));
        assert_eq!(rsk_testnet, "0x5aAeb6053F3e94c9b9A09F33669435E7EF1BEaEd");
    }

    #[test]
    fn address_target_validation() {
        assert_eq!(AddressTarget::from_bytes(None).unwrap(), AddressTarget::ContractCreation);
        assert!(AddressTarget::from_bytes(Some(&[][..])).unwrap().is_contract_creation());
        assert_eq!(
            AddressTarget::from_bytes(Some(&[1u8; 19][..])).unwrap_err(),
            LayoutError::InvalidAddressLength {
                expected: ADDRESS_LENGTH,
                actual: 19
            }
        );
        assert_eq!(
            AddressTarget::from_bytes(Some(&[7u8; 20][..])).unwrap(),
            AddressTarget::Recipient([7u8; 20])
        );
    }

    #[test]
    fn contract_creation_is_never_empty() {
        for chain_id in [1, 30, 999_999] {
            let lines = present_address(
                &AddressTarget::ContractCreation,
                chain_id,
                &StaticNetworks,
                &ChecksumAddressCodec,
                ADDRESS_LINE_WIDTH,
            );
            assert_eq!(lines, vec![NO_RECIPIENT]);
        }
    }

    #[test]
    fn addresses_wrap_without_losing_characters() {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[19] = 1;
        let lines = present_address(
            &AddressTarget::Recipient(bytes),
            1,
            &StaticNetworks,
            &ChecksumAddressCodec,
            ADDRESS_LINE_WIDTH,
        );
        assert_eq!(lines, vec!["0x000000000000000", "00000000000000000", "00000001"]);
        assert_eq!(lines.concat(), "0x0000000000000000000000000000000000000001");
    }
}
