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

//! Native asset metadata for the EVM chains the signer knows about.

/// Shortcut shown for chains that are not in the network table.
pub const UNKNOWN_SHORTCUT: &str = "UNKN";

/// Wanchain transaction types. Wanchain signs with the chain ids of Ethereum mainnet and Ropsten, so the native
/// asset can only be told apart by the transaction type.
const WANCHAIN_TX_TYPES: [u32; 2] = [1, 6];
const WANCHAIN_CHAIN_IDS: [u64; 2] = [1, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkDescriptor {
    pub chain_id: u64,
    pub slip44: u32,
    pub shortcut: &'static str,
    pub name: &'static str,
    /// Whether addresses on this chain carry an RSKIP-60 (chain id salted) checksum
    pub rskip60: bool,
}

impl NetworkDescriptor {
    const fn new(chain_id: u64, slip44: u32, shortcut: &'static str, name: &'static str, rskip60: bool) -> Self {
        Self {
            chain_id,
            slip44,
            shortcut,
            name,
            rskip60,
        }
    }

    pub const fn unknown(chain_id: u64) -> Self {
        Self::new(chain_id, 0, UNKNOWN_SHORTCUT, "Unknown network", false)
    }

    pub const fn wanchain(chain_id: u64) -> Self {
        Self::new(chain_id, 5_718_350, "WAN", "Wanchain", false)
    }

    pub fn is_known(&self) -> bool {
        self.shortcut != UNKNOWN_SHORTCUT
    }
}

static NETWORKS: [NetworkDescriptor; 12] = [
    NetworkDescriptor::new(1, 60, "ETH", "Ethereum", false),
    NetworkDescriptor::new(2, 40, "EXP", "Expanse", false),
    NetworkDescriptor::new(3, 1, "tROP", "Ethereum Testnet Ropsten", false),
    NetworkDescriptor::new(4, 1, "tRIN", "Ethereum Testnet Rinkeby", false),
    NetworkDescriptor::new(8, 108, "UBQ", "UBIQ", false),
    NetworkDescriptor::new(30, 137, "RBTC", "RSK", true),
    NetworkDescriptor::new(31, 37310, "tRBTC", "RSK Testnet", true),
    NetworkDescriptor::new(42, 1, "tKOV", "Ethereum Testnet Kovan", false),
    NetworkDescriptor::new(61, 61, "ETC", "Ethereum Classic", false),
    NetworkDescriptor::new(62, 1, "tETC", "Ethereum Classic Testnet", false),
    NetworkDescriptor::new(64, 164, "ELLA", "Ellaism", false),
    NetworkDescriptor::new(1987, 1987, "EGEM", "EtherGem", false),
];

/// Resolves chain ids to native asset metadata.
pub trait NetworkLookup {
    fn by_chain_id(&self, chain_id: u64) -> Option<&NetworkDescriptor>;

    /// The native asset that pays for a transaction of `tx_type` on `chain_id`. Never fails: chains that cannot be
    /// resolved produce a descriptor with the [`UNKNOWN_SHORTCUT`] symbol.
    fn native_asset(&self, chain_id: u64, tx_type: Option<u32>) -> NetworkDescriptor {
        if tx_type.map_or(false, |t| WANCHAIN_TX_TYPES.contains(&t)) && WANCHAIN_CHAIN_IDS.contains(&chain_id) {
            return NetworkDescriptor::wanchain(chain_id);
        }
        self.by_chain_id(chain_id)
            .copied()
            .unwrap_or_else(|| NetworkDescriptor::unknown(chain_id))
    }
}

/// The network table compiled into the signer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticNetworks;

impl NetworkLookup for StaticNetworks {
    fn by_chain_id(&self, chain_id: u64) -> Option<&NetworkDescriptor> {
        NETWORKS.iter().find(|n| n.chain_id == chain_id)
    }
}

pub fn shortcut_by_chain_id(chain_id: u64, tx_type: Option<u32>) -> &'static str {
    StaticNetworks.native_asset(chain_id, tx_type).shortcut
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_resolves_known_chains() {
        assert_eq!(shortcut_by_chain_id(1, None), "ETH");
        assert_eq!(shortcut_by_chain_id(61, None), "ETC");
        let rsk = StaticNetworks.by_chain_id(30).unwrap();
        assert!(rsk.rskip60);
        assert_eq!(rsk.shortcut, "RBTC");
    }

    #[test]
    fn it_falls_back_for_unknown_chains() {
        assert_eq!(shortcut_by_chain_id(999_999, None), UNKNOWN_SHORTCUT);
        assert!(StaticNetworks.by_chain_id(999_999).is_none());
        assert!(!StaticNetworks.native_asset(999_999, None).is_known());
    }

    #[test]
    fn wanchain_tx_types_override_the_chain_shortcut() {
        assert_eq!(shortcut_by_chain_id(1, Some(1)), "WAN");
        assert_eq!(shortcut_by_chain_id(3, Some(6)), "WAN");
        assert_eq!(shortcut_by_chain_id(1, Some(2)), "ETH");
        assert_eq!(shortcut_by_chain_id(61, Some(1)), "ETC");
    }
}
