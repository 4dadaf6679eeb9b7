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

//! Composition of Ethereum confirmation screens.
//!
//! Composing never fails and never touches a display: it turns validated transaction fields into a
//! [`ConfirmationRequest`] that a [`ConfirmationBackend`](crate::confirm::ConfirmationBackend) consumes exactly once.

use std::fmt::{Display, Error, Formatter};

use log::*;
use primitive_types::{U256, U512};

use crate::{
    address::{present_address, AddressCodec, AddressTarget, ChecksumAddressCodec},
    amount::{format_ethereum_amount, AmountUnit},
    config::LayoutConfig,
    networks::{NetworkLookup, StaticNetworks},
    payload::{present_payload, split_data, Payload, PresentedPayload},
    text::{StyleTheme, TextBlock},
    tokens::TokenDescriptor,
};

const LOG_TARGET: &str = "hardware::ethereum::layout";

/// How the user has to confirm a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    /// Sustained press, reserved for the final step that authorises moving funds
    Hold,
}

/// Button request codes reported to the host while a confirmation is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ButtonRequestType {
    Other = 1,
    FeeOverThreshold = 2,
    ConfirmOutput = 3,
    ResetDevice = 4,
    ConfirmWord = 5,
    WipeDevice = 6,
    ProtectCall = 7,
    SignTx = 8,
    FirmwareCheck = 9,
    Address = 10,
    PublicKey = 11,
}

impl ButtonRequestType {
    pub fn code(self) -> u32 {
        self as u32
    }
}

impl Display for ButtonRequestType {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{:?} ({})", self, self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationFlow {
    Transfer,
    TokenTransfer,
    Fee,
    Data,
}

/// Button request types reported for each flow. Transfers and data report `SignTx` rather than `ConfirmOutput` so
/// hosts written for older devices keep recognising them. New flows get an entry here, existing ones do not change.
const LEGACY_REQUEST_TYPES: [(ConfirmationFlow, ButtonRequestType); 4] = [
    (ConfirmationFlow::Transfer, ButtonRequestType::SignTx),
    (ConfirmationFlow::TokenTransfer, ButtonRequestType::SignTx),
    (ConfirmationFlow::Fee, ButtonRequestType::SignTx),
    (ConfirmationFlow::Data, ButtonRequestType::SignTx),
];

impl ConfirmationFlow {
    pub fn request_type(self) -> ButtonRequestType {
        LEGACY_REQUEST_TYPES
            .iter()
            .find(|(flow, _)| *flow == self)
            .map(|(_, request_type)| *request_type)
            .unwrap_or(ButtonRequestType::Other)
    }

    pub fn gesture(self) -> Gesture {
        match self {
            ConfirmationFlow::Fee => Gesture::Hold,
            ConfirmationFlow::Transfer | ConfirmationFlow::TokenTransfer | ConfirmationFlow::Data => Gesture::Tap,
        }
    }
}

/// Screens plus the gesture needed to approve them. More than one page is shown as a paginated sequence before the
/// decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    flow: ConfirmationFlow,
    pages: Vec<TextBlock>,
}

impl ConfirmationRequest {
    fn new(flow: ConfirmationFlow, pages: Vec<TextBlock>) -> Self {
        Self { flow, pages }
    }

    pub fn flow(&self) -> ConfirmationFlow {
        self.flow
    }

    pub fn pages(&self) -> &[TextBlock] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<TextBlock> {
        self.pages
    }

    pub fn gesture(&self) -> Gesture {
        self.flow.gesture()
    }

    pub fn request_type(&self) -> ButtonRequestType {
        self.flow.request_type()
    }

    pub fn is_paginated(&self) -> bool {
        self.pages.len() > 1
    }
}

pub struct ConfirmationComposer<TNetworks = StaticNetworks, TCodec = ChecksumAddressCodec> {
    config: LayoutConfig,
    networks: TNetworks,
    codec: TCodec,
}

impl ConfirmationComposer {
    pub fn with_config(config: LayoutConfig) -> Self {
        Self::new(config, StaticNetworks, ChecksumAddressCodec)
    }
}

impl Default for ConfirmationComposer {
    fn default() -> Self {
        Self::with_config(LayoutConfig::default())
    }
}

impl<TNetworks, TCodec> ConfirmationComposer<TNetworks, TCodec>
where
    TNetworks: NetworkLookup,
    TCodec: AddressCodec,
{
    pub fn new(config: LayoutConfig, networks: TNetworks, codec: TCodec) -> Self {
        Self {
            config,
            networks,
            codec,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn theme(&self) -> &StyleTheme {
        &self.config.theme
    }

    /// Formats `value` in units of `token`, or of the native asset of `chain_id` when no token is given.
    pub fn format_ethereum_amount<T: Into<U512>>(
        &self,
        value: T,
        token: Option<&TokenDescriptor>,
        chain_id: u64,
        tx_type: Option<u32>,
    ) -> String {
        match token {
            Some(token) => format_ethereum_amount(value, AmountUnit::Token(token)),
            None => {
                let network = self.networks.native_asset(chain_id, tx_type);
                format_ethereum_amount(value, AmountUnit::Native(&network))
            },
        }
    }

    pub fn present_address(&self, to: &AddressTarget, chain_id: u64) -> Vec<String> {
        present_address(
            to,
            chain_id,
            &self.networks,
            &self.codec,
            self.config.address_line_width,
        )
    }

    pub fn present_payload(&self, payload: &Payload) -> PresentedPayload {
        present_payload(payload, self.config.max_data_bytes, self.config.data_chunk_width)
    }

    fn address_amount_screen(
        &self,
        to: &AddressTarget,
        value: U256,
        chain_id: u64,
        token: Option<&TokenDescriptor>,
        tx_type: Option<u32>,
    ) -> TextBlock {
        let theme = self.theme();
        let mut text = TextBlock::new("Confirm sending", theme.icon, theme.heading).flowing();
        text.bold(self.format_ethereum_amount(value, token, chain_id, tx_type));
        text.normal(theme.label, "to");
        for line in self.present_address(to, chain_id) {
            text.br();
            text.mono([line]);
        }
        text
    }

    /// One screen: amount in the native asset and the recipient.
    pub fn compose_transfer(
        &self,
        to: &AddressTarget,
        value: U256,
        chain_id: u64,
        tx_type: Option<u32>,
    ) -> ConfirmationRequest {
        debug!(target: LOG_TARGET, "Composing transfer on chain {}", chain_id);
        let screen = self.address_amount_screen(to, value, chain_id, None, tx_type);
        ConfirmationRequest::new(ConfirmationFlow::Transfer, vec![screen])
    }

    /// Two pages: the token amount and recipient, then the token contract.
    pub fn compose_token_transfer(
        &self,
        to: &AddressTarget,
        value: U256,
        chain_id: u64,
        token: &TokenDescriptor,
        tx_type: Option<u32>,
    ) -> ConfirmationRequest {
        debug!(
            target: LOG_TARGET,
            "Composing {} token transfer on chain {}", token.symbol, chain_id
        );
        let address_amount = self.address_amount_screen(to, value, chain_id, Some(token), tx_type);

        let theme = self.theme();
        let mut contract = TextBlock::new("Confirm transaction", theme.icon, theme.heading).flowing();
        contract.normal(theme.label, "Contract:");
        contract.mono(split_data(&token.contract_address_hex(), self.config.data_chunk_width));

        ConfirmationRequest::new(ConfirmationFlow::TokenTransfer, vec![address_amount, contract])
    }

    /// One screen: amount being spent, gas price and the maximum fee `gas_price * gas_limit`, both in the native
    /// asset.
    pub fn compose_fee(
        &self,
        spending: U256,
        gas_price: U256,
        gas_limit: U256,
        chain_id: u64,
        token: Option<&TokenDescriptor>,
        tx_type: Option<u32>,
    ) -> ConfirmationRequest {
        let max_fee = gas_price.full_mul(gas_limit);
        debug!(
            target: LOG_TARGET,
            "Composing fee on chain {}: gas price {} limit {} max fee {}", chain_id, gas_price, gas_limit, max_fee
        );
        let theme = self.theme();
        let mut text = TextBlock::new("Confirm transaction", theme.icon, theme.heading).flowing();
        text.bold(self.format_ethereum_amount(spending, token, chain_id, tx_type));
        text.normal(theme.label, "Gas price:");
        text.bold(self.format_ethereum_amount(gas_price, None, chain_id, tx_type));
        text.normal(theme.label, "Maximum fee:");
        text.bold(self.format_ethereum_amount(max_fee, None, chain_id, tx_type));
        ConfirmationRequest::new(ConfirmationFlow::Fee, vec![text])
    }

    /// One screen: total payload size and the hex of its leading bytes.
    pub fn compose_payload(&self, payload: &Payload) -> ConfirmationRequest {
        let presented = self.present_payload(payload);
        debug!(
            target: LOG_TARGET,
            "Composing data screen for {} bytes", presented.size_label
        );
        let theme = self.theme();
        let mut text = TextBlock::new("Confirm data", theme.icon, theme.heading);
        text.bold(format!("Size: {} bytes", presented.size_label));
        text.mono(presented.lines);
        ConfirmationRequest::new(ConfirmationFlow::Data, vec![text])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        address::{ADDRESS_LENGTH, NO_RECIPIENT},
        text::{Color, Span},
    };

    fn recipient(last: u8) -> AddressTarget {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[ADDRESS_LENGTH - 1] = last;
        AddressTarget::Recipient(bytes)
    }

    fn dai() -> TokenDescriptor {
        let contract = hex::decode("6b175474e89094c44da98b954eedeac495271d0f").unwrap();
        TokenDescriptor::new(
            <[u8; ADDRESS_LENGTH]>::try_from(contract.as_slice()).unwrap(),
            "Dai Stablecoin",
            "DAI",
            18,
        )
    }

    #[test]
    fn every_flow_reports_sign_tx() {
        for flow in [
            ConfirmationFlow::Transfer,
            ConfirmationFlow::TokenTransfer,
            ConfirmationFlow::Fee,
            ConfirmationFlow::Data,
        ] {
            assert_eq!(flow.request_type(), ButtonRequestType::SignTx);
            assert_eq!(flow.request_type().code(), 8);
        }
    }

    #[test]
    fn only_fees_need_a_hold() {
        let composer = ConfirmationComposer::default();
        let to = recipient(1);
        let payload = Payload::new(vec![1, 2, 3], 3).unwrap();
        for value in [U256::zero(), U256::from(5u64), U256::MAX] {
            assert_eq!(composer.compose_transfer(&to, value, 1, None).gesture(), Gesture::Tap);
            assert_eq!(
                composer.compose_token_transfer(&to, value, 1, &dai(), None).gesture(),
                Gesture::Tap
            );
            assert_eq!(
                composer.compose_fee(value, value, value, 1, None, None).gesture(),
                Gesture::Hold
            );
        }
        assert_eq!(composer.compose_payload(&payload).gesture(), Gesture::Tap);
    }

    #[test]
    fn transfer_screen() {
        let composer = ConfirmationComposer::default();
        let request = composer.compose_transfer(&recipient(1), U256::from(1_500_000_000_000_000_000u64), 1, None);
        assert_eq!(request.flow(), ConfirmationFlow::Transfer);
        assert!(!request.is_paginated());
        let screen = &request.pages()[0];
        assert_eq!(screen.title(), "Confirm sending");
        assert_eq!(screen.icon_color(), Color::GREEN);
        assert_eq!(screen.bold_text(), vec!["1.5 ETH"]);
        assert_eq!(screen.mono_text(), vec!["0x000000000000000", "00000000000000000", "00000001"]);
        assert_eq!(screen.spans()[1], Span::Normal {
            color: Color::GREY,
            text: "to".to_string()
        });
        assert_eq!(screen.render_lines(), vec![
            "1.5 ETH to",
            "0x000000000000000",
            "00000000000000000",
            "00000001"
        ]);
    }

    #[test]
    fn transfer_to_nobody_creates_a_contract() {
        let composer = ConfirmationComposer::default();
        let request = composer.compose_transfer(&AddressTarget::ContractCreation, U256::zero(), 61, None);
        let screen = &request.pages()[0];
        assert_eq!(screen.mono_text(), vec![NO_RECIPIENT]);
        assert_eq!(screen.bold_text(), vec!["0 Wei ETC"]);
    }

    #[test]
    fn wanchain_transfers_use_the_wan_symbol() {
        let composer = ConfirmationComposer::default();
        let request = composer.compose_transfer(&recipient(2), U256::from(2_000_000_000_000_000_000u64), 1, Some(1));
        assert_eq!(request.pages()[0].bold_text(), vec!["2 WAN"]);
    }

    #[test]
    fn token_transfer_pages() {
        let composer = ConfirmationComposer::default();
        let value = U256::from_dec_str("12345000000000000000000").unwrap();
        let request = composer.compose_token_transfer(&recipient(1), value, 1, &dai(), None);
        assert_eq!(request.flow(), ConfirmationFlow::TokenTransfer);
        assert!(request.is_paginated());
        assert_eq!(request.pages().len(), 2);
        assert_eq!(request.pages()[0].bold_text(), vec!["12345 DAI"]);
        let contract = &request.pages()[1];
        assert_eq!(contract.title(), "Confirm transaction");
        assert_eq!(contract.mono_text(), vec!["0x6b175474e89094c4", "4da98b954eedeac495", "271d0f"]);
        assert_eq!(contract.render_lines(), vec![
            "Contract: 0x6b175474e89094c4 4da98b954eedeac495 271d0f"
        ]);
    }

    #[test]
    fn fee_screen() {
        let composer = ConfirmationComposer::default();
        let request = composer.compose_fee(
            U256::from(1_000_000_000_000_000_000u64),
            U256::from(20_000_000_000u64),
            U256::from(21_000u64),
            1,
            None,
            None,
        );
        assert_eq!(request.flow(), ConfirmationFlow::Fee);
        assert_eq!(request.pages()[0].bold_text(), vec!["1 ETH", "0.00000002 ETH", "0.00042 ETH"]);
        assert_eq!(request.pages()[0].render_lines(), vec![
            "1 ETH Gas price: 0.00000002 ETH Maximum fee: 0.00042 ETH"
        ]);
    }

    #[test]
    fn fee_for_a_token_spend() {
        let composer = ConfirmationComposer::default();
        let request = composer.compose_fee(
            U256::from(5u64),
            U256::from(1u64 << 60),
            U256::from(1u64 << 10),
            1,
            Some(&dai()),
            None,
        );
        assert_eq!(request.pages()[0].bold_text(), vec![
            "5 Wei DAI",
            "1.152921504606846976 ETH",
            "1180.591620717411303424 ETH"
        ]);
    }

    #[test]
    fn fee_of_maximal_gas_does_not_overflow() {
        let composer = ConfirmationComposer::default();
        let request = composer.compose_fee(U256::zero(), U256::MAX, U256::MAX, 1, None, None);
        let max_fee = request.pages()[0].bold_text()[2].to_string();
        let expected = crate::amount::format_amount(U256::MAX.full_mul(U256::MAX), 18);
        assert_eq!(max_fee, format!("{} ETH", expected));
    }

    #[test]
    fn data_screen() {
        let composer = ConfirmationComposer::default();
        let payload = Payload::new(vec![0xa9, 0x05, 0x9c, 0xbb], 4).unwrap();
        let request = composer.compose_payload(&payload);
        let screen = &request.pages()[0];
        assert_eq!(screen.title(), "Confirm data");
        assert_eq!(screen.render_lines(), vec!["Size: 4 bytes", "a9059cbb"]);

        let payload = Payload::new(vec![0u8; 36], 1200).unwrap();
        let request = composer.compose_payload(&payload);
        let screen = &request.pages()[0];
        assert_eq!(screen.bold_text(), vec!["Size: 1200 bytes"]);
        assert_eq!(screen.mono_text().concat().len(), 72);
        assert!(screen.mono_text().concat().ends_with(".."));
    }

    #[test]
    fn configured_widths_are_respected() {
        let config = LayoutConfig {
            address_line_width: 42,
            data_chunk_width: 8,
            ..Default::default()
        };
        let composer = ConfirmationComposer::with_config(config);
        let request = composer.compose_transfer(&recipient(1), U256::one(), 1, None);
        assert_eq!(request.pages()[0].mono_text(), vec![
            "0x0000000000000000000000000000000000000001"
        ]);
        let payload = Payload::new(vec![0xff; 8], 8).unwrap();
        assert_eq!(composer.compose_payload(&payload).pages()[0].mono_text(), vec![
            "ffffffff", "ffffffff"
        ]);
    }
}
