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

use async_trait::async_trait;
use log::*;
use primitive_types::U256;

use crate::{
    address::{AddressCodec, AddressTarget},
    error::ConfirmationError,
    layout::{ConfirmationComposer, ConfirmationRequest},
    networks::NetworkLookup,
    payload::Payload,
    tokens::TokenDescriptor,
};

const LOG_TARGET: &str = "hardware::ethereum::confirm";

/// The user's answer to a confirmation request. Declining (or letting the request time out) is a valid outcome,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Declined,
}

impl Decision {
    pub fn is_confirmed(self) -> bool {
        self == Decision::Confirmed
    }

    /// Turns a decline into [`ConfirmationError::ActionCancelled`], for callers that abort the signing flow with `?`.
    pub fn require_confirmed(self) -> Result<(), ConfirmationError> {
        match self {
            Decision::Confirmed => Ok(()),
            Decision::Declined => Err(ConfirmationError::ActionCancelled),
        }
    }
}

/// Renders a request on a display and waits for the user. Pages of a paginated request are shown in order before
/// the decision is taken.
#[async_trait]
pub trait ConfirmationBackend: Send {
    async fn confirm(&mut self, request: ConfirmationRequest) -> Result<Decision, ConfirmationError>;
}

/// The Ethereum confirmation flows. Each call composes a fresh request, hands it to the backend and returns the
/// user's decision.
pub struct EthereumConfirmations<TBackend, TNetworks, TCodec> {
    composer: ConfirmationComposer<TNetworks, TCodec>,
    backend: TBackend,
}

impl<TBackend, TNetworks, TCodec> EthereumConfirmations<TBackend, TNetworks, TCodec>
where
    TBackend: ConfirmationBackend,
    TNetworks: NetworkLookup,
    TCodec: AddressCodec,
{
    pub fn new(composer: ConfirmationComposer<TNetworks, TCodec>, backend: TBackend) -> Self {
        Self { composer, backend }
    }

    pub fn composer(&self) -> &ConfirmationComposer<TNetworks, TCodec> {
        &self.composer
    }

    pub fn backend(&self) -> &TBackend {
        &self.backend
    }

    pub async fn confirm_plain_transfer(
        &mut self,
        to: Option<&[u8]>,
        value: U256,
        chain_id: u64,
        tx_type: Option<u32>,
    ) -> Result<Decision, ConfirmationError> {
        let to = AddressTarget::from_bytes(to)?;
        let request = self.composer.compose_transfer(&to, value, chain_id, tx_type);
        self.present(request).await
    }

    pub async fn confirm_token_transfer(
        &mut self,
        to: Option<&[u8]>,
        value: U256,
        chain_id: u64,
        token: &TokenDescriptor,
        tx_type: Option<u32>,
    ) -> Result<Decision, ConfirmationError> {
        let to = AddressTarget::from_bytes(to)?;
        let request = self
            .composer
            .compose_token_transfer(&to, value, chain_id, token, tx_type);
        self.present(request).await
    }

    pub async fn confirm_fee(
        &mut self,
        spending: U256,
        gas_price: U256,
        gas_limit: U256,
        chain_id: u64,
        token: Option<&TokenDescriptor>,
        tx_type: Option<u32>,
    ) -> Result<Decision, ConfirmationError> {
        let request = self
            .composer
            .compose_fee(spending, gas_price, gas_limit, chain_id, token, tx_type);
        self.present(request).await
    }

    pub async fn confirm_payload(&mut self, data: &[u8], data_total: u64) -> Result<Decision, ConfirmationError> {
        let payload = Payload::new(data, data_total)?;
        let request = self.composer.compose_payload(&payload);
        self.present(request).await
    }

    /// The single suspension point of every flow
    pub async fn present(&mut self, request: ConfirmationRequest) -> Result<Decision, ConfirmationError> {
        let flow = request.flow();
        debug!(
            target: LOG_TARGET,
            "Requesting {:?} confirmation ({} page(s), {:?}, {})",
            flow,
            request.pages().len(),
            request.gesture(),
            request.request_type()
        );
        match self.backend.confirm(request).await {
            Ok(Decision::Confirmed) => {
                info!(target: LOG_TARGET, "{:?} confirmed by the user", flow);
                Ok(Decision::Confirmed)
            },
            Ok(Decision::Declined) => {
                warn!(target: LOG_TARGET, "{:?} declined by the user", flow);
                Ok(Decision::Declined)
            },
            Err(e) => {
                error!(target: LOG_TARGET, "{:?} confirmation failed: {}", flow, e);
                Err(e)
            },
        }
    }
}
