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

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use ethereum_confirm_layout::{
    address::{ADDRESS_LENGTH, NO_RECIPIENT},
    service::spawn_display_service,
    ButtonRequestType,
    ConfirmationBackend,
    ConfirmationComposer,
    ConfirmationError,
    ConfirmationFlow,
    ConfirmationRequest,
    Decision,
    EthereumConfirmations,
    Gesture,
    LayoutConfig,
    TokenDescriptor,
};
use primitive_types::U256;

type Seen = Arc<Mutex<Vec<ConfirmationRequest>>>;

struct RecordingUser {
    decisions: VecDeque<Decision>,
    seen: Seen,
}

impl RecordingUser {
    fn new<I: IntoIterator<Item = Decision>>(decisions: I) -> (Self, Seen) {
        let seen = Seen::default();
        let user = Self {
            decisions: decisions.into_iter().collect(),
            seen: seen.clone(),
        };
        (user, seen)
    }
}

#[async_trait]
impl ConfirmationBackend for RecordingUser {
    async fn confirm(&mut self, request: ConfirmationRequest) -> Result<Decision, ConfirmationError> {
        self.seen.lock().unwrap().push(request);
        match self.decisions.pop_front() {
            Some(decision) => Ok(decision),
            None => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Decision::Confirmed)
            },
        }
    }
}

fn address(last: u8) -> [u8; ADDRESS_LENGTH] {
    let mut bytes = [0u8; ADDRESS_LENGTH];
    bytes[ADDRESS_LENGTH - 1] = last;
    bytes
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

#[tokio::test]
async fn it_confirms_a_plain_transfer_through_the_display_service() {
    let config = LayoutConfig::default();
    let (user, seen) = RecordingUser::new([Decision::Confirmed]);
    let (handle, _shutdown, _join) = spawn_display_service(user, &config);
    let mut confirmations = EthereumConfirmations::new(ConfirmationComposer::with_config(config), handle);

    let to = address(1);
    let decision = confirmations
        .confirm_plain_transfer(Some(&to[..]), U256::exp10(18), 1, None)
        .await
        .unwrap();
    assert_eq!(decision, Decision::Confirmed);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.flow(), ConfirmationFlow::Transfer);
    assert_eq!(request.gesture(), Gesture::Tap);
    assert_eq!(request.request_type(), ButtonRequestType::SignTx);
    assert_eq!(request.pages()[0].title(), "Confirm sending");
    assert_eq!(request.pages()[0].render_lines(), vec![
        "1 ETH to",
        "0x000000000000000",
        "00000000000000000",
        "00000001"
    ]);
}

#[tokio::test]
async fn it_shows_contract_creation_in_place_of_a_recipient() {
    let config = LayoutConfig::default();
    let (user, seen) = RecordingUser::new([Decision::Declined]);
    let (handle, _shutdown, _join) = spawn_display_service(user, &config);
    let mut confirmations = EthereumConfirmations::new(ConfirmationComposer::with_config(config), handle);

    let decision = confirmations
        .confirm_plain_transfer(None, U256::from(5u64), 61, None)
        .await
        .unwrap();
    assert_eq!(decision, Decision::Declined);
    assert!(matches!(
        decision.require_confirmed(),
        Err(ConfirmationError::ActionCancelled)
    ));

    let seen = seen.lock().unwrap();
    let page = &seen[0].pages()[0];
    assert_eq!(page.bold_text(), vec!["5 Wei ETC"]);
    assert_eq!(page.mono_text(), vec![NO_RECIPIENT]);
}

#[tokio::test]
async fn it_pages_through_a_token_transfer() {
    let config = LayoutConfig::default();
    let (user, seen) = RecordingUser::new([Decision::Confirmed]);
    let (handle, _shutdown, _join) = spawn_display_service(user, &config);
    let mut confirmations = EthereumConfirmations::new(ConfirmationComposer::with_config(config), handle);

    let to = address(2);
    let value = U256::from(2_500_000_000_000_000_000u64);
    confirmations
        .confirm_token_transfer(Some(&to[..]), value, 1, &dai(), None)
        .await
        .unwrap()
        .require_confirmed()
        .unwrap();

    let seen = seen.lock().unwrap();
    let request = &seen[0];
    assert_eq!(request.flow(), ConfirmationFlow::TokenTransfer);
    assert!(request.is_paginated());
    assert_eq!(request.pages()[0].bold_text(), vec!["2.5 DAI"]);
    assert_eq!(request.pages()[1].title(), "Confirm transaction");
    assert_eq!(request.pages()[1].mono_text(), vec![
        "0x6b175474e89094c4",
        "4da98b954eedeac495",
        "271d0f"
    ]);
}

#[tokio::test]
async fn it_asks_to_hold_for_the_fee() {
    let config = LayoutConfig::default();
    let (user, seen) = RecordingUser::new([Decision::Confirmed]);
    let (handle, _shutdown, _join) = spawn_display_service(user, &config);
    let mut confirmations = EthereumConfirmations::new(ConfirmationComposer::with_config(config), handle);

    let decision = confirmations
        .confirm_fee(
            U256::exp10(18),
            U256::from(20_000_000_000u64),
            U256::from(21_000u64),
            1,
            None,
            None,
        )
        .await
        .unwrap();
    assert!(decision.is_confirmed());

    let seen = seen.lock().unwrap();
    let request = &seen[0];
    assert_eq!(request.gesture(), Gesture::Hold);
    assert_eq!(request.pages()[0].bold_text(), vec!["1 ETH", "0.00000002 ETH", "0.00042 ETH"]);
}

#[tokio::test]
async fn it_elides_long_payloads() {
    let config = LayoutConfig::default();
    let (user, seen) = RecordingUser::new([Decision::Confirmed]);
    let (handle, _shutdown, _join) = spawn_display_service(user, &config);
    let mut confirmations = EthereumConfirmations::new(ConfirmationComposer::with_config(config), handle);

    confirmations.confirm_payload(&[0xab; 40], 100).await.unwrap();

    let seen = seen.lock().unwrap();
    let page = &seen[0].pages()[0];
    assert_eq!(page.title(), "Confirm data");
    assert_eq!(page.bold_text(), vec!["Size: 100 bytes"]);
    let lines = page.mono_text();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "abababababababab..");
}

#[tokio::test]
async fn it_rejects_malformed_input_without_prompting() {
    let config = LayoutConfig::default();
    let (user, seen) = RecordingUser::new([]);
    let (handle, _shutdown, _join) = spawn_display_service(user, &config);
    let mut confirmations = EthereumConfirmations::new(ConfirmationComposer::with_config(config), handle);

    let err = confirmations
        .confirm_plain_transfer(Some(&[1u8; 19][..]), U256::one(), 1, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ConfirmationError::MalformedInput(_)));
    let err = confirmations.confirm_payload(&[0u8; 8], 4).await.unwrap_err();
    assert!(matches!(err, ConfirmationError::MalformedInput(_)));
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn an_unanswered_screen_times_out_as_declined() {
    let config = LayoutConfig {
        confirmation_timeout_secs: Some(30),
        ..Default::default()
    };
    let (user, _seen) = RecordingUser::new([]);
    let (handle, _shutdown, _join) = spawn_display_service(user, &config);
    let mut confirmations = EthereumConfirmations::new(ConfirmationComposer::with_config(config), handle);

    let decision = confirmations.confirm_payload(&[1, 2, 3], 3).await.unwrap();
    assert_eq!(decision, Decision::Declined);
}

#[tokio::test]
async fn requests_fail_after_shutdown() {
    let config = LayoutConfig::default();
    let (user, _seen) = RecordingUser::new([]);
    let (handle, shutdown, join) = spawn_display_service(user, &config);
    let mut confirmations = EthereumConfirmations::new(ConfirmationComposer::with_config(config), handle);

    shutdown.send(()).unwrap();
    join.await.unwrap().unwrap();
    let err = confirmations.confirm_payload(&[1], 1).await.unwrap_err();
    assert!(matches!(err, ConfirmationError::ServiceShutdown));
}
