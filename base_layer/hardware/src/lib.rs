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

//! # Ethereum confirmation layouts
//!
//! Presentation logic for the screens a hardware signer shows right before it signs an Ethereum transaction. The
//! caller supplies already parsed transaction fields; this crate formats amounts, addresses and call data for a
//! narrow display, decides which gesture the user has to perform and hands the result to a
//! [`ConfirmationBackend`].
//!
//! ```
//! use ethereum_confirm_layout::{AddressTarget, ConfirmationComposer, Gesture};
//! use primitive_types::U256;
//!
//! let composer = ConfirmationComposer::default();
//! let mut to = [0u8; 20];
//! to[19] = 1;
//! let request = composer.compose_transfer(
//!     &AddressTarget::Recipient(to),
//!     U256::from(1_500_000_000_000_000_000u64),
//!     1,
//!     None,
//! );
//! assert_eq!(request.gesture(), Gesture::Tap);
//! assert_eq!(request.pages()[0].bold_text(), vec!["1.5 ETH"]);
//! ```

pub mod address;
pub mod amount;
pub mod config;
pub mod configuration;
pub mod confirm;
pub mod error;
pub mod layout;
pub mod networks;
pub mod payload;
pub mod service;
pub mod text;
pub mod tokens;

pub use address::{AddressCodec, AddressTarget, ChecksumAddressCodec};
pub use config::LayoutConfig;
pub use confirm::{ConfirmationBackend, Decision, EthereumConfirmations};
pub use error::{ConfirmationError, LayoutError};
pub use layout::{ButtonRequestType, ConfirmationComposer, ConfirmationFlow, ConfirmationRequest, Gesture};
pub use networks::{NetworkDescriptor, NetworkLookup, StaticNetworks};
pub use payload::Payload;
pub use text::{StyleTheme, TextBlock};
pub use tokens::TokenDescriptor;
