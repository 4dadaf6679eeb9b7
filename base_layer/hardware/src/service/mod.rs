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

//! A service that owns the physical display and serialises confirmation requests onto it.

mod handle;
#[allow(clippy::module_inception)]
mod service;

pub use handle::{channel, DisplayReply, DisplayRequestStream, DisplayServiceHandle};
pub use service::DisplayService;
use tokio::{
    sync::oneshot,
    task::{self, JoinHandle},
};

use crate::{config::LayoutConfig, confirm::ConfirmationBackend, error::ConfirmationError};

/// Spawns a [`DisplayService`] around `backend` on the current runtime. Sending on (or dropping) the returned
/// shutdown sender stops the service.
pub fn spawn_display_service<TBackend>(
    backend: TBackend,
    config: &LayoutConfig,
) -> (
    DisplayServiceHandle,
    oneshot::Sender<()>,
    JoinHandle<Result<(), ConfirmationError>>,
)
where
    TBackend: ConfirmationBackend + 'static,
{
    let (handle, request_stream) = channel();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let service = DisplayService::new(backend, request_stream, shutdown_rx, config.confirmation_timeout());
    let join_handle = task::spawn(service.start());
    (handle, shutdown_tx, join_handle)
}
