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
use tokio::sync::{mpsc, oneshot};

use crate::{
    confirm::{ConfirmationBackend, Decision},
    error::ConfirmationError,
    layout::ConfirmationRequest,
};

pub type DisplayReply = oneshot::Sender<Result<Decision, ConfirmationError>>;
pub type DisplayRequestStream = mpsc::UnboundedReceiver<(ConfirmationRequest, DisplayReply)>;

/// Create a handle and the request stream consumed by a [`DisplayService`](super::DisplayService)
pub fn channel() -> (DisplayServiceHandle, DisplayRequestStream) {
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    (DisplayServiceHandle { request_tx }, request_rx)
}

/// Queues confirmation requests on the display service. Cloned handles share the one display, requests are shown in
/// the order they arrive.
#[derive(Clone)]
pub struct DisplayServiceHandle {
    request_tx: mpsc::UnboundedSender<(ConfirmationRequest, DisplayReply)>,
}

impl DisplayServiceHandle {
    pub fn is_closed(&self) -> bool {
        self.request_tx.is_closed()
    }
}

#[async_trait]
impl ConfirmationBackend for DisplayServiceHandle {
    async fn confirm(&mut self, request: ConfirmationRequest) -> Result<Decision, ConfirmationError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.request_tx
            .send((request, reply_tx))
            .map_err(|_| ConfirmationError::ServiceShutdown)?;
        reply_rx.await.map_err(|_| ConfirmationError::ServiceShutdown)?
    }
}
