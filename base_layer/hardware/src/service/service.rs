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

use std::time::Duration;

use log::*;
use tokio::{sync::oneshot, time};

use crate::{
    confirm::{ConfirmationBackend, Decision},
    error::ConfirmationError,
    layout::ConfirmationRequest,
    service::handle::DisplayRequestStream,
};

const LOG_TARGET: &str = "hardware::ethereum::display_service";

/// Owns the display backend and shows one confirmation request at a time.
pub struct DisplayService<TBackend> {
    request_stream: Option<DisplayRequestStream>,
    shutdown_signal: Option<oneshot::Receiver<()>>,
    backend: TBackend,
    timeout: Option<Duration>,
}

impl<TBackend> DisplayService<TBackend>
where TBackend: ConfirmationBackend
{
    /// The service stops when `shutdown_signal` fires or its sender is dropped, or once every handle is dropped.
    /// Requests still pending on the display are answered with [`ConfirmationError::ServiceShutdown`].
    pub fn new(
        backend: TBackend,
        request_stream: DisplayRequestStream,
        shutdown_signal: oneshot::Receiver<()>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            request_stream: Some(request_stream),
            shutdown_signal: Some(shutdown_signal),
            backend,
            timeout,
        }
    }

    pub async fn start(mut self) -> Result<(), ConfirmationError> {
        let mut request_stream = self.request_stream.take().ok_or(ConfirmationError::ServiceShutdown)?;
        let mut shutdown = self.shutdown_signal.take().ok_or(ConfirmationError::ServiceShutdown)?;

        loop {
            tokio::select! {
                request = request_stream.recv() => {
                    let (request, reply) = match request {
                        Some(r) => r,
                        None => {
                            info!(target: LOG_TARGET, "All display service handles dropped");
                            break;
                        },
                    };
                    tokio::select! {
                        result = self.handle_request(request) => {
                            if reply.send(result).is_err() {
                                warn!(target: LOG_TARGET, "Caller stopped waiting before the user decided");
                            }
                        },
                        _ = &mut shutdown => {
                            let _ = reply.send(Err(ConfirmationError::ServiceShutdown));
                            info!(target: LOG_TARGET, "Display service shutting down with a request pending");
                            break;
                        },
                    }
                },
                _ = &mut shutdown => {
                    info!(target: LOG_TARGET, "Display service shutting down");
                    break;
                },
            }
        }
        info!(target: LOG_TARGET, "Display service ended");
        Ok(())
    }

    async fn handle_request(&mut self, request: ConfirmationRequest) -> Result<Decision, ConfirmationError> {
        trace!(
            target: LOG_TARGET,
            "Showing {:?} request: {:?}",
            request.flow(),
            request.pages()
        );
        let timeout = match self.timeout {
            Some(t) => t,
            None => return self.backend.confirm(request).await,
        };
        match time::timeout(timeout, self.backend.confirm(request)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    target: LOG_TARGET,
                    "No decision within {:.0?}, treating the request as declined", timeout
                );
                Ok(Decision::Declined)
            },
        }
    }
}
