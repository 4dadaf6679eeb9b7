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

use crate::{error::LayoutError, text::chunk_str};

const LOG_TARGET: &str = "hardware::ethereum::payload";

/// Default number of raw payload bytes shown on the data screen
pub const MAX_DATA_BYTES: usize = 36;
/// Default number of characters per hex line
pub const DATA_CHUNK_WIDTH: usize = 18;
const ELISION: &str = "..";

/// Contract call data as received by the signer. Only a prefix of the data may be present, `total_length` is the
/// length of the complete payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    data: Vec<u8>,
    total_length: u64,
}

impl Payload {
    pub fn new<T: Into<Vec<u8>>>(data: T, total_length: u64) -> Result<Self, LayoutError> {
        let data = data.into();
        let provided = data.len() as u64;
        if provided > total_length {
            return Err(LayoutError::PayloadLengthMismatch {
                provided,
                total: total_length,
            });
        }
        Ok(Self { data, total_length })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn total_length(&self) -> u64 {
        self.total_length
    }

    pub fn is_truncated(&self, max_bytes: usize) -> bool {
        self.total_length > max_bytes as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedPayload {
    /// Byte count of the complete payload, never of the displayed prefix
    pub size_label: String,
    pub lines: Vec<String>,
}

pub fn split_data(data: &str, chunk_width: usize) -> Vec<String> {
    chunk_str(data, chunk_width)
}

/// Hex encodes at most `max_bytes` of the payload. Payloads longer than that lose their last hex byte to a `..`
/// marker so that the elided display keeps the same width as a full one.
pub fn present_payload(payload: &Payload, max_bytes: usize, chunk_width: usize) -> PresentedPayload {
    let shown = payload.data.len().min(max_bytes);
    let mut data_str = hex::encode(&payload.data[..shown]);
    if payload.is_truncated(max_bytes) {
        data_str.truncate((max_bytes * 2).saturating_sub(ELISION.len()));
        data_str.push_str(ELISION);
        debug!(
            target: LOG_TARGET,
            "Payload of {} bytes elided to {} bytes for display",
            payload.total_length,
            shown
        );
    }

    PresentedPayload {
        size_label: payload.total_length.to_string(),
        lines: split_data(&data_str, chunk_width),
    }
}
