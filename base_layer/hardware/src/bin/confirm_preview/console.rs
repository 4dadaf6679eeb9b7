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
use ethereum_confirm_layout::{
    ConfirmationBackend,
    ConfirmationError,
    ConfirmationRequest,
    Decision,
    Gesture,
    TextBlock,
};
use log::*;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

const LOG_TARGET: &str = "hardware::ethereum::preview::console";

/// Draws confirmation pages on the terminal and reads the user's answer from stdin. End of input declines.
pub struct ConsoleBackend {
    input: Lines<BufReader<Stdin>>,
    output: Stdout,
}

impl ConsoleBackend {
    pub fn new() -> Self {
        Self {
            input: BufReader::new(io::stdin()).lines(),
            output: io::stdout(),
        }
    }

}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBackend {
    async fn write(&mut self, text: &str) -> Result<(), ConfirmationError> {
        self.output.write_all(text.as_bytes()).await.map_err(to_backend_error)?;
        self.output.flush().await.map_err(to_backend_error)
    }

    async fn prompt(&mut self, text: &str) -> Result<Option<String>, ConfirmationError> {
        self.write(text).await?;
        self.input.next_line().await.map_err(to_backend_error)
    }
}

#[async_trait]
impl ConfirmationBackend for ConsoleBackend {
    async fn confirm(&mut self, request: ConfirmationRequest) -> Result<Decision, ConfirmationError> {
        let gesture = request.gesture();
        let header = format!("[{}, {:?}]", request.request_type(), request.flow());
        let pages = request.into_pages();
        let count = pages.len();
        for (i, page) in pages.iter().enumerate() {
            self.write(&draw_page(page, &header, i + 1, count)).await?;
            if i + 1 < count && self.prompt("(enter for next page) ").await?.is_none() {
                debug!(target: LOG_TARGET, "Input closed while paging");
                return Ok(Decision::Declined);
            }
        }

        let question = match gesture {
            Gesture::Tap => "Tap to confirm [y/N]: ",
            Gesture::Hold => "Hold to confirm, type 'hold' to confirm: ",
        };
        let answer = match self.prompt(question).await? {
            Some(answer) => answer,
            None => return Ok(Decision::Declined),
        };
        let confirmed = match gesture {
            Gesture::Tap => matches!(answer.trim(), "y" | "Y" | "yes"),
            Gesture::Hold => answer.trim() == "hold",
        };
        Ok(if confirmed {
            Decision::Confirmed
        } else {
            Decision::Declined
        })
    }
}

fn draw_page(page: &TextBlock, header: &str, index: usize, count: usize) -> String {
    let lines = page.render_lines();
    let width = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(page.title().chars().count()))
        .max()
        .unwrap_or(0);
    let rule = "-".repeat(width + 4);
    let mut out = format!("\n{} {}/{}\n{}\n| {:<w$} |\n{}\n", header, index, count, rule, page.title(), rule, w = width);
    for line in lines {
        out.push_str(&format!("| {:<w$} |\n", line, w = width));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

fn to_backend_error(e: std::io::Error) -> ConfirmationError {
    ConfirmationError::Backend(e.to_string())
}
