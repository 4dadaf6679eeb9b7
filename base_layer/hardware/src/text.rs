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

//! Styled text blocks, the unit of content handed to a display backend.

use serde::{Deserialize, Serialize};

/// An RGB565 display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u16);

impl Color {
    pub const GREEN: Color = Color::rgb(0x4c, 0xaf, 0x50);
    pub const GREY: Color = Color::rgb(0x9e, 0x9e, 0x9e);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color((((r as u16) & 0xf8) << 8) | (((g as u16) & 0xfc) << 3) | ((b as u16) >> 3))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Send,
}

/// Process wide style tokens injected into the composer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleTheme {
    /// Icon shown in every transaction screen header
    pub icon: Icon,
    /// Color of the header icon
    pub heading: Color,
    /// Color of labels such as "to" or "Gas price:"
    pub label: Color,
    /// Default text color restored after a label
    pub foreground: Color,
}

impl Default for StyleTheme {
    fn default() -> Self {
        Self {
            icon: Icon::Send,
            heading: Color::GREEN,
            label: Color::GREY,
            foreground: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Bold(String),
    Normal { color: Color, text: String },
    Mono(String),
    LineBreak,
}

/// One screen of text. When `new_lines` is set every content span starts on its own line, otherwise spans flow on
/// the current line until an explicit [`Span::LineBreak`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    title: String,
    icon: Icon,
    icon_color: Color,
    new_lines: bool,
    spans: Vec<Span>,
}

impl TextBlock {
    pub fn new<T: Into<String>>(title: T, icon: Icon, icon_color: Color) -> Self {
        Self {
            title: title.into(),
            icon,
            icon_color,
            new_lines: true,
            spans: Vec::new(),
        }
    }

    pub fn flowing(mut self) -> Self {
        self.new_lines = false;
        self
    }

    pub fn bold<T: Into<String>>(&mut self, text: T) -> &mut Self {
        self.push(Span::Bold(text.into()))
    }

    pub fn normal<T: Into<String>>(&mut self, color: Color, text: T) -> &mut Self {
        self.push(Span::Normal {
            color,
            text: text.into(),
        })
    }

    pub fn mono<I, T>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for line in lines {
            self.push(Span::Mono(line.into()));
        }
        self
    }

    pub fn br(&mut self) -> &mut Self {
        self.spans.push(Span::LineBreak);
        self
    }

    fn push(&mut self, span: Span) -> &mut Self {
        if self.new_lines && !self.spans.is_empty() && self.spans.last() != Some(&Span::LineBreak) {
            self.spans.push(Span::LineBreak);
        }
        self.spans.push(span);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    pub fn icon_color(&self) -> Color {
        self.icon_color
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn bold_text(&self) -> Vec<&str> {
        self.spans
            .iter()
            .filter_map(|s| match s {
                Span::Bold(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn mono_text(&self) -> Vec<&str> {
        self.spans
            .iter()
            .filter_map(|s| match s {
                Span::Mono(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Plain text rendering, one string per display line. Spans sharing a line are separated by a space.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        for span in &self.spans {
            let text = match span {
                Span::Bold(t) | Span::Mono(t) | Span::Normal { text: t, .. } => t,
                Span::LineBreak => {
                    lines.push(std::mem::take(&mut current));
                    continue;
                },
            };
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(text);
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Splits `s` into consecutive pieces of at most `width` characters without splitting a multi-byte character.
pub fn chunk_str(s: &str, width: usize) -> Vec<String> {
    let chars = s.chars().collect::<Vec<_>>();
    chars.chunks(width.max(1)).map(|c| c.iter().collect()).collect()
}
