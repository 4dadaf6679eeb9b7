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

//! Layout configuration
//!
//! All options live under the `[ethereum_layout]` section:
//! - address_line_width - characters of an address shown per display line
//! - data_chunk_width - characters of hex data (payloads, token contracts) per display line
//! - max_data_bytes - number of raw payload bytes shown before the data is elided
//! - confirmation_timeout_secs - optional time after which a pending confirmation counts as declined
//! - theme - colors and icon of the confirmation screens

use std::time::Duration;

use config::Config;
use serde::{Deserialize, Serialize};

use crate::{
    address::ADDRESS_LINE_WIDTH,
    configuration::{ConfigPath, ConfigurationError, DefaultConfigLoader},
    payload::{DATA_CHUNK_WIDTH, MAX_DATA_BYTES},
    text::StyleTheme,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    pub address_line_width: usize,
    pub data_chunk_width: usize,
    pub max_data_bytes: usize,
    pub confirmation_timeout_secs: Option<u64>,
    pub theme: StyleTheme,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            address_line_width: ADDRESS_LINE_WIDTH,
            data_chunk_width: DATA_CHUNK_WIDTH,
            max_data_bytes: MAX_DATA_BYTES,
            confirmation_timeout_secs: None,
            theme: StyleTheme::default(),
        }
    }
}

impl ConfigPath for LayoutConfig {
    fn main_key_prefix() -> &'static str {
        "ethereum_layout"
    }
}

impl LayoutConfig {
    /// Loads and validates the `[ethereum_layout]` section, falling back to defaults for missing keys.
    pub fn load(config: &Config) -> Result<Self, ConfigurationError> {
        let layout = <Self as DefaultConfigLoader>::load_from(config)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let widths = [
            ("address_line_width", self.address_line_width),
            ("data_chunk_width", self.data_chunk_width),
            ("max_data_bytes", self.max_data_bytes),
        ];
        for (field, value) in widths {
            if value == 0 {
                return Err(ConfigurationError::new(
                    &format!("{}.{}", Self::main_key_prefix(), field),
                    "must be greater than zero",
                ));
            }
        }
        if self.confirmation_timeout_secs == Some(0) {
            return Err(ConfigurationError::new(
                "ethereum_layout.confirmation_timeout_secs",
                "must be greater than zero, omit it to wait indefinitely",
            ));
        }
        Ok(())
    }

    pub fn confirmation_timeout(&self) -> Option<Duration> {
        self.confirmation_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use config::{Config, File, FileFormat};

    use crate::{
        config::LayoutConfig,
        text::{Color, StyleTheme},
    };

    fn load(toml: &str) -> Result<LayoutConfig, crate::configuration::ConfigurationError> {
        let cfg = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap();
        LayoutConfig::load(&cfg)
    }

    #[test]
    fn defaults_are_used_for_missing_keys() {
        let config = load("").unwrap();
        assert_eq!(config, LayoutConfig::default());
        assert_eq!(config.address_line_width, 17);
        assert_eq!(config.data_chunk_width, 18);
        assert_eq!(config.max_data_bytes, 36);
        assert_eq!(config.confirmation_timeout(), None);
    }

    #[test]
    fn layout_configuration() {
        const CONFIG: &str = r#"
[ethereum_layout]
address_line_width = 21
confirmation_timeout_secs = 90

[ethereum_layout.theme]
label = 1234
"#;
        let config = load(CONFIG).unwrap();
        assert_eq!(config.address_line_width, 21);
        assert_eq!(config.data_chunk_width, LayoutConfig::default().data_chunk_width);
        assert_eq!(config.confirmation_timeout(), Some(Duration::from_secs(90)));
        assert_eq!(config.theme.label, Color(1234));
        assert_eq!(config.theme.heading, StyleTheme::default().heading);
    }

    #[test]
    fn zero_widths_are_rejected() {
        let err = load("[ethereum_layout]\ndata_chunk_width = 0\n").unwrap_err();
        assert_eq!(err.field(), "ethereum_layout.data_chunk_width");
        assert!(load("[ethereum_layout]\nconfirmation_timeout_secs = 0\n").is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(load("[ethereum_layout]\nfont_size = 3\n").is_err());
    }
}
