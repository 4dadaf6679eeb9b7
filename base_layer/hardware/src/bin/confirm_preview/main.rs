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

//! Renders Ethereum confirmation screens on the terminal and asks for a decision, using the same composer and
//! display service a signer would use.

mod cli;
mod console;

use std::path::Path;

use anyhow::anyhow;
use clap::Parser;
use ethereum_confirm_layout::{
    config::LayoutConfig,
    service::spawn_display_service,
    ConfirmationComposer,
    Decision,
    EthereumConfirmations,
};
use log::*;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config as LogConfig, Root},
    encode::pattern::PatternEncoder,
};

use crate::{
    cli::{Cli, PreviewCommand},
    console::ConsoleBackend,
};

const LOG_TARGET: &str = "hardware::ethereum::preview";
const ENV_PREFIX: &str = "ETH_LAYOUT";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    initialize_logging(cli.log_config.as_deref(), cli.verbose)?;
    let config = load_configuration(cli.config.as_deref())?;
    debug!(target: LOG_TARGET, "Using {:?}", config);

    let (handle, shutdown, join_handle) = spawn_display_service(ConsoleBackend::new(), &config);
    let mut confirmations = EthereumConfirmations::new(ConfirmationComposer::with_config(config), handle);

    let decision = match &cli.command {
        PreviewCommand::Transfer(args) => {
            confirmations
                .confirm_plain_transfer(
                    args.to.as_ref().map(|b| b.0.as_slice()),
                    args.value,
                    args.chain.chain_id,
                    args.chain.tx_type,
                )
                .await
        },
        PreviewCommand::TokenTransfer(args) => {
            let token = args.token().map_err(|e| anyhow!(e))?;
            confirmations
                .confirm_token_transfer(
                    args.to.as_ref().map(|b| b.0.as_slice()),
                    args.value,
                    args.chain.chain_id,
                    &token,
                    args.chain.tx_type,
                )
                .await
        },
        PreviewCommand::Fee(args) => {
            let token = args.token();
            confirmations
                .confirm_fee(
                    args.spending,
                    args.gas_price,
                    args.gas_limit,
                    args.chain.chain_id,
                    token.as_ref(),
                    args.chain.tx_type,
                )
                .await
        },
        PreviewCommand::Data(args) => {
            let total = args.total.unwrap_or(args.data.0.len() as u64);
            confirmations.confirm_payload(&args.data.0, total).await
        },
    };

    let _ = shutdown.send(());
    join_handle.await??;

    match decision? {
        Decision::Confirmed => println!("Confirmed"),
        Decision::Declined => println!("Declined"),
    }
    Ok(())
}

fn initialize_logging(log_config: Option<&Path>, verbose: bool) -> Result<(), anyhow::Error> {
    if let Some(path) = log_config {
        log4rs::init_file(path, Default::default())?;
        info!(target: LOG_TARGET, "Logging configured from {}", path.display());
        return Ok(());
    }

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l}):5} {t} {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Built-in defaults, then the optional file, then `ETH_LAYOUT__ETHEREUM_LAYOUT__*` environment overrides.
fn load_configuration(path: Option<&Path>) -> Result<LayoutConfig, anyhow::Error> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }
    let cfg = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;
    Ok(LayoutConfig::load(&cfg)?)
}
