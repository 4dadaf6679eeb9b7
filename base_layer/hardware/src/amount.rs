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

//! Fixed point rendering of on-chain integer amounts.
//!
//! Amounts are carried as [`U512`] so that products of two 256-bit fields (e.g. `gas_price * gas_limit`) are exact.
//! Scaling works on the decimal digits of the value rather than on powers of ten, which keeps arbitrarily large
//! `decimals` values representable.

use log::*;
use primitive_types::U512;

use crate::{networks::NetworkDescriptor, tokens::TokenDescriptor};

const LOG_TARGET: &str = "hardware::ethereum::amount";

/// Decimals of every EVM native asset
pub const NATIVE_DECIMALS: u32 = 18;
/// Amounts below `10^(decimals - WEI_THRESHOLD_EXPONENT)` units are displayed in indivisible units
pub const WEI_THRESHOLD_EXPONENT: u32 = 9;
const WEI_PREFIX: &str = "Wei";

/// The unit an amount is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountUnit<'a> {
    Native(&'a NetworkDescriptor),
    Token(&'a TokenDescriptor),
}

impl<'a> AmountUnit<'a> {
    pub fn symbol(&self) -> &'a str {
        match self {
            AmountUnit::Native(network) => network.shortcut,
            AmountUnit::Token(token) => token.symbol.as_str(),
        }
    }

    pub fn decimals(&self) -> u32 {
        match self {
            AmountUnit::Native(_) => NATIVE_DECIMALS,
            AmountUnit::Token(token) => token.decimals,
        }
    }
}

/// Renders `value / 10^decimals` with every significant fractional digit and no trailing zeros. The value is never
/// rounded.
///
/// ```
/// use ethereum_confirm_layout::amount::format_amount;
///
/// assert_eq!(format_amount(1_500_000_000_000_000_000u64, 18), "1.5");
/// assert_eq!(format_amount(42u64, 0), "42");
/// assert_eq!(format_amount(7u64, 3), "0.007");
/// ```
pub fn format_amount<T: Into<U512>>(value: T, decimals: u32) -> String {
    let digits = value.into().to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

/// True when `value < 10^(decimals - 9)`, i.e. the amount would start with at least nine zero fractional digits.
/// Inert for units with nine decimals or fewer.
pub fn is_dust<T: Into<U512>>(value: T, decimals: u32) -> bool {
    if decimals <= WEI_THRESHOLD_EXPONENT {
        return false;
    }
    let threshold_digits = (decimals - WEI_THRESHOLD_EXPONENT) as usize;
    // value < 10^k exactly when value has at most k decimal digits
    value.into().to_string().len() <= threshold_digits
}

/// Formats an amount with its unit symbol, e.g. `1.5 ETH`. Dust amounts of high precision units are shown as raw
/// integers with a `Wei` prefixed symbol, e.g. `5 Wei ETH`.
pub fn format_ethereum_amount<T: Into<U512>>(value: T, unit: AmountUnit<'_>) -> String {
    let value = value.into();
    let decimals = unit.decimals();
    if is_dust(value, decimals) {
        trace!(
            target: LOG_TARGET,
            "Amount below 10^{} units of {}, showing indivisible units",
            decimals - WEI_THRESHOLD_EXPONENT,
            unit.symbol()
        );
        return format!("{} {} {}", format_amount(value, 0), WEI_PREFIX, unit.symbol());
    }
    format!("{} {}", format_amount(value, decimals), unit.symbol())
}
