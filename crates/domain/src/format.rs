//! Display formatting helpers shared with the presentation layer.
//!
//! These mirror the precision rules the price codec rounds for, so numbers
//! survive the trip from chain data to screen without re-rounding surprises.

use alloy::primitives::{Address, U256};

/// Lossy `U256` → `f64` conversion for display math.
///
/// Splits the value into two 128-bit halves so the conversion is total; the
/// result carries `f64` precision only.
pub fn u256_to_f64(value: U256) -> f64 {
    let high = (value >> 128usize).to::<u128>();
    let low = (value & U256::from(u128::MAX)).to::<u128>();
    (high as f64) * 2f64.powi(128) + low as f64
}

/// Formats a price with up to `max_decimals` decimals, trimming trailing
/// zeros.
pub fn format_price(price: f64, max_decimals: usize) -> String {
    if price == 0.0 {
        return "0".to_string();
    }
    let fixed = format!("{price:.max_decimals$}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Formats a raw token amount scaled down by its decimals.
///
/// Dust below `1e-4` keeps ten decimal places so it does not print as zero.
pub fn format_token_amount(amount: U256, decimals: u8, max_decimals: usize) -> String {
    let value = u256_to_f64(amount) / 10f64.powi(i32::from(decimals));
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0001 {
        return format!("{value:.10}");
    }
    format!("{value:.max_decimals$}")
}

/// `0x1234...abcd` shortening for logs and labels.
pub fn shorten_address(address: Address) -> String {
    let hex = address.to_string();
    format!("{}...{}", &hex[..6], &hex[hex.len() - 4..])
}
