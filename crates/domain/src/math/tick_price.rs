//! Tick ↔ price conversions for 1.0001-base concentrated-liquidity pools.
//!
//! Raw pool prices relate token amounts in their smallest units. Human
//! prices additionally absorb the decimal gap between the pair's tokens and
//! are rounded to display precision, so tick → price → tick round-trips are
//! lossy by construction.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

use super::{TICK_MAX, TICK_MIN, Tick};

/// Base of the tick-price exponential: `price = BASE^tick`.
const BASE: f64 = 1.0001;

/// Relative price change below which a tick-grid snap is not worth
/// surfacing to the user, in percent.
const ADJUSTMENT_THRESHOLD_PERCENT: f64 = 0.05;

/// Raw pool price at a tick: `1.0001^tick`.
pub fn tick_to_price(tick: Tick) -> f64 {
    BASE.powi(tick)
}

/// Nearest tick for a raw pool price: `round(log_1.0001(price))`.
///
/// # Errors
///
/// Fails for non-positive or NaN prices, for prices whose logarithm is not
/// finite, and for prices that land outside the protocol tick range.
pub fn price_to_tick(price: f64) -> Result<Tick, DomainError> {
    if price.is_nan() || price <= 0.0 {
        return Err(DomainError::NonPositivePrice);
    }
    let raw = price.ln() / BASE.ln();
    if !raw.is_finite() {
        return Err(DomainError::NonFiniteTick);
    }
    let rounded = raw.round();
    if rounded < f64::from(TICK_MIN) || rounded > f64::from(TICK_MAX) {
        return Err(DomainError::TickOutOfRange {
            tick: rounded as i64,
        });
    }
    Ok(rounded as Tick)
}

/// Rounds to a fixed number of significant figures.
///
/// Magnitudes below `0.01` are rounded to 12 fixed decimal places instead,
/// which keeps sub-cent prices stable without collapsing them to zero.
pub fn round_to_significant_figures(num: f64, figures: u32) -> f64 {
    if num == 0.0 {
        return 0.0;
    }
    if num.abs() < 0.01 {
        return (num * 1e12).round() / 1e12;
    }
    let magnitude = num.abs().log10().floor() as i32;
    let scale = 10f64.powi(figures as i32 - magnitude - 1);
    (num * scale).round() / scale
}

/// Human-readable token1-per-token0 price at a tick.
///
/// Scales the raw price by `10^(decimals0 - decimals1)` and rounds to 10
/// significant figures.
pub fn tick_to_human_price(tick: Tick, decimals0: u8, decimals1: u8) -> f64 {
    let raw = tick_to_price(tick);
    let adjusted = raw * 10f64.powi(i32::from(decimals0) - i32::from(decimals1));
    round_to_significant_figures(adjusted, 10)
}

/// Nearest tick for a human-readable price.
///
/// Inverse of [`tick_to_human_price`] up to tick-grid snapping; see
/// [`price_adjustment`] for the resulting discrepancy.
///
/// # Errors
///
/// Same failure cases as [`price_to_tick`].
pub fn human_price_to_tick(
    price: f64,
    decimals0: u8,
    decimals1: u8,
) -> Result<Tick, DomainError> {
    let raw = price * 10f64.powi(i32::from(decimals1) - i32::from(decimals0));
    price_to_tick(raw)
}

/// How far an entered price moves when snapped to the tick grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceAdjustment {
    /// The price as entered.
    pub entered: f64,
    /// The price that will actually be stored, after tick snapping and
    /// display rounding.
    pub stored: f64,
    /// Absolute relative difference between the two, in percent.
    pub percent_difference: f64,
}

impl PriceAdjustment {
    /// Whether the snap moved the price enough to warn the user about.
    pub fn is_significant(&self) -> bool {
        self.percent_difference > ADJUSTMENT_THRESHOLD_PERCENT
    }
}

/// Computes the [`PriceAdjustment`] for an entered human price.
///
/// # Errors
///
/// Same failure cases as [`price_to_tick`].
pub fn price_adjustment(
    entered: f64,
    decimals0: u8,
    decimals1: u8,
) -> Result<PriceAdjustment, DomainError> {
    let tick = human_price_to_tick(entered, decimals0, decimals1)?;
    let stored = tick_to_human_price(tick, decimals0, decimals1);
    let percent_difference = ((stored - entered) / entered * 100.0).abs();
    Ok(PriceAdjustment {
        entered,
        stored,
        percent_difference,
    })
}
