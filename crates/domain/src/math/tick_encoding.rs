//! Two's-complement wire encoding for ticks.
//!
//! The order manager stores target ticks as `uint256`. Negative ticks are
//! represented in two's complement over the full 256 bits, so `-1` encodes
//! as `2^256 - 1`. Both directions stay in integer arithmetic end to end;
//! floating point would corrupt values of this width.

use alloy::primitives::{I256, U256};

use crate::error::DomainError;

use super::{TICK_MAX, TICK_MIN, Tick};

/// Encodes a tick as the order manager's `uint256` representation.
///
/// Non-negative ticks pass through unchanged; negative ticks become
/// `2^256 + tick`.
pub fn tick_to_encoded(tick: Tick) -> U256 {
    if tick >= 0 {
        U256::from(tick.unsigned_abs())
    } else {
        U256::ZERO.wrapping_sub(U256::from(tick.unsigned_abs()))
    }
}

/// Decodes a `uint256` wire value back into a tick.
///
/// Values at or above `2^255` are interpreted as negative two's complement.
///
/// # Errors
///
/// Returns [`DomainError::EncodedTickOutOfRange`] when the decoded value
/// falls outside the protocol tick range, which means the payload is
/// malformed rather than merely unusual.
pub fn encoded_to_tick(value: U256) -> Result<Tick, DomainError> {
    let signed = I256::from_raw(value);
    let tick =
        i64::try_from(signed).map_err(|_| DomainError::EncodedTickOutOfRange { value })?;
    if tick < i64::from(TICK_MIN) || tick > i64::from(TICK_MAX) {
        return Err(DomainError::EncodedTickOutOfRange { value });
    }
    Ok(tick as Tick)
}
