use alloy::primitives::U256;
use thiserror::Error;

/// Errors produced by the pure domain codecs.
///
/// All variants signal malformed input rather than a transient condition, so
/// callers never retry on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Prices must be strictly positive to have a tick.
    #[error("price must be a positive number")]
    NonPositivePrice,
    /// The tick computed from a price is not a finite number.
    #[error("computed tick is not finite")]
    NonFiniteTick,
    /// A computed tick fell outside the protocol range.
    #[error("tick {tick} is outside [-887272, 887272]")]
    TickOutOfRange {
        /// The offending tick, widened so out-of-range values survive.
        tick: i64,
    },
    /// A 256-bit wire value does not decode to a valid tick.
    #[error("encoded tick {value} does not decode to a tick in range")]
    EncodedTickOutOfRange {
        /// The raw wire value.
        value: U256,
    },
}
