//! Numeric conversions between ticks, prices, and wire encodings.

pub mod tick_encoding;
pub mod tick_price;

// Re-export for easier access
pub use tick_encoding::{encoded_to_tick, tick_to_encoded};
pub use tick_price::{
    PriceAdjustment, human_price_to_tick, price_adjustment, price_to_tick,
    round_to_significant_figures, tick_to_human_price, tick_to_price,
};

/// Pool tick index.
pub type Tick = i32;

/// Lowest tick the pool protocol can represent.
pub const TICK_MIN: Tick = -887_272;

/// Highest tick the pool protocol can represent.
pub const TICK_MAX: Tick = 887_272;
