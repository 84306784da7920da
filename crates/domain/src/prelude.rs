//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use tickorder_domain::prelude::*;
//! ```

// Errors
pub use crate::error::DomainError;

// Entities
pub use crate::entities::{
    CreateOrderArgs, HistoryKind, HistoryRecord, Order, OrderCancellation, OrderCreation,
    OrderReadiness, Position, PositionClosure, TokenInfo,
};

// Formatting
pub use crate::format::{format_price, format_token_amount, shorten_address, u256_to_f64};

// Tick math
pub use crate::math::{
    PriceAdjustment, TICK_MAX, TICK_MIN, Tick, encoded_to_tick, human_price_to_tick,
    price_adjustment, price_to_tick, round_to_significant_figures, tick_to_encoded,
    tick_to_human_price, tick_to_price,
};
