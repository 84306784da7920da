//! Domain model for tick-ranged limit orders on concentrated-liquidity pools.
//!
//! This crate is the pure, chain-free core shared by the reader and engine
//! layers:
//! - Tick ↔ price conversion with display-grade significant-figure rounding
//! - Two's-complement `uint256` tick encoding used by the order manager
//! - Position, order, token, and history entities with their derived state
//! - Display formatting helpers

/// Prelude module for convenient imports.
pub mod prelude;

/// Position, order, token, and history entities.
pub mod entities;
/// Domain error types.
pub mod error;
/// Display formatting helpers.
pub mod format;
/// Tick/price math and wire encodings.
pub mod math;
