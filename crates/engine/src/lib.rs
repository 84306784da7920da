//! Read-side engine for tick-ranged limit orders.
//!
//! Takes a [`tickorder_chain::reader::ChainReader`] and assembles the
//! domain views the presentation layer consumes:
//! - Positions with token metadata and live pool state
//! - Active limit orders with their trigger readiness
//! - The owner's order history rebuilt from event scans
//!
//! All reads are point-in-time; nothing here subscribes or caches beyond
//! the token metadata memoization.

/// Prelude module for convenient imports.
pub mod prelude;

/// Engine tuning knobs and their PulseChain defaults.
pub mod config;
/// Engine construction and collaborator access.
pub mod engine;
/// Engine error taxonomy.
pub mod error;
/// ERC-20 metadata memoization.
pub mod token_cache;

mod history;
mod orders;
mod positions;

#[cfg(test)]
mod test_support;
