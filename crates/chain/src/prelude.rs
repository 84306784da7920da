//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use tickorder_chain::prelude::*;
//! ```

// Configuration
pub use crate::config::{
    ChainConfig, ContractAddresses, PULSECHAIN_CHAIN_ID, PULSECHAIN_RPC, RPC_URL_ENV,
};

// Errors
pub use crate::error::ReadError;

// Reader boundary
pub use crate::reader::ChainReader;
pub use crate::rpc::RpcChainReader;

// Wire types
pub use crate::types::{
    BlockRange, OrderCancelledEvent, OrderCreatedEvent, PositionClosedEvent, RawOrder,
    RawPosition, ReceiptLog, ReceiptSummary,
};
