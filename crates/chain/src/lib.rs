//! Chain access for the tickorder engine.
//!
//! This crate owns everything that touches PulseChain:
//! - Typed `sol!` bindings for the order manager, NFT position manager,
//!   factory, pools, and ERC-20 tokens
//! - The [`reader::ChainReader`] boundary the engine depends on
//! - A JSON-RPC implementation of that boundary over an HTTP provider
//! - Endpoint and deployment configuration with PulseChain defaults

/// Prelude module for convenient imports.
pub mod prelude;

/// Endpoint and deployment configuration.
pub mod config;
/// Typed bindings for the deployed contracts.
pub mod contracts;
/// Reader failure taxonomy.
pub mod error;
/// The read-only boundary the engine consumes.
pub mod reader;
/// Production JSON-RPC reader.
pub mod rpc;
/// Plain data types crossing the reader boundary.
pub mod types;
