//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use tickorder_engine::prelude::*;
//! ```

// Engine
pub use crate::config::EngineConfig;
pub use crate::engine::Engine;
pub use crate::token_cache::TokenCache;

// Errors
pub use crate::error::EngineError;
