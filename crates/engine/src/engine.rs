//! Engine construction.

use tickorder_chain::reader::ChainReader;

use crate::config::EngineConfig;
use crate::token_cache::TokenCache;

/// Read-side engine over a chain reader.
///
/// Wires the reader, the token cache and the config together; the assembly
/// and aggregation methods live in the sibling modules.
#[derive(Debug)]
pub struct Engine<R> {
    pub(crate) reader: R,
    pub(crate) tokens: TokenCache,
    pub(crate) config: EngineConfig,
}

impl<R: ChainReader> Engine<R> {
    /// Creates an engine with the default config and an empty cache.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, EngineConfig::default())
    }

    /// Creates an engine with the given config and an empty cache.
    #[must_use]
    pub fn with_config(reader: R, config: EngineConfig) -> Self {
        Self::from_parts(reader, TokenCache::new(), config)
    }

    /// Assembles an engine from explicit collaborators.
    #[must_use]
    pub fn from_parts(reader: R, tokens: TokenCache, config: EngineConfig) -> Self {
        Self {
            reader,
            tokens,
            config,
        }
    }

    /// The underlying chain reader.
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// The token metadata cache.
    pub fn tokens(&self) -> &TokenCache {
        &self.tokens
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
