//! Token metadata cache.

use std::collections::HashMap;

use alloy::primitives::Address;
use tickorder_chain::reader::ChainReader;
use tickorder_domain::entities::TokenInfo;
use tokio::sync::RwLock;
use tracing::warn;

/// Memoizes ERC-20 symbol and decimals lookups.
///
/// Entries are immutable once stored and never evicted. A failed lookup is
/// answered with [`TokenInfo::unknown`] without being stored, so the next
/// query for that token hits the chain again.
#[derive(Debug, Default)]
pub struct TokenCache {
    entries: RwLock<HashMap<Address, TokenInfo>>,
}

impl TokenCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached entry, fetching symbol and decimals concurrently
    /// on a miss.
    pub async fn get_or_fetch<R: ChainReader>(&self, reader: &R, token: Address) -> TokenInfo {
        if let Some(info) = self.entries.read().await.get(&token) {
            return info.clone();
        }

        let (symbol, decimals) =
            tokio::join!(reader.token_symbol(token), reader.token_decimals(token));
        match (symbol, decimals) {
            (Ok(symbol), Ok(decimals)) => {
                let info = TokenInfo::new(symbol, decimals);
                self.insert(token, info.clone()).await;
                info
            }
            (symbol, decimals) => {
                let error = symbol.err().or(decimals.err());
                warn!(token = %token, error = ?error, "token metadata unavailable, serving placeholder");
                TokenInfo::unknown()
            }
        }
    }

    /// Stores an entry. Concurrent duplicate fetches land on the same key,
    /// which is harmless.
    pub async fn insert(&self, token: Address, info: TokenInfo) {
        self.entries.write().await.insert(token, info);
    }

    /// Returns the entry without touching the chain.
    pub async fn cached(&self, token: &Address) -> Option<TokenInfo> {
        self.entries.read().await.get(token).cloned()
    }
}
