use serde::{Deserialize, Serialize};

/// ERC-20 display metadata.
///
/// Immutable once fetched; a token's symbol and decimals never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    pub decimals: u8,
}

impl TokenInfo {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Placeholder metadata used when a token's contract cannot be queried.
    pub fn unknown() -> Self {
        Self::new("UNKNOWN", 18)
    }
}
