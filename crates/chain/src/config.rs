//! Endpoint and deployment configuration.

use alloy::primitives::{Address, address};
use serde::{Deserialize, Serialize};

/// PulseChain mainnet chain id.
pub const PULSECHAIN_CHAIN_ID: u64 = 369;

/// Public PulseChain RPC endpoint.
pub const PULSECHAIN_RPC: &str = "https://rpc.pulsechain.com";

/// Environment variable that overrides the RPC endpoint.
pub const RPC_URL_ENV: &str = "TICKORDER_RPC_URL";

/// Deployed contract addresses the reader talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
    /// The limit-order vault.
    pub order_manager: Address,
    /// The NFT position manager backing the vault's positions.
    pub nft_position_manager: Address,
    /// Pool factory for pair → pool lookups.
    pub factory: Address,
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Self {
            order_manager: address!("0x5CA8bdf54A61e4070a048689D631f7573bd77237"),
            nft_position_manager: address!("0xCC05bf158202b4F461Ede8843d76dcd7Bbad07f2"),
            factory: address!("0xe50DbDC88E87a2C92984d794bcF3D1d76f619C68"),
        }
    }
}

/// Connection settings for the production reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub rpc_url: String,
    pub addresses: ContractAddresses,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: PULSECHAIN_RPC.to_string(),
            addresses: ContractAddresses::default(),
        }
    }
}

impl ChainConfig {
    /// Defaults with the RPC endpoint taken from `TICKORDER_RPC_URL` when
    /// set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(RPC_URL_ENV) {
            config.rpc_url = url;
        }
        config
    }
}
