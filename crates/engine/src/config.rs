//! Engine tuning knobs.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Defaults applied to scans and order preparation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How far behind the latest block event scans reach.
    pub lookback_blocks: u64,
    /// Fixed PLS deposit attached to every new order, in wei.
    pub required_gas_payment: U256,
    /// Slippage applied when the caller does not pick one, in basis points.
    pub default_slippage_bps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lookback_blocks: 100_000,
            required_gas_payment: pls_to_wei(3_000),
            default_slippage_bps: 500,
        }
    }
}

fn pls_to_wei(pls: u64) -> U256 {
    U256::from(pls) * U256::from(10u64).pow(U256::from(18u64))
}
