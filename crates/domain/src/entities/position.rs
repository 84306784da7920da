use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::math::{self, Tick};

/// An open concentrated-liquidity position held as an NFT.
///
/// Combines the NFT manager's raw record with the token metadata and the
/// owning pool's current tick, so price state can be derived without
/// further chain reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub nft_id: u64,
    pub token0: Address,
    pub token1: Address,
    pub symbol0: String,
    pub symbol1: String,
    pub decimals0: u8,
    pub decimals1: u8,
    /// Pool fee tier in hundredths of a basis point (3000 = 0.3%).
    pub fee: u32,
    pub tick_lower: Tick,
    pub tick_upper: Tick,
    pub liquidity: u128,
    /// Current tick of the pool, or 0 when the pool does not exist yet.
    pub current_tick: Tick,
    /// Pool contract, or the zero address when the pool does not exist yet.
    pub pool_address: Address,
}

impl Position {
    /// Whether the pool's current tick sits inside the position's range,
    /// bounds included.
    pub fn in_range(&self) -> bool {
        self.tick_lower <= self.current_tick && self.current_tick <= self.tick_upper
    }

    /// Human price at the pool's current tick.
    pub fn current_price(&self) -> f64 {
        math::tick_to_human_price(self.current_tick, self.decimals0, self.decimals1)
    }

    /// Human price at the lower range bound.
    pub fn min_price(&self) -> f64 {
        math::tick_to_human_price(self.tick_lower, self.decimals0, self.decimals1)
    }

    /// Human price at the upper range bound.
    pub fn max_price(&self) -> f64 {
        math::tick_to_human_price(self.tick_upper, self.decimals0, self.decimals1)
    }

    /// Fee tier as a display percentage (3000 → 0.3).
    pub fn fee_percent(&self) -> f64 {
        f64::from(self.fee) / 10_000.0
    }
}
