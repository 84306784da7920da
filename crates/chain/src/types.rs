//! Plain data carried across the reader boundary.
//!
//! These are the chain's records narrowed to domain-friendly widths, before
//! any enrichment. Narrowing happens in the reader so everything above it
//! works with ordinary integers.

use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use tickorder_domain::math::Tick;

/// Position record as the NFT manager returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPosition {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: Tick,
    pub tick_upper: Tick,
    pub liquidity: u128,
}

/// Order record as the order manager returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOrder {
    /// Zero address when no live order occupies the slot.
    pub owner: Address,
    /// Target tick in two's-complement wire form.
    pub target_price: U256,
    pub is_above: bool,
    pub gas_payment: U256,
    pub slippage_bps: u32,
}

impl RawOrder {
    /// Whether the slot is vacant, meaning the NFT has no live order.
    pub fn is_vacant(&self) -> bool {
        self.owner == Address::ZERO
    }
}

/// Inclusive block range for event scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRange {
    pub from: u64,
    pub to: u64,
}

impl BlockRange {
    /// Window of `window` blocks ending at `latest`, clamped at genesis.
    pub fn lookback(latest: u64, window: u64) -> Self {
        Self {
            from: latest.saturating_sub(window),
            to: latest,
        }
    }
}

/// Decoded `OrderCreated` log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    pub token_id: u64,
    pub owner: Address,
    pub target_price: U256,
    pub is_above: bool,
    pub gas_payment: U256,
    pub slippage_bps: u32,
    pub block_number: u64,
    pub transaction_hash: B256,
}

/// Decoded `OrderCancelled` log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCancelledEvent {
    pub token_id: u64,
    pub owner: Address,
    pub refund: U256,
    pub block_number: u64,
    pub transaction_hash: B256,
}

/// Decoded `PositionClosed` log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionClosedEvent {
    pub token_id: u64,
    pub owner: Address,
    pub amount0: U256,
    pub amount1: U256,
    pub fees0: U256,
    pub fees1: U256,
    pub service_fee0: U256,
    pub service_fee1: U256,
    pub block_number: u64,
    pub transaction_hash: B256,
}

/// One receipt log, reduced to what token discovery needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLog {
    /// Emitting contract.
    pub address: Address,
    /// First topic, `None` for anonymous events.
    pub topic0: Option<B256>,
}

/// Transaction receipt reduced to gas usage and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptSummary {
    pub gas_used: u64,
    pub logs: Vec<ReceiptLog>,
}

impl ReceiptSummary {
    /// Distinct addresses that emitted a log with the given first topic,
    /// in first-occurrence order.
    pub fn emitters_of(&self, topic: B256) -> Vec<Address> {
        let mut seen = Vec::new();
        for log in &self.logs {
            if log.topic0 == Some(topic) && !seen.contains(&log.address) {
                seen.push(log.address);
            }
        }
        seen
    }
}
