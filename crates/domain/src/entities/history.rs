use alloy::primitives::{B256, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in an account's unified action history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub nft_id: u64,
    /// Block timestamp in seconds.
    pub timestamp: u64,
    pub block_number: u64,
    pub transaction_hash: B256,
    pub symbol0: String,
    pub symbol1: String,
    pub kind: HistoryKind,
}

/// What happened: an order was placed, cancelled, or executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryKind {
    Created(OrderCreation),
    Cancelled(OrderCancellation),
    Closed(PositionClosure),
}

/// Payload of an order-creation event, carried verbatim.
///
/// `target_price` keeps its two's-complement wire form; decoding it belongs
/// to consumers that need the tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreation {
    pub target_price: U256,
    pub is_above: bool,
    pub gas_payment: U256,
    pub slippage_bps: u32,
}

/// Payload of an order-cancellation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCancellation {
    /// Unused gas deposit returned to the owner, in wei.
    pub refunded_gas: U256,
}

/// Payload of a position-closure event plus its execution costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionClosure {
    pub principal0: U256,
    pub principal1: U256,
    /// Total fees collected, service share included.
    pub fees0: U256,
    pub fees1: U256,
    pub service_fee0: U256,
    pub service_fee1: U256,
    /// Decimals of the identified pair, 18 when identification failed.
    pub decimals0: u8,
    pub decimals1: u8,
    pub gas_used: u64,
    /// Effective gas price paid by the executing transaction, in wei.
    pub gas_price: U256,
}

impl PositionClosure {
    /// Fee share kept by the owner after the service cut, clamped at zero
    /// if a malformed event reports a cut above the total.
    pub fn user_fees0(&self) -> U256 {
        self.fees0.saturating_sub(self.service_fee0)
    }

    /// Token1 counterpart of [`user_fees0`](Self::user_fees0).
    pub fn user_fees1(&self) -> U256 {
        self.fees1.saturating_sub(self.service_fee1)
    }

    /// Total gas cost of the executing transaction, in wei.
    pub fn gas_cost_wei(&self) -> U256 {
        U256::from(self.gas_used).saturating_mul(self.gas_price)
    }
}

impl HistoryRecord {
    /// Wall-clock time of the block, if the timestamp is representable.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::try_from(self.timestamp).ok()?, 0)
    }
}
