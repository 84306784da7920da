//! In-memory chain double for engine tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy::primitives::{Address, B256, U256, address};
use async_trait::async_trait;
use tickorder_chain::config::ContractAddresses;
use tickorder_chain::error::ReadError;
use tickorder_chain::reader::ChainReader;
use tickorder_chain::types::{
    BlockRange, OrderCancelledEvent, OrderCreatedEvent, PositionClosedEvent, RawOrder,
    RawPosition, ReceiptSummary,
};
use tickorder_domain::math::Tick;

pub const WPLS: Address = address!("0xA1077a294dDE1B09bB078844df40758a5D0f9a27");
pub const DAI: Address = address!("0xefD766cCb38EaF1dfd701853BFCe31359239F305");
pub const POOL: Address = address!("0x146E1f1e060e5b5016Db0D118D2C5a11A240ae32");

/// Scriptable [`ChainReader`] backed by hash maps.
///
/// Anything not scripted fails with [`ReadError::NotFound`], which is how
/// tests exercise the per-item failure paths.
#[derive(Debug, Default)]
pub struct MockChain {
    addresses: ContractAddresses,
    positions: HashMap<u64, RawPosition>,
    owned: HashMap<Address, Vec<u64>>,
    orders: HashMap<u64, RawOrder>,
    approvals: HashMap<u64, Address>,
    pools: HashMap<(Address, Address, u32), Address>,
    pool_ticks: HashMap<Address, Tick>,
    tokens: HashMap<Address, (String, u8)>,
    latest_block: u64,
    timestamps: HashMap<u64, u64>,
    created: Vec<OrderCreatedEvent>,
    cancelled: Vec<OrderCancelledEvent>,
    closed: Vec<PositionClosedEvent>,
    receipts: HashMap<B256, ReceiptSummary>,
    gas_prices: HashMap<B256, U256>,
    fail_enumeration: bool,
    fail_created_scan: bool,
    fail_cancelled_scan: bool,
    /// Counts `token_symbol` calls so cache tests can prove a hit.
    pub symbol_fetches: AtomicUsize,
}

impl MockChain {
    pub fn new() -> Self {
        Self {
            latest_block: 500_000,
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: Address, symbol: &str, decimals: u8) -> Self {
        self.tokens.insert(token, (symbol.to_string(), decimals));
        self
    }

    pub fn with_position(mut self, nft_id: u64, raw: RawPosition) -> Self {
        self.positions.insert(nft_id, raw);
        self
    }

    pub fn with_owned(mut self, owner: Address, ids: &[u64]) -> Self {
        self.owned.insert(owner, ids.to_vec());
        self
    }

    pub fn with_order(mut self, nft_id: u64, raw: RawOrder) -> Self {
        self.orders.insert(nft_id, raw);
        self
    }

    pub fn with_approval(mut self, nft_id: u64, operator: Address) -> Self {
        self.approvals.insert(nft_id, operator);
        self
    }

    pub fn with_pool(
        mut self,
        token0: Address,
        token1: Address,
        fee: u32,
        pool: Address,
        tick: Tick,
    ) -> Self {
        self.pools.insert((token0, token1, fee), pool);
        self.pool_ticks.insert(pool, tick);
        self
    }

    pub fn with_created(mut self, event: OrderCreatedEvent) -> Self {
        self.created.push(event);
        self
    }

    pub fn with_cancelled(mut self, event: OrderCancelledEvent) -> Self {
        self.cancelled.push(event);
        self
    }

    pub fn with_closed(mut self, event: PositionClosedEvent) -> Self {
        self.closed.push(event);
        self
    }

    pub fn with_timestamp(mut self, block: u64, timestamp: u64) -> Self {
        self.timestamps.insert(block, timestamp);
        self
    }

    pub fn with_receipt(mut self, hash: B256, receipt: ReceiptSummary) -> Self {
        self.receipts.insert(hash, receipt);
        self
    }

    pub fn with_gas_price(mut self, hash: B256, price: U256) -> Self {
        self.gas_prices.insert(hash, price);
        self
    }

    pub fn failing_enumeration(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }

    pub fn failing_created_scan(mut self) -> Self {
        self.fail_created_scan = true;
        self
    }

    pub fn failing_cancelled_scan(mut self) -> Self {
        self.fail_cancelled_scan = true;
        self
    }
}

fn in_range(range: BlockRange, block: u64) -> bool {
    block >= range.from && block <= range.to
}

fn matches_owner(filter: Option<Address>, owner: Address) -> bool {
    filter.map_or(true, |wanted| owner == wanted)
}

#[async_trait]
impl ChainReader for MockChain {
    fn addresses(&self) -> &ContractAddresses {
        &self.addresses
    }

    async fn position(&self, token_id: u64) -> Result<RawPosition, ReadError> {
        self.positions
            .get(&token_id)
            .copied()
            .ok_or_else(|| ReadError::not_found(format!("position {token_id}")))
    }

    async fn nft_balance(&self, owner: Address) -> Result<u64, ReadError> {
        if self.fail_enumeration {
            return Err(ReadError::not_found("nft balance"));
        }
        Ok(self.owned.get(&owner).map_or(0, |ids| ids.len() as u64))
    }

    async fn nft_by_index(&self, owner: Address, index: u64) -> Result<u64, ReadError> {
        if self.fail_enumeration {
            return Err(ReadError::not_found("nft by index"));
        }
        self.owned
            .get(&owner)
            .and_then(|ids| ids.get(index as usize))
            .copied()
            .ok_or_else(|| ReadError::not_found(format!("nft index {index}")))
    }

    async fn approved_operator(&self, token_id: u64) -> Result<Address, ReadError> {
        Ok(self
            .approvals
            .get(&token_id)
            .copied()
            .unwrap_or(Address::ZERO))
    }

    async fn order(&self, token_id: u64) -> Result<RawOrder, ReadError> {
        self.orders
            .get(&token_id)
            .copied()
            .ok_or_else(|| ReadError::not_found(format!("order {token_id}")))
    }

    async fn order_created_events(
        &self,
        range: BlockRange,
        owner: Option<Address>,
    ) -> Result<Vec<OrderCreatedEvent>, ReadError> {
        if self.fail_created_scan {
            return Err(ReadError::not_found("creation scan"));
        }
        Ok(self
            .created
            .iter()
            .copied()
            .filter(|e| in_range(range, e.block_number) && matches_owner(owner, e.owner))
            .collect())
    }

    async fn order_cancelled_events(
        &self,
        range: BlockRange,
        owner: Option<Address>,
    ) -> Result<Vec<OrderCancelledEvent>, ReadError> {
        if self.fail_cancelled_scan {
            return Err(ReadError::not_found("cancellation scan"));
        }
        Ok(self
            .cancelled
            .iter()
            .copied()
            .filter(|e| in_range(range, e.block_number) && matches_owner(owner, e.owner))
            .collect())
    }

    async fn position_closed_events(
        &self,
        range: BlockRange,
        owner: Option<Address>,
    ) -> Result<Vec<PositionClosedEvent>, ReadError> {
        Ok(self
            .closed
            .iter()
            .copied()
            .filter(|e| in_range(range, e.block_number) && matches_owner(owner, e.owner))
            .collect())
    }

    async fn pool_address(
        &self,
        token0: Address,
        token1: Address,
        fee: u32,
    ) -> Result<Address, ReadError> {
        Ok(self
            .pools
            .get(&(token0, token1, fee))
            .copied()
            .unwrap_or(Address::ZERO))
    }

    async fn pool_tick(&self, pool: Address) -> Result<Tick, ReadError> {
        self.pool_ticks
            .get(&pool)
            .copied()
            .ok_or_else(|| ReadError::not_found(format!("pool {pool}")))
    }

    async fn token_symbol(&self, token: Address) -> Result<String, ReadError> {
        self.symbol_fetches.fetch_add(1, Ordering::SeqCst);
        self.tokens
            .get(&token)
            .map(|(symbol, _)| symbol.clone())
            .ok_or_else(|| ReadError::not_found(format!("symbol of {token}")))
    }

    async fn token_decimals(&self, token: Address) -> Result<u8, ReadError> {
        self.tokens
            .get(&token)
            .map(|(_, decimals)| *decimals)
            .ok_or_else(|| ReadError::not_found(format!("decimals of {token}")))
    }

    async fn latest_block(&self) -> Result<u64, ReadError> {
        Ok(self.latest_block)
    }

    async fn block_timestamp(&self, number: u64) -> Result<u64, ReadError> {
        self.timestamps
            .get(&number)
            .copied()
            .ok_or_else(|| ReadError::not_found(format!("block {number}")))
    }

    async fn transaction_gas_price(&self, hash: B256) -> Result<U256, ReadError> {
        self.gas_prices
            .get(&hash)
            .copied()
            .ok_or_else(|| ReadError::not_found(format!("transaction {hash}")))
    }

    async fn transaction_receipt(&self, hash: B256) -> Result<ReceiptSummary, ReadError> {
        self.receipts
            .get(&hash)
            .cloned()
            .ok_or_else(|| ReadError::not_found(format!("receipt {hash}")))
    }
}
