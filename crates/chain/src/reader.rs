//! The read-only chain boundary the engine consumes.

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;

use tickorder_domain::math::Tick;

use crate::config::ContractAddresses;
use crate::error::ReadError;
use crate::types::{
    BlockRange, OrderCancelledEvent, OrderCreatedEvent, PositionClosedEvent, RawOrder,
    RawPosition, ReceiptSummary,
};

/// Read-only view of the chain.
///
/// One strongly typed method per contract call or log query. The engine is
/// constructed over this trait, so tests swap in an in-memory reader and the
/// production path uses [`crate::rpc::RpcChainReader`].
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Deployed addresses this reader points at.
    fn addresses(&self) -> &ContractAddresses;

    // --- NFT position manager ---

    /// Raw position record for an NFT.
    async fn position(&self, token_id: u64) -> Result<RawPosition, ReadError>;

    /// Number of position NFTs held by `owner`.
    async fn nft_balance(&self, owner: Address) -> Result<u64, ReadError>;

    /// Token id at `index` in the owner's enumeration.
    async fn nft_by_index(&self, owner: Address, index: u64) -> Result<u64, ReadError>;

    /// Operator approved for a single NFT, zero when none.
    async fn approved_operator(&self, token_id: u64) -> Result<Address, ReadError>;

    // --- Order manager ---

    /// Order slot for an NFT; vacant slots come back with a zero owner.
    async fn order(&self, token_id: u64) -> Result<RawOrder, ReadError>;

    /// `OrderCreated` events in the range, optionally filtered by the
    /// indexed owner topic.
    async fn order_created_events(
        &self,
        range: BlockRange,
        owner: Option<Address>,
    ) -> Result<Vec<OrderCreatedEvent>, ReadError>;

    /// `OrderCancelled` events in the range, optionally owner-filtered.
    async fn order_cancelled_events(
        &self,
        range: BlockRange,
        owner: Option<Address>,
    ) -> Result<Vec<OrderCancelledEvent>, ReadError>;

    /// `PositionClosed` events in the range, optionally owner-filtered.
    async fn position_closed_events(
        &self,
        range: BlockRange,
        owner: Option<Address>,
    ) -> Result<Vec<PositionClosedEvent>, ReadError>;

    // --- Factory and pools ---

    /// Pool address for a pair and fee tier; zero when no pool exists.
    async fn pool_address(
        &self,
        token0: Address,
        token1: Address,
        fee: u32,
    ) -> Result<Address, ReadError>;

    /// Current tick of a pool.
    async fn pool_tick(&self, pool: Address) -> Result<Tick, ReadError>;

    // --- ERC-20 metadata ---

    /// Token symbol.
    async fn token_symbol(&self, token: Address) -> Result<String, ReadError>;

    /// Token decimals.
    async fn token_decimals(&self, token: Address) -> Result<u8, ReadError>;

    // --- Chain plumbing ---

    /// Latest block number.
    async fn latest_block(&self) -> Result<u64, ReadError>;

    /// Timestamp of a block, in seconds.
    async fn block_timestamp(&self, number: u64) -> Result<u64, ReadError>;

    /// Effective gas price paid by a transaction, in wei.
    async fn transaction_gas_price(&self, hash: B256) -> Result<U256, ReadError>;

    /// Receipt of a transaction, reduced to gas usage and logs.
    async fn transaction_receipt(&self, hash: B256) -> Result<ReceiptSummary, ReadError>;
}
