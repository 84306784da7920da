//! JSON-RPC implementation of the reader boundary.
//!
//! Each trait method delegates to the matching `sol!` binding or provider
//! call and narrows the response to domain widths at this edge, so nothing
//! above it handles 256-bit integers it does not want.

use alloy::consensus::Transaction as _;
use alloy::primitives::aliases::U24;
use alloy::primitives::{Address, B256, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::Filter;
use alloy::sol_types::SolEvent;
use async_trait::async_trait;
use tracing::debug;

use tickorder_domain::math::Tick;

use crate::config::{ChainConfig, ContractAddresses};
use crate::contracts::{Erc20, NftPositionManager, OrderManager, Pool, PoolFactory};
use crate::error::ReadError;
use crate::reader::ChainReader;
use crate::types::{
    BlockRange, OrderCancelledEvent, OrderCreatedEvent, PositionClosedEvent, RawOrder,
    RawPosition, ReceiptLog, ReceiptSummary,
};

/// Production [`ChainReader`] over an HTTP provider.
#[derive(Debug, Clone)]
pub struct RpcChainReader {
    provider: DynProvider,
    addresses: ContractAddresses,
}

impl RpcChainReader {
    /// Connects to the endpoint named by the config.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::InvalidUrl`] when the configured endpoint does
    /// not parse; the connection itself is lazy.
    pub fn connect(config: &ChainConfig) -> Result<Self, ReadError> {
        let url: reqwest::Url = config.rpc_url.parse().map_err(|_| ReadError::InvalidUrl {
            url: config.rpc_url.clone(),
        })?;
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Ok(Self {
            provider,
            addresses: config.addresses,
        })
    }

    /// Wraps an existing provider, mainly for tests against local nodes.
    pub fn new(provider: DynProvider, addresses: ContractAddresses) -> Self {
        Self {
            provider,
            addresses,
        }
    }

    fn order_manager(&self) -> OrderManager::OrderManagerInstance<DynProvider> {
        OrderManager::new(self.addresses.order_manager, self.provider.clone())
    }

    fn nft_manager(&self) -> NftPositionManager::NftPositionManagerInstance<DynProvider> {
        NftPositionManager::new(self.addresses.nft_position_manager, self.provider.clone())
    }

    fn factory(&self) -> PoolFactory::PoolFactoryInstance<DynProvider> {
        PoolFactory::new(self.addresses.factory, self.provider.clone())
    }

    fn event_filter(&self, signature: B256, range: BlockRange, owner: Option<Address>) -> Filter {
        let mut filter = Filter::new()
            .address(self.addresses.order_manager)
            .event_signature(signature)
            .from_block(range.from)
            .to_block(range.to);
        if let Some(owner) = owner {
            // Owner is the second indexed parameter on all three events.
            filter = filter.topic2(owner);
        }
        filter
    }
}

fn log_position(
    log: &alloy::rpc::types::Log,
    what: &'static str,
) -> Result<(u64, B256), ReadError> {
    let block_number = log
        .block_number
        .ok_or_else(|| ReadError::decode(format!("{what} without block number")))?;
    let transaction_hash = log
        .transaction_hash
        .ok_or_else(|| ReadError::decode(format!("{what} without transaction hash")))?;
    Ok((block_number, transaction_hash))
}

fn narrow_token_id(value: U256, what: &'static str) -> Result<u64, ReadError> {
    u64::try_from(value).map_err(|_| ReadError::decode(format!("{what} token id {value}")))
}

#[async_trait]
impl ChainReader for RpcChainReader {
    fn addresses(&self) -> &ContractAddresses {
        &self.addresses
    }

    async fn position(&self, token_id: u64) -> Result<RawPosition, ReadError> {
        let result = self
            .nft_manager()
            .positions(U256::from(token_id))
            .call()
            .await
            .map_err(|source| ReadError::contract("positions", source))?;
        Ok(RawPosition {
            token0: result.token0,
            token1: result.token1,
            fee: result.fee.to::<u32>(),
            tick_lower: result.tickLower.as_i32(),
            tick_upper: result.tickUpper.as_i32(),
            liquidity: result.liquidity,
        })
    }

    async fn nft_balance(&self, owner: Address) -> Result<u64, ReadError> {
        let balance = self
            .nft_manager()
            .balanceOf(owner)
            .call()
            .await
            .map_err(|source| ReadError::contract("balanceOf", source))?;
        u64::try_from(balance).map_err(|_| ReadError::decode(format!("nft balance {balance}")))
    }

    async fn nft_by_index(&self, owner: Address, index: u64) -> Result<u64, ReadError> {
        let token_id = self
            .nft_manager()
            .tokenOfOwnerByIndex(owner, U256::from(index))
            .call()
            .await
            .map_err(|source| ReadError::contract("tokenOfOwnerByIndex", source))?;
        narrow_token_id(token_id, "enumerated")
    }

    async fn approved_operator(&self, token_id: u64) -> Result<Address, ReadError> {
        self.nft_manager()
            .getApproved(U256::from(token_id))
            .call()
            .await
            .map_err(|source| ReadError::contract("getApproved", source))
    }

    async fn order(&self, token_id: u64) -> Result<RawOrder, ReadError> {
        let result = self
            .order_manager()
            .orders(U256::from(token_id))
            .call()
            .await
            .map_err(|source| ReadError::contract("orders", source))?;
        Ok(RawOrder {
            owner: result.owner,
            target_price: result.targetPrice,
            is_above: result.isAbove,
            gas_payment: result.gasPayment,
            slippage_bps: u32::try_from(result.slippageBps)
                .map_err(|_| ReadError::decode("order slippageBps"))?,
        })
    }

    async fn order_created_events(
        &self,
        range: BlockRange,
        owner: Option<Address>,
    ) -> Result<Vec<OrderCreatedEvent>, ReadError> {
        debug!(from = range.from, to = range.to, ?owner, "scanning OrderCreated");
        let filter = self.event_filter(OrderManager::OrderCreated::SIGNATURE_HASH, range, owner);
        let logs = self.provider.get_logs(&filter).await?;
        let mut events = Vec::with_capacity(logs.len());
        for log in logs {
            let decoded = log
                .log_decode::<OrderManager::OrderCreated>()
                .map_err(|_| ReadError::decode("OrderCreated log"))?;
            let (block_number, transaction_hash) = log_position(&log, "OrderCreated log")?;
            let data = decoded.inner.data;
            events.push(OrderCreatedEvent {
                token_id: narrow_token_id(data.tokenId, "OrderCreated")?,
                owner: data.owner,
                target_price: data.targetPrice,
                is_above: data.isAbove,
                gas_payment: data.gasPayment,
                slippage_bps: u32::try_from(data.slippageBps)
                    .map_err(|_| ReadError::decode("OrderCreated slippageBps"))?,
                block_number,
                transaction_hash,
            });
        }
        Ok(events)
    }

    async fn order_cancelled_events(
        &self,
        range: BlockRange,
        owner: Option<Address>,
    ) -> Result<Vec<OrderCancelledEvent>, ReadError> {
        debug!(from = range.from, to = range.to, ?owner, "scanning OrderCancelled");
        let filter =
            self.event_filter(OrderManager::OrderCancelled::SIGNATURE_HASH, range, owner);
        let logs = self.provider.get_logs(&filter).await?;
        let mut events = Vec::with_capacity(logs.len());
        for log in logs {
            let decoded = log
                .log_decode::<OrderManager::OrderCancelled>()
                .map_err(|_| ReadError::decode("OrderCancelled log"))?;
            let (block_number, transaction_hash) = log_position(&log, "OrderCancelled log")?;
            let data = decoded.inner.data;
            events.push(OrderCancelledEvent {
                token_id: narrow_token_id(data.tokenId, "OrderCancelled")?,
                owner: data.owner,
                refund: data.refund,
                block_number,
                transaction_hash,
            });
        }
        Ok(events)
    }

    async fn position_closed_events(
        &self,
        range: BlockRange,
        owner: Option<Address>,
    ) -> Result<Vec<PositionClosedEvent>, ReadError> {
        debug!(from = range.from, to = range.to, ?owner, "scanning PositionClosed");
        let filter =
            self.event_filter(OrderManager::PositionClosed::SIGNATURE_HASH, range, owner);
        let logs = self.provider.get_logs(&filter).await?;
        let mut events = Vec::with_capacity(logs.len());
        for log in logs {
            let decoded = log
                .log_decode::<OrderManager::PositionClosed>()
                .map_err(|_| ReadError::decode("PositionClosed log"))?;
            let (block_number, transaction_hash) = log_position(&log, "PositionClosed log")?;
            let data = decoded.inner.data;
            events.push(PositionClosedEvent {
                token_id: narrow_token_id(data.tokenId, "PositionClosed")?,
                owner: data.owner,
                amount0: data.amount0,
                amount1: data.amount1,
                fees0: data.fees0,
                fees1: data.fees1,
                service_fee0: data.serviceFee0,
                service_fee1: data.serviceFee1,
                block_number,
                transaction_hash,
            });
        }
        Ok(events)
    }

    async fn pool_address(
        &self,
        token0: Address,
        token1: Address,
        fee: u32,
    ) -> Result<Address, ReadError> {
        let fee =
            U24::try_from(fee).map_err(|_| ReadError::decode(format!("pool fee {fee}")))?;
        self.factory()
            .getPool(token0, token1, fee)
            .call()
            .await
            .map_err(|source| ReadError::contract("getPool", source))
    }

    async fn pool_tick(&self, pool: Address) -> Result<Tick, ReadError> {
        let slot0 = Pool::new(pool, self.provider.clone())
            .slot0()
            .call()
            .await
            .map_err(|source| ReadError::contract("slot0", source))?;
        Ok(slot0.tick.as_i32())
    }

    async fn token_symbol(&self, token: Address) -> Result<String, ReadError> {
        Erc20::new(token, self.provider.clone())
            .symbol()
            .call()
            .await
            .map_err(|source| ReadError::contract("symbol", source))
    }

    async fn token_decimals(&self, token: Address) -> Result<u8, ReadError> {
        Erc20::new(token, self.provider.clone())
            .decimals()
            .call()
            .await
            .map_err(|source| ReadError::contract("decimals", source))
    }

    async fn latest_block(&self) -> Result<u64, ReadError> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn block_timestamp(&self, number: u64) -> Result<u64, ReadError> {
        let block = self
            .provider
            .get_block_by_number(number.into())
            .await?
            .ok_or_else(|| ReadError::not_found(format!("block {number}")))?;
        Ok(block.header.timestamp)
    }

    async fn transaction_gas_price(&self, hash: B256) -> Result<U256, ReadError> {
        let tx = self
            .provider
            .get_transaction_by_hash(hash)
            .await?
            .ok_or_else(|| ReadError::not_found(format!("transaction {hash}")))?;
        let price = tx
            .effective_gas_price
            .or_else(|| tx.inner.gas_price())
            .unwrap_or_default();
        Ok(U256::from(price))
    }

    async fn transaction_receipt(&self, hash: B256) -> Result<ReceiptSummary, ReadError> {
        let receipt = self
            .provider
            .get_transaction_receipt(hash)
            .await?
            .ok_or_else(|| ReadError::not_found(format!("receipt {hash}")))?;
        let logs = receipt
            .inner
            .logs()
            .iter()
            .map(|log| ReceiptLog {
                address: log.inner.address,
                topic0: log.inner.data.topics().first().copied(),
            })
            .collect();
        Ok(ReceiptSummary {
            gas_used: receipt.gas_used,
            logs,
        })
    }
}
