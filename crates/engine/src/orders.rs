//! Order assembly.

use alloy::primitives::Address;
use tickorder_chain::reader::ChainReader;
use tickorder_chain::types::BlockRange;
use tickorder_domain::entities::{CreateOrderArgs, Order, Position};
use tickorder_domain::math::{encoded_to_tick, human_price_to_tick, tick_to_encoded};
use tracing::{debug, warn};

use crate::engine::Engine;
use crate::error::EngineError;

impl<R: ChainReader> Engine<R> {
    /// Reads the order wrapping an NFT, if one exists.
    ///
    /// A zero owner in the raw record means the NFT carries no order; that
    /// is `Ok(None)`, not an error. A stored target tick outside the valid
    /// range is a hard codec error.
    pub async fn order(&self, nft_id: u64) -> Result<Option<Order>, EngineError> {
        let raw = self
            .reader
            .order(nft_id)
            .await
            .map_err(|source| EngineError::OrderRead { nft_id, source })?;
        if raw.is_vacant() {
            return Ok(None);
        }

        let target_tick = encoded_to_tick(raw.target_price)?;
        let position = self.position(nft_id).await?;

        Ok(Some(Order {
            nft_id,
            owner: raw.owner,
            target_tick,
            is_above: raw.is_above,
            gas_payment: raw.gas_payment,
            slippage_bps: raw.slippage_bps,
            position,
        }))
    }

    /// Collects the owner's live orders from the recent creation events.
    ///
    /// The scan is deliberately unfiltered: an NFT created by a previous
    /// owner still surfaces here, and the filter runs on the owner the
    /// order manager records now. Stale candidates whose order is gone or
    /// unreadable are dropped individually.
    pub async fn active_orders(&self, owner: Address) -> Result<Vec<Order>, EngineError> {
        let latest = self.reader.latest_block().await?;
        let range = BlockRange::lookback(latest, self.config.lookback_blocks);

        let events = self.reader.order_created_events(range, None).await?;
        let mut ids = Vec::new();
        for event in &events {
            if !ids.contains(&event.token_id) {
                ids.push(event.token_id);
            }
        }
        debug!(
            events = events.len(),
            candidates = ids.len(),
            "scanned creation events"
        );

        let mut orders = Vec::new();
        for id in ids {
            match self.order(id).await {
                Ok(Some(order)) if order.owner == owner => orders.push(order),
                Ok(_) => {}
                Err(error) if error.recoverable() => {
                    warn!(nft_id = id, error = %error, "skipping order");
                }
                Err(error) => return Err(error),
            }
        }
        Ok(orders)
    }

    /// Whether the order manager may move this NFT.
    pub async fn is_nft_approved(&self, nft_id: u64) -> Result<bool, EngineError> {
        let approved = self.reader.approved_operator(nft_id).await?;
        Ok(approved == self.reader.addresses().order_manager)
    }

    /// Encodes the submission arguments for a new order on `position`.
    ///
    /// The target price is taken in human form and leaves in its
    /// two's-complement wire encoding; the gas deposit and the slippage
    /// fall back to the configured defaults.
    pub fn prepare_create_order(
        &self,
        position: &Position,
        target_price: f64,
        is_above: bool,
        slippage_bps: Option<u32>,
    ) -> Result<CreateOrderArgs, EngineError> {
        let tick = human_price_to_tick(target_price, position.decimals0, position.decimals1)?;
        Ok(CreateOrderArgs {
            token_id: position.nft_id,
            target_price: tick_to_encoded(tick),
            is_above,
            slippage_bps: slippage_bps.unwrap_or(self.config.default_slippage_bps),
            gas_deposit: self.config.required_gas_payment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DAI, MockChain, POOL, WPLS};
    use alloy::primitives::{B256, U256};
    use tickorder_chain::types::{OrderCreatedEvent, RawOrder, RawPosition};
    use tickorder_domain::math::price_to_tick;

    fn raw_position() -> RawPosition {
        RawPosition {
            token0: WPLS,
            token1: DAI,
            fee: 3000,
            tick_lower: -100,
            tick_upper: 100,
            liquidity: 1_000,
        }
    }

    fn raw_order(owner: Address, target_tick: i32) -> RawOrder {
        RawOrder {
            owner,
            target_price: tick_to_encoded(target_tick),
            is_above: true,
            gas_payment: U256::from(10u8),
            slippage_bps: 500,
        }
    }

    fn created(token_id: u64, owner: Address, block_number: u64) -> OrderCreatedEvent {
        OrderCreatedEvent {
            token_id,
            owner,
            target_price: U256::ZERO,
            is_above: true,
            gas_payment: U256::ZERO,
            slippage_bps: 500,
            block_number,
            transaction_hash: B256::repeat_byte(token_id as u8),
        }
    }

    fn populated(owner: Address) -> MockChain {
        MockChain::new()
            .with_token(WPLS, "WPLS", 18)
            .with_token(DAI, "DAI", 18)
            .with_position(7, raw_position())
            .with_order(7, raw_order(owner, -500))
            .with_pool(WPLS, DAI, 3000, POOL, 50)
    }

    #[tokio::test]
    async fn decodes_negative_target_tick_from_wire_form() {
        let owner = Address::new([0xAA; 20]);
        let engine = Engine::new(populated(owner));

        let order = engine.order(7).await.unwrap().unwrap();
        assert_eq!(order.target_tick, -500);
        assert_eq!(order.owner, owner);
        assert_eq!(order.position.nft_id, 7);
    }

    #[tokio::test]
    async fn vacant_order_is_none_not_an_error() {
        let reader = MockChain::new().with_order(7, raw_order(Address::ZERO, 0));
        let engine = Engine::new(reader);

        assert!(engine.order(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unreadable_order_is_a_structural_error() {
        let engine = Engine::new(MockChain::new());

        let error = engine.order(7).await.unwrap_err();
        assert!(matches!(error, EngineError::OrderRead { nft_id: 7, .. }));
        assert!(error.recoverable());
    }

    #[tokio::test]
    async fn malformed_stored_tick_is_a_hard_error() {
        let owner = Address::new([0xAA; 20]);
        let raw = RawOrder {
            target_price: U256::from(1_000_000u64),
            ..raw_order(owner, 0)
        };
        let engine = Engine::new(MockChain::new().with_order(7, raw));

        let error = engine.order(7).await.unwrap_err();
        assert!(matches!(error, EngineError::Codec(_)));
        assert!(!error.recoverable());
    }

    #[tokio::test]
    async fn active_orders_dedupe_and_filter_by_current_owner() {
        let owner = Address::new([0xAA; 20]);
        let previous = Address::new([0xBB; 20]);
        // Two creation events for the same NFT, the older one by a previous
        // owner; the order manager now records `owner`.
        let reader = populated(owner)
            .with_created(created(7, previous, 450_000))
            .with_created(created(7, owner, 460_000));
        let engine = Engine::new(reader);

        let orders = engine.active_orders(owner).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].nft_id, 7);
    }

    #[tokio::test]
    async fn active_orders_drop_other_owners_and_failures() {
        let owner = Address::new([0xAA; 20]);
        let other = Address::new([0xCC; 20]);
        let reader = populated(owner)
            .with_position(8, raw_position())
            .with_order(8, raw_order(other, 100))
            .with_created(created(7, owner, 450_000))
            .with_created(created(8, other, 451_000))
            // NFT 9 has a creation event but no order record left.
            .with_created(created(9, owner, 452_000));
        let engine = Engine::new(reader);

        let orders = engine.active_orders(owner).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].owner, owner);
    }

    #[tokio::test]
    async fn events_before_the_lookback_window_are_invisible() {
        let owner = Address::new([0xAA; 20]);
        let reader = populated(owner).with_created(created(7, owner, 100));
        let engine = Engine::new(reader);

        assert!(engine.active_orders(owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn creation_scan_failure_aborts_the_call() {
        let owner = Address::new([0xAA; 20]);
        let engine = Engine::new(MockChain::new().failing_created_scan());

        let error = engine.active_orders(owner).await.unwrap_err();
        assert!(matches!(error, EngineError::Chain(_)));
        assert!(!error.recoverable());
    }

    #[tokio::test]
    async fn approval_matches_order_manager_only() {
        let manager = tickorder_chain::config::ContractAddresses::default().order_manager;
        let reader = MockChain::new()
            .with_approval(7, manager)
            .with_approval(8, Address::new([0xDD; 20]));
        let engine = Engine::new(reader);

        assert!(engine.is_nft_approved(7).await.unwrap());
        assert!(!engine.is_nft_approved(8).await.unwrap());
        assert!(!engine.is_nft_approved(9).await.unwrap());
    }

    #[tokio::test]
    async fn prepare_create_order_encodes_price_and_defaults() {
        let engine = Engine::new(MockChain::new());
        let position = Position {
            nft_id: 7,
            token0: WPLS,
            token1: DAI,
            symbol0: "WPLS".to_string(),
            symbol1: "DAI".to_string(),
            decimals0: 18,
            decimals1: 18,
            fee: 3000,
            tick_lower: -100,
            tick_upper: 100,
            liquidity: 1_000,
            current_tick: 0,
            pool_address: POOL,
        };

        let args = engine
            .prepare_create_order(&position, 0.5, false, None)
            .unwrap();
        assert_eq!(args.token_id, 7);
        assert!(!args.is_above);
        assert_eq!(args.slippage_bps, 500);
        assert_eq!(args.gas_deposit, engine.config().required_gas_payment);
        // The encoded target round-trips to the tick for price 0.5.
        assert_eq!(
            encoded_to_tick(args.target_price).unwrap(),
            price_to_tick(0.5).unwrap()
        );

        let args = engine
            .prepare_create_order(&position, 0.5, true, Some(200))
            .unwrap();
        assert_eq!(args.slippage_bps, 200);
    }

    #[tokio::test]
    async fn prepare_create_order_rejects_nonpositive_price() {
        let engine = Engine::new(MockChain::new());
        let position = Position {
            nft_id: 7,
            token0: WPLS,
            token1: DAI,
            symbol0: "WPLS".to_string(),
            symbol1: "DAI".to_string(),
            decimals0: 18,
            decimals1: 18,
            fee: 3000,
            tick_lower: -100,
            tick_upper: 100,
            liquidity: 1_000,
            current_tick: 0,
            pool_address: POOL,
        };

        let error = engine
            .prepare_create_order(&position, 0.0, true, None)
            .unwrap_err();
        assert!(matches!(error, EngineError::Codec(_)));
    }
}
