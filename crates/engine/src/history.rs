//! History aggregation.

use alloy::primitives::Address;
use alloy::sol_types::SolEvent;
use tickorder_chain::contracts::Erc20;
use tickorder_chain::reader::ChainReader;
use tickorder_chain::types::{BlockRange, ReceiptSummary};
use tickorder_domain::entities::{
    HistoryKind, HistoryRecord, OrderCancellation, OrderCreation, PositionClosure, TokenInfo,
};
use tracing::{debug, info, warn};

use crate::engine::Engine;
use crate::error::EngineError;

impl<R: ChainReader> Engine<R> {
    /// Rebuilds the owner's order history from the recent event streams.
    ///
    /// The creation, cancellation and closure scans run concurrently over
    /// the same window, each filtered server-side by the indexed owner.
    /// Records that cannot be completed are dropped individually; a failed
    /// scan aborts the whole call.
    pub async fn history(&self, owner: Address) -> Result<Vec<HistoryRecord>, EngineError> {
        let latest = self.reader.latest_block().await?;
        let range = BlockRange::lookback(latest, self.config.lookback_blocks);
        info!(owner = %owner, from = range.from, to = range.to, "scanning order history");

        let (created, cancelled, closed) = tokio::try_join!(
            self.reader.order_created_events(range, Some(owner)),
            self.reader.order_cancelled_events(range, Some(owner)),
            self.reader.position_closed_events(range, Some(owner)),
        )?;
        debug!(
            created = created.len(),
            cancelled = cancelled.len(),
            closed = closed.len(),
            "event scans finished"
        );

        let mut records = Vec::with_capacity(created.len() + cancelled.len() + closed.len());

        for event in created {
            let timestamp = match self.reader.block_timestamp(event.block_number).await {
                Ok(timestamp) => timestamp,
                Err(error) => {
                    warn!(nft_id = event.token_id, error = %error, "dropping creation record");
                    continue;
                }
            };
            let (symbol0, symbol1) = self.position_symbols(event.token_id).await;
            records.push(HistoryRecord {
                nft_id: event.token_id,
                timestamp,
                block_number: event.block_number,
                transaction_hash: event.transaction_hash,
                symbol0,
                symbol1,
                kind: HistoryKind::Created(OrderCreation {
                    target_price: event.target_price,
                    is_above: event.is_above,
                    gas_payment: event.gas_payment,
                    slippage_bps: event.slippage_bps,
                }),
            });
        }

        for event in cancelled {
            let timestamp = match self.reader.block_timestamp(event.block_number).await {
                Ok(timestamp) => timestamp,
                Err(error) => {
                    warn!(nft_id = event.token_id, error = %error, "dropping cancellation record");
                    continue;
                }
            };
            let (symbol0, symbol1) = self.position_symbols(event.token_id).await;
            records.push(HistoryRecord {
                nft_id: event.token_id,
                timestamp,
                block_number: event.block_number,
                transaction_hash: event.transaction_hash,
                symbol0,
                symbol1,
                kind: HistoryKind::Cancelled(OrderCancellation {
                    refunded_gas: event.refund,
                }),
            });
        }

        for event in closed {
            let fetched = tokio::try_join!(
                self.reader.block_timestamp(event.block_number),
                self.reader.transaction_receipt(event.transaction_hash),
                self.reader.transaction_gas_price(event.transaction_hash),
            );
            let (timestamp, receipt, gas_price) = match fetched {
                Ok(parts) => parts,
                Err(error) => {
                    warn!(nft_id = event.token_id, error = %error, "dropping closure record");
                    continue;
                }
            };

            let (info0, info1) = self.closure_tokens(&receipt).await;
            records.push(HistoryRecord {
                nft_id: event.token_id,
                timestamp,
                block_number: event.block_number,
                transaction_hash: event.transaction_hash,
                symbol0: info0.symbol,
                symbol1: info1.symbol,
                kind: HistoryKind::Closed(PositionClosure {
                    principal0: event.amount0,
                    principal1: event.amount1,
                    fees0: event.fees0,
                    fees1: event.fees1,
                    service_fee0: event.service_fee0,
                    service_fee1: event.service_fee1,
                    decimals0: info0.decimals,
                    decimals1: info1.decimals,
                    gas_used: receipt.gas_used,
                    gas_price,
                }),
            });
        }

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    /// Symbols of the position's pair, with placeholders when the position
    /// is gone (expected after a cancellation or an NFT transfer).
    async fn position_symbols(&self, nft_id: u64) -> (String, String) {
        match self.reader.position(nft_id).await {
            Ok(raw) => {
                let (info0, info1) = tokio::join!(
                    self.tokens.get_or_fetch(&self.reader, raw.token0),
                    self.tokens.get_or_fetch(&self.reader, raw.token1),
                );
                (info0.symbol, info1.symbol)
            }
            Err(error) => {
                debug!(nft_id, error = %error, "position unavailable, using placeholder symbols");
                placeholder_pair()
            }
        }
    }

    /// Identifies the closed pair from the ERC-20 transfers in the receipt.
    async fn closure_tokens(&self, receipt: &ReceiptSummary) -> (TokenInfo, TokenInfo) {
        let tokens = receipt.emitters_of(Erc20::Transfer::SIGNATURE_HASH);
        if tokens.len() < 2 {
            debug!(
                transfers = tokens.len(),
                "too few transfer logs to identify the pair"
            );
            let (symbol0, symbol1) = placeholder_pair();
            return (TokenInfo::new(symbol0, 18), TokenInfo::new(symbol1, 18));
        }
        tokio::join!(
            self.tokens.get_or_fetch(&self.reader, tokens[0]),
            self.tokens.get_or_fetch(&self.reader, tokens[1]),
        )
    }
}

fn placeholder_pair() -> (String, String) {
    ("Token0".to_string(), "Token1".to_string())
}
