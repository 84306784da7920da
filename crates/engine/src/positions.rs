//! Position assembly.

use alloy::primitives::Address;
use tickorder_chain::error::ReadError;
use tickorder_chain::reader::ChainReader;
use tickorder_domain::entities::Position;
use tracing::{debug, warn};

use crate::engine::Engine;
use crate::error::EngineError;

impl<R: ChainReader> Engine<R> {
    /// Assembles the full view of one position NFT.
    ///
    /// A zero pool address means the pair has no pool yet, which is a
    /// legitimate state; the current tick is reported as 0 then.
    pub async fn position(&self, nft_id: u64) -> Result<Position, EngineError> {
        self.assemble_position(nft_id)
            .await
            .map_err(|source| EngineError::PositionRead { nft_id, source })
    }

    async fn assemble_position(&self, nft_id: u64) -> Result<Position, ReadError> {
        let raw = self.reader.position(nft_id).await?;

        let (info0, info1) = tokio::join!(
            self.tokens.get_or_fetch(&self.reader, raw.token0),
            self.tokens.get_or_fetch(&self.reader, raw.token1),
        );

        let pool_address = self
            .reader
            .pool_address(raw.token0, raw.token1, raw.fee)
            .await?;
        let current_tick = if pool_address == Address::ZERO {
            debug!(nft_id, "pair has no pool yet");
            0
        } else {
            self.reader.pool_tick(pool_address).await?
        };

        Ok(Position {
            nft_id,
            token0: raw.token0,
            token1: raw.token1,
            symbol0: info0.symbol,
            symbol1: info1.symbol,
            decimals0: info0.decimals,
            decimals1: info1.decimals,
            fee: raw.fee,
            tick_lower: raw.tick_lower,
            tick_upper: raw.tick_upper,
            liquidity: raw.liquidity,
            current_tick,
            pool_address,
        })
    }

    /// Assembles every position the owner holds that still has liquidity.
    ///
    /// Enumeration failures abort the call. A single position failing to
    /// assemble only drops that NFT from the result.
    pub async fn positions(&self, owner: Address) -> Result<Vec<Position>, EngineError> {
        let balance = self.reader.nft_balance(owner).await?;

        let mut ids = Vec::new();
        for index in 0..balance {
            let id = self.reader.nft_by_index(owner, index).await?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        debug!(owner = %owner, nfts = ids.len(), "enumerated position NFTs");

        let mut positions = Vec::new();
        for id in ids {
            match self.position(id).await {
                Ok(position) => positions.push(position),
                Err(error) if error.recoverable() => {
                    warn!(nft_id = id, error = %error, "skipping position");
                }
                Err(error) => return Err(error),
            }
        }
        positions.retain(|position| position.liquidity > 0);
        Ok(positions)
    }
}
