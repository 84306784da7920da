use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::math::{self, Tick};

use super::position::Position;

/// A live limit order wrapping a position NFT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub nft_id: u64,
    /// Current owner recorded by the order manager.
    pub owner: Address,
    pub target_tick: Tick,
    /// Trigger direction: `true` closes when the price rises to the target,
    /// `false` when it falls to it.
    pub is_above: bool,
    /// Gas deposit held by the order manager, in wei.
    pub gas_payment: U256,
    pub slippage_bps: u32,
    /// The underlying position the order will close.
    pub position: Position,
}

/// Trigger state of an order relative to the pool's current price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OrderReadiness {
    /// The trigger condition holds right now.
    Ready,
    /// Not triggered yet; `progress` is a 0-100 display figure.
    Waiting { progress: f64 },
}

impl OrderReadiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn progress(&self) -> f64 {
        match self {
            Self::Ready => 100.0,
            Self::Waiting { progress } => *progress,
        }
    }
}

impl Order {
    /// Human price the order triggers at.
    pub fn target_price(&self) -> f64 {
        math::tick_to_human_price(
            self.target_tick,
            self.position.decimals0,
            self.position.decimals1,
        )
    }

    /// Evaluates the trigger against the pool's current price.
    ///
    /// Upward orders report proportional progress toward the target, capped
    /// at 100. Downward orders report 0 until they trigger.
    // TODO: progress for downward orders needs a product definition before
    // it can show a meaningful figure.
    pub fn readiness(&self) -> OrderReadiness {
        let current = self.position.current_price();
        let target = self.target_price();
        if self.is_above {
            if current >= target {
                OrderReadiness::Ready
            } else {
                OrderReadiness::Waiting {
                    progress: (current / target * 100.0).min(100.0),
                }
            }
        } else if current <= target {
            OrderReadiness::Ready
        } else {
            OrderReadiness::Waiting { progress: 0.0 }
        }
    }
}

/// Fully encoded arguments for the order manager's `createOrder` call.
///
/// This is the hand-off point to the submission layer: everything is already
/// in wire form, including the two's-complement target tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderArgs {
    pub token_id: u64,
    /// Target tick in its two's-complement `uint256` encoding.
    pub target_price: U256,
    pub is_above: bool,
    pub slippage_bps: u32,
    /// Gas deposit to send with the call, in wei.
    pub gas_deposit: U256,
}
