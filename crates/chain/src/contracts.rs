//! Typed contract bindings.
//!
//! Signatures mirror the deployed PulseChain contracts. The order manager
//! custodies position NFTs and closes them when their target tick trades;
//! the rest is the standard Uniswap v3-style periphery it builds on.

use alloy::sol;

sol! {
    /// Limit-order vault holding deposited position NFTs.
    #[sol(rpc)]
    contract OrderManager {
        function orders(uint256 tokenId)
            external
            view
            returns (
                address owner,
                uint256 targetPrice,
                bool isAbove,
                uint256 gasPayment,
                uint256 slippageBps
            );

        function createOrder(
            uint256 tokenId,
            uint256 targetPrice,
            bool isAbove,
            uint256 slippageBps
        ) external payable;

        function cancelOrder(uint256 tokenId) external;

        function closePosition(uint256 tokenId) external;

        event OrderCreated(
            uint256 indexed tokenId,
            address indexed owner,
            uint256 targetPrice,
            bool isAbove,
            uint256 gasPayment,
            uint256 slippageBps
        );

        event OrderCancelled(uint256 indexed tokenId, address indexed owner, uint256 refund);

        event PositionClosed(
            uint256 indexed tokenId,
            address indexed owner,
            uint256 amount0,
            uint256 amount1,
            uint256 fees0,
            uint256 fees1,
            uint256 serviceFee0,
            uint256 serviceFee1
        );
    }

    /// Uniswap v3-style NFT position manager.
    #[sol(rpc)]
    contract NftPositionManager {
        function ownerOf(uint256 tokenId) external view returns (address);

        function positions(uint256 tokenId)
            external
            view
            returns (
                uint96 nonce,
                address operator,
                address token0,
                address token1,
                uint24 fee,
                int24 tickLower,
                int24 tickUpper,
                uint128 liquidity,
                uint256 feeGrowthInside0LastX128,
                uint256 feeGrowthInside1LastX128,
                uint128 tokensOwed0,
                uint128 tokensOwed1
            );

        function balanceOf(address owner) external view returns (uint256);

        function tokenOfOwnerByIndex(address owner, uint256 index)
            external
            view
            returns (uint256);

        function approve(address to, uint256 tokenId) external;

        function getApproved(uint256 tokenId) external view returns (address);
    }

    /// Pool lookup by pair and fee tier.
    #[sol(rpc)]
    contract PoolFactory {
        function getPool(address tokenA, address tokenB, uint24 fee)
            external
            view
            returns (address pool);
    }

    /// Concentrated-liquidity pool.
    #[sol(rpc)]
    contract Pool {
        function slot0()
            external
            view
            returns (
                uint160 sqrtPriceX96,
                int24 tick,
                uint16 observationIndex,
                uint16 observationCardinality,
                uint16 observationCardinalityNext,
                uint32 feeProtocol,
                bool unlocked
            );

        function token0() external view returns (address);

        function token1() external view returns (address);

        function liquidity() external view returns (uint128);
    }

    /// Minimal ERC-20 surface.
    #[sol(rpc)]
    contract Erc20 {
        function symbol() external view returns (string);

        function decimals() external view returns (uint8);

        function balanceOf(address account) external view returns (uint256);

        event Transfer(address indexed from, address indexed to, uint256 value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::b256;
    use alloy::sol_types::SolEvent;

    #[test]
    fn transfer_signature_matches_erc20_standard() {
        // The receipt scan keys on this topic to identify the pool's tokens.
        assert_eq!(
            Erc20::Transfer::SIGNATURE_HASH,
            b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        );
    }

    #[test]
    fn order_events_have_distinct_signatures() {
        let sigs = [
            OrderManager::OrderCreated::SIGNATURE_HASH,
            OrderManager::OrderCancelled::SIGNATURE_HASH,
            OrderManager::PositionClosed::SIGNATURE_HASH,
        ];
        assert_ne!(sigs[0], sigs[1]);
        assert_ne!(sigs[0], sigs[2]);
        assert_ne!(sigs[1], sigs[2]);
    }
}
