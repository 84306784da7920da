//! Engine error types.

use thiserror::Error;
use tickorder_chain::error::ReadError;
use tickorder_domain::error::DomainError;

/// Errors produced by the assembly and aggregation paths.
///
/// The structural variants carry the NFT they refer to so batch callers can
/// skip that item and keep going; the rest abort the whole call.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A single position could not be assembled.
    #[error("failed to read position {nft_id}: {source}")]
    PositionRead {
        /// NFT whose position read failed.
        nft_id: u64,
        /// Underlying chain failure.
        source: ReadError,
    },

    /// A single order record could not be read.
    #[error("failed to read order {nft_id}: {source}")]
    OrderRead {
        /// NFT whose order read failed.
        nft_id: u64,
        /// Underlying chain failure.
        source: ReadError,
    },

    /// A wire value violated the domain encoding rules.
    #[error(transparent)]
    Codec(#[from] DomainError),

    /// A chain read outside any per-item scope failed.
    #[error(transparent)]
    Chain(#[from] ReadError),
}

impl EngineError {
    /// Whether a batch caller may skip the failing item and continue.
    ///
    /// Only the per-NFT structural failures qualify; codec violations and
    /// scan or enumeration failures abort the batch.
    pub fn recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::PositionRead { .. } | EngineError::OrderRead { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_failures_are_recoverable() {
        let err = EngineError::PositionRead {
            nft_id: 7,
            source: ReadError::not_found("position 7"),
        };
        assert!(err.recoverable());

        let err = EngineError::OrderRead {
            nft_id: 7,
            source: ReadError::not_found("order 7"),
        };
        assert!(err.recoverable());
    }

    #[test]
    fn codec_and_chain_failures_are_hard() {
        let err = EngineError::Codec(DomainError::NonPositivePrice);
        assert!(!err.recoverable());

        let err = EngineError::Chain(ReadError::not_found("latest block"));
        assert!(!err.recoverable());
    }
}
