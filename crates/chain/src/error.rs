use thiserror::Error;

/// Failures crossing the reader boundary.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The endpoint could not be reached or failed at the transport level.
    #[error("rpc transport failure")]
    Transport(#[from] alloy::transports::TransportError),
    /// A contract call reverted or could not complete.
    #[error("contract call `{call}` failed")]
    Contract {
        call: &'static str,
        #[source]
        source: alloy::contract::Error,
    },
    /// A response arrived but its values do not fit the domain types.
    #[error("could not decode {what}")]
    Decode { what: String },
    /// A block, transaction, or receipt the chain should have is missing.
    #[error("{what} not found")]
    NotFound { what: String },
    /// The configured RPC endpoint is not a valid URL.
    #[error("invalid rpc url `{url}`")]
    InvalidUrl { url: String },
}

impl ReadError {
    pub fn contract(call: &'static str, source: alloy::contract::Error) -> Self {
        Self::Contract { call, source }
    }

    pub fn decode(what: impl Into<String>) -> Self {
        Self::Decode { what: what.into() }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }
}
