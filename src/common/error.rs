//! Swap 错误类型
//!
//! Quote errors are local to a single recomputation; submission errors are
//! scoped to a single swap attempt. Nothing here is process-fatal.

use solana_sdk::pubkey::Pubkey;

/// Errors surfaced by the quote engine, the swap session and the executor.
#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    /// Pay-side reserve is zero, the curve is undefined.
    #[error("invalid reserve state: pay-side reserve must be positive")]
    InvalidReserveState,
    #[error("invalid asset pair: pay and receive assets must differ")]
    InvalidAssetPair,
    #[error("signer has no public identity")]
    NotAuthenticated,
    #[error("a swap for this signer and pool is already in flight")]
    SwapAlreadyInFlight,
    #[error("swap execution failed: {source}")]
    SwapExecutionFailed {
        #[source]
        source: anyhow::Error,
    },
    #[error("rpc error: {source}")]
    Rpc {
        #[source]
        source: anyhow::Error,
    },
    #[error("asset catalog needs at least two assets, got {0}")]
    InsufficientAssets(usize),
    #[error("unknown asset: {0}")]
    UnknownAsset(Pubkey),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// 非 PDA 账户不允许作为 off-curve owner
    #[error("owner {0} is off curve")]
    OwnerOffCurve(Pubkey),
    #[error("unable to derive pool address for program {0}")]
    PoolAddressNotFound(Pubkey),
    #[error("invalid asset catalog: {0}")]
    Catalog(String),
}

impl SwapError {
    pub fn execution_failed(source: impl Into<anyhow::Error>) -> Self {
        SwapError::SwapExecutionFailed { source: source.into() }
    }
}

pub type SwapResult<T> = Result<T, SwapError>;
