pub mod common;
pub mod constants;
pub mod instruction;
pub mod trading;
pub mod utils;
use crate::common::SolanaRpcClient;
use crate::common::SwapConfig;
use crate::common::SwapRpcClient;
use crate::common::asset::AssetCatalog;
use crate::common::error::SwapResult;
use crate::common::signer::SwapSigner;
use crate::instruction::utils::liquidity_pool::fetch_pool_reserves;
pub use crate::common::{Asset, SwapError};
pub use crate::trading::{
    NotificationSinkRef, SwapExecutor, SwapNotification, SwapNotificationSink, SwapSession,
    TracingNotificationSink,
};
pub use crate::utils::calc::constant_product::{FlipResult, compute_output, flip};
pub use crate::utils::quote::SwapQuote;
pub use crate::instruction::utils::liquidity_pool::{
    PoolReserves, get_associated_token_address, get_pool_pda,
};
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use std::sync::Arc;

/// Client for the constant-product liquidity pool program
///
/// Wires an RPC connection, a [`SwapExecutor`] and a notification sink from a
/// [`SwapConfig`]. Sessions are owned by the caller; the client only reads
/// reserves into them and submits their current selection.
#[derive(Clone)]
pub struct SwapClient {
    /// RPC boundary used for reserves, blockhashes and submission
    pub rpc: Arc<dyn SwapRpcClient>,
    pub executor: Arc<SwapExecutor>,
    pub config: SwapConfig,
}

impl SwapClient {
    /// Creates a client backed by the nonblocking Solana RPC client.
    ///
    /// Notifications are written to `tracing` by default.
    pub fn new(config: SwapConfig) -> Self {
        let rpc: Arc<dyn SwapRpcClient> = Arc::new(SolanaRpcClient::new_with_commitment(
            config.rpc_url.clone(),
            config.commitment.clone(),
        ));
        Self::with_rpc(rpc, config, Arc::new(TracingNotificationSink))
    }

    /// Creates a client over any RPC implementation, e.g. `MockSwapRpc`.
    pub fn with_rpc(
        rpc: Arc<dyn SwapRpcClient>,
        config: SwapConfig,
        notification_sink: NotificationSinkRef,
    ) -> Self {
        let executor = Arc::new(
            SwapExecutor::new(rpc.clone(), &config).with_notification_sink(notification_sink),
        );
        log::debug!(
            "swap client ready: program={} rpc={} compute_limit={:?} compute_price={:?}",
            config.program_id,
            config.rpc_url,
            config.compute_unit_limit,
            config.compute_unit_price
        );
        Self { rpc, executor, config }
    }

    pub fn pool_address(&self) -> SwapResult<Pubkey> {
        self.executor.pool_address()
    }

    pub fn new_session(&self, catalog: AssetCatalog) -> SwapSession {
        SwapSession::new(catalog)
    }

    /// Reads every catalog asset's pool reserve and requotes the session.
    pub async fn refresh_reserves(&self, session: &mut SwapSession) -> SwapResult<()> {
        let reserves = fetch_pool_reserves(self.rpc.as_ref(), session.catalog().assets())
            .await
            .map_err(|source| SwapError::Rpc { source })?;
        log::debug!("fetched {} pool reserves", reserves.len());
        session.update_reserves(reserves);
        Ok(())
    }

    /// Submits the session's selection and input amount.
    pub async fn swap(
        &self,
        session: &SwapSession,
        signer: &dyn SwapSigner,
    ) -> SwapResult<Signature> {
        self.executor.submit_session(session, signer).await
    }
}
