//! Swap 执行器
//!
//! 派生账户 → 构建指令 → 签名 → 发送并确认 → 通知。同一 (payer, pool) 同时
//! 只允许一个在途请求。失败不重试，由调用方决定是否重新提交。

use crate::{
    common::{
        CallbackExecutionMode, SwapConfig, SwapRpcClient,
        asset::Asset,
        error::{SwapError, SwapResult},
        signer::SwapSigner,
    },
    instruction::{liquidity_pool::LiquidityPoolInstructionBuilder, utils::liquidity_pool::get_pool_pda},
    trading::{
        common::build_transaction,
        core::{params::SwapParams, traits::InstructionBuilder},
        lifecycle::{NoopNotificationSink, NotificationSinkRef, SwapNotification, dispatch},
        session::SwapSession,
    },
};
use dashmap::DashSet;
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use std::sync::Arc;
use tracing::{info, warn};

type InFlightKey = (Pubkey, Pubkey);

/// Removes its key from the in-flight set when the submission ends, however it ends.
struct InFlightGuard<'a> {
    set: &'a DashSet<InFlightKey>,
    key: InFlightKey,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(set: &'a DashSet<InFlightKey>, key: InFlightKey) -> Option<Self> {
        if set.insert(key) { Some(Self { set, key }) } else { None }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set.remove(&self.key);
    }
}

pub struct SwapExecutor {
    rpc: Arc<dyn SwapRpcClient>,
    program_id: Pubkey,
    compute_unit_limit: Option<u32>,
    compute_unit_price: Option<u64>,
    callback_execution_mode: CallbackExecutionMode,
    notification_sink: NotificationSinkRef,
    in_flight: DashSet<InFlightKey>,
}

impl SwapExecutor {
    pub fn new(rpc: Arc<dyn SwapRpcClient>, config: &SwapConfig) -> Self {
        Self {
            rpc,
            program_id: config.program_id,
            compute_unit_limit: config.compute_unit_limit,
            compute_unit_price: config.compute_unit_price,
            callback_execution_mode: config.callback_execution_mode,
            notification_sink: Arc::new(NoopNotificationSink),
            in_flight: DashSet::new(),
        }
    }

    pub fn with_notification_sink(mut self, sink: NotificationSinkRef) -> Self {
        self.notification_sink = sink;
        self
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn pool_address(&self) -> SwapResult<Pubkey> {
        get_pool_pda(&self.program_id).ok_or(SwapError::PoolAddressNotFound(self.program_id))
    }

    /// Whether a submission for `payer` against this executor's pool is pending.
    pub fn is_in_flight(&self, payer: &Pubkey) -> bool {
        match self.pool_address() {
            Ok(pool) => self.in_flight.contains(&(*payer, pool)),
            Err(_) => false,
        }
    }

    /// Submits an exact-in swap of `amount` smallest units of `from` for `to`.
    ///
    /// Every outcome is also delivered to the notification sink.
    pub async fn submit_swap(
        &self,
        signer: &dyn SwapSigner,
        from: &Asset,
        to: &Asset,
        amount: u64,
    ) -> SwapResult<Signature> {
        let result = self.execute(signer, from, to, amount).await;
        let notification = match &result {
            Ok(signature) => {
                info!(%signature, pay = %from.symbol, receive = %to.symbol, amount, "swap confirmed");
                SwapNotification::success(*signature)
            }
            Err(e) => {
                warn!(pay = %from.symbol, receive = %to.symbol, amount, "swap failed: {}", e);
                SwapNotification::error(format!("Swap failed: {}", e))
            }
        };
        dispatch(&self.notification_sink, notification, self.callback_execution_mode).await;
        result
    }

    /// Submits the session's current selection and input amount.
    pub async fn submit_session(
        &self,
        session: &SwapSession,
        signer: &dyn SwapSigner,
    ) -> SwapResult<Signature> {
        self.submit_swap(signer, session.from(), session.to(), session.input_amount()).await
    }

    async fn execute(
        &self,
        signer: &dyn SwapSigner,
        from: &Asset,
        to: &Asset,
        amount: u64,
    ) -> SwapResult<Signature> {
        let payer = signer.identity().ok_or(SwapError::NotAuthenticated)?;
        if from.mint == to.mint {
            return Err(SwapError::InvalidAssetPair);
        }
        let pool = self.pool_address()?;
        let _guard = InFlightGuard::acquire(&self.in_flight, (payer, pool))
            .ok_or(SwapError::SwapAlreadyInFlight)?;

        let params = SwapParams {
            program_id: self.program_id,
            payer,
            pay_asset: from.clone(),
            receive_asset: to.clone(),
            input_amount: amount,
        };
        let instructions = LiquidityPoolInstructionBuilder.build_swap_instructions(&params)?;

        let blockhash =
            self.rpc.get_latest_blockhash().await.map_err(SwapError::execution_failed)?;
        let transaction = build_transaction(
            signer,
            &payer,
            self.compute_unit_limit,
            self.compute_unit_price,
            instructions,
            blockhash,
        )
        .map_err(SwapError::execution_failed)?;

        info!(%payer, %pool, amount, "submitting swap");
        self.rpc.send_and_confirm_transaction(&transaction).await.map_err(SwapError::execution_failed)
    }
}
