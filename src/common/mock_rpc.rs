//! 内存 Mock RPC
//!
//! 不需要网络连接即可驱动完整的 swap 流程：
//! - token 账户余额由调用方预置
//! - 发送的交易被记录下来供断言
//! - 可注入发送失败
//! - gated 模式下发送会阻塞，直到调用 `release_send`（用于并发测试）

use crate::common::rpc::SwapRpcClient;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use solana_hash::Hash;
use solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::VersionedTransaction};
use std::sync::Arc;
use tokio::sync::{Notify, Semaphore};

pub struct MockSwapRpc {
    blockhash: Hash,
    balances: DashMap<Pubkey, u64>,
    sent: Mutex<Vec<VersionedTransaction>>,
    send_failure: Mutex<Option<String>>,
    gate: Option<Arc<Semaphore>>,
    send_entered: Notify,
}

impl Default for MockSwapRpc {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSwapRpc {
    pub fn new() -> Self {
        Self {
            blockhash: Hash::new_from_array([7u8; 32]),
            balances: DashMap::new(),
            sent: Mutex::new(Vec::new()),
            send_failure: Mutex::new(None),
            gate: None,
            send_entered: Notify::new(),
        }
    }

    /// Sends block until [`MockSwapRpc::release_send`] is called.
    pub fn gated() -> Self {
        Self { gate: Some(Arc::new(Semaphore::new(0))), ..Self::new() }
    }

    pub fn blockhash(&self) -> Hash {
        self.blockhash
    }

    pub fn set_token_balance(&self, token_account: Pubkey, amount: u64) {
        self.balances.insert(token_account, amount);
    }

    /// Every following send fails with `message`; `None` restores success.
    pub fn set_send_failure(&self, message: Option<&str>) {
        *self.send_failure.lock() = message.map(str::to_string);
    }

    pub fn sent_transactions(&self) -> Vec<VersionedTransaction> {
        self.sent.lock().clone()
    }

    pub fn release_send(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Resolves once a send has started.
    pub async fn wait_for_send(&self) {
        self.send_entered.notified().await;
    }
}

#[async_trait]
impl SwapRpcClient for MockSwapRpc {
    async fn get_latest_blockhash(&self) -> Result<Hash> {
        Ok(self.blockhash)
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature> {
        self.send_entered.notify_one();
        if let Some(gate) = &self.gate {
            gate.acquire().await.map_err(|e| anyhow!("mock gate closed: {}", e))?.forget();
        }
        if let Some(message) = self.send_failure.lock().clone() {
            return Err(anyhow!(message));
        }
        let signature = transaction
            .signatures
            .first()
            .copied()
            .ok_or_else(|| anyhow!("transaction is not signed"))?;
        self.sent.lock().push(transaction.clone());
        Ok(signature)
    }

    async fn get_token_account_balance(&self, token_account: &Pubkey) -> Result<u64> {
        self.balances
            .get(token_account)
            .map(|b| *b)
            .ok_or_else(|| anyhow!("could not find account {}", token_account))
    }
}
