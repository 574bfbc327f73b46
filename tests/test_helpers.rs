//! 测试工具函数
//!
//! 提供测试用的资产目录、Mock RPC 客户端和记录型通知接收方

#![allow(dead_code)]

use anyhow::Result;
use futures::future::BoxFuture;
use liquidity_pool_swap::{
    SwapClient,
    common::{
        Asset, AssetCatalog, CallbackExecutionMode, SwapConfig, mock_rpc::MockSwapRpc,
    },
    trading::{SwapNotification, SwapNotificationSink},
};
use parking_lot::Mutex;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;

/// 记录所有通知，供断言使用
#[derive(Default)]
pub struct RecordingSink {
    notifications: Mutex<Vec<SwapNotification>>,
}

impl RecordingSink {
    pub fn notifications(&self) -> Vec<SwapNotification> {
        self.notifications.lock().clone()
    }
}

impl SwapNotificationSink for RecordingSink {
    fn notify(&self, notification: SwapNotification) -> BoxFuture<'static, Result<()>> {
        self.notifications.lock().push(notification);
        Box::pin(async { Ok(()) })
    }
}

/// USDC (6) / SOL (9) / PTS (2)
pub fn test_assets() -> Vec<Asset> {
    vec![
        Asset::new("USD Coin", "USDC", 6, Pubkey::new_unique(), Pubkey::new_unique()),
        Asset::new("Wrapped SOL", "SOL", 9, Pubkey::new_unique(), Pubkey::new_unique()),
        Asset::new("Points", "PTS", 2, Pubkey::new_unique(), Pubkey::new_unique()),
    ]
}

pub fn test_catalog() -> AssetCatalog {
    AssetCatalog::new(test_assets()).expect("catalog")
}

pub struct TestEnv {
    pub rpc: Arc<MockSwapRpc>,
    pub sink: Arc<RecordingSink>,
    pub client: SwapClient,
    pub program_id: Pubkey,
}

pub fn test_env_with(rpc: MockSwapRpc) -> TestEnv {
    let rpc = Arc::new(rpc);
    let sink = Arc::new(RecordingSink::default());
    let program_id = Pubkey::new_unique();
    let config = SwapConfig::new(
        "http://127.0.0.1:8899".to_string(),
        program_id,
        CommitmentConfig::confirmed(),
    )
    .with_compute_budget(200_000, 1_000)
    .with_callback_execution_mode(CallbackExecutionMode::Sync);
    let client = SwapClient::with_rpc(rpc.clone(), config, sink.clone());
    TestEnv { rpc, sink, client, program_id }
}

pub fn test_env() -> TestEnv {
    test_env_with(MockSwapRpc::new())
}

/// 为每个资产的池储备账户预置余额
pub fn seed_reserves(rpc: &MockSwapRpc, catalog: &AssetCatalog, amounts: &[u64]) {
    for (asset, amount) in catalog.assets().iter().zip(amounts) {
        rpc.set_token_balance(asset.pool_token_account, *amount);
    }
}
