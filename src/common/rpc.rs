//! RPC 边界
//!
//! The swap flow only needs three calls from the cluster. Keeping them behind a
//! trait lets tests and offline tooling drive the executor with [`MockSwapRpc`].
//!
//! [`MockSwapRpc`]: crate::common::mock_rpc::MockSwapRpc

use crate::common::SolanaRpcClient;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use solana_hash::Hash;
use solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::VersionedTransaction};

#[async_trait]
pub trait SwapRpcClient: Send + Sync {
    async fn get_latest_blockhash(&self) -> Result<Hash>;

    /// Sends the signed transaction and waits for confirmation.
    async fn send_and_confirm_transaction(&self, transaction: &VersionedTransaction)
    -> Result<Signature>;

    /// Token account balance in smallest units.
    async fn get_token_account_balance(&self, token_account: &Pubkey) -> Result<u64>;
}

#[async_trait]
impl SwapRpcClient for SolanaRpcClient {
    async fn get_latest_blockhash(&self) -> Result<Hash> {
        Ok(SolanaRpcClient::get_latest_blockhash(self).await?)
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature> {
        Ok(SolanaRpcClient::send_and_confirm_transaction(self, transaction).await?)
    }

    async fn get_token_account_balance(&self, token_account: &Pubkey) -> Result<u64> {
        let balance = SolanaRpcClient::get_token_account_balance(self, token_account).await?;
        balance
            .amount
            .parse::<u64>()
            .map_err(|e| anyhow!("Failed to parse balance of {}: {}", token_account, e))
    }
}
