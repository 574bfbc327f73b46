use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

/// 通知回调执行模式
///
/// 控制 swap 结果通知的投递方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallbackExecutionMode {
    /// 异步模式：`tokio::spawn` 投递，不阻塞调用方（默认）
    #[default]
    Async,
    /// 同步模式：等待通知完成后再返回
    Sync,
}

#[derive(Debug, Clone)]
pub struct SwapConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    /// The liquidity pool program; the pool PDA is derived under it
    pub program_id: Pubkey,
    /// Optional compute unit limit instruction
    pub compute_unit_limit: Option<u32>,
    /// Optional priority fee in micro-lamports per compute unit
    pub compute_unit_price: Option<u64>,
    pub callback_execution_mode: CallbackExecutionMode,
}

impl SwapConfig {
    pub fn new(rpc_url: String, program_id: Pubkey, commitment: CommitmentConfig) -> Self {
        Self {
            rpc_url,
            commitment,
            program_id,
            compute_unit_limit: None,
            compute_unit_price: None,
            callback_execution_mode: CallbackExecutionMode::Async,
        }
    }

    pub fn with_compute_budget(mut self, unit_limit: u32, unit_price: u64) -> Self {
        self.compute_unit_limit = Some(unit_limit);
        self.compute_unit_price = Some(unit_price);
        self
    }

    pub fn with_callback_execution_mode(mut self, mode: CallbackExecutionMode) -> Self {
        self.callback_execution_mode = mode;
        self
    }
}

pub type SolanaRpcClient = solana_client::nonblocking::rpc_client::RpcClient;
