//! Swap 结果通知
//!
//! 每次 swap 尝试（成功或失败）都会向通知接收方投递一条消息。投递是
//! fire-and-forget：接收方出错只记录日志，不影响 swap 结果。

use crate::common::CallbackExecutionMode;
use anyhow::Result;
use futures::future::BoxFuture;
use solana_sdk::signature::Signature;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapNotification {
    pub kind: NotificationKind,
    pub message: String,
    /// Present for confirmed swaps
    pub signature: Option<Signature>,
}

impl SwapNotification {
    pub fn success(signature: Signature) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: "Swap successful!".to_string(),
            signature: Some(signature),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into(), signature: None }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "type": match self.kind {
                NotificationKind::Success => "success",
                NotificationKind::Error => "error",
            },
            "message": self.message,
            "txid": self.signature.map(|s| s.to_string()),
        })
    }
}

/// Receives swap outcomes.
pub trait SwapNotificationSink: Send + Sync {
    fn notify(&self, notification: SwapNotification) -> BoxFuture<'static, Result<()>>;
}

/// 空通知实现
#[derive(Clone, Default)]
pub struct NoopNotificationSink;

impl SwapNotificationSink for NoopNotificationSink {
    fn notify(&self, _notification: SwapNotification) -> BoxFuture<'static, Result<()>> {
        Box::pin(async { Ok(()) })
    }
}

/// Writes every notification to the `tracing` log.
#[derive(Clone, Default)]
pub struct TracingNotificationSink;

impl SwapNotificationSink for TracingNotificationSink {
    fn notify(&self, notification: SwapNotification) -> BoxFuture<'static, Result<()>> {
        Box::pin(async move {
            match notification.kind {
                NotificationKind::Success => {
                    info!(txid = ?notification.signature, "{}", notification.message)
                }
                NotificationKind::Error => warn!("{}", notification.message),
            }
            Ok(())
        })
    }
}

pub type NotificationSinkRef = Arc<dyn SwapNotificationSink>;

/// Hands a notification to the sink according to `mode`.
pub(crate) async fn dispatch(
    sink: &NotificationSinkRef,
    notification: SwapNotification,
    mode: CallbackExecutionMode,
) {
    let fut = sink.notify(notification);
    match mode {
        CallbackExecutionMode::Async => {
            tokio::spawn(async move {
                if let Err(e) = fut.await {
                    warn!("swap notification failed: {}", e);
                }
            });
        }
        CallbackExecutionMode::Sync => {
            if let Err(e) = fut.await {
                warn!("swap notification failed: {}", e);
            }
        }
    }
}
