pub mod common;
pub mod core;
pub mod executor;
pub mod lifecycle;
pub mod session;

pub use self::core::params::SwapParams;
pub use self::core::traits::InstructionBuilder;
pub use executor::SwapExecutor;
pub use lifecycle::{
    NoopNotificationSink, NotificationKind, NotificationSinkRef, SwapNotification,
    SwapNotificationSink, TracingNotificationSink,
};
pub use session::SwapSession;
