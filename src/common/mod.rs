pub mod asset;
pub mod error;
pub mod fast_fn;
pub mod mock_rpc;
pub mod rpc;
pub mod signer;
pub mod types;

pub use asset::{Asset, AssetCatalog};
pub use error::{SwapError, SwapResult};
pub use rpc::SwapRpcClient;
pub use signer::{DisconnectedSigner, SwapSigner};
pub use types::*;
