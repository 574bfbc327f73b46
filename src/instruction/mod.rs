pub mod liquidity_pool;
pub mod utils;
