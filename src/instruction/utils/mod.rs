pub mod liquidity_pool;
