pub mod compute_budget_manager;
pub mod transaction_builder;

pub use transaction_builder::build_transaction;
