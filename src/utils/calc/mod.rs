pub mod common;
pub mod constant_product;
