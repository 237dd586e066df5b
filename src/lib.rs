pub mod config;
pub mod handlers;
pub mod models;
pub mod utils;

pub use models::category::Category;
pub use models::price_table::PriceTable;
pub use models::quote::{QuoteRequest, QuoteResult};
