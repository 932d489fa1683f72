pub mod models;
mod result;
mod store;

pub use models::{Trader, TraderRef, Transaction};
pub use result::Result;
pub use store::TransactionStore;
