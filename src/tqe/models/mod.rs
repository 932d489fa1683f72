mod trader;
mod transaction;

pub use trader::{Trader, TraderRef};
pub use transaction::Transaction;
