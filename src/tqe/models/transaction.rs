use super::TraderRef;

use std::fmt;

/// An immutable record linking a trader to a year and a value.
///
/// The trader handle may be shared with other transactions; the record
/// itself never changes once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    trader: TraderRef,
    year: i32,
    value: i64,
}

impl Transaction {
    pub fn new(trader: TraderRef, year: i32, value: i64) -> Self {
        Self {
            trader,
            year,
            value,
        }
    }

    pub fn trader(&self) -> &TraderRef {
        &self.trader
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} traded {} in {}", self.trader, self.value, self.year)
    }
}
