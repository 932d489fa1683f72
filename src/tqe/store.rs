use crate::models::{TraderRef, Transaction};

use std::collections::HashMap;

/// Append-only collection of transactions with query and aggregation
/// operations along the year, city, and value axes.
///
/// Insertion order is preserved and duplicates are permitted; nothing is
/// ever removed. Every sorting query uses a stable sort, so ties keep
/// their insertion order.
#[derive(Debug, Default)]
pub struct TransactionStore {
    history: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction to the end of the history. Nothing is
    /// validated and nothing is returned.
    pub fn add(&mut self, tx: Transaction) {
        log::debug!(
            "Appending transaction at index {}: {tx:?}",
            self.history.len()
        );
        self.history.push(tx);
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view over the full history, in insertion order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.history.iter()
    }

    /// All transactions of the given year, sorted ascending by value.
    /// Value ties keep their insertion order.
    pub fn transactions_in_year(&self, year: i32) -> Vec<&Transaction> {
        let mut matches: Vec<&Transaction> = self
            .history
            .iter()
            .filter(|tx| tx.year() == year)
            .collect();

        matches.sort_by_key(|tx| tx.value());

        matches
    }

    /// Distinct city names referenced by any transaction's trader, in
    /// order of first appearance. Comparison is exact, no case-folding.
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();

        for tx in &self.history {
            let city = tx.trader().city();
            if !cities.contains(&city) {
                cities.push(city);
            }
        }

        cities
    }

    /// Distinct traders currently based in the given city, sorted
    /// ascending by name (name ties keep original transaction order).
    ///
    /// Deduplication runs after sorting and compares name and city by
    /// value, so two independently built traders with identical fields
    /// collapse into the first one in sorted order.
    pub fn traders_in(&self, city: &str) -> Vec<TraderRef> {
        let mut traders: Vec<TraderRef> = self
            .history
            .iter()
            .filter(|tx| tx.trader().is_in(city))
            .map(|tx| tx.trader().clone())
            .collect();

        traders.sort_by_key(|trader| trader.name());

        // All survivors share the queried city, so equal traders are
        // adjacent once sorted by name.
        traders.dedup();

        traders
    }

    /// Groups the history by year. Relative order within each group is
    /// insertion order; iteration order over the keys is unspecified.
    pub fn transactions_by_year(&self) -> HashMap<i32, Vec<&Transaction>> {
        let mut by_year: HashMap<i32, Vec<&Transaction>> = HashMap::new();

        for tx in &self.history {
            by_year.entry(tx.year()).or_default().push(tx);
        }

        by_year
    }

    /// True when at least one stored transaction's trader is currently
    /// based in the given city. Stops scanning at the first match.
    pub fn trader_in_city(&self, city: &str) -> bool {
        self.history.iter().any(|tx| tx.trader().is_in(city))
    }

    /// Moves every trader currently based in `from` to `to`.
    ///
    /// A trader shared across transactions moves once and the change is
    /// observed through every transaction holding the shared handle.
    /// Running this a second time with the same arguments changes
    /// nothing: no trader is left in `from`.
    pub fn relocate_traders(&mut self, from: &str, to: &str) {
        let mut relocated = 0usize;

        for tx in &self.history {
            if tx.trader().is_in(from) {
                tx.trader().set_city(to);
                relocated += 1;
            }
        }

        log::debug!("Relocated {relocated} trader reference(s) from {from:?} to {to:?}");
    }

    /// Highest transaction value, or 0 for an empty store.
    pub fn highest_value(&self) -> i64 {
        self.history
            .iter()
            .map(Transaction::value)
            .max()
            .unwrap_or(0)
    }

    /// Sum of all transaction values; 0 for an empty store.
    pub fn total_value(&self) -> i64 {
        self.history.iter().map(Transaction::value).sum()
    }

    /// The transaction with the lowest value. Equal minimums resolve to
    /// the earliest inserted one; `None` only when the store is empty.
    pub fn lowest_value_transaction(&self) -> Option<&Transaction> {
        self.history.iter().min_by_key(|tx| tx.value())
    }

    /// Distinct trader names (distinct by name alone, not name + city),
    /// sorted ascending and concatenated without any separator.
    ///
    /// The missing separator is kept for compatibility with the behavior
    /// this store replaces. It is almost certainly an inherited defect
    /// rather than an intentional format, so treat the result as opaque
    /// instead of parsing it.
    pub fn trader_names(&self) -> String {
        let mut names: Vec<String> = self
            .history
            .iter()
            .map(|tx| tx.trader().name())
            .collect();

        names.sort();
        names.dedup();

        names.concat()
    }
}
