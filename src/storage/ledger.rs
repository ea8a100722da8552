//! In-memory transaction ledger
//!
//! An append-only, insertion-ordered list of transactions that lives for one
//! session. The only structural change besides appending is the duplicate
//! collapse that follows a bulk import.

use std::collections::HashSet;

use tracing::debug;

use crate::models::Transaction;

/// Ordered, append-only collection of transactions
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single transaction to the end of the ledger
    pub fn append(&mut self, txn: Transaction) {
        self.transactions.push(txn);
        debug!(len = self.transactions.len(), "transaction appended");
    }

    /// Append a batch of transactions, then collapse exact duplicates
    ///
    /// Duplicates are removed across the whole ledger, not only within the
    /// batch, keeping the first occurrence. Returns how many rows were removed.
    pub fn append_all<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = Transaction>,
    {
        let before = self.transactions.len();
        self.transactions.extend(records);
        let appended = self.transactions.len() - before;

        let removed = self.remove_duplicates();
        debug!(appended, removed, len = self.transactions.len(), "batch appended");
        removed
    }

    /// Read-only view of every transaction in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Get the transaction at a position
    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    /// Iterate over transactions in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn remove_duplicates(&mut self) -> usize {
        let before = self.transactions.len();
        let mut seen = HashSet::with_capacity(before);
        self.transactions.retain(|txn| seen.insert(txn.clone()));
        before - self.transactions.len()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
