//! In-memory transaction ledger
//!
//! Holds the household's transactions in insertion order together with the
//! current search query. Reports are never cached: every call to
//! [`Ledger::monthly_totals`] recomputes from the full list.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{NewTransaction, Transaction, TransactionId};
use crate::settlement::{calculate_all_monthly_totals, CombinedMonthlyTotals};

/// Ordered transaction collection with a description search
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    search_query: String,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger holding the given transactions
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            search_query: String::new(),
        }
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Add a transaction, assigning it a fresh ID
    pub fn add(&mut self, new_transaction: NewTransaction) -> TransactionId {
        let txn = new_transaction.into_transaction();
        let id = txn.id;
        tracing::debug!(%id, owner = %txn.owner, "adding transaction");
        self.transactions.push(txn);
        id
    }

    /// Look up a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Remove a transaction, returning it if it was present
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        Some(self.transactions.remove(index))
    }

    /// Remove a transaction by its display or UUID form
    pub fn remove_by_identifier(&mut self, identifier: &str) -> LedgerResult<Transaction> {
        let id: TransactionId = identifier
            .parse()
            .map_err(|_| LedgerError::transaction_not_found(identifier))?;
        self.remove(id)
            .ok_or_else(|| LedgerError::transaction_not_found(identifier))
    }

    /// Append imported transactions after the existing ones
    pub fn import(&mut self, transactions: Vec<Transaction>) {
        tracing::debug!(count = transactions.len(), "importing transactions");
        self.transactions.extend(transactions);
    }

    /// Replace every transaction
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    /// Remove every transaction
    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Transactions matching the search query, newest date first
    ///
    /// The query is trimmed and matched case-insensitively against the
    /// description. A blank query matches everything.
    pub fn filtered(&self) -> Vec<&Transaction> {
        let needle = self.search_query.trim().to_lowercase();

        let mut matches: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|txn| needle.is_empty() || txn.description.to_lowercase().contains(&needle))
            .collect();

        // Stable sort keeps insertion order within a day
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches
    }

    /// Monthly settlement report, newest month first
    pub fn monthly_totals(&self) -> Vec<CombinedMonthlyTotals> {
        calculate_all_monthly_totals(&self.transactions)
    }
}
