//! Ledger aggregation: balance, totals, recent slice, category breakdown,
//! and the six-month spending series.
//!
//! Everything here is a pure function over a transaction slice. Callers own
//! validation; this layer assumes well-formed input (amounts > 0, parsed
//! dates) and never mutates.

use chrono::{Datelike, NaiveDate};

use crate::finance::{Category, Transaction};

/// Default length of the recent-transactions slice
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Number of months covered by the spending series, current month inclusive
pub const TREND_MONTHS: usize = 6;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Net balance: income total minus expense total
pub fn balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Sum of income amounts
pub fn income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

/// Sum of expense amounts
pub fn expenses(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum()
}

/// The `limit` most recent transactions, newest first.
/// Date ties keep their input order (stable sort).
pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted: Vec<Transaction> = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Total spent per category for a single transaction kind
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: Category,
    pub amount: f64,
}

/// Expense totals grouped by category, largest first.
/// Categories with no expenses are omitted, not zero-filled.
pub fn category_spending(transactions: &[Transaction]) -> Vec<CategorySpend> {
    let mut totals: Vec<CategorySpend> = Vec::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => entry.amount += txn.amount,
            None => totals.push(CategorySpend {
                category: txn.category,
                amount: txn.amount,
            }),
        }
    }
    totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    totals
}

/// One point in the monthly spending series
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySpend {
    /// Three-letter month name ("Jan".."Dec")
    pub month: &'static str,
    pub amount: f64,
}

/// Expense totals for the six calendar months ending at `today`'s month,
/// oldest first. Months with no expenses report 0.
///
/// Buckets are keyed by year *and* month, so a transaction from a prior
/// year never lands in a same-named month of the current window.
pub fn monthly_spending(transactions: &[Transaction], today: NaiveDate) -> Vec<MonthlySpend> {
    // Index of today's month on a flat month axis (year * 12 + month0)
    let end = today.year() * 12 + today.month0() as i32;

    let mut series: Vec<(i32, MonthlySpend)> = (0..TREND_MONTHS as i32)
        .map(|i| {
            let key = end - (TREND_MONTHS as i32 - 1) + i;
            let month = MONTH_NAMES[key.rem_euclid(12) as usize];
            (key, MonthlySpend { month, amount: 0.0 })
        })
        .collect();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let key = txn.date.year() * 12 + txn.date.month0() as i32;
        if let Some((_, point)) = series.iter_mut().find(|(k, _)| *k == key) {
            point.amount += txn.amount;
        }
    }

    series.into_iter().map(|(_, point)| point).collect()
}
