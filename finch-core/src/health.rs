//! Financial health score: savings rate + goal count + activity,
//! combined into a bounded 0-100 score with an advisory band.

use crate::ledger;
use crate::finance::Transaction;

/// Qualitative band for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

/// Advisory copy per band, shown alongside the score
const BAND_MESSAGES: [(HealthBand, &str); 4] = [
    (
        HealthBand::Excellent,
        "Excellent financial health! You're saving well and have clear goals.",
    ),
    (
        HealthBand::Good,
        "Good financial habits. Consider setting more financial goals for the future.",
    ),
    (
        HealthBand::Fair,
        "You're on the right track. Try to increase your savings rate and set more specific goals.",
    ),
    (
        HealthBand::NeedsAttention,
        "There's room for improvement. Focus on reducing expenses and building an emergency fund.",
    ),
];

/// A computed health score with its qualitative band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthReport {
    /// Always in 0..=100
    pub score: u32,
    pub band: HealthBand,
}

impl HealthReport {
    pub fn message(&self) -> &'static str {
        BAND_MESSAGES
            .iter()
            .find(|(band, _)| *band == self.band)
            .map(|(_, msg)| *msg)
            .unwrap_or_default()
    }
}

/// Fraction of income kept: `(income - expenses) / income`, or 0 when
/// there is no income. May be negative when spending exceeds income.
pub fn savings_rate(income: f64, expenses: f64) -> f64 {
    if income > 0.0 {
        (income - expenses) / income
    } else {
        0.0
    }
}

/// Score a snapshot of the user's finances.
///
/// Components: savings rate up to 50 points, goals 10 points each up to
/// 30, transactions 2 points each up to 20. A negative savings rate
/// contributes zero rather than dragging the score below its floor.
pub fn health_score(income: f64, expenses: f64, goal_count: usize, transaction_count: usize) -> HealthReport {
    let mut score = 0.0;
    score += (savings_rate(income, expenses) * 100.0).clamp(0.0, 50.0);
    score += (goal_count as f64 * 10.0).clamp(0.0, 30.0);
    score += (transaction_count as f64 * 2.0).clamp(0.0, 20.0);

    let score = score.round() as u32;
    let band = if score >= 80 {
        HealthBand::Excellent
    } else if score >= 60 {
        HealthBand::Good
    } else if score >= 40 {
        HealthBand::Fair
    } else {
        HealthBand::NeedsAttention
    };

    HealthReport { score, band }
}

/// Convenience wrapper: score directly from a ledger snapshot
pub fn health_score_for(transactions: &[Transaction], goal_count: usize) -> HealthReport {
    health_score(
        ledger::income(transactions),
        ledger::expenses(transactions),
        goal_count,
        transactions.len(),
    )
}
