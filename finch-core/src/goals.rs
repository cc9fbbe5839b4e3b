//! Savings goals: progress, deadlines, and status classification

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A savings target with a deadline and a running contribution total
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialGoal {
    pub id: String,
    pub name: String,
    /// Always positive
    #[serde(rename = "targetAmount")]
    pub target_amount: f64,
    /// Non-negative; may exceed `target_amount` (no ceiling)
    #[serde(rename = "currentAmount")]
    pub current_amount: f64,
    pub deadline: NaiveDate,
    /// Free-form grouping label, not the transaction category enum
    pub category: String,
}

/// Status used for display color, derived on demand and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    Complete,
    Overdue,
    AtRisk,
    OnTrack,
}

impl FinancialGoal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
        deadline: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_amount,
            current_amount,
            deadline,
            category: category.into(),
        }
    }

    /// Raw progress ratio as a percentage. Unclamped: over-funded goals
    /// report more than 100.
    pub fn progress_percent(&self) -> f64 {
        self.current_amount / self.target_amount * 100.0
    }

    /// Progress clamped to 0..100 for progress-bar display
    pub fn display_progress(&self) -> f64 {
        self.progress_percent().clamp(0.0, 100.0)
    }

    /// Whole days until the deadline; negative when overdue
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }

    /// Would a contribution of `amount` reach the target?
    /// Uses the unclamped amounts, not the display progress.
    pub fn completes_with(&self, amount: f64) -> bool {
        self.current_amount + amount >= self.target_amount
    }

    /// Add a non-negative contribution to the running total
    pub fn contribute(&mut self, amount: f64) {
        self.current_amount += amount;
    }

    /// Classify for display: complete > overdue > at-risk > on-track
    pub fn status(&self, today: NaiveDate) -> GoalStatus {
        let progress = self.progress_percent();
        let days = self.days_remaining(today);
        if progress >= 100.0 {
            GoalStatus::Complete
        } else if days < 0 {
            GoalStatus::Overdue
        } else if days < 30 && progress < 50.0 {
            GoalStatus::AtRisk
        } else {
            GoalStatus::OnTrack
        }
    }
}
