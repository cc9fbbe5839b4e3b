//! Insight generation: pure constructors for the advisory records that
//! accompany transaction and goal events. Callers append the returned
//! record to their insight list; nothing is stored here.

use chrono::NaiveDate;

use crate::finance::{AIInsight, InsightKind, Transaction};
use crate::goals::FinancialGoal;

/// Expenses above this trigger a spending tip
pub const LARGE_EXPENSE_THRESHOLD: f64 = 100.0;

/// Tip for an unusually large expense. `None` for income or for expenses
/// at or under the threshold.
pub fn large_expense_tip(
    txn: &Transaction,
    id: impl Into<String>,
    date: NaiveDate,
) -> Option<AIInsight> {
    if !txn.is_expense() || txn.amount <= LARGE_EXPENSE_THRESHOLD {
        return None;
    }
    let message = format!(
        "Your recent {} expense of ${} is higher than your usual spending in this category. \
         Would you like tips to save on {}?",
        txn.category, txn.amount, txn.category
    );
    Some(AIInsight::new(id, InsightKind::Tip, message, date))
}

/// Achievement for a contribution that reaches the goal's target.
/// Fires only on the crossing: a goal that was already complete before
/// the contribution yields `None`, so repeat contributions don't stack
/// duplicate achievements.
pub fn goal_completed_achievement(
    goal: &FinancialGoal,
    contribution: f64,
    id: impl Into<String>,
    date: NaiveDate,
) -> Option<AIInsight> {
    let already_complete = goal.current_amount >= goal.target_amount;
    if already_complete || !goal.completes_with(contribution) {
        return None;
    }
    let message = format!("Congratulations! You've reached your goal: \"{}\"!", goal.name);
    Some(AIInsight::new(id, InsightKind::Achievement, message, date))
}
