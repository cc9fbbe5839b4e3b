//! finch-core: pure computation over a personal-finance ledger.
//!
//! Record types plus side-effect-free aggregation, goal tracking, health
//! scoring, auto-categorization, and the rule-based assistant. No I/O and
//! no clocks: date-sensitive functions take `today` as a parameter, so the
//! same snapshot always produces the same output.

pub mod assistant;
pub mod categorizer;
pub mod finance;
pub mod goals;
pub mod health;
pub mod insights;
pub mod ledger;

pub use assistant::respond;
pub use categorizer::categorize;
pub use finance::{AIInsight, Category, InsightKind, Transaction, TransactionKind};
pub use goals::{FinancialGoal, GoalStatus};
pub use health::{HealthBand, HealthReport, health_score, health_score_for, savings_rate};
pub use insights::{goal_completed_achievement, large_expense_tip, LARGE_EXPENSE_THRESHOLD};
pub use ledger::{
    CategorySpend, MonthlySpend, DEFAULT_RECENT_LIMIT, TREND_MONTHS, balance, category_spending,
    expenses, income, monthly_spending, recent,
};
