//! Demo dataset for trying out finch without entering data by hand

use chrono::NaiveDate;
use finch_core::{
    AIInsight, Category, FinancialGoal, InsightKind, Transaction, TransactionKind,
};

use crate::state::UserState;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// A month of sample activity: a salary, everyday expenses, two goals in
/// progress, and a few unread insights.
pub fn demo_state() -> UserState {
    let transactions = vec![
        Transaction::new(
            "1",
            2500.0,
            "Monthly Salary",
            Category::Income,
            date(2025, 5, 1),
            TransactionKind::Income,
        ),
        Transaction::new(
            "2",
            120.0,
            "Grocery Shopping",
            Category::Food,
            date(2025, 5, 2),
            TransactionKind::Expense,
        ),
        Transaction::new(
            "3",
            45.0,
            "Gas Station",
            Category::Transportation,
            date(2025, 5, 3),
            TransactionKind::Expense,
        ),
        Transaction::new(
            "4",
            800.0,
            "Rent Payment",
            Category::Housing,
            date(2025, 5, 5),
            TransactionKind::Expense,
        ),
        Transaction::new(
            "5",
            60.0,
            "Internet Bill",
            Category::Utilities,
            date(2025, 5, 4),
            TransactionKind::Expense,
        ),
        Transaction::new(
            "6",
            200.0,
            "Freelance Work",
            Category::Income,
            date(2025, 5, 6),
            TransactionKind::Income,
        ),
        Transaction::new(
            "7",
            35.0,
            "Movie Tickets",
            Category::Entertainment,
            date(2025, 5, 6),
            TransactionKind::Expense,
        ),
    ];

    let goals = vec![
        FinancialGoal::new(
            "1",
            "Emergency Fund",
            5000.0,
            2000.0,
            date(2025, 12, 31),
            "savings",
        ),
        FinancialGoal::new(
            "2",
            "New Laptop",
            1500.0,
            500.0,
            date(2025, 8, 30),
            "shopping",
        ),
    ];

    let insights = vec![
        AIInsight::new(
            "1",
            InsightKind::Tip,
            "You spent 30% more on food this week compared to your monthly average. \
             Consider meal prepping to save money.",
            date(2025, 5, 5),
        ),
        AIInsight {
            id: "2".to_string(),
            kind: InsightKind::Achievement,
            message: "Great job! You stayed under budget for entertainment this month."
                .to_string(),
            date: date(2025, 5, 4),
            read: true,
        },
        AIInsight::new(
            "3",
            InsightKind::Warning,
            "Your utility bills have increased by 15% over the past three months. \
             Check for any unusual usage.",
            date(2025, 5, 3),
        ),
    ];

    UserState {
        transactions,
        goals,
        insights,
    }
}
