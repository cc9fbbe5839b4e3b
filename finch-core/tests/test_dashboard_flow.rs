//! End-to-end flow over one ledger snapshot: aggregation, classification,
//! assistant answers, health score, and insight generation all working
//! off the same data.

use chrono::NaiveDate;
use finch_core::{
    Category, FinancialGoal, HealthBand, Transaction, TransactionKind, balance, categorize,
    category_spending, expenses, goal_completed_achievement, health_score_for, income,
    large_expense_tip, monthly_spending, recent, respond,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn starter_ledger() -> Vec<Transaction> {
    vec![
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
    ]
}

#[test]
fn test_two_transaction_scenario() {
    let txns = starter_ledger();

    assert_eq!(balance(&txns), 2380.0);
    assert_eq!(income(&txns), 2500.0);
    assert_eq!(expenses(&txns), 120.0);

    let spend = category_spending(&txns);
    assert_eq!(spend.len(), 1);
    assert_eq!(spend[0].category, Category::Food);
    assert_eq!(spend[0].amount, 120.0);
}

#[test]
fn test_categorizer_feeds_the_ledger() {
    // The descriptions categorize to the labels the ledger was seeded with
    assert_eq!(categorize("Grocery Shopping", 120.0), Category::Food);
    assert_eq!(categorize("Monthly Salary", 2500.0), Category::Income);
    // Amount rule alone is enough for income
    assert_eq!(categorize("Quarterly bonus payout", 1200.0), Category::Income);
}

#[test]
fn test_assistant_over_snapshot() {
    let txns = starter_ledger();

    // balance 2380 >= 2 * 200: comfortable tier
    let reply = respond("Can I afford a $200 purchase?", &txns);
    assert!(reply.starts_with("Yes, you can comfortably afford a $200 purchase"));
    assert!(reply.contains("$2380.00"));

    assert_eq!(
        respond("How much money do I have?", &txns),
        "Your current balance is $2380.00."
    );
}

#[test]
fn test_dashboard_widgets_agree() {
    let mut txns = starter_ledger();
    txns.push(Transaction::new(
        "3",
        800.0,
        "Rent Payment",
        Category::Housing,
        date(2025, 4, 5),
        TransactionKind::Expense,
    ));

    // The category breakdown and the expense total tell the same story
    let total: f64 = category_spending(&txns).iter().map(|c| c.amount).sum();
    assert_eq!(total, expenses(&txns));

    // The trend window covers both expense months
    let series = monthly_spending(&txns, date(2025, 5, 15));
    let sum: f64 = series.iter().map(|p| p.amount).sum();
    assert_eq!(sum, expenses(&txns));

    // Recent slice is bounded and newest-first
    let top = recent(&txns, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, "2");
}

#[test]
fn test_insight_lifecycle() {
    let txns = starter_ledger();
    let today = date(2025, 5, 2);

    // The grocery run is over the $100 threshold
    let tip = large_expense_tip(&txns[1], "i1", today).unwrap();
    assert!(tip.message.contains("food"));

    // Goal completion announces once, then goes quiet
    let mut goal = FinancialGoal::new(
        "g1",
        "Emergency Fund",
        5000.0,
        4500.0,
        date(2025, 12, 31),
        "savings",
    );
    assert!(goal_completed_achievement(&goal, 600.0, "i2", today).is_some());
    goal.contribute(600.0);
    assert!(goal_completed_achievement(&goal, 50.0, "i3", today).is_none());
}

#[test]
fn test_health_score_over_snapshot() {
    let txns = starter_ledger();
    // savings rate 95.2% caps at 50, one goal adds 10, two txns add 4
    let report = health_score_for(&txns, 1);
    assert_eq!(report.score, 64);
    assert_eq!(report.band, HealthBand::Good);
}
