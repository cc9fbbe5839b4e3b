//! Rule-based financial assistant: maps a free-text query to a canned
//! response over the current ledger snapshot.
//!
//! Ordered rules, first match wins. Conversational rules (acknowledgement,
//! farewell) run before the financial ones so "great, thanks" never reads
//! as a balance query.

use std::sync::LazyLock;

use regex::Regex;

use crate::finance::{Category, Transaction};
use crate::ledger;

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$(\d+)").unwrap());

const ACKNOWLEDGEMENTS: [&str; 8] = [
    "ok", "thanks", "thank you", "cool", "got it", "great", "fine", "alright",
];

const FAREWELLS: [&str; 4] = ["bye", "goodbye", "see you", "talk later"];

/// First `$<digits>` amount in the query, if any
fn extract_amount(query: &str) -> Option<i64> {
    AMOUNT_RE
        .captures(query)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Answer a free-text question about the ledger.
/// Total over any input; unrecognized queries get the fallback response.
pub fn respond(query: &str, transactions: &[Transaction]) -> String {
    let q = query.to_lowercase();

    if ACKNOWLEDGEMENTS.iter().any(|p| q.contains(p)) {
        return "Glad I could help! Let me know if you have more questions about your money."
            .to_string();
    }

    if FAREWELLS.iter().any(|p| q.contains(p)) {
        return "Alright, take care! I'm always here if you need help with your finances."
            .to_string();
    }

    let balance = ledger::balance(transactions);

    if q.contains("balance") || q.contains("money") || q.contains("have") {
        return format!("Your current balance is ${balance:.2}.");
    }

    if q.contains("spend") && q.contains("food") {
        let food: f64 = transactions
            .iter()
            .filter(|t| t.is_expense() && t.category == Category::Food)
            .map(|t| t.amount)
            .sum();
        return format!("You've spent ${food:.2} on food.");
    }

    if q.contains("income") || q.contains("earn") {
        return format!("Your total income is ${:.2}.", ledger::income(transactions));
    }

    if q.contains("expenses") || q.contains("spent") {
        return format!("Your total expenses are ${:.2}.", ledger::expenses(transactions));
    }

    if q.contains("save") || q.contains("saving") {
        let income = ledger::income(transactions);
        let expenses = ledger::expenses(transactions);
        let rate = crate::health::savings_rate(income, expenses) * 100.0;
        let encouragement = if rate >= 20.0 {
            "That's great! Financial experts recommend saving at least 20% of your income."
        } else {
            "Financial experts recommend saving at least 20% of your income. \
             Consider looking for areas to reduce expenses."
        };
        return format!("You're currently saving {rate:.1}% of your income. {encouragement}");
    }

    if q.contains("afford") {
        // No parseable $amount: fall through to the fallback
        if let Some(amount) = extract_amount(&q) {
            let amount_f = amount as f64;
            return if balance >= amount_f * 2.0 {
                format!(
                    "Yes, you can comfortably afford a ${amount} purchase, as it's less than \
                     half of your current balance of ${balance:.2}."
                )
            } else if balance >= amount_f {
                format!(
                    "You have enough money for a ${amount} purchase, but it would use a \
                     significant portion of your balance of ${balance:.2}. Consider if this \
                     purchase is necessary."
                )
            } else {
                format!(
                    "A ${amount} purchase would exceed your current balance of ${balance:.2}. \
                     I would recommend against it unless absolutely necessary."
                )
            };
        }
    }

    "I'm still learning to answer complex financial questions. Could you try asking in a \
     different way or ask about your balance, spending in specific categories, or if you \
     can afford a specific purchase?"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::TransactionKind;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            Transaction::new(
                "1",
                2500.0,
                "Monthly Salary",
                Category::Income,
                date(1),
                TransactionKind::Income,
            ),
            Transaction::new(
                "2",
                120.0,
                "Grocery Shopping",
                Category::Food,
                date(2),
                TransactionKind::Expense,
            ),
        ]
    }

    #[test]
    fn test_balance_query() {
        let reply = respond("What's my balance?", &ledger());
        assert_eq!(reply, "Your current balance is $2380.00.");
    }

    #[test]
    fn test_food_spending_requires_both_words() {
        let txns = ledger();
        let reply = respond("How much did I spend on food?", &txns);
        assert_eq!(reply, "You've spent $120.00 on food.");

        // "food" alone is not a spending query
        let other = respond("food", &txns);
        assert!(other.contains("still learning"));
    }

    #[test]
    fn test_income_and_expense_queries() {
        let txns = ledger();
        assert_eq!(respond("How much do I earn?", &txns), "Your total income is $2500.00.");
        assert_eq!(
            respond("Show my total expenses", &txns),
            "Your total expenses are $120.00."
        );
    }

    #[test]
    fn test_savings_rate_tiers() {
        let txns = ledger();
        // 2380/2500 = 95.2%: above the 20% threshold
        let reply = respond("How is my saving going?", &txns);
        assert!(reply.starts_with("You're currently saving 95.2% of your income."));
        assert!(reply.contains("That's great!"));

        let tight = vec![
            Transaction::new(
                "1",
                1000.0,
                "Paycheck",
                Category::Income,
                date(1),
                TransactionKind::Income,
            ),
            Transaction::new(
                "2",
                950.0,
                "Rent Payment",
                Category::Housing,
                date(5),
                TransactionKind::Expense,
            ),
        ];
        let reply = respond("Am I saving enough?", &tight);
        assert!(reply.starts_with("You're currently saving 5.0% of your income."));
        assert!(reply.contains("Consider looking for areas to reduce expenses."));
    }

    #[test]
    fn test_affordability_tiers() {
        let txns = ledger(); // balance 2380

        let comfy = respond("Can I afford a $200 purchase?", &txns);
        assert!(comfy.starts_with("Yes, you can comfortably afford a $200 purchase"));

        let tight = respond("Can I afford a $2000 couch?", &txns);
        assert!(tight.starts_with("You have enough money for a $2000 purchase"));

        let no = respond("Can I afford a $5000 car?", &txns);
        assert!(no.starts_with("A $5000 purchase would exceed your current balance"));
    }

    #[test]
    fn test_afford_without_amount_falls_through() {
        let reply = respond("Can I afford it?", &ledger());
        assert!(reply.contains("still learning"));
    }

    #[test]
    fn test_conversational_rules_run_first() {
        let txns = ledger();
        // "thanks" would otherwise never match; "great" shadows nothing here
        let reply = respond("ok thanks!", &txns);
        assert_eq!(
            reply,
            "Glad I could help! Let me know if you have more questions about your money."
        );

        let bye = respond("goodbye", &txns);
        assert!(bye.starts_with("Alright, take care!"));

        // Acknowledgement outranks a balance keyword in the same message
        let mixed = respond("great, what's my balance", &txns);
        assert!(mixed.starts_with("Glad I could help!"));
    }

    #[test]
    fn test_fallback() {
        let reply = respond("what is the weather", &ledger());
        assert!(reply.contains("still learning"));
    }

    #[test]
    fn test_substring_matching_is_naive() {
        // "joke" contains "ok"; containment rules make no word boundaries
        let reply = respond("tell me a joke", &ledger());
        assert!(reply.starts_with("Glad I could help!"));
    }

    #[test]
    fn test_extract_amount_first_match() {
        assert_eq!(extract_amount("a $200 purchase or maybe $500"), Some(200));
        assert_eq!(extract_amount("no dollars here"), None);
        assert_eq!(extract_amount("$ 40 has a space"), None);
    }
}
