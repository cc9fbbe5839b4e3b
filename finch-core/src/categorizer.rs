//! Keyword-based auto-categorization of transaction descriptions.
//!
//! An ordered rule table, first match wins. A rule matches when the
//! lowercased description contains any of its keywords, or when its
//! amount threshold (income only) is exceeded.

use crate::finance::Category;

struct Rule {
    keywords: &'static [&'static str],
    /// Amounts strictly above this also match, keyword or not
    amount_over: Option<f64>,
    category: Category,
}

/// Rule order matters: earlier rules shadow later ones
/// (e.g. "gas station food mart" is transportation only if the food
/// rule hasn't already claimed it).
const RULES: [Rule; 7] = [
    Rule {
        keywords: &["salary", "paycheck", "income"],
        amount_over: Some(1000.0),
        category: Category::Income,
    },
    Rule {
        keywords: &["grocery", "food", "restaurant"],
        amount_over: None,
        category: Category::Food,
    },
    Rule {
        keywords: &["rent", "mortgage"],
        amount_over: None,
        category: Category::Housing,
    },
    Rule {
        keywords: &["gas", "uber", "transport"],
        amount_over: None,
        category: Category::Transportation,
    },
    Rule {
        keywords: &["internet", "water", "utility"],
        amount_over: None,
        category: Category::Utilities,
    },
    Rule {
        keywords: &["movie", "netflix", "game"],
        amount_over: None,
        category: Category::Entertainment,
    },
    Rule {
        keywords: &["doctor", "medicine", "hospital"],
        amount_over: None,
        category: Category::Healthcare,
    },
];

/// Guess a category from a free-text description and amount.
/// Falls back to `Category::Other` when nothing matches.
pub fn categorize(description: &str, amount: f64) -> Category {
    let desc = description.to_lowercase();

    for rule in &RULES {
        let keyword_hit = rule.keywords.iter().any(|k| desc.contains(k));
        let amount_hit = rule.amount_over.is_some_and(|floor| amount > floor);
        if keyword_hit || amount_hit {
            return rule.category;
        }
    }

    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_grocery() {
        assert_eq!(categorize("Grocery Shopping", 120.0), Category::Food);
        assert_eq!(categorize("RESTAURANT dinner", 45.0), Category::Food);
    }

    #[test]
    fn test_categorize_salary_by_keyword() {
        assert_eq!(categorize("Monthly Salary", 2500.0), Category::Income);
        assert_eq!(categorize("paycheck deposit", 800.0), Category::Income);
    }

    #[test]
    fn test_large_amount_is_income_without_keyword() {
        // The >1000 threshold fires even with no keyword match
        assert_eq!(categorize("Consulting project", 1500.0), Category::Income);
        // At exactly 1000 the threshold does not fire
        assert_eq!(categorize("Consulting project", 1000.0), Category::Other);
    }

    #[test]
    fn test_rule_order_first_match_wins() {
        // "food" (rule 2) shadows "gas" (rule 4)
        assert_eq!(categorize("gas station food mart", 20.0), Category::Food);
        // income rule shadows everything
        assert_eq!(categorize("salary from restaurant job", 900.0), Category::Income);
    }

    #[test]
    fn test_remaining_rules() {
        assert_eq!(categorize("Rent Payment", 800.0), Category::Housing);
        assert_eq!(categorize("Uber to airport", 30.0), Category::Transportation);
        assert_eq!(categorize("Internet Bill", 60.0), Category::Utilities);
        assert_eq!(categorize("Netflix subscription", 15.0), Category::Entertainment);
        assert_eq!(categorize("Doctor visit copay", 40.0), Category::Healthcare);
    }

    #[test]
    fn test_fallback_is_other() {
        assert_eq!(categorize("Mystery purchase", 25.0), Category::Other);
        assert_eq!(categorize("", 25.0), Category::Other);
    }
}
