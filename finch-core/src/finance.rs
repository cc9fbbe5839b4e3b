//! Finance record types: transactions, categories, and generated insights

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single ledger entry. Immutable once created; removal is by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Unique identifier (timestamp-derived at the creation boundary)
    pub id: String,
    /// Always positive; direction is carried by `kind`
    pub amount: f64,
    /// Human-readable description
    pub description: String,
    /// Closed-set category label
    pub category: Category,
    /// Calendar date of the transaction
    pub date: NaiveDate,
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

/// Transaction categories (closed set)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "housing")]
    Housing,
    #[serde(rename = "transportation")]
    Transportation,
    #[serde(rename = "utilities")]
    Utilities,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "healthcare")]
    Healthcare,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "personal")]
    Personal,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "travel")]
    Travel,
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "savings")]
    Savings,
    #[serde(rename = "investments")]
    Investments,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    /// All category labels, in display order
    pub const ALL: [Category; 14] = [
        Category::Food,
        Category::Housing,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Shopping,
        Category::Personal,
        Category::Education,
        Category::Travel,
        Category::Income,
        Category::Savings,
        Category::Investments,
        Category::Other,
    ];

    /// Lowercase label as it appears on the wire and in the UI
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Housing => "housing",
            Category::Transportation => "transportation",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Healthcare => "healthcare",
            Category::Shopping => "shopping",
            Category::Personal => "personal",
            Category::Education => "education",
            Category::Travel => "travel",
            Category::Income => "income",
            Category::Savings => "savings",
            Category::Investments => "investments",
            Category::Other => "other",
        }
    }

    /// Parse a lowercase label back into a category
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            description: description.into(),
            category,
            date,
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Signed amount: positive for income, negative for expense
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Kind of generated insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InsightKind {
    #[serde(rename = "tip")]
    Tip,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "achievement")]
    Achievement,
}

/// An advisory message generated from a transaction or goal event.
/// Only the `read` flag mutates after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AIInsight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
    pub date: NaiveDate,
    pub read: bool,
}

impl AIInsight {
    pub fn new(
        id: impl Into<String>,
        kind: InsightKind,
        message: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            message: message.into(),
            date,
            read: false,
        }
    }
}
