use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Wire format for record dates (`2025-03-14`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single tracked spending entry as served by the expense API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Server-assigned identifier, unique and immutable once created.
    pub id: i64,
    pub title: String,
    /// Fixed-point currency amount. The transport may carry it as a JSON
    /// string or a bare number, so it is kept textual and coerced on demand.
    #[serde(deserialize_with = "amount_as_text")]
    pub amount: String,
    /// Calendar date in ISO `YYYY-MM-DD` form.
    pub date: String,
    /// Optional free text; empty when the server omits or nulls it.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub description: String,
}

impl Expense {
    /// Numeric value of the amount field.
    pub fn amount_value(&self) -> f64 {
        self.amount.trim().parse().unwrap_or(0.0)
    }
}

fn amount_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => n.to_string(),
        RawAmount::Text(t) => t,
    })
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for the create and update operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePayload {
    pub title: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

/// Raw expense form field values, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

/// Why a draft was rejected before reaching the network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("Please enter a title.")]
    EmptyTitle,
    #[error("Amount must be a non-negative number.")]
    InvalidAmount,
    #[error("Date must be a valid YYYY-MM-DD date.")]
    InvalidDate,
}

impl ExpenseDraft {
    /// Checks the draft and turns it into a request payload, trimming
    /// surrounding whitespace from the text fields.
    pub fn validate(&self) -> Result<ExpensePayload, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        let amount = self.amount.trim();
        match amount.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => {}
            _ => return Err(DraftError::InvalidAmount),
        }

        let date = self.date.trim();
        if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            return Err(DraftError::InvalidDate);
        }

        Ok(ExpensePayload {
            title: title.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

/// Filters expenses by a free-text query and an exact-match date, keeping
/// the original order. A record passes the text filter when its title or
/// its (non-empty) description contains the query case-insensitively; it
/// passes the date filter only on exact equality. Empty criteria pass
/// everything; both filters combine with AND.
pub fn apply_filters(expenses: &[Expense], text: &str, date: &str) -> Vec<Expense> {
    let needle = text.to_lowercase();
    expenses
        .iter()
        .filter(|expense| {
            needle.is_empty()
                || expense.title.to_lowercase().contains(&needle)
                || (!expense.description.is_empty()
                    && expense.description.to_lowercase().contains(&needle))
        })
        .filter(|expense| date.is_empty() || expense.date == date)
        .cloned()
        .collect()
}

/// Sum of all expense amounts, coerced to numbers.
pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(Expense::amount_value).sum()
}

/// Income minus the summed amounts of the full, unfiltered store.
pub fn remaining_balance(income: f64, expenses: &[Expense]) -> f64 {
    income - total_expenses(expenses)
}

/// Remaining balance rounded to two fixed decimal places for display.
pub fn format_balance(remaining: f64) -> String {
    format!("{remaining:.2}")
}

/// Visual state of the remaining balance for rendering purposes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BalanceStatus {
    NonNegative,
    Negative,
}

impl BalanceStatus {
    pub fn of(remaining: f64) -> Self {
        if remaining < 0.0 {
            BalanceStatus::Negative
        } else {
            BalanceStatus::NonNegative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, title: &str, amount: &str, date: &str, description: &str) -> Expense {
        Expense {
            id,
            title: title.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
            description: description.to_string(),
        }
    }

    fn sample_store() -> Vec<Expense> {
        vec![
            expense(1, "Groceries", "250.00", "2025-03-01", "weekly shop"),
            expense(2, "Rent", "900.00", "2025-03-01", ""),
            expense(3, "Coffee", "4.50", "2025-03-02", "morning espresso"),
            expense(4, "Books", "30.00", "2025-03-05", "used paperbacks"),
        ]
    }

    #[test]
    fn test_empty_filters_return_full_store_in_order() {
        let store = sample_store();
        let filtered = apply_filters(&store, "", "");
        assert_eq!(filtered, store);
    }

    #[test]
    fn test_text_filter_matches_title_case_insensitively() {
        let store = sample_store();
        let filtered = apply_filters(&store, "GROC", "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_text_filter_matches_description() {
        let store = sample_store();
        let filtered = apply_filters(&store, "espresso", "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn test_text_filter_excludes_non_matches_only() {
        let store = sample_store();
        let filtered = apply_filters(&store, "o", "");
        // "o" appears in every title or description except Rent's.
        let ids: Vec<i64> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_date_filter_is_exact_match() {
        let store = sample_store();
        let filtered = apply_filters(&store, "", "2025-03-01");
        let ids: Vec<i64> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);

        // No partial matches on a date prefix.
        assert!(apply_filters(&store, "", "2025-03").is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let store = sample_store();
        let filtered = apply_filters(&store, "groceries", "2025-03-02");
        assert!(filtered.is_empty());

        let filtered = apply_filters(&store, "groceries", "2025-03-01");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_remaining_balance_non_negative() {
        let store = vec![
            expense(1, "a", "250.00", "2025-01-01", ""),
            expense(2, "b", "99.99", "2025-01-01", ""),
        ];
        let remaining = remaining_balance(1000.00, &store);
        assert_eq!(format_balance(remaining), "650.01");
        assert_eq!(BalanceStatus::of(remaining), BalanceStatus::NonNegative);
    }

    #[test]
    fn test_remaining_balance_negative() {
        let store = vec![
            expense(1, "a", "50", "2025-01-01", ""),
            expense(2, "b", "75", "2025-01-01", ""),
        ];
        let remaining = remaining_balance(100.00, &store);
        assert_eq!(format_balance(remaining), "-25.00");
        assert_eq!(BalanceStatus::of(remaining), BalanceStatus::Negative);
    }

    #[test]
    fn test_total_sums_coerced_amounts() {
        let store = sample_store();
        let total = total_expenses(&store);
        assert!((total - 1184.50).abs() < 1e-9);
    }

    #[test]
    fn test_expense_decodes_string_amount() {
        let expense: Expense = serde_json::from_str(
            r#"{"id": 7, "title": "Groceries", "amount": "250.00", "date": "2025-03-01", "description": "weekly"}"#,
        )
        .unwrap();
        assert_eq!(expense.amount, "250.00");
        assert!((expense.amount_value() - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_expense_decodes_numeric_amount() {
        let expense: Expense = serde_json::from_str(
            r#"{"id": 7, "title": "Groceries", "amount": 250.5, "date": "2025-03-01"}"#,
        )
        .unwrap();
        assert!((expense.amount_value() - 250.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_or_null_description_becomes_empty() {
        let missing: Expense = serde_json::from_str(
            r#"{"id": 1, "title": "a", "amount": "1", "date": "2025-01-01"}"#,
        )
        .unwrap();
        assert_eq!(missing.description, "");

        let nulled: Expense = serde_json::from_str(
            r#"{"id": 2, "title": "b", "amount": "1", "date": "2025-01-01", "description": null}"#,
        )
        .unwrap();
        assert_eq!(nulled.description, "");
    }

    #[test]
    fn test_draft_validation_rejects_empty_title() {
        let draft = ExpenseDraft {
            title: "   ".to_string(),
            amount: "10".to_string(),
            date: "2025-03-01".to_string(),
            description: String::new(),
        };
        assert_eq!(draft.validate(), Err(DraftError::EmptyTitle));
    }

    #[test]
    fn test_draft_validation_rejects_bad_amounts() {
        let mut draft = ExpenseDraft {
            title: "Coffee".to_string(),
            amount: "abc".to_string(),
            date: "2025-03-01".to_string(),
            description: String::new(),
        };
        assert_eq!(draft.validate(), Err(DraftError::InvalidAmount));

        draft.amount = "-3.50".to_string();
        assert_eq!(draft.validate(), Err(DraftError::InvalidAmount));
    }

    #[test]
    fn test_draft_validation_rejects_bad_dates() {
        let draft = ExpenseDraft {
            title: "Coffee".to_string(),
            amount: "3.50".to_string(),
            date: "2025-13-40".to_string(),
            description: String::new(),
        };
        assert_eq!(draft.validate(), Err(DraftError::InvalidDate));
    }

    #[test]
    fn test_draft_validation_trims_fields() {
        let draft = ExpenseDraft {
            title: "  Coffee  ".to_string(),
            amount: " 3.50 ".to_string(),
            date: " 2025-03-01 ".to_string(),
            description: "  beans  ".to_string(),
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.title, "Coffee");
        assert_eq!(payload.amount, "3.50");
        assert_eq!(payload.date, "2025-03-01");
        assert_eq!(payload.description, "beans");
    }
}
