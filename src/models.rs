//! API Data Types
//!
//! Wire shapes of the expense-splitter backend. Entities are owned by the
//! backend; the client only carries them between requests.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============ Auth ============

/// Credentials for `/auth/login` and `/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Payload returned by `/auth/login`
///
/// Fields beyond `token` and `username` are kept in `extra` so callers get
/// the whole response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ============ Expenses ============

/// An expense as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: f64,
    /// Person id of the payer
    pub paid_by: String,
    #[serde(default)]
    pub paid_by_name: Option<String>,
    /// Person ids sharing the expense
    #[serde(default)]
    pub split_between: Vec<String>,
    #[serde(default)]
    pub split_between_names: Option<Vec<String>>,
    #[serde(default)]
    pub per_person_amount: Option<f64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Expense {
    /// Payer display name, falling back to the payer id
    pub fn payer(&self) -> &str {
        self.paid_by_name.as_deref().unwrap_or(&self.paid_by)
    }

    /// Participant display names, falling back to ids
    pub fn participants(&self) -> Vec<String> {
        match &self.split_between_names {
            Some(names) if !names.is_empty() => names.clone(),
            _ => self.split_between.clone(),
        }
    }
}

/// Body of `POST /expenses` and `PUT /expenses/:id`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
    pub split_between: Vec<String>,
}

impl From<&Expense> for ExpenseRequest {
    fn from(expense: &Expense) -> Self {
        Self {
            description: expense.description.clone(),
            amount: expense.amount,
            paid_by: expense.paid_by.clone(),
            split_between: expense.split_between.clone(),
        }
    }
}

// ============ Persons ============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Body of `POST /persons` and `PUT /persons/:id`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonRequest {
    pub name: String,
    pub email: String,
}

impl PersonRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

// ============ Balances ============

/// One entry of `GET /expenses/summary`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonSummary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub balance: f64,
}

/// Person id -> name, email and net balance
pub type Summary = BTreeMap<String, PersonSummary>;

/// Person id -> net balance (positive: owed money, negative: owes money)
pub type Balances = BTreeMap<String, f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_deserialize_backend_shape() {
        let json = r#"{
            "id": "e1",
            "description": "Dinner",
            "amount": 90.0,
            "paidBy": "p1",
            "paidByName": "Alice",
            "splitBetween": ["p1", "p2", "p3"],
            "splitBetweenNames": ["Alice", "Bob", "Carol"],
            "perPersonAmount": 30.0,
            "createdAt": "2025-01-15T19:30:00",
            "updatedAt": "2025-01-15T19:30:00.123"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, "e1");
        assert_eq!(expense.paid_by, "p1");
        assert_eq!(expense.payer(), "Alice");
        assert_eq!(expense.per_person_amount, Some(30.0));
        assert_eq!(expense.participants(), vec!["Alice", "Bob", "Carol"]);
        assert!(expense.created_at.is_some());
    }

    #[test]
    fn test_expense_minimal_shape() {
        let json = r#"{"id": "e2", "description": "Taxi", "amount": 12.5, "paidBy": "p2"}"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.payer(), "p2");
        assert!(expense.split_between.is_empty());
        assert!(expense.created_at.is_none());
    }

    #[test]
    fn test_expense_request_serializes_camel_case() {
        let request = ExpenseRequest {
            description: "Groceries".to_string(),
            amount: 40.0,
            paid_by: "p1".to_string(),
            split_between: vec!["p1".to_string(), "p2".to_string()],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["paidBy"], "p1");
        assert_eq!(value["splitBetween"][1], "p2");
        assert!(value.get("paid_by").is_none());
    }

    #[test]
    fn test_auth_response_keeps_extra_fields() {
        let json = r#"{"token": "t1", "username": "u1", "expiresIn": 3600}"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token.as_deref(), Some("t1"));
        assert_eq!(response.username.as_deref(), Some("u1"));
        assert_eq!(response.extra["expiresIn"], 3600);
    }

    #[test]
    fn test_summary_shape() {
        let json = r#"{
            "p1": {"name": "Alice", "email": "alice@example.com", "balance": 60.0},
            "p2": {"name": "Bob", "email": "bob@example.com", "balance": -30.0}
        }"#;

        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary["p2"].balance, -30.0);
    }
}
