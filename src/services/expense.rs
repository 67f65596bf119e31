//! Expense Service

use super::resource::{Resource, ResourceService};
use crate::http::ClientResult;
use crate::models::{Balances, Expense, ExpenseRequest, Summary};

impl Resource for Expense {
    const PATH: &'static str = "/expenses";
    type Request = ExpenseRequest;
}

/// CRUD over `/expenses` plus the server-computed balance views
pub type ExpenseService = ResourceService<Expense>;

impl ResourceService<Expense> {
    /// `GET /expenses/summary`: person id -> name, email, balance
    pub async fn get_summary(&self) -> ClientResult<Summary> {
        self.client().get("/expenses/summary").await?.json()
    }

    /// `GET /expenses/balances`: person id -> net balance
    pub async fn get_balances(&self) -> ClientResult<Balances> {
        self.client().get("/expenses/balances").await?.json()
    }
}
