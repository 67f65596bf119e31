//! Services
//!
//! Client-side modules mapping operations to REST endpoints:
//!
//! - **AuthService**: `/auth/login`, `/auth/register`, local logout
//! - **ExpenseService**: CRUD over `/expenses` plus summary and balances
//! - **PersonService**: CRUD over `/persons`
//!
//! All computation (splits, balances) happens server-side.

mod auth;
mod expense;
mod person;
mod resource;

pub use auth::AuthService;
pub use expense::ExpenseService;
pub use person::PersonService;
pub use resource::{Resource, ResourceService};
