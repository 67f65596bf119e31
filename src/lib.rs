//! # Splitter
//!
//! Client for the Expense Splitter backend: login and registration, CRUD
//! over expenses and persons, and a route guard that keeps protected views
//! behind a stored token. The same core drives the command-line shell and
//! the Leptos web app (`splitter-ui`).
//!
//! ## Modules
//!
//! - [`session`]: token store over pluggable persistent storage
//! - [`http`]: API client with bearer-token injection and transports
//! - [`services`]: auth, expense and person services
//! - [`router`]: route table and navigation guard
//! - [`app`]: bootstrap wiring everything together
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use splitter::{App, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut app = App::from_config(&Config::load_default());
//!
//!     app.auth().login("alice", "secret").await?;
//!
//!     // Guarded route: only reachable with a stored token
//!     let nav = app.router_mut().navigate("/expenses")?;
//!     assert!(!nav.redirected);
//!
//!     for expense in app.expenses().get_all().await? {
//!         println!("{}: {:.2} paid by {}", expense.description, expense.amount, expense.payer());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod http;
pub mod models;
pub mod router;
pub mod services;
pub mod session;

pub use app::App;

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig};

pub use http::{
    ApiClient, ApiRequest, ApiResponse, ClientError, ClientResult, HttpTransport, Method,
    DEFAULT_API_BASE,
};

#[cfg(feature = "native")]
pub use http::ReqwestTransport;

pub use models::{
    AuthResponse, Balances, Credentials, Expense, ExpenseRequest, Person, PersonRequest,
    PersonSummary, Summary,
};

pub use router::{
    guard, GuardDecision, Navigation, RouteDescriptor, RouteError, RouteMeta, RouteTarget, Router,
    View, ROUTES,
};

pub use services::{AuthService, ExpenseService, PersonService, Resource, ResourceService};

pub use session::{FileStorage, MemoryStorage, Session, StorageBackend, TokenStore};
