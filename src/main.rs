//! Splitter CLI
//!
//! Command-line shell over the Splitter client:
//! - Log in, register, log out
//! - Manage expenses and persons
//! - Show balances
//!
//! Every resource command navigates the router first, so the login guard
//! applies exactly as in the web app.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use splitter::router::{EXPENSES_PATH, LOGIN_PATH, PERSONS_PATH};
use splitter::{
    generate_default_config, App, Config, Expense, ExpenseRequest, LoggingConfig, Person,
    PersonRequest,
};

#[derive(Parser)]
#[command(name = "splitter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Split shared expenses from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: platform config dir, then ./splitter.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        username: String,
        /// Password (prompted on stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        username: String,
        /// Password (prompted on stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Resolve a route through the navigation guard
    Open {
        #[arg(default_value = "/")]
        path: String,
    },

    /// Manage expenses
    #[command(subcommand)]
    Expenses(ExpenseCommand),

    /// Manage persons
    #[command(subcommand)]
    Persons(PersonCommand),

    /// Print a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ExpenseCommand {
    /// List all expenses
    List,
    /// Show one expense
    Get { id: String },
    /// Add an expense
    Add {
        #[command(flatten)]
        fields: ExpenseFields,
    },
    /// Replace an expense
    Update {
        id: String,
        #[command(flatten)]
        fields: ExpenseFields,
    },
    /// Delete an expense
    Delete { id: String },
    /// Balances with person details
    Summary,
    /// Raw balances per person id
    Balances,
}

#[derive(clap::Args)]
pub struct ExpenseFields {
    #[arg(short, long)]
    pub description: String,
    #[arg(short, long)]
    pub amount: f64,
    /// Person id of the payer
    #[arg(short, long)]
    pub paid_by: String,
    /// Person ids sharing the expense (comma-separated or repeated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub split: Vec<String>,
}

impl From<ExpenseFields> for ExpenseRequest {
    fn from(fields: ExpenseFields) -> Self {
        Self {
            description: fields.description,
            amount: fields.amount,
            paid_by: fields.paid_by,
            split_between: fields.split,
        }
    }
}

#[derive(Subcommand)]
pub enum PersonCommand {
    /// List all persons
    List,
    /// Show one person
    Get { id: String },
    /// Add a person
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
    },
    /// Replace a person
    Update {
        id: String,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
    },
    /// Delete a person
    Delete { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);

    let mut app = App::from_config(&config);
    let json = cli.format == "json";

    match cli.command {
        Commands::Login { username, password } => {
            let password = password_or_prompt(password)?;
            let response = app.auth().login(&username, &password).await?;

            if json {
                print_json(&response)?;
            } else if app.token_store().is_logged_in() {
                println!(
                    "Logged in as {}",
                    app.auth().current_user().unwrap_or(username)
                );
            } else {
                eprintln!("Login response carried no token; not logged in");
                std::process::exit(1);
            }
        }

        Commands::Register { username, password } => {
            let password = password_or_prompt(password)?;
            let message = app.auth().register(&username, &password).await?;
            println!("{}", message);
        }

        Commands::Logout => {
            app.auth().logout();
            println!("Logged out");
        }

        Commands::Whoami => match app.auth().current_user() {
            Some(name) if app.token_store().is_logged_in() => println!("{}", name),
            _ => {
                println!("Not logged in");
                std::process::exit(1);
            }
        },

        Commands::Open { path } => {
            let nav = app.router_mut().navigate(&path)?;
            if json {
                print_json(&serde_json::json!({
                    "requested": nav.requested,
                    "path": nav.path(),
                    "name": nav.route.name,
                    "redirected": nav.redirected,
                }))?;
            } else if nav.redirected {
                println!("{} -> {} (redirected)", nav.requested, nav.path());
            } else {
                println!("{} -> {} ({})", nav.requested, nav.path(), nav.route.name);
            }
        }

        Commands::Expenses(command) => {
            enter(&mut app, EXPENSES_PATH)?;
            run_expense_command(&app, command, json).await?;
        }

        Commands::Persons(command) => {
            enter(&mut app, PERSONS_PATH)?;
            run_person_command(&app, command, json).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("splitter={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Navigate to a guarded route; exit when the guard sends us to login
fn enter(app: &mut App, path: &str) -> anyhow::Result<()> {
    let nav = app.router_mut().navigate(path)?;
    if nav.redirected && nav.path() == LOGIN_PATH {
        eprintln!("Not logged in. Run `splitter login <username>` first.");
        std::process::exit(1);
    }
    Ok(())
}

/// Password from the flag, a hidden terminal prompt, or the first line of
/// piped stdin
fn password_or_prompt(password: Option<String>) -> anyhow::Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    if std::io::stdin().is_terminal() {
        return rpassword::prompt_password("Password: ").context("reading password");
    }

    read_password_line(std::io::stdin().lock())
}

fn read_password_line(mut input: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn run_expense_command(app: &App, command: ExpenseCommand, json: bool) -> anyhow::Result<()> {
    let expenses = app.expenses();

    match command {
        ExpenseCommand::List => {
            let list = expenses.get_all().await?;
            if json {
                print_json(&list)?;
            } else {
                print_expense_table(&list);
            }
        }
        ExpenseCommand::Get { id } => {
            let expense = expenses.get_by_id(&id).await?;
            if json {
                print_json(&expense)?;
            } else {
                print_expense_table(std::slice::from_ref(&expense));
            }
        }
        ExpenseCommand::Add { fields } => {
            let expense = expenses.create(&fields.into()).await?;
            if json {
                print_json(&expense)?;
            } else {
                println!("Created expense {}", expense.id);
            }
        }
        ExpenseCommand::Update { id, fields } => {
            let expense = expenses.update(&id, &fields.into()).await?;
            if json {
                print_json(&expense)?;
            } else {
                println!("Updated expense {}", expense.id);
            }
        }
        ExpenseCommand::Delete { id } => {
            expenses.delete(&id).await?;
            println!("Deleted expense {}", id);
        }
        ExpenseCommand::Summary => {
            let summary = expenses.get_summary().await?;
            if json {
                print_json(&summary)?;
            } else {
                println!("{:<26} {:<20} {:<28} {:>10}", "ID", "NAME", "EMAIL", "BALANCE");
                for (id, entry) in &summary {
                    println!(
                        "{:<26} {:<20} {:<28} {:>10.2}",
                        id, entry.name, entry.email, entry.balance
                    );
                }
            }
        }
        ExpenseCommand::Balances => {
            let balances = expenses.get_balances().await?;
            if json {
                print_json(&balances)?;
            } else {
                println!("{:<26} {:>10}", "ID", "BALANCE");
                for (id, balance) in &balances {
                    println!("{:<26} {:>10.2}", id, balance);
                }
            }
        }
    }

    Ok(())
}

async fn run_person_command(app: &App, command: PersonCommand, json: bool) -> anyhow::Result<()> {
    let persons = app.persons();

    match command {
        PersonCommand::List => {
            let list = persons.get_all().await?;
            if json {
                print_json(&list)?;
            } else {
                print_person_table(&list);
            }
        }
        PersonCommand::Get { id } => {
            let person = persons.get_by_id(&id).await?;
            if json {
                print_json(&person)?;
            } else {
                print_person_table(std::slice::from_ref(&person));
            }
        }
        PersonCommand::Add { name, email } => {
            let person = persons.create(&PersonRequest::new(name, email)).await?;
            if json {
                print_json(&person)?;
            } else {
                println!("Created person {} ({})", person.name, person.id);
            }
        }
        PersonCommand::Update { id, name, email } => {
            let person = persons.update(&id, &PersonRequest::new(name, email)).await?;
            if json {
                print_json(&person)?;
            } else {
                println!("Updated person {} ({})", person.name, person.id);
            }
        }
        PersonCommand::Delete { id } => {
            persons.delete(&id).await?;
            println!("Deleted person {}", id);
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_expense_table(expenses: &[Expense]) {
    if expenses.is_empty() {
        println!("No expenses");
        return;
    }

    println!(
        "{:<26} {:<24} {:>10} {:<16} {}",
        "ID", "DESCRIPTION", "AMOUNT", "PAID BY", "SPLIT BETWEEN"
    );
    for expense in expenses {
        println!(
            "{:<26} {:<24} {:>10.2} {:<16} {}",
            expense.id,
            truncate(&expense.description, 24),
            expense.amount,
            truncate(expense.payer(), 16),
            expense.participants().join(", ")
        );
    }
}

fn print_person_table(persons: &[Person]) {
    if persons.is_empty() {
        println!("No persons");
        return;
    }

    println!("{:<26} {:<20} {}", "ID", "NAME", "EMAIL");
    for person in persons {
        println!("{:<26} {:<20} {}", person.id, truncate(&person.name, 20), person.email);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
