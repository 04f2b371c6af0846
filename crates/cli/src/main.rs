//! Royal CLI - Storefront demo and catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Reset the catalog to the factory defaults
//! royal seed
//!
//! # Browse the catalog
//! royal catalog list
//! royal catalog list -c Sneakers
//!
//! # Shop
//! royal cart add crown-runner
//! royal cart update crown-runner --delta 2
//! royal cart show
//! royal cart checkout
//!
//! # Identity
//! royal account login Marcus
//! royal account logout
//! ```
//!
//! # Environment Variables
//!
//! - `ROYAL_DATA_DIR` - Directory for persisted state (default `./data`)
//! - `ROYAL_ADD_FAILURE_RATE` - Simulated add-to-cart failure probability
//! - `ROYAL_RECOMMEND_LIMIT` - Maximum "also liked" suggestions

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "royal")]
#[command(author, version, about = "Royal storefront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset the catalog to the factory-default product list
    Seed,
    /// Browse and manage the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect and mutate the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Sign in and out
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally filtered by category
    List {
        /// Category filter (Sneakers, Shoes, Apparel)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Remove a product from the catalog
    Remove {
        /// Product identifier
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart lines, total, and suggestions
    Show,
    /// Add one unit of a product
    Add {
        /// Product identifier
        id: String,
    },
    /// Apply a signed quantity delta to a cart line
    Update {
        /// Product identifier
        id: String,

        /// Quantity delta (negative to decrement; quantity never drops below 1)
        #[arg(short, long, allow_hyphen_values = true)]
        delta: i32,
    },
    /// Remove a whole cart line
    Remove {
        /// Product identifier
        id: String,
    },
    /// Complete checkout and print the receipt
    Checkout,
}

#[derive(Subcommand)]
enum AccountAction {
    /// Sign in with a display name (mock login)
    Login {
        /// Display name; the address becomes `<name>@royal.com`
        name: String,
    },
    /// Sign out
    Logout,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::reset()?,
        Commands::Catalog { action } => match action {
            CatalogAction::List { category } => commands::catalog::list(category.as_deref())?,
            CatalogAction::Remove { id } => commands::catalog::remove(&id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Add { id } => commands::cart::add(&id)?,
            CartAction::Update { id, delta } => commands::cart::update(&id, delta)?,
            CartAction::Remove { id } => commands::cart::remove(&id)?,
            CartAction::Checkout => commands::cart::checkout()?,
        },
        Commands::Account { action } => match action {
            AccountAction::Login { name } => commands::account::login(&name)?,
            AccountAction::Logout => commands::account::logout()?,
        },
    }
    Ok(())
}
