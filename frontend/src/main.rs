//! Console client for the inventory catalog.
//!
//! Each command fetches the catalog into a local mirror, performs at most
//! one mutation, reconciles the mirror with the server's response, and
//! renders the derived views from the mirror alone.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use frontend::client::{ApiClient, ClientError};
use frontend::mirror::CatalogMirror;
use frontend::product::ProductDraft;
use frontend::render::{render_facets, render_footer, render_stats, render_table};
use frontend::view::{CatalogFilter, catalog_stats, category_facets, filter_products};

/// Inventory catalog console.
#[derive(Debug, Parser)]
#[command(name = "inventory-console")]
struct Cli {
    /// Base URL of the catalog API.
    #[arg(long, env = "INVENTORY_API_URL", default_value = "http://localhost:3001")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

/// Available operations.
#[derive(Debug, Subcommand)]
enum Command {
    /// List products with the stats header and optional filtering.
    List {
        /// Category facet; "All" matches everything.
        #[arg(long, default_value = frontend::view::ALL_CATEGORIES)]
        category: String,

        /// Case-insensitive search over name, SKU, and description.
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Create a product.
    Add {
        /// Display name.
        #[arg(long)]
        name: String,

        /// Category label; see `categories` for the recommended list.
        #[arg(long)]
        category: String,

        /// Unit price.
        #[arg(long)]
        price: f64,

        /// Initial units on hand.
        #[arg(long, default_value_t = 0)]
        quantity: i32,

        /// Free-text description.
        #[arg(long, default_value = "")]
        description: String,

        /// Unique stock keeping unit.
        #[arg(long)]
        sku: String,
    },

    /// Delete a product by id.
    Remove {
        /// Product identifier.
        id: i32,
    },

    /// Set a product's quantity to an absolute value.
    Set {
        /// Product identifier.
        id: i32,

        /// Target quantity.
        quantity: i32,
    },

    /// Increase a product's quantity by one.
    Increment {
        /// Product identifier.
        id: i32,
    },

    /// Decrease a product's quantity by one, stopping at zero.
    Decrement {
        /// Product identifier.
        id: i32,
    },

    /// Show the recommended category labels for the add form.
    Categories,
}

/// Console-level failures.
#[derive(Debug, thiserror::Error)]
enum ConsoleError {
    /// The API call failed; the server's message is surfaced verbatim.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A quantity command targeted an id the fetched catalog does not hold.
    #[error("product {id} is not in the fetched catalog")]
    UnknownProduct {
        /// The id that matched nothing locally.
        id: i32,
    },
}

/// Quantity adjustment requested by the user.
#[derive(Debug, Clone, Copy)]
enum Target {
    /// Send this value as-is.
    Absolute(i32),
    /// Apply to the current quantity, clamped at zero before sending.
    Delta(i32),
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        eprintln!("tracing init failed: {error}");
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, ConsoleError> {
    let client = ApiClient::new(cli.api_url);
    match cli.command {
        Command::List { category, search } => {
            let mirror = fetch_mirror(&client).await?;
            let filter = CatalogFilter { category, search };
            Ok(render_catalog(&mirror, &filter))
        }
        Command::Add {
            name,
            category,
            price,
            quantity,
            description,
            sku,
        } => {
            let mut mirror = fetch_mirror(&client).await?;
            let created = client
                .create_product(&ProductDraft {
                    name,
                    category,
                    price,
                    quantity,
                    description,
                    sku,
                })
                .await?;
            let line = format!("Created #{} {} ({})", created.id, created.name, created.sku);
            mirror.apply_created(created);
            Ok(with_stats(&line, &mirror))
        }
        Command::Remove { id } => {
            let mut mirror = fetch_mirror(&client).await?;
            client.delete_product(id).await?;
            mirror.apply_deleted(id);
            Ok(with_stats(&format!("Deleted product {id}"), &mirror))
        }
        Command::Set { id, quantity } => adjust(&client, id, Target::Absolute(quantity)).await,
        Command::Increment { id } => adjust(&client, id, Target::Delta(1)).await,
        Command::Decrement { id } => adjust(&client, id, Target::Delta(-1)).await,
        Command::Categories => Ok(seed_catalog::RECOMMENDED_CATEGORIES.join("\n")),
    }
}

async fn adjust(client: &ApiClient, id: i32, target: Target) -> Result<String, ConsoleError> {
    let mut mirror = fetch_mirror(client).await?;
    let current = mirror
        .find(id)
        .ok_or(ConsoleError::UnknownProduct { id })?
        .quantity;
    let desired = match target {
        Target::Absolute(quantity) => quantity,
        Target::Delta(delta) => {
            let clamped = current.saturating_add(delta).max(0);
            if clamped == current {
                return Ok(format!("Quantity of product {id} already {current}"));
            }
            clamped
        }
    };
    let updated = client.update_quantity(id, desired).await?;
    let line = format!("Quantity of {} now {}", updated.name, updated.quantity);
    mirror.apply_updated(updated);
    Ok(with_stats(&line, &mirror))
}

async fn fetch_mirror(client: &ApiClient) -> Result<CatalogMirror, ClientError> {
    let mut mirror = CatalogMirror::new();
    mirror.replace_all(client.fetch_products().await?);
    Ok(mirror)
}

fn with_stats(line: &str, mirror: &CatalogMirror) -> String {
    format!(
        "{line}\n{}",
        render_stats(&catalog_stats(mirror.products()))
    )
}

fn render_catalog(mirror: &CatalogMirror, filter: &CatalogFilter) -> String {
    let products = mirror.products();
    let stats = catalog_stats(products);
    let facets = category_facets(products);
    let filtered = filter_products(products, filter);
    format!(
        "{}\n{}\n\n{}\n{}",
        render_stats(&stats),
        render_facets(&facets, &filter.category),
        render_table(&filtered),
        render_footer(filtered.len(), products.len())
    )
}
