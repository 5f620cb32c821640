//! Hott Rossi CLI - remote store seeding and catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Push the default menu and settings to the remote store (idempotent)
//! rossi-cli seed
//!
//! # Rehearse a seed against an in-memory store
//! rossi-cli seed --dry-run
//!
//! # Show the catalog as the storefront would load it
//! rossi-cli catalog
//!
//! # Fire the rebuild hook once and report the outcome
//! rossi-cli sync
//!
//! # Gated admin mutations
//! rossi-cli admin set-shop-name -c 116289 -n "HOTT ROSSI"
//! rossi-cli admin toggle-flag -c 116289 -p 1724500000000 -f promo
//! ```
//!
//! # Commands
//!
//! - `seed` - Upsert the default menu and settings into the remote store
//! - `catalog` - Load and print the catalog
//! - `sync` - Fire the rebuild hook manually
//! - `admin` - Run gated catalog mutations

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rossi-cli")]
#[command(author, version, about = "Hott Rossi CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the remote store with the default menu
    Seed {
        /// Rehearse against an in-memory store instead of the remote
        #[arg(long)]
        dry_run: bool,
    },
    /// Load and print the catalog
    Catalog,
    /// Fire the rebuild hook once
    Sync,
    /// Run gated catalog mutations
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a product
    AddProduct {
        /// Admin access code
        #[arg(short, long)]
        code: String,

        /// Product name
        #[arg(short, long)]
        name: String,

        /// Product description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Price in BRL, e.g. `45.90`
        #[arg(short, long)]
        price: String,

        /// Category (`Pizzas`, `Pastéis`, `Combos`, `Bebidas`, `Sobremesas`)
        #[arg(long, default_value = "Pizzas")]
        category: String,

        /// Image URL (placeholder when omitted)
        #[arg(short, long)]
        image_url: Option<String>,
    },
    /// Delete a product
    DeleteProduct {
        /// Admin access code
        #[arg(short, long)]
        code: String,

        /// Product id
        #[arg(short, long)]
        product: String,
    },
    /// Toggle a product flag
    ToggleFlag {
        /// Admin access code
        #[arg(short, long)]
        code: String,

        /// Product id
        #[arg(short, long)]
        product: String,

        /// Flag to toggle (`promo`, `best-seller`)
        #[arg(short, long)]
        flag: String,
    },
    /// Link or unlink an addon on a product
    ToggleAddon {
        /// Admin access code
        #[arg(short, long)]
        code: String,

        /// Product id
        #[arg(short, long)]
        product: String,

        /// Addon id
        #[arg(short, long)]
        addon: String,
    },
    /// Create an addon
    AddAddon {
        /// Admin access code
        #[arg(short, long)]
        code: String,

        /// Addon name
        #[arg(short, long)]
        name: String,

        /// Price in BRL, e.g. `8.00`
        #[arg(short, long)]
        price: String,
    },
    /// Delete an addon, clearing it from every product that offers it
    DeleteAddon {
        /// Admin access code
        #[arg(short, long)]
        code: String,

        /// Addon id
        #[arg(short, long)]
        addon: String,
    },
    /// Rename the shop
    SetShopName {
        /// Admin access code
        #[arg(short, long)]
        code: String,

        /// New shop name
        #[arg(short, long)]
        name: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { dry_run } => commands::seed::menu(dry_run).await?,
        Commands::Catalog => commands::catalog::show().await?,
        Commands::Sync => commands::sync::fire().await?,
        Commands::Admin { action } => match action {
            AdminAction::AddProduct {
                code,
                name,
                description,
                price,
                category,
                image_url,
            } => {
                commands::admin::add_product(
                    &code,
                    &name,
                    &description,
                    &price,
                    &category,
                    image_url,
                )
                .await?;
            }
            AdminAction::DeleteProduct { code, product } => {
                commands::admin::delete_product(&code, &product).await?;
            }
            AdminAction::ToggleFlag {
                code,
                product,
                flag,
            } => {
                commands::admin::toggle_flag(&code, &product, &flag).await?;
            }
            AdminAction::ToggleAddon {
                code,
                product,
                addon,
            } => {
                commands::admin::toggle_addon(&code, &product, &addon).await?;
            }
            AdminAction::AddAddon { code, name, price } => {
                commands::admin::add_addon(&code, &name, &price).await?;
            }
            AdminAction::DeleteAddon { code, addon } => {
                commands::admin::delete_addon(&code, &addon).await?;
            }
            AdminAction::SetShopName { code, name } => {
                commands::admin::set_shop_name(&code, &name).await?;
            }
        },
    }
    Ok(())
}
