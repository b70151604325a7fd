// ABOUTME: Mealbook CLI - browse the recipe catalog and manage favorites from a terminal
// ABOUTME: Every command prints pretty JSON to stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors
//!
//! Usage:
//! ```bash
//! # Home screen: categories, random recipes and a featured recipe
//! mealbook home --count 6
//!
//! # Catalog queries
//! mealbook search arrabiata
//! mealbook lookup 52772
//! mealbook category Seafood
//!
//! # Favorites (backend at MEALBOOK_API_URL or --api-url)
//! mealbook favorites add user_123 52772
//! mealbook favorites list user_123
//! mealbook favorites check user_123 52772
//! mealbook favorites remove user_123 52772
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealbook::{
    catalog::MealDbClient,
    client::FavoritesClient,
    config::ClientConfig,
    constants::catalog::HOME_FEED_RECIPE_COUNT,
    logging::LoggingConfig,
};

#[derive(Parser)]
#[command(
    name = "mealbook",
    about = "Mealbook recipe browser CLI",
    long_about = "Browse TheMealDB recipes and manage favorites stored by the Mealbook backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Favorites backend URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Recipe catalog base URL override
    #[arg(long, global = true)]
    mealdb_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Categories, random recipes and a featured recipe
    Home {
        /// Number of random recipes
        #[arg(long, default_value_t = HOME_FEED_RECIPE_COUNT)]
        count: usize,
    },

    /// Search recipes by name
    Search {
        /// Name or part of a name
        query: String,
    },

    /// Show one recipe by catalog id
    Lookup {
        /// Catalog recipe id
        id: String,
    },

    /// Show one random recipe
    Random,

    /// Recipes in a category
    Category {
        /// Category name, e.g. Seafood
        name: String,
    },

    /// Recipes using an ingredient
    Ingredient {
        /// Ingredient name, e.g. chicken_breast
        name: String,
    },

    /// List catalog categories
    Categories,

    /// Favorites management
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },
}

#[derive(Subcommand)]
enum FavoritesCommand {
    /// List a user's favorites
    List {
        /// User id
        user_id: String,
    },

    /// Save a catalog recipe as a favorite
    Add {
        /// User id
        user_id: String,
        /// Catalog recipe id
        recipe_id: String,
    },

    /// Remove a favorite
    Remove {
        /// User id
        user_id: String,
        /// Catalog recipe id
        recipe_id: String,
    },

    /// Check whether a recipe is a favorite
    Check {
        /// User id
        user_id: String,
        /// Catalog recipe id
        recipe_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging_config = LoggingConfig::for_cli();
    if cli.verbose {
        logging_config.level = "debug".into();
    }
    logging_config.init()?;

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(mealdb_url) = cli.mealdb_url {
        config.catalog.base_url = mealdb_url;
    }

    let catalog = MealDbClient::new(config.catalog_client_config())?;

    match cli.command {
        Command::Home { count } => commands::catalog::home(&catalog, count).await?,
        Command::Search { query } => commands::catalog::search(&catalog, &query).await?,
        Command::Lookup { id } => commands::catalog::lookup(&catalog, &id).await?,
        Command::Random => commands::catalog::random(&catalog).await?,
        Command::Category { name } => commands::catalog::category(&catalog, &name).await?,
        Command::Ingredient { name } => commands::catalog::ingredient(&catalog, &name).await?,
        Command::Categories => commands::catalog::categories(&catalog).await?,
        Command::Favorites { action } => {
            let favorites = FavoritesClient::new(&config.api_url)?;
            match action {
                FavoritesCommand::List { user_id } => {
                    commands::favorites::list(&favorites, &user_id).await?;
                }
                FavoritesCommand::Add { user_id, recipe_id } => {
                    commands::favorites::add(&favorites, &catalog, &user_id, &recipe_id).await?;
                }
                FavoritesCommand::Remove { user_id, recipe_id } => {
                    commands::favorites::remove(&favorites, &user_id, &recipe_id).await?;
                }
                FavoritesCommand::Check { user_id, recipe_id } => {
                    commands::favorites::check(&favorites, &user_id, &recipe_id).await?;
                }
            }
        }
    }

    Ok(())
}
