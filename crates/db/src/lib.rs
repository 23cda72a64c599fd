//! Persistence store adapters for the `slots` collection.
//!
//! - [`store::PgSlotStore`] talks to Postgres directly through sqlx.
//! - [`rest::RestSlotStore`] talks to the hosted backend's REST interface.
//! - [`rest::RestAuthClient`] resolves access tokens against the hosted auth.

pub mod models;
pub mod repositories;
pub mod rest;
pub mod schema;
pub mod store;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}
