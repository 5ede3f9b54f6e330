//! Persistence layer for todos.
//!
//! - [`repositories::TodoRepo`]: PostgreSQL queries.
//! - [`store::TodoStore`]: the seam the service layer depends on, with a
//!   PostgreSQL ([`store::PgTodoStore`]) and an in-process
//!   ([`memory::MemoryTodoStore`]) implementation.
//! - [`mapper`]: entity <-> DTO conversions.

use sqlx::postgres::PgPoolOptions;

pub mod mapper;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
