// ABOUTME: Database connection management and schema migrations
// ABOUTME: Owns the SQLite pool and hands out one transaction per unit of work

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use archstudio_core::ProjectScope;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, info};

use crate::{StorageError, StorageResult};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const PROJECT_NAME: &str = "Architecture Studio";

/// Shared handle to the SQLite store
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Wrap an existing pool; the caller is responsible for migrations
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file and bring the schema up to date
    pub async fn init_with_path(database_path: Option<PathBuf>) -> StorageResult<Self> {
        let database_path = database_path.unwrap_or_else(archstudio_core::database_file);

        if let Some(parent) = database_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StorageError::Io)?;
        }

        let database_url = format!("sqlite:{}", database_path.display());
        debug!("Connecting to database: {}", database_url);

        let options = SqliteConnectOptions::from_str(&database_url)
            .map_err(StorageError::Sqlx)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .map_err(StorageError::Sqlx)?;

        info!("Database connection established");

        let database = Self::new(pool);
        database.migrate().await?;
        Ok(database)
    }

    /// Private in-memory database with migrations applied
    pub async fn in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(StorageError::Sqlx)?
            .foreign_keys(true);

        // A single connection that never expires keeps the in-memory data alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(StorageError::Sqlx)?;

        let database = Self::new(pool);
        database.migrate().await?;
        Ok(database)
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> StorageResult<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(StorageError::Migration)?;
        debug!("Database migrations completed");
        Ok(())
    }

    /// Create the row for `scope` if missing; `true` when a row was inserted
    pub async fn ensure_project(&self, scope: ProjectScope) -> StorageResult<bool> {
        let result = sqlx::query("INSERT OR IGNORE INTO projects (id, name) VALUES (?, ?)")
            .bind(scope.id())
            .bind(PROJECT_NAME)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let created = result.rows_affected() > 0;
        if created {
            info!("Created project row for {}", scope);
        }
        Ok(created)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Start a unit of work. Dropping the transaction without committing rolls it back.
    pub async fn begin(&self) -> StorageResult<Transaction<'static, Sqlite>> {
        self.pool.begin().await.map_err(StorageError::Sqlx)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
