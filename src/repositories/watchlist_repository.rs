// src/repositories/watchlist_repository.rs
//
// Persisted watchlist set
//
// RULES:
// - Reads may run concurrently, writes are serialized
// - Blocking SQLite work runs on the blocking pool, never on the reactor
// - No validation here; callers hand in checked ids

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use tokio::sync::Mutex;

use crate::db::{get_connection, ConnectionPool, PooledConn};
use crate::domain::WatchlistEntry;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    /// Every watchlisted movie id
    async fn list_ids(&self) -> AppResult<Vec<i64>>;

    /// Entries, most recently added first
    async fn list_entries(&self) -> AppResult<Vec<WatchlistEntry>>;

    /// Inserting an id twice keeps a single row
    async fn add(&self, entry: WatchlistEntry) -> AppResult<()>;

    /// Removing an absent id is a no-op
    async fn remove(&self, movie_id: i64) -> AppResult<()>;

    async fn contains(&self, movie_id: i64) -> AppResult<bool>;
}

pub struct SqliteWatchlistRepository {
    pool: Arc<ConnectionPool>,
    write_lock: Mutex<()>,
}

impl SqliteWatchlistRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            pool,
            write_lock: Mutex::new(()),
        }
    }

    fn row_to_entry(row: &Row) -> Result<WatchlistEntry, rusqlite::Error> {
        let movie_id: i64 = row.get("movie_id")?;
        let added_at = DateTime::parse_from_rfc3339(&row.get::<_, String>("added_at")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(WatchlistEntry { movie_id, added_at })
    }

    /// Runs `work` with a pooled connection on the blocking thread pool
    async fn with_connection<T, F>(&self, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&PooledConn) -> AppResult<T> + Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || {
            let conn = get_connection(&pool)?;
            work(&conn)
        })
        .await?
    }
}

#[async_trait]
impl WatchlistRepository for SqliteWatchlistRepository {
    async fn list_ids(&self) -> AppResult<Vec<i64>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT movie_id FROM watchlist")?;
            let ids = stmt
                .query_map([], |row| row.get(0))?
                .collect::<Result<Vec<i64>, _>>()?;
            Ok(ids)
        })
        .await
    }

    async fn list_entries(&self) -> AppResult<Vec<WatchlistEntry>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT movie_id, added_at FROM watchlist ORDER BY added_at DESC, movie_id",
            )?;
            let entries = stmt
                .query_map([], Self::row_to_entry)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(entries)
        })
        .await
    }

    async fn add(&self, entry: WatchlistEntry) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        self.with_connection(move |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO watchlist (movie_id, added_at) VALUES (?1, ?2)",
                params![entry.movie_id, entry.added_at.to_rfc3339()],
            )?;
            Ok(())
        })
        .await
    }

    async fn remove(&self, movie_id: i64) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        self.with_connection(move |conn| {
            conn.execute("DELETE FROM watchlist WHERE movie_id = ?1", params![movie_id])?;
            Ok(())
        })
        .await
    }

    async fn contains(&self, movie_id: i64) -> AppResult<bool> {
        self.with_connection(move |conn| {
            conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM watchlist WHERE movie_id = ?1)",
                params![movie_id],
                |row| row.get(0),
            )
            .map_err(AppError::Database)
        })
        .await
    }
}
