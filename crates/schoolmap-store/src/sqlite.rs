//! SQLite record store backed by `sqlx`.

use async_trait::async_trait;
use schoolmap_core::{Error, NewSchool, Result, School};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::SchoolStore;

/// SQLite-backed school store.
pub struct SqliteStore {
    pool: SqlitePool,
}

/// Row shape for the `schools` table.
#[derive(sqlx::FromRow)]
struct SchoolRow {
    id: i64,
    name: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

impl From<SchoolRow> for School {
    fn from(row: SchoolRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

impl SqliteStore {
    /// Connects to the database at `url` and ensures the `schools` table
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the connection or the table bootstrap
    /// fails.
    pub async fn connect(url: &str) -> Result<Self> {
        // An in-memory database is private to its connection, so the pool
        // must not open a second one.
        let max_connections = if url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(store_err)?;

        let store = Self { pool };
        store.init_schema().await?;

        tracing::info!(url = %url, "Connected to SQLite store");
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS schools (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                address TEXT NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(())
    }
}

#[async_trait]
impl SchoolStore for SqliteStore {
    async fn insert(&self, school: NewSchool) -> Result<i64> {
        let result =
            sqlx::query("INSERT INTO schools (name, address, latitude, longitude) VALUES (?, ?, ?, ?)")
                .bind(&school.name)
                .bind(&school.address)
                .bind(school.latitude)
                .bind(school.longitude)
                .execute(&self.pool)
                .await
                .map_err(store_err)?;

        Ok(result.last_insert_rowid())
    }

    async fn fetch_all(&self) -> Result<Vec<School>> {
        let rows = sqlx::query_as::<_, SchoolRow>(
            "SELECT id, name, address, latitude, longitude FROM schools ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(rows.into_iter().map(School::from).collect())
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schools")
            .fetch_one(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(count.unsigned_abs())
    }
}

fn store_err(err: sqlx::Error) -> Error {
    Error::store(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteStore {
        SqliteStore::connect("sqlite::memory:").await.unwrap()
    }

    fn new_school(name: &str, latitude: f64, longitude: f64) -> NewSchool {
        NewSchool {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            latitude,
            longitude,
        }
    }

    #[tokio::test]
    async fn insert_assigns_auto_increment_ids() {
        let store = memory_store().await;

        let first = store.insert(new_school("Alpha", 0.0, 0.0)).await.unwrap();
        let second = store.insert(new_school("Beta", 1.0, 1.0)).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn fetch_all_round_trips_coordinates() {
        let store = memory_store().await;
        store.insert(new_school("Alpha", 12.97, 77.59)).await.unwrap();

        let schools = store.fetch_all().await.unwrap();
        assert_eq!(schools.len(), 1);
        assert_eq!(schools[0].name, "Alpha");
        assert_eq!(schools[0].address, "1 Main St");
        assert!((schools[0].latitude - 12.97).abs() < 1e-9);
        assert!((schools[0].longitude - 77.59).abs() < 1e-9);
    }

    #[tokio::test]
    async fn schema_bootstrap_is_idempotent() {
        let store = memory_store().await;
        store.init_schema().await.unwrap();
        store.insert(new_school("Alpha", 0.0, 0.0)).await.unwrap();
        store.init_schema().await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
    }
}
