//! # Schoolmap Store
//!
//! Record-store backends for the schoolmap service.
//!
//! The HTTP layer talks to storage only through the [`SchoolStore`] trait, so
//! the ranker and handlers stay testable without a live database. Two backends
//! are provided: [`SqliteStore`] for real deployments and [`InMemoryStore`]
//! for tests and throwaway runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use schoolmap_core::{NewSchool, Result, School};

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

/// Trait for school record storage backends.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Inserts a school and returns the store-assigned id.
    async fn insert(&self, school: NewSchool) -> Result<i64>;

    /// Fetches all schools in id order.
    async fn fetch_all(&self) -> Result<Vec<School>>;

    /// Returns the number of stored schools.
    async fn count(&self) -> Result<u64>;
}
