//! In-memory record store (for development/testing).

use async_trait::async_trait;
use parking_lot::RwLock;
use schoolmap_core::{NewSchool, Result, School};

use crate::SchoolStore;

/// In-memory school store backed by a `Vec`.
///
/// Ids are assigned monotonically starting at 1, matching the auto-increment
/// behavior of the SQLite backend.
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    schools: Vec<School>,
    next_id: i64,
}

impl InMemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                schools: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchoolStore for InMemoryStore {
    async fn insert(&self, school: NewSchool) -> Result<i64> {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.schools.push(School {
            id,
            name: school.name,
            address: school.address,
            latitude: school.latitude,
            longitude: school.longitude,
        });
        Ok(id)
    }

    async fn fetch_all(&self) -> Result<Vec<School>> {
        Ok(self.inner.read().schools.clone())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.inner.read().schools.len() as u64)
    }
}
