//! Purge loop that empties each collection.
//!
//! A collection is listed, every returned record is deleted, and the listing
//! is repeated until it comes back empty. Users are purged before tasks.

use color_eyre::Result;

use crate::api::{RecordApi, Resource};

/// What one collection's purge did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurgeStats {
    pub resource: Resource,
    /// DELETE requests issued.
    pub deleted: usize,
    /// Non-empty listings processed.
    pub passes: usize,
}

/// Totals for a full run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub users: PurgeStats,
    pub tasks: PurgeStats,
}

impl Summary {
    #[must_use]
    pub fn total_deleted(&self) -> usize {
        self.users.deleted + self.tasks.deleted
    }
}

/// Drives a [`RecordApi`] until every collection is empty.
pub struct Cleaner<A> {
    api: A,
}

impl<A: RecordApi> Cleaner<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Empties users, then tasks.
    ///
    /// # Errors
    ///
    /// Stops at the first failed request.
    pub fn run(&mut self) -> Result<Summary> {
        let users = self.purge(Resource::Users)?;
        let tasks = self.purge(Resource::Tasks)?;
        Ok(Summary { users, tasks })
    }

    /// Lists and deletes `resource` until a listing comes back empty.
    ///
    /// # Errors
    ///
    /// Stops at the first failed request.
    pub fn purge(&mut self, resource: Resource) -> Result<PurgeStats> {
        tracing::info!(%resource, "purging");
        let mut stats = PurgeStats {
            resource,
            deleted: 0,
            passes: 0,
        };

        let mut ids = self.api.list_ids(resource)?;
        while !ids.is_empty() {
            stats.passes += 1;
            tracing::debug!(%resource, pass = stats.passes, count = ids.len(), "deleting batch");
            for id in &ids {
                self.api.delete(resource, id)?;
                stats.deleted += 1;
            }
            ids = self.api.list_ids(resource)?;
        }

        tracing::info!(%resource, deleted = stats.deleted, passes = stats.passes, "collection empty");
        Ok(stats)
    }

    /// Hands the API back, e.g. to close its connection.
    #[must_use]
    pub fn into_inner(self) -> A {
        self.api
    }
}
