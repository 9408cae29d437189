//! Inventory synchronization core.
//!
//! A sync for one account walks the external inventory source page by page
//! ([`InventoryAssembler`]), upserts every observed description into the shared catalog
//! ([`CatalogReconciler`]), and persists the assembled items as the account's snapshot. The
//! [`InventorySyncCoordinator`] is the single entry point: it owns the freshness policy, the
//! per-account in-flight deduplication, and the fallback to the last snapshot when the source
//! fails.
//!
//! The three collaborators are traits so the core can run against the Steam client and the
//! database in production and against in-memory fakes in tests.

pub mod assemble;
pub mod coordinator;
pub mod in_flight;
pub mod reconcile;
pub mod store;


use std::time::Duration;

use async_trait::async_trait;

pub use assemble::{AssembledInventory, InventoryAssembler};
pub use coordinator::InventorySyncCoordinator;
pub use in_flight::InFlightRegistry;
pub use reconcile::{CatalogReconciler, ReconcileSummary};
pub use store::{DbCatalogStore, DbSnapshotStore};

use crate::server::{
    error::{inventory::SourceError, Error},
    model::inventory::{AccountId, CatalogEntry, InventoryItem, InventoryPage, Snapshot, UpsertOutcome},
    service::retry::RetryPolicy,
};

/// Paginated external inventory source
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Fetches one page of the account's inventory starting after `cursor`
    async fn fetch_page(
        &self,
        account_id: &AccountId,
        cursor: Option<&str>,
    ) -> Result<InventoryPage, SourceError>;
}

/// Per-account store of the last successfully synced inventory
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn read_snapshot(&self, account_id: &AccountId) -> Result<Option<Snapshot>, Error>;

    /// Replaces the account's snapshot wholesale, stamping it with the current time
    async fn write_snapshot(&self, account_id: &AccountId, items: &[InventoryItem])
        -> Result<(), Error>;
}

/// Shared cross-account item catalog keyed by market hash name
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Creates the entry if absent, otherwise updates its mutable fields
    async fn upsert_catalog_entry(&self, entry: &CatalogEntry) -> Result<UpsertOutcome, Error>;
}

/// Policy values governing a sync.
///
/// # Defaults
///
/// - **Freshness**: 15 minutes
/// - **Page delay**: 4 seconds
/// - **Max pages**: 50
/// - **Persistence retry**: [`RetryPolicy::default`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncPolicy {
    /// A snapshot younger than this is served without contacting the source
    pub freshness: Duration,
    /// Wait between successive page fetches
    pub page_delay: Duration,
    /// Runaway bound on the number of pages fetched per sync
    pub max_pages: u32,
    /// Retry policy for snapshot writes and catalog upserts
    pub persistence_retry: RetryPolicy,
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self {
            freshness: Duration::from_secs(15 * 60),
            page_delay: Duration::from_secs(4),
            max_pages: 50,
            persistence_retry: RetryPolicy::default(),
        }
    }
}
