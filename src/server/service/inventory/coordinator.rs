//! Per-account inventory sync with snapshot caching and fallback.

use std::sync::Arc;

use chrono::Utc;

use crate::server::{
    error::inventory::{InventoryError, SourceError},
    model::inventory::{AccountId, InventoryItem, Snapshot},
    service::inventory::{
        assemble::InventoryAssembler,
        in_flight::{Claim, InFlightRegistry},
        reconcile::CatalogReconciler,
        CatalogStore, InventorySource, SnapshotStore, SyncPolicy,
    },
    util::{image::ImageUrlBuilder, time::is_fresh},
};

/// Entry point of the inventory synchronization core.
///
/// Serves fresh snapshots from the store, runs at most one live sync per account at a time,
/// and falls back to the last stored snapshot when the inventory source fails. Cloning is cheap,
/// clones share the same in-flight registry.
#[derive(Clone)]
pub struct InventorySyncCoordinator {
    assembler: Arc<InventoryAssembler>,
    reconciler: Arc<CatalogReconciler>,
    snapshots: Arc<dyn SnapshotStore>,
    in_flight: InFlightRegistry,
    policy: SyncPolicy,
}

impl InventorySyncCoordinator {
    /// Creates a new coordinator.
    ///
    /// # Arguments
    /// - `source` - External inventory source walked on live syncs
    /// - `snapshots` - Per-account snapshot store
    /// - `catalog` - Shared item catalog store
    /// - `images` - Builder for the image URLs exposed on items and catalog entries
    /// - `in_flight` - Registry deduplicating concurrent syncs, shared by every clone
    /// - `policy` - Freshness, paging, and persistence retry settings
    pub fn new(
        source: Arc<dyn InventorySource>,
        snapshots: Arc<dyn SnapshotStore>,
        catalog: Arc<dyn CatalogStore>,
        images: ImageUrlBuilder,
        in_flight: InFlightRegistry,
        policy: SyncPolicy,
    ) -> Self {
        Self {
            assembler: Arc::new(InventoryAssembler::new(source, images.clone(), &policy)),
            reconciler: Arc::new(CatalogReconciler::new(
                catalog,
                images,
                policy.persistence_retry,
            )),
            snapshots,
            in_flight,
            policy,
        }
    }

    /// Returns the account's inventory, syncing it from the source when needed.
    ///
    /// Concurrent calls for the same account share a single pending sync. A caller that joined
    /// a sync which then failed starts one attempt of its own, whose outcome is final.
    ///
    /// # Arguments
    /// - `account_id` - Account to sync
    /// - `force_refresh` - Skip the freshness check and always contact the source
    ///
    /// # Returns
    /// - `Ok(Vec<InventoryItem>)` - Fresh snapshot, live items, or stale snapshot fallback
    /// - `Err(InventoryError::NoDataAvailable)` - Source failed and no usable snapshot exists
    pub async fn sync(
        &self,
        account_id: &AccountId,
        force_refresh: bool,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        match self.claim(account_id, force_refresh) {
            Claim::Started(sync) => sync.await,
            Claim::Joined(sync) => {
                tracing::debug!("Joining in-flight inventory sync for account {}", account_id);

                match sync.await {
                    Ok(items) => Ok(items),
                    Err(e) => {
                        tracing::debug!(
                            "Joined inventory sync for account {} failed, starting own attempt: {}",
                            account_id,
                            e
                        );

                        self.claim(account_id, force_refresh).wait().await
                    }
                }
            }
        }
    }

    /// Number of accounts with a sync currently in flight
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    fn claim(&self, account_id: &AccountId, force_refresh: bool) -> Claim {
        self.in_flight.join_or_start(account_id, || {
            let coordinator = self.clone();
            let account_id = account_id.clone();

            async move { coordinator.run(&account_id, force_refresh).await }
        })
    }

    async fn run(
        &self,
        account_id: &AccountId,
        force_refresh: bool,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        tracing::info!(
            "Syncing inventory for account {} (force refresh: {})",
            account_id,
            force_refresh
        );

        if !force_refresh {
            if let Some(snapshot) = self.read_snapshot(account_id).await {
                let now = Utc::now();

                if is_fresh(snapshot.updated_at, now, self.policy.freshness) {
                    tracing::debug!(
                        "Serving fresh inventory snapshot for account {} ({} items, age {}s)",
                        account_id,
                        snapshot.items.len(),
                        now.signed_duration_since(snapshot.updated_at).num_seconds()
                    );

                    return Ok(snapshot.items);
                }

                tracing::debug!(
                    "Inventory snapshot for account {} is stale (updated at {})",
                    account_id,
                    snapshot.updated_at
                );
            }
        }

        match self.assembler.assemble(account_id).await {
            Ok(assembled) => {
                let (_, ()) = tokio::join!(
                    self.reconciler.reconcile(&assembled.descriptions),
                    self.write_snapshot(account_id, &assembled.items)
                );

                Ok(assembled.items)
            }
            Err(e) => self.fall_back(account_id, e).await,
        }
    }

    /// Serves the last stored snapshot of any age after a failed live sync
    async fn fall_back(
        &self,
        account_id: &AccountId,
        error: SourceError,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        match self.read_snapshot(account_id).await {
            Some(snapshot) if !snapshot.items.is_empty() => {
                tracing::warn!(
                    "Inventory sync for account {} failed ({}), serving {} items from snapshot updated at {}",
                    account_id,
                    error.kind,
                    snapshot.items.len(),
                    snapshot.updated_at
                );

                Ok(snapshot.items)
            }
            _ => {
                tracing::error!(
                    "Inventory sync for account {} failed and no snapshot is available: {}",
                    account_id,
                    error
                );

                Err(InventoryError::NoDataAvailable {
                    account_id: account_id.to_string(),
                    kind: error.kind,
                    message: error.message,
                })
            }
        }
    }

    async fn read_snapshot(&self, account_id: &AccountId) -> Option<Snapshot> {
        match self.snapshots.read_snapshot(account_id).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(
                    "Failed to read inventory snapshot for account {}: {}",
                    account_id,
                    e
                );
                None
            }
        }
    }

    /// Stores the live items as the account's snapshot. An empty result never replaces the
    /// stored snapshot, so the last non-empty inventory stays available as a fallback.
    async fn write_snapshot(&self, account_id: &AccountId, items: &[InventoryItem]) {
        if items.is_empty() {
            tracing::debug!(
                "Live inventory for account {} has no marketable items, keeping stored snapshot",
                account_id
            );
            return;
        }

        let result = self
            .policy
            .persistence_retry
            .execute_with_retry(&format!("snapshot write for {}", account_id), || {
                self.snapshots.write_snapshot(account_id, items)
            })
            .await;

        match result {
            Ok(()) => tracing::debug!(
                "Stored inventory snapshot for account {} ({} items)",
                account_id,
                items.len()
            ),
            Err(e) => tracing::warn!(
                "Failed to store inventory snapshot for account {}: {}",
                account_id,
                e
            ),
        }
    }
}
