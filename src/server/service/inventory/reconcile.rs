//! Item catalog reconciliation.

use std::{collections::HashSet, sync::Arc};

use crate::server::{
    model::inventory::{CatalogEntry, DescriptionRecord, UpsertOutcome},
    service::{inventory::CatalogStore, retry::RetryPolicy},
    util::image::ImageUrlBuilder,
};

/// Outcome counts of one reconcile pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// New catalog entries
    pub created: usize,
    /// Existing catalog entries refreshed
    pub updated: usize,
    /// Descriptions without a usable market hash name
    pub skipped: usize,
    /// Entries whose upsert failed after retries
    pub failed: usize,
}

/// Upserts descriptions observed during a sync into the shared item catalog.
pub struct CatalogReconciler {
    store: Arc<dyn CatalogStore>,
    images: ImageUrlBuilder,
    retry: RetryPolicy,
}

impl CatalogReconciler {
    /// Creates a reconciler retrying each upsert according to `retry`
    pub fn new(store: Arc<dyn CatalogStore>, images: ImageUrlBuilder, retry: RetryPolicy) -> Self {
        Self {
            store,
            images,
            retry,
        }
    }

    /// Deduplicates descriptions by market hash name and upserts each unique entry.
    ///
    /// The first description carrying a given name wins. A failed upsert is logged and counted,
    /// the remaining entries are still processed.
    pub async fn reconcile(&self, descriptions: &[DescriptionRecord]) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for description in descriptions {
            let Some(market_hash_name) = description.market_hash_name.as_deref() else {
                summary.skipped += 1;
                continue;
            };

            if !seen.insert(market_hash_name) {
                continue;
            }

            let entry = self.catalog_entry(market_hash_name, description);

            let result = self
                .retry
                .execute_with_retry(&format!("catalog upsert for {}", market_hash_name), || {
                    self.store.upsert_catalog_entry(&entry)
                })
                .await;

            match result {
                Ok(UpsertOutcome::Created) => summary.created += 1,
                Ok(UpsertOutcome::Updated) => summary.updated += 1,
                Err(e) => {
                    tracing::error!(
                        "Failed to upsert catalog entry {}: {}",
                        market_hash_name,
                        e
                    );
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            "Reconciled item catalog: {} created, {} updated, {} skipped, {} failed",
            summary.created,
            summary.updated,
            summary.skipped,
            summary.failed
        );

        summary
    }

    fn catalog_entry(&self, market_hash_name: &str, description: &DescriptionRecord) -> CatalogEntry {
        CatalogEntry {
            market_hash_name: market_hash_name.to_string(),
            name: market_hash_name.to_string(),
            image_url: self.images.proxy_url(&description.icon_path),
            icon_path: description.icon_path.clone(),
            item_type: description.item_type.clone(),
            rarity: description.rarity().map(str::to_string),
            marketable: description.marketable,
            tradable: description.tradable,
        }
    }
}
