//! Paged inventory walk and asset/description join.

use std::{collections::HashMap, sync::Arc, time::Duration};

use crate::server::{
    error::inventory::SourceError,
    model::inventory::{AccountId, AssetRecord, DescriptionRecord, InventoryItem},
    service::inventory::{InventorySource, SyncPolicy},
    util::image::ImageUrlBuilder,
};

/// Result of a complete walk of one account's inventory
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssembledInventory {
    /// Marketable items, in the order their assets were returned by the source
    pub items: Vec<InventoryItem>,
    /// Every description encountered, marketable or not, for catalog reconciliation
    pub descriptions: Vec<DescriptionRecord>,
    /// Number of pages fetched
    pub pages: u32,
}

/// Walks every page of an account's inventory and joins assets to their descriptions.
pub struct InventoryAssembler {
    source: Arc<dyn InventorySource>,
    images: ImageUrlBuilder,
    page_delay: Duration,
    max_pages: u32,
}

impl InventoryAssembler {
    /// Creates an assembler taking its page delay and page ceiling from `policy`
    pub fn new(
        source: Arc<dyn InventorySource>,
        images: ImageUrlBuilder,
        policy: &SyncPolicy,
    ) -> Self {
        Self {
            source,
            images,
            page_delay: policy.page_delay,
            max_pages: policy.max_pages.max(1),
        }
    }

    /// Fetches all pages for the account and assembles its marketable items.
    ///
    /// Follows the source's continuation cursor until it reports no more pages or the page
    /// ceiling is reached, waiting `page_delay` before each follow-up request. Any page failure
    /// aborts the walk and is returned unchanged, pages already fetched are discarded.
    ///
    /// # Arguments
    /// - `account_id` - Account whose inventory is walked
    ///
    /// # Returns
    /// - `Ok(AssembledInventory)` - Joined marketable items plus every description seen
    /// - `Err(SourceError)` - A page fetch failed with the given classification
    pub async fn assemble(&self, account_id: &AccountId) -> Result<AssembledInventory, SourceError> {
        let mut assets: Vec<AssetRecord> = Vec::new();
        let mut descriptions: Vec<DescriptionRecord> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0;

        loop {
            let page = match self.source.fetch_page(account_id, cursor.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        "Failed to fetch inventory page {} for account {}: {}",
                        pages + 1,
                        account_id,
                        e
                    );
                    return Err(e);
                }
            };
            pages += 1;

            tracing::debug!(
                "Fetched inventory page {} for account {}: {} assets, {} descriptions",
                pages,
                account_id,
                page.assets.len(),
                page.descriptions.len()
            );

            assets.extend(page.assets);
            descriptions.extend(page.descriptions);

            let next_cursor = match page.next_cursor {
                Some(next_cursor) if page.more_available => next_cursor,
                _ => break,
            };

            if pages >= self.max_pages {
                tracing::warn!(
                    "Reached page limit of {} for account {}, inventory may be incomplete",
                    self.max_pages,
                    account_id
                );
                break;
            }

            tracing::debug!(
                "Waiting {:?} before fetching inventory page {} for account {}",
                self.page_delay,
                pages + 1,
                account_id
            );
            tokio::time::sleep(self.page_delay).await;

            cursor = Some(next_cursor);
        }

        let items = self.join_marketable(&assets, &descriptions);

        tracing::info!(
            "Assembled inventory for account {}: {} assets, {} marketable items over {} pages",
            account_id,
            assets.len(),
            items.len(),
            pages
        );

        Ok(AssembledInventory {
            items,
            descriptions,
            pages,
        })
    }

    /// Joins assets to descriptions by class and instance, keeping only marketable items.
    ///
    /// Assets without a matching description are dropped. When a description appears on several
    /// pages, the first occurrence is used.
    fn join_marketable(
        &self,
        assets: &[AssetRecord],
        descriptions: &[DescriptionRecord],
    ) -> Vec<InventoryItem> {
        let mut by_key: HashMap<(&str, &str), &DescriptionRecord> =
            HashMap::with_capacity(descriptions.len());
        for description in descriptions {
            by_key.entry(description.join_key()).or_insert(description);
        }

        assets
            .iter()
            .filter_map(|asset| {
                let description = by_key.get(&asset.join_key())?;

                if !description.marketable {
                    return None;
                }

                Some(InventoryItem {
                    asset_id: asset.asset_id.clone(),
                    name: description.item_name().to_string(),
                    image_url: self.images.proxy_url(&description.icon_path),
                    rarity: description.rarity().unwrap_or_default().to_string(),
                    item_type: description.item_type.clone().unwrap_or_default(),
                    marketable: description.marketable,
                    tradable: description.tradable,
                })
            })
            .collect()
    }
}
