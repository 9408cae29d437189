//! Shared helpers for integration tests.

use std::{sync::Arc, time::Duration};

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;
use skinvault::server::{
    config::SteamConfig,
    model::app::AppState,
    service::{
        inventory::{
            DbCatalogStore, DbSnapshotStore, InFlightRegistry, InventorySyncCoordinator,
            SyncPolicy,
        },
        retry::RetryPolicy,
    },
    steam::SteamInventoryClient,
    util::image::ImageUrlBuilder,
};
use skinvault_test_utils::prelude::*;

pub trait TestContextExt {
    /// Application state wired to the test database and the mock Steam server.
    ///
    /// Pages are fetched back to back and persistence writes are attempted once.
    fn app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        let steam_config =
            SteamConfig::new(&self.server_url()).expect("Failed to build Steam config");
        let steam_client =
            SteamInventoryClient::new(steam_config).expect("Failed to build Steam client");
        let images = ImageUrlBuilder::new(TEST_APP_URL).expect("Failed to build image URLs");

        let policy = SyncPolicy {
            page_delay: Duration::ZERO,
            persistence_retry: RetryPolicy::no_retry(),
            ..SyncPolicy::default()
        };

        let inventory = InventorySyncCoordinator::new(
            Arc::new(steam_client),
            Arc::new(DbSnapshotStore::new(self.db.clone())),
            Arc::new(DbCatalogStore::new(self.db.clone())),
            images,
            InFlightRegistry::new(),
            policy,
        );

        AppState {
            db: self.db.clone(),
            inventory,
        }
    }
}

/// Reads a JSON response body
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
