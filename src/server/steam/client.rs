//! HTTP client for the Steam community inventory endpoint.

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use reqwest::{
    header::{ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT},
    Url,
};

use crate::server::{
    config::SteamConfig,
    error::{
        inventory::{SourceError, SourceErrorKind},
        Error,
    },
    model::inventory::{AccountId, InventoryPage},
    service::inventory::InventorySource,
    steam::model::RawInventoryResponse,
};

/// Browser user agents rotated across requests, Steam throttles unknown clients more eagerly
static USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

static ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";

/// Fetches single inventory pages from the Steam community inventory endpoint
#[derive(Clone)]
pub struct SteamInventoryClient {
    http: reqwest::Client,
    config: SteamConfig,
}

impl SteamInventoryClient {
    /// Creates a client whose requests time out after `config.request_timeout`
    pub fn new(config: SteamConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { http, config })
    }

    /// `{community}/inventory/{account_id}/{app_id}/{context_id}`
    fn inventory_url(&self, account_id: &AccountId) -> Url {
        let mut url = self.config.community_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("inventory")
                .push(account_id.as_str())
                .push(&self.config.app_id.to_string())
                .push(&self.config.context_id.to_string());
        }

        url
    }

    /// Profile inventory page the request claims to originate from
    fn referer(&self, account_id: &AccountId) -> String {
        let mut url = self.config.community_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("profiles")
                .push(account_id.as_str())
                .push("inventory");
        }

        url.to_string()
    }
}

#[async_trait]
impl InventorySource for SteamInventoryClient {
    /// Fetches one inventory page.
    ///
    /// # Arguments
    /// - `account_id` - Steam ID of the inventory owner
    /// - `cursor` - Asset ID to continue after, `None` for the first page
    ///
    /// # Returns
    /// - `Ok(InventoryPage)` - Narrowed page, empty with no more data if Steam reported failure
    /// - `Err(SourceError)` - Non-2xx status, network failure, timeout, or undecodable body
    async fn fetch_page(
        &self,
        account_id: &AccountId,
        cursor: Option<&str>,
    ) -> Result<InventoryPage, SourceError> {
        let page_size = self.config.page_size.to_string();
        let user_agent = USER_AGENTS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(USER_AGENTS[0]);

        let mut request = self
            .http
            .get(self.inventory_url(account_id))
            .query(&[("l", self.config.language.as_str()), ("count", page_size.as_str())])
            .header(USER_AGENT, user_agent)
            .header(REFERER, self.referer(account_id))
            .header(ACCEPT, "application/json")
            .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE);

        if let Some(cursor) = cursor {
            request = request.query(&[("start_assetid", cursor)]);
        }

        let response = request.send().await.map_err(|e| {
            SourceError::new(
                SourceErrorKind::Transient,
                format!("inventory request failed: {}", e),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::new(
                SourceErrorKind::from_status(status),
                format!("inventory request returned {}", status),
            ));
        }

        let body: Option<RawInventoryResponse> = response.json().await.map_err(|e| {
            SourceError::new(
                SourceErrorKind::Transient,
                format!("failed to decode inventory response: {}", e),
            )
        })?;

        let Some(body) = body else {
            return Err(SourceError::new(
                SourceErrorKind::Transient,
                "inventory response was empty",
            ));
        };

        if !body.success {
            tracing::warn!(
                "Steam reported failure for inventory of account {}: {}",
                account_id,
                body.message.as_deref().unwrap_or("unknown")
            );
        } else if let (None, Some(total)) = (cursor, body.total_inventory_count) {
            tracing::debug!("Inventory of account {} holds {} assets", account_id, total);
        }

        Ok(body.into_page())
    }
}
