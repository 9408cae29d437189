use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::constant::{TEST_APP_ID, TEST_CONTEXT_ID};

use super::SteamFixtures;

/// Query of a first page request, which carries no `start_assetid`
fn first_page_query() -> Matcher {
    Matcher::Regex(r"^l=[^&]+&count=\d+$".to_string())
}

fn inventory_path(account_id: &str) -> String {
    format!("/inventory/{}/{}/{}", account_id, TEST_APP_ID, TEST_CONTEXT_ID)
}

impl<'a> SteamFixtures<'a> {
    /// Create a mock HTTP endpoint for one inventory page.
    ///
    /// Sets up a mock GET endpoint at `/inventory/{account_id}/730/2` that returns `page` as
    /// JSON. Without a cursor the mock only matches first page requests, with a cursor it only
    /// matches requests continuing from that asset ID.
    ///
    /// # Arguments
    /// - `account_id` - Account ID for the endpoint path
    /// - `cursor` - Expected `start_assetid` query value
    /// - `page` - Raw inventory JSON to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint that will be automatically verified
    pub fn create_inventory_page_endpoint(
        &mut self,
        account_id: &str,
        cursor: Option<&str>,
        page: Value,
        expected_requests: usize,
    ) -> Mock {
        let query = match cursor {
            Some(cursor) => Matcher::UrlEncoded("start_assetid".to_string(), cursor.to_string()),
            None => first_page_query(),
        };

        self.setup
            .server
            .mock("GET", inventory_path(account_id).as_str())
            .match_query(query)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint returning an error status for any inventory request.
    ///
    /// # Arguments
    /// - `account_id` - Account ID for the endpoint path
    /// - `status_code` - HTTP status code to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_inventory_error_endpoint(
        &mut self,
        account_id: &str,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", inventory_path(account_id).as_str())
            .match_query(Matcher::Any)
            .with_status(status_code)
            .with_header("content-type", "application/json")
            .with_body("null")
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint answering any inventory request with a raw body.
    pub fn create_inventory_raw_endpoint(
        &mut self,
        account_id: &str,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", inventory_path(account_id).as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
