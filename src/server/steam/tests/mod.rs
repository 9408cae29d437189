
use skinvault_test_utils::prelude::*;

use crate::server::{
    config::SteamConfig,
    error::inventory::SourceErrorKind,
    model::inventory::AccountId,
    service::inventory::InventorySource,
    steam::SteamInventoryClient,
};

/// Client pointed at the test context's mock server
fn client(test: &TestContext) -> SteamInventoryClient {
    let config = SteamConfig::new(&test.server_url()).unwrap();

    SteamInventoryClient::new(config).unwrap()
}

fn account() -> AccountId {
    AccountId::parse(TEST_ACCOUNT_ID).unwrap()
}
