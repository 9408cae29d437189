//! Test configuration constants.
//!
//! Values used across tests when building Steam inventory endpoints and image URLs. None of
//! them refer to a real account.

/// Steam account identifier used by default in tests
pub static TEST_ACCOUNT_ID: &str = "76561198000000001";

/// Public base URL of the server under test, image URLs are built from it
pub static TEST_APP_URL: &str = "http://localhost:3000";

/// Counter-Strike 2 app ID, matches the inventory endpoint path used by the client
pub const TEST_APP_ID: u32 = 730;

pub const TEST_CONTEXT_ID: u32 = 2;
