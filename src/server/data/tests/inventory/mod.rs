mod get_by_account_id;
mod upsert;

use skinvault_test_utils::prelude::*;

use crate::server::data::inventory::InventoryRepository;
