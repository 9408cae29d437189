//! Service layer for business logic and orchestration.
//!
//! This module contains the inventory synchronization core (page walking, catalog
//! reconciliation, and the per-account sync coordinator) together with the retry logic
//! shared by its persistence writes.

pub mod inventory;
pub mod retry;
