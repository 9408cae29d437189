//! HTTP controller endpoints for the skinvault web API.
//!
//! Axum handlers for the inventory sync entry point and the item catalog. Handlers validate
//! inputs, delegate to the sync coordinator or the repositories, and map results into DTOs. Each
//! handler carries a utoipa path annotation for the OpenAPI document.

pub mod inventory;
pub mod item;
