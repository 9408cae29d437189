//! Data access layer repositories.
//!
//! This module contains the database repositories for the two persisted tables: per-account
//! inventory snapshots and the shared item catalog. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so they can run against a connection or a transaction.

pub mod inventory;
pub mod item;

#[cfg(test)]
mod tests;
