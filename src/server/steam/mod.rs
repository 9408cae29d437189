//! Steam community inventory client.
//!
//! [`SteamInventoryClient`] is the page fetcher of the inventory sync: it requests a single
//! inventory page, classifies failed requests into a [`SourceErrorKind`], and narrows the
//! loosely typed response ([`model`]) into the typed records the rest of the sync works with.
//!
//! [`SourceErrorKind`]: crate::server::error::inventory::SourceErrorKind

pub mod client;
pub mod model;

#[cfg(test)]
mod tests;

pub use client::SteamInventoryClient;
