//! Server application core modules.
//!
//! This module contains all server-side functionality for skinvault: HTTP routing, database
//! operations, the Steam inventory client, and the inventory synchronization core that keeps
//! per-account snapshots and the shared item catalog up to date.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod steam;
pub mod util;
