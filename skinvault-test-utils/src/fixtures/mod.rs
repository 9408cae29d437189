//! Test fixture modules for database and HTTP mock creation.
//!
//! - `inventory` - Inventory snapshot and catalog item records
//! - `steam` - Raw Steam inventory JSON and mock inventory endpoints

pub mod inventory;
pub mod steam;
