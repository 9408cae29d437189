//! Database model type aliases.
//!
//! Type aliases for the SeaORM entity models used throughout the application, providing a single
//! point of reference for database model types without importing from the `entity` crate directly.

/// Type alias for a catalog item database model.
///
/// One row per distinct `market_hash_name` observed in any account's inventory sync. Rows are
/// shared across accounts and upserted by the catalog reconciler.
///
/// # Fields (from `entity::catalog_item::Model`)
/// - `id` - Primary key
/// - `market_hash_name` - Canonical catalog key (unique)
/// - `name` - Display name
/// - `image_url` - Proxy-path image URL
/// - `icon_url` - Icon path as supplied by Steam
/// - `item_type` - Item type (nullable)
/// - `rarity` - Rarity tag value (nullable)
/// - `marketable` / `tradable` - Steam flags
/// - `created_at` - Timestamp when the item was first observed
/// - `updated_at` - Timestamp of the last upsert
pub type CatalogItemModel = entity::catalog_item::Model;

/// Type alias for a per-account inventory snapshot database model.
///
/// # Fields (from `entity::user_inventory::Model`)
/// - `id` - Primary key
/// - `account_id` - Steam account identifier (unique)
/// - `items` - JSON array of assembled inventory items
/// - `created_at` - Timestamp of the first successful sync
/// - `updated_at` - Timestamp of the last successful sync, drives cache freshness
pub type UserInventoryModel = entity::user_inventory::Model;
