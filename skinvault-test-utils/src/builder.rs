//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. The builder pattern allows chaining multiple configuration methods together, with
//! all operations queued and executed during the final `build()` call.

use chrono::NaiveDateTime;
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables, database
/// fixtures, and mock Steam endpoints. Methods can be chained together and finalized with
/// `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_inventory_tables: bool,

    // Database fixtures to insert
    snapshots: Vec<(String, Value, NaiveDateTime)>, // (account_id, items, updated_at)
    catalog_items: Vec<(String, Option<String>)>,   // (market_hash_name, item_type)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    inventory_page_endpoints: Vec<(String, Option<String>, Value, usize)>, // (account_id, cursor, page, expected_requests)
    inventory_error_endpoints: Vec<(String, usize, usize)>, // (account_id, status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_inventory_tables: false,
            snapshots: Vec::new(),
            catalog_items: Vec::new(),
            mock_builders: Vec::new(),
            inventory_page_endpoints: Vec::new(),
            inventory_error_endpoints: Vec::new(),
        }
    }

    /// Add the inventory snapshot and catalog item tables to the test database.
    pub fn with_inventory_tables(mut self) -> Self {
        self.include_inventory_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an inventory snapshot into the database.
    ///
    /// # Arguments
    /// - `account_id` - Account the snapshot belongs to
    /// - `items` - JSON array of snapshot items
    /// - `updated_at` - Last update timestamp of the snapshot
    pub fn with_snapshot(
        mut self,
        account_id: impl Into<String>,
        items: Value,
        updated_at: NaiveDateTime,
    ) -> Self {
        self.snapshots.push((account_id.into(), items, updated_at));
        self
    }

    /// Insert a catalog item into the database.
    pub fn with_catalog_item(
        mut self,
        market_hash_name: impl Into<String>,
        item_type: Option<&str>,
    ) -> Self {
        self.catalog_items
            .push((market_hash_name.into(), item_type.map(str::to_string)));
        self
    }

    /// Add a mock inventory page endpoint to the test server.
    ///
    /// # Arguments
    /// - `account_id` - Account ID for the endpoint path
    /// - `cursor` - `start_assetid` the request must carry, `None` for the first page
    /// - `page` - Raw inventory JSON to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_inventory_page_endpoint(
        mut self,
        account_id: impl Into<String>,
        cursor: Option<&str>,
        page: Value,
        expected_requests: usize,
    ) -> Self {
        self.inventory_page_endpoints.push((
            account_id.into(),
            cursor.map(str::to_string),
            page,
            expected_requests,
        ));
        self
    }

    /// Add a mock inventory endpoint answering every request with `status_code`.
    pub fn with_inventory_error_endpoint(
        mut self,
        account_id: impl Into<String>,
        status_code: usize,
        expected_requests: usize,
    ) -> Self {
        self.inventory_error_endpoints
            .push((account_id.into(), status_code, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access to
    /// the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (inventory tables if specified, then custom tables)
    /// 2. Inserts database fixtures (snapshots, catalog items)
    /// 3. Creates mock HTTP endpoints (custom endpoints, then inventory endpoints)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_inventory_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::UserInventory),
                schema.create_table_from_entity(entity::prelude::CatalogItem),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (account_id, items, updated_at) in self.snapshots {
            setup
                .inventory()
                .insert_snapshot(&account_id, items, updated_at)
                .await?;
        }

        for (market_hash_name, item_type) in self.catalog_items {
            setup
                .inventory()
                .insert_catalog_item(&market_hash_name, item_type.as_deref())
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so they take precedence for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (account_id, cursor, page, expected) in self.inventory_page_endpoints {
            mocks.push(setup.steam().create_inventory_page_endpoint(
                &account_id,
                cursor.as_deref(),
                page,
                expected,
            ));
        }

        for (account_id, status_code, expected) in self.inventory_error_endpoints {
            mocks.push(
                setup
                    .steam()
                    .create_inventory_error_endpoint(&account_id, status_code, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
