//! Server application models and type definitions.
//!
//! This module contains data models for the server application: application state shared by
//! HTTP handlers, database model type aliases, and the domain types of the inventory sync core.

pub mod app;
pub mod db;
pub mod inventory;
