//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers for building proxied item image URLs and for snapshot
//! freshness arithmetic, plus in-memory collaborators used by the inventory sync tests.

pub mod image;
pub mod time;
