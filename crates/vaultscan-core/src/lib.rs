//! Vaultscan Core Library
//!
//! Core domain logic for vault scanning: note discovery and parsing,
//! reference-graph construction, orphan detection, and tag aggregation.

pub mod analysis;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod note;
pub mod vault;
