//! Analyses derived from a scanned vault

pub mod orphans;
pub mod tags;
