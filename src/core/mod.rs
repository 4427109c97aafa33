//! Core module for the academic records system

pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod io;
pub mod models;
pub mod registry;
pub mod transcript;

/// Returns the current version of the `CampusRecords` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
