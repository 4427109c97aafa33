//! Snapshot I/O for the records system
//!
//! CSV import/export and filesystem backup. Both layers talk to the
//! directory, catalog, and registry only through their public operations,
//! so snapshots replay through the same invariant checks as live input.

pub mod backup;
pub mod csv;
