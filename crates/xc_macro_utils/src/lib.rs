//! Shared helpers for the proc-macro crates of this workspace.
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro crate")]

// -----------------------------------------------------------------------------
// Modules

mod manifest;

// -----------------------------------------------------------------------------
// Exports

pub use manifest::Manifest;
