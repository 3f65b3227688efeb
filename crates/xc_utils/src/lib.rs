//! Small shared utilities for the `xc_*` crates.
//!
//! - [`hash`]: hash containers with fixed (seeded) and pass-through hashers.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
