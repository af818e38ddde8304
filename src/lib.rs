//! Gazetteer: game world fact extraction into sorted wiki data tables
//!
//! This crate provides the reusable core that wiki data extractors are built
//! on. A driver (living with the host game server) pulls facts through an
//! opaque accessor capability, accumulates them in shape-specialized
//! datasets, and publishes each dataset as a deterministic, sorted, delimited
//! text table. Separately, a bounded chunk enumerator walks large world
//! coordinate spaces in fixed-size blocks so per-block state can be released
//! before memory grows without bound.
//!
//! # Architecture
//!
//! - **Shape-specialized datasets** -- scalar, list, and pair-multimap shapes
//!   are separate types, so "re-insertion overwrites" vs "insertion appends"
//!   is a compile-time property, not a runtime check
//! - **Sort at the edge** -- datasets store into plain hash maps; keys are
//!   sorted only when rendering records, so insertion order never leaks into
//!   output
//! - **Atomic publishing** -- tables and manifests are staged to a temp file
//!   and renamed into place; a failed write never corrupts published output
//! - **Bounded scanning** -- block sizes normalize to perfect squares so
//!   unload boundaries align with square sub-regions of the world
//! - **No ambient state** -- datasets, providers, and stats are explicitly
//!   constructed and explicitly passed; the crate holds no globals
//!
//! # Key Modules
//!
//! - [`dataset`] -- The four dataset shapes and the `Dataset` render trait
//! - [`table`] -- Atomic CSV table writer (the stable output format)
//! - [`manifest`] -- Versioned JSON manifest of written tables
//! - [`chunk`] -- Chunk position providers with pluggable traversal order
//! - [`scan`] -- The scan loop driving a provider with progress and flushes
//! - [`source`] -- The narrow host accessor capability drivers depend on
//! - [`stats`] -- Atomic counters for scan and publish activity
//! - [`config`] -- Format version and scan constants
//!
//! # Example Usage
//!
//! ```
//! use gazetteer::dataset::NumberDataset;
//! use gazetteer::table::write_table;
//!
//! # fn main() -> anyhow::Result<()> {
//! let dir = tempfile::TempDir::new()?;
//! let mut max_level = NumberDataset::new();
//! max_level.put("sharpness", 5);
//! max_level.put("mending", 1);
//!
//! let rows = write_table(&max_level, dir.path(), "enchantment_max_level.txt")?;
//! assert_eq!(rows, 2);
//! # Ok(())
//! # }
//! ```

pub mod chunk;
pub mod config;
pub mod dataset;
pub mod manifest;
pub mod scan;
pub mod source;
pub mod stats;
pub mod table;
