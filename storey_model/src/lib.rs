// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=storey_model --heading-base-level=0

//! Storey Model: the entity model behind floor-aware maps.
//!
//! Indoor ("floor-aware") maps describe buildings as a three-deep hierarchy:
//! a [`Site`] (a campus or compound) contains [`Facility`]s (buildings), and
//! each facility contains [`Level`]s (floors). This crate provides those
//! entity records, their identifier types, and [`FloorCatalog`], the loaded
//! collection a host map exposes once its asynchronous floor-data load has
//! completed.
//!
//! The catalog is deliberately plain:
//! - Entities live in flat `Vec`s and lookups are id-equality scans. Entity
//!   lists on real maps are small (tens of levels), and id-based lookups mean
//!   a host may reload or replace entities without invalidating identifiers
//!   held elsewhere.
//! - Parent links are identifiers ([`Facility::site_id`],
//!   [`Level::facility_id`]), not references; a missing parent resolves to
//!   `None` rather than an error.
//! - Load progress is a [`LoadStatus`] value on the catalog. A failed load is
//!   reported there ([`LoadStatus::Failed`]) and never as a panic.
//!
//! Floors are aligned across buildings by [`VerticalOrder`]: levels sharing a
//! vertical order represent "the same floor" even in different facilities,
//! which is what lets a level filter show, say, every second floor on campus
//! at once.
//!
//! ## Minimal example
//!
//! ```rust
//! use storey_model::{Facility, FloorCatalog, Level, Site, VerticalOrder};
//!
//! let catalog = FloorCatalog::with_contents(
//!     vec![Site::new("campus", "Research Campus")],
//!     vec![Facility::new("red", "campus", "Red Building")],
//!     vec![
//!         Level::new("red-1", "red", "Ground", VerticalOrder::new(0)),
//!         Level::new("red-2", "red", "Second", VerticalOrder::new(1)),
//!     ],
//! );
//!
//! // The default level for a facility is its ground floor when one exists.
//! let default = catalog.default_level_of(&"red".into()).unwrap();
//! assert_eq!(default.id.as_str(), "red-1");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod catalog;
mod entity;
mod id;
mod load;
mod vertical;

pub use catalog::FloorCatalog;
pub use entity::{Facility, Level, Site};
pub use id::{FacilityId, LevelId, SiteId};
pub use load::{LoadError, LoadStatus};
pub use vertical::VerticalOrder;
