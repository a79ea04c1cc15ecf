// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=storey_filter --heading-base-level=0

//! Storey Filter: floor filtering for floor-aware maps.
//!
//! A floor filter is the state machine behind an indoor map's floor picker:
//! it owns the current site/facility/level selection, derives the choices
//! that follow from it, and projects the result back onto the host map as
//! level visibility and viewpoint zoom. This crate provides that machine,
//! headless: no rendering, no view hierarchy, no event loop. Hosts wire
//! their UI into [`FloorFilter`] and read state back out.
//!
//! ## Concepts
//!
//! - **Selection** ([`FloorSelection`]): one tagged value holding nothing, a
//!   site, a facility, or a level. Only the most specific identifier is stored;
//!   ancestors derive on demand against the live catalog, so the selection
//!   can never disagree with itself and stale identifiers degrade to "no
//!   selection" instead of failing.
//! - **Derived choices**: selecting a facility selects its default level
//!   (ground floor, else the lowest known vertical order); selecting a level
//!   re-derives its facility and site from its ancestry; selecting a site
//!   discards facility and level.
//! - **Level visibility**: a selected level makes exactly the levels sharing
//!   its vertical order visible across the whole catalog ("show this floor
//!   everywhere"), so the same floor lines up across adjacent buildings.
//!   With no level selected, every level is visible.
//! - **Zoom**: site and facility selection frame the target by animating the
//!   map's viewpoint to the target extent scaled 1.25x about its center.
//!   Animation is best-effort; failures never affect state.
//! - **The host boundary** ([`FloorAwareMap`]): a catalog, a load request,
//!   and a viewpoint animation. That is all the filter knows about the map.
//! - **Observers** ([`FloorObserver`]): sinks notified of facility and level
//!   selection passes, in registration order.
//!
//! ## Loading
//!
//! Floor data arrives asynchronously. [`FloorFilter::setup`] attaches a map
//! and requests its catalog load; the host's load signal then calls
//! [`FloorFilter::finish_setup`] with the returned token, on the same logical
//! thread as every other call. A token outlives its usefulness harmlessly:
//! after [`FloorFilter::detach`] (or a newer `setup`) it completes as a
//! no-op, so late signals for abandoned maps are safe. A selection made
//! before the load completes is not lost: `finish_setup` re-applies it once
//! identifiers can resolve.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use storey_filter::{FloorAwareMap, FloorFilter, Setup};
//! use storey_model::{Facility, FloorCatalog, Level, LoadStatus, Site, VerticalOrder};
//! use storey_viewpoint::ViewpointError;
//!
//! // A host map view: a catalog plus whatever the host renders with.
//! struct MapView {
//!     catalog: FloorCatalog,
//! }
//!
//! impl FloorAwareMap for MapView {
//!     fn floor_catalog(&self) -> Option<&FloorCatalog> {
//!         Some(&self.catalog)
//!     }
//!     fn floor_catalog_mut(&mut self) -> Option<&mut FloorCatalog> {
//!         Some(&mut self.catalog)
//!     }
//!     fn request_catalog_load(&mut self) {
//!         self.catalog.set_load_status(LoadStatus::Loading);
//!     }
//!     fn animate_viewpoint(&mut self, _extent: Rect, _seconds: f64) -> Result<(), ViewpointError> {
//!         Ok(())
//!     }
//! }
//!
//! let catalog = FloorCatalog::with_contents(
//!     vec![Site::new("campus", "Campus")],
//!     vec![Facility::new("red", "campus", "Red Building")],
//!     vec![
//!         Level::new("red-0", "red", "Ground", VerticalOrder::new(0)),
//!         Level::new("red-1", "red", "Second", VerticalOrder::new(1)),
//!     ],
//! );
//!
//! let mut filter = FloorFilter::new();
//! let Setup::Loading(token) = filter.setup(MapView { catalog }) else {
//!     unreachable!("the map carries a catalog");
//! };
//!
//! // The host's asynchronous load signal fires: mark the catalog loaded and
//! // complete setup.
//! filter
//!     .map_mut()
//!     .unwrap()
//!     .catalog
//!     .set_load_status(LoadStatus::Loaded);
//! assert!(filter.finish_setup(token));
//!
//! // Selecting the facility derives its site and its ground level, and
//! // filters level visibility across the catalog.
//! filter.select_facility(Some("red".into()));
//! assert_eq!(filter.selected_level().unwrap().id.as_str(), "red-0");
//! assert_eq!(filter.selected_site_id().unwrap().as_str(), "campus");
//! assert!(!filter.catalog().unwrap().level(&"red-1".into()).unwrap().visible);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod filter;
mod map;
mod observer;
mod selection;

pub use filter::{FloorFilter, FloorFilterDebugInfo, LoadToken, Setup};
pub use map::FloorAwareMap;
pub use observer::FloorObserver;
pub use selection::FloorSelection;
