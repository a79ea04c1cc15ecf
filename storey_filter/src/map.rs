// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary trait a host map implements to be floor-filtered.

use kurbo::Rect;
use storey_model::FloorCatalog;
use storey_viewpoint::ViewpointError;

/// A host map (or scene) view that may carry floor-aware data.
///
/// This is the only boundary the floor filter touches: a catalog to read and
/// filter, an asynchronous load to kick off, and a viewpoint to animate. The
/// filter never learns anything else about the host: no rendering, no view
/// hierarchy, no event loop.
///
/// All calls happen on the host's single UI/logic thread; implementations do
/// not need any internal synchronization for the filter's sake.
pub trait FloorAwareMap {
    /// Read access to the floor catalog.
    ///
    /// A floor-aware map returns `Some` from the moment the map exists, even
    /// while the catalog is still unloaded or empty. `None` means the map
    /// carries no floor data at all, and floor filtering degrades to a no-op
    /// on it.
    fn floor_catalog(&self) -> Option<&FloorCatalog>;

    /// Mutable access to the floor catalog.
    fn floor_catalog_mut(&mut self) -> Option<&mut FloorCatalog>;

    /// Begins the asynchronous catalog load.
    ///
    /// Hosts deliver completion by calling
    /// [`FloorFilter::finish_setup`](crate::FloorFilter::finish_setup) from
    /// their load signal, with the catalog's
    /// [`LoadStatus`](storey_model::LoadStatus) updated first. Requesting a
    /// load that is already underway or complete must be tolerated.
    fn request_catalog_load(&mut self);

    /// Animates the viewpoint so `extent` fills the view, over `seconds`.
    ///
    /// Must tolerate redundant calls (animating to the current extent). The
    /// floor filter treats animation as best-effort and ignores the returned
    /// error.
    fn animate_viewpoint(&mut self, extent: Rect, seconds: f64) -> Result<(), ViewpointError>;
}
