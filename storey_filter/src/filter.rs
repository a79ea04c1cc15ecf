// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The floor filter state machine.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use storey_model::{Facility, FacilityId, FloorCatalog, Level, LevelId, Site, SiteId};
use storey_viewpoint::{DEFAULT_ANIMATION_SECONDS, DEFAULT_BUFFER_FACTOR, buffered, is_degenerate};

use crate::map::FloorAwareMap;
use crate::observer::FloorObserver;
use crate::selection::FloorSelection;

/// Result of [`FloorFilter::setup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Setup {
    /// The map carries no floor data; there is nothing to load and floor
    /// operations on it are no-ops.
    Ready,
    /// The catalog load was requested. Pass the token to
    /// [`FloorFilter::finish_setup`] when the host's load signal fires.
    Loading(LoadToken),
}

/// Ticket for one in-flight catalog load.
///
/// A token is only honored by the [`FloorFilter`] generation that minted it;
/// after [`FloorFilter::detach`] or a renewed [`FloorFilter::setup`], a
/// leftover token completes as a no-op. This is what makes a late load
/// signal for an abandoned map safe to deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken {
    generation: u64,
}

/// Snapshot of a [`FloorFilter`]'s state for debugging and inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct FloorFilterDebugInfo {
    /// The stored selection variant.
    pub selection: FloorSelection,
    /// Site identifier derived from the selection, if any.
    pub selected_site_id: Option<SiteId>,
    /// Facility identifier derived from the selection, if any.
    pub selected_facility_id: Option<FacilityId>,
    /// Level identifier stored in the selection, if any.
    pub selected_level_id: Option<LevelId>,
    /// Selection revision counter.
    pub revision: u64,
    /// Setup generation counter guarding load tokens.
    pub generation: u64,
    /// Buffer factor applied when framing zoom targets.
    pub zoom_buffer: f64,
    /// Viewpoint animation duration in seconds.
    pub animation_seconds: f64,
    /// Whether a map is currently attached.
    pub has_map: bool,
    /// Whether the attached map's catalog has loaded.
    pub catalog_loaded: bool,
}

/// Floor filtering over one attached [`FloorAwareMap`].
///
/// The filter mediates between a map's loaded site/facility/level catalog and
/// a UI's selection needs: it keeps exactly one consistent selection active
/// (see [`FloorSelection`]), derives dependent choices (a facility selection
/// picks its default level), projects the selection onto the catalog as
/// "show this floor everywhere" level visibility, and frames the selection by
/// animating the map's viewpoint to a buffered extent.
///
/// Every operation is total: absent or stale identifiers degrade to "no
/// selection", degenerate extents skip the zoom, and a failed catalog load is
/// observable only through the catalog's
/// [`LoadStatus`](storey_model::LoadStatus). Nothing here returns an error.
///
/// See the crate docs for a worked end-to-end example.
pub struct FloorFilter<M: FloorAwareMap> {
    map: Option<M>,
    selection: FloorSelection,
    observers: Vec<Box<dyn FloorObserver>>,
    /// Bumped on setup and detach; stale [`LoadToken`]s are ignored.
    generation: u64,
    /// Bumped when the selection variant changes.
    revision: u64,
    zoom_buffer: f64,
    animation_seconds: f64,
}

impl<M: FloorAwareMap> FloorFilter<M> {
    /// Creates a filter with no attached map and nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: None,
            selection: FloorSelection::None,
            observers: Vec::new(),
            generation: 0,
            revision: 0,
            zoom_buffer: DEFAULT_BUFFER_FACTOR,
            animation_seconds: DEFAULT_ANIMATION_SECONDS,
        }
    }

    /// Attaches a map and begins loading its floor catalog.
    ///
    /// Returns [`Setup::Ready`] immediately when the map exposes no floor
    /// catalog; floor filtering is optional functionality, and every later
    /// floor operation on such a map is a silent no-op. Otherwise the
    /// catalog load is requested and [`Setup::Loading`] carries the token
    /// the host passes back from its load signal.
    ///
    /// Any previously attached map is replaced, and tokens minted for it go
    /// stale.
    pub fn setup(&mut self, mut map: M) -> Setup {
        self.generation = self.generation.wrapping_add(1);
        if map.floor_catalog().is_none() {
            self.map = Some(map);
            return Setup::Ready;
        }
        map.request_catalog_load();
        self.map = Some(map);
        Setup::Loading(LoadToken {
            generation: self.generation,
        })
    }

    /// Completes a catalog load begun by [`FloorFilter::setup`].
    ///
    /// Hosts call this from their load signal, on the same thread as every
    /// other filter call, after updating the catalog's load status. Returns
    /// `false`, touching nothing, for a token from a superseded setup or
    /// when no map is attached any more.
    ///
    /// Returns `true` once the filter is ready, whether or not the load
    /// succeeded; a failed load leaves the catalog's
    /// [`LoadStatus`](storey_model::LoadStatus) as the only record of the
    /// failure. On success, a level selection made before the load completed
    /// is re-applied: its ancestors now derive, and level visibility is
    /// filtered to match it.
    pub fn finish_setup(&mut self, token: LoadToken) -> bool {
        if token.generation != self.generation || self.map.is_none() {
            return false;
        }
        if self.catalog().is_some_and(FloorCatalog::is_loaded) {
            self.apply_level_filter();
        }
        true
    }

    /// Returns the attached map.
    #[must_use]
    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    /// Returns the attached map for mutation.
    ///
    /// Hosts use this to reach the catalog between
    /// [`FloorFilter::setup`] and [`FloorFilter::finish_setup`], and for
    /// their own bookkeeping. Mutating level visibility directly is allowed;
    /// the next selection change overwrites it.
    #[must_use]
    pub fn map_mut(&mut self) -> Option<&mut M> {
        self.map.as_mut()
    }

    /// Returns the attached map's floor catalog.
    #[must_use]
    pub fn catalog(&self) -> Option<&FloorCatalog> {
        self.map.as_ref().and_then(M::floor_catalog)
    }

    /// Returns the current selection variant.
    #[must_use]
    pub fn selection(&self) -> &FloorSelection {
        &self.selection
    }

    /// Returns the selection revision counter.
    ///
    /// The revision is bumped exactly when the selection variant changes.
    /// Observers that only care about real transitions can compare revisions
    /// instead of diffing identifiers.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The selected site's identifier, derived against the live catalog.
    #[must_use]
    pub fn selected_site_id(&self) -> Option<&SiteId> {
        self.selection.site_id(self.catalog())
    }

    /// The selected facility's identifier, derived against the live catalog.
    #[must_use]
    pub fn selected_facility_id(&self) -> Option<&FacilityId> {
        self.selection.facility_id(self.catalog())
    }

    /// The selected level's identifier.
    #[must_use]
    pub fn selected_level_id(&self) -> Option<&LevelId> {
        self.selection.level_id()
    }

    /// The selected site's live record; `None` when unset or stale.
    #[must_use]
    pub fn selected_site(&self) -> Option<&Site> {
        let id = self.selection.site_id(self.catalog())?;
        self.catalog()?.site(id)
    }

    /// The selected facility's live record; `None` when unset or stale.
    #[must_use]
    pub fn selected_facility(&self) -> Option<&Facility> {
        let id = self.selection.facility_id(self.catalog())?;
        self.catalog()?.facility(id)
    }

    /// The selected level's live record; `None` when unset or stale.
    #[must_use]
    pub fn selected_level(&self) -> Option<&Level> {
        let id = self.selection.level_id()?;
        self.catalog()?.level(id)
    }

    /// Returns `true` if `site` is the selected site.
    #[must_use]
    pub fn is_site_selected(&self, site: &Site) -> bool {
        self.selected_site_id() == Some(&site.id)
    }

    /// Returns `true` if `facility` is the selected facility.
    #[must_use]
    pub fn is_facility_selected(&self, facility: &Facility) -> bool {
        self.selected_facility_id() == Some(&facility.id)
    }

    /// Returns `true` if `level` is the selected level.
    #[must_use]
    pub fn is_level_selected(&self, level: &Level) -> bool {
        self.selected_level_id() == Some(&level.id)
    }

    /// Selects a site, or clears the selection entirely with `None`.
    ///
    /// Changing site discards any facility and level choice, and the view
    /// zooms to the site's buffered extent. Level visibility is left as it
    /// was: a site alone carries no visibility semantics.
    pub fn select_site(&mut self, site: Option<SiteId>) {
        self.set_selection(match site {
            Some(id) => FloorSelection::Site(id),
            None => FloorSelection::None,
        });
        let extent = self.selected_site().and_then(|site| site.extent);
        self.zoom_to(extent);
    }

    /// Selects a facility, deriving its site and default level.
    ///
    /// There is no unchanged-id guard here: reselecting the current facility
    /// re-derives its default level, re-zooms, and re-notifies. With
    /// `Some(id)`, the facility's default level (ground floor, else the
    /// lowest known vertical order) is selected when one exists, which
    /// filters level visibility across the whole catalog and notifies level
    /// sinks; then the view zooms to the facility's buffered extent. With
    /// `None`, the selection demotes to the derived site and any level
    /// selection is cleared (making every level visible).
    ///
    /// Facility sinks are notified last, with the live facility record, or
    /// `None` when the identifier does not resolve.
    pub fn select_facility(&mut self, facility: Option<FacilityId>) {
        let previous_level = self.selection.level_id().cloned();
        match facility {
            Some(id) => {
                let default_level = self
                    .catalog()
                    .and_then(|catalog| catalog.default_level_of(&id))
                    .map(|level| level.id.clone());
                self.set_selection(match &default_level {
                    Some(level) => FloorSelection::Level(level.clone()),
                    None => FloorSelection::Facility(id),
                });
                if previous_level != default_level {
                    self.apply_level_filter();
                }
                self.notify_level_sinks();
                let extent = self.selected_facility().and_then(|facility| facility.extent);
                self.zoom_to(extent);
            }
            None => {
                self.set_selection(match self.selected_site_id().cloned() {
                    Some(site) => FloorSelection::Site(site),
                    None => FloorSelection::None,
                });
                if previous_level.is_some() {
                    self.apply_level_filter();
                }
                self.notify_level_sinks();
            }
        }
        self.notify_facility_sinks();
    }

    /// Selects a level, deriving its facility and site from its ancestry.
    ///
    /// Reselecting the current level mutates nothing and recomputes nothing,
    /// except that level sinks are still notified, unconditionally, on every
    /// call. When the identifier actually changes, level visibility across
    /// the whole catalog is refiltered to the level's vertical order;
    /// clearing with `None` demotes the selection to the level's facility
    /// and makes every level visible.
    pub fn select_level(&mut self, level: Option<LevelId>) {
        if self.selection.level_id() != level.as_ref() {
            let next = match level {
                Some(id) => FloorSelection::Level(id),
                None => self.selection_without_level(),
            };
            self.set_selection(next);
            self.apply_level_filter();
        }
        self.notify_level_sinks();
    }

    /// Zooms to the selected facility's extent, else the selected site's
    /// extent, else does nothing.
    pub fn zoom_to_selection(&mut self) {
        let extent = self
            .selected_facility()
            .and_then(|facility| facility.extent)
            .or_else(|| self.selected_site().and_then(|site| site.extent));
        self.zoom_to(extent);
    }

    /// Overrides the buffer factor applied when framing zoom targets.
    ///
    /// Non-finite or non-positive factors are ignored.
    pub fn set_zoom_buffer(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.zoom_buffer = factor;
        }
    }

    /// Returns the buffer factor applied when framing zoom targets.
    #[must_use]
    pub fn zoom_buffer(&self) -> f64 {
        self.zoom_buffer
    }

    /// Overrides the viewpoint animation duration.
    ///
    /// Non-finite or non-positive durations are ignored.
    pub fn set_animation_seconds(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds > 0.0 {
            self.animation_seconds = seconds;
        }
    }

    /// Returns the viewpoint animation duration in seconds.
    #[must_use]
    pub fn animation_seconds(&self) -> f64 {
        self.animation_seconds
    }

    /// Registers an observer sink. Sinks are notified in registration order.
    pub fn observe(&mut self, observer: Box<dyn FloorObserver>) {
        self.observers.push(observer);
    }

    /// Detaches the map: clears the level filter so every level is visible
    /// again, clears the selection, and returns the released map.
    ///
    /// Tokens from earlier [`FloorFilter::setup`] calls go stale, so a load
    /// signal arriving after detach is a no-op.
    pub fn detach(&mut self) -> Option<M> {
        self.generation = self.generation.wrapping_add(1);
        if let Some(catalog) = self.catalog_mut() {
            catalog.filter_levels(None);
        }
        self.set_selection(FloorSelection::None);
        self.map.take()
    }

    /// Snapshot of the current filter state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> FloorFilterDebugInfo {
        FloorFilterDebugInfo {
            selection: self.selection.clone(),
            selected_site_id: self.selected_site_id().cloned(),
            selected_facility_id: self.selected_facility_id().cloned(),
            selected_level_id: self.selected_level_id().cloned(),
            revision: self.revision,
            generation: self.generation,
            zoom_buffer: self.zoom_buffer,
            animation_seconds: self.animation_seconds,
            has_map: self.map.is_some(),
            catalog_loaded: self.catalog().is_some_and(FloorCatalog::is_loaded),
        }
    }

    fn catalog_mut(&mut self) -> Option<&mut FloorCatalog> {
        self.map.as_mut().and_then(M::floor_catalog_mut)
    }

    fn set_selection(&mut self, selection: FloorSelection) {
        if self.selection != selection {
            self.selection = selection;
            self.revision = self.revision.wrapping_add(1);
        }
    }

    /// The selection with its level component dropped: a level demotes to
    /// its facility (or to nothing while the level id is stale), every other
    /// variant is unchanged.
    fn selection_without_level(&self) -> FloorSelection {
        let FloorSelection::Level(id) = &self.selection else {
            return self.selection.clone();
        };
        match self.catalog().and_then(|catalog| catalog.level(id)) {
            Some(level) => FloorSelection::Facility(level.facility_id.clone()),
            None => FloorSelection::None,
        }
    }

    /// Projects the selected level onto catalog-wide visibility: levels
    /// sharing its vertical order are shown everywhere, all others hidden.
    /// With no resolvable level selected, every level becomes visible.
    fn apply_level_filter(&mut self) {
        let order = self.selected_level().map(|level| level.vertical_order);
        if let Some(catalog) = self.catalog_mut() {
            catalog.filter_levels(order);
        }
    }

    /// Animates the map to `extent` framed by the buffer factor. Absent or
    /// degenerate extents are skipped; animation is best-effort and host
    /// errors are not surfaced.
    fn zoom_to(&mut self, extent: Option<Rect>) {
        let Some(extent) = extent else { return };
        if is_degenerate(extent) {
            return;
        }
        let target = buffered(extent, self.zoom_buffer);
        let seconds = self.animation_seconds;
        if let Some(map) = &mut self.map {
            let _ = map.animate_viewpoint(target, seconds);
        }
    }

    fn notify_facility_sinks(&mut self) {
        let facility = self.selected_facility().cloned();
        for observer in &mut self.observers {
            observer.selected_facility_changed(facility.as_ref());
        }
    }

    fn notify_level_sinks(&mut self) {
        let level = self.selected_level().cloned();
        for observer in &mut self.observers {
            observer.selected_level_changed(level.as_ref());
        }
    }
}

impl<M: FloorAwareMap> Default for FloorFilter<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FloorAwareMap> fmt::Debug for FloorFilter<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloorFilter")
            .field("selection", &self.selection)
            .field("revision", &self.revision)
            .field("generation", &self.generation)
            .field("zoom_buffer", &self.zoom_buffer)
            .field("animation_seconds", &self.animation_seconds)
            .field("has_map", &self.map.is_some())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
