// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The loaded floor catalog: entity lists, lookups, and level filtering.

use alloc::vec::Vec;

use crate::entity::{Facility, Level, Site};
use crate::id::{FacilityId, LevelId, SiteId};
use crate::load::LoadStatus;
use crate::vertical::VerticalOrder;

/// The collection of [`Site`]s, [`Facility`]s, and [`Level`]s a floor-aware
/// map exposes, together with its load status.
///
/// Lookups are id-equality scans over flat lists. Ids are the only join keys,
/// so a host may replace the catalog's contents wholesale (for example after
/// reloading the map) without invalidating identifiers held by consumers;
/// stale identifiers simply stop resolving.
///
/// The catalog owns the two floor-data queries that floor filtering is built
/// on: [`FloorCatalog::default_level_of`] picks the level a facility opens
/// on, and [`FloorCatalog::filter_levels`] applies "show this floor
/// everywhere" visibility across all facilities at once.
#[derive(Clone, Debug, Default)]
pub struct FloorCatalog {
    load_status: LoadStatus,
    sites: Vec<Site>,
    facilities: Vec<Facility>,
    levels: Vec<Level>,
}

impl FloorCatalog {
    /// Creates an empty catalog in the [`LoadStatus::NotLoaded`] state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog with the given contents, still
    /// [`LoadStatus::NotLoaded`].
    ///
    /// Hosts move the catalog to [`LoadStatus::Loaded`] (or
    /// [`LoadStatus::Failed`]) via [`FloorCatalog::set_load_status`] once
    /// their asynchronous load signal fires.
    #[must_use]
    pub fn with_contents(sites: Vec<Site>, facilities: Vec<Facility>, levels: Vec<Level>) -> Self {
        Self {
            load_status: LoadStatus::NotLoaded,
            sites,
            facilities,
            levels,
        }
    }

    /// Returns the catalog's load status.
    #[must_use]
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Returns `true` once floor data is available.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.load_status.is_loaded()
    }

    /// Sets the catalog's load status.
    pub fn set_load_status(&mut self, status: LoadStatus) {
        self.load_status = status;
    }

    /// Returns all sites.
    #[must_use]
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Returns all facilities, across every site.
    #[must_use]
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Returns all levels, across every facility.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Looks up a site by id.
    #[must_use]
    pub fn site(&self, id: &SiteId) -> Option<&Site> {
        self.sites.iter().find(|site| &site.id == id)
    }

    /// Looks up a facility by id.
    #[must_use]
    pub fn facility(&self, id: &FacilityId) -> Option<&Facility> {
        self.facilities.iter().find(|facility| &facility.id == id)
    }

    /// Looks up a level by id.
    #[must_use]
    pub fn level(&self, id: &LevelId) -> Option<&Level> {
        self.levels.iter().find(|level| &level.id == id)
    }

    /// Looks up a level by id for mutation.
    #[must_use]
    pub fn level_mut(&mut self, id: &LevelId) -> Option<&mut Level> {
        self.levels.iter_mut().find(|level| &level.id == id)
    }

    /// Resolves the facility a level belongs to.
    #[must_use]
    pub fn facility_of_level(&self, id: &LevelId) -> Option<&Facility> {
        let level = self.level(id)?;
        self.facility(&level.facility_id)
    }

    /// Resolves the site a facility belongs to.
    #[must_use]
    pub fn site_of_facility(&self, id: &FacilityId) -> Option<&Site> {
        let facility = self.facility(id)?;
        self.site(&facility.site_id)
    }

    /// Resolves the site a level belongs to, through its facility.
    #[must_use]
    pub fn site_of_level(&self, id: &LevelId) -> Option<&Site> {
        let facility = self.facility_of_level(id)?;
        self.site(&facility.site_id)
    }

    /// Returns the levels belonging to a facility.
    pub fn levels_of_facility<'a>(
        &'a self,
        id: &FacilityId,
    ) -> impl Iterator<Item = &'a Level> + use<'a> {
        let id = id.clone();
        self.levels
            .iter()
            .filter(move |level| level.facility_id == id)
    }

    /// Returns the currently visible levels.
    pub fn visible_levels(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter().filter(|level| level.visible)
    }

    /// Picks the level a facility opens on.
    ///
    /// Prefers the level with vertical order `0`. When no level is at ground,
    /// picks the lowest vertical order among levels whose order is known;
    /// the two "unknown" sentinels are excluded from that search. Returns
    /// `None` for a facility with no levels (or only sentinel-ordered ones).
    #[must_use]
    pub fn default_level_of(&self, facility: &FacilityId) -> Option<&Level> {
        let mut lowest: Option<&Level> = None;
        for level in self.levels_of_facility(facility) {
            if level.vertical_order.is_ground() {
                return Some(level);
            }
            if level.vertical_order.is_unknown() {
                continue;
            }
            match lowest {
                Some(best) if best.vertical_order <= level.vertical_order => {}
                _ => lowest = Some(level),
            }
        }
        lowest
    }

    /// Applies "show this floor everywhere" visibility.
    ///
    /// With `Some(order)`, every level in the catalog (across all facilities
    /// and sites) becomes visible exactly when its vertical order equals
    /// `order`. With `None` the filter is cleared and every level becomes
    /// visible.
    pub fn filter_levels(&mut self, order: Option<VerticalOrder>) {
        for level in &mut self.levels {
            level.visible = match order {
                Some(order) => level.vertical_order == order,
                None => true,
            };
        }
    }
}
