// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Site, facility, and level records.

use alloc::string::String;
use kurbo::Rect;

use crate::id::{FacilityId, LevelId, SiteId};
use crate::vertical::VerticalOrder;

/// A site: the outermost grouping of a floor catalog, such as a campus.
///
/// Sites contain facilities; containment is expressed by each facility's
/// [`Facility::site_id`] rather than by nesting.
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    /// Host-assigned identifier.
    pub id: SiteId,
    /// Display name.
    pub name: String,
    /// Geographic extent of the site, when the host's floor data carries one.
    pub extent: Option<Rect>,
}

impl Site {
    /// Creates a site with no extent.
    #[must_use]
    pub fn new(id: impl Into<SiteId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extent: None,
        }
    }

    /// Sets the site's extent.
    #[must_use]
    pub fn with_extent(mut self, extent: Rect) -> Self {
        self.extent = Some(extent);
        self
    }
}

/// A facility: a single building belonging to a [`Site`].
#[derive(Clone, Debug, PartialEq)]
pub struct Facility {
    /// Host-assigned identifier.
    pub id: FacilityId,
    /// Identifier of the owning site.
    pub site_id: SiteId,
    /// Display name.
    pub name: String,
    /// Geographic extent of the facility, when the host's floor data carries one.
    pub extent: Option<Rect>,
}

impl Facility {
    /// Creates a facility with no extent.
    #[must_use]
    pub fn new(
        id: impl Into<FacilityId>,
        site_id: impl Into<SiteId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            site_id: site_id.into(),
            name: name.into(),
            extent: None,
        }
    }

    /// Sets the facility's extent.
    #[must_use]
    pub fn with_extent(mut self, extent: Rect) -> Self {
        self.extent = Some(extent);
        self
    }
}

/// A level: one floor of a [`Facility`].
///
/// The `visible` flag is owned by the rendering host but written by floor
/// filtering: a level filter makes exactly the levels sharing one
/// [`VerticalOrder`] visible across the whole catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    /// Host-assigned identifier.
    pub id: LevelId,
    /// Identifier of the owning facility.
    pub facility_id: FacilityId,
    /// Display name.
    pub name: String,
    /// Vertical rank aligning this level with levels in other facilities.
    pub vertical_order: VerticalOrder,
    /// Whether the host currently renders this level. Levels start visible.
    pub visible: bool,
}

impl Level {
    /// Creates a visible level.
    #[must_use]
    pub fn new(
        id: impl Into<LevelId>,
        facility_id: impl Into<FacilityId>,
        name: impl Into<String>,
        vertical_order: VerticalOrder,
    ) -> Self {
        Self {
            id: id.into(),
            facility_id: facility_id.into(),
            name: name.into(),
            vertical_order,
            visible: true,
        }
    }
}
