// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The floor selection variant and its ancestry derivation.

use storey_model::{FacilityId, FloorCatalog, LevelId, SiteId};

/// What a floor filter currently has selected.
///
/// Selection is a single tagged value rather than three independent nullable
/// identifiers. Only the most specific identifier is stored; ancestors are
/// derived on demand against the live catalog. This makes the selection
/// invariants structural:
///
/// - A level selection's facility and site are always the live level's actual
///   ancestry; they cannot drift out of agreement with the stored level.
/// - A site selection carries no facility or level at all.
/// - At most one level is ever selected.
///
/// Identifiers are held by value and compared by equality, so a host may
/// reload or replace catalog entities without invalidating the selection; an
/// identifier that no longer resolves simply derives to "nothing selected"
/// until the entity reappears.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FloorSelection {
    /// Nothing is selected.
    #[default]
    None,
    /// A site is selected, with no facility or level choice.
    Site(SiteId),
    /// A facility is selected; its site derives from the facility record.
    ///
    /// This state only occurs for facilities without a usable default level;
    /// otherwise facility selection immediately deepens to
    /// [`FloorSelection::Level`].
    Facility(FacilityId),
    /// A level is selected; facility and site derive from its ancestry.
    Level(LevelId),
}

impl FloorSelection {
    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The selected level identifier, when the selection is a level.
    #[must_use]
    pub fn level_id(&self) -> Option<&LevelId> {
        match self {
            Self::Level(id) => Some(id),
            _ => None,
        }
    }

    /// The selected facility identifier.
    ///
    /// Stored directly for a facility selection; derived from the live level
    /// record for a level selection, which requires the catalog and resolves
    /// to `None` while the level identifier is stale.
    #[must_use]
    pub fn facility_id<'a>(&'a self, catalog: Option<&'a FloorCatalog>) -> Option<&'a FacilityId> {
        match self {
            Self::None | Self::Site(_) => None,
            Self::Facility(id) => Some(id),
            Self::Level(id) => catalog?.level(id).map(|level| &level.facility_id),
        }
    }

    /// The selected site identifier.
    ///
    /// Stored directly for a site selection; derived through the facility
    /// record otherwise.
    #[must_use]
    pub fn site_id<'a>(&'a self, catalog: Option<&'a FloorCatalog>) -> Option<&'a SiteId> {
        match self {
            Self::None => None,
            Self::Site(id) => Some(id),
            Self::Facility(id) => catalog?.facility(id).map(|facility| &facility.site_id),
            Self::Level(id) => catalog?.facility_of_level(id).map(|facility| &facility.site_id),
        }
    }
}
