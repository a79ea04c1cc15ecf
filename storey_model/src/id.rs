// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifier newtypes for catalog entities.
//!
//! Identifiers are opaque strings assigned by the host map's floor data. They
//! are compared by equality only; holding an id never keeps the entity alive,
//! and a stale id simply stops resolving against the live catalog.

use alloc::string::String;
use core::fmt;

/// Identifies a [`Site`](crate::Site) within a floor catalog.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SiteId(String);

impl SiteId {
    /// Creates a site id from the host-assigned string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SiteId").field(&self.0).finish()
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SiteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SiteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifies a [`Facility`](crate::Facility) within a floor catalog.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FacilityId(String);

impl FacilityId {
    /// Creates a facility id from the host-assigned string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FacilityId").field(&self.0).finish()
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FacilityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FacilityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifies a [`Level`](crate::Level) within a floor catalog.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LevelId(String);

impl LevelId {
    /// Creates a level id from the host-assigned string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LevelId").field(&self.0).finish()
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LevelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LevelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
