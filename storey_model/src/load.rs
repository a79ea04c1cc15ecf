// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load status of the asynchronously loaded floor catalog.

use alloc::string::String;
use core::fmt;

/// Progress of a [`FloorCatalog`](crate::FloorCatalog)'s asynchronous load.
///
/// The catalog is the only part of the model that can fail, and failure is
/// reported here rather than through an error return: consumers that find the
/// catalog in a non-[`Loaded`](LoadStatus::Loaded) state simply see no floor
/// data. Hosts that want to surface the failure to users read the cause out
/// of [`LoadStatus::Failed`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// The load has not been requested yet.
    #[default]
    NotLoaded,
    /// The load was requested and has not completed.
    Loading,
    /// Floor data is available.
    Loaded,
    /// The load finished unsuccessfully.
    Failed(LoadError),
}

impl LoadStatus {
    /// Returns `true` once floor data is available.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// The cause carried by [`LoadStatus::Failed`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadError {
    message: String,
}

impl LoadError {
    /// Creates a load error with a host-supplied description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor catalog failed to load: {}", self.message)
    }
}

impl core::error::Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::{LoadError, LoadStatus};

    #[test]
    fn only_loaded_reports_loaded() {
        assert!(!LoadStatus::NotLoaded.is_loaded());
        assert!(!LoadStatus::Loading.is_loaded());
        assert!(LoadStatus::Loaded.is_loaded());
        assert!(!LoadStatus::Failed(LoadError::new("network down")).is_loaded());
    }
}
