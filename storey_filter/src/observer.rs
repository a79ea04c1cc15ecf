// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer sinks notified of selection changes.

use storey_model::{Facility, Level};

/// A sink notified as the floor filter's selection moves.
///
/// Register sinks with [`FloorFilter::observe`](crate::FloorFilter::observe);
/// they are invoked in registration order, on the same thread as the
/// selection call that triggered them. Both hooks default to doing nothing,
/// so a sink implements only what it cares about.
///
/// The two hooks fire on different terms, and the difference is part of the
/// contract:
///
/// - [`selected_facility_changed`](FloorObserver::selected_facility_changed)
///   fires at the end of every facility-selection call.
/// - [`selected_level_changed`](FloorObserver::selected_level_changed) fires
///   on every level-selection pass, including calls that reselect the
///   current level and therefore mutate nothing. Sinks that only want real
///   transitions can watch
///   [`FloorFilter::revision`](crate::FloorFilter::revision) alongside.
pub trait FloorObserver {
    /// The facility selection was set; `facility` is the live record, or
    /// `None` when the selection cleared or does not resolve.
    fn selected_facility_changed(&mut self, facility: Option<&Facility>) {
        let _ = facility;
    }

    /// A level-selection pass ran; `level` is the live record, or `None`
    /// when the selection cleared or does not resolve.
    fn selected_level_changed(&mut self, level: Option<&Level>) {
        let _ = level;
    }
}
