// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=storey_viewpoint --heading-base-level=0

//! Storey Viewpoint: extent math for floor-aware map navigation.
//!
//! When a floor filter zooms a map to a site or facility, the camera should
//! frame the target with some breathing room rather than pin it edge-to-edge.
//! This crate provides the small pieces of geometry shared by those zooms:
//!
//! - [`buffered`]: scale an extent about its own center by a buffer factor.
//! - [`is_degenerate`]: recognize empty or non-finite extents that a zoom
//!   must skip.
//! - [`DEFAULT_BUFFER_FACTOR`] / [`DEFAULT_ANIMATION_SECONDS`]: the stock
//!   framing and animation-duration defaults.
//! - [`ViewpointError`]: the error a host's viewpoint animation may report.
//!   Floor navigation treats animation as best-effort and swallows it; it is
//!   surfaced as a value so hosts that do care can log or retry.
//!
//! Extents are [`kurbo::Rect`]s in whatever spatial reference the host map
//! uses; this crate only does affine-free center/size arithmetic on them.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use storey_viewpoint::{DEFAULT_BUFFER_FACTOR, buffered};
//!
//! // A 10x10 extent centered on the origin...
//! let extent = Rect::new(-5.0, -5.0, 5.0, 5.0);
//!
//! // ...framed with the stock 1.25x buffer becomes 12.5x12.5, same center.
//! let framed = buffered(extent, DEFAULT_BUFFER_FACTOR);
//! assert_eq!(framed.center(), extent.center());
//! assert_eq!(framed.width(), 12.5);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

use kurbo::Rect;

/// Stock buffer factor applied when framing a site or facility extent.
///
/// Width and height are each multiplied by this factor, keeping the center
/// fixed, so the target occupies 80% of the resulting view span.
pub const DEFAULT_BUFFER_FACTOR: f64 = 1.25;

/// Stock duration of a viewpoint animation, in seconds.
pub const DEFAULT_ANIMATION_SECONDS: f64 = 0.5;

/// Scales `extent` about its center so each dimension is multiplied by
/// `factor`.
///
/// The result has the same center as the input. Degenerate inputs are not
/// special-cased here; callers that must skip them use [`is_degenerate`]
/// first.
#[must_use]
pub fn buffered(extent: Rect, factor: f64) -> Rect {
    Rect::from_center_size(extent.center(), extent.size() * factor)
}

/// Returns `true` for extents a zoom must skip: zero or negative area, or
/// any non-finite coordinate.
#[must_use]
pub fn is_degenerate(extent: Rect) -> bool {
    !extent.is_finite() || extent.width() <= 0.0 || extent.height() <= 0.0
}

/// An error reported by a host's viewpoint animation.
///
/// Hosts construct this from whatever their animation machinery reports.
/// Floor navigation never propagates it; the value exists so the animation
/// boundary has a typed error rather than a silent `bool`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewpointError {
    message: String,
}

impl ViewpointError {
    /// Creates a viewpoint error with a host-supplied description.
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

impl fmt::Display for ViewpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "viewpoint animation failed: {}", self.message)
    }
}

impl core::error::Error for ViewpointError {}
