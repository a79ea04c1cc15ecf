// Copyright 2025 the Storey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures: an in-memory floor-aware map and a recording observer.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use storey_filter::{FloorAwareMap, FloorFilter, FloorObserver, Setup};
use storey_model::{Facility, FloorCatalog, Level, LoadStatus, Site, VerticalOrder};
use storey_viewpoint::ViewpointError;

/// An in-memory floor-aware map that records every viewpoint animation.
pub struct TestMap {
    pub catalog: Option<FloorCatalog>,
    pub zooms: Vec<(Rect, f64)>,
    pub load_requests: usize,
    pub fail_animation: bool,
}

impl TestMap {
    pub fn floor_aware(catalog: FloorCatalog) -> Self {
        Self {
            catalog: Some(catalog),
            zooms: Vec::new(),
            load_requests: 0,
            fail_animation: false,
        }
    }

    /// A map with no floor data at all.
    pub fn floorless() -> Self {
        Self {
            catalog: None,
            zooms: Vec::new(),
            load_requests: 0,
            fail_animation: false,
        }
    }
}

impl FloorAwareMap for TestMap {
    fn floor_catalog(&self) -> Option<&FloorCatalog> {
        self.catalog.as_ref()
    }

    fn floor_catalog_mut(&mut self) -> Option<&mut FloorCatalog> {
        self.catalog.as_mut()
    }

    fn request_catalog_load(&mut self) {
        self.load_requests += 1;
        if let Some(catalog) = &mut self.catalog {
            if *catalog.load_status() == LoadStatus::NotLoaded {
                catalog.set_load_status(LoadStatus::Loading);
            }
        }
    }

    fn animate_viewpoint(&mut self, extent: Rect, seconds: f64) -> Result<(), ViewpointError> {
        self.zooms.push((extent, seconds));
        if self.fail_animation {
            Err(ViewpointError::new("animation interrupted"))
        } else {
            Ok(())
        }
    }
}

/// One observer callback, with the id of the entity it resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Facility(Option<String>),
    Level(Option<String>),
}

/// An observer that appends every callback to a shared log.
#[derive(Clone)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Notification>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl FloorObserver for Recorder {
    fn selected_facility_changed(&mut self, facility: Option<&Facility>) {
        self.log
            .borrow_mut()
            .push(Notification::Facility(facility.map(|f| f.id.as_str().to_owned())));
    }

    fn selected_level_changed(&mut self, level: Option<&Level>) {
        self.log
            .borrow_mut()
            .push(Notification::Level(level.map(|l| l.id.as_str().to_owned())));
    }
}

/// The catalog used across most tests.
///
/// Site `s1` holds facility `f1` with levels at vertical orders 0 and 1, and
/// facility `f2` with a single ground level, so orders align across the two
/// buildings. Site `s2` is empty and extent-less.
pub fn campus_catalog() -> FloorCatalog {
    let mut catalog = FloorCatalog::with_contents(
        vec![
            Site::new("s1", "Campus").with_extent(Rect::new(-5.0, -5.0, 5.0, 5.0)),
            Site::new("s2", "Annex Campus"),
        ],
        vec![
            Facility::new("f1", "s1", "Red").with_extent(Rect::new(0.0, 0.0, 4.0, 2.0)),
            Facility::new("f2", "s1", "Blue"),
        ],
        vec![
            Level::new("f1-0", "f1", "Ground", VerticalOrder::new(0)),
            Level::new("f1-1", "f1", "Second", VerticalOrder::new(1)),
            Level::new("f2-0", "f2", "Ground", VerticalOrder::new(0)),
        ],
    );
    catalog.set_load_status(LoadStatus::Loaded);
    catalog
}

/// A filter over [`campus_catalog`], set up and finished loading.
pub fn loaded_filter() -> FloorFilter<TestMap> {
    let mut filter = FloorFilter::new();
    let Setup::Loading(token) = filter.setup(TestMap::floor_aware(campus_catalog())) else {
        panic!("a floor-aware map should load");
    };
    assert!(filter.finish_setup(token));
    filter
}
