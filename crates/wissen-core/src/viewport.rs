//! Viewport classification.

use std::cell::Cell;
use std::rc::Rc;

use crate::traits::ViewportQuery;

/// Layout class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// At or below the breakpoint.
    Narrow,
    /// Above the breakpoint.
    Wide,
}

impl ViewportClass {
    /// Returns true for [`ViewportClass::Narrow`].
    #[must_use]
    pub fn is_narrow(self) -> bool {
        self == Self::Narrow
    }
}

/// Width threshold in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    max_width: u32,
}

impl Breakpoint {
    /// Creates a breakpoint; widths `<= max_width` are narrow.
    #[must_use]
    pub const fn new(max_width: u32) -> Self {
        Self { max_width }
    }

    /// The inclusive upper bound for narrow layouts.
    #[must_use]
    pub const fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Classifies a viewport width.
    #[must_use]
    pub fn classify(&self, width: f64) -> ViewportClass {
        if width <= f64::from(self.max_width) {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

/// Viewport with a settable width, shared between owners.
///
/// Used where no media query is available and in tests that resize the page.
#[derive(Debug, Clone)]
pub struct FixedViewport {
    breakpoint: Breakpoint,
    width: Rc<Cell<f64>>,
}

impl FixedViewport {
    /// Creates a viewport of the given width.
    #[must_use]
    pub fn new(breakpoint: Breakpoint, width: f64) -> Self {
        Self {
            breakpoint,
            width: Rc::new(Cell::new(width)),
        }
    }

    /// Changes the width seen by every clone.
    pub fn resize(&self, width: f64) {
        self.width.set(width);
    }

    /// Current classification.
    #[must_use]
    pub fn class(&self) -> ViewportClass {
        self.breakpoint.classify(self.width.get())
    }
}

impl ViewportQuery for FixedViewport {
    fn is_narrow(&self) -> bool {
        self.class().is_narrow()
    }
}
