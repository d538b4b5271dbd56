//! Navbar style switch on scroll.

/// Class added to the navbar once the page has scrolled.
pub const CLASS_SCROLLED: &str = "navbar--scrolled";

/// Tracks whether the page is scrolled past a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEffect {
    threshold: f64,
    scrolled: bool,
}

impl ScrollEffect {
    /// Creates the effect in the unscrolled state.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Whether the navbar is currently styled as scrolled.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feeds a scroll position. Returns the new flag when it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let mut effect = ScrollEffect::new(24.0);
        assert_eq!(effect.on_scroll(24.0), None);
        assert_eq!(effect.on_scroll(24.1), Some(true));
        assert_eq!(effect.on_scroll(400.0), None);
        assert_eq!(effect.on_scroll(0.0), Some(false));
        assert!(!effect.is_scrolled());
    }
}
