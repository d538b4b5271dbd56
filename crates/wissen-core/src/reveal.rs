//! One-shot fade-in reveal tracking.
//!
//! Elements are identified by their position in document order. Once an
//! element has been revealed it stays revealed and is never observed again.

use std::collections::BTreeMap;

/// Class added to revealed elements.
pub const CLASS_VISIBLE: &str = "is-visible";

/// Observation state of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Being watched for intersection.
    Observed,
    /// Shown; no longer watched.
    Revealed,
}

/// CSS delay for the element at `index`.
#[must_use]
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", index as u64 * u64::from(step_ms))
}

/// Tracks which elements are watched and which have been revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    elements: BTreeMap<usize, RevealState>,
    connected: bool,
}

impl RevealTracker {
    /// Creates an empty, connected tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            connected: true,
        }
    }

    /// Starts watching `id`. Returns false when the element is already
    /// watched, already revealed, or the tracker was disconnected.
    pub fn observe(&mut self, id: usize) -> bool {
        if !self.connected || self.elements.contains_key(&id) {
            return false;
        }
        self.elements.insert(id, RevealState::Observed);
        true
    }

    /// State of `id`, if it was ever observed.
    #[must_use]
    pub fn state(&self, id: usize) -> Option<RevealState> {
        self.elements.get(&id).copied()
    }

    /// Whether `id` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, id: usize) -> bool {
        self.state(id) == Some(RevealState::Revealed)
    }

    /// Number of elements still being watched.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.elements
            .values()
            .filter(|s| **s == RevealState::Observed)
            .count()
    }

    /// Handles an intersection report of `(id, is_intersecting)` pairs.
    ///
    /// Returns the ids revealed by this report. The caller adds
    /// [`CLASS_VISIBLE`] to each and unobserves it.
    pub fn on_intersect(&mut self, entries: impl IntoIterator<Item = (usize, bool)>) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (id, intersecting) in entries {
            if !intersecting {
                continue;
            }
            if let Some(state) = self.elements.get_mut(&id) {
                if *state == RevealState::Observed {
                    *state = RevealState::Revealed;
                    revealed.push(id);
                }
            }
        }
        if !revealed.is_empty() {
            tracing::trace!(count = revealed.len(), "Revealed elements");
        }
        revealed
    }

    /// Reveals every watched element at once, for browsers without
    /// intersection observers.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        let ids: Vec<usize> = self
            .elements
            .iter()
            .filter(|(_, s)| **s == RevealState::Observed)
            .map(|(id, _)| *id)
            .collect();
        self.on_intersect(ids.into_iter().map(|id| (id, true)))
    }

    /// Stops all watching. Pending elements stay hidden.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.elements.retain(|_, s| *s == RevealState::Revealed);
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 60), "0ms");
        assert_eq!(stagger_delay(3, 60), "180ms");
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.observe(0));
        assert!(tracker.observe(1));
        assert!(!tracker.observe(1));

        assert_eq!(tracker.on_intersect([(0, true), (1, false)]), vec![0]);
        assert!(tracker.is_revealed(0));
        assert_eq!(tracker.pending(), 1);

        assert!(tracker.on_intersect([(0, true)]).is_empty());
        assert!(!tracker.observe(0));
        assert_eq!(tracker.state(0), Some(RevealState::Revealed));
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.on_intersect([(9, true)]).is_empty());
        assert_eq!(tracker.state(9), None);
    }

    #[test]
    fn test_reveal_all_fallback() {
        let mut tracker = RevealTracker::new();
        for id in 0..3 {
            tracker.observe(id);
        }
        tracker.on_intersect([(1, true)]);
        assert_eq!(tracker.reveal_all(), vec![0, 2]);
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn test_disconnect_stops_watching() {
        let mut tracker = RevealTracker::new();
        tracker.observe(0);
        tracker.observe(1);
        tracker.on_intersect([(0, true)]);

        tracker.disconnect();
        assert_eq!(tracker.pending(), 0);
        assert!(tracker.is_revealed(0));
        assert!(tracker.on_intersect([(1, true)]).is_empty());
        assert!(!tracker.observe(2));
    }
}
