//! Property tests for the UI state machines.

use proptest::prelude::*;
use wissen_core::{
    Accordion, Breakpoint, FixedViewport, MemoryStore, RevealTracker, SidebarController,
    SidebarFrame, SidebarView,
};

#[derive(Default)]
struct LastFrame(Option<SidebarFrame>);

impl SidebarView for LastFrame {
    fn apply_open_state(&mut self, frame: &SidebarFrame) {
        self.0 = Some(*frame);
    }
}

/// Stored preference as it may appear in local storage.
fn stored_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("true".to_string())),
        Just(Some("false".to_string())),
        "[a-z]{0,6}".prop_map(Some),
    ]
}

fn store_from(stored: Option<String>) -> MemoryStore {
    match stored {
        Some(raw) => MemoryStore::with_raw(raw),
        None => MemoryStore::new(),
    }
}

proptest! {
    /// Property: on narrow viewports an open sidebar renders open but stores false
    #[test]
    fn prop_narrow_never_persists_open(
        width in 0.0f64..=960.0,
        stored in stored_strategy()
    ) {
        let viewport = FixedViewport::new(Breakpoint::new(960), width);
        let mut sidebar = SidebarController::new(viewport, store_from(stored), LastFrame::default());

        sidebar.set_open(true, true);

        prop_assert!(sidebar.is_open());
        let frame = sidebar.view().0.unwrap();
        prop_assert!(frame.open);
        prop_assert!(frame.overlay_visible);
        prop_assert_eq!(sidebar.store().raw(), Some("false"));
    }

    /// Property: toggling twice restores the original state
    #[test]
    fn prop_double_toggle_is_identity(
        width in 200.0f64..2000.0,
        initial in any::<bool>(),
        stored in stored_strategy()
    ) {
        let viewport = FixedViewport::new(Breakpoint::new(960), width);
        let mut sidebar = SidebarController::new(viewport, store_from(stored), LastFrame::default());
        sidebar.set_open(initial, false);

        sidebar.toggle();
        sidebar.toggle();

        prop_assert_eq!(sidebar.is_open(), initial);
        prop_assert_eq!(sidebar.view().0.unwrap().aria_expanded, initial);
    }

    /// Property: on wide viewports the stored value follows the state
    #[test]
    fn prop_wide_persists_state(width in 961.0f64..4000.0, open in any::<bool>()) {
        let viewport = FixedViewport::new(Breakpoint::new(960), width);
        let mut sidebar = SidebarController::new(viewport, MemoryStore::new(), LastFrame::default());
        sidebar.set_open(open, true);
        prop_assert_eq!(sidebar.store().raw(), Some(if open { "true" } else { "false" }));
    }

    /// Property: widening restores the stored flag, or the default, without writing
    #[test]
    fn prop_breakpoint_to_wide_restores_without_persisting(
        narrow_width in 0.0f64..=960.0,
        wide_width in 961.0f64..4000.0,
        stored in stored_strategy()
    ) {
        let expected = match stored.as_deref() {
            Some(raw) => raw == "true",
            None => true,
        };
        let viewport = FixedViewport::new(Breakpoint::new(960), narrow_width);
        let mut sidebar =
            SidebarController::new(viewport.clone(), store_from(stored.clone()), LastFrame::default());

        viewport.resize(wide_width);
        sidebar.on_breakpoint_change(false);

        prop_assert_eq!(sidebar.is_open(), expected);
        prop_assert_eq!(sidebar.view().0.unwrap().open, expected);
        prop_assert_eq!(sidebar.store().writes(), 0);
        prop_assert_eq!(sidebar.store().raw(), stored.as_deref());
    }

    /// Property: opening panel i leaves every other panel closed
    #[test]
    fn prop_accordion_single_open(
        panels in 1usize..12,
        presses in prop::collection::vec(0usize..16, 1..40)
    ) {
        let mut accordion = Accordion::new(panels);
        for index in presses {
            let opened = accordion.toggle(index);
            if opened {
                for j in 0..panels {
                    prop_assert_eq!(accordion.is_open(j), j == index);
                }
            }
            prop_assert!(accordion.panels().filter(|o| *o).count() <= 1);
        }
    }

    /// Property: each element is revealed at most once, however often it intersects
    #[test]
    fn prop_reveal_one_shot(
        elements in 1usize..20,
        reports in prop::collection::vec((0usize..25, any::<bool>()), 0..100)
    ) {
        let mut tracker = RevealTracker::new();
        for id in 0..elements {
            tracker.observe(id);
        }

        let mut revealed = Vec::new();
        for report in reports {
            revealed.extend(tracker.on_intersect([report]));
            prop_assert!(!tracker.observe(report.0.min(elements - 1)));
        }

        let mut unique = revealed.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), revealed.len());
        prop_assert!(revealed.iter().all(|id| *id < elements));
    }
}
