//! Focus trap for the mobile menu.

/// Keys the trap cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapKey {
    /// Tab, with or without Shift.
    Tab {
        /// Shift held.
        shift: bool,
    },
    /// Escape.
    Escape,
    /// Anything else.
    Other,
}

impl TrapKey {
    /// Maps a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Tab" => Self::Tab { shift },
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Where focus should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    /// First focusable link in the menu.
    First,
    /// Last focusable link in the menu.
    Last,
    /// The control that opened the menu.
    Trigger,
}

/// What the caller should do with a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Call `preventDefault` on the event.
    pub prevent_default: bool,
    /// Move focus here.
    pub focus: Option<FocusMove>,
    /// The menu closed as a result.
    pub closed: bool,
}

/// Open state of a mobile menu and its Tab cycling rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusTrap {
    open: bool,
}

impl FocusTrap {
    /// Creates a closed trap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the menu. Returns where focus should go.
    pub fn open(&mut self) -> Option<FocusMove> {
        self.open = true;
        Some(FocusMove::First)
    }

    /// Closes the menu. Returns where focus should go.
    pub fn close(&mut self) -> Option<FocusMove> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(FocusMove::Trigger)
    }

    /// Trigger pressed: opens or closes.
    pub fn toggle(&mut self) -> Option<FocusMove> {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    /// Handles a key press while the menu may be open.
    ///
    /// `focused` is the index of the focused link among `link_count`
    /// focusable links, or `None` when focus is elsewhere.
    pub fn on_key(&mut self, key: TrapKey, focused: Option<usize>, link_count: usize) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::default();
        }

        match key {
            TrapKey::Escape => KeyOutcome {
                prevent_default: true,
                focus: self.close(),
                closed: true,
            },
            TrapKey::Tab { .. } if link_count == 0 => KeyOutcome {
                prevent_default: true,
                ..KeyOutcome::default()
            },
            TrapKey::Tab { shift } => {
                let last = link_count - 1;
                let target = match (shift, focused) {
                    (true, Some(0)) | (true, None) => Some(FocusMove::Last),
                    (false, Some(i)) if i == last => Some(FocusMove::First),
                    (false, None) => Some(FocusMove::First),
                    _ => None,
                };
                KeyOutcome {
                    prevent_default: target.is_some(),
                    focus: target,
                    closed: false,
                }
            }
            TrapKey::Other => KeyOutcome::default(),
        }
    }
}
