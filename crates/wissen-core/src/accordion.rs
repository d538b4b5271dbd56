//! Single-open accordion.

/// Open/closed flags for a row of accordion panels.
///
/// At most one panel is open at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    /// Creates an accordion with every panel closed.
    #[must_use]
    pub fn new(panels: usize) -> Self {
        Self {
            open: vec![false; panels],
        }
    }

    /// Creates an accordion from markup state, keeping only the first open
    /// panel.
    #[must_use]
    pub fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        let mut seen = false;
        let open = flags
            .into_iter()
            .map(|flag| {
                let keep = flag && !seen;
                seen |= flag;
                keep
            })
            .collect();
        Self { open }
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether there are no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Whether panel `index` is open. Out of range reads as closed.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Index of the open panel, if any.
    #[must_use]
    pub fn open_panel(&self) -> Option<usize> {
        self.open.iter().position(|&o| o)
    }

    /// Panel flags in order.
    pub fn panels(&self) -> impl Iterator<Item = bool> + '_ {
        self.open.iter().copied()
    }

    /// Closes `index` if it is open, otherwise opens it and closes the rest.
    ///
    /// Returns the new state of `index`; out-of-range indices change nothing
    /// and return `false`.
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(&was_open) = self.open.get(index) else {
            tracing::debug!(index, "Accordion index out of range");
            return false;
        };

        if was_open {
            self.open[index] = false;
        } else {
            for (i, flag) in self.open.iter_mut().enumerate() {
                *flag = i == index;
            }
        }
        !was_open
    }
}
