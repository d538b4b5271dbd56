//! # Page Catalog
//!
//! Static display metadata for each dashboard page.

use serde::{Deserialize, Serialize};

/// Page shown when a key is unknown or nothing else applies.
pub const DEFAULT_PAGE: &str = "dashboard";

/// Hint shown in an embed slot that has no specific hint.
pub const DEFAULT_EMBED_HINT: &str = "Add your analytics iframe here when it is ready.";

/// Slot where an analytics iframe can be dropped in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedSlot {
    /// Hint text shown until the embed exists.
    #[serde(default)]
    pub hint: Option<String>,
}

impl EmbedSlot {
    /// Hint text, falling back to [`DEFAULT_EMBED_HINT`].
    #[must_use]
    pub fn hint(&self) -> &str {
        self.hint.as_deref().unwrap_or(DEFAULT_EMBED_HINT)
    }
}

/// Display metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Header title and document title suffix.
    pub title: String,
    /// Header subtitle.
    pub subtitle: String,
    /// Placeholder line in the panel body.
    pub placeholder: String,
    /// Supporting copy under the panel heading.
    pub description: String,
    /// Embed slot, if the page allows one.
    #[serde(default)]
    pub embed: Option<EmbedSlot>,
}

impl PageConfig {
    /// Whether the page reserves an embed slot.
    #[must_use]
    pub fn allows_embed(&self) -> bool {
        self.embed.is_some()
    }
}

/// Ordered, read-only mapping from page key to [`PageConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCatalog {
    entries: Vec<(String, PageConfig)>,
}

impl PageCatalog {
    /// Builds a catalog from `(key, config)` pairs.
    ///
    /// Later duplicates of a key are dropped.
    pub fn new(entries: impl IntoIterator<Item = (String, PageConfig)>) -> Self {
        let mut unique: Vec<(String, PageConfig)> = Vec::new();
        for (key, config) in entries {
            if unique.iter().any(|(k, _)| *k == key) {
                tracing::warn!(page = %key, "Duplicate page key ignored");
                continue;
            }
            unique.push((key, config));
        }
        Self { entries: unique }
    }

    /// Looks up a page.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PageConfig> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, config)| config)
    }

    /// Whether `key` names a page.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Looks up a page, falling back to [`DEFAULT_PAGE`] and then to the first
    /// entry. Only an empty catalog yields `None`.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&PageConfig> {
        self.get(key)
            .or_else(|| self.get(DEFAULT_PAGE))
            .or_else(|| self.entries.first().map(|(_, c)| c))
    }

    /// Page keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The seller dashboard pages.
    #[must_use]
    pub fn dashboard() -> Self {
        fn page(
            key: &str,
            title: &str,
            subtitle: &str,
            description: &str,
            embed_hint: Option<&str>,
        ) -> (String, PageConfig) {
            (
                key.to_string(),
                PageConfig {
                    title: title.to_string(),
                    subtitle: subtitle.to_string(),
                    placeholder: format!("Welcome to {title}"),
                    description: description.to_string(),
                    embed: embed_hint.map(|hint| EmbedSlot {
                        hint: Some(hint.to_string()),
                    }),
                },
            )
        }

        Self::new([
            page(
                "dashboard",
                "Dashboard",
                "Business pulse",
                "Use this space to monitor revenue, demand, and fulfilment KPIs in real time.",
                Some("Drop in your Metabase dashboard iframe once it is ready."),
            ),
            page(
                "action-list",
                "Action List",
                "Execution queue",
                "Track priorities and keep the team focused on the highest-impact work.",
                Some("Embed your workflow or SLA tracker once the Metabase view is published."),
            ),
            page(
                "account-health",
                "Account Health",
                "Seller compliance",
                "Stay ahead of policy updates, risk indicators, and compliance follow-ups.",
                Some("Add Metabase compliance scorecards or alert feeds here when available."),
            ),
            page(
                "ad-spend",
                "Ad Spend",
                "Marketing performance",
                "Analyse advertising efficiency and uncover optimisation opportunities fast.",
                Some("Integrate spend efficiency charts or campaign pacing dashboards in this slot."),
            ),
            page(
                "inventory",
                "Inventory",
                "Stock control",
                "Balance supply and demand with accurate replenishment and coverage insights.",
                Some("Surface aged stock or sell-through analytics by embedding a Metabase iframe."),
            ),
            page(
                "campaigns",
                "Campaigns",
                "Lifecycle planning",
                "Organise launch calendars, briefs, and retrospectives in one workspace.",
                None,
            ),
            page(
                "profile",
                "Profile",
                "Account preferences",
                "Manage personal settings, notification choices, and security controls.",
                None,
            ),
        ])
    }
}

impl Default for PageCatalog {
    fn default() -> Self {
        Self::dashboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_catalog() {
        let catalog = PageCatalog::dashboard();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.keys().next(), Some("dashboard"));

        let inventory = catalog.get("inventory").unwrap();
        assert_eq!(inventory.placeholder, "Welcome to Inventory");
        assert!(inventory.allows_embed());

        assert!(!catalog.get("campaigns").unwrap().allows_embed());
        assert!(!catalog.get("profile").unwrap().allows_embed());
    }

    #[test]
    fn test_resolve_falls_back_to_dashboard() {
        let catalog = PageCatalog::dashboard();
        assert_eq!(catalog.resolve("nope").unwrap().title, "Dashboard");
        assert_eq!(catalog.resolve("ad-spend").unwrap().title, "Ad Spend");
        assert!(PageCatalog::new([]).resolve("dashboard").is_none());
    }

    #[test]
    fn test_embed_hint_default() {
        let slot = EmbedSlot { hint: None };
        assert_eq!(slot.hint(), DEFAULT_EMBED_HINT);
    }

    #[test]
    fn test_duplicate_keys_keep_first() {
        let first = PageCatalog::dashboard().get("profile").unwrap().clone();
        let mut second = first.clone();
        second.title = "Other".into();

        let catalog = PageCatalog::new([
            ("profile".to_string(), first),
            ("profile".to_string(), second),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve("profile").unwrap().title, "Profile");
    }
}
