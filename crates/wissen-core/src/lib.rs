//! State machines behind the Wissen dashboard and landing pages.
//!
//! Everything here is plain Rust with no DOM types. The browser side lives
//! in `wissen-web`, which implements the [`traits`] ports over `web-sys`.
//!
//! ## Modules
//!
//! - [`sidebar`] - Responsive sidebar open/close state and persistence
//! - [`router`] - In-place page switching with history integration
//! - [`shell`] - Sidebar and router behind one handle
//! - [`pages`] - Static page catalog
//! - [`accordion`], [`navbar`], [`reveal`], [`focus_trap`] - Landing-page widgets
//! - [`config`] - Startup configuration

pub mod accordion;
pub mod config;
pub mod error;
pub mod focus_trap;
pub mod navbar;
pub mod pages;
pub mod reveal;
pub mod router;
pub mod shell;
pub mod sidebar;
pub mod storage;
pub mod traits;
pub mod viewport;

pub use accordion::Accordion;
pub use config::{Features, RevealConfig, UiConfig};
pub use error::{UiError, UiResult};
pub use focus_trap::{FocusMove, FocusTrap, KeyOutcome, TrapKey};
pub use navbar::ScrollEffect;
pub use pages::{EmbedSlot, PageCatalog, PageConfig};
pub use reveal::RevealTracker;
pub use router::{ClickIntent, HistoryState, Navigation, PagePanel, PageRouter, RenderOptions};
pub use shell::DashboardShell;
pub use sidebar::{Icon, SidebarController, SidebarFrame, SidebarOptions, SidebarState};
pub use storage::MemoryStore;
pub use traits::{PageView, PreferenceStore, SidebarView, ViewportQuery};
pub use viewport::{Breakpoint, FixedViewport, ViewportClass};
