//! Draft a project status article on note.com from a YAML inventory.
//!
//! The pipeline is: load [`ProjectInventory`] -> [`render`] Markdown ->
//! derive a date-scoped title -> consult the [`DraftCache`] -> drive a
//! browser through login and the article composer with the
//! [`SessionController`] -> record the title once the draft is saved.
//!
//! The browser is reached through the [`BrowserSession`] seam; the
//! production implementation speaks W3C WebDriver, and
//! [`browser::fake`] provides a scripted stand-in for tests.

pub mod browser;
pub mod cache;
pub mod config;
pub mod controller;
pub mod draft;
pub mod error;
pub mod inventory;
pub mod orchestrator;
pub mod render;
pub mod site;
pub mod state;
pub mod wait;

pub use browser::{BrowserSession, ElementId, SessionLauncher, WebDriverLauncher};
pub use cache::DraftCache;
pub use config::{Credentials, DraftConfig, DriverConfig, Timing};
pub use controller::SessionController;
pub use draft::{DRAFT_LABEL, DraftDocument, draft_title};
pub use error::{DraftError, Result};
pub use inventory::{Category, Project, ProjectInventory};
pub use orchestrator::{Orchestrator, PreparedDraft, RunOutcome};
pub use render::render;
pub use site::SiteProfile;
pub use state::DraftState;
