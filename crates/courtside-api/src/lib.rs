//! # Courtside API
//!
//! Client side of the storefront endpoints the designer talks to:
//!
//! - `POST /api/designer/save` submits a finished design
//! - `POST /api/admin/designs/ai-optimize-placement`, `ai-color-scheme` and
//!   `ai-suggestions` return free-form JSON advice
//!
//! `DesignApi` is the seam: `HttpDesignApi` implements it over HTTP, tests
//! substitute an in-process implementation. `SaveCoordinator` wraps a
//! `DesignApi` with the one-save-at-a-time guard and turns outcomes into
//! user-facing notices.

pub mod ai;
pub mod client;
pub mod save;

pub use ai::{fetch_color_scheme, fetch_placement, fetch_suggestions};
pub use client::{DesignApi, HttpDesignApi, IDEMPOTENCY_HEADER};
pub use save::SaveCoordinator;

/// Endpoint paths, relative to the configured base URL
pub mod endpoints {
    pub const SAVE_DESIGN: &str = "/api/designer/save";
    pub const AI_OPTIMIZE_PLACEMENT: &str = "/api/admin/designs/ai-optimize-placement";
    pub const AI_COLOR_SCHEME: &str = "/api/admin/designs/ai-color-scheme";
    pub const AI_SUGGESTIONS: &str = "/api/admin/designs/ai-suggestions";
}
