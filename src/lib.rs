//! # Courtside
//!
//! Headless merchandise design canvas for the Courtside apparel storefront.
//! Customers compose image and text layers over a product mockup, tint the
//! garment, pick sizes and submit the design for print-on-demand.
//!
//! ## Architecture
//!
//! Courtside is organized as a workspace with multiple crates:
//!
//! 1. **courtside-core** - Error types, notices, percentage helpers, event bus
//! 2. **courtside-designer** - Layers, session state, pointer gestures,
//!    undo/redo, rendering, save/AI payloads, design files
//! 3. **courtside-api** - Save and AI endpoint client, in-flight save guard
//! 4. **courtside-settings** - Configuration files
//! 5. **courtside** - Logging setup and the command-line tool

use std::path::Path;

use anyhow::Context;

pub use courtside_core::{DesignerEvent, Error, EventBus, ListenerId, Notice, NoticeLevel, Result};
pub use courtside_designer as designer;
pub use courtside_designer::{DesignEditor, DesignFile, DesignerState, RenderPlan};
pub use courtside_settings::{Config, LoggingSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support, falling back to the configured level
/// - Pretty console output, or JSON lines when `json` is set
/// - Output on stderr so command output on stdout stays clean
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.level.to_ascii_lowercase()))
        .context("Invalid log filter")?;

    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to install log subscriber")?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to install log subscriber")?;
    }

    Ok(())
}

/// Forwards every bus event to the log.
///
/// Notices and save results are logged at info level (failures at warn),
/// layer, selection and history events at debug.
pub fn log_events(bus: &EventBus) -> ListenerId {
    bus.listen(|event| match event {
        DesignerEvent::Notice(notice) if notice.level == NoticeLevel::Error => {
            tracing::warn!("{}", notice)
        }
        DesignerEvent::Notice(notice) => tracing::info!("{}", notice),
        DesignerEvent::Save(courtside_core::SaveEvent::Failed { .. }) => {
            tracing::warn!("{}", event.description())
        }
        DesignerEvent::Save(_) => tracing::info!("{}", event.description()),
        _ => tracing::debug!(category = %event.category(), "{}", event.description()),
    })
}

/// Creates an empty editing session configured from `config`.
pub fn new_editor(config: &Config) -> DesignEditor {
    let mut state = DesignerState::new();
    state.set_zoom_limits(config.designer.zoom_limits());
    state.set_zoom(config.designer.default_zoom);
    state.show_guides = config.designer.show_guides;
    DesignEditor::with_history_capacity(state, config.designer.history_capacity)
}

/// Opens a design file in an editor configured from `config`.
pub fn open_design(path: &Path, config: &Config) -> anyhow::Result<DesignEditor> {
    let file = DesignFile::load_from_file(path)?;
    let mut editor = new_editor(config);
    editor.load(file.into_state());
    Ok(editor)
}

/// Loads the config at `path`, or the default location when `None`.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path(),
    };
    Config::load_or_default(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}
