//! Design files.
//!
//! A design is saved as pretty-printed JSON holding a format version,
//! metadata and the full session state.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::designer_state::DesignerState;

/// Design file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete design file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    pub state: DesignerState,
}

/// Design metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
}

impl DesignFile {
    /// Create a new design file around a session state
    pub fn new(state: DesignerState) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DesignMetadata {
                id: Uuid::new_v4(),
                name: state.design_name.clone(),
                created: now,
                modified: now,
                author: String::new(),
            },
            state,
        }
    }

    /// Replace the state, keeping creation metadata
    pub fn update_state(&mut self, state: DesignerState) {
        self.metadata.name = state.design_name.clone();
        self.metadata.modified = Utc::now();
        self.state = state;
    }

    /// Save design to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize design")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write design file {}", path.display()))?;

        tracing::info!("Saved design '{}' to {}", self.metadata.name, path.display());
        Ok(())
    }

    /// Load design from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read design file {}", path.display()))?;

        let mut design: DesignFile =
            serde_json::from_str(&content).context("Failed to parse design file")?;

        if design.version.split('.').next() != FILE_FORMAT_VERSION.split('.').next() {
            bail!("Unsupported design file version {}", design.version);
        }

        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = design.state.elements.iter().find(|e| !seen.insert(e.id)) {
            bail!("Design file contains duplicate element id {}", dup.id);
        }
        design
            .state
            .normalize()
            .context("Design file contains an invalid element")?;

        tracing::info!(
            "Loaded design '{}' ({} elements) from {}",
            design.metadata.name,
            design.state.elements.len(),
            path.display()
        );
        Ok(design)
    }

    /// Consumes the file, returning the state ready for editing.
    ///
    /// Out-of-range geometry is clamped and a selection pointing at a
    /// missing element is cleared.
    pub fn into_state(self) -> DesignerState {
        let mut state = self.state;
        if let Err(e) = state.normalize() {
            tracing::warn!("Design '{}' kept an invalid value: {}", self.metadata.name, e);
        }
        state
    }
}
