//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so a front end can forward them
//! over whatever channel it renders from.

use serde::{Deserialize, Serialize};

use crate::notice::Notice;

/// Root event enum for all designer events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DesignerEvent {
    /// Layer list changes
    Element(ElementEvent),
    /// Selection changes
    Selection(SelectionEvent),
    /// Undo/redo movements
    History(HistoryEvent),
    /// Save lifecycle
    Save(SaveEvent),
    /// A toast to display
    Notice(Notice),
}

impl DesignerEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            DesignerEvent::Element(_) => EventCategory::Element,
            DesignerEvent::Selection(_) => EventCategory::Selection,
            DesignerEvent::History(_) => EventCategory::History,
            DesignerEvent::Save(_) => EventCategory::Save,
            DesignerEvent::Notice(_) => EventCategory::Notice,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            DesignerEvent::Element(e) => e.description(),
            DesignerEvent::Selection(e) => e.description(),
            DesignerEvent::History(e) => e.description(),
            DesignerEvent::Save(e) => e.description(),
            DesignerEvent::Notice(n) => n.to_string(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Element,
    Selection,
    History,
    Save,
    Notice,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Element => write!(f, "Element"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::History => write!(f, "History"),
            EventCategory::Save => write!(f, "Save"),
            EventCategory::Notice => write!(f, "Notice"),
        }
    }
}

/// Layer list events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementEvent {
    Added { id: u64 },
    Updated { id: u64 },
    Removed { id: u64 },
    /// The canonical z-order changed
    Reordered,
}

impl ElementEvent {
    pub fn description(&self) -> String {
        match self {
            ElementEvent::Added { id } => format!("Element {} added", id),
            ElementEvent::Updated { id } => format!("Element {} updated", id),
            ElementEvent::Removed { id } => format!("Element {} removed", id),
            ElementEvent::Reordered => "Layers reordered".to_string(),
        }
    }
}

/// Selection events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    Changed { id: Option<u64> },
}

impl SelectionEvent {
    pub fn description(&self) -> String {
        match self {
            SelectionEvent::Changed { id: Some(id) } => format!("Selected element {}", id),
            SelectionEvent::Changed { id: None } => "Selection cleared".to_string(),
        }
    }
}

/// Undo/redo events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HistoryEvent {
    Committed { depth: usize },
    Undone,
    Redone,
}

impl HistoryEvent {
    pub fn description(&self) -> String {
        match self {
            HistoryEvent::Committed { depth } => format!("History committed (depth {})", depth),
            HistoryEvent::Undone => "Undo".to_string(),
            HistoryEvent::Redone => "Redo".to_string(),
        }
    }
}

/// Save lifecycle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SaveEvent {
    Started { name: String },
    Succeeded { name: String },
    Failed { reason: String },
}

impl SaveEvent {
    pub fn description(&self) -> String {
        match self {
            SaveEvent::Started { name } => format!("Saving design '{}'", name),
            SaveEvent::Succeeded { name } => format!("Saved design '{}'", name),
            SaveEvent::Failed { reason } => format!("Save failed: {}", reason),
        }
    }
}
