//! # Courtside Core
//!
//! Core types shared by the Courtside designer crates: the error hierarchy,
//! percentage/angle helpers, user-facing notices and the event bus.

pub mod error;
pub mod event_bus;
pub mod notice;
pub mod units;

pub use error::{ApiError, ConfigError, DesignError, Error, Result};

pub use event_bus::{
    DesignerEvent, ElementEvent, EventBus, EventCategory, HistoryEvent, ListenerId, SaveEvent,
    SelectionEvent,
};

pub use notice::{Notice, NoticeLevel};
