//! # Event bus
//!
//! The editor and the save coordinator publish `DesignerEvent`s here; a
//! front end listens for the categories it renders (layers, selection,
//! undo/redo buttons, save spinner, toasts).
//!
//! ```rust
//! use courtside_core::event_bus::{DesignerEvent, ElementEvent, EventBus, EventCategory};
//!
//! let bus = EventBus::new();
//! let listener = bus.listen_to(&[EventCategory::Element], |event| {
//!     println!("{}", event.description())
//! });
//!
//! assert_eq!(bus.publish(DesignerEvent::Element(ElementEvent::Added { id: 1 })), 1);
//! assert!(bus.remove_listener(listener));
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
