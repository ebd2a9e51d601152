//! Event bus implementation.
//!
//! The bus is owned by whoever drives the editing session and shared with
//! the editor and the save coordinator through an `Arc`; there is no
//! process-wide instance.

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::events::{DesignerEvent, EventCategory};

/// Buffered events per async receiver before it starts lagging
const CHANNEL_CAPACITY: usize = 256;

/// Handle returned by `listen`, used to remove the listener again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

type Handler = Arc<dyn Fn(&DesignerEvent) + Send + Sync>;

struct Listener {
    id: ListenerId,
    /// `None` listens to every category
    categories: Option<Vec<EventCategory>>,
    handler: Handler,
}

impl Listener {
    fn wants(&self, category: EventCategory) -> bool {
        self.categories
            .as_ref()
            .map_or(true, |categories| categories.contains(&category))
    }
}

/// Publish/subscribe hub for designer events
///
/// Listeners are plain closures called on the publishing thread. Front ends
/// running on tokio can take a broadcast `receiver()` instead. A bus built
/// with `with_journal` also keeps the most recent events for inspection.
pub struct EventBus {
    sender: broadcast::Sender<DesignerEvent>,
    listeners: RwLock<Vec<Listener>>,
    next_id: AtomicU64,
    journal: Option<Mutex<VecDeque<DesignerEvent>>>,
    journal_capacity: usize,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            journal: None,
            journal_capacity: 0,
        }
    }

    /// Creates a bus that remembers the last `capacity` published events.
    pub fn with_journal(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            journal: Some(Mutex::new(VecDeque::with_capacity(capacity))),
            journal_capacity: capacity,
            ..Self::new()
        }
    }

    /// Delivers an event to every interested listener and receiver.
    ///
    /// Returns how many listeners and receivers it reached. Listeners may
    /// add or remove listeners from inside their handler.
    pub fn publish(&self, event: DesignerEvent) -> usize {
        tracing::trace!("Event: {}", event.description());

        if let Some(journal) = &self.journal {
            let mut journal = journal.lock();
            if journal.len() == self.journal_capacity {
                journal.pop_front();
            }
            journal.push_back(event.clone());
        }

        let category = event.category();
        let handlers: Vec<Handler> = self
            .listeners
            .read()
            .iter()
            .filter(|listener| listener.wants(category))
            .map(|listener| Arc::clone(&listener.handler))
            .collect();
        for handler in &handlers {
            handler(&event);
        }

        let receivers = self.sender.send(event).unwrap_or(0);
        handlers.len() + receivers
    }

    /// Adds a listener for every event.
    pub fn listen<F>(&self, handler: F) -> ListenerId
    where
        F: Fn(&DesignerEvent) + Send + Sync + 'static,
    {
        self.add_listener(None, Arc::new(handler))
    }

    /// Adds a listener for events of the given categories only.
    pub fn listen_to<F>(&self, categories: &[EventCategory], handler: F) -> ListenerId
    where
        F: Fn(&DesignerEvent) + Send + Sync + 'static,
    {
        self.add_listener(Some(categories.to_vec()), Arc::new(handler))
    }

    fn add_listener(&self, categories: Option<Vec<EventCategory>>, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push(Listener {
            id,
            categories,
            handler,
        });
        tracing::debug!("Added {}", id);
        id
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|listener| listener.id != id);
        before != listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Receiver for consuming events from a tokio task.
    pub fn receiver(&self) -> broadcast::Receiver<DesignerEvent> {
        self.sender.subscribe()
    }

    /// Journaled events, oldest first. Always empty without a journal.
    pub fn journal(&self) -> Vec<DesignerEvent> {
        self.journal
            .as_ref()
            .map(|journal| journal.lock().iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear_journal(&self) {
        if let Some(journal) = &self.journal {
            journal.lock().clear();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .field("journal_capacity", &self.journal.as_ref().map(|_| self.journal_capacity))
            .finish()
    }
}
