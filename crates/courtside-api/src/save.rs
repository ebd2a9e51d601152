//! Save submission.
//!
//! At most one save runs per coordinator. A second `save` while one is in
//! flight fails immediately with `ApiError::SaveInFlight`; the flag is
//! released when the running save finishes or its future is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use courtside_core::{ApiError, DesignerEvent, Error, EventBus, Notice, Result, SaveEvent};
use courtside_designer::{DesignerState, SaveDesignRequest};
use uuid::Uuid;

use crate::client::DesignApi;

/// Clears the in-flight flag on drop
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Submits designs through a `DesignApi`, one at a time
pub struct SaveCoordinator {
    api: Arc<dyn DesignApi>,
    in_flight: AtomicBool,
    idempotency_keys: bool,
    events: Option<Arc<EventBus>>,
}

impl SaveCoordinator {
    pub fn new(api: Arc<dyn DesignApi>) -> Self {
        Self {
            api,
            in_flight: AtomicBool::new(false),
            idempotency_keys: true,
            events: None,
        }
    }

    /// Enables or disables the `Idempotency-Key` header.
    pub fn with_idempotency_keys(mut self, enabled: bool) -> Self {
        self.idempotency_keys = enabled;
        self
    }

    /// Attaches an event bus for save and notice events.
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// Whether a save is running.
    pub fn is_saving(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn emit(&self, event: DesignerEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }

    /// Sends a prepared request.
    pub async fn save(&self, request: &SaveDesignRequest) -> Result<()> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Save of '{}' rejected: already saving", request.name);
            return Err(ApiError::SaveInFlight.into());
        }
        let _guard = InFlightGuard(&self.in_flight);

        let key = self.idempotency_keys.then(Uuid::new_v4);
        tracing::info!("Saving design '{}' ({} elements)", request.name, request.elements.len());
        self.emit(DesignerEvent::Save(SaveEvent::Started {
            name: request.name.clone(),
        }));

        match self.api.save_design(request, key).await {
            Ok(()) => {
                tracing::info!("Saved design '{}'", request.name);
                self.emit(DesignerEvent::Save(SaveEvent::Succeeded {
                    name: request.name.clone(),
                }));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Saving design '{}' failed: {}", request.name, e);
                self.emit(DesignerEvent::Save(SaveEvent::Failed {
                    reason: e.to_string(),
                }));
                Err(e.into())
            }
        }
    }

    /// Validates the session, saves it and returns the notice to show.
    pub async fn save_state(&self, state: &DesignerState) -> Notice {
        let result = match SaveDesignRequest::from_state(state) {
            Ok(request) => self.save(&request).await,
            Err(e) => Err(Error::from(e)),
        };

        let notice = match &result {
            Ok(()) => Notice::success("Design saved", "Your design has been saved!"),
            Err(e) => Notice::from_error(e),
        };
        self.emit(DesignerEvent::Notice(notice.clone()));
        notice
    }
}

impl std::fmt::Debug for SaveCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveCoordinator")
            .field("in_flight", &self.is_saving())
            .field("idempotency_keys", &self.idempotency_keys)
            .finish()
    }
}
