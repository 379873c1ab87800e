//! Event aggregator keyed by event kind

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Discriminant used to route events to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PostPublished,
    UserRegistered,
}

/// Events published through the aggregator
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    PostPublished {
        post_id: Uuid,
        title: String,
        published_at: DateTime<Utc>,
    },
    UserRegistered {
        name: String,
    },
}

impl DomainEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::PostPublished { .. } => EventKind::PostPublished,
            DomainEvent::UserRegistered { .. } => EventKind::UserRegistered,
        }
    }

    /// Short human-readable description
    pub fn describe(&self) -> String {
        match self {
            DomainEvent::PostPublished { title, .. } => format!("post published '{}'", title),
            DomainEvent::UserRegistered { name } => format!("user registered '{}'", name),
        }
    }
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(&DomainEvent) + Send + Sync>;

/// Routes published events to the handlers subscribed to their kind
#[derive(Default)]
pub struct EventAggregator {
    handlers: HashMap<EventKind, Vec<EventHandler>>,
}

impl EventAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to one kind of event
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(&DomainEvent) + Send + Sync + 'static,
    {
        self.handlers.entry(kind).or_default().push(Arc::new(handler));
    }

    /// Deliver an event to its subscribers, in subscription order
    ///
    /// Returns the number of handlers invoked.
    pub fn publish(&self, event: &DomainEvent) -> usize {
        let Some(handlers) = self.handlers.get(&event.kind()) else {
            tracing::debug!("No subscribers for {:?}", event.kind());
            return 0;
        };

        for handler in handlers {
            handler(event);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }
}
