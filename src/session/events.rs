//! Fire-and-forget observer notifications.

use crate::canvas::ItemId;

/// Notification emitted by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new shape was finalized and inserted into the canvas.
    DrawCompleted {
        /// Identity of the inserted shape
        id: ItemId,
    },
}

/// Named event channel observers subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEventKind {
    /// Draw gestures that finalized a shape
    DrawCompleted,
}

impl SessionEvent {
    /// The channel this event is delivered on.
    pub fn kind(&self) -> SessionEventKind {
        match self {
            SessionEvent::DrawCompleted { .. } => SessionEventKind::DrawCompleted,
        }
    }
}

/// Subscription handle returned by [`EventHub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerId(u64);

struct Handler {
    id: HandlerId,
    kind: SessionEventKind,
    callback: Box<dyn FnMut(&SessionEvent)>,
}

/// Subscribe/unsubscribe registry for session observers.
///
/// Delivery is synchronous and in subscription order; handlers have no
/// return value and cannot veto or reorder events.
#[derive(Default)]
pub struct EventHub {
    handlers: Vec<Handler>,
    next_id: u64,
}

impl EventHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for one event channel.
    pub fn subscribe(
        &mut self,
        kind: SessionEventKind,
        callback: impl FnMut(&SessionEvent) + 'static,
    ) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push(Handler {
            id,
            kind,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes a handler; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|h| h.id != id);
        self.handlers.len() != before
    }

    /// Delivers an event to every handler on its channel.
    pub fn emit(&mut self, event: &SessionEvent) {
        for handler in &mut self.handlers {
            if handler.kind == event.kind() {
                (handler.callback)(event);
            }
        }
    }
}
