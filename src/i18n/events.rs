// SPDX-License-Identifier: MPL-2.0
//! Listener registration for session notifications.
//!
//! Delivery is synchronous: handlers run on the caller's thread, inside the
//! call that triggered the event, in the order they subscribed.

use crate::domain::Language;

/// Notifications emitted by a [`LocalizationSession`](super::LocalizationSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Initialization ran. Fired before the first table is resolved.
    InitializationFinished,
    /// A table was installed; carries the language actually activated.
    LanguageChanged(Language),
}

/// Opaque token returned by [`Listeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

type Handler = Box<dyn FnMut(&SessionEvent)>;

/// Ordered list of event handlers.
#[derive(Default)]
pub struct Listeners {
    handlers: Vec<(SubscriptionHandle, Handler)>,
    next_id: u64,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionHandle
    where
        F: FnMut(&SessionEvent) + 'static,
    {
        let handle = SubscriptionHandle(self.next_id);
        self.next_id += 1;
        self.handlers.push((handle, Box::new(handler)));
        handle
    }

    /// Removes a handler. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != handle);
        self.handlers.len() != before
    }

    pub fn emit(&mut self, event: SessionEvent) {
        for (_, handler) in &mut self.handlers {
            handler(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.handlers.len())
            .finish()
    }
}
