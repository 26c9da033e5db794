// SPDX-License-Identifier: MPL-2.0
//! Owns every live [`LocalizationSession`] and forwards host lifecycle
//! signals to all of them.
//!
//! The registry is created by the host's composition root and passed by
//! reference to whatever needs to enumerate sessions.

use super::session::LocalizationSession;
use crate::domain::Language;
use crate::error::Result;

/// Identifies a registered session. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Vec<(SessionId, LocalizationSession)>,
    next_id: u64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, session: LocalizationSession) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        tracing::debug!("Registered localization session {}", session.name());
        self.sessions.push((id, session));
        id
    }

    /// Removes and returns a session, keeping the others in order.
    pub fn unregister(&mut self, id: SessionId) -> Option<LocalizationSession> {
        let index = self.sessions.iter().position(|(sid, _)| *sid == id)?;
        Some(self.sessions.remove(index).1)
    }

    pub fn get(&self, id: SessionId) -> Option<&LocalizationSession> {
        self.sessions
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, session)| session)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut LocalizationSession> {
        self.sessions
            .iter_mut()
            .find(|(sid, _)| *sid == id)
            .map(|(_, session)| session)
    }

    /// Sessions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SessionId, &LocalizationSession)> {
        self.sessions.iter().map(|(id, session)| (*id, session))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Initializes every session with the host's language.
    ///
    /// Every session is visited even if one fails; the first error is
    /// returned once the broadcast is done.
    pub fn on_host_ready_for_initialization(&mut self, requested: Language) -> Result<()> {
        self.broadcast(|session| session.initialize(requested))
    }

    /// Switches every session to `language`, or to its own default when the
    /// package lacks it. Errors are reported like
    /// [`on_host_ready_for_initialization`](Self::on_host_ready_for_initialization).
    pub fn on_host_language_preference_changed(&mut self, language: Language) -> Result<()> {
        self.broadcast(|session| session.update_localization(language))
    }

    fn broadcast<F>(&mut self, mut signal: F) -> Result<()>
    where
        F: FnMut(&mut LocalizationSession) -> Result<()>,
    {
        let mut first_error = None;
        for (_, session) in &mut self.sessions {
            if let Err(err) = signal(session) {
                tracing::error!("Localization session {} failed: {}", session.name(), err);
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
