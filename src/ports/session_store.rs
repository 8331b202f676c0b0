//! SessionStore port - holder for in-flight assessment sessions.
//!
//! Sessions live only for the duration of an assessment run; nothing
//! persists across a reset. The store exists so the capture loop and the
//! answer handlers can share one session without coupling to a concrete
//! container.

use async_trait::async_trait;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{DomainError, SessionId};

/// Mutation applied to a stored session under the store's write lock.
pub type SessionMutation = Box<dyn FnOnce(&mut AssessmentSession) + Send>;

/// Port for storing and retrieving in-flight sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Saves (inserts or replaces) a session.
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError>;

    /// Finds a session by ID.
    async fn find(&self, id: &SessionId) -> Result<Option<AssessmentSession>, DomainError>;

    /// Applies `mutate` to the stored session atomically and returns the
    /// updated copy, or `None` when no session exists for `id`.
    ///
    /// Concurrent producers (the capture loop and the answer handlers) must
    /// mutate through here rather than round-tripping detached copies via
    /// `find`/`save`, which would let one producer overwrite the other's
    /// changes with a stale session.
    async fn update(
        &self,
        id: &SessionId,
        mutate: SessionMutation,
    ) -> Result<Option<AssessmentSession>, DomainError>;

    /// Removes a session, returning whether it existed.
    async fn remove(&self, id: &SessionId) -> Result<bool, DomainError>;
}
