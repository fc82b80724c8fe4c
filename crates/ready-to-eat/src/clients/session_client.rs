//! # Session Client
//!
//! The session-token-to-identity lookup service. Request handlers receive
//! this client explicitly — there is no ambient session state anywhere.

use crate::model::{Durability, Identity, Session, SessionCreate, SessionToken};
use crate::session_actor::SessionError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<Session>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Session> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<Session> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<SessionError>() {
                Ok(err) => *err,
                Err(other) => SessionError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl SessionClient {
    /// Opens a session for `identity` and returns the fresh token.
    #[instrument(skip(self))]
    pub async fn open(
        &self,
        identity: Identity,
        durability: Durability,
        now: DateTime<Utc>,
    ) -> Result<SessionToken, SessionError> {
        debug!("Sending request");
        self.inner
            .create(SessionCreate {
                identity,
                durability,
                now,
            })
            .await
            .map_err(Self::map_error)
    }

    /// Resolves a token to its identity. Unknown or expired tokens resolve
    /// to `None`; expiry is judged against the supplied `now`.
    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
    ) -> Result<Option<Identity>, SessionError> {
        debug!("Sending request");
        let session = self
            .inner
            .get(token.clone())
            .await
            .map_err(Self::map_error)?;
        Ok(session
            .filter(|s| !s.is_expired(now))
            .map(|s| s.identity))
    }

    /// Logout: drops the session record, whatever identity kind it holds.
    /// Unknown tokens are fine — logging out twice is not an error.
    #[instrument(skip(self))]
    pub async fn close(&self, token: &SessionToken) -> Result<(), SessionError> {
        debug!("Sending request");
        match self.inner.delete(token.clone()).await {
            Ok(()) => Ok(()),
            Err(FrameworkError::NotFound(_)) => Ok(()),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
