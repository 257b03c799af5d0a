//! Session lifecycle.
//!
//! `Initializing → Anonymous | Authenticated`, then login/register move to
//! `Authenticated` and logout back to `Anonymous`. Only these transitions
//! write the session; every view reads it through a cloned handle.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

use super::capabilities::Capabilities;
use super::store::StoredSession;
use crate::api::{jwt, ApiGateway};
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, SessionUser};
use crate::services::AuthService;
use crate::traits::{SessionStorage, StorageError};

/// A signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
    pub capabilities: Capabilities,
}

impl Session {
    fn from_stored(stored: StoredSession) -> Self {
        let capabilities = Capabilities::for_role(stored.user.role);
        Self {
            token: stored.token,
            user: stored.user,
            capabilities,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Initializing,
    Anonymous,
    Authenticated(Session),
}

/// Shared handle to the session. Clones observe the same state.
#[derive(Clone)]
pub struct SessionContext {
    state: Arc<RwLock<SessionState>>,
    storage: Arc<dyn SessionStorage>,
    gateway: Arc<ApiGateway>,
    auth: AuthService,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("state", &*self.read())
            .finish()
    }
}

impl SessionContext {
    /// A context in the `Initializing` state. Call [`SessionContext::init`]
    /// before use.
    pub fn new(storage: Arc<dyn SessionStorage>, gateway: Arc<ApiGateway>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::Initializing)),
            auth: AuthService::new(gateway.clone()),
            storage,
            gateway,
        }
    }

    /// Restore the persisted session.
    ///
    /// Malformed or expired data is discarded and the session starts
    /// anonymous. Storage errors are logged, never fatal.
    pub async fn init(&self) {
        let next = match self.storage.load().await {
            Ok(Some(stored)) if jwt::is_expired(&stored.token) => {
                info!("Stored session for {} has expired", stored.user.username);
                self.discard_stored().await;
                SessionState::Anonymous
            }
            Ok(Some(stored)) => {
                info!("Restored session for {}", stored.user.username);
                self.gateway.set_token(Some(stored.token.clone()));
                SessionState::Authenticated(Session::from_stored(stored))
            }
            Ok(None) => SessionState::Anonymous,
            Err(StorageError::Malformed(reason)) => {
                warn!("Discarding malformed stored session: {}", reason);
                self.discard_stored().await;
                SessionState::Anonymous
            }
            Err(e) => {
                warn!("Could not read stored session: {}", e);
                SessionState::Anonymous
            }
        };
        *self.write() = next;
    }

    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<SessionUser> {
        let response = self.auth.login(credentials).await?;
        info!("Signed in as {}", response.username);
        Ok(self.establish(&response).await)
    }

    pub async fn register(&self, data: &RegisterRequest) -> ClientResult<SessionUser> {
        let response = self.auth.register(data).await?;
        info!("Registered {}", response.username);
        Ok(self.establish(&response).await)
    }

    pub async fn logout(&self) {
        self.invalidate();
        self.discard_stored().await;
        info!("Signed out");
    }

    /// Drop the in-memory session at once; the stored copy is left for
    /// [`SessionContext::logout`] to remove.
    pub fn invalidate(&self) {
        self.gateway.set_token(None);
        *self.write() = SessionState::Anonymous;
    }

    /// Exchange the current token for a fresh one.
    pub async fn refresh(&self) -> ClientResult<()> {
        if self.session().is_none() {
            return Err(ClientError::Session("Not signed in".to_string()));
        }
        let response = self.auth.refresh().await?;
        self.establish(&response).await;
        Ok(())
    }

    /// The server's view of the signed-in user.
    pub async fn current_user(&self) -> ClientResult<SessionUser> {
        if self.session().is_none() {
            return Err(ClientError::Session("Not signed in".to_string()));
        }
        Ok(self.auth.me().await?)
    }

    async fn establish(&self, response: &AuthResponse) -> SessionUser {
        let stored = StoredSession::from_auth(response);
        if let Err(e) = self.storage.save(&stored).await {
            warn!("Could not persist session: {}", e);
        }
        self.gateway.set_token(Some(stored.token.clone()));
        let user = stored.user.clone();
        *self.write() = SessionState::Authenticated(Session::from_stored(stored));
        user
    }

    async fn discard_stored(&self) {
        if let Err(e) = self.storage.clear().await {
            warn!("Could not clear stored session: {}", e);
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|p| p.into_inner())
    }

    pub fn state(&self) -> SessionState {
        self.read().clone()
    }

    pub fn is_initializing(&self) -> bool {
        matches!(*self.read(), SessionState::Initializing)
    }

    /// The signed-in session, unless absent or its token has expired since.
    pub fn session(&self) -> Option<Session> {
        match &*self.read() {
            SessionState::Authenticated(session) if !jwt::is_expired(&session.token) => {
                Some(session.clone())
            }
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session().map(|s| s.user)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.session()
            .map(|s| s.capabilities)
            .unwrap_or_else(Capabilities::none)
    }
}
