/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::*;
use crate::models::Role;
use std::sync::Mutex;

/// Token and role exactly as they sit in durable storage. Either may be
/// missing or hand-edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl StoredSession {
    /// Token if one is stored; an empty string counts as logged out.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|r| !r.trim().is_empty())
    }

    pub fn session(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?.to_string(),
            role: Role::from_login(self.role()?)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

/// Durable home of the session. Token and role are written and cleared
/// together.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> ConnectorResult<StoredSession>;
    fn save(&self, session: &Session) -> ConnectorResult<()>;
    fn clear(&self) -> ConnectorResult<()>;
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<StoredSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(stored: StoredSession) -> Self {
        MemorySessionStore {
            inner: Mutex::new(stored),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ConnectorResult<StoredSession> {
        self.inner
            .lock()
            .map(|s| s.clone())
            .map_err(|e| ConnectorError::Storage(e.to_string()))
    }

    fn save(&self, session: &Session) -> ConnectorResult<()> {
        let mut stored = self
            .inner
            .lock()
            .map_err(|e| ConnectorError::Storage(e.to_string()))?;

        stored.token = Some(session.token.clone());
        stored.role = Some(session.role.to_string());
        Ok(())
    }

    fn clear(&self) -> ConnectorResult<()> {
        let mut stored = self
            .inner
            .lock()
            .map_err(|e| ConnectorError::Storage(e.to_string()))?;

        *stored = StoredSession::default();
        Ok(())
    }
}

/// Exchanges credentials for a session and stores it. Nothing is stored
/// when the server hands back a role this client does not know.
pub async fn login<A, S>(
    api: &A,
    store: &S,
    email: &str,
    password: &str,
) -> ConnectorResult<Session>
where
    A: crate::api::AgencyApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let res = api.login(email, password).await?;

    let role = match Role::from_login(&res.role) {
        Some(role) => role,
        None => return Err(ConnectorError::RoleNotRecognized(res.role)),
    };

    let session = Session {
        token: res.token,
        role,
    };

    store.save(&session)?;
    tracing::info!(%role, "logged in");

    Ok(session)
}

pub fn logout<S: SessionStore + ?Sized>(store: &S) -> ConnectorResult<()> {
    store.clear()?;
    tracing::info!("logged out");
    Ok(())
}
