//! In-memory screening sessions. Nothing here outlives the process.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeSet;

/// One user's screening session: the currently uploaded résumés.
/// An empty résumé set is the "no files uploaded" state.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Last time any request touched this session.
    pub last_seen: Instant,
    pub resumes: ResumeSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resumes: Vec<String>,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id,
            created_at: session.created_at,
            resumes: session.resumes.names(),
        }
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> SessionSummary {
        let session = Session {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            last_seen: Instant::now(),
            resumes: ResumeSet::new(),
        };
        let summary = SessionSummary::from(&session);
        self.inner.write().await.insert(session.id, session);
        summary
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionSummary, AppError> {
        let mut sessions = self.inner.write().await;
        let session = touch(&mut sessions, id)?;
        Ok(SessionSummary::from(&*session))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    /// Swaps in a freshly uploaded résumé set, discarding the previous one.
    pub async fn replace_resumes(&self, id: Uuid, resumes: ResumeSet) -> Result<(), AppError> {
        let mut sessions = self.inner.write().await;
        let session = touch(&mut sessions, id)?;
        session.resumes = resumes;
        Ok(())
    }

    /// Back to the "no files uploaded" state.
    pub async fn clear_resumes(&self, id: Uuid) -> Result<(), AppError> {
        self.replace_resumes(id, ResumeSet::new()).await
    }

    /// Clones the session's résumés out of the lock. Fails with
    /// `MissingInput` while the session has no uploads.
    pub async fn uploaded_resumes(&self, id: Uuid) -> Result<ResumeSet, AppError> {
        let mut sessions = self.inner.write().await;
        let session = touch(&mut sessions, id)?;
        if session.resumes.is_empty() {
            return Err(AppError::MissingInput(
                "Upload at least one resume before running an action".to_string(),
            ));
        }
        Ok(session.resumes.clone())
    }

    /// Drops every session idle for longer than `ttl`. Returns how many went.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_seen.elapsed() <= ttl);
        before - sessions.len()
    }

    /// Spawns a background task that evicts idle sessions every `period`.
    pub fn spawn_sweeper(&self, ttl: Duration, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle(ttl).await;
                if evicted > 0 {
                    info!("Evicted {evicted} idle session(s)");
                }
            }
        })
    }
}

fn touch(sessions: &mut HashMap<Uuid, Session>, id: Uuid) -> Result<&mut Session, AppError> {
    let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
    session.last_seen = Instant::now();
    Ok(session)
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
