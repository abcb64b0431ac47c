use moka::ops::compute::{CompResult, Op};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::core::wizard::{WizardError, WizardState};

/// Errors that can occur with session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Invalid wizard transition: {0}")]
    Transition(#[from] WizardError),
}

/// In-memory wizard session store
///
/// Each session id owns exactly one `WizardState`. Entries expire once idle
/// for the configured TTL and nothing is written outside the process.
pub struct SessionStore {
    sessions: moka::future::Cache<String, WizardState>,
    ttl_secs: u64,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(max_sessions: u64, ttl_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(Duration::from_secs(ttl_secs))
            .build();

        Self { sessions, ttl_secs }
    }

    /// Start a new session at step 1
    pub async fn create(&self) -> (String, WizardState) {
        let id = Uuid::new_v4().to_string();
        let state = WizardState::new();
        self.sessions.insert(id.clone(), state.clone()).await;

        tracing::debug!("Session created: {}", id);
        (id, state)
    }

    /// Get the current state of a session
    pub async fn get(&self, id: &str) -> Result<WizardState, SessionError> {
        self.sessions
            .get(id)
            .await
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Apply a transition and store the state it returns
    ///
    /// Runs as a compute on the session's entry, so it is serialized with
    /// other applies and removals of the same id. A failed transition leaves
    /// the stored state untouched and a session removed meanwhile stays gone.
    pub async fn apply<F>(&self, id: &str, transition: F) -> Result<WizardState, SessionError>
    where
        F: FnOnce(WizardState) -> Result<WizardState, WizardError>,
    {
        let mut outcome = Err(SessionError::NotFound(id.to_string()));

        self.sessions
            .entry_by_ref(id)
            .and_compute_with(|entry| {
                let op = match entry {
                    Some(entry) => {
                        let current = entry.into_value();
                        let from = current.step();
                        match transition(current) {
                            Ok(next) => {
                                tracing::debug!("Session {} moved {:?} -> {:?}", id, from, next.step());
                                outcome = Ok(next.clone());
                                Op::Put(next)
                            }
                            Err(e) => {
                                outcome = Err(e.into());
                                Op::Nop
                            }
                        }
                    }
                    None => Op::Nop,
                };
                std::future::ready(op)
            })
            .await;

        outcome
    }

    /// Reset a session back to step 1
    pub async fn reset(&self, id: &str) -> Result<WizardState, SessionError> {
        self.apply(id, |state| Ok(state.reset())).await
    }

    /// Drop a session entirely
    pub async fn remove(&self, id: &str) -> Result<(), SessionError> {
        let result = self
            .sessions
            .entry_by_ref(id)
            .and_compute_with(|entry| {
                std::future::ready(match entry {
                    Some(_) => Op::Remove,
                    None => Op::Nop,
                })
            })
            .await;

        match result {
            CompResult::Removed(_) => {
                tracing::debug!("Session removed: {}", id);
                Ok(())
            }
            _ => Err(SessionError::NotFound(id.to_string())),
        }
    }

    /// Get store statistics
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            active_sessions: self.sessions.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Session store statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub active_sessions: u64,
    pub ttl_secs: u64,
}
