//! In-memory record store.
//!
//! Owns the user registry, the target sequence and both id counters behind a
//! single mutex. Every operation is one short critical section; nothing here
//! performs I/O, logs, or holds the lock across an await point.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use crate::models::{NewTarget, NewUser, Target, User};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("User already exists")]
    UsernameTaken,

    /// Returned for both an unknown username and a wrong secret.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

struct StoreInner {
    users: HashMap<String, User>,
    targets: Vec<Target>,
    next_user_id: i64,
    next_target_id: i64,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            targets: Vec::new(),
            next_user_id: 1,
            next_target_id: 1,
        }
    }
}

#[derive(Default)]
pub struct RecordStore {
    inner: Mutex<StoreInner>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Critical sections never leave state half-written, so a poisoned lock
    // still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Registers a new user, assigning the next user id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UsernameTaken`] if the username is already
    /// registered. The store is left untouched in that case.
    pub fn register(&self, candidate: NewUser) -> Result<User, StoreError> {
        let mut inner = self.lock();

        if inner.users.contains_key(&candidate.username) {
            return Err(StoreError::UsernameTaken);
        }

        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = candidate.with_id(id);
        inner.users.insert(user.username.clone(), user.clone());

        Ok(user)
    }

    /// Checks a username/secret pair with exact, case-sensitive comparison.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCredentials`] if the user does not exist
    /// or the secret does not match.
    pub fn authenticate(&self, username: &str, secret: &str) -> Result<User, StoreError> {
        let inner = self.lock();

        match inner.users.get(username) {
            Some(user) if user.secret == secret => Ok(user.clone()),
            _ => Err(StoreError::InvalidCredentials),
        }
    }

    /// Appends a target, assigning the next target id. Always succeeds.
    pub fn append_target(&self, candidate: NewTarget) -> Target {
        let mut inner = self.lock();

        let id = inner.next_target_id;
        inner.next_target_id += 1;

        let target = candidate.with_id(id);
        inner.targets.push(target.clone());

        target
    }

    /// Snapshot of every target in append order.
    #[must_use]
    pub fn list_targets(&self) -> Vec<Target> {
        self.lock().targets.clone()
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.lock().targets.len()
    }

    #[cfg(test)]
    fn get_user(&self, username: &str) -> Option<User> {
        self.lock().users.get(username).cloned()
    }
}
