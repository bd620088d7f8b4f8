//! In-memory collaborators for view tests

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::core::client::{PageQuery, Services, UserDirectory, UserListing};
use crate::core::dialog::Confirmer;
use crate::error::{ApiError, Result};
use crate::models::{User, UserPatch};

pub fn user(id: i64, name: &str) -> User {
    User {
        user_id: id,
        user_name: name.to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: format!("{}@example.com", name),
        user_status: "A".to_string(),
        department: None,
    }
}

/// Backend call seen by a fake
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(i64),
    Create(User),
    Replace(i64, User),
    Patch(i64, UserPatch),
    Delete(String),
    Fetch,
}

/// Fake backend implementing both adapter traits over one user table
#[derive(Default)]
pub struct FakeBackend {
    pub users: Mutex<Vec<User>>,
    pub calls: Mutex<Vec<Call>>,
    pub fail_fetch: Mutex<bool>,
    pub fail_writes: Mutex<bool>,
    /// When set, reads and saves wait for a notification before answering
    pub gate: Option<Arc<Notify>>,
}

impl FakeBackend {
    pub fn with_users(users: Vec<User>) -> Arc<Self> {
        Arc::new(Self {
            users: Mutex::new(users),
            ..Default::default()
        })
    }

    pub fn gated(users: Vec<User>, gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            users: Mutex::new(users),
            gate: Some(gate),
            ..Default::default()
        })
    }

    pub fn services(self: &Arc<Self>) -> Services {
        Services {
            directory: self.clone(),
            listing: self.clone(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::Fetch).count()
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        *self.fail_fetch.lock().unwrap() = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }

    fn write_failure(&self) -> Option<ApiError> {
        if *self.fail_writes.lock().unwrap() {
            Some(ApiError::HttpError {
                status: 500,
                message: "write failed".to_string(),
            })
        } else {
            None
        }
    }
}

#[async_trait]
impl UserDirectory for FakeBackend {
    async fn get_user(&self, user_id: i64) -> std::result::Result<UserPatch, ApiError> {
        self.record(Call::Get(user_id));
        self.wait_for_gate().await;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned()
            .map(UserPatch::from)
            .ok_or_else(|| ApiError::NotFound(format!("/users/{}", user_id)))
    }

    async fn create_user(&self, user: &User) -> std::result::Result<UserPatch, ApiError> {
        self.record(Call::Create(user.clone()));
        self.wait_for_gate().await;
        if let Some(err) = self.write_failure() {
            return Err(err);
        }
        let mut users = self.users.lock().unwrap();
        let mut created = user.clone();
        created.user_id = users.iter().map(|u| u.user_id).max().unwrap_or(0) + 1;
        users.push(created.clone());
        Ok(UserPatch::from(created))
    }

    async fn replace_user(
        &self,
        user_id: i64,
        user: &User,
    ) -> std::result::Result<UserPatch, ApiError> {
        self.record(Call::Replace(user_id, user.clone()));
        self.wait_for_gate().await;
        if let Some(err) = self.write_failure() {
            return Err(err);
        }
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.user_id == user_id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(UserPatch::from(user.clone()))
            }
            None => Err(ApiError::NotFound(format!("/users/{}", user_id))),
        }
    }

    async fn patch_user(&self, user_id: i64, patch: &UserPatch) -> std::result::Result<(), ApiError> {
        self.record(Call::Patch(user_id, patch.clone()));
        match self.write_failure() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn delete_user(&self, user_id: &str) -> std::result::Result<(), ApiError> {
        self.record(Call::Delete(user_id.to_string()));
        if let Some(err) = self.write_failure() {
            return Err(err);
        }
        let mut users = self.users.lock().unwrap();
        users.retain(|u| u.user_id.to_string() != user_id);
        Ok(())
    }
}

#[async_trait]
impl UserListing for FakeBackend {
    async fn fetch_users(&self, _page: Option<PageQuery>) -> std::result::Result<Vec<User>, ApiError> {
        self.record(Call::Fetch);
        self.wait_for_gate().await;
        if *self.fail_fetch.lock().unwrap() {
            return Err(ApiError::ConnectionRefused("backend down".to_string()));
        }
        Ok(self.users.lock().unwrap().clone())
    }
}

/// Confirmer with a fixed answer that counts how often it was asked
pub struct ScriptedConfirmer {
    pub answer: bool,
    pub asked: Mutex<Vec<String>>,
}

impl ScriptedConfirmer {
    pub fn new(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            asked: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Confirmer for ScriptedConfirmer {
    async fn confirm(&self, message: &str) -> Result<bool> {
        self.asked.lock().unwrap().push(message.to_string());
        Ok(self.answer)
    }
}

/// Confirmer that answers only once its gate is notified
pub struct GatedConfirmer {
    pub answer: bool,
    pub gate: Arc<Notify>,
    pub asked: Mutex<usize>,
}

impl GatedConfirmer {
    pub fn new(answer: bool, gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            gate,
            asked: Mutex::new(0),
        })
    }

    pub fn asked(&self) -> usize {
        *self.asked.lock().unwrap()
    }
}

#[async_trait]
impl Confirmer for GatedConfirmer {
    async fn confirm(&self, _message: &str) -> Result<bool> {
        *self.asked.lock().unwrap() += 1;
        self.gate.notified().await;
        Ok(self.answer)
    }
}
