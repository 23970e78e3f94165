//! Draft persistence behind a small trait.
//!
//! Fields are stored exactly as validated, so loading a form yields the same
//! descriptors that were saved. The in-memory store is process-local; any
//! durable backend only needs to implement [`FormStore`].
use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use chrono::{DateTime, Utc};
use formwright::types::FieldDescriptor;
use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize};

pub type FormId = u64;

/// Owner of a saved form. Clients send either a number or a string; both are
/// kept as text so `42` and `"42"` name the same user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Blank ids are not ids.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        let raw = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text,
            Raw::Number(number) => number.to_string(),
        };
        UserId::new(raw).ok_or_else(|| serde::de::Error::custom("user id must not be blank"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Draft,
}

/// A saved form as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedForm {
    pub form_id: FormId,
    pub user_id: UserId,
    pub title: String,
    pub status: FormStatus,
    pub created_at: DateTime<Utc>,
    pub fields: Vec<FieldDescriptor>,
}

/// Everything needed to save a form.
#[derive(Debug, Clone)]
pub struct NewForm {
    pub user_id: UserId,
    pub title: String,
    pub fields: Vec<FieldDescriptor>,
}

pub trait FormStore: Send + Sync {
    /// Persist `form` as a draft and return it with its assigned id.
    fn save(&self, form: NewForm) -> SavedForm;

    /// Every form owned by `user_id`, oldest first.
    fn list_for_user(&self, user_id: &UserId) -> Vec<SavedForm>;
}

#[derive(Debug)]
pub struct InMemoryFormStore {
    next_id: AtomicU64,
    forms: RwLock<Vec<SavedForm>>,
}

impl InMemoryFormStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            forms: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.forms.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.read().is_empty()
    }
}

impl Default for InMemoryFormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore for InMemoryFormStore {
    fn save(&self, form: NewForm) -> SavedForm {
        let saved = SavedForm {
            form_id: self.next_id.fetch_add(1, Ordering::Relaxed),
            user_id: form.user_id,
            title: form.title,
            status: FormStatus::Draft,
            created_at: Utc::now(),
            fields: form.fields,
        };
        self.forms.write().push(saved.clone());
        saved
    }

    fn list_for_user(&self, user_id: &UserId) -> Vec<SavedForm> {
        self.forms
            .read()
            .iter()
            .filter(|form| &form.user_id == user_id)
            .cloned()
            .collect()
    }
}
