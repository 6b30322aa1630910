use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

/// A stored signup record, keyed by email address.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory user store. Writes are upserts: saving a record for an
/// email that already exists replaces the previous record.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    records: Arc<Mutex<HashMap<String, UserRecord>>>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a record, returning the record it replaced, if any.
    pub async fn put(&self, record: UserRecord) -> Option<UserRecord> {
        let mut records = self.records.lock().await;
        records.insert(record.email.clone(), record)
    }

    pub async fn get(&self, email: &str) -> Option<UserRecord> {
        let records = self.records.lock().await;
        records.get(email).cloned()
    }
}

/// Hashes a password with the configured salt using SHA-256, returning
/// the digest as lowercase hex.
#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    format!("{:x}", Sha256::digest(format!("{salt}:{password}")))
}
