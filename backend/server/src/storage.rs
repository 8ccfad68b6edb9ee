//! # Subscriber Storage
//!
//! One contract, two backings. Exactly one is picked at startup from
//! [`StorageKind`] and kept for the life of the process.
//!
//! - [`MemoryStorage`]: `Vec` plus a counter. Lost on restart. Does not
//!   reject duplicate emails, a second signup gets a second record.
//! - [`RedisStorage`]: durable. Emails are unique, a duplicate comes back as
//!   [`StorageError::Conflict`] so callers can tell it apart from a failure.
use std::future::Future;

use shared::Subscriber;
use thiserror::Error;
use tracing::info;

use crate::{config::StorageKind, database::RedisStorage, memory::MemoryStorage};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("{email} is already subscribed")]
    Conflict { email: String },

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Corrupt subscriber record: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub trait SubscriberStore {
    /// Stores a new subscriber with a fresh id and the current time.
    fn create_subscriber(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Subscriber, StorageError>> + Send;

    /// First subscriber stored under `email`, `None` if there is none.
    fn get_subscriber_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Subscriber>, StorageError>> + Send;
}

pub enum Storage {
    Memory(MemoryStorage),
    Redis(RedisStorage),
}

impl Storage {
    pub async fn connect(kind: &StorageKind) -> Result<Self, StorageError> {
        let storage = match kind {
            StorageKind::Memory => Self::Memory(MemoryStorage::new()),
            StorageKind::Redis { url } => Self::Redis(RedisStorage::connect(url).await?),
        };

        info!("Using {} storage", storage.name());

        Ok(storage)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Redis(_) => "redis",
        }
    }
}

impl SubscriberStore for Storage {
    async fn create_subscriber(&self, email: &str) -> Result<Subscriber, StorageError> {
        match self {
            Self::Memory(store) => store.create_subscriber(email).await,
            Self::Redis(store) => store.create_subscriber(email).await,
        }
    }

    async fn get_subscriber_by_email(&self, email: &str) -> Result<Option<Subscriber>, StorageError> {
        match self {
            Self::Memory(store) => store.get_subscriber_by_email(email).await,
            Self::Redis(store) => store.get_subscriber_by_email(email).await,
        }
    }
}
