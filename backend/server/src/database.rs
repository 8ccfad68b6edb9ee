//! # Redis
//!
//! Durable subscriber store.
//!
//! ## Implementation
//!
//! - `subscribers:next_id`: counter, `INCR` hands out ids starting at 1
//! - `subscribers`: 1 big hash, email to JSON subscriber record
//! - `HSETNX` writes the record only if the email is new, this is the uniqueness constraint
//! - An id taken by a rejected duplicate is not reused, ids stay unique but may have gaps
use std::time::Duration;

use chrono::Utc;
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use shared::Subscriber;
use tracing::{info, warn};

use crate::storage::{StorageError, SubscriberStore};

pub const SUBSCRIBERS_KEY: &str = "subscribers";
pub const NEXT_ID_KEY: &str = "subscribers:next_id";

pub async fn init_redis(redis_url: &str) -> Result<ConnectionManager, StorageError> {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(500));

    let client = Client::open(redis_url)?;
    let connection_manager = client.get_connection_manager_with_config(config).await?;

    info!("Connected to Redis");

    Ok(connection_manager)
}

pub struct RedisStorage {
    connection: ConnectionManager,
}

impl RedisStorage {
    pub async fn connect(redis_url: &str) -> Result<Self, StorageError> {
        Ok(Self {
            connection: init_redis(redis_url).await?,
        })
    }
}

impl SubscriberStore for RedisStorage {
    async fn create_subscriber(&self, email: &str) -> Result<Subscriber, StorageError> {
        let mut connection = self.connection.clone();

        let id: u64 = connection.incr(NEXT_ID_KEY, 1u64).await?;

        let subscriber = Subscriber {
            id,
            email: email.to_string(),
            created_at: Utc::now(),
        };

        let inserted: bool = connection
            .hset_nx(SUBSCRIBERS_KEY, email, encode_record(&subscriber)?)
            .await?;

        if !inserted {
            warn!("Rejected duplicate subscriber, id {id} unused");

            return Err(StorageError::Conflict {
                email: email.to_string(),
            });
        }

        Ok(subscriber)
    }

    async fn get_subscriber_by_email(&self, email: &str) -> Result<Option<Subscriber>, StorageError> {
        let mut connection = self.connection.clone();

        let record: Option<String> = connection.hget(SUBSCRIBERS_KEY, email).await?;

        record.as_deref().map(decode_record).transpose()
    }
}

pub fn encode_record(subscriber: &Subscriber) -> Result<String, StorageError> {
    Ok(serde_json::to_string(subscriber)?)
}

pub fn decode_record(record: &str) -> Result<Subscriber, StorageError> {
    Ok(serde_json::from_str(record)?)
}
