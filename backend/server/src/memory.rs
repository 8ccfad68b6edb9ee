use chrono::Utc;
use shared::Subscriber;
use tokio::sync::Mutex;

use crate::storage::{StorageError, SubscriberStore};

struct Inner {
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                subscribers: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.subscribers.len()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriberStore for MemoryStorage {
    async fn create_subscriber(&self, email: &str) -> Result<Subscriber, StorageError> {
        let mut inner = self.inner.lock().await;

        let subscriber = Subscriber {
            id: inner.next_id,
            email: email.to_string(),
            created_at: Utc::now(),
        };

        inner.next_id += 1;
        inner.subscribers.push(subscriber.clone());

        Ok(subscriber)
    }

    async fn get_subscriber_by_email(&self, email: &str) -> Result<Option<Subscriber>, StorageError> {
        let inner = self.inner.lock().await;

        Ok(inner
            .subscribers
            .iter()
            .find(|subscriber| subscriber.email == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = MemoryStorage::new();

        let first = store.create_subscriber("a@b.com").await.unwrap();
        let second = store.create_subscriber("c@d.com").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn test_lookup() {
        let store = MemoryStorage::new();
        let created = store.create_subscriber("a@b.com").await.unwrap();

        let found = store.get_subscriber_by_email("a@b.com").await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_lookup_missing_is_none() {
        let store = MemoryStorage::new();
        store.create_subscriber("a@b.com").await.unwrap();

        assert_eq!(store.get_subscriber_by_email("x@y.com").await.unwrap(), None);
        assert_eq!(store.get_subscriber_by_email("A@B.COM").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicates_are_stored_twice() {
        let store = MemoryStorage::new();

        let first = store.create_subscriber("a@b.com").await.unwrap();
        let second = store.create_subscriber("a@b.com").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.len().await, 2);

        // lookup returns the earliest record
        let found = store.get_subscriber_by_email("a@b.com").await.unwrap();
        assert_eq!(found.map(|s| s.id), Some(first.id));
    }
}
