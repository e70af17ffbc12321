use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::slot::{SlotStorage, StorageError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write storage slot: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A value mirrored into one JSON-encoded storage slot.
///
/// The in-memory value is authoritative for the session: persistence failures
/// are logged and recorded, never rolled back.
pub struct Persisted<T, S> {
    key: String,
    storage: S,
    value: T,
    last_write_error: Option<StoreError>,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_subscription: u64,
}

impl<T, S> Persisted<T, S>
where
    T: Serialize + DeserializeOwned,
    S: SlotStorage,
{
    /// Reads the slot named `key`, falling back to `default` when it is
    /// missing, blank or undecodable. Blank and undecodable slots are erased.
    pub fn load(storage: S, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = read_slot(&storage, &key).unwrap_or(default);
        Self {
            key,
            storage,
            value,
            last_write_error: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Error from the most recent write, cleared by the next successful one.
    pub fn last_write_error(&self) -> Option<&StoreError> {
        self.last_write_error.as_ref()
    }

    /// Replaces the value, then writes it through to the slot.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.commit();
    }

    /// Mutates the value in place, then writes it through to the slot.
    pub fn update(&mut self, apply: impl FnOnce(&mut T)) {
        apply(&mut self.value);
        self.commit();
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn commit(&mut self) {
        self.last_write_error = self.persist().err();
        if let Some(err) = &self.last_write_error {
            error!(key = %self.key, error = %err, "failed to persist storage slot");
        }
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.value);
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.value)?;
        self.storage.write(&self.key, &json)?;
        Ok(())
    }
}

impl<T: fmt::Debug, S: fmt::Debug> fmt::Debug for Persisted<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key)
            .field("storage", &self.storage)
            .field("value", &self.value)
            .field("last_write_error", &self.last_write_error)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn read_slot<T: DeserializeOwned>(storage: &impl SlotStorage, key: &str) -> Option<T> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, error = %err, "failed to read storage slot");
            return None;
        }
    };
    if raw.trim().is_empty() {
        debug!(key, "discarding blank storage slot");
        erase_slot(storage, key);
        return None;
    }
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            error!(key, error = %err, "discarding corrupted storage slot");
            erase_slot(storage, key);
            None
        }
    }
}

fn erase_slot(storage: &impl SlotStorage, key: &str) {
    if let Err(err) = storage.remove(key) {
        warn!(key, error = %err, "failed to erase storage slot");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use tempfile::tempdir;

    use super::*;
    use crate::slot::{FileStorage, MemoryStorage};

    #[test]
    fn missing_slot_yields_default_without_writing() {
        let storage = MemoryStorage::new();
        let store = Persisted::load(storage.clone(), "numbers", vec![7u32]);
        assert_eq!(store.get(), &vec![7]);
        assert!(!storage.contains("numbers"));
    }

    #[test]
    fn blank_slot_is_erased() {
        for blank in ["", "   ", "\n\t "] {
            let storage = MemoryStorage::new();
            storage.write("numbers", blank).unwrap();
            let store = Persisted::load(storage.clone(), "numbers", Vec::<u32>::new());
            assert!(store.get().is_empty());
            assert_eq!(storage.read("numbers").unwrap(), None);
        }
    }

    #[test]
    fn corrupted_slot_is_erased() {
        let storage = MemoryStorage::new();
        storage.write("numbers", "[1, 2,").unwrap();
        let store = Persisted::load(storage.clone(), "numbers", vec![9u32]);
        assert_eq!(store.get(), &vec![9]);
        assert_eq!(storage.read("numbers").unwrap(), None);
    }

    #[test]
    fn wrongly_shaped_slot_is_erased() {
        let storage = MemoryStorage::new();
        storage.write("numbers", r#"{"not":"a list"}"#).unwrap();
        let store = Persisted::load(storage.clone(), "numbers", Vec::<u32>::new());
        assert!(store.get().is_empty());
        assert!(!storage.contains("numbers"));
    }

    #[test]
    fn set_is_visible_immediately_and_survives_reload() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        let mut store = Persisted::load(storage.clone(), "numbers", Vec::<u32>::new());
        store.set(vec![3, 1, 2]);
        assert_eq!(store.get(), &vec![3, 1, 2]);
        assert!(store.last_write_error().is_none());

        let reopened = Persisted::load(storage, "numbers", Vec::<u32>::new());
        assert_eq!(reopened.get(), &vec![3, 1, 2]);
    }

    #[test]
    fn write_failure_keeps_in_memory_value() {
        let storage = MemoryStorage::with_quota(8);
        let mut store = Persisted::load(storage.clone(), "k", Vec::<u32>::new());
        store.set(vec![1]);
        assert!(store.last_write_error().is_none());
        store.set(vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(store.get(), &vec![1, 2, 3, 4, 5, 6]);
        assert!(matches!(
            store.last_write_error(),
            Some(StoreError::Storage(StorageError::QuotaExceeded { .. }))
        ));
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("[1]"));

        store.set(Vec::new());
        assert!(store.last_write_error().is_none());
    }

    #[test]
    fn update_mutates_in_place_and_persists() {
        let storage = MemoryStorage::new();
        let mut store = Persisted::load(storage.clone(), "k", vec![1u32]);
        store.update(|values| values.insert(0, 0));
        assert_eq!(store.get(), &vec![0, 1]);
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("[0,1]"));
    }

    #[test]
    fn subscribers_observe_every_commit_until_removed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Persisted::load(MemoryStorage::new(), "k", 0u32);
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |value| sink.borrow_mut().push(*value));
        store.set(1);
        store.update(|value| *value += 1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(5);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn subscribers_are_notified_even_when_write_fails() {
        let hits = Rc::new(RefCell::new(0));
        let mut store = Persisted::load(MemoryStorage::with_quota(0), "k", 0u32);
        let sink = Rc::clone(&hits);
        store.subscribe(move |_| *sink.borrow_mut() += 1);
        store.set(4);
        assert_eq!(*hits.borrow(), 1);
        assert!(store.last_write_error().is_some());
    }

    proptest! {
        #[test]
        fn arbitrary_lists_round_trip(values in proptest::collection::vec(any::<(i64, String)>(), 0..16)) {
            let storage = MemoryStorage::new();
            let mut store = Persisted::load(storage.clone(), "k", Vec::new());
            store.set(values.clone());
            let reopened = Persisted::load(storage, "k", Vec::<(i64, String)>::new());
            prop_assert_eq!(reopened.get(), &values);
        }
    }
}
