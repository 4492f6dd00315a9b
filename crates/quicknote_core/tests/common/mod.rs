//! Shared test doubles for the opaque key-value contract.

#![allow(dead_code)]

use quicknote_core::{KvStore, StorageError, StorageResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory backend with shared handles, so tests can observe writes after
/// the store value has been moved into a `NoteStore`.
#[derive(Clone, Default)]
pub struct SharedMemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    sets: Rc<Cell<usize>>,
}

impl SharedMemoryStore {
    /// Raw stored payload for `key`, bypassing the trait.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Seeds a raw payload, e.g. a legacy record shape.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Number of `set` calls seen so far.
    pub fn set_count(&self) -> usize {
        self.sets.get()
    }
}

impl KvStore for SharedMemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.sets.set(self.sets.get() + 1);
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend whose writes always fail, for never-raise persistence tests.
pub struct FailingStore;

impl KvStore for FailingStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Backend("store offline".to_string()))
    }
}
