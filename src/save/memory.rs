use super::Store;
use crate::error::PersistenceError;
use std::collections::HashMap;

/// In-process store for ephemeral sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct Memory(HashMap<String, String>);

impl Memory {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Store for Memory {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.0.get(key).cloned())
    }
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
