use std::sync::Mutex;

use super::types::TokenStore;

/// Process-lifetime token store. Used by tests and by shells that do not
/// want page-reload durability.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn set(&self, token: &str) {
        *self.token.lock().expect("token store lock poisoned") = Some(token.to_string());
    }

    fn get(&self) -> Option<String> {
        self.token.lock().expect("token store lock poisoned").clone()
    }

    fn clear(&self) {
        *self.token.lock().expect("token store lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        // Given an empty store
        let store = InMemoryTokenStore::new();
        assert_eq!(store.get(), None);

        // When setting a token
        store.set("token-a");

        // Then it is retrievable
        assert_eq!(store.get(), Some("token-a".to_string()));
    }

    #[test]
    fn test_set_overwrites() {
        let store = InMemoryTokenStore::new();
        store.set("token-a");
        store.set("token-b");

        assert_eq!(store.get(), Some("token-b".to_string()));
    }

    #[test]
    fn test_clear() {
        let store = InMemoryTokenStore::new();
        store.set("token-a");

        store.clear();

        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_clear_when_empty_is_a_noop() {
        let store = InMemoryTokenStore::new();
        store.clear();
        assert_eq!(store.get(), None);
    }
}
