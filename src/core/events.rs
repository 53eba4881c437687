//! Notifications for translations written through the manager.

use serde::Serialize;

/// A translation value was added or changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationAdded {
    pub language: String,
    pub group: String,
    pub key: String,
    pub value: String,
}

type Observer = Box<dyn Fn(&TranslationAdded) + Send + Sync>;

/// Synchronous observer list. Observers run in registration order and
/// their results are not consumed.
#[derive(Default)]
pub struct Observers {
    observers: Vec<Observer>,
}

impl Observers {
    pub fn register(&mut self, observer: impl Fn(&TranslationAdded) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn notify(&self, event: &TranslationAdded) {
        for observer in &self.observers {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
