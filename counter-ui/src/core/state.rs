//! Reactive state management

use std::sync::{Arc, RwLock};

/// Reactive state container - triggers rebuilds when changed
pub struct State<T: Clone + Send + Sync + 'static> {
    value: Arc<RwLock<T>>,
    listeners: Arc<RwLock<Vec<Box<dyn Fn() + Send + Sync>>>>,
}

impl<T: Clone + Send + Sync + 'static> State<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the current value
    pub fn get(&self) -> T {
        self.value.read().unwrap().clone()
    }

    /// Set a new value and notify listeners
    pub fn set(&self, new_value: T) {
        {
            let mut value = self.value.write().unwrap();
            *value = new_value;
        }
        self.notify();
    }

    /// Update value with a function
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        {
            let mut value = self.value.write().unwrap();
            f(&mut *value);
        }
        self.notify();
    }

    /// Subscribe to changes
    pub fn subscribe<F: Fn() + Send + Sync + 'static>(&self, callback: F) {
        let mut listeners = self.listeners.write().unwrap();
        listeners.push(Box::new(callback));
    }

    fn notify(&self) {
        let listeners = self.listeners.read().unwrap();
        for listener in listeners.iter() {
            listener();
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            listeners: Arc::clone(&self.listeners),
        }
    }
}
