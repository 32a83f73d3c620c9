//! Push-based state channel.
//!
//! Holds the latest value and a list of callbacks. Subscribing replays the
//! current value right away; every publish replaces the value and notifies
//! each subscriber in registration order. Single threaded: everything runs
//! synchronously inside the publishing call.

/// Handle returned by `subscribe`. Pass it back to `unsubscribe` to stop
/// receiving values.
#[must_use = "dropping a Subscription keeps the callback registered with no way to remove it"]
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    /// Raw handle id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.0
    }
}

type Callback<T> = Box<dyn FnMut(&T)>;

/// Latest-value channel with synchronous observers.
pub struct StateChannel<T> {
    value: T,
    next_id: u64,
    observers: Vec<(u64, Callback<T>)>,
}

impl<T> StateChannel<T> {
    /// Create a channel holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            next_id: 0,
            observers: Vec::new(),
        }
    }

    /// The latest value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Register a callback. It is invoked immediately with the current value.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&T) + 'static) -> Subscription {
        callback(&self.value);
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));
        Subscription(id)
    }

    /// Remove a callback. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription.0);
        self.observers.len() != before
    }

    /// Replace the value and notify every subscriber.
    pub fn publish(&mut self, value: T) {
        self.value = value;
        for (_, observer) in &mut self.observers {
            observer(&self.value);
        }
    }

    /// Number of registered callbacks.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for StateChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateChannel")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}
