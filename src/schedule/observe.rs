/// Token returned by [`Observers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<E> = Box<dyn FnMut(&E)>;

/// Registry of change observers, notified in subscription order.
pub struct Observers<E> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<E>)>,
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }
}

impl<E> std::fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<E> Observers<E> {
    /// Register `callback`; it runs on every later [`Observers::notify`].
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Deliver `event` to every subscriber.
    pub fn notify(&mut self, event: &E) {
        for (_, cb) in &mut self.subscribers {
            cb(event);
        }
    }

    /// Drop all subscribers.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Number of live subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// True when nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/observe.rs"]
mod tests;
