//! Ordered listener registry shared by observable state holders.

use std::fmt::{Debug, Formatter};

/// Callback invoked with an owned snapshot of the observed items.
pub type Listener<T> = Box<dyn FnMut(Vec<T>)>;

/// Handle returned on registration; used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Registration-ordered listener list.
///
/// Registering the same closure twice yields two entries, and both fire.
pub struct Listeners<T> {
    entries: Vec<(ListenerId, Listener<T>)>,
    next_id: u64,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Debug for Listeners<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<T: Clone> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener; it fires after every earlier-registered one.
    pub fn add(&mut self, listener: impl FnMut(Vec<T>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes one registration. Returns `false` for an unknown handle.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invokes every listener in registration order, each with its own copy.
    pub fn notify(&mut self, items: &[T]) {
        for (_, listener) in self.entries.iter_mut() {
            listener(items.to_vec());
        }
    }
}
