use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

// =============================================================================
// Change notification
// =============================================================================
//
// Listeners live in slots indexed by their id. Removing one leaves a hole, so
// both registration and removal are O(1) and ids are never handed out twice.
// Notification works on a snapshot of the live callbacks: a callback may add
// or remove listeners through a cloned handle without disturbing the round
// that is in progress.

/// "Something about the palette changed." Re-read the palette for details.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChangeEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(usize);

type Callback = Rc<dyn Fn(&ChangeEvent)>;

#[derive(Default)]
struct Registry {
    slots: Vec<Option<Callback>>,
    live: usize,
}

/// Shared handle to a listener registry. Clones refer to the same registry.
#[derive(Clone, Default)]
pub struct ChangeListeners {
    inner: Rc<RefCell<Registry>>,
}

impl ChangeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, callback: impl Fn(&ChangeEvent) + 'static) -> ListenerId {
        let mut registry = self.inner.borrow_mut();
        let id = ListenerId(registry.slots.len());
        registry.slots.push(Some(Rc::new(callback)));
        registry.live += 1;
        id
    }

    /// Returns false if `id` was not registered (or already removed)
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut registry = self.inner.borrow_mut();
        let removed = registry
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .is_some();
        if removed {
            registry.live -= 1;
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().live
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every listener registered at the moment of the call, in registration order
    pub fn notify(&self, event: &ChangeEvent) {
        let snapshot: Vec<Callback> = self
            .inner
            .borrow()
            .slots
            .iter()
            .flatten()
            .cloned()
            .collect();

        for callback in snapshot {
            callback(event);
        }
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("live", &self.len())
            .finish()
    }
}
