use crate::{Mutation, Signal, StateHolder, StoreError, SubId, Todos, signal};

/// Owner of one `StateHolder`'s state.
///
/// Clones share the underlying cell; pass a clone to each consumer instead
/// of reaching for a global.
pub struct Store<H: StateHolder> {
    state: Signal<H::State>,
}

impl<H: StateHolder> Clone for Store<H> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<H: StateHolder> Default for Store<H> {
    fn default() -> Self {
        Self::with_state(H::initial_state())
    }
}

impl<H: StateHolder> Store<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: H::State) -> Self {
        Self {
            state: signal(state),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> H::State {
        self.state.get()
    }

    /// Apply `event` through the reducer and notify subscribers.
    pub fn commit(&self, event: H::Event) {
        log::trace!("commit {event:?}");
        self.state.update(|s| *s = H::reduce(s, event));
    }

    /// `f` runs with the new state after every commit. It may commit in turn.
    pub fn subscribe(&self, f: impl Fn(&H::State) + 'static) -> SubId {
        self.state.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.state.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscriber_count()
    }

    pub fn same_store(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

pub type TodoStore = Store<Todos>;

impl Store<Todos> {
    pub fn total_todos(&self) -> i64 {
        self.state.with(|s| s.total_todos)
    }

    pub fn increment(&self) {
        self.commit(Mutation::Increment);
    }

    pub fn set_total_todos(&self, count: i64) {
        self.commit(Mutation::SetTotalTodos(count));
    }

    /// Like [`Store::set_total_todos`] but rejects negative counts.
    pub fn try_set_total_todos(&self, count: i64) -> Result<(), StoreError> {
        if count < 0 {
            return Err(StoreError::NegativeCount(count));
        }
        self.set_total_todos(count);
        Ok(())
    }
}
