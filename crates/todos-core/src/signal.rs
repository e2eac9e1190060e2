use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Cloneable handle to a single mutable value.
///
/// Subscribers run after every write with a snapshot of the new value. They
/// may read or write the signal; a nested write notifies everyone again
/// before the outer notification finishes.
pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    value: RefCell<T>,
    subs: RefCell<Vec<Option<Subscriber<T>>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            value: RefCell::new(value),
            subs: RefCell::new(Vec::new()),
        }))
    }
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.value.borrow().clone()
    }
    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.0.value.borrow())
    }
    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        *self.0.value.borrow_mut() = v;
        self.notify();
    }
    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        f(&mut self.0.value.borrow_mut());
        self.notify();
    }
    /// Ids of removed subscribers are handed out again.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut subs = self.0.subs.borrow_mut();
        let f: Subscriber<T> = Rc::new(f);
        match subs.iter().position(Option::is_none) {
            Some(id) => {
                subs[id] = Some(f);
                id
            }
            None => {
                subs.push(Some(f));
                subs.len() - 1
            }
        }
    }
    /// Returns `false` if `id` was unknown or already removed.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.0
            .subs
            .borrow_mut()
            .get_mut(id)
            .and_then(Option::take)
            .is_some()
    }
    /// Whether two handles point at the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.0.subs.borrow().iter().flatten().count()
    }

    fn notify(&self)
    where
        T: Clone,
    {
        // Snapshot so subscribers may (un)subscribe while being notified.
        let subs: Vec<Subscriber<T>> = self.0.subs.borrow().iter().flatten().cloned().collect();
        if subs.is_empty() {
            return;
        }
        // No borrow is held while subscribers run.
        let value = self.0.value.borrow().clone();
        for s in &subs {
            s(&value);
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
