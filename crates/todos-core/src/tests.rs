#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::*;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscriber_can_read() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let reader = sig.clone();
        let seen_clone = seen.clone();
        sig.subscribe(move |v| {
            seen_clone.borrow_mut().push((*v, reader.get()));
        });

        sig.set(3);
        sig.update(|v| *v *= 2);
        assert_eq!(*seen.borrow(), vec![(3, 3), (6, 6)]);
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let calls = Rc::new(RefCell::new(0));
        let calls_clone = calls.clone();
        let id = sig.subscribe(move |_| *calls_clone.borrow_mut() += 1);

        sig.set(1);
        assert!(sig.unsubscribe(id));
        assert!(!sig.unsubscribe(id));
        sig.set(2);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_store_starts_at_zero() {
        let store = TodoStore::new();
        assert_eq!(store.total_todos(), 0);
        assert_eq!(store.state(), TodoState { total_todos: 0 });
    }

    #[test]
    fn test_increment_k_times() {
        let store = TodoStore::with_state(TodoState { total_todos: 10 });
        store.increment();
        assert_eq!(store.total_todos(), 11);
        for _ in 0..5 {
            store.increment();
        }
        assert_eq!(store.total_todos(), 16);
    }

    #[test]
    fn test_set_total_todos_overrides_and_is_stable() {
        let store = TodoStore::new();
        store.increment();
        store.set_total_todos(5);
        assert_eq!(store.total_todos(), 5);
        store.set_total_todos(5);
        assert_eq!(store.total_todos(), 5);
    }

    #[test]
    fn test_set_total_todos_accepts_negative() {
        let store = TodoStore::new();
        store.set_total_todos(-4);
        assert_eq!(store.total_todos(), -4);
        store.increment();
        assert_eq!(store.total_todos(), -3);
    }

    #[test]
    fn test_try_set_total_todos_rejects_negative() {
        let store = TodoStore::new();
        store.set_total_todos(2);
        assert_eq!(
            store.try_set_total_todos(-1),
            Err(StoreError::NegativeCount(-1))
        );
        assert_eq!(store.total_todos(), 2);
        assert_eq!(store.try_set_total_todos(0), Ok(()));
        assert_eq!(store.total_todos(), 0);
    }

    #[test]
    fn test_increment_saturates() {
        let store = TodoStore::with_state(TodoState {
            total_todos: i64::MAX,
        });
        store.increment();
        assert_eq!(store.total_todos(), i64::MAX);
    }

    #[test]
    fn test_clones_share_state() {
        let store = TodoStore::new();
        let other = store.clone();
        other.increment();
        assert_eq!(store.total_todos(), 1);
        assert!(store.same_store(&other));
        assert!(!store.same_store(&TodoStore::new()));
    }

    #[test]
    fn test_store_subscribers_see_each_commit() {
        let store = TodoStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        store.subscribe(move |s| seen_clone.borrow_mut().push(s.total_todos));

        store.increment();
        store.commit(Mutation::SetTotalTodos(42));
        store.increment();
        assert_eq!(*seen.borrow(), vec![1, 42, 43]);
    }

    #[test]
    fn test_subscriber_can_commit() {
        let store = TodoStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let inner = store.clone();
        let seen_clone = seen.clone();
        store.subscribe(move |s| {
            seen_clone.borrow_mut().push(s.total_todos);
            if s.total_todos == 1 {
                inner.set_total_todos(10);
            }
        });

        store.increment();
        assert_eq!(store.total_todos(), 10);
        assert_eq!(*seen.borrow(), vec![1, 10]);
    }

    #[test]
    fn test_store_unsubscribe_reuses_slot() {
        let store = TodoStore::new();
        let calls = Rc::new(RefCell::new(0));
        let calls_clone = calls.clone();
        let first = store.subscribe(move |_| *calls_clone.borrow_mut() += 1);
        let second = store.subscribe(|_| {});
        assert_eq!(store.subscriber_count(), 2);

        store.increment();
        assert!(store.unsubscribe(first));
        store.increment();
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 1);

        for _ in 0..10 {
            let id = store.subscribe(|_| {});
            assert_eq!(id, first);
            assert!(store.unsubscribe(id));
        }
        assert_ne!(first, second);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_reduce_is_pure() {
        let before = TodoState { total_todos: 1 };
        let after = Todos::reduce(&before, Mutation::Increment);
        assert_eq!(before.total_todos, 1);
        assert_eq!(after.total_todos, 2);
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let json = serde_json::to_string(&TodoState { total_todos: 3 }).unwrap();
        assert_eq!(json, r#"{"totalTodos":3}"#);
        let back: TodoState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_todos, 3);
    }
}
