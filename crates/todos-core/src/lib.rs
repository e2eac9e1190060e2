//! # Shared todo state
//!
//! The application keeps exactly one piece of shared state: the number of
//! todos. It lives in a [`Store`], an explicitly owned container that is
//! created once and handed to whoever needs it. There is no global instance.
//!
//! - `Signal<T>`: observable cell holding a value.
//! - `StateHolder`: describes a state type, its initial value and a pure
//!   reducer over mutations.
//! - `Store<H>`: owns a `Signal<H::State>` and applies mutations through
//!   `commit`.
//!
//! ```rust
//! use todos_core::*;
//!
//! let store = TodoStore::new();
//! store.increment();
//! store.increment();
//! assert_eq!(store.total_todos(), 2);
//!
//! store.set_total_todos(42);
//! store.increment();
//! assert_eq!(store.total_todos(), 43);
//! ```
//!
//! Cloning a store clones the handle, not the state. Every clone observes
//! the same counter:
//!
//! ```rust
//! use todos_core::*;
//!
//! let store = TodoStore::new();
//! let view_handle = store.clone();
//! store.commit(Mutation::SetTotalTodos(7));
//! assert_eq!(view_handle.total_todos(), 7);
//! ```

pub mod error;
pub mod signal;
pub mod state;
pub mod store;
pub mod tests;

pub use error::*;
pub use signal::*;
pub use state::*;
pub use store::*;
