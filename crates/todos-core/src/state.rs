use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// State holder pattern: a state type, its initial value, and a pure reducer.
pub trait StateHolder: 'static {
    type State: Clone;
    type Event: Debug;

    fn initial_state() -> Self::State;
    fn reduce(state: &Self::State, event: Self::Event) -> Self::State;
}

/// The application-wide todo state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoState {
    pub total_todos: i64,
}

/// The only ways `TodoState` may change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    /// Add exactly one todo to the count.
    Increment,
    /// Replace the count. Negative values are accepted.
    SetTotalTodos(i64),
}

/// Marker selecting the todo state machine for [`crate::Store`].
pub struct Todos;

impl StateHolder for Todos {
    type State = TodoState;
    type Event = Mutation;

    fn initial_state() -> TodoState {
        TodoState { total_todos: 0 }
    }

    fn reduce(state: &TodoState, event: Mutation) -> TodoState {
        match event {
            Mutation::Increment => TodoState {
                total_todos: state.total_todos.saturating_add(1),
            },
            Mutation::SetTotalTodos(count) => {
                if count < 0 {
                    log::warn!("totalTodos set to negative value {count}");
                }
                TodoState { total_todos: count }
            }
        }
    }
}
