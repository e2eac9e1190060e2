/// Errors raised by validated store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("todo count must be non-negative, got {0}")]
    NegativeCount(i64),
}
