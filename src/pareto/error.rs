//! Error kinds per the engine's error-handling design.
//!
//! Every condition below is unrecoverable by the core itself: the engine's operations
//! are pure functions of their batched inputs, so there are no retries. Callers
//! (harness, CLI) are expected to log the diagnostic and exit non-zero.

use std::fmt;

/// A fatal condition raised by the BSP engine or its building blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A programming error: invalid node id, negative weight, overflow, a DELETE
    /// targeting an element not present, or similar.
    Precondition(String),
    /// A bounded resource was exhausted (work-deque overflow, allocation failure).
    ResourceExhausted(String),
    /// A work-stealing worker exceeded its idle budget while work remained outstanding.
    Deadlock {
        /// Work items still outstanding when the budget expired.
        outstanding: i64,
    },
}

impl EngineError {
    /// Builds a [`EngineError::Precondition`] from any displayable message.
    pub fn precondition(message: impl Into<String>) -> Self {
        EngineError::Precondition(message.into())
    }

    /// Builds a [`EngineError::ResourceExhausted`] from any displayable message.
    pub fn resource_exhausted(message: impl Into<String>) -> Self {
        EngineError::ResourceExhausted(message.into())
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Precondition(msg) => write!(f, "precondition violated: {msg}"),
            EngineError::ResourceExhausted(msg) => write!(f, "resource exhausted: {msg}"),
            EngineError::Deadlock { outstanding } => {
                write!(f, "work-stealing pool deadlocked with {outstanding} item(s) outstanding")
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl From<crate::concurrency::PoolError> for EngineError {
    fn from(err: crate::concurrency::PoolError) -> Self {
        match err {
            crate::concurrency::PoolError::Deadlock { outstanding, .. } => {
                EngineError::Deadlock { outstanding }
            }
            crate::concurrency::PoolError::EmptyPool => {
                EngineError::precondition("work-stealing pool requires at least one worker")
            }
        }
    }
}
