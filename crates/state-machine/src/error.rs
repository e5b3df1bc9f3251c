//! Errors raised while building or driving a state machine.
//!
//! Both families are configuration errors: they indicate a malformed graph or
//! a caller asking for a state that was never registered. Neither is meant to
//! be retried.

/// Rejected state graph definition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<K> {
    #[error("state graph has no states")]
    Empty,

    #[error("state {0:?} is registered more than once")]
    DuplicateState(K),

    #[error("state {from:?} declares a transition to unregistered state {target:?}")]
    UnknownTarget { from: K, target: K },

    #[error("non-terminal state {0:?} declares no transitions")]
    NoTransitions(K),

    #[error("terminal state {0:?} declares transitions")]
    TerminalWithTransitions(K),
}

/// Rejected request against a running machine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MachineError<K> {
    #[error("state {0:?} is not registered in this graph")]
    UnknownState(K),
}
