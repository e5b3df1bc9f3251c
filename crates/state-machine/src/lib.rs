//! Per-entity finite-state machines driven by ordered transition predicates.
//!
//! A [`StateGraph`] is built once from stateless [`State`] templates and shared
//! between every entity that uses it. Each entity owns a [`StateMachine`] that
//! tracks its current node and evaluates that node's transitions every tick.
//!
//! - **Ordered predicates**: transitions are checked in registration order and
//!   the first one that holds wins
//! - **Plain data**: predicates are `fn` pointers over the context, so a
//!   transition list is inspectable and costs nothing per entity
//! - **Fail fast**: unknown targets and dead-end states are rejected when the
//!   graph is built, never while ticking
//!
//! # Architecture
//!
//! - [`State`]: Template trait for a node (transitions and enter/exit/update hooks)
//! - [`Transition`]: Target plus condition pair
//! - [`StateGraphBuilder`] / [`StateGraph`]: Validated, shareable node set
//! - [`StateMachine`]: Per-entity cursor over a graph
//! - [`Step`]: Outcome of one tick

pub mod error;
pub mod graph;
pub mod machine;
pub mod state;
pub mod step;

// Re-export core types for ergonomic API
pub use error::{GraphError, MachineError};
pub use graph::{StateGraph, StateGraphBuilder, StateId};
pub use machine::StateMachine;
pub use state::{Condition, State, StateKey, Transition};
pub use step::Step;
