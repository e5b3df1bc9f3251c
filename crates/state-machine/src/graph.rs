//! Validated, shareable state graphs.
//!
//! A [`StateGraph`] is assembled from [`State`] templates through a
//! [`StateGraphBuilder`]. Building resolves every transition target to a dense
//! [`StateId`], so a graph that builds successfully can be ticked without any
//! lookup failing.

use std::collections::HashMap;
use std::fmt;

use crate::error::GraphError;
use crate::state::{Condition, State, StateKey};

/// Dense index of a state inside one [`StateGraph`].
///
/// Only meaningful for the graph that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(usize);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Transition with its target already resolved.
pub(crate) struct Edge<C> {
    pub(crate) target: StateId,
    pub(crate) condition: Condition<C>,
}

pub(crate) struct Node<C, K> {
    pub(crate) kind: K,
    pub(crate) state: Box<dyn State<C, K>>,
    pub(crate) edges: Vec<Edge<C>>,
}

/// Immutable set of states plus their resolved transitions.
///
/// Wrap it in an `Arc` and hand it to every [`StateMachine`](crate::StateMachine)
/// that should follow the same rules.
pub struct StateGraph<C, K> {
    nodes: Vec<Node<C, K>>,
    index: HashMap<K, StateId>,
}

impl<C, K: StateKey> StateGraph<C, K> {
    /// Starts a new builder.
    pub fn builder() -> StateGraphBuilder<C, K> {
        StateGraphBuilder::new()
    }

    /// Resolves a key to its id, if the state is registered.
    pub fn resolve(&self, kind: K) -> Option<StateId> {
        self.index.get(&kind).copied()
    }

    pub fn contains(&self, kind: K) -> bool {
        self.index.contains_key(&kind)
    }

    /// Key of the state behind `id`.
    pub fn kind(&self, id: StateId) -> K {
        self.nodes[id.0].kind
    }

    /// Transition targets of `kind`, in evaluation order.
    pub fn targets(&self, kind: K) -> Option<Vec<K>> {
        let id = self.resolve(kind)?;
        Some(
            self.nodes[id.0]
                .edges
                .iter()
                .map(|edge| self.nodes[edge.target.0].kind)
                .collect(),
        )
    }

    /// Registered state keys, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = K> + '_ {
        self.nodes.iter().map(|node| node.kind)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node(&self, id: StateId) -> &Node<C, K> {
        &self.nodes[id.0]
    }
}

impl<C, K: fmt::Debug> fmt::Debug for StateGraph<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.nodes.iter().map(|node| &node.kind))
            .finish()
    }
}

/// Collects state templates and validates them into a [`StateGraph`].
pub struct StateGraphBuilder<C, K> {
    states: Vec<Box<dyn State<C, K>>>,
}

impl<C, K: StateKey> StateGraphBuilder<C, K> {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Registers a state template.
    pub fn state(mut self, state: impl State<C, K> + 'static) -> Self {
        self.states.push(Box::new(state));
        self
    }

    /// Registers an already boxed state template.
    pub fn boxed(mut self, state: Box<dyn State<C, K>>) -> Self {
        self.states.push(state);
        self
    }

    /// Validates the collected templates and resolves their transitions.
    ///
    /// # Errors
    ///
    /// - [`GraphError::Empty`] if no state was registered
    /// - [`GraphError::DuplicateState`] if two templates share a key
    /// - [`GraphError::UnknownTarget`] if a transition names an unregistered state
    /// - [`GraphError::NoTransitions`] if a non-terminal state has no exits
    /// - [`GraphError::TerminalWithTransitions`] if a terminal state has exits
    pub fn build(self) -> Result<StateGraph<C, K>, GraphError<K>> {
        if self.states.is_empty() {
            return Err(GraphError::Empty);
        }

        let mut index = HashMap::with_capacity(self.states.len());
        for (position, state) in self.states.iter().enumerate() {
            if index.insert(state.kind(), StateId(position)).is_some() {
                return Err(GraphError::DuplicateState(state.kind()));
            }
        }

        let mut nodes = Vec::with_capacity(self.states.len());
        for state in self.states {
            let kind = state.kind();
            let transitions = state.transitions();

            match (state.is_terminal(), transitions.is_empty()) {
                (true, false) => return Err(GraphError::TerminalWithTransitions(kind)),
                (false, true) => return Err(GraphError::NoTransitions(kind)),
                _ => {}
            }

            let edges = transitions
                .into_iter()
                .map(|transition| {
                    let target = transition.target();
                    index
                        .get(&target)
                        .map(|&id| Edge {
                            target: id,
                            condition: transition.condition(),
                        })
                        .ok_or(GraphError::UnknownTarget { from: kind, target })
                })
                .collect::<Result<Vec<_>, _>>()?;

            nodes.push(Node { kind, state, edges });
        }

        Ok(StateGraph { nodes, index })
    }
}

impl<C, K: StateKey> Default for StateGraphBuilder<C, K> {
    fn default() -> Self {
        Self::new()
    }
}
