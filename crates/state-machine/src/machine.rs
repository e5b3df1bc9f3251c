//! Per-entity state machine instances.

use std::fmt;
use std::sync::Arc;

use crate::error::MachineError;
use crate::graph::{StateGraph, StateId};
use crate::state::StateKey;
use crate::step::Step;

/// Cursor over a shared [`StateGraph`] owned by a single entity.
///
/// The machine only stores which state is current and how long it has been
/// current. The active transition list is the current node's list in the
/// graph, so switching states swaps the whole list in one assignment.
pub struct StateMachine<C, K> {
    graph: Arc<StateGraph<C, K>>,
    current: StateId,
    elapsed: f64,
}

impl<C, K: StateKey> StateMachine<C, K> {
    /// Creates a machine and enters `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::UnknownState`] if `initial` is not in the graph.
    pub fn new(
        graph: Arc<StateGraph<C, K>>,
        initial: K,
        ctx: &mut C,
    ) -> Result<Self, MachineError<K>> {
        let current = graph
            .resolve(initial)
            .ok_or(MachineError::UnknownState(initial))?;
        graph.node(current).state.enter(ctx);

        Ok(Self {
            graph,
            current,
            elapsed: 0.0,
        })
    }

    /// Key of the current state.
    pub fn current(&self) -> K {
        self.graph.kind(self.current)
    }

    pub fn current_id(&self) -> StateId {
        self.current
    }

    /// Time accumulated in the current state through [`update`](Self::update).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn graph(&self) -> &Arc<StateGraph<C, K>> {
        &self.graph
    }

    /// Targets of the current state's transitions, in evaluation order.
    pub fn transitions(&self) -> Vec<K> {
        self.graph
            .node(self.current)
            .edges
            .iter()
            .map(|edge| self.graph.kind(edge.target))
            .collect()
    }

    /// Forces a switch to `target`, bypassing transition evaluation.
    ///
    /// Runs the outgoing state's exit hook and the incoming state's enter hook,
    /// even when `target` is the current state.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::UnknownState`] if `target` is not in the graph.
    /// The machine is left untouched in that case.
    pub fn change_state(&mut self, target: K, ctx: &mut C) -> Result<Step<K>, MachineError<K>> {
        let id = self
            .graph
            .resolve(target)
            .ok_or(MachineError::UnknownState(target))?;
        Ok(self.change_to(id, ctx))
    }

    /// Forces a switch to an already resolved state.
    pub fn change_to(&mut self, target: StateId, ctx: &mut C) -> Step<K> {
        let from = self.current();
        self.graph.node(self.current).state.exit(ctx);
        self.current = target;
        self.elapsed = 0.0;
        self.graph.node(target).state.enter(ctx);

        Step::Changed {
            from,
            to: self.current(),
        }
    }

    /// Returns the state the next [`update`](Self::update) would switch to,
    /// without switching.
    pub fn evaluate(&self, ctx: &C) -> Option<K> {
        self.graph
            .node(self.current)
            .edges
            .iter()
            .find(|edge| (edge.condition)(ctx))
            .map(|edge| self.graph.kind(edge.target))
    }

    /// Runs one tick.
    ///
    /// Transitions are checked in registration order and the first condition
    /// that holds switches the state. When none holds, the current state's
    /// update hook runs with `delta`.
    pub fn update(&mut self, ctx: &mut C, delta: f64) -> Step<K> {
        let graph = Arc::clone(&self.graph);
        let node = graph.node(self.current);

        if let Some(edge) = node.edges.iter().find(|edge| (edge.condition)(ctx)) {
            return self.change_to(edge.target, ctx);
        }

        node.state.update(ctx, delta);
        self.elapsed += delta;
        Step::Stayed(node.kind)
    }
}

impl<C, K: StateKey> fmt::Debug for StateMachine<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current())
            .field("elapsed", &self.elapsed)
            .finish()
    }
}
