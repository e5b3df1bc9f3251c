//! State templates and their transitions.
//!
//! This module defines the [`State`] trait, the template every node of a
//! [`StateGraph`](crate::StateGraph) implements. The trait is generic over a
//! context type `C` (the owning entity's components) and a key type `K`
//! naming the states.

use std::fmt;
use std::hash::Hash;

/// Identifier of a state inside a graph.
///
/// Usually a fieldless enum. Blanket-implemented for every type that fits.
pub trait StateKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<T> StateKey for T where T: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

/// Predicate deciding whether a transition fires for the given context.
pub type Condition<C> = fn(&C) -> bool;

/// A single exit edge: switch to `target` when `condition` holds.
pub struct Transition<C, K> {
    target: K,
    condition: Condition<C>,
}

impl<C, K> Transition<C, K> {
    /// Creates a transition to `target` guarded by `condition`.
    pub const fn new(target: K, condition: Condition<C>) -> Self {
        Self { target, condition }
    }

    pub fn condition(&self) -> Condition<C> {
        self.condition
    }
}

impl<C, K: Copy> Transition<C, K> {
    pub fn target(&self) -> K {
        self.target
    }
}

impl<C, K: Copy> Clone for Transition<C, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, K: Copy> Copy for Transition<C, K> {}

impl<C, K: fmt::Debug> fmt::Debug for Transition<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// A node template shared by every machine built on the same graph.
///
/// Templates hold no per-entity data. Anything an entity needs to remember
/// lives in the context `C` handed to each hook.
pub trait State<C, K>: Send + Sync {
    /// Key under which this state is registered.
    fn kind(&self) -> K;

    /// Exit transitions, in priority order.
    ///
    /// Called once when the graph is built. Earlier entries dominate later
    /// ones when several conditions hold on the same tick.
    fn transitions(&self) -> Vec<Transition<C, K>>;

    /// Terminal states have no exits and may declare no transitions.
    fn is_terminal(&self) -> bool {
        false
    }

    /// Invoked when a machine switches into this state.
    fn enter(&self, _ctx: &mut C) {}

    /// Invoked when a machine switches out of this state.
    fn exit(&self, _ctx: &mut C) {}

    /// Per-tick behavior, run only on ticks where no transition fired.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The owning entity's components
    /// * `delta` - Elapsed time of the tick
    fn update(&self, _ctx: &mut C, _delta: f64) {}
}

/// Blanket implementation for boxed states, enabling heterogeneous graphs.
impl<C, K> State<C, K> for Box<dyn State<C, K>> {
    #[inline]
    fn kind(&self) -> K {
        (**self).kind()
    }

    #[inline]
    fn transitions(&self) -> Vec<Transition<C, K>> {
        (**self).transitions()
    }

    #[inline]
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }

    #[inline]
    fn enter(&self, ctx: &mut C) {
        (**self).enter(ctx)
    }

    #[inline]
    fn exit(&self, ctx: &mut C) {
        (**self).exit(ctx)
    }

    #[inline]
    fn update(&self, ctx: &mut C, delta: f64) {
        (**self).update(ctx, delta)
    }
}
