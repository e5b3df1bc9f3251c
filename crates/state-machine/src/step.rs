//! Outcome of a single machine tick.

/// What happened during one [`StateMachine::update`](crate::StateMachine::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<K> {
    /// No transition fired; the state's update hook ran.
    Stayed(K),

    /// A transition fired and the machine switched states.
    Changed { from: K, to: K },
}

impl<K: Copy> Step<K> {
    /// State the machine is in after the tick.
    #[inline]
    pub fn current(self) -> K {
        match self {
            Step::Stayed(kind) => kind,
            Step::Changed { to, .. } => to,
        }
    }

    /// Returns `true` if the tick switched states.
    #[inline]
    pub fn is_changed(self) -> bool {
        matches!(self, Step::Changed { .. })
    }
}

impl<K: Copy + PartialEq> Step<K> {
    /// Returns `true` if the tick switched into `kind`.
    #[inline]
    pub fn entered(self, kind: K) -> bool {
        matches!(self, Step::Changed { to, .. } if to == kind)
    }
}
