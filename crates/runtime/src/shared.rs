use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle to a collaborator owned jointly by a unit and the world.
///
/// The unit drives it through the core part traits; the world advances it
/// every tick. Both sides run on the simulation thread, so a poisoned lock
/// only means an earlier panic, and the data is still usable.
#[derive(Debug, Default)]
pub struct Shared<T>(Arc<Mutex<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }

    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
