use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Bounds how many check-ins talk to HoYoLAB at once, across every game of a run.
#[derive(Clone, Debug)]
pub(crate) enum Limiter {
    Bounded(Arc<Semaphore>),
    Unbounded,
}

/// Released on drop.
pub(crate) struct Permit {
    _permit: Option<OwnedSemaphorePermit>,
}

impl Limiter {
    /// `max_parallel <= 0` means no limit.
    pub(crate) fn new(max_parallel: i64) -> Self {
        match usize::try_from(max_parallel) {
            Ok(permits) if permits > 0 => {
                Limiter::Bounded(Arc::new(Semaphore::new(permits.min(Semaphore::MAX_PERMITS))))
            }
            _ => Limiter::Unbounded,
        }
    }

    pub(crate) async fn acquire(&self) -> Permit {
        let permit = match self {
            // The semaphore is never closed, so acquiring only fails if that changes
            Limiter::Bounded(semaphore) => semaphore.clone().acquire_owned().await.ok(),
            Limiter::Unbounded => None,
        };
        Permit { _permit: permit }
    }
}
