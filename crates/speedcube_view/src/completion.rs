use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};

use parking_lot::Mutex;
use smallvec::SmallVec;

/// How a requested move ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The rotation ran to completion and the cube state was updated.
    Completed,
    /// Another rotation was in flight, so the move was ignored.
    Dropped,
    /// No cubies matched the layer, so the move was ignored.
    NoElements,
    /// The controller was dropped before the rotation finished.
    Abandoned,
}

#[derive(Debug, Default)]
struct Slot {
    outcome: Option<MoveOutcome>,
    /// One waker per task awaiting a clone of the signal.
    wakers: SmallVec<[Waker; 1]>,
}

/// Signal that resolves when a requested move ends.
///
/// Await it, or poll [`MoveCompletion::outcome()`] from a render loop.
#[derive(Debug, Clone)]
pub struct MoveCompletion {
    slot: Arc<Mutex<Slot>>,
}
impl MoveCompletion {
    /// Returns a pair of a resolver and the signal it resolves.
    pub(crate) fn new() -> (Completer, Self) {
        let slot = Arc::new(Mutex::new(Slot::default()));
        let completer = Completer {
            slot: Arc::clone(&slot),
        };
        (completer, Self { slot })
    }

    /// Returns a signal that has already resolved.
    pub(crate) fn resolved(outcome: MoveOutcome) -> Self {
        let (completer, ret) = Self::new();
        completer.resolve(outcome);
        ret
    }

    /// Returns the outcome, or `None` if the move has not ended yet.
    pub fn outcome(&self) -> Option<MoveOutcome> {
        self.slot.lock().outcome
    }

    /// Returns whether the move has ended.
    pub fn is_done(&self) -> bool {
        self.outcome().is_some()
    }
}
impl Future for MoveCompletion {
    type Output = MoveOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut slot = self.slot.lock();
        match slot.outcome {
            Some(outcome) => Poll::Ready(outcome),
            None => {
                let waker = cx.waker();
                match slot.wakers.iter_mut().find(|w| w.will_wake(waker)) {
                    Some(w) => w.clone_from(waker),
                    None => slot.wakers.push(waker.clone()),
                }
                Poll::Pending
            }
        }
    }
}

/// Resolves a [`MoveCompletion`]. If dropped without resolving, the signal
/// resolves to [`MoveOutcome::Abandoned`].
#[derive(Debug)]
pub(crate) struct Completer {
    slot: Arc<Mutex<Slot>>,
}
impl Completer {
    pub fn resolve(self, outcome: MoveOutcome) {
        self.set(outcome);
    }

    fn set(&self, outcome: MoveOutcome) {
        let wakers = {
            let mut slot = self.slot.lock();
            if slot.outcome.is_some() {
                return;
            }
            slot.outcome = Some(outcome);
            std::mem::take(&mut slot.wakers)
        };
        for waker in wakers {
            waker.wake();
        }
    }
}
impl Drop for Completer {
    fn drop(&mut self) {
        self.set(MoveOutcome::Abandoned);
    }
}
