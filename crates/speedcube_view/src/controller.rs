use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use cgmath::{Deg, Rad};
use parking_lot::Mutex;
use speedcube_core::geometry::{rotation_angle, snap_angle};
use speedcube_core::{CubeState, Move, MoveError, SliceGeometry, SliceQuery};
use speedcube_prefs::{AnimationPreferences, ConcurrentMovePolicy};

use crate::animations::{TwistAnimation, TwistAnimationState};
use crate::completion::{MoveCompletion, MoveOutcome};

const IDLE: u8 = 0;
const ROTATING: u8 = 1;

/// Whether a rotation is in flight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No rotation is in flight.
    Idle,
    /// A rotation is being animated.
    Rotating,
}

/// Rotation in flight, as seen by a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveRotation {
    /// Move being animated.
    pub mv: Move,
    /// Elements that rotate.
    pub query: SliceQuery,
    /// Interpolated progress from 0 to 1.
    pub t: f32,
    /// Current angle about the positive axis of `query.axis`.
    pub angle: Rad<f32>,
}

/// Sequences state transforms of one cube with their animations.
///
/// At most one rotation is animated at a time. What happens to a move
/// requested while another is in flight depends on the
/// [`ConcurrentMovePolicy`].
#[derive(Debug)]
pub struct RotationController<S> {
    geometry: SliceGeometry,
    prefs: AnimationPreferences,
    phase: AtomicU8,
    inner: Mutex<Inner<S>>,
}

#[derive(Debug)]
struct Inner<S> {
    /// State after all completed rotations.
    state: S,
    /// State after all accepted rotations.
    pending_state: S,
    twist_anim: TwistAnimationState<S>,
    /// Most recent rotation to finish, at its snapped final angle.
    last_completed: Option<ActiveRotation>,
}

impl<S: CubeState> RotationController<S> {
    /// Constructs a controller for a cube in `state`.
    pub fn new(state: S, geometry: SliceGeometry, prefs: AnimationPreferences) -> Self {
        Self {
            geometry,
            prefs,
            phase: AtomicU8::new(IDLE),
            inner: Mutex::new(Inner {
                pending_state: state.clone(),
                state,
                twist_anim: TwistAnimationState::default(),
                last_completed: None,
            }),
        }
    }

    /// Returns the geometry used for slice queries.
    pub fn geometry(&self) -> SliceGeometry {
        self.geometry
    }
    /// Returns the policy for moves requested during a rotation.
    pub fn policy(&self) -> ConcurrentMovePolicy {
        self.prefs.concurrent_moves
    }
    /// Returns whether a rotation is in flight.
    pub fn phase(&self) -> Phase {
        match self.phase.load(Ordering::Acquire) {
            IDLE => Phase::Idle,
            _ => Phase::Rotating,
        }
    }
    /// Returns the state after all completed rotations.
    pub fn state(&self) -> S {
        self.inner.lock().state.clone()
    }
    /// Returns the number of rotations in flight or waiting.
    pub fn queue_len(&self) -> usize {
        self.inner.lock().twist_anim.len()
    }

    /// Requests a rotation.
    ///
    /// Returns an error if the move is invalid for the cube. Otherwise returns
    /// a signal that resolves when the move ends. Under
    /// [`ConcurrentMovePolicy::Drop`], a move requested while another is in
    /// flight resolves immediately to [`MoveOutcome::Dropped`].
    pub fn request(&self, mv: Move) -> Result<MoveCompletion, MoveError> {
        match self.policy() {
            ConcurrentMovePolicy::Drop => {
                if self
                    .phase
                    .compare_exchange(IDLE, ROTATING, Ordering::AcqRel, Ordering::Acquire)
                    .is_err()
                {
                    log::info!("dropped {mv} because another rotation is in flight");
                    return Ok(MoveCompletion::resolved(MoveOutcome::Dropped));
                }
                let mut inner = self.inner.lock();
                self.enqueue(&mut inner, mv)
            }
            ConcurrentMovePolicy::Queue => {
                let mut inner = self.inner.lock();
                self.phase.store(ROTATING, Ordering::Release);
                self.enqueue(&mut inner, mv)
            }
        }
    }

    /// Adds a rotation to the queue. The caller holds the lock and has set
    /// the phase to rotating.
    fn enqueue(&self, inner: &mut Inner<S>, mv: Move) -> Result<MoveCompletion, MoveError> {
        let state_after = match inner.pending_state.apply_move(mv) {
            Ok(s) => s,
            Err(e) => {
                self.release_if_idle(inner);
                return Err(e);
            }
        };

        let query = self.geometry.query(mv);
        if query.cubies.is_empty() {
            self.release_if_idle(inner);
            return Ok(MoveCompletion::resolved(MoveOutcome::NoElements));
        }

        log::debug!("starting {mv}");
        let (completer, completion) = MoveCompletion::new();
        inner.pending_state = state_after.clone();
        inner.twist_anim.push(TwistAnimation {
            mv,
            query,
            state_after,
            completer,
        });
        Ok(completion)
    }

    fn release_if_idle(&self, inner: &Inner<S>) {
        if inner.twist_anim.is_empty() {
            self.phase.store(IDLE, Ordering::Release);
        }
    }

    /// Advances the animation by `delta`. Returns whether the cube should be
    /// redrawn.
    pub fn tick(&self, delta: Duration) -> bool {
        let mut inner = self.inner.lock();
        if inner.twist_anim.is_empty() {
            return false;
        }
        if let Some(finished) = inner.twist_anim.proceed(delta, &self.prefs) {
            let TwistAnimation {
                mv,
                query,
                state_after,
                completer,
            } = finished;
            let angle = snap_angle(rotation_angle(mv));
            log::debug!("completed {mv} at {:.0} degrees", Deg::from(angle).0);
            inner.last_completed = Some(ActiveRotation {
                mv,
                query,
                t: 1.0,
                angle,
            });
            inner.state = state_after;
            self.release_if_idle(&inner);
            completer.resolve(MoveOutcome::Completed);
        }
        true
    }

    /// Returns the most recent rotation to finish, with its angle snapped to
    /// a multiple of 90 degrees. A renderer applies this once the rotation is
    /// no longer returned by [`Self::current()`].
    pub fn last_completed(&self) -> Option<ActiveRotation> {
        self.inner.lock().last_completed.clone()
    }

    /// Returns the rotation in flight, if any.
    pub fn current(&self) -> Option<ActiveRotation> {
        let inner = self.inner.lock();
        let (anim, progress) = inner.twist_anim.current()?;
        let t = self.prefs.twist_interpolation.interpolate(progress);
        Some(ActiveRotation {
            mv: anim.mv,
            query: anim.query.clone(),
            t,
            angle: rotation_angle(anim.mv) * t,
        })
    }
}
