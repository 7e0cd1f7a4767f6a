use std::collections::VecDeque;
use std::time::Duration;

use speedcube_core::{Move, SliceQuery};
use speedcube_prefs::AnimationPreferences;

use crate::completion::Completer;

/// If at least this much of a twist is animated in one frame, just skip the
/// animation to reduce unnecessary flashing.
const MIN_TWIST_DELTA: f32 = 1.0 / 3.0;

/// Higher number means faster exponential increase in twist speed.
const EXP_TWIST_FACTOR: f32 = 0.5;

#[derive(Debug)]
pub(crate) struct TwistAnimationState<S> {
    /// Queue of twist animations to be displayed.
    queue: VecDeque<TwistAnimation<S>>,
    /// Maximum number of animations in the queue (reset when queue is empty).
    queue_max: usize,
    /// Progress of the animation in the current twist, from 0.0 to 1.0.
    progress: f32,
}
impl<S> Default for TwistAnimationState<S> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_max: 0,
            progress: 0.0,
        }
    }
}
impl<S> TwistAnimationState<S> {
    /// Steps the animation forward. Returns the animation that finished during
    /// this step, if any.
    pub fn proceed(
        &mut self,
        delta: Duration,
        prefs: &AnimationPreferences,
    ) -> Option<TwistAnimation<S>> {
        let Some(current) = self.queue.front() else {
            self.queue_max = 0;
            return None;
        };

        // `twist_duration` is in seconds (per one twist); `base_speed` is
        // fraction of twist per frame.
        let twist_duration = current
            .mv
            .duration()
            .map_or(prefs.twist_duration, |d| d.as_secs_f32());
        let base_speed = delta.as_secs_f32() / twist_duration;

        // Twist exponentially faster if there are/were more twists in the
        // queue.
        let speed_mod = match prefs.dynamic_twist_speed {
            true => ((self.queue_max - 1) as f32 * EXP_TWIST_FACTOR).exp(),
            false => 1.0,
        };
        let mut twist_delta = base_speed * speed_mod;
        // Cap the twist delta at 1.0, and also handle the case where
        // something went wrong with the calculation (e.g., division by zero).
        if !(0.0..MIN_TWIST_DELTA).contains(&twist_delta) {
            twist_delta = 1.0; // Instantly complete the twist.
        }

        self.progress += twist_delta;
        log::trace!("{} at {:.3}", current.mv, self.progress.min(1.0));
        if self.progress >= 1.0 {
            self.progress = 0.0;
            let finished = self.queue.pop_front();
            if self.queue.is_empty() {
                self.queue_max = 0;
            }
            finished
        } else {
            None
        }
    }

    pub fn push(&mut self, anim: TwistAnimation<S>) {
        self.queue.push_back(anim);

        // Update queue_max.
        self.queue_max = std::cmp::max(self.queue_max, self.queue.len());
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns the current animation and its raw progress.
    pub fn current(&self) -> Option<(&TwistAnimation<S>, f32)> {
        Some((self.queue.front()?, self.progress))
    }
}

#[derive(Debug)]
pub(crate) struct TwistAnimation<S> {
    pub mv: Move,
    /// Elements that rotate.
    pub query: SliceQuery,
    /// Cube state after the twist.
    pub state_after: S,
    pub completer: Completer,
}
