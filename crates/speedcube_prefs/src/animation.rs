use std::time::Duration;

use eyre::WrapErr;
use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Seconds per quarter turn during interactive play.
    pub twist_duration: f32,
    /// Seconds per quarter turn when replaying a move sequence.
    pub replay_twist_duration: f32,
    /// Whether queued turns play faster as the queue grows.
    pub dynamic_twist_speed: bool,
    pub twist_interpolation: InterpolateFn,
    pub concurrent_moves: ConcurrentMovePolicy,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_duration: 0.3,
            replay_twist_duration: 0.1,
            dynamic_twist_speed: true,
            twist_interpolation: InterpolateFn::default(),
            concurrent_moves: ConcurrentMovePolicy::default(),
        }
    }
}

impl AnimationPreferences {
    /// Returns the time per quarter turn when replaying a move sequence, or an
    /// error if `replay_twist_duration` is not a valid number of seconds.
    pub fn replay_duration(&self) -> eyre::Result<Duration> {
        Duration::try_from_secs_f32(self.replay_twist_duration)
            .wrap_err_with(|| format!("invalid replay_twist_duration {}", self.replay_twist_duration))
    }
}

/// What to do with a move requested while another is still rotating.
#[derive(
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantArray,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ConcurrentMovePolicy {
    /// Complete the new move immediately without changing the cube.
    #[default]
    Drop,
    /// Run the new move after the ones before it.
    Queue,
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(
        Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, VariantArray,
    )]
    #[serde(rename_all = "snake_case")]
    pub enum InterpolateFn {
        Lerp,
        Cosine,
        #[default]
        QuadraticInOut,
        Cubic,
        Circular,
        Bounce,
        Overshoot,
        CriticallyDamped,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1].
        pub fn interpolate(self, mut t: f32) -> f32 {
            match self {
                Self::Lerp => t,

                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

                Self::QuadraticInOut => {
                    if t < 0.5 {
                        2.0 * t * t
                    } else {
                        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                    }
                }

                Self::Cubic => (3.0 - 2.0 * t) * t * t,

                Self::Circular => {
                    if t < 0.5 {
                        (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) * 0.5
                    } else {
                        (1.0 + (1.0 - (-2.0 * t + 2.0).powi(2)).sqrt()) * 0.5
                    }
                }

                Self::Bounce => {
                    // https://easings.net/#easeOutBounce
                    let n1 = 7.5625;
                    let d1 = 2.75;

                    if t < 1.0 / d1 {
                        n1 * t * t
                    } else if t < 2.0 / d1 {
                        t -= 1.5 / d1;
                        n1 * t * t + 0.75
                    } else if t < 2.5 / d1 {
                        t -= 2.25 / d1;
                        n1 * t * t + 0.9375
                    } else {
                        t -= 2.625 / d1;
                        n1 * t * t + 0.984375
                    }
                }
                Self::Overshoot => {
                    // https://easings.net/#easeOutBack
                    let c1 = 1.70158;
                    let c3 = c1 + 1.0;
                    1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
                }
                Self::CriticallyDamped => (-5.0 * t - 1.0) * (-8.0 * t).exp() + 1.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray as _;

    use super::*;

    #[test]
    fn test_interpolation_endpoints() {
        for &f in InterpolateFn::VARIANTS {
            assert!(f.interpolate(0.0).abs() < 0.01, "{f:?}");
            assert!((f.interpolate(1.0) - 1.0).abs() < 0.01, "{f:?}");
        }
    }

    #[test]
    fn test_quadratic_in_out_is_symmetric() {
        let f = InterpolateFn::QuadraticInOut;
        assert_eq!(0.5, f.interpolate(0.5));
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((f.interpolate(t) + f.interpolate(1.0 - t) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_replay_duration() {
        let mut prefs = AnimationPreferences::default();
        let replay = prefs.replay_duration().unwrap();
        assert!(replay.abs_diff(Duration::from_millis(100)) < Duration::from_micros(1));
        for bad in [-0.1, f32::NAN, f32::INFINITY, 1e30] {
            prefs.replay_twist_duration = bad;
            let err = prefs.replay_duration().unwrap_err();
            assert!(err.to_string().contains("invalid replay_twist_duration"), "{err}");
        }
    }

    #[test]
    fn test_policy_names() {
        assert_eq!("drop", ConcurrentMovePolicy::Drop.to_string());
        assert_eq!(Ok(ConcurrentMovePolicy::Queue), "queue".parse());
        assert!("later".parse::<ConcurrentMovePolicy>().is_err());
    }
}
