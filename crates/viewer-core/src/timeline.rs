use crate::error::ConfigError;
use crate::pose::{Pose, PoseConfig};

/// Normalize a scroll offset against the total scrollable extent.
///
/// Returns 0 when the extent is not positive (nothing to scroll), otherwise
/// `offset / extent` clamped to [0, 1].
#[inline]
pub fn scroll_fraction(offset: f64, extent: f64) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    ((offset / extent) as f32).clamp(0.0, 1.0)
}

/// Maps normalized scroll progress onto the two-pose camera timeline.
///
/// Exactly two endpoints define the entire motion; the mapping is
/// progress-proportional, not time-proportional. The only mutable state is
/// the last-applied progress; the interpolated pose is always recomputed.
pub struct ScrollTimeline {
    start: Pose,
    end: Pose,
    progress: f32,
}

impl ScrollTimeline {
    /// Build a timeline from an explicit config.
    ///
    /// Fails before the first apply if either pose is missing or malformed,
    /// rather than silently no-oping into a frozen camera.
    pub fn new(config: &PoseConfig) -> Result<Self, ConfigError> {
        let start = config.start.ok_or(ConfigError::MissingPose("start"))?;
        let end = config.end.ok_or(ConfigError::MissingPose("end"))?;
        start.validate("start")?;
        end.validate("end")?;
        Ok(Self {
            start,
            end,
            progress: 0.0,
        })
    }

    pub fn start(&self) -> &Pose {
        &self.start
    }

    pub fn end(&self) -> &Pose {
        &self.end
    }

    /// Last progress value applied via [`set_progress`](Self::set_progress).
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Pure interpolation at `progress`, clamped to [0, 1].
    ///
    /// The endpoints are returned as-is so that progress 0 and 1 reproduce
    /// the captured poses bit for bit.
    pub fn state_at(&self, progress: f32) -> Pose {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        if t <= 0.0 {
            return self.start;
        }
        if t >= 1.0 {
            return self.end;
        }
        self.start.lerp(&self.end, t)
    }

    /// Record a progress update from the scroll source and return the
    /// interpolated state. Out-of-range input is recoverable: it is clamped
    /// and logged, never fatal.
    pub fn set_progress(&mut self, progress: f32) -> Pose {
        if !(0.0..=1.0).contains(&progress) {
            log::warn!("scroll progress {progress} outside [0, 1], clamping");
        }
        let state = self.state_at(progress);
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        state
    }
}
