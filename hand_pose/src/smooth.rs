//! Per-hand landmark smoothing.
//!
//! Raw landmark streams jitter at the millimeter scale even for a perfectly
//! still hand, which is enough to flutter a distance threshold. Each hand
//! slot owns one `PoseSmoother`; cross-hand state does not exist.

use crate::skeleton::{HandPose, LANDMARK_COUNT};

/// Exponential smoother over one hand slot's landmark stream.
///
/// `smoothed' = smoothed + (raw - smoothed) * alpha` per coordinate. The
/// first observation is taken verbatim so tracking acquisition has no lag.
/// When the hand drops out of view the last pose is simply retained - the
/// caller stops feeding frames, and the next observation resumes from the
/// last-known-good pose instead of jumping from a decayed one.
#[derive(Clone, Debug)]
pub struct PoseSmoother {
    alpha: f32,
    smoothed: Option<HandPose>,
}

impl PoseSmoother {
    /// `alpha` in `(0, 1]`: lower = heavier smoothing and more lag, higher =
    /// more responsive and more jitter. The tuned value is 0.3.
    pub fn new(alpha: f32) -> Self {
        PoseSmoother {
            alpha: alpha.clamp(0.01, 1.0),
            smoothed: None,
        }
    }

    /// Fold one raw pose into the smoothed estimate and return the result.
    pub fn apply(&mut self, raw: &HandPose) -> HandPose {
        let next = match self.smoothed {
            None => *raw,
            Some(prev) => {
                let mut out = prev;
                for i in 0..LANDMARK_COUNT {
                    out.0[i].x += (raw.0[i].x - prev.0[i].x) * self.alpha;
                    out.0[i].y += (raw.0[i].y - prev.0[i].y) * self.alpha;
                    out.0[i].z += (raw.0[i].z - prev.0[i].z) * self.alpha;
                }
                out
            }
        };
        self.smoothed = Some(next);
        next
    }

    /// Last smoothed pose, if any observation has been seen.
    pub fn current(&self) -> Option<&HandPose> {
        self.smoothed.as_ref()
    }

    /// Forget everything (used only by the explicit full reset).
    pub fn reset(&mut self) {
        self.smoothed = None;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
