//! Per-hand tracking state and pinch edge detection.
//!
//! The tracker owns the only mutable hand state in the system: two
//! [`HandState`] slots, created at startup and mutated once per camera frame
//! by [`HandTracker::update`]. Everything downstream reads these slots
//! through shared references within the same frame.

use std::time::{Duration, Instant};

use hand_pose::{classify, HandFrame, HandPose, Point3, PoseSmoother};

use crate::events::PinchEdge;
use crate::project::ViewProjection;

// ════════════════════════════════════════════════════════════════════════════
// Config
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug)]
pub struct TrackerConfig {
    /// Landmark smoothing factor, `(0, 1]`.
    pub smoothing_alpha: f32,
    /// Observations below this confidence are ignored for the frame.
    pub min_confidence: f32,
    /// Minimum spacing between accepted pinch-start edges per hand.
    pub pinch_cooldown: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            smoothing_alpha: 0.3,
            min_confidence: 0.7,
            pinch_cooldown: Duration::from_millis(300),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HandState
// ════════════════════════════════════════════════════════════════════════════

/// Everything tracked about one physical hand slot. Lives for the whole
/// session; `visible` is the only field reset at the top of each frame.
#[derive(Debug)]
pub struct HandState {
    pub visible: bool,
    smoother: PoseSmoother,
    /// Last smoothed pose - retained across visibility dropouts as the
    /// last-known-good pose.
    pub pose: Option<HandPose>,
    pub pinching: bool,
    pub pinch_strength: f32,
    /// Pinch center in normalized screen space.
    pub screen: Option<Point3>,
    /// World-space cursor position.
    pub world: Option<Point3>,
    pub fist: bool,
    pub v_sign: bool,
    last_pinch_start: Option<Instant>,
}

impl HandState {
    fn new(alpha: f32) -> Self {
        HandState {
            visible: false,
            smoother: PoseSmoother::new(alpha),
            pose: None,
            pinching: false,
            pinch_strength: 0.0,
            screen: None,
            world: None,
            fist: false,
            v_sign: false,
            last_pinch_start: None,
        }
    }

    fn clear(&mut self, alpha: f32) {
        *self = HandState::new(alpha);
    }
}

/// Read-only per-frame view of one hand slot, consumed by the arbiter.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandSnapshot {
    pub visible: bool,
    pub pinching: bool,
    pub pinch_strength: f32,
    pub fist: bool,
    pub v_sign: bool,
    pub screen: Option<Point3>,
    pub world: Option<Point3>,
}

impl From<&HandState> for HandSnapshot {
    fn from(h: &HandState) -> Self {
        HandSnapshot {
            visible: h.visible,
            pinching: h.pinching,
            pinch_strength: h.pinch_strength,
            fist: h.fist,
            v_sign: h.v_sign,
            screen: h.screen,
            world: h.world,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HandTracker
// ════════════════════════════════════════════════════════════════════════════

pub struct HandTracker {
    cfg: TrackerConfig,
    pub hands: [HandState; 2],
    pub projection: ViewProjection,
}

impl HandTracker {
    pub fn new(cfg: TrackerConfig) -> Self {
        HandTracker {
            hands: [
                HandState::new(cfg.smoothing_alpha),
                HandState::new(cfg.smoothing_alpha),
            ],
            projection: ViewProjection::default(),
            cfg,
        }
    }

    /// Keep the gesture→world mapping consistent after a window resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.projection.aspect = aspect;
    }

    /// Track the renderer's current field of view.
    pub fn set_fov(&mut self, fov_deg: f32) {
        self.projection.fov_deg = fov_deg;
    }

    /// Process one camera frame: smooth, classify, and emit debounced pinch
    /// edges. Must run to completion before the renderer reads any state for
    /// this tick.
    ///
    /// At most one `Start` is emitted per hand between resets of the pinch
    /// boolean - holding a pinch never re-fires. A `Start` inside the
    /// cooldown window is suppressed, but the stored pinch state still
    /// updates so the following release edge is measured correctly.
    pub fn update(&mut self, frame: &HandFrame, now: Instant) -> Vec<PinchEdge> {
        for hand in &mut self.hands {
            hand.visible = false;
        }

        let mut edges = Vec::new();

        for obs in &frame.hands {
            if obs.confidence < self.cfg.min_confidence {
                continue;
            }
            let slot = obs.handedness.slot();
            let state = &mut self.hands[slot];

            let smoothed = state.smoother.apply(&obs.pose);
            let pinch = classify::pinch(&smoothed);
            let depth = classify::estimate_depth(&smoothed);
            let world = self
                .projection
                .to_world(pinch.center.x, pinch.center.y, depth);

            state.visible = true;
            state.pose = Some(smoothed);
            state.fist = classify::is_fist(&smoothed);
            state.v_sign = classify::is_v_sign(&smoothed);
            state.screen = Some(pinch.center);
            state.world = Some(world);
            state.pinch_strength = pinch.strength;

            let was_pinching = state.pinching;
            if pinch.active && !was_pinching {
                let cooled = state
                    .last_pinch_start
                    .map_or(true, |t| now.duration_since(t) > self.cfg.pinch_cooldown);
                if cooled {
                    state.last_pinch_start = Some(now);
                    edges.push(PinchEdge::Start {
                        hand: slot,
                        screen: pinch.center,
                        world,
                        strength: pinch.strength,
                    });
                }
            } else if !pinch.active && was_pinching {
                edges.push(PinchEdge::End { hand: slot });
            }
            state.pinching = pinch.active;
        }

        edges
    }

    /// Per-frame view of both hand slots for the arbiter.
    pub fn snapshot(&self) -> [HandSnapshot; 2] {
        [(&self.hands[0]).into(), (&self.hands[1]).into()]
    }

    /// Full reset (explicit reset trigger only) - forgets smoothing history
    /// and cooldown clocks.
    pub fn reset(&mut self) {
        let alpha = self.cfg.smoothing_alpha;
        for hand in &mut self.hands {
            hand.clear(alpha);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
