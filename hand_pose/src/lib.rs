//! # hand_pose
//!
//! The 21-point hand skeleton model shared by every layer above it, plus the
//! two per-frame primitives that turn a raw landmark stream into something a
//! state machine can consume:
//!
//! * [`PoseSmoother`] - exponential smoothing of one hand slot's landmarks.
//! * [`classify`] - pure, frame-local gesture detectors (pinch, fist,
//!   V-sign) and the knuckle-spread depth estimate.
//! * [`synth`] - canonical synthetic poses for the simulation source and
//!   for tests.
//!
//! Everything here is stateless-per-frame except the smoother, which holds
//! exactly one pose. Temporal behavior (edge detection, cooldowns, mode
//! arbitration) lives upstream in `gesture_flow`.

pub mod classify;
pub mod skeleton;
pub mod smooth;
pub mod synth;

pub use classify::{estimate_depth, is_fist, is_v_sign, pinch, PinchSample};
pub use skeleton::{
    HandFrame, HandObservation, HandPose, Handedness, Landmark, Point3, LANDMARK_COUNT,
};
pub use smooth::PoseSmoother;
