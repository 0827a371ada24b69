//! # gesture_flow
//!
//! The temporal half of the gesture pipeline. `hand_pose` answers "what does
//! this single frame look like"; this crate answers "what did the user just
//! *do*":
//!
//! * [`HandTracker`] - owns the two per-hand state slots, applies smoothing
//!   and classification every frame, and turns the continuous pinch boolean
//!   into debounced start/end edges with a cooldown.
//! * [`GestureArbiter`] - decides which subsystem owns the frame's input.
//!   Two-hand fist zoom, single-hand pinch/pan, and V-sign dismissal are
//!   mutually exclusive; the arbiter enforces a fixed priority order and
//!   emits one coherent stream of [`GestureAction`]s.
//!
//! Both are driven by an explicit `update`/`resolve` call per camera frame
//! with the clock passed in, so every temporal property (debounce bounds,
//! cooldowns, forced mode exits) is testable without a camera or a timer.

pub mod arbiter;
pub mod events;
pub mod project;
pub mod tracker;

pub use arbiter::{ArbiterConfig, FrameOutput, GestureArbiter, ViewContext};
pub use events::{Feedback, FeedbackKind, GestureAction, PinchEdge};
pub use project::ViewProjection;
pub use tracker::{HandSnapshot, HandState, HandTracker, TrackerConfig};
