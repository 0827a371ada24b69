//! gesture_replay - feed a scripted stream of synthetic hand frames through
//! the tracker + arbiter and print every emitted edge and action.
//!
//! Useful for eyeballing debounce and arbitration behavior without a camera
//! or a window.

use std::time::{Duration, Instant};

use gesture_flow::{ArbiterConfig, GestureAction, GestureArbiter, HandTracker, TrackerConfig, ViewContext};
use hand_pose::{synth, HandFrame, HandObservation, Handedness};

struct Step {
    label: &'static str,
    frame: HandFrame,
    /// Repeated for this many 16 ms ticks.
    ticks: u64,
    zoomed: bool,
}

fn hand(pose: hand_pose::HandPose, handedness: Handedness) -> HandObservation {
    HandObservation {
        pose,
        handedness,
        confidence: 0.95,
    }
}

fn one(pose: hand_pose::HandPose) -> HandFrame {
    HandFrame {
        hands: vec![hand(pose, Handedness::Right)],
    }
}

fn two(left: hand_pose::HandPose, right: hand_pose::HandPose) -> HandFrame {
    HandFrame {
        hands: vec![hand(left, Handedness::Left), hand(right, Handedness::Right)],
    }
}

fn script() -> Vec<Step> {
    vec![
        Step {
            label: "idle - no hands",
            frame: HandFrame::empty(),
            ticks: 5,
            zoomed: false,
        },
        Step {
            label: "open hand drifts in",
            frame: one(synth::open_hand(0.5, 0.5)),
            ticks: 10,
            zoomed: false,
        },
        Step {
            label: "pinch at top-left quadrant (held)",
            frame: one(synth::pinched_hand(0.2, 0.2)),
            ticks: 30,
            zoomed: false,
        },
        Step {
            label: "release",
            frame: one(synth::open_hand(0.2, 0.2)),
            ticks: 10,
            zoomed: false,
        },
        Step {
            label: "pinch-drag in zoomed view",
            frame: one(synth::pinched_hand(0.3, 0.5)),
            ticks: 5,
            zoomed: true,
        },
        Step {
            label: "drag to the right",
            frame: one(synth::pinched_hand(0.6, 0.5)),
            ticks: 20,
            zoomed: true,
        },
        Step {
            label: "both fists close together",
            frame: two(synth::fist_hand(0.4, 0.5), synth::fist_hand(0.6, 0.5)),
            ticks: 10,
            zoomed: true,
        },
        Step {
            label: "fists spread apart (zoom in)",
            frame: two(synth::fist_hand(0.2, 0.5), synth::fist_hand(0.8, 0.5)),
            ticks: 25,
            zoomed: true,
        },
        Step {
            label: "fists gone",
            frame: HandFrame::empty(),
            ticks: 5,
            zoomed: true,
        },
        Step {
            label: "V-sign to back out",
            frame: one(synth::v_sign_hand(0.5, 0.5)),
            ticks: 20,
            zoomed: true,
        },
    ]
}

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║   gesture_replay - scripted frames through tracker+arbiter   ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut tracker = HandTracker::new(TrackerConfig::default());
    let mut arbiter = GestureArbiter::new(ArbiterConfig::default());
    let mut zoom = 1.0_f32;
    let t0 = Instant::now();
    let mut tick = 0u64;

    for step in script() {
        println!("── {} ──", step.label);
        for _ in 0..step.ticks {
            let now = t0 + Duration::from_millis(16 * tick);
            tick += 1;

            let edges = tracker.update(&step.frame, now);
            let out = arbiter.resolve(
                &tracker.snapshot(),
                &edges,
                ViewContext {
                    zoomed: step.zoomed,
                    current_zoom: zoom,
                },
                now,
            );

            for edge in &edges {
                println!("   t={:>5}ms  edge   {:?}", 16 * (tick - 1), edge);
            }
            for action in &out.actions {
                if let GestureAction::ZoomTo { zoom: z } = action {
                    zoom = *z;
                }
                match action {
                    // Pan deltas arrive every tick while dragging; summarise.
                    GestureAction::PanMove { dx, dy } => {
                        println!("   t={:>5}ms  action PanMove dx={:+.3} dy={:+.3}", 16 * (tick - 1), dx, dy)
                    }
                    other => println!("   t={:>5}ms  action {:?}", 16 * (tick - 1), other),
                }
            }
        }
    }

    println!();
    println!("final zoom: {:.2}", zoom);
    println!();
}
