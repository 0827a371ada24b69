//! Landmark frame sources - simulated and real.
//!
//! The public interface is a stream of [`HandFrame`]s over an `mpsc`
//! channel. Consumers run the identical tracking pipeline whether the frames
//! came from synthesized poses or from real hardware; classification always
//! happens in-process.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use hand_pose::{synth, HandFrame, HandObservation, Handedness};

// ════════════════════════════════════════════════════════════════════════════
// FrameSource trait - unified interface for sim and hw
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`HandFrame`]s over a channel.
pub trait FrameSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<HandFrame>);
}

/// Spawn a frame source on its own thread and return the receiving end.
pub fn spawn_frame_source<S: FrameSource>(source: S) -> Receiver<HandFrame> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}

// ════════════════════════════════════════════════════════════════════════════
// SimFrameSource - keyboard/mouse simulation (always available)
// ════════════════════════════════════════════════════════════════════════════

/// One sample of the simulation window's input state, captured per frame by
/// the visualizer's poll loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimPulse {
    /// Mouse position normalized to the window, `[0, 1]²`, y down.
    pub mouse: (f32, f32),
    /// Left button held - pinched pose.
    pub pinch: bool,
    /// `F` held - a two-fist pair whose separation follows the mouse X.
    pub fist_pair: bool,
    /// `V` held - V-sign pose.
    pub v_sign: bool,
}

/// Translates [`SimPulse`]s into synthetic landmark frames.
///
/// The poses come from [`hand_pose::synth`], so the sim path exercises the
/// real classifiers rather than injecting ready-made gesture events. This
/// decouples the window event loop from everything downstream of it.
pub struct SimFrameSource {
    pub rx: Receiver<SimPulse>,
}

const SIM_CONFIDENCE: f32 = 0.95;

fn observation(pose: hand_pose::HandPose, handedness: Handedness) -> HandObservation {
    HandObservation {
        pose,
        handedness,
        confidence: SIM_CONFIDENCE,
    }
}

/// Build the frame for one pulse. Fist-pair wins over the other poses, the
/// same way a real pair of fists would occlude anything else.
pub fn frame_for_pulse(pulse: &SimPulse) -> HandFrame {
    let (mx, my) = pulse.mouse;

    if pulse.fist_pair {
        let spread = (mx - 0.5).abs().max(0.05);
        return HandFrame {
            hands: vec![
                observation(synth::fist_hand(0.5 - spread, my), Handedness::Left),
                observation(synth::fist_hand(0.5 + spread, my), Handedness::Right),
            ],
        };
    }

    let pose = if pulse.v_sign {
        synth::v_sign_hand(mx, my)
    } else if pulse.pinch {
        synth::pinched_hand(mx, my)
    } else {
        synth::open_hand(mx, my)
    };

    HandFrame {
        hands: vec![observation(pose, Handedness::Right)],
    }
}

impl FrameSource for SimFrameSource {
    fn run(self: Box<Self>, tx: Sender<HandFrame>) {
        for pulse in self.rx {
            if tx.send(frame_for_pulse(&pulse)).is_err() {
                return;
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// LeapFrameSource - real hardware (feature = "leap")
// ════════════════════════════════════════════════════════════════════════════

/// Frame source backed by a real LeapMotion controller.
///
/// LeapC reports millimeter positions with y up; the pipeline expects
/// normalized camera coordinates with y down, so each joint is mapped
/// through a fixed interaction box before the 21-landmark set is assembled
/// (wrist, then four joints per digit).
#[cfg(feature = "leap")]
pub struct LeapFrameSource;

#[cfg(feature = "leap")]
impl FrameSource for LeapFrameSource {
    fn run(self: Box<Self>, tx: Sender<HandFrame>) {
        use hand_pose::{HandPose, Point3};
        use leaprs::*;

        // Interaction box, in millimeters around the device.
        const SPAN_X: f32 = 400.0;
        const SPAN_Y: f32 = 400.0;
        const Y_BASE: f32 = 80.0;
        const SPAN_Z: f32 = 300.0;

        fn map(x: f32, y: f32, z: f32) -> Point3 {
            Point3 {
                x: (x / SPAN_X + 0.5).clamp(0.0, 1.0),
                y: (1.0 - (y - Y_BASE) / SPAN_Y).clamp(0.0, 1.0),
                z: (z / SPAN_Z).clamp(-1.0, 1.0),
            }
        }

        let mut connection = match Connection::create(ConnectionConfig::default()) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[leap] failed to create LeapC connection: {:?}", e);
                return;
            }
        };
        if let Err(e) = connection.open() {
            eprintln!("[leap] failed to open device: {:?}", e);
            return;
        }

        loop {
            let msg = match connection.poll(100) {
                Ok(m) => m,
                Err(_) => continue,
            };

            if let Event::Tracking(frame) = msg.event() {
                let mut out = HandFrame::empty();
                for hand in frame.hands() {
                    let mut pose = HandPose::zeroed();
                    // Palm center stands in for the wrist landmark; nothing
                    // downstream thresholds on it.
                    let palm = hand.palm().position();
                    pose.0[0] = map(palm.x, palm.y, palm.z);
                    let mut idx = 1usize;
                    for digit in hand.digits() {
                        for bone in [
                            digit.metacarpal(),
                            digit.proximal(),
                            digit.intermediate(),
                            digit.distal(),
                        ] {
                            if idx < hand_pose::LANDMARK_COUNT {
                                let j = bone.next_joint();
                                pose.0[idx] = map(j.x, j.y, j.z);
                                idx += 1;
                            }
                        }
                    }
                    let handedness = match hand.hand_type() {
                        HandType::Left => Handedness::Left,
                        HandType::Right => Handedness::Right,
                    };
                    out.hands.push(HandObservation {
                        pose,
                        handedness,
                        // LeapC only reports hands it is already confident
                        // about; there is no per-hand score to forward.
                        confidence: 1.0,
                    });
                }
                if tx.send(out).is_err() {
                    return;
                }
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_pose::classify;

    fn pulse(mouse: (f32, f32)) -> SimPulse {
        SimPulse {
            mouse,
            ..SimPulse::default()
        }
    }

    #[test]
    fn idle_pulse_gives_one_open_hand() {
        let f = frame_for_pulse(&pulse((0.5, 0.5)));
        assert_eq!(f.hands.len(), 1);
        let pose = &f.hands[0].pose;
        assert!(!classify::pinch(pose).active);
        assert!(!classify::is_fist(pose));
    }

    #[test]
    fn pinch_pulse_classifies_as_pinch_near_mouse() {
        let f = frame_for_pulse(&SimPulse {
            pinch: true,
            ..pulse((0.2, 0.2))
        });
        let s = classify::pinch(&f.hands[0].pose);
        assert!(s.active);
        assert!((s.center.x - 0.2).abs() < 0.1);
        assert!((s.center.y - 0.2).abs() < 0.15);
    }

    #[test]
    fn fist_pulse_gives_two_fists_tracking_mouse_x() {
        let close = frame_for_pulse(&SimPulse {
            fist_pair: true,
            ..pulse((0.55, 0.5))
        });
        let wide = frame_for_pulse(&SimPulse {
            fist_pair: true,
            ..pulse((0.9, 0.5))
        });
        for f in [&close, &wide] {
            assert_eq!(f.hands.len(), 2);
            assert!(f.hands.iter().all(|h| classify::is_fist(&h.pose)));
            assert_ne!(f.hands[0].handedness, f.hands[1].handedness);
        }

        let sep = |f: &HandFrame| {
            let a = classify::pinch(&f.hands[0].pose).center;
            let b = classify::pinch(&f.hands[1].pose).center;
            (a.x - b.x).abs()
        };
        assert!(sep(&wide) > sep(&close));
    }

    #[test]
    fn v_pulse_classifies_as_v_sign() {
        let f = frame_for_pulse(&SimPulse {
            v_sign: true,
            ..pulse((0.5, 0.5))
        });
        assert!(classify::is_v_sign(&f.hands[0].pose));
    }

    #[test]
    fn fist_pair_wins_over_pinch() {
        let f = frame_for_pulse(&SimPulse {
            fist_pair: true,
            pinch: true,
            ..pulse((0.6, 0.5))
        });
        assert_eq!(f.hands.len(), 2);
        assert!(f.hands.iter().all(|h| classify::is_fist(&h.pose)));
    }
}
