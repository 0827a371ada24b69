//! Top-level application: the per-frame pipeline and the run loop.
//!
//! `App` owns the entire gesture core (tracker, arbiter, view flow) plus the
//! scene sink and the feedback chime. `process_frame` is the single entry
//! point that mutates gesture state; the run loop calls it for every frame
//! drained from the source channel, then hands the resulting scene to the
//! visualizer. Gesture processing for a tick always completes before the
//! renderer reads anything.

use std::sync::mpsc::{self, TryRecvError};
use std::time::Instant;

use chart_state::{ViewConfig, ViewFlow, ViewMode};
use gesture_flow::{ArbiterConfig, GestureArbiter, HandSnapshot, HandTracker, TrackerConfig};
use hand_pose::HandFrame;

use crate::chime::Chime;
use crate::scene::SceneState;
use crate::source::spawn_frame_source;
use crate::visualizer::{Visualizer, WIN_H, WIN_W};

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
#[derive(Clone, Copy, Debug)]
pub struct AppConfig {
    pub tracker: TrackerConfig,
    pub arbiter: ArbiterConfig,
    pub view: ViewConfig,
    /// MIDI feedback chimes on gesture events.
    pub chime: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            tracker: TrackerConfig::default(),
            arbiter: ArbiterConfig::default(),
            view: ViewConfig::default(),
            chime: true,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// App
// ════════════════════════════════════════════════════════════════════════════

pub struct App {
    tracker: HandTracker,
    arbiter: GestureArbiter,
    view: ViewFlow,
    scene: SceneState,
    chime: Option<Chime>,
    /// Composite status line: hand summary plus the view's state line.
    pub status: String,
}

impl App {
    pub fn new(cfg: &AppConfig) -> Self {
        let view = ViewFlow::new(cfg.view);
        let scene = SceneState::new(view.camera());
        let mut tracker = HandTracker::new(cfg.tracker);
        tracker.set_aspect(WIN_W as f32 / WIN_H as f32);

        App {
            tracker,
            arbiter: GestureArbiter::new(cfg.arbiter),
            view,
            scene,
            chime: if cfg.chime { Some(Chime::spawn()) } else { None },
            status: "Show a hand to the camera".to_string(),
        }
    }

    /// Process one camera frame through the whole pipeline:
    /// smooth/classify/edge-detect, arbitrate, transition the view, and
    /// accumulate the render signals into the scene.
    pub fn process_frame(&mut self, frame: &HandFrame, now: Instant) {
        let edges = self.tracker.update(frame, now);
        let out = self
            .arbiter
            .resolve(&self.tracker.snapshot(), &edges, self.view.context(), now);

        for action in out.actions {
            for signal in self.view.handle(action) {
                self.scene.apply(&signal);
            }
        }

        // Keep the tracker's cursor projection in step with the camera.
        self.tracker.set_fov(self.view.camera().fov_deg);

        if let Some(chime) = &self.chime {
            for fb in &out.feedback {
                chime.play(fb.kind);
            }
        }

        self.status = self.compose_status();
    }

    /// Explicit full reset: view, arbiter modes, and tracking history.
    pub fn reset(&mut self) {
        self.arbiter.reset();
        self.tracker.reset();
        for signal in self.view.reset() {
            self.scene.apply(&signal);
        }
        self.tracker.set_fov(self.view.camera().fov_deg);
        self.status = self.view.status.clone();
    }

    fn compose_status(&self) -> String {
        let hands = self.tracker.snapshot();
        if !hands[0].visible && !hands[1].visible {
            return "Show a hand to the camera".to_string();
        }

        let glyph = |h: &HandSnapshot| {
            if !h.visible {
                "-"
            } else if h.fist {
                "fist"
            } else if h.pinching {
                "pinch"
            } else if h.v_sign {
                "v"
            } else {
                "open"
            }
        };
        format!(
            "L:{} R:{}  {}",
            glyph(&hands[0]),
            glyph(&hands[1]),
            self.view.status
        )
    }

    // ── accessors for the render loop ─────────────────────────────────────

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn hands(&self) -> [HandSnapshot; 2] {
        self.tracker.snapshot()
    }

    pub fn fist_mode(&self) -> bool {
        self.arbiter.fist_mode()
    }

    pub fn is_panning(&self) -> bool {
        self.arbiter.is_panning()
    }

    pub fn current_zoom(&self) -> f32 {
        self.view.current_zoom()
    }

    pub fn mode(&self) -> ViewMode {
        self.view.mode()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(chime) = &self.chime {
            chime.quit();
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() - the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application.
///
/// Creates the visualizer window, spawns the frame source (simulation by
/// default, hardware with `--features leap`), and drives the frame/render
/// loop at ~60 fps.
pub fn run(cfg: AppConfig) -> Result<(), String> {
    // ── Sim input channel (visualizer → frame source) ─────────────────────
    let (sim_tx, sim_rx) = mpsc::channel();

    // ── Visualizer (owns the window and the sim pulse sender) ─────────────
    let mut vis = Visualizer::new(sim_tx)?;

    // ── Frame source ──────────────────────────────────────────────────────
    #[cfg(feature = "leap")]
    let frame_rx = {
        drop(sim_rx);
        spawn_frame_source(crate::source::LeapFrameSource)
    };
    #[cfg(not(feature = "leap"))]
    let frame_rx = spawn_frame_source(crate::source::SimFrameSource { rx: sim_rx });

    // ── App state ─────────────────────────────────────────────────────────
    let mut app = App::new(&cfg);

    // ── Main loop ─────────────────────────────────────────────────────────
    while vis.is_open() {
        let input = vis.poll_input();
        if !input.running {
            break;
        }
        if input.reset {
            app.reset();
        }

        // Drain every pending camera frame before rendering this tick. A
        // dead source (hardware unavailable) leaves the view idling in the
        // overview; the failure itself was reported when the source exited.
        loop {
            match frame_rx.try_recv() {
                Ok(frame) => app.process_frame(&frame, Instant::now()),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        let hands = app.hands();
        vis.render(
            app.scene(),
            &hands,
            app.fist_mode(),
            app.is_panning(),
            app.current_zoom(),
            &app.status,
        );
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use chart_state::{Direction, ModelKey, PanOffset};
    use hand_pose::{synth, HandObservation, Handedness};

    fn quiet_app() -> App {
        App::new(&AppConfig {
            chime: false,
            ..AppConfig::default()
        })
    }

    fn one_hand(pose: hand_pose::HandPose) -> HandFrame {
        HandFrame {
            hands: vec![HandObservation {
                pose,
                handedness: Handedness::Right,
                confidence: 0.95,
            }],
        }
    }

    fn two_fists(spread: f32, y: f32) -> HandFrame {
        HandFrame {
            hands: vec![
                HandObservation {
                    pose: synth::fist_hand(0.5 - spread, y),
                    handedness: Handedness::Left,
                    confidence: 0.95,
                },
                HandObservation {
                    pose: synth::fist_hand(0.5 + spread, y),
                    handedness: Handedness::Right,
                    confidence: 0.95,
                },
            ],
        }
    }

    #[test]
    fn pinch_in_top_left_selects_east() {
        let mut app = quiet_app();
        let t0 = Instant::now();
        app.process_frame(&one_hand(synth::pinched_hand(0.2, 0.2)), t0);
        assert_eq!(app.mode(), ViewMode::DirectionSelected(Direction::East));
        assert_eq!(
            app.scene().active_model,
            ModelKey::Chart(Direction::East)
        );
    }

    /// Feed `count` copies of the frame 16 ms apart, starting at
    /// `t0 + offset_ms`. Several frames are needed for a pose change to work
    /// through the landmark smoother.
    fn feed(app: &mut App, frame: &HandFrame, t0: Instant, offset_ms: u64, count: u64) {
        for i in 0..count {
            app.process_frame(frame, t0 + Duration::from_millis(offset_ms + 16 * i));
        }
    }

    #[test]
    fn double_pinch_same_quadrant_zooms() {
        let mut app = quiet_app();
        let t0 = Instant::now();
        feed(&mut app, &one_hand(synth::pinched_hand(0.5, 0.1)), t0, 0, 3);
        assert_eq!(app.mode(), ViewMode::DirectionSelected(Direction::North));

        // Release long enough for the smoothed pose to open, then re-pinch
        // past the cooldown.
        feed(&mut app, &one_hand(synth::open_hand(0.5, 0.1)), t0, 200, 12);
        feed(&mut app, &one_hand(synth::pinched_hand(0.5, 0.1)), t0, 600, 6);
        assert_eq!(app.mode(), ViewMode::Zoomed(Direction::North));
        assert_eq!(
            app.scene().active_model,
            ModelKey::Detail(Direction::North)
        );
    }

    #[test]
    fn fist_pair_drives_zoom_and_scene_camera() {
        let mut app = quiet_app();
        let t0 = Instant::now();

        app.process_frame(&two_fists(0.1, 0.5), t0);
        assert!(app.fist_mode());
        let fov_before = app.scene().camera.fov_deg;

        // Spread the hands over several frames; zoom rises, fov narrows.
        for i in 1..30u64 {
            app.process_frame(
                &two_fists(0.1 + i as f32 * 0.01, 0.5),
                t0 + Duration::from_millis(16 * i),
            );
        }
        assert!(app.current_zoom() > 1.2, "zoom {}", app.current_zoom());
        assert!(app.scene().camera.fov_deg < fov_before);
    }

    #[test]
    fn v_sign_backs_out_of_detail_view() {
        let mut app = quiet_app();
        let t0 = Instant::now();
        feed(&mut app, &one_hand(synth::pinched_hand(0.5, 0.1)), t0, 0, 3);
        feed(&mut app, &one_hand(synth::open_hand(0.5, 0.1)), t0, 200, 12);
        feed(&mut app, &one_hand(synth::pinched_hand(0.5, 0.1)), t0, 600, 6);
        assert_eq!(app.mode(), ViewMode::Zoomed(Direction::North));

        // Release the pinch, then hold a V until the smoothed pose settles.
        feed(&mut app, &one_hand(synth::open_hand(0.5, 0.3)), t0, 800, 12);
        feed(&mut app, &one_hand(synth::v_sign_hand(0.5, 0.3)), t0, 1100, 12);
        assert_eq!(app.mode(), ViewMode::DirectionSelected(Direction::North));
    }

    #[test]
    fn reset_returns_to_overview_and_zeroes_offsets() {
        let mut app = quiet_app();
        let t0 = Instant::now();
        app.process_frame(&one_hand(synth::pinched_hand(0.2, 0.2)), t0);
        assert_ne!(app.mode(), ViewMode::Overview);

        app.reset();
        assert_eq!(app.mode(), ViewMode::Overview);
        assert_eq!(app.scene().active_model, ModelKey::Center);
        for d in Direction::all() {
            assert_eq!(app.scene().offset(d), PanOffset::default());
        }
    }

    #[test]
    fn idle_frames_report_idle_status() {
        let mut app = quiet_app();
        app.process_frame(&HandFrame::empty(), Instant::now());
        assert_eq!(app.status, "Show a hand to the camera");
    }
}
