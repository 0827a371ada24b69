//! The view state machine.
//!
//! Three mutually exclusive modes - overview, direction-selected, zoomed -
//! with the camera/model side effects bound to each transition. All
//! continuous view state (zoom level, per-direction pan offsets, camera
//! pose) is owned here and mutated only through [`ViewFlow::handle`] and
//! [`ViewFlow::reset`].
//!
//! Zoom is implemented as field-of-view narrowing, never as camera travel:
//! `fov = base / sqrt(zoom)`, clamped. The camera position stays fixed, so
//! zoom and pan cannot interfere - pan moves the active direction's model
//! offset in the XY plane only.

use gesture_flow::{GestureAction, ViewContext};

use crate::data;
use crate::direction::Direction;

// ════════════════════════════════════════════════════════════════════════════
// Config
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug)]
pub struct ViewConfig {
    pub base_fov: f32,
    pub fov_min: f32,
    pub fov_max: f32,
    /// Normalized-screen pan delta → world offset gain.
    pub pan_sensitivity: f32,
    /// Fixed camera distance from the chart plane.
    pub camera_z: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            base_fov: 75.0,
            fov_min: 20.0,
            fov_max: 120.0,
            pan_sensitivity: 4.0,
            camera_z: 2.5,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// State / signal types
// ════════════════════════════════════════════════════════════════════════════

/// The discrete application mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Overview,
    DirectionSelected(Direction),
    Zoomed(Direction),
}

/// Which chart asset the renderer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelKey {
    /// The full traditional chart.
    Center,
    /// One direction's quadrant chart.
    Chart(Direction),
    /// One direction's detailed lodge chart.
    Detail(Direction),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub fov_deg: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

/// Outbound signal for the rendering surface and UI collaborators. The core
/// emits these and never depends on what is done with them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderSignal {
    SetActiveModel(ModelKey),
    SetCameraPose(CameraPose),
    SetModelOffset(Direction, PanOffset),
    StateChanged(ViewMode),
}

// ════════════════════════════════════════════════════════════════════════════
// ViewFlow
// ════════════════════════════════════════════════════════════════════════════

pub struct ViewFlow {
    cfg: ViewConfig,
    mode: ViewMode,
    current_zoom: f32,
    /// Pan offset per direction - independent, persisted across zoom cycles.
    offsets: [PanOffset; 4],
    /// Zoom level per direction, restored on re-entry.
    saved_zooms: [f32; 4],
    camera: CameraPose,
    initial_camera: CameraPose,
    /// Human-readable state line for the status bar.
    pub status: String,
}

impl ViewFlow {
    pub fn new(cfg: ViewConfig) -> Self {
        let camera = CameraPose {
            x: 0.0,
            y: 0.0,
            z: cfg.camera_z,
            fov_deg: cfg.base_fov,
        };
        ViewFlow {
            cfg,
            mode: ViewMode::Overview,
            current_zoom: 1.0,
            offsets: [PanOffset::default(); 4],
            saved_zooms: [1.0; 4],
            camera,
            initial_camera: camera,
            status: "Pinch a quadrant to choose a direction".to_string(),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    pub fn current_zoom(&self) -> f32 {
        self.current_zoom
    }

    pub fn offset(&self, d: Direction) -> PanOffset {
        self.offsets[d.index()]
    }

    /// What the arbiter needs to know this frame.
    pub fn context(&self) -> ViewContext {
        ViewContext {
            zoomed: matches!(self.mode, ViewMode::Zoomed(_)),
            current_zoom: self.current_zoom,
        }
    }

    fn fov_for(&self, zoom: f32) -> f32 {
        (self.cfg.base_fov / zoom.max(1e-3).sqrt()).clamp(self.cfg.fov_min, self.cfg.fov_max)
    }

    // ── action processing ─────────────────────────────────────────────────

    /// Apply one arbitrated gesture action and return the render signals it
    /// produced.
    pub fn handle(&mut self, action: GestureAction) -> Vec<RenderSignal> {
        match action {
            GestureAction::Select { screen, .. } => self.select_at(screen.x, screen.y),
            GestureAction::PanStart { .. } => {
                self.status = "Panning - drag to move the chart".to_string();
                Vec::new()
            }
            GestureAction::PanMove { dx, dy } => self.pan_by(dx, dy),
            GestureAction::PanEnd => {
                if let ViewMode::Zoomed(d) = self.mode {
                    let o = self.offsets[d.index()];
                    self.status = format!(
                        "{} detail - offset ({:.2}, {:.2})",
                        data::info(d).guardian,
                        o.x,
                        o.y
                    );
                }
                Vec::new()
            }
            GestureAction::ZoomStart => {
                self.status = "Fist zoom - spread or close both hands".to_string();
                Vec::new()
            }
            GestureAction::ZoomTo { zoom } => {
                self.current_zoom = zoom;
                self.camera.fov_deg = self.fov_for(zoom);
                vec![RenderSignal::SetCameraPose(self.camera)]
            }
            GestureAction::ZoomEnd { .. } => {
                if let ViewMode::Zoomed(d) = self.mode {
                    self.saved_zooms[d.index()] = self.current_zoom;
                    self.status = format!(
                        "{} detail - zoom {:.0}%",
                        data::info(d).guardian,
                        self.current_zoom * 100.0
                    );
                }
                Vec::new()
            }
            GestureAction::Dismiss => self.dismiss(),
        }
    }

    /// Pinch landed at a normalized screen position while not zoomed.
    fn select_at(&mut self, x: f32, y: f32) -> Vec<RenderSignal> {
        let quadrant = Direction::from_screen(x, y);
        match self.mode {
            ViewMode::Overview => self.enter_selected(quadrant),
            ViewMode::DirectionSelected(d) if d == quadrant => self.enter_zoomed(quadrant),
            // Switching directions directly, bypassing the overview.
            ViewMode::DirectionSelected(_) => self.enter_selected(quadrant),
            ViewMode::Zoomed(_) => Vec::new(),
        }
    }

    fn enter_selected(&mut self, d: Direction) -> Vec<RenderSignal> {
        self.mode = ViewMode::DirectionSelected(d);
        self.current_zoom = 1.0;
        self.camera = CameraPose {
            fov_deg: self.cfg.base_fov,
            ..self.initial_camera
        };
        let info = data::info(d);
        self.status = format!(
            "{} ({}) - pinch the {} quadrant again to zoom in",
            info.guardian,
            info.season.name(),
            d.name()
        );
        vec![
            RenderSignal::SetActiveModel(ModelKey::Chart(d)),
            RenderSignal::SetCameraPose(self.camera),
            RenderSignal::StateChanged(self.mode),
        ]
    }

    fn enter_zoomed(&mut self, d: Direction) -> Vec<RenderSignal> {
        self.mode = ViewMode::Zoomed(d);
        // Restore this direction's saved view; defaults are zoom 1.0 and a
        // centered model.
        self.current_zoom = self.saved_zooms[d.index()];
        self.camera.fov_deg = self.fov_for(self.current_zoom);
        let info = data::info(d);
        self.status = format!(
            "{} detail - pinch-drag to pan, both fists to zoom, V to go back",
            info.guardian
        );
        vec![
            RenderSignal::SetActiveModel(ModelKey::Detail(d)),
            RenderSignal::SetCameraPose(self.camera),
            RenderSignal::SetModelOffset(d, self.offsets[d.index()]),
            RenderSignal::StateChanged(self.mode),
        ]
    }

    fn pan_by(&mut self, dx: f32, dy: f32) -> Vec<RenderSignal> {
        let ViewMode::Zoomed(d) = self.mode else {
            return Vec::new();
        };
        let o = &mut self.offsets[d.index()];
        o.x += dx * self.cfg.pan_sensitivity;
        // Screen y grows downward, world y up.
        o.y += -dy * self.cfg.pan_sensitivity;
        vec![RenderSignal::SetModelOffset(d, *o)]
    }

    /// V-sign exit: back to the selected level, keeping this direction's pan
    /// offset and zoom for the next visit.
    fn dismiss(&mut self) -> Vec<RenderSignal> {
        let ViewMode::Zoomed(d) = self.mode else {
            return Vec::new();
        };
        self.saved_zooms[d.index()] = self.current_zoom;
        self.mode = ViewMode::DirectionSelected(d);
        self.current_zoom = 1.0;
        self.camera.fov_deg = self.cfg.base_fov;
        let info = data::info(d);
        self.status = format!(
            "{} ({}) - view restored",
            info.guardian,
            info.season.name()
        );
        vec![
            RenderSignal::SetActiveModel(ModelKey::Chart(d)),
            RenderSignal::SetCameraPose(self.camera),
            RenderSignal::StateChanged(self.mode),
        ]
    }

    /// Explicit full reset (click / key / external call). Unlike the V-sign
    /// exit, this zeroes every direction's saved offset and zoom.
    pub fn reset(&mut self) -> Vec<RenderSignal> {
        self.mode = ViewMode::Overview;
        self.current_zoom = 1.0;
        self.offsets = [PanOffset::default(); 4];
        self.saved_zooms = [1.0; 4];
        self.camera = self.initial_camera;
        self.status = "Reset - pinch a quadrant to choose a direction".to_string();

        let mut signals = vec![
            RenderSignal::SetActiveModel(ModelKey::Center),
            RenderSignal::SetCameraPose(self.camera),
        ];
        for d in Direction::all() {
            signals.push(RenderSignal::SetModelOffset(d, PanOffset::default()));
        }
        signals.push(RenderSignal::StateChanged(self.mode));
        signals
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_pose::Point3;

    fn select(x: f32, y: f32) -> GestureAction {
        GestureAction::Select {
            hand: 0,
            screen: Point3::new(x, y, 0.0),
        }
    }

    fn flow() -> ViewFlow {
        ViewFlow::new(ViewConfig::default())
    }

    /// Drive a flow into `Zoomed(d)` via the double-pinch path, using each
    /// quadrant's center point.
    fn zoom_into(f: &mut ViewFlow, d: Direction) {
        let (x, y) = match d {
            Direction::North => (0.5, 0.1),
            Direction::South => (0.5, 0.9),
            Direction::East => (0.1, 0.5),
            Direction::West => (0.9, 0.5),
        };
        f.handle(select(x, y));
        f.handle(select(x, y));
        assert_eq!(f.mode(), ViewMode::Zoomed(d));
    }

    #[test]
    fn basic_selection_from_overview() {
        let mut f = flow();
        let signals = f.handle(select(0.2, 0.2));
        assert_eq!(f.mode(), ViewMode::DirectionSelected(Direction::East));
        assert!(signals.contains(&RenderSignal::SetActiveModel(ModelKey::Chart(Direction::East))));
        assert!(signals
            .iter()
            .any(|s| matches!(s, RenderSignal::StateChanged(_))));
    }

    #[test]
    fn second_pinch_same_quadrant_zooms_in() {
        let mut f = flow();
        f.handle(select(0.5, 0.1));
        assert_eq!(f.mode(), ViewMode::DirectionSelected(Direction::North));
        let signals = f.handle(select(0.5, 0.1));
        assert_eq!(f.mode(), ViewMode::Zoomed(Direction::North));
        assert!(signals.contains(&RenderSignal::SetActiveModel(ModelKey::Detail(Direction::North))));
    }

    #[test]
    fn different_quadrant_switches_selection_directly() {
        let mut f = flow();
        f.handle(select(0.5, 0.1));
        f.handle(select(0.5, 0.9));
        assert_eq!(f.mode(), ViewMode::DirectionSelected(Direction::South));
    }

    #[test]
    fn pan_moves_only_the_active_direction() {
        let mut f = flow();
        zoom_into(&mut f, Direction::East);

        let signals = f.handle(GestureAction::PanMove { dx: 0.1, dy: -0.05 });
        let o = f.offset(Direction::East);
        assert!((o.x - 0.4).abs() < 1e-6);
        assert!((o.y - 0.2).abs() < 1e-6);
        assert_eq!(
            signals,
            vec![RenderSignal::SetModelOffset(Direction::East, o)]
        );
        assert_eq!(f.offset(Direction::West), PanOffset::default());
    }

    #[test]
    fn per_direction_state_is_isolated_and_restored() {
        let mut f = flow();

        // Pan east to (2, -1).
        zoom_into(&mut f, Direction::East);
        f.handle(GestureAction::PanMove { dx: 0.5, dy: 0.25 });
        assert_eq!(f.offset(Direction::East), PanOffset { x: 2.0, y: -1.0 });
        f.handle(GestureAction::Dismiss);

        // West opens untouched - east's offset must not leak.
        f.handle(select(0.9, 0.5));
        let signals = f.handle(select(0.9, 0.5));
        assert_eq!(f.mode(), ViewMode::Zoomed(Direction::West));
        assert!(signals.contains(&RenderSignal::SetModelOffset(
            Direction::West,
            PanOffset::default()
        )));
        f.handle(GestureAction::Dismiss);

        // Re-entering east restores (2, -1) exactly.
        f.handle(select(0.1, 0.5));
        let signals = f.handle(select(0.1, 0.5));
        assert_eq!(f.mode(), ViewMode::Zoomed(Direction::East));
        assert!(signals.contains(&RenderSignal::SetModelOffset(
            Direction::East,
            PanOffset { x: 2.0, y: -1.0 }
        )));
    }

    #[test]
    fn zoom_level_persists_across_dismiss() {
        let mut f = flow();
        zoom_into(&mut f, Direction::North);

        f.handle(GestureAction::ZoomTo { zoom: 2.4 });
        f.handle(GestureAction::Dismiss);
        assert_eq!(f.mode(), ViewMode::DirectionSelected(Direction::North));
        assert!((f.current_zoom() - 1.0).abs() < 1e-6, "selected view is unzoomed");

        // Re-enter: the 2.4 comes back.
        f.handle(select(0.5, 0.1));
        assert_eq!(f.mode(), ViewMode::Zoomed(Direction::North));
        assert!((f.current_zoom() - 2.4).abs() < 1e-6);
    }

    #[test]
    fn fov_follows_zoom_and_clamps() {
        let mut f = flow();
        zoom_into(&mut f, Direction::East);

        f.handle(GestureAction::ZoomTo { zoom: 4.0 });
        assert!((f.camera().fov_deg - 37.5).abs() < 1e-4, "75 / sqrt(4)");

        // Extreme zoom levels pin to the clamp range.
        f.handle(GestureAction::ZoomTo { zoom: 100.0 });
        assert!((f.camera().fov_deg - 20.0).abs() < 1e-4);
        f.handle(GestureAction::ZoomTo { zoom: 0.01 });
        assert!((f.camera().fov_deg - 120.0).abs() < 1e-4);
    }

    #[test]
    fn camera_position_never_moves_for_zoom() {
        let mut f = flow();
        let home = f.camera();
        zoom_into(&mut f, Direction::East);
        f.handle(GestureAction::ZoomTo { zoom: 3.0 });
        let c = f.camera();
        assert_eq!((c.x, c.y, c.z), (home.x, home.y, home.z));
    }

    #[test]
    fn full_reset_zeroes_what_dismiss_preserves() {
        let mut f = flow();
        zoom_into(&mut f, Direction::North);
        f.handle(GestureAction::PanMove { dx: 0.3, dy: 0.1 });
        f.handle(GestureAction::ZoomTo { zoom: 3.0 });
        assert_ne!(f.offset(Direction::North), PanOffset::default());

        let signals = f.reset();
        assert_eq!(f.mode(), ViewMode::Overview);
        assert_eq!(f.offset(Direction::North), PanOffset::default());
        let c = f.camera();
        assert_eq!((c.x, c.y, c.z), (0.0, 0.0, 2.5), "camera back at initial pose");
        assert!((c.fov_deg - 75.0).abs() < 1e-6);
        assert!(signals.contains(&RenderSignal::SetActiveModel(ModelKey::Center)));

        // After reset, north opens with defaults, not the pre-reset view.
        zoom_into(&mut f, Direction::North);
        assert!((f.current_zoom() - 1.0).abs() < 1e-6);
        assert_eq!(f.offset(Direction::North), PanOffset::default());
    }

    #[test]
    fn fist_zoom_end_persists_level_for_reentry() {
        let mut f = flow();
        zoom_into(&mut f, Direction::South);
        f.handle(GestureAction::ZoomTo { zoom: 1.8 });
        f.handle(GestureAction::ZoomEnd { zoom: 1.8 });

        f.handle(GestureAction::Dismiss);
        f.handle(select(0.5, 0.9));
        assert!((f.current_zoom() - 1.8).abs() < 1e-6);
    }

    #[test]
    fn context_reports_zoomed_mode() {
        let mut f = flow();
        assert!(!f.context().zoomed);
        zoom_into(&mut f, Direction::East);
        assert!(f.context().zoomed);
        assert!((f.context().current_zoom - 1.0).abs() < 1e-6);
    }
}
