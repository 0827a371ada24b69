//! Scene state - the rendering surface's view of the world.
//!
//! The gesture core emits [`RenderSignal`]s; this struct is the sink that
//! accumulates them into the state the renderer reads every display frame.
//! Nothing here flows back into the core.

use chart_state::{CameraPose, Direction, ModelKey, PanOffset, RenderSignal, ViewMode};

#[derive(Clone, Copy, Debug)]
pub struct SceneState {
    pub active_model: ModelKey,
    pub camera: CameraPose,
    pub offsets: [PanOffset; 4],
    pub mode: ViewMode,
}

impl SceneState {
    pub fn new(camera: CameraPose) -> Self {
        SceneState {
            active_model: ModelKey::Center,
            camera,
            offsets: [PanOffset::default(); 4],
            mode: ViewMode::Overview,
        }
    }

    pub fn apply(&mut self, signal: &RenderSignal) {
        match *signal {
            RenderSignal::SetActiveModel(key) => self.active_model = key,
            RenderSignal::SetCameraPose(pose) => self.camera = pose,
            RenderSignal::SetModelOffset(d, o) => self.offsets[d.index()] = o,
            RenderSignal::StateChanged(mode) => self.mode = mode,
        }
    }

    pub fn offset(&self, d: Direction) -> PanOffset {
        self.offsets[d.index()]
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraPose {
        CameraPose {
            x: 0.0,
            y: 0.0,
            z: 2.5,
            fov_deg: 75.0,
        }
    }

    #[test]
    fn signals_accumulate() {
        let mut s = SceneState::new(camera());
        s.apply(&RenderSignal::SetActiveModel(ModelKey::Detail(Direction::East)));
        s.apply(&RenderSignal::SetModelOffset(
            Direction::East,
            PanOffset { x: 1.0, y: -0.5 },
        ));
        s.apply(&RenderSignal::StateChanged(ViewMode::Zoomed(Direction::East)));

        assert_eq!(s.active_model, ModelKey::Detail(Direction::East));
        assert_eq!(s.offset(Direction::East), PanOffset { x: 1.0, y: -0.5 });
        assert_eq!(s.offset(Direction::West), PanOffset::default());
        assert_eq!(s.mode, ViewMode::Zoomed(Direction::East));
    }

    #[test]
    fn camera_updates_replace_pose() {
        let mut s = SceneState::new(camera());
        let narrow = CameraPose {
            fov_deg: 37.5,
            ..camera()
        };
        s.apply(&RenderSignal::SetCameraPose(narrow));
        assert_eq!(s.camera, narrow);
    }
}
