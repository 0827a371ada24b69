//! # chart_state
//!
//! The application-facing half of the pipeline: the four cardinal chart
//! directions, the view state machine
//! (overview → direction-selected → zoomed), and the descriptive data for
//! each direction's seven lunar lodges.
//!
//! [`ViewFlow`] consumes arbitrated [`gesture_flow::GestureAction`]s and
//! emits [`RenderSignal`]s for the rendering surface. It is the exclusive
//! owner of all view state: zoom level, per-direction pan offsets, and the
//! camera pose. Pan offset and zoom persist per direction across repeated
//! zoom-in/zoom-out round trips; only the explicit full reset clears them.

pub mod data;
pub mod direction;
pub mod view;

pub use direction::{Direction, Season};
pub use view::{
    CameraPose, ModelKey, PanOffset, RenderSignal, ViewConfig, ViewFlow, ViewMode,
};
