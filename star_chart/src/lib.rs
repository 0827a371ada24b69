//! # star_chart
//!
//! Interactive viewer for the traditional four-quadrant star chart, driven
//! entirely by hand gestures in front of a camera.
//!
//! ## Gesture → Action mapping
//!
//! | Gesture | Where | Action |
//! |---|---|---|
//! | Pinch at a quadrant | Overview | Select that direction's chart |
//! | Pinch at the same quadrant | Direction selected | Zoom into the detail chart |
//! | Pinch at another quadrant | Direction selected | Switch directions directly |
//! | Pinch and drag | Detail view | Pan the chart |
//! | Both hands fisted, spread/close | Any | Continuous zoom (fov-based) |
//! | V-sign | Detail view | Back to the selected chart, keeping its view |
//!
//! Pan offset and zoom level are remembered per direction for the whole
//! session; the explicit reset (R key / right click) clears them all.
//!
//! ## Feature flags
//!
//! * (default) - **Simulation mode**: mouse and keyboard synthesize landmark
//!   frames, so the whole tracking pipeline runs without hardware.
//! * `leap` - **Hardware mode**: polls a LeapMotion controller via LeapC and
//!   maps its skeletons onto the 21-landmark convention.
//!
//! ### Simulation controls
//!
//! | Input | Meaning |
//! |---|---|
//! | Mouse move | Hand position |
//! | Left button (hold) | Pinch |
//! | `F` (hold) | Two fists; mouse X controls their separation |
//! | `V` (hold) | V-sign |
//! | `R` / right button | Full reset |
//! | `Q` | Quit |

pub mod app;
pub mod chime;
pub mod scene;
pub mod source;
pub mod visualizer;
