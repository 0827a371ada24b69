//! Screen-to-world mapping for hand cursors.
//!
//! The renderer's camera zooms by narrowing its field of view, so the same
//! normalized screen point lands on different world coordinates at different
//! zoom levels. The tracker keeps a copy of the current fov/aspect and maps
//! through it, which is also what keeps the gesture mapping consistent across
//! window resizes.

use hand_pose::Point3;

#[derive(Clone, Copy, Debug)]
pub struct ViewProjection {
    pub fov_deg: f32,
    pub aspect: f32,
    /// Plane in front of the camera the cursor lives on.
    pub distance: f32,
}

impl Default for ViewProjection {
    fn default() -> Self {
        ViewProjection {
            fov_deg: 75.0,
            aspect: 4.0 / 3.0,
            distance: 2.0,
        }
    }
}

impl ViewProjection {
    /// Map a normalized screen point (y down) plus a depth estimate to world
    /// space (y up, camera at the origin looking down -z).
    pub fn to_world(&self, x: f32, y: f32, depth: f32) -> Point3 {
        let half = (self.fov_deg.to_radians() / 2.0).tan();
        Point3 {
            x: (x - 0.5) * half * self.aspect * self.distance * 2.0,
            y: -(y - 0.5) * half * self.distance * 2.0,
            z: depth - self.distance,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_center_maps_to_axis() {
        let p = ViewProjection::default().to_world(0.5, 0.5, 0.0);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert!(p.z < 0.0, "cursor plane sits in front of the camera");
    }

    #[test]
    fn y_axis_flips() {
        // Screen y grows downward; world y grows upward.
        let p = ViewProjection::default().to_world(0.5, 0.2, 0.0);
        assert!(p.y > 0.0);
    }

    #[test]
    fn aspect_widens_x_only() {
        let narrow = ViewProjection {
            aspect: 1.0,
            ..ViewProjection::default()
        };
        let wide = ViewProjection {
            aspect: 2.0,
            ..ViewProjection::default()
        };
        let pn = narrow.to_world(0.9, 0.9, 0.0);
        let pw = wide.to_world(0.9, 0.9, 0.0);
        assert!((pw.x - 2.0 * pn.x).abs() < 1e-6);
        assert!((pw.y - pn.y).abs() < 1e-6);
    }

    #[test]
    fn narrower_fov_shrinks_world_extent() {
        let base = ViewProjection::default();
        let zoomed = ViewProjection {
            fov_deg: 37.5,
            ..base
        };
        let pb = base.to_world(1.0, 0.5, 0.0);
        let pz = zoomed.to_world(1.0, 0.5, 0.0);
        assert!(pz.x.abs() < pb.x.abs());
    }
}
