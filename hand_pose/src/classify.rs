//! Frame-local gesture classification.
//!
//! Pure functions of a single smoothed pose - no memory, no clocks. All
//! temporal behavior (edges, cooldowns, mode arbitration) belongs upstream,
//! which keeps these trivially testable.
//!
//! Conventions: normalized camera space, `y` grows *downward*, so "finger
//! extended upward" means a tip `y` smaller than its knuckle's.

use crate::skeleton::{HandPose, Landmark, Point3};

// Thresholds (empirically tuned)
const PINCH_THRESHOLD: f32 = 0.06; // normalized units - thumb/index together
const FOLD_MARGIN: f32 = 0.08; // folded when tip.y > mcp.y - margin
const FIST_FOLD_COUNT: usize = 3; // of the 4 non-thumb fingers
const V_EXTEND_MARGIN: f32 = 0.10; // index/middle must clear their MCP by this
const V_FOLD_MARGIN: f32 = 0.05; // ring/pinky must stay within this of theirs
const DEPTH_SPREAD_FACTOR: f32 = 15.0; // knuckle spread → depth gain
const DEPTH_RANGE: f32 = 2.0;

/// Non-thumb fingers as `(mcp, tip)` landmark rows, index → pinky.
const FINGERS: [(Landmark, Landmark); 4] = [
    (Landmark::IndexMcp, Landmark::IndexTip),
    (Landmark::MiddleMcp, Landmark::MiddleTip),
    (Landmark::RingMcp, Landmark::RingTip),
    (Landmark::PinkyMcp, Landmark::PinkyTip),
];

// ════════════════════════════════════════════════════════════════════════════
// Pinch
// ════════════════════════════════════════════════════════════════════════════

/// Result of pinch classification for one pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    pub active: bool,
    /// `clamp(1 - distance/threshold, 0, 1)` - 0 at the threshold, 1 at
    /// full contact.
    pub strength: f32,
    /// Midpoint of thumb tip and index tip, in normalized camera space.
    pub center: Point3,
}

/// Classify the pinch gesture: thumb tip against the index finger.
///
/// Takes the minimum of tip↔tip and tip↔PIP distance - when the index curls
/// toward the thumb its middle joint is often the closest point, and using
/// only the tip makes the gesture flutter at the boundary.
pub fn pinch(pose: &HandPose) -> PinchSample {
    let thumb_tip = pose[Landmark::ThumbTip];
    let index_tip = pose[Landmark::IndexTip];
    let index_pip = pose[Landmark::IndexPip];

    let tip_dist = thumb_tip.dist_xy(index_tip);
    let cross_dist = thumb_tip.dist_xy(index_pip);
    let d = tip_dist.min(cross_dist);

    let active = d < PINCH_THRESHOLD;
    PinchSample {
        active,
        strength: if active {
            (1.0 - d / PINCH_THRESHOLD).clamp(0.0, 1.0)
        } else {
            0.0
        },
        center: thumb_tip.midpoint(index_tip),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Fist
// ════════════════════════════════════════════════════════════════════════════

/// Count of non-thumb fingers currently folded toward the palm.
pub fn folded_fingers(pose: &HandPose) -> usize {
    FINGERS
        .iter()
        .filter(|&&(mcp, tip)| pose[tip].y > pose[mcp].y - FOLD_MARGIN)
        .count()
}

/// A fist is at least 3 of 4 non-thumb fingers folded. Count-based rather
/// than all-four so tracking noise on a single finger cannot break a held
/// fist mid-zoom.
pub fn is_fist(pose: &HandPose) -> bool {
    folded_fingers(pose) >= FIST_FOLD_COUNT
}

// ════════════════════════════════════════════════════════════════════════════
// V-sign
// ════════════════════════════════════════════════════════════════════════════

/// Index and middle extended upward past their knuckles, ring and pinky
/// folded. All four conditions must hold simultaneously.
pub fn is_v_sign(pose: &HandPose) -> bool {
    let index_ext = pose[Landmark::IndexTip].y < pose[Landmark::IndexMcp].y - V_EXTEND_MARGIN;
    let middle_ext = pose[Landmark::MiddleTip].y < pose[Landmark::MiddleMcp].y - V_EXTEND_MARGIN;
    let ring_folded = pose[Landmark::RingTip].y > pose[Landmark::RingMcp].y - V_FOLD_MARGIN;
    let pinky_folded = pose[Landmark::PinkyTip].y > pose[Landmark::PinkyMcp].y - V_FOLD_MARGIN;

    index_ext && middle_ext && ring_folded && pinky_folded
}

// ════════════════════════════════════════════════════════════════════════════
// Depth estimate
// ════════════════════════════════════════════════════════════════════════════

/// Estimate hand depth from the spread between adjacent knuckles.
///
/// A hand close to the camera projects wide; far away, narrow. The mean
/// distance between adjacent MCP joints is a stable proxy that does not
/// depend on finger curl. Result is clamped to `[-2, 2]` world units,
/// negative toward the camera.
pub fn estimate_depth(pose: &HandPose) -> f32 {
    let knuckles = [
        pose[Landmark::IndexMcp],
        pose[Landmark::MiddleMcp],
        pose[Landmark::RingMcp],
        pose[Landmark::PinkyMcp],
    ];
    let spread = (knuckles[0].dist_xy(knuckles[1])
        + knuckles[1].dist_xy(knuckles[2])
        + knuckles[2].dist_xy(knuckles[3]))
        / 3.0;

    (-(1.0 - spread * DEPTH_SPREAD_FACTOR)).clamp(-DEPTH_RANGE, DEPTH_RANGE)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Neutral open hand: all knuckles on a row at y = 0.5, tips extended
    /// upward (smaller y), thumb off to the side.
    fn open_hand() -> HandPose {
        let mut p = HandPose::zeroed();
        p[Landmark::Wrist] = Point3::new(0.5, 0.7, 0.0);
        p[Landmark::ThumbTip] = Point3::new(0.30, 0.50, 0.0);
        for (i, &(mcp, tip)) in FINGERS.iter().enumerate() {
            let x = 0.44 + i as f32 * 0.04;
            p[mcp] = Point3::new(x, 0.50, 0.0);
            p[tip] = Point3::new(x, 0.30, 0.0);
        }
        p[Landmark::IndexPip] = Point3::new(0.44, 0.40, 0.0);
        p
    }

    fn fold(p: &mut HandPose, mcp: Landmark, tip: Landmark) {
        let base = p[mcp];
        p[tip] = Point3::new(base.x, base.y + 0.05, base.z);
    }

    #[test]
    fn open_hand_is_nothing() {
        let p = open_hand();
        assert!(!pinch(&p).active);
        assert!(!is_fist(&p));
        assert!(!is_v_sign(&p));
    }

    #[test]
    fn pinch_activates_below_threshold() {
        let mut p = open_hand();
        p[Landmark::ThumbTip] = Point3::new(0.44, 0.31, 0.0); // ~0.01 from index tip
        let s = pinch(&p);
        assert!(s.active);
        assert!(s.strength > 0.7, "near-contact strength, got {}", s.strength);
    }

    #[test]
    fn pinch_strength_zero_at_threshold() {
        let mut p = open_hand();
        // Just past the threshold: not a pinch, strength 0.
        p[Landmark::IndexTip] = Point3::new(0.44, 0.30, 0.0);
        p[Landmark::IndexPip] = Point3::new(0.44, 0.40, 0.0);
        p[Landmark::ThumbTip] = Point3::new(0.44 + PINCH_THRESHOLD + 0.001, 0.30, 0.0);
        let s = pinch(&p);
        assert!(!s.active);
        assert_eq!(s.strength, 0.0);
    }

    #[test]
    fn pinch_uses_pip_fallback() {
        let mut p = open_hand();
        // Tip far away but thumb resting on the index PIP joint.
        p[Landmark::IndexTip] = Point3::new(0.9, 0.1, 0.0);
        p[Landmark::ThumbTip] = p[Landmark::IndexPip];
        assert!(pinch(&p).active);
    }

    #[test]
    fn pinch_center_is_tip_midpoint() {
        let mut p = open_hand();
        p[Landmark::ThumbTip] = Point3::new(0.4, 0.4, 0.0);
        p[Landmark::IndexTip] = Point3::new(0.6, 0.2, 0.0);
        let c = pinch(&p).center;
        assert!((c.x - 0.5).abs() < 1e-6);
        assert!((c.y - 0.3).abs() < 1e-6);
    }

    #[test]
    fn three_folded_fingers_make_a_fist() {
        let mut p = open_hand();
        fold(&mut p, Landmark::IndexMcp, Landmark::IndexTip);
        fold(&mut p, Landmark::MiddleMcp, Landmark::MiddleTip);
        assert_eq!(folded_fingers(&p), 2);
        assert!(!is_fist(&p), "2 of 4 is not a fist");

        fold(&mut p, Landmark::RingMcp, Landmark::RingTip);
        assert_eq!(folded_fingers(&p), 3);
        assert!(is_fist(&p), "3 of 4 is a fist");
    }

    #[test]
    fn fist_tolerates_one_noisy_finger() {
        let mut p = open_hand();
        for &(mcp, tip) in &FINGERS {
            fold(&mut p, mcp, tip);
        }
        // Pinky flies open from a tracking glitch - still a fist.
        p[Landmark::PinkyTip] = Point3::new(0.56, 0.2, 0.0);
        assert!(is_fist(&p));
    }

    #[test]
    fn v_sign_requires_all_four_conditions() {
        let mut p = open_hand();
        fold(&mut p, Landmark::RingMcp, Landmark::RingTip);
        fold(&mut p, Landmark::PinkyMcp, Landmark::PinkyTip);
        assert!(is_v_sign(&p), "index+middle up, ring+pinky folded");

        // Ring extended again: no longer a V.
        p[Landmark::RingTip] = Point3::new(0.52, 0.30, 0.0);
        assert!(!is_v_sign(&p));
    }

    #[test]
    fn v_sign_rejects_open_palm() {
        // All four extended - index/middle pass but ring/pinky fail.
        assert!(!is_v_sign(&open_hand()));
    }

    #[test]
    fn depth_clamped_to_range() {
        // Degenerate pose, all knuckles coincident: far limit.
        let p = HandPose::zeroed();
        assert!((estimate_depth(&p) - (-1.0)).abs() < 1e-6);

        // Absurdly wide spread clamps at +2.
        let mut wide = HandPose::zeroed();
        wide[Landmark::IndexMcp] = Point3::new(0.0, 0.5, 0.0);
        wide[Landmark::MiddleMcp] = Point3::new(0.4, 0.5, 0.0);
        wide[Landmark::RingMcp] = Point3::new(0.8, 0.5, 0.0);
        wide[Landmark::PinkyMcp] = Point3::new(1.2, 0.5, 0.0);
        assert_eq!(estimate_depth(&wide), DEPTH_RANGE);
    }

    #[test]
    fn closer_hand_reads_nearer() {
        let mut near = HandPose::zeroed();
        near[Landmark::IndexMcp] = Point3::new(0.40, 0.5, 0.0);
        near[Landmark::MiddleMcp] = Point3::new(0.48, 0.5, 0.0);
        near[Landmark::RingMcp] = Point3::new(0.56, 0.5, 0.0);
        near[Landmark::PinkyMcp] = Point3::new(0.64, 0.5, 0.0);

        let mut far = HandPose::zeroed();
        far[Landmark::IndexMcp] = Point3::new(0.46, 0.5, 0.0);
        far[Landmark::MiddleMcp] = Point3::new(0.49, 0.5, 0.0);
        far[Landmark::RingMcp] = Point3::new(0.52, 0.5, 0.0);
        far[Landmark::PinkyMcp] = Point3::new(0.55, 0.5, 0.0);

        assert!(estimate_depth(&near) > estimate_depth(&far));
    }
}
