//! Canonical synthetic poses.
//!
//! Anatomically-plausible landmark sets for each gesture the classifiers
//! recognise, anchored at an arbitrary screen position. The simulation frame
//! source builds its frames from these, and tests across the workspace use
//! them instead of hand-rolling 21-point fixtures.

use crate::skeleton::{HandPose, Landmark, Point3};

/// Horizontal gap between adjacent knuckles (controls the depth estimate).
const KNUCKLE_GAP: f32 = 0.045;
/// Knuckle row sits this far below the anchor point.
const KNUCKLE_DROP: f32 = 0.10;
const FINGER_REACH: f32 = 0.20;
const FOLD_DROP: f32 = 0.06;

const FINGER_COLUMNS: [(Landmark, Landmark, Landmark, Landmark); 4] = [
    (
        Landmark::IndexMcp,
        Landmark::IndexPip,
        Landmark::IndexDip,
        Landmark::IndexTip,
    ),
    (
        Landmark::MiddleMcp,
        Landmark::MiddlePip,
        Landmark::MiddleDip,
        Landmark::MiddleTip,
    ),
    (
        Landmark::RingMcp,
        Landmark::RingPip,
        Landmark::RingDip,
        Landmark::RingTip,
    ),
    (
        Landmark::PinkyMcp,
        Landmark::PinkyPip,
        Landmark::PinkyDip,
        Landmark::PinkyTip,
    ),
];

/// Base skeleton: wrist below the anchor, knuckle row fanned around it,
/// thumb off to the side, all four fingers extended upward.
pub fn open_hand(cx: f32, cy: f32) -> HandPose {
    let mut p = HandPose::zeroed();

    p[Landmark::Wrist] = Point3::new(cx, cy + KNUCKLE_DROP + 0.12, 0.0);

    p[Landmark::ThumbCmc] = Point3::new(cx - 0.06, cy + KNUCKLE_DROP + 0.08, 0.0);
    p[Landmark::ThumbMcp] = Point3::new(cx - 0.09, cy + KNUCKLE_DROP + 0.03, 0.0);
    p[Landmark::ThumbIp] = Point3::new(cx - 0.11, cy + KNUCKLE_DROP - 0.02, 0.0);
    p[Landmark::ThumbTip] = Point3::new(cx - 0.13, cy + KNUCKLE_DROP - 0.06, 0.0);

    for (i, &(mcp, pip, dip, tip)) in FINGER_COLUMNS.iter().enumerate() {
        let x = cx + (i as f32 - 1.5) * KNUCKLE_GAP;
        let base_y = cy + KNUCKLE_DROP;
        p[mcp] = Point3::new(x, base_y, 0.0);
        p[pip] = Point3::new(x, base_y - FINGER_REACH * 0.45, 0.0);
        p[dip] = Point3::new(x, base_y - FINGER_REACH * 0.75, 0.0);
        p[tip] = Point3::new(x, base_y - FINGER_REACH, 0.0);
    }

    p
}

/// Open hand with the thumb tip brought onto the index tip: a full-strength
/// pinch centered very near the anchor.
pub fn pinched_hand(cx: f32, cy: f32) -> HandPose {
    let mut p = open_hand(cx, cy);
    let index_tip = p[Landmark::IndexTip];
    p[Landmark::ThumbTip] = Point3::new(index_tip.x - 0.004, index_tip.y, index_tip.z);
    p[Landmark::ThumbIp] = Point3::new(index_tip.x - 0.02, index_tip.y + 0.03, 0.0);
    p
}

/// All four non-thumb fingers folded below their knuckles.
pub fn fist_hand(cx: f32, cy: f32) -> HandPose {
    let mut p = open_hand(cx, cy);
    for &(mcp, pip, dip, tip) in &FINGER_COLUMNS {
        let base = p[mcp];
        p[pip] = Point3::new(base.x, base.y - 0.02, 0.0);
        p[dip] = Point3::new(base.x, base.y + FOLD_DROP * 0.5, 0.0);
        p[tip] = Point3::new(base.x, base.y + FOLD_DROP, 0.0);
    }
    p
}

/// Index and middle extended, ring and pinky folded.
pub fn v_sign_hand(cx: f32, cy: f32) -> HandPose {
    let mut p = fist_hand(cx, cy);
    for &(mcp, pip, dip, tip) in &FINGER_COLUMNS[..2] {
        let base = p[mcp];
        p[pip] = Point3::new(base.x, base.y - FINGER_REACH * 0.45, 0.0);
        p[dip] = Point3::new(base.x, base.y - FINGER_REACH * 0.75, 0.0);
        p[tip] = Point3::new(base.x, base.y - FINGER_REACH, 0.0);
    }
    p
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
