//! Gesture-mode arbitration.
//!
//! Pinch-drag panning, two-hand fist zooming, and V-sign dismissal are
//! semantically different and must never fire on the same frame. The arbiter
//! resolves ownership with a fixed priority order:
//!
//! 1. Both hands visible and both fists: continuous zoom mode. Entering it
//!    forcibly ends any pan in progress; while it holds, single-hand pinch
//!    events are suppressed entirely.
//! 2. Otherwise single-hand pinch events are live: selection when not
//!    zoomed, pan start/drag/end when zoomed.
//! 3. V-sign runs only while zoomed, with its own cooldown.
//!
//! Zoom is computed relative to the baseline captured at mode entry
//! (`base_zoom × current_distance / initial_distance`), never by integrating
//! per-frame deltas, so a long zoom session cannot drift.

use std::time::{Duration, Instant};

use crate::events::{Feedback, FeedbackKind, GestureAction, PinchEdge};
use crate::tracker::HandSnapshot;

// ════════════════════════════════════════════════════════════════════════════
// Config / context
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug)]
pub struct ArbiterConfig {
    /// Minimum spacing between accepted V-sign dismissals.
    pub v_cooldown: Duration,
    /// Per-tick exponential step toward the fist-zoom target.
    pub zoom_smoothing: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        ArbiterConfig {
            v_cooldown: Duration::from_millis(1000),
            zoom_smoothing: 0.3,
            min_zoom: 0.5,
            max_zoom: 5.0,
        }
    }
}

/// What the arbiter needs to know about the view this frame.
#[derive(Clone, Copy, Debug)]
pub struct ViewContext {
    pub zoomed: bool,
    pub current_zoom: f32,
}

/// Arbitrated result for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    pub actions: Vec<GestureAction>,
    pub feedback: Vec<Feedback>,
}

// ════════════════════════════════════════════════════════════════════════════
// GestureArbiter
// ════════════════════════════════════════════════════════════════════════════

pub struct GestureArbiter {
    cfg: ArbiterConfig,

    // two-hand fist zoom
    fist_mode: bool,
    initial_fist_distance: Option<f32>,
    base_zoom: Option<f32>,

    // pinch-drag pan
    panning: bool,
    panning_hand: usize,
    last_pan_pos: Option<(f32, f32)>,

    // V-sign
    v_latched: bool,
    last_v_time: Option<Instant>,
}

impl GestureArbiter {
    pub fn new(cfg: ArbiterConfig) -> Self {
        GestureArbiter {
            cfg,
            fist_mode: false,
            initial_fist_distance: None,
            base_zoom: None,
            panning: false,
            panning_hand: 0,
            last_pan_pos: None,
            v_latched: false,
            last_v_time: None,
        }
    }

    pub fn fist_mode(&self) -> bool {
        self.fist_mode
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Resolve one frame's input into application actions. Runs after
    /// [`crate::HandTracker::update`] and before the view state machine.
    pub fn resolve(
        &mut self,
        hands: &[HandSnapshot; 2],
        edges: &[PinchEdge],
        ctx: ViewContext,
        now: Instant,
    ) -> FrameOutput {
        let mut out = FrameOutput::default();

        self.resolve_fist_zoom(hands, ctx, &mut out);

        if !self.fist_mode {
            self.resolve_pinch(hands, edges, ctx, &mut out);
            self.resolve_v_sign(hands, ctx, now, &mut out);
        }

        out
    }

    /// Drop all transient mode state (explicit reset).
    pub fn reset(&mut self) {
        self.fist_mode = false;
        self.initial_fist_distance = None;
        self.base_zoom = None;
        self.panning = false;
        self.last_pan_pos = None;
        self.v_latched = false;
        self.last_v_time = None;
    }

    // ── rule 1: two-hand fist zoom ────────────────────────────────────────

    fn resolve_fist_zoom(&mut self, hands: &[HandSnapshot; 2], ctx: ViewContext, out: &mut FrameOutput) {
        let both_fists =
            hands[0].visible && hands[1].visible && hands[0].fist && hands[1].fist;

        if !both_fists {
            // Covers a dropped fist as well as a hand lost mid-zoom: stale
            // distance data must never drive the zoom.
            if self.fist_mode {
                self.fist_mode = false;
                self.initial_fist_distance = None;
                self.base_zoom = None;
                out.actions.push(GestureAction::ZoomEnd {
                    zoom: ctx.current_zoom,
                });
            }
            return;
        }

        let distance = match (hands[0].world, hands[1].world) {
            (Some(a), Some(b)) => a.dist(b).max(1e-4),
            _ => return,
        };

        // Hard mode switch: no blending with a pan in progress.
        if self.panning {
            self.panning = false;
            self.last_pan_pos = None;
            out.actions.push(GestureAction::PanEnd);
        }

        if !self.fist_mode {
            self.fist_mode = true;
            self.initial_fist_distance = Some(distance);
            self.base_zoom = Some(ctx.current_zoom);
            out.actions.push(GestureAction::ZoomStart);
        } else {
            let ratio = distance / self.initial_fist_distance.unwrap_or(distance);
            let target = self.base_zoom.unwrap_or(ctx.current_zoom) * ratio;
            let stepped = ctx.current_zoom + (target - ctx.current_zoom) * self.cfg.zoom_smoothing;
            let zoom = stepped.clamp(self.cfg.min_zoom, self.cfg.max_zoom);
            out.actions.push(GestureAction::ZoomTo { zoom });
            out.feedback.push(Feedback {
                kind: FeedbackKind::FistZoomTick,
                hand: 0,
                strength: (zoom - self.cfg.min_zoom) / (self.cfg.max_zoom - self.cfg.min_zoom),
            });
        }
    }

    // ── rule 2: single-hand pinch / pan ───────────────────────────────────

    fn resolve_pinch(
        &mut self,
        hands: &[HandSnapshot; 2],
        edges: &[PinchEdge],
        ctx: ViewContext,
        out: &mut FrameOutput,
    ) {
        for edge in edges {
            match *edge {
                PinchEdge::Start {
                    hand,
                    screen,
                    strength,
                    ..
                } => {
                    out.feedback.push(Feedback {
                        kind: FeedbackKind::PinchStart,
                        hand,
                        strength,
                    });
                    if ctx.zoomed {
                        if !self.panning {
                            self.panning = true;
                            self.panning_hand = hand;
                            self.last_pan_pos = Some((screen.x, screen.y));
                            out.actions.push(GestureAction::PanStart { hand });
                        }
                    } else {
                        out.actions.push(GestureAction::Select { hand, screen });
                    }
                }
                PinchEdge::End { hand } => {
                    out.feedback.push(Feedback {
                        kind: FeedbackKind::PinchEnd,
                        hand,
                        strength: 0.0,
                    });
                    if self.panning && self.panning_hand == hand {
                        self.panning = false;
                        self.last_pan_pos = None;
                        out.actions.push(GestureAction::PanEnd);
                    }
                }
            }
        }

        if self.panning {
            let hand = &hands[self.panning_hand];
            if !hand.visible {
                // Hand lost mid-pan: terminate rather than drag on stale data.
                self.panning = false;
                self.last_pan_pos = None;
                out.actions.push(GestureAction::PanEnd);
            } else if hand.pinching {
                if let (Some((lx, ly)), Some(cur)) = (self.last_pan_pos, hand.screen) {
                    let dx = cur.x - lx;
                    let dy = cur.y - ly;
                    if dx != 0.0 || dy != 0.0 {
                        out.actions.push(GestureAction::PanMove { dx, dy });
                        self.last_pan_pos = Some((cur.x, cur.y));
                    }
                }
            }
        }
    }

    // ── rule 3: V-sign dismissal ──────────────────────────────────────────

    fn resolve_v_sign(
        &mut self,
        hands: &[HandSnapshot; 2],
        ctx: ViewContext,
        now: Instant,
        out: &mut FrameOutput,
    ) {
        if !ctx.zoomed {
            return;
        }

        let v_hand = hands
            .iter()
            .position(|h| h.visible && h.v_sign);

        match v_hand {
            Some(hand) if !self.v_latched => {
                let cooled = self
                    .last_v_time
                    .map_or(true, |t| now.duration_since(t) > self.cfg.v_cooldown);
                if cooled {
                    // Latch until the gesture is released so a held V fires
                    // exactly once, independent of the pinch cooldown.
                    self.v_latched = true;
                    self.last_v_time = Some(now);
                    out.actions.push(GestureAction::Dismiss);
                    out.feedback.push(Feedback {
                        kind: FeedbackKind::VSign,
                        hand,
                        strength: 1.0,
                    });
                }
            }
            None => self.v_latched = false,
            _ => {}
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
