//! Software-rendered chart window using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌──────────────────────────────────────────────┬──────────────┐
//! │                   N                          │  INFO PANEL  │
//! │        ╲                    ╱                │              │
//! │   E      (chart / lodges)      W             │  guardian    │
//! │        ╱                    ╲                │  lodge list  │
//! │                   S                          │              │
//! │  status bar                                  │              │
//! │  key legend                                  │              │
//! └──────────────────────────────────────────────┴──────────────┘
//! ```
//!
//! The renderer is a pure consumer: it reads the [`SceneState`] accumulated
//! from render signals plus the per-hand cursor snapshots, and sends nothing
//! back except window input.

use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use std::sync::mpsc::Sender;

use chart_state::{data, Direction, ModelKey, ViewMode};
use gesture_flow::HandSnapshot;

use crate::scene::SceneState;
use crate::source::SimPulse;

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W: usize = 960;
pub const WIN_H: usize = 720;
const PANEL_W: usize = 240;
const CHART_W: usize = WIN_W - PANEL_W;
const CHART_CX: usize = CHART_W / 2;
const CHART_CY: usize = (WIN_H - 60) / 2;
const STATUS_Y: usize = WIN_H - 40;
const CHART_RADIUS_PX: f32 = 300.0;

const BG_COLOR: u32 = 0xFF0B0E1A; // deep night sky
const PANEL_BG: u32 = 0xFF121A30;
const GUIDE_COLOR: u32 = 0xFF2A3554;
const STAR_COLOR: u32 = 0xFFF2EEDB;
const LINK_COLOR: u32 = 0xFF8C93B8;
const TEXT_COLOR: u32 = 0xFFE8E8F0;
const DIM_TEXT: u32 = 0xFF8890A8;
const ACCENT: u32 = 0xFFFFD700; // gold
const TEXT_BG: u32 = 0xFF101830;
const CURSOR_OPEN: u32 = 0xFF4AA3E2;
const CURSOR_PINCH: u32 = 0xFFE2C84A;

/// Per-direction tint, used for mini-charts and highlights.
fn direction_color(d: Direction) -> u32 {
    match d {
        Direction::East => 0xFF4AE28A,  // spring green
        Direction::South => 0xFFE2664A, // summer vermilion
        Direction::West => 0xFFE2E2E2,  // autumn white
        Direction::North => 0xFF4A90E2, // winter blue
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Window input
// ════════════════════════════════════════════════════════════════════════════

/// Result of one input poll, consumed by the run loop.
#[derive(Clone, Copy, Debug)]
pub struct WindowInput {
    pub running: bool,
    pub reset: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    buf: Vec<u32>,
    sim_tx: Sender<SimPulse>,
}

impl Visualizer {
    pub fn new(sim_tx: Sender<SimPulse>) -> Result<Self, String> {
        let mut window = Window::new(
            "Star Chart - Gesture Viewer",
            WIN_W,
            WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            buf: vec![BG_COLOR; WIN_W * WIN_H],
            sim_tx,
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Poll keyboard/mouse, forward a [`SimPulse`] to the simulation source,
    /// and report app-level commands back to the run loop.
    pub fn poll_input(&mut self) -> WindowInput {
        if !self.window.is_open() || self.window.is_key_down(Key::Q) {
            return WindowInput {
                running: false,
                reset: false,
            };
        }

        let reset =
            self.window.is_key_down(Key::R) || self.window.get_mouse_down(MouseButton::Right);

        let mouse = self
            .window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(mx, my)| (mx / WIN_W as f32, my / WIN_H as f32))
            .unwrap_or((0.5, 0.5));

        let pulse = SimPulse {
            mouse,
            pinch: self.window.get_mouse_down(MouseButton::Left),
            fist_pair: self.window.is_key_down(Key::F),
            v_sign: self.window.is_key_down(Key::V),
        };
        let _ = self.sim_tx.send(pulse);

        WindowInput {
            running: true,
            reset,
        }
    }

    // ── rendering ─────────────────────────────────────────────────────────

    pub fn render(
        &mut self,
        scene: &SceneState,
        hands: &[HandSnapshot; 2],
        fist_mode: bool,
        panning: bool,
        zoom: f32,
        status: &str,
    ) {
        self.buf.fill(BG_COLOR);

        let scale = self.world_scale(scene);

        match scene.active_model {
            ModelKey::Center => self.draw_overview(scale),
            ModelKey::Chart(d) => self.draw_direction_chart(d, scale),
            ModelKey::Detail(d) => self.draw_detail_chart(d, scene, scale),
        }

        self.draw_panel(scene);
        self.draw_hand_cursors(hands);

        if fist_mode {
            self.draw_zoom_banner(zoom);
        }
        if panning {
            self.draw_label("PANNING", CHART_CX - 28, 34, ACCENT);
        }

        // ── Status bar + key legend ───────────────────────────────────────
        self.fill_rect(0, STATUS_Y, CHART_W, WIN_H - STATUS_Y, TEXT_BG);
        self.draw_label(status, 10, STATUS_Y + 8, TEXT_COLOR);
        self.draw_label(
            "MOUSE=HAND  LMB=PINCH  F=FISTS  V=V-SIGN  R/RMB=RESET  Q=QUIT",
            10,
            WIN_H - 14,
            DIM_TEXT,
        );

        self.window.update_with_buffer(&self.buf, WIN_W, WIN_H).ok();
    }

    /// Pixels per world unit at the current camera fov. A narrower fov gives
    /// a larger scale, which is the apparent zoom; the camera itself never
    /// moves.
    fn world_scale(&self, scene: &SceneState) -> f32 {
        let half_tan = (scene.camera.fov_deg.to_radians() / 2.0).tan().max(1e-3);
        CHART_RADIUS_PX / (half_tan * scene.camera.z.max(0.1))
    }

    fn world_to_px(&self, wx: f32, wy: f32, scale: f32) -> (isize, isize) {
        (
            CHART_CX as isize + (wx * scale) as isize,
            CHART_CY as isize - (wy * scale) as isize,
        )
    }

    // ── Overview: the full four-quadrant chart ────────────────────────────

    fn draw_overview(&mut self, scale: f32) {
        // Diagonal quadrant guides.
        let r = (CHART_RADIUS_PX * 1.15) as isize;
        let (cx, cy) = (CHART_CX as isize, CHART_CY as isize);
        self.draw_line(cx - r, cy - r, cx + r, cy + r, GUIDE_COLOR);
        self.draw_line(cx - r, cy + r, cx + r, cy - r, GUIDE_COLOR);

        // Each direction's lodges, miniaturized into its quadrant.
        // East is screen-left, the chart being the sky seen from below.
        let anchors = [
            (Direction::East, -0.62_f32, 0.0_f32),
            (Direction::West, 0.62, 0.0),
            (Direction::North, 0.0, 0.58),
            (Direction::South, 0.0, -0.58),
        ];
        for (d, ax, ay) in anchors {
            let tint = direction_color(d);
            for lodge in &data::info(d).lodges {
                self.draw_lodge(lodge, ax, ay, 0.30, scale, tint, false);
            }
            let (px, py) = self.world_to_px(ax, ay + 0.42, scale);
            let letter = match d {
                Direction::East => "E",
                Direction::West => "W",
                Direction::North => "N",
                Direction::South => "S",
            };
            self.draw_label_at(letter, px - 2, py, tint);
        }
    }

    // ── One direction's quadrant chart ────────────────────────────────────

    fn draw_direction_chart(&mut self, d: Direction, scale: f32) {
        let info = data::info(d);
        let tint = direction_color(d);
        for lodge in &info.lodges {
            self.draw_lodge(lodge, 0.0, 0.0, 0.9, scale, tint, false);
        }
        self.draw_label(info.guardian, 10, 12, tint);
        self.draw_label(info.season.name(), 10, 24, DIM_TEXT);
    }

    // ── Detail chart with pan offset and lodge names ──────────────────────

    fn draw_detail_chart(&mut self, d: Direction, scene: &SceneState, scale: f32) {
        let info = data::info(d);
        let tint = direction_color(d);
        let o = scene.offset(d);
        for lodge in &info.lodges {
            self.draw_lodge(lodge, o.x, o.y, 1.0, scale, tint, true);
        }
        self.draw_label(info.guardian, 10, 12, tint);
        self.draw_label("DETAIL", 10, 24, ACCENT);
    }

    /// Draw one lodge's stars and links, scaled about its own extent and
    /// translated to `(ox, oy)` in world units.
    fn draw_lodge(
        &mut self,
        lodge: &data::Lodge,
        ox: f32,
        oy: f32,
        size: f32,
        scale: f32,
        tint: u32,
        with_name: bool,
    ) {
        for &(a, b) in lodge.links {
            let (ax, ay) = lodge.stars[a];
            let (bx, by) = lodge.stars[b];
            let (p0x, p0y) = self.world_to_px(ox + ax * size, oy + ay * size, scale);
            let (p1x, p1y) = self.world_to_px(ox + bx * size, oy + by * size, scale);
            self.draw_line(p0x, p0y, p1x, p1y, LINK_COLOR);
        }
        for &(sx, sy) in lodge.stars {
            let (px, py) = self.world_to_px(ox + sx * size, oy + sy * size, scale);
            self.draw_disc(px, py, 2, STAR_COLOR);
            self.set_pixel_signed(px, py, tint);
        }
        if with_name {
            if let Some(&(sx, sy)) = lodge.stars.first() {
                let (px, py) = self.world_to_px(ox + sx * size, oy + sy * size, scale);
                self.draw_label_at(lodge.name, px + 6, py - 8, tint);
            }
        }
    }

    // ── Info panel ────────────────────────────────────────────────────────

    fn draw_panel(&mut self, scene: &SceneState) {
        self.fill_rect(CHART_W, 0, PANEL_W, WIN_H, PANEL_BG);
        self.draw_label("STAR CHART", CHART_W + 10, 12, ACCENT);

        match scene.mode {
            ViewMode::Overview => {
                self.draw_label("PINCH A QUADRANT", CHART_W + 10, 40, TEXT_COLOR);
                let mut y = 64;
                for d in Direction::all() {
                    let info = data::info(d);
                    self.draw_label(info.guardian, CHART_W + 10, y, direction_color(d));
                    self.draw_label(info.season.name(), CHART_W + 10, y + 10, DIM_TEXT);
                    y += 30;
                }
            }
            ViewMode::DirectionSelected(d) | ViewMode::Zoomed(d) => {
                let info = data::info(d);
                self.draw_label(info.guardian, CHART_W + 10, 40, direction_color(d));
                self.draw_label(info.season.name(), CHART_W + 10, 52, DIM_TEXT);

                let mut y = 76;
                for lodge in &info.lodges {
                    self.draw_label(lodge.name, CHART_W + 10, y, TEXT_COLOR);
                    self.draw_label(lodge.meaning, CHART_W + 10, y + 9, DIM_TEXT);
                    y += 26;
                }
            }
        }
    }

    // ── Hand cursors ──────────────────────────────────────────────────────

    fn draw_hand_cursors(&mut self, hands: &[HandSnapshot; 2]) {
        for (i, hand) in hands.iter().enumerate() {
            if !hand.visible {
                continue;
            }
            let Some(screen) = hand.screen else { continue };
            let px = (screen.x * WIN_W as f32) as isize;
            let py = (screen.y * WIN_H as f32) as isize;

            if hand.pinching {
                // Fill grows with pinch strength.
                let r = 4 + (hand.pinch_strength * 4.0) as isize;
                self.draw_disc(px, py, r, CURSOR_PINCH);
            } else {
                self.draw_ring(px, py, 7, CURSOR_OPEN);
            }
            let tag = if i == 0 { "L" } else { "R" };
            self.draw_label_at(tag, px + 10, py - 2, DIM_TEXT);
        }
    }

    // ── Zoom banner ───────────────────────────────────────────────────────

    fn draw_zoom_banner(&mut self, zoom: f32) {
        let text = format!("ZOOM {:.0}%", zoom * 100.0);
        let w = text.len() * 4 + 16;
        let x = CHART_CX.saturating_sub(w / 2);
        self.fill_rect(x, 12, w, 14, TEXT_BG);
        self.draw_border(x, 12, w, 14, ACCENT);
        self.draw_label(&text, x + 8, 16, ACCENT);
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(WIN_H) {
            for col in x..(x + w).min(WIN_W) {
                self.buf[row * WIN_W + col] = color;
            }
        }
    }

    fn draw_border(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for col in x..(x + w).min(WIN_W) {
            if y < WIN_H {
                self.buf[y * WIN_W + col] = color;
            }
            if y + h - 1 < WIN_H {
                self.buf[(y + h - 1) * WIN_W + col] = color;
            }
        }
        for row in y..(y + h).min(WIN_H) {
            if x < WIN_W {
                self.buf[row * WIN_W + x] = color;
            }
            if x + w - 1 < WIN_W {
                self.buf[row * WIN_W + x + w - 1] = color;
            }
        }
    }

    fn set_pixel_signed(&mut self, x: isize, y: isize, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < CHART_W && (y as usize) < WIN_H {
            self.buf[y as usize * WIN_W + x as usize] = color;
        }
    }

    /// Bresenham line, clipped to the chart area.
    fn draw_line(&mut self, mut x0: isize, mut y0: isize, x1: isize, y1: isize, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.set_pixel_signed(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn draw_disc(&mut self, cx: isize, cy: isize, r: isize, color: u32) {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel_signed(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn draw_ring(&mut self, cx: isize, cy: isize, r: isize, color: u32) {
        for dy in -r..=r {
            for dx in -r..=r {
                let d2 = dx * dx + dy * dy;
                if d2 <= r * r && d2 >= (r - 1) * (r - 1) {
                    self.set_pixel_signed(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Label with unsigned coordinates (UI chrome).
    fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32) {
        self.draw_label_at(text, x as isize, y as isize, color);
    }

    /// Minimal 3×5 bitmap font; draws anywhere, clipping per pixel.
    fn draw_label_at(&mut self, text: &str, x: isize, y: isize, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let mask = glyph(ch);
            for row in 0..5isize {
                for col in 0..3isize {
                    if mask & (1 << (14 - (row * 3 + col))) != 0 {
                        let px = cx + col;
                        let py = y + row;
                        if px >= 0 && py >= 0 && (px as usize) < WIN_W && (py as usize) < WIN_H {
                            self.buf[py as usize * WIN_W + px as usize] = color;
                        }
                    }
                }
            }
            cx += 4; // 3 wide + 1 gap
            if cx >= WIN_W as isize {
                break;
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font - 15 bits per glyph, rows top-down
// ────────────────────────────────────────────────────────────────────────────

fn glyph(c: char) -> u16 {
    match c.to_ascii_uppercase() {
        '0' => 0b111_101_101_101_111,
        '1' => 0b010_110_010_010_111,
        '2' => 0b111_001_111_100_111,
        '3' => 0b111_001_111_001_111,
        '4' => 0b101_101_111_001_001,
        '5' => 0b111_100_111_001_111,
        '6' => 0b111_100_111_101_111,
        '7' => 0b111_001_001_001_001,
        '8' => 0b111_101_111_101_111,
        '9' => 0b111_101_111_001_111,
        'A' => 0b111_101_111_101_101,
        'B' => 0b110_101_110_101_110,
        'C' => 0b111_100_100_100_111,
        'D' => 0b110_101_101_101_110,
        'E' => 0b111_100_111_100_111,
        'F' => 0b111_100_111_100_100,
        'G' => 0b111_100_101_101_111,
        'H' => 0b101_101_111_101_101,
        'I' => 0b111_010_010_010_111,
        'J' => 0b001_001_001_101_111,
        'K' => 0b101_101_110_101_101,
        'L' => 0b100_100_100_100_111,
        'M' => 0b101_111_101_101_101,
        'N' => 0b111_101_101_101_101,
        'O' => 0b111_101_101_101_111,
        'P' => 0b111_101_111_100_100,
        'Q' => 0b111_101_101_111_001,
        'R' => 0b110_101_110_101_101,
        'S' => 0b111_100_111_001_111,
        'T' => 0b111_010_010_010_010,
        'U' => 0b101_101_101_101_111,
        'V' => 0b101_101_101_101_010,
        'W' => 0b101_101_101_111_101,
        'X' => 0b101_101_010_101_101,
        'Y' => 0b101_101_111_010_010,
        'Z' => 0b111_001_010_100_111,
        '/' => 0b001_001_010_100_100,
        '-' => 0b000_000_111_000_000,
        '.' => 0b000_000_000_000_010,
        ',' => 0b000_000_000_010_100,
        ':' => 0b000_010_000_010_000,
        '=' => 0b000_111_000_111_000,
        '+' => 0b000_010_111_010_000,
        '%' => 0b101_001_010_100_101,
        '(' => 0b001_010_010_010_001,
        ')' => 0b100_010_010_010_100,
        '\'' => 0b010_010_000_000_000,
        ' ' => 0,
        _ => 0b000_000_010_000_000, // fallback dot
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_fit_in_15_bits() {
        for c in "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789/-.,:=+%()' ".chars() {
            assert!(glyph(c) < (1 << 15), "glyph {:?} overflows", c);
        }
    }

    #[test]
    fn letters_are_distinct_enough() {
        assert_ne!(glyph('E'), glyph('F'));
        assert_ne!(glyph('I'), glyph('T'));
        assert_ne!(glyph('M'), glyph('W'));
    }

    #[test]
    fn lowercase_maps_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }
}
