//! Gesture feedback chimes over MIDI.
//!
//! Each accepted gesture gets a short confirmation note on its own thread,
//! fire-and-forget: the gesture core never waits on audio. Falls back to a
//! silent output when no MIDI port is available.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use gesture_flow::FeedbackKind;

// ════════════════════════════════════════════════════════════════════════════
// MidiOut - abstraction over midir / null (for portless machines and tests)
// ════════════════════════════════════════════════════════════════════════════

trait MidiOut: Send {
    fn program_change(&mut self, channel: u8, program: u8);
    fn note_on(&mut self, channel: u8, note: u8, velocity: u8);
    fn note_off(&mut self, channel: u8, note: u8);
}

// ── midir backend ─────────────────────────────────────────────────────────

struct MidirOut {
    conn: midir::MidiOutputConnection,
}

impl MidiOut for MidirOut {
    fn program_change(&mut self, channel: u8, program: u8) {
        let _ = self.conn.send(&[0xC0 | (channel & 0x0F), program]);
    }
    fn note_on(&mut self, channel: u8, note: u8, velocity: u8) {
        let _ = self.conn.send(&[0x90 | (channel & 0x0F), note, velocity]);
    }
    fn note_off(&mut self, channel: u8, note: u8) {
        let _ = self.conn.send(&[0x80 | (channel & 0x0F), note, 0]);
    }
}

// ── null backend ──────────────────────────────────────────────────────────

struct NullOut;
impl MidiOut for NullOut {
    fn program_change(&mut self, _ch: u8, _p: u8) {}
    fn note_on(&mut self, _ch: u8, _n: u8, _v: u8) {}
    fn note_off(&mut self, _ch: u8, _n: u8) {}
}

/// Try to open the first available MIDI output port, preferring a softsynth.
/// Falls back to `NullOut` with a warning if none found.
fn open_midi_output() -> Box<dyn MidiOut> {
    let midi_out = match midir::MidiOutput::new("star_chart_chime") {
        Ok(m) => m,
        Err(e) => {
            eprintln!("[chime] MIDI init error: {} - feedback muted", e);
            return Box::new(NullOut);
        }
    };

    let ports = midi_out.ports();
    if ports.is_empty() {
        eprintln!("[chime] No MIDI output ports found - feedback muted.");
        return Box::new(NullOut);
    }

    let port_idx = ports
        .iter()
        .enumerate()
        .find(|(_, p)| {
            midi_out
                .port_name(p)
                .map(|n| {
                    let n = n.to_lowercase();
                    n.contains("fluid")
                        || n.contains("timidity")
                        || n.contains("microsoft")
                        || n.contains("synth")
                })
                .unwrap_or(false)
        })
        .map(|(i, _)| i)
        .unwrap_or(0);

    let port = &ports[port_idx];
    match midi_out.connect(port, "star-chart-chime") {
        Ok(conn) => Box::new(MidirOut { conn }),
        Err(e) => {
            eprintln!("[chime] Failed to connect: {} - feedback muted", e);
            Box::new(NullOut)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Note mapping
// ════════════════════════════════════════════════════════════════════════════

const CHANNEL: u8 = 0;
const PROGRAM_GLOCKENSPIEL: u8 = 9;
/// Zoom ticks arrive every frame; only sound one this often.
const ZOOM_TICK_SPACING: Duration = Duration::from_millis(120);

/// `(note, velocity, length)` per gesture kind.
fn voice(kind: FeedbackKind) -> (u8, u8, Duration) {
    match kind {
        FeedbackKind::PinchStart => (76, 100, Duration::from_millis(60)), // E5
        FeedbackKind::PinchEnd => (72, 70, Duration::from_millis(45)),    // C5
        FeedbackKind::FistZoomTick => (64, 55, Duration::from_millis(30)), // E4
        FeedbackKind::VSign => (79, 110, Duration::from_millis(120)),     // G5
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Chime - the feedback thread
// ════════════════════════════════════════════════════════════════════════════

enum ChimeCommand {
    Play(FeedbackKind),
    Quit,
}

/// Handle to the feedback thread.
pub struct Chime {
    cmd_tx: Sender<ChimeCommand>,
}

impl Chime {
    /// Spawn the feedback thread. Opening the port happens on the thread so
    /// a slow backend cannot stall startup.
    pub fn spawn() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        thread::spawn(move || chime_thread(cmd_rx));
        Chime { cmd_tx }
    }

    /// Fire-and-forget: never blocks the gesture loop.
    pub fn play(&self, kind: FeedbackKind) {
        let _ = self.cmd_tx.send(ChimeCommand::Play(kind));
    }

    pub fn quit(&self) {
        let _ = self.cmd_tx.send(ChimeCommand::Quit);
    }
}

fn chime_thread(cmd_rx: Receiver<ChimeCommand>) {
    let mut midi = open_midi_output();
    midi.program_change(CHANNEL, PROGRAM_GLOCKENSPIEL);

    let mut last_zoom_tick: Option<Instant> = None;

    for cmd in cmd_rx {
        let kind = match cmd {
            ChimeCommand::Play(k) => k,
            ChimeCommand::Quit => return,
        };

        if kind == FeedbackKind::FistZoomTick {
            let now = Instant::now();
            let due = last_zoom_tick.map_or(true, |t| now.duration_since(t) >= ZOOM_TICK_SPACING);
            if !due {
                continue;
            }
            last_zoom_tick = Some(now);
        }

        let (note, velocity, length) = voice(kind);
        midi.note_on(CHANNEL, note, velocity);
        thread::sleep(length);
        midi.note_off(CHANNEL, note);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
