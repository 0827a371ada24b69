//! star_chart - interactive entry point.

use std::io::{self, Write};
use std::time::Duration;

use star_chart::app::{run, AppConfig};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Star Chart - Hand-Gesture Constellation Viewer        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "leap")]
    println!("  Mode: LeapMotion hardware");
    #[cfg(not(feature = "leap"))]
    println!("  Mode: Mouse/keyboard simulation  (use --features leap for hardware)");
    println!();

    let cfg = if std::env::args().any(|a| a == "--quick") {
        println!("  Quick-start: tuned defaults\n");
        AppConfig::default()
    } else {
        configure_interactively()
    };

    println!();
    println!("  Opening chart window…");
    println!();

    if let Err(e) = run(cfg) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn configure_interactively() -> AppConfig {
    let mut cfg = AppConfig::default();

    println!("  Tracking (enter to accept defaults):");

    let alpha: f32 = read_line("    Landmark smoothing 0.1-1.0 (default 0.3): ")
        .trim()
        .parse()
        .unwrap_or(0.3);
    cfg.tracker.smoothing_alpha = alpha.clamp(0.1, 1.0);

    let confidence: f32 = read_line("    Detection confidence 0.5-0.9 (default 0.7): ")
        .trim()
        .parse()
        .unwrap_or(0.7);
    cfg.tracker.min_confidence = confidence.clamp(0.5, 0.9);

    let cooldown: u64 = read_line("    Pinch cooldown ms 100-1000 (default 300): ")
        .trim()
        .parse()
        .unwrap_or(300);
    cfg.tracker.pinch_cooldown = Duration::from_millis(cooldown.clamp(100, 1000));

    let chime = read_line("    Gesture chimes y/n (default y): ");
    cfg.chime = !chime.trim().eq_ignore_ascii_case("n");

    cfg
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
