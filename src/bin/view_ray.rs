//! First-person raycaster viewer.
//!
//! Controls  W/↑ forward · S/↓ backward · A/← turn left · D/→ turn right · Esc quit
//!
//! Build:  cargo run --release -- [--level room.txt] [--wall bricks.rtex]

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use log::info;
use minifb::{Key, Window, WindowOptions};

use yaray_rs::{
    assets::{Level, demo, load_texture},
    engine::Engine,
    renderer::Software,
    settings::{self, Settings},
    sim::KeyState,
};

const TICK_FPS: usize = 33; // ~30 ms per tick

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Level file; the built-in demo room when omitted.
    #[arg(long)]
    level: Option<PathBuf>,

    /// Extra RTEX wall textures, appended after the two built-in ones
    /// (first file draws wall id 3).
    #[arg(long = "wall")]
    walls: Vec<PathBuf>,

    /// Presented pixels per projection pixel.
    #[arg(long, default_value_t = settings::SCALE)]
    scale: usize,

    /// Horizontal field of view, degrees.
    #[arg(long, default_value_t = settings::FOV)]
    fov: f64,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    /* ─────────── assets ──────────────────────────────────────────── */
    let level = match &args.level {
        Some(path) => Level::from_file(path)
            .with_context(|| format!("cannot load level {}", path.display()))?,
        None => demo::demo_level()?,
    };

    let mut bank = demo::demo_bank()?;
    for path in &args.walls {
        let tex = load_texture(path)
            .with_context(|| format!("cannot load texture {}", path.display()))?;
        let id = bank.insert(path.display().to_string(), tex)?;
        let wall_id = bank.push_wall(id)?;
        info!("{} → wall id {wall_id}", path.display());
    }

    /* ─────────── engine ──────────────────────────────────────────── */
    let mut settings = Settings {
        scale: args.scale,
        fov: args.fov,
        ..Settings::default()
    };
    if let Some((pos, angle)) = level.start {
        settings.start_pos = pos;
        settings.start_angle = angle;
    }

    let (w, h) = (settings.screen_width, settings.screen_height);
    let mut engine = Engine::new(Software::default(), &settings, level.map, bank)?;
    let scale = engine.projection().scale;

    let mut win = Window::new("Rust Raycaster", w, h, WindowOptions::default())?;
    win.set_target_fps(TICK_FPS);
    let mut surface = vec![0u32; w * h];

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();
    let mut paused = false;

    while win.is_open() && !win.is_key_down(Key::Escape) {
        /* unfocused window: skip the tick entirely */
        if !win.is_active() {
            if !paused {
                info!("paused");
                paused = true;
            }
            win.update();
            continue;
        }
        if paused {
            info!("resumed");
            paused = false;
        }

        let keys = KeyState::from_bools(
            win.is_key_down(Key::W) || win.is_key_down(Key::Up),
            win.is_key_down(Key::S) || win.is_key_down(Key::Down),
            win.is_key_down(Key::A) || win.is_key_down(Key::Left),
            win.is_key_down(Key::D) || win.is_key_down(Key::Right),
        );

        let t0 = Instant::now();
        engine.tick(keys).blit_scaled(&mut surface, scale);
        acc_time += t0.elapsed();
        acc_frames += 1;

        win.update_with_buffer(&surface, w, h)?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames.max(1) as f64;
            info!("avg frame: {avg_ms:.2} ms");
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
