//! Headless run of the thread field.
//! Drives the frame scheduler with 5 ms host callbacks and a pointer circling
//! the surface, then reports frame and link statistics.
//!
//! Usage: simulate [--seconds N] [--tier low|medium|high|off] [--seed N]

use loom_core::{Bounds, LoomConfig, OPACITY_FLOOR, PerformanceTier, PointerPolicy};
use loom_sim::field::ThreadField;
use loom_sim::paint::DrawList;
use loom_sim::scheduler::FrameScheduler;
use std::time::Duration;

const CALLBACK_MS: u64 = 5;

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seconds: u64 = parse_arg(&args, "--seconds").unwrap_or(10);
    let seed: u64 = parse_arg(&args, "--seed").unwrap_or(42);
    let tier_arg: String = parse_arg(&args, "--tier").unwrap_or_else(|| "high".to_string());
    let attract = args.iter().any(|a| a == "--attract");

    let tier = if tier_arg == "off" {
        None
    } else {
        match tier_arg.parse::<PerformanceTier>() {
            Ok(tier) => Some(tier),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        }
    };

    let config = LoomConfig {
        seed: Some(seed),
        tiering: tier.is_some(),
        tier,
        pointer_policy: if attract {
            PointerPolicy::Attract
        } else {
            PointerPolicy::Repel
        },
        ..LoomConfig::default()
    };
    let profile = config.profile(tier);
    let bounds = Bounds::new(1280.0, 800.0);

    let mut field = ThreadField::from_config(&config, tier);
    field.seed(bounds);
    let mut scheduler = FrameScheduler::new(profile.target_fps);
    let mut canvas = DrawList::default();

    eprintln!(
        "Simulating {}s: tier {}, {} threads at {} fps, seed {}",
        seconds,
        tier.map_or("untiered", |t| t.name()),
        field.len(),
        profile.target_fps,
        seed
    );

    let mut links_total = 0usize;
    let mut glows_total = 0usize;
    let mut pairs_total = 0usize;
    let mut violations = 0usize;

    let callbacks = seconds * 1000 / CALLBACK_MS;
    for step in 1..=callbacks {
        let now = Duration::from_millis(step * CALLBACK_MS);

        // Pointer sweeps a circle around the centre every four seconds
        let angle = now.as_secs_f32() * std::f32::consts::TAU / 4.0;
        field.pointer.move_to(
            bounds.width * 0.5 + angle.cos() * 250.0,
            bounds.height * 0.5 + angle.sin() * 250.0,
        );

        scheduler.drive(now, || {
            field.tick();
            let stats = field.paint(&mut canvas);
            links_total += stats.links_drawn;
            glows_total += stats.glows_drawn;
            pairs_total += stats.pairs_examined;
            violations += field
                .threads
                .iter()
                .filter(|t| !bounds.contains(t.x, t.y) || !(OPACITY_FLOOR..=1.0).contains(&t.opacity))
                .count();
        });
    }

    let frames = scheduler.frames_run().max(1) as f64;
    println!();
    println!("Frames run:        {}", scheduler.frames_run());
    println!("Callbacks skipped: {}", scheduler.frames_skipped());
    println!("Effective fps:     {:.1}", scheduler.frames_run() as f64 / seconds.max(1) as f64);
    println!("Pairs per frame:   {:.0}", pairs_total as f64 / frames);
    println!("Links per frame:   {:.1}", links_total as f64 / frames);
    println!("Glows per frame:   {:.1}", glows_total as f64 / frames);
    println!("Invariant breaks:  {}", violations);
}
