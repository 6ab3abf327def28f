use bevy::prelude::*;
use loom_core::{DeviceHints, LoomConfig};
use loom_render::loading::ProjectSource;
use loom_render::plugin::LoomRenderPlugin;
use loom_sim::field::ThreadField;
use loom_sim::pipeline::SimulationPlugin;
use loom_sim::scheduler::FrameScheduler;
use loom_sim::state::AppState;
use std::path::{Path, PathBuf};

const CONFIG_PATH: &str = "loom.json";

/// Config from disk; a missing file is the normal case and stays quiet
fn load_config(path: &Path) -> LoomConfig {
    if !path.exists() {
        return LoomConfig::default();
    }
    match LoomConfig::load(path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Ignoring {}: {e}", path.display());
            LoomConfig::default()
        }
    }
}

/// What the host can tell about itself. Memory and network have no portable
/// probe and come from the config, if anywhere.
fn probe_device() -> DeviceHints {
    DeviceHints {
        cores: std::thread::available_parallelism()
            .ok()
            .map(|n| n.get() as u32),
        ..DeviceHints::default()
    }
}

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Loom - Portfolio".into(),
            resolution: (1280.0, 800.0).into(),
            ..default()
        }),
        ..default()
    }));

    let config = load_config(Path::new(CONFIG_PATH));
    let tier = config.resolve_tier(probe_device());
    let profile = config.profile(tier);
    match tier {
        Some(tier) => info!("Performance tier: {} - {}", tier.name(), tier.summary()),
        None => info!("Performance tiering off: {} threads", profile.thread_count),
    }

    app.insert_resource(ClearColor(Color::srgb(0.02, 0.03, 0.08)))
        .insert_resource(ThreadField::from_config(&config, tier))
        .insert_resource(FrameScheduler::new(profile.target_fps))
        .insert_resource(ProjectSource(PathBuf::from(&config.projects_path)))
        .init_state::<AppState>()
        .add_plugins(SimulationPlugin)
        .add_plugins(LoomRenderPlugin)
        .run();
}
