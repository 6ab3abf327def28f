use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task, block_on, poll_once};
use loom_core::LOADING_LINGER_MS;
use loom_portfolio::{Catalogue, CatalogueError};
use loom_sim::state::AppState;
use std::path::PathBuf;
use std::time::Duration;

use crate::page::Portfolio;

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::Loading),
            (spawn_loading_screen, start_project_load),
        )
        .add_systems(OnExit(AppState::Loading), despawn_loading_screen)
        .add_systems(
            Update,
            (loading_poll_system, linger_system)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );
    }
}

/// Where the project file lives
#[derive(Resource, Debug, Clone)]
pub struct ProjectSource(pub PathBuf);

#[derive(Component)]
struct LoadingRoot;

#[derive(Resource)]
struct ProjectLoadTask(Task<Result<Catalogue, CatalogueError>>);

/// Keeps the loading screen up for a moment after the data arrived
#[derive(Resource)]
struct LoadingLinger(Timer);

fn start_project_load(mut commands: Commands, source: Option<Res<ProjectSource>>) {
    let path = source.map_or_else(|| PathBuf::from("projects.json"), |s| s.0.clone());
    info!("Loading projects from {}", path.display());

    let pool = IoTaskPool::get();
    let task = pool.spawn(async move { Catalogue::load(&path) });
    commands.insert_resource(ProjectLoadTask(task));
}

fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgb(0.02, 0.03, 0.08)),
            LoadingRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Weaving..."),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::hsla(200.0, 0.7, 0.6, 0.9)),
            ));
        });
}

fn despawn_loading_screen(mut commands: Commands, query: Query<Entity, With<LoadingRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

fn loading_poll_system(
    mut commands: Commands,
    task: Option<ResMut<ProjectLoadTask>>,
    mut portfolio: ResMut<Portfolio>,
) {
    let Some(mut load_task) = task else { return };

    let Some(result) = block_on(poll_once(&mut load_task.0)) else {
        return;
    };

    let catalogue = match result {
        Ok(catalogue) => {
            info!("Loaded {} projects", catalogue.len());
            catalogue
        }
        Err(e) => {
            error!("Error loading projects: {e}");
            Catalogue::default()
        }
    };
    portfolio.set_catalogue(catalogue);

    commands.remove_resource::<ProjectLoadTask>();
    commands.insert_resource(LoadingLinger(Timer::new(
        Duration::from_millis(LOADING_LINGER_MS),
        TimerMode::Once,
    )));
}

fn linger_system(
    mut commands: Commands,
    time: Res<Time>,
    linger: Option<ResMut<LoadingLinger>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(mut linger) = linger else { return };
    if !linger.0.tick(time.delta()).finished() {
        return;
    }

    commands.remove_resource::<LoadingLinger>();
    next_state.set(AppState::Running);
}
