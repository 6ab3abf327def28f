use bevy::prelude::*;
use loom_sim::pipeline::FieldSet;
use loom_sim::state::AppState;

use super::canvas;
use super::loading::LoadingPlugin;
use super::page::PagePlugin;

/// Host side of the portfolio: canvas input and painting, loading screen, page UI
pub struct LoomRenderPlugin;

impl Plugin for LoomRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((LoadingPlugin, PagePlugin))
            .add_systems(Startup, canvas::spawn_camera)
            .add_systems(
                Update,
                (
                    canvas::sync_surface,
                    canvas::track_pointer,
                    canvas::dismiss_hint,
                )
                    .in_set(FieldSet::Input),
            )
            .add_systems(
                Update,
                canvas::draw_field
                    .in_set(FieldSet::Draw)
                    .run_if(in_state(AppState::Running)),
            );
    }
}
