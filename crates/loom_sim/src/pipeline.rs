use bevy::prelude::*;

use super::field::ThreadField;
use super::paint::DrawList;
use super::scheduler::FrameScheduler;
use super::state::AppState;

/// Ordering of the thread field systems within `Update`
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldSet {
    /// Host events: pointer, touch, surface size
    Input,
    /// Scheduled tick + paint
    Frame,
    /// Replay of the last painted frame
    Draw,
}

/// Bevy plugin for the thread field frame loop
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawList>()
            .configure_sets(
                Update,
                (FieldSet::Input, FieldSet::Frame, FieldSet::Draw).chain(),
            )
            .add_systems(
                Update,
                frame_tick
                    .in_set(FieldSet::Frame)
                    .run_if(in_state(AppState::Running)),
            );
    }
}

/// Runs on every display frame; the scheduler decides whether the field moves
fn frame_tick(
    time: Res<Time<Real>>,
    mut scheduler: ResMut<FrameScheduler>,
    mut field: ResMut<ThreadField>,
    mut canvas: ResMut<DrawList>,
) {
    if !scheduler.poll(time.elapsed()) {
        return;
    }

    field.tick();
    let stats = field.paint(&mut *canvas);

    if scheduler.frames_run() % 300 == 0 {
        debug!(
            "Frame {}: {} threads, {} links, {} glows, {} callbacks skipped",
            scheduler.frames_run(),
            field.len(),
            stats.links_drawn,
            stats.glows_drawn,
            scheduler.frames_skipped()
        );
    }
}
