use bevy::prelude::*;

/// Page lifecycle. The thread field only animates while `Running`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Project data is being loaded
    #[default]
    Loading,
    Running,
}
