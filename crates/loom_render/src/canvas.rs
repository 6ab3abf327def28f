use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow, WindowResized};
use loom_core::{Bounds, Hsla, PointerPolicy};
use loom_sim::field::ThreadField;
use loom_sim::paint::{DrawCommand, DrawList};

/// Marker for the "move your cursor" text over the field
#[derive(Component)]
pub struct InteractionHint;

/// Gap between the rings that fake a filled disc
const RING_STEP: f32 = 0.75;

pub fn hint_text(policy: PointerPolicy) -> &'static str {
    match policy {
        PointerPolicy::Repel => "Move your cursor to part the threads",
        PointerPolicy::Attract => "Move your cursor to pull on the threads",
    }
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Feed mouse and touch positions into the field.
/// Both arrive in logical window pixels with a top-left origin, same as the field.
pub fn track_pointer(
    mut cursor: EventReader<CursorMoved>,
    mut touches: EventReader<TouchInput>,
    mut field: ResMut<ThreadField>,
) {
    let mut latest = None;
    for event in cursor.read() {
        latest = Some(event.position);
    }
    for touch in touches.read() {
        if matches!(touch.phase, TouchPhase::Started | TouchPhase::Moved) {
            latest = Some(touch.position);
        }
    }

    if let Some(position) = latest {
        field.pointer.move_to(position.x, position.y);
    }
}

/// The hint goes away on the first pointer or touch interaction after it
/// was shown. Events are drained every frame, so movement over the loading
/// screen never reaches a hint spawned later.
pub fn dismiss_hint(
    mut commands: Commands,
    mut cursor: EventReader<CursorMoved>,
    mut touches: EventReader<TouchInput>,
    hints: Query<Entity, With<InteractionHint>>,
) {
    let moved = cursor.read().count() > 0;
    let touched = touches
        .read()
        .any(|t| matches!(t.phase, TouchPhase::Started | TouchPhase::Moved));
    if !moved && !touched {
        return;
    }
    for entity in &hints {
        commands.entity(entity).despawn_recursive();
    }
}

/// Seed the field once the window has a size, then follow resizes
pub fn sync_surface(
    mut resized: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut field: ResMut<ThreadField>,
) {
    let was_resized = resized.read().count() > 0;
    if field.is_seeded() && !was_resized {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };

    let bounds = Bounds::new(window.width(), window.height());
    let seeding = !field.is_seeded();
    if field.resize(bounds) {
        if seeding {
            info!(
                "Seeded {} threads on a {}x{} surface",
                field.len(),
                bounds.width,
                bounds.height
            );
        } else {
            debug!("Surface resized to {}x{}", bounds.width, bounds.height);
        }
    }
}

/// Replay the last painted frame through gizmos
pub fn draw_field(list: Res<DrawList>, field: Res<ThreadField>, mut gizmos: Gizmos) {
    let bounds = field.bounds;
    if !bounds.is_drawable() {
        return;
    }

    for command in &list.commands {
        match *command {
            DrawCommand::Line {
                from,
                to,
                colour,
                width,
            } => {
                let (start, end) = (to_world(from, bounds), to_world(to, bounds));
                let colour = to_color(colour);
                if width > 1.0 {
                    let offset = (end - start).perp().normalize_or_zero() * (width * 0.25);
                    gizmos.line_2d(start + offset, end + offset, colour);
                    gizmos.line_2d(start - offset, end - offset, colour);
                } else {
                    gizmos.line_2d(start, end, colour);
                }
            }
            DrawCommand::Circle {
                centre,
                radius,
                colour,
            } => {
                let isometry = Isometry2d::from_translation(to_world(centre, bounds));
                let colour = to_color(colour);
                for ring in fill_radii(radius) {
                    gizmos.circle_2d(isometry, ring, colour);
                }
            }
        }
    }
}

/// Surface pixels (top-left origin, y down) to world units of a centred 2D camera
pub fn to_world(point: [f32; 2], bounds: Bounds) -> Vec2 {
    Vec2::new(
        point[0] - bounds.width * 0.5,
        bounds.height * 0.5 - point[1],
    )
}

pub fn to_color(colour: Hsla) -> Color {
    Color::hsla(colour.hue, colour.saturation, colour.lightness, colour.alpha)
}

/// Ring radii from the rim inwards
fn fill_radii(radius: f32) -> impl Iterator<Item = f32> {
    let rings = (radius / RING_STEP).ceil().max(1.0) as usize;
    (0..rings)
        .map(move |i| radius - i as f32 * RING_STEP)
        .filter(|r| *r > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;
    use loom_sim::state::AppState;

    #[test]
    fn test_surface_to_world() {
        let bounds = Bounds::new(800.0, 600.0);
        assert_eq!(to_world([0.0, 0.0], bounds), Vec2::new(-400.0, 300.0));
        assert_eq!(to_world([400.0, 300.0], bounds), Vec2::ZERO);
        assert_eq!(to_world([800.0, 600.0], bounds), Vec2::new(400.0, -300.0));
    }

    #[test]
    fn test_hint_matches_pointer_policy() {
        assert!(hint_text(PointerPolicy::Repel).contains("part"));
        assert!(hint_text(PointerPolicy::Attract).contains("pull"));
    }

    fn cursor_at(x: f32, y: f32) -> CursorMoved {
        CursorMoved {
            window: Entity::PLACEHOLDER,
            position: Vec2::new(x, y),
            delta: None,
        }
    }

    fn spawn_hint(mut commands: Commands) {
        commands.spawn(InteractionHint);
    }

    fn hint_count(app: &mut App) -> usize {
        let world = app.world_mut();
        let mut hints = world.query_filtered::<Entity, With<InteractionHint>>();
        hints.iter(world).count()
    }

    #[test]
    fn test_hint_survives_movement_while_loading() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .add_event::<CursorMoved>()
            .add_event::<TouchInput>()
            .init_state::<AppState>()
            .add_systems(OnEnter(AppState::Running), spawn_hint)
            .add_systems(Update, dismiss_hint);

        app.world_mut().send_event(cursor_at(10.0, 10.0));
        app.update();
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Running);
        app.update();
        assert_eq!(hint_count(&mut app), 1);

        app.world_mut().send_event(cursor_at(20.0, 20.0));
        app.update();
        assert_eq!(hint_count(&mut app), 0);
    }

    #[test]
    fn test_fill_radii() {
        let radii: Vec<f32> = fill_radii(3.0).collect();
        assert_eq!(radii, vec![3.0, 2.25, 1.5, 0.75]);
        // Small dots still get their rim
        assert_eq!(fill_radii(0.5).collect::<Vec<_>>(), vec![0.5]);
    }
}
