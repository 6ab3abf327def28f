use loom_core::*;

/// Push (or pull) a thread by the pointer and brighten it.
///
/// Inside `POINTER_RADIUS` the force falls off linearly from 1 at the pointer
/// to 0 at the edge. Returns the force applied, 0 when out of range.
pub fn pointer_influence(
    thread: &mut Thread,
    pointer: [f32; 2],
    strength: f32,
    policy: PointerPolicy,
) -> f32 {
    let dx = pointer[0] - thread.x;
    let dy = pointer[1] - thread.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance >= POINTER_RADIUS {
        return 0.0;
    }

    let force = (POINTER_RADIUS - distance) / POINTER_RADIUS;
    // Sitting exactly on the pointer there is no direction to push along
    if distance > f32::EPSILON {
        let k = policy.sign() * force * strength;
        thread.vx += dx / distance * k;
        thread.vy += dy / distance * k;
    }
    thread.opacity = (thread.opacity + force * POINTER_GLOW_GAIN).min(1.0);

    force
}

/// Let opacity settle back toward the floor
pub fn fade(thread: &mut Thread) {
    thread.opacity = (thread.opacity * OPACITY_DECAY).clamp(OPACITY_FLOOR, 1.0);
}

/// Move by velocity, drift toward the target, then apply friction
pub fn integrate(thread: &mut Thread, profile: &TierProfile) {
    thread.x += thread.vx * profile.move_speed;
    thread.y += thread.vy * profile.move_speed;

    thread.vx += (thread.target_x - thread.x) * profile.drift;
    thread.vy += (thread.target_y - thread.y) * profile.drift;

    thread.vx *= profile.friction;
    thread.vy *= profile.friction;
}

/// Toroidal wrap into [0, extent)
pub fn wrap(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    if (0.0..extent).contains(&value) {
        return value;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid of a tiny negative can round up to `extent`
    if wrapped >= extent { 0.0 } else { wrapped }
}

pub fn wrap_thread(thread: &mut Thread, bounds: Bounds) {
    thread.x = wrap(thread.x, bounds.width);
    thread.y = wrap(thread.y, bounds.height);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_thread(x: f32, y: f32) -> Thread {
        Thread {
            x,
            y,
            target_x: x,
            target_y: y,
            vx: 0.0,
            vy: 0.0,
            opacity: 0.5,
            hue: 200.0,
            size: 2.0,
        }
    }

    #[test]
    fn test_repel_pushes_away() {
        let mut t = still_thread(100.0, 100.0);
        let force = pointer_influence(&mut t, [150.0, 100.0], 0.02, PointerPolicy::Repel);
        assert!((force - 0.75).abs() < 1e-6);
        assert!(t.vx < 0.0);
        assert_eq!(t.vy, 0.0);
    }

    #[test]
    fn test_attract_pulls_toward() {
        let mut t = still_thread(100.0, 100.0);
        pointer_influence(&mut t, [100.0, 40.0], 0.02, PointerPolicy::Attract);
        assert!(t.vy < 0.0);
        assert_eq!(t.vx, 0.0);
    }

    #[test]
    fn test_pointer_out_of_range_does_nothing() {
        let mut t = still_thread(0.0, 0.0);
        let force = pointer_influence(&mut t, [300.0, 0.0], 0.02, PointerPolicy::Repel);
        assert_eq!(force, 0.0);
        assert_eq!(t, still_thread(0.0, 0.0));
    }

    #[test]
    fn test_pointer_on_top_only_brightens() {
        let mut t = still_thread(10.0, 10.0);
        pointer_influence(&mut t, [10.0, 10.0], 0.02, PointerPolicy::Repel);
        assert_eq!((t.vx, t.vy), (0.0, 0.0));
        assert!((t.opacity - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_glow_is_capped() {
        let mut t = still_thread(10.0, 10.0);
        t.opacity = 0.95;
        pointer_influence(&mut t, [12.0, 10.0], 0.02, PointerPolicy::Repel);
        assert_eq!(t.opacity, 1.0);
    }

    #[test]
    fn test_fade_stops_at_floor() {
        let mut t = still_thread(0.0, 0.0);
        t.opacity = 0.31;
        fade(&mut t);
        assert!(t.opacity < 0.31);
        for _ in 0..10 {
            fade(&mut t);
        }
        assert_eq!(t.opacity, OPACITY_FLOOR);
    }

    #[test]
    fn test_wrap_is_toroidal() {
        assert_eq!(wrap(600.0, 600.0), 0.0);
        assert_eq!(wrap(602.5, 600.0), 2.5);
        assert_eq!(wrap(-1.0, 800.0), 799.0);
        assert_eq!(wrap(-1e-9, 800.0), 0.0);
        assert_eq!(wrap(599.0, 600.0), 599.0);
    }

    #[test]
    fn test_integrate_order() {
        let profile = TierProfile {
            move_speed: 1.0,
            drift: 0.5,
            friction: 0.5,
            ..PerformanceTier::High.profile()
        };
        let mut t = still_thread(0.0, 0.0);
        t.vx = 2.0;
        t.target_x = 10.0;
        integrate(&mut t, &profile);
        // moved first, then drift uses the new position
        assert_eq!(t.x, 2.0);
        assert_eq!(t.vx, (2.0 + (10.0 - 2.0) * 0.5) * 0.5);
    }
}
