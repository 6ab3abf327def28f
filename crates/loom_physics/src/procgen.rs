use crate::forces::wrap;
use loom_core::*;
use rand::Rng;

/// Seed `count` threads scattered uniformly over the surface.
/// Returns an empty field when the bounds have no area.
pub fn seed_threads(count: usize, bounds: Bounds, rng: &mut impl Rng) -> Vec<Thread> {
    if !bounds.is_drawable() {
        return Vec::new();
    }
    (0..count).map(|_| seed_thread(bounds, rng)).collect()
}

fn seed_thread(bounds: Bounds, rng: &mut impl Rng) -> Thread {
    let [x, y] = random_point(bounds, rng);
    let [target_x, target_y] = random_point(bounds, rng);

    Thread {
        x,
        y,
        target_x,
        target_y,
        vx: rng.gen_range(-SEED_VELOCITY..SEED_VELOCITY),
        vy: rng.gen_range(-SEED_VELOCITY..SEED_VELOCITY),
        opacity: rng.gen_range(OPACITY_FLOOR..=OPACITY_SEED_MAX),
        hue: rng.gen_range(HUE_MIN..HUE_MAX),
        size: rng.gen_range(SIZE_MIN..SIZE_MAX),
    }
}

/// Uniform point in [0, width) x [0, height)
pub fn random_point(bounds: Bounds, rng: &mut impl Rng) -> [f32; 2] {
    [
        rng.gen_range(0.0..bounds.width),
        rng.gen_range(0.0..bounds.height),
    ]
}

/// Pick a fresh wander target with the given chance
pub fn maybe_retarget(thread: &mut Thread, chance: f64, bounds: Bounds, rng: &mut impl Rng) -> bool {
    if !rng.gen_bool(chance.clamp(0.0, 1.0)) {
        return false;
    }
    let [tx, ty] = random_point(bounds, rng);
    thread.target_x = tx;
    thread.target_y = ty;
    true
}

/// Map positions and targets proportionally into new bounds.
/// Hue, size, velocity and opacity are kept.
pub fn rescale_threads(threads: &mut [Thread], from: Bounds, to: Bounds) {
    if !from.is_drawable() || !to.is_drawable() {
        return;
    }
    let sx = to.width / from.width;
    let sy = to.height / from.height;

    for thread in threads.iter_mut() {
        thread.x = wrap(thread.x * sx, to.width);
        thread.y = wrap(thread.y * sy, to.height);
        thread.target_x = wrap(thread.target_x * sx, to.width);
        thread.target_y = wrap(thread.target_y * sy, to.height);
    }
}
