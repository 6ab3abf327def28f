use loom_core::*;

/// A line between two nearby threads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    /// Base alpha before any pointer highlight
    pub alpha: f32,
}

/// Alpha of a link: fades out with distance, limited by the dimmer end
pub fn link_alpha(distance: f32, opacity_a: f32, opacity_b: f32) -> f32 {
    (1.0 - distance / CONNECTION_DISTANCE) * opacity_a.min(opacity_b)
}

/// Number of unordered pairs among `n` threads
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Visit every unordered pair (i < j) once. Returns the pair count.
///
/// Brute force: fields stay at 100 threads or fewer.
pub fn for_each_link(threads: &[Thread], mut visit: impl FnMut(Link)) -> usize {
    let mut examined = 0;
    for (i, a) in threads.iter().enumerate() {
        for (j, b) in threads.iter().enumerate().skip(i + 1) {
            examined += 1;
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < CONNECTION_DISTANCE {
                visit(Link {
                    a: i,
                    b: j,
                    distance,
                    alpha: link_alpha(distance, a.opacity, b.opacity),
                });
            }
        }
    }
    examined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(x: f32, y: f32, opacity: f32) -> Thread {
        Thread {
            x,
            y,
            target_x: x,
            target_y: y,
            vx: 0.0,
            vy: 0.0,
            opacity,
            hue: 200.0,
            size: 1.0,
        }
    }

    #[test]
    fn test_every_pair_examined_once() {
        let threads: Vec<Thread> = (0..17).map(|i| dot(i as f32 * 500.0, 0.0, 0.5)).collect();
        let examined = for_each_link(&threads, |_| {});
        assert_eq!(examined, 17 * 16 / 2);
        assert_eq!(pair_count(17), examined);
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
    }

    #[test]
    fn test_only_close_pairs_link() {
        let threads = vec![dot(0.0, 0.0, 1.0), dot(60.0, 0.0, 0.5), dot(500.0, 0.0, 1.0)];
        let mut found = Vec::new();
        for_each_link(&threads, |link| found.push(link));
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].a, found[0].b), (0, 1));
        assert!((found[0].alpha - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_link_alpha_fades_to_zero_at_threshold() {
        assert_eq!(link_alpha(0.0, 0.8, 0.4), 0.4);
        assert!(link_alpha(CONNECTION_DISTANCE - 0.01, 1.0, 1.0) < 0.001);
    }
}
