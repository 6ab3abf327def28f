use crate::constants::{THREAD_LIGHTNESS, THREAD_SATURATION};
use serde::{Deserialize, Serialize};

/// A single animated point of the background field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub x: f32,
    pub y: f32,
    /// Wandering destination the thread drifts toward
    pub target_x: f32,
    pub target_y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Kept in [OPACITY_FLOOR, 1.0]
    pub opacity: f32,
    /// Fixed at creation, in [HUE_MIN, HUE_MAX)
    pub hue: f32,
    /// Radius, fixed at creation
    pub size: f32,
}

impl Thread {
    pub fn pos(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn distance_to(&self, point: [f32; 2]) -> f32 {
        let dx = point[0] - self.x;
        let dy = point[1] - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Thread colour at the given alpha
    pub fn colour(&self, alpha: f32) -> Hsla {
        Hsla::thread(self.hue, alpha)
    }
}

/// Size of the drawing surface in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Random sampling needs a non-empty range on both axes
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
    }
}

/// Last known pointer position, relative to the drawing surface.
/// `None` until the host reports a first move or touch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub position: Option<[f32; 2]>,
}

impl Pointer {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Some([x, y]),
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Some([x, y]);
    }

    /// Distance from the pointer to a point, infinite when there is no pointer
    pub fn distance_to(&self, point: [f32; 2]) -> f32 {
        match self.position {
            Some([px, py]) => {
                let dx = px - point[0];
                let dy = py - point[1];
                (dx * dx + dy * dy).sqrt()
            }
            None => f32::INFINITY,
        }
    }
}

/// Colour in HSL space with alpha. Hue in degrees, the rest in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    /// Alpha is clamped to [0, 1]
    pub fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn thread(hue: f32, alpha: f32) -> Self {
        Self::new(hue, THREAD_SATURATION, THREAD_LIGHTNESS, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(Hsla::thread(200.0, 1.5).alpha, 1.0);
        assert_eq!(Hsla::thread(200.0, -0.2).alpha, 0.0);
    }

    #[test]
    fn test_bounds_are_half_open() {
        let bounds = Bounds::new(800.0, 600.0);
        assert!(bounds.contains(0.0, 0.0));
        assert!(!bounds.contains(800.0, 10.0));
        assert!(!bounds.contains(10.0, 600.0));
        assert!(!Bounds::new(0.0, 600.0).is_drawable());
    }

    #[test]
    fn test_missing_pointer_is_infinitely_far() {
        assert!(Pointer::default().distance_to([0.0, 0.0]).is_infinite());
        assert_eq!(Pointer::at(3.0, 4.0).distance_to([0.0, 0.0]), 5.0);
    }
}
