use bevy::prelude::Resource;
use loom_core::*;
use loom_physics::connections;

/// Immediate-mode 2D drawing surface. Coordinates are surface pixels with
/// the origin at the top-left corner.
pub trait Canvas {
    fn clear(&mut self);
    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], colour: Hsla, width: f32);
    fn fill_circle(&mut self, centre: [f32; 2], radius: f32, colour: Hsla);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Line {
        from: [f32; 2],
        to: [f32; 2],
        colour: Hsla,
        width: f32,
    },
    Circle {
        centre: [f32; 2],
        radius: f32,
        colour: Hsla,
    },
}

/// A recorded frame. The host replays it every display frame until the
/// scheduler paints the next one.
#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }
}

impl Canvas for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], colour: Hsla, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            colour,
            width,
        });
    }

    fn fill_circle(&mut self, centre: [f32; 2], radius: f32, colour: Hsla) {
        self.commands.push(DrawCommand::Circle {
            centre,
            radius,
            colour,
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintStats {
    /// Candidate pairs tested for a link, always n(n-1)/2
    pub pairs_examined: usize,
    pub links_drawn: usize,
    pub glows_drawn: usize,
}

/// Draw one frame: links first, then the threads with their pointer glow
pub fn paint(threads: &[Thread], pointer: Pointer, canvas: &mut dyn Canvas) -> PaintStats {
    canvas.clear();
    let mut links_drawn = 0;

    let pairs_examined = connections::for_each_link(threads, |link| {
        let a = &threads[link.a];
        let b = &threads[link.b];
        let near_pointer = pointer
            .distance_to(a.pos())
            .min(pointer.distance_to(b.pos()))
            < HIGHLIGHT_RADIUS;
        let (boost, width) = if near_pointer {
            (HIGHLIGHT_BOOST, HIGHLIGHT_LINE_WIDTH)
        } else {
            (1.0, 1.0)
        };

        canvas.stroke_line(a.pos(), b.pos(), a.colour(link.alpha * boost), width);
        links_drawn += 1;
    });

    let mut glows_drawn = 0;
    for thread in threads {
        canvas.fill_circle(thread.pos(), thread.size, thread.colour(thread.opacity));

        let distance = pointer.distance_to(thread.pos());
        if distance < HIGHLIGHT_RADIUS {
            let intensity = (HIGHLIGHT_RADIUS - distance) / HIGHLIGHT_RADIUS;
            canvas.fill_circle(
                thread.pos(),
                thread.size * GLOW_SCALE,
                thread.colour(thread.opacity * GLOW_ALPHA * intensity),
            );
            glows_drawn += 1;
        }
    }

    PaintStats {
        pairs_examined,
        links_drawn,
        glows_drawn,
    }
}
