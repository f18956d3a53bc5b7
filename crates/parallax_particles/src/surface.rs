//! Drawing surface abstraction.
//!
//! The field draws through [`Surface`]; hosts provide the backing store.
//! [`CommandSurface`] records draw commands instead of rasterizing them,
//! which is what tests and batching hosts want.

use crate::color::Color;

/// A 2D raster target sized to the viewport.
pub trait Surface {
    /// Current width in pixels.
    fn width(&self) -> u32;

    /// Current height in pixels.
    fn height(&self) -> u32;

    /// Reallocates to new dimensions. Contents are discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Clears the whole surface to transparent.
    fn clear(&mut self);

    /// Fills a disc.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);

    /// Strokes a one-pixel line segment.
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color);
}

/// A recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Full-surface clear.
    Clear,
    /// Filled disc.
    Circle {
        /// Center X.
        x: f32,
        /// Center Y.
        y: f32,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Line segment.
    Line {
        /// Start point.
        from: (f32, f32),
        /// End point.
        to: (f32, f32),
        /// Stroke color.
        color: Color,
    },
}

/// Surface that records commands for the current frame.
///
/// `clear` starts a new frame, so after a tick the recorded commands are
/// exactly that tick's output.
#[derive(Debug, Clone, Default)]
pub struct CommandSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    /// Mutations since creation (clears and draws, not resizes).
    mutations: u64,
}

impl CommandSurface {
    /// Creates a recording surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(256),
            mutations: 0,
        }
    }

    /// Commands recorded since the last clear (the clear itself included).
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of discs in the current frame.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// Number of line segments in the current frame.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Total clears and draws ever issued.
    #[must_use]
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }
}

impl Surface for CommandSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.mutations += 1;
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, radius, color });
        self.mutations += 1;
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
        self.mutations += 1;
    }
}
