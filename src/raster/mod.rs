//! Cell rasterization for the drawing tools: which grid cells a stroke,
//! line, rectangle, ellipse, or fill touches, and the write that applies
//! them to the live grid.

mod ellipse;
mod fill;
mod line;
mod rectangle;

pub use ellipse::draw_ellipse;
pub use fill::flood_fill;
pub use line::{draw_line, line_cells};
pub use rectangle::draw_rectangle;

use crate::canvas::PixelGrid;
use crate::geometry::{GridPoint, Rgba};

/// What a brush deposits: a color, or a fully transparent clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushInk {
    Paint(Rgba),
    Erase,
}

impl BrushInk {
    pub const fn color(self) -> Rgba {
        match self {
            Self::Paint(color) => color,
            Self::Erase => Rgba::TRANSPARENT,
        }
    }

    pub const fn is_erase(self) -> bool {
        matches!(self, Self::Erase)
    }
}

/// Outline versus filled rendering for rectangles and ellipses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeStyle {
    Outline,
    Filled,
}

/// Applies a square brush stamp: the `size × size` block of cells whose
/// top-left corner is `at`. Overshoot past the grid edge is clipped by the
/// grid's bounds handling.
pub fn stamp(grid: &mut PixelGrid, at: GridPoint, size: u32, ink: BrushInk) {
    let size = size.max(1) as i32;
    let color = ink.color();
    for dy in 0..size {
        for dx in 0..size {
            grid.set_cell(at.x + dx, at.y + dy, color);
        }
    }
}
