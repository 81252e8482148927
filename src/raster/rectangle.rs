use super::{BrushInk, ShapeStyle};
use crate::canvas::PixelGrid;
use crate::geometry::GridPoint;

/// Rasterizes an axis-aligned rectangle between two drag corners. Filled
/// mode covers the whole bounding box, outline mode only the four border
/// lines. Erase ink always clears the full box, whatever the style.
pub fn draw_rectangle(
    grid: &mut PixelGrid,
    corner_a: GridPoint,
    corner_b: GridPoint,
    style: ShapeStyle,
    ink: BrushInk,
) {
    let (min_x, max_x) = (corner_a.x.min(corner_b.x), corner_a.x.max(corner_b.x));
    let (min_y, max_y) = (corner_a.y.min(corner_b.y), corner_a.y.max(corner_b.y));
    let color = ink.color();

    if ink.is_erase() || style == ShapeStyle::Filled {
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                grid.set_cell(x, y, color);
            }
        }
        return;
    }

    for x in min_x..=max_x {
        grid.set_cell(x, min_y, color);
        grid.set_cell(x, max_y, color);
    }
    for y in min_y..=max_y {
        grid.set_cell(min_x, y, color);
        grid.set_cell(max_x, y, color);
    }
}
