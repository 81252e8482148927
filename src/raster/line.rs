use super::{stamp, BrushInk};
use crate::canvas::PixelGrid;
use crate::geometry::GridPoint;

/// The exact integer-grid cell sequence connecting two endpoints, by
/// error-accumulation stepping. Every intermediate cell is touched for any
/// slope, including horizontal, vertical, and 45 degree lines.
pub fn line_cells(from: GridPoint, to: GridPoint) -> Vec<GridPoint> {
    let (mut x, mut y) = (from.x, from.y);
    let delta_x = (to.x - x).abs();
    let delta_y = (to.y - y).abs();
    let step_x = if x < to.x { 1 } else { -1 };
    let step_y = if y < to.y { 1 } else { -1 };
    let mut error = delta_x - delta_y;

    let mut cells = Vec::new();
    loop {
        cells.push(GridPoint::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let doubled = 2 * error;
        if doubled > -delta_y {
            error -= delta_y;
            x += step_x;
        }
        if doubled < delta_x {
            error += delta_x;
            y += step_y;
        }
    }
    cells
}

/// Rasterizes the line onto the grid, applying the brush stamp at each
/// stepped cell.
pub fn draw_line(
    grid: &mut PixelGrid,
    from: GridPoint,
    to: GridPoint,
    brush_size: u32,
    ink: BrushInk,
) {
    for cell in line_cells(from, to) {
        stamp(grid, cell, brush_size, ink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rgba;
    use std::collections::HashSet;

    fn assert_no_gaps(cells: &[GridPoint]) {
        for pair in cells.windows(2) {
            let step_x = (pair[1].x - pair[0].x).abs();
            let step_y = (pair[1].y - pair[0].y).abs();
            assert!(
                step_x <= 1 && step_y <= 1,
                "gap between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn line_touches_endpoints_and_leaves_no_gaps_for_any_slope() {
        let endpoints = [
            (GridPoint::new(0, 0), GridPoint::new(7, 0)),
            (GridPoint::new(0, 0), GridPoint::new(0, 7)),
            (GridPoint::new(0, 0), GridPoint::new(7, 7)),
            (GridPoint::new(6, 1), GridPoint::new(0, 5)),
            (GridPoint::new(2, 9), GridPoint::new(9, 0)),
            (GridPoint::new(3, 3), GridPoint::new(3, 3)),
        ];

        for (from, to) in endpoints {
            let cells = line_cells(from, to);
            assert_eq!(cells.first(), Some(&from));
            assert_eq!(cells.last(), Some(&to));
            assert_no_gaps(&cells);
        }
    }

    #[test]
    fn line_is_symmetric_in_its_endpoints() {
        let from = GridPoint::new(1, 8);
        let to = GridPoint::new(9, 2);
        let forward: HashSet<GridPoint> = line_cells(from, to).into_iter().collect();
        let backward: HashSet<GridPoint> = line_cells(to, from).into_iter().collect();
        assert_eq!(forward, backward);
    }

    #[test]
    fn draw_line_stamps_the_brush_at_each_step() {
        let mut grid = PixelGrid::new(8, 8);
        draw_line(
            &mut grid,
            GridPoint::new(0, 0),
            GridPoint::new(3, 0),
            2,
            BrushInk::Paint(Rgba::opaque(4, 4, 4)),
        );

        for x in 0..5 {
            assert_eq!(grid.cell(x, 0), Some(Rgba::opaque(4, 4, 4)));
            assert_eq!(grid.cell(x, 1), Some(Rgba::opaque(4, 4, 4)));
        }
        assert_eq!(grid.cell(5, 0), Some(Rgba::TRANSPARENT));
    }
}
