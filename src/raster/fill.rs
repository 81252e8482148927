use crate::canvas::PixelGrid;
use crate::geometry::{GridPoint, Rgba};

/// Region-growing fill of the 4-connected component around `seed`. The seed
/// cell's color is the target; an already-matching seed is a no-op. The
/// fill runs on a scratch copy and is written back in one step, so readers
/// never observe a partially filled region. Returns whether the grid
/// changed.
pub fn flood_fill(grid: &mut PixelGrid, seed: GridPoint, fill_color: Rgba) -> bool {
    let Some(target) = grid.cell(seed.x, seed.y) else {
        tracing::warn!(x = seed.x, y = seed.y, "flood fill seed outside the grid");
        return false;
    };
    if target == fill_color {
        return false;
    }

    let mut scratch = grid.clone();
    let mut work = vec![seed];
    while let Some(point) = work.pop() {
        // A revisited cell no longer matches the target and falls through.
        if scratch.cell(point.x, point.y) != Some(target) {
            continue;
        }
        scratch.set_cell(point.x, point.y, fill_color);

        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let neighbor = GridPoint::new(point.x + dx, point.y + dy);
            if scratch.cell(neighbor.x, neighbor.y).is_some() {
                work.push(neighbor);
            }
        }
    }

    *grid = scratch;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{draw_rectangle, BrushInk, ShapeStyle};

    const WALL: Rgba = Rgba::opaque(0, 0, 0);
    const FILL: Rgba = Rgba::opaque(255, 0, 0);

    #[test]
    fn matching_seed_color_leaves_the_grid_unchanged() {
        let mut grid = PixelGrid::new(6, 6);
        grid.set_cell(2, 2, FILL);
        let before = grid.clone();

        assert!(!flood_fill(&mut grid, GridPoint::new(2, 2), FILL));
        assert_eq!(grid, before);
    }

    #[test]
    fn out_of_bounds_seed_is_a_no_op() {
        let mut grid = PixelGrid::new(6, 6);
        let before = grid.clone();
        assert!(!flood_fill(&mut grid, GridPoint::new(-1, 3), FILL));
        assert!(!flood_fill(&mut grid, GridPoint::new(6, 0), FILL));
        assert_eq!(grid, before);
    }

    #[test]
    fn enclosed_region_fills_exactly_the_connected_component() {
        let mut grid = PixelGrid::new(8, 8);
        draw_rectangle(
            &mut grid,
            GridPoint::new(1, 1),
            GridPoint::new(5, 5),
            ShapeStyle::Outline,
            BrushInk::Paint(WALL),
        );

        assert!(flood_fill(&mut grid, GridPoint::new(3, 3), FILL));

        for y in 0..8 {
            for x in 0..8 {
                let inside = (2..=4).contains(&x) && (2..=4).contains(&y);
                let on_wall = (1..=5).contains(&x)
                    && (1..=5).contains(&y)
                    && (x == 1 || x == 5 || y == 1 || y == 5);
                let expected = if inside {
                    FILL
                } else if on_wall {
                    WALL
                } else {
                    Rgba::TRANSPARENT
                };
                assert_eq!(grid.cell(x, y), Some(expected), "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn diagonal_neighbors_are_not_connected() {
        // Two transparent regions touching only at a corner stay separate.
        let mut grid = PixelGrid::new(4, 4);
        grid.set_cell(0, 1, WALL);
        grid.set_cell(1, 0, WALL);

        assert!(flood_fill(&mut grid, GridPoint::new(0, 0), FILL));
        assert_eq!(grid.cell(0, 0), Some(FILL));
        assert_eq!(grid.cell(1, 1), Some(Rgba::TRANSPARENT));
        assert_eq!(grid.cell(3, 3), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn unenclosed_seed_floods_the_whole_background() {
        let mut grid = PixelGrid::new(5, 5);
        grid.set_cell(2, 2, WALL);

        assert!(flood_fill(&mut grid, GridPoint::new(0, 0), FILL));
        for y in 0..5 {
            for x in 0..5 {
                let expected = if x == 2 && y == 2 { WALL } else { FILL };
                assert_eq!(grid.cell(x, y), Some(expected));
            }
        }
    }
}
