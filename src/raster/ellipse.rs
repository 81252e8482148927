use super::ShapeStyle;
use crate::canvas::PixelGrid;
use crate::geometry::{GridPoint, Rgba};

/// Inner edge of the outline ring, in normalized squared distance.
const OUTLINE_INNER_EDGE: f64 = 0.6;

/// Rasterizes an ellipse inscribed in the bounding box of the two drag
/// corners, by testing every grid cell against the normalized distance
/// `d² = ((x-cx)/rx)² + ((y-cy)/ry)²`. Filled mode keeps `d² ≤ 1`, outline
/// mode keeps the fixed band `0.6 ≤ d² ≤ 1`. Degenerate radii produce no
/// cells. Ellipses only ever paint; there is no erase variant.
pub fn draw_ellipse(
    grid: &mut PixelGrid,
    corner_a: GridPoint,
    corner_b: GridPoint,
    style: ShapeStyle,
    color: Rgba,
) {
    let center_x = f64::from(corner_a.x + corner_b.x) / 2.0;
    let center_y = f64::from(corner_a.y + corner_b.y) / 2.0;
    let radius_x = f64::from((corner_b.x - corner_a.x).abs()) / 2.0;
    let radius_y = f64::from((corner_b.y - corner_a.y).abs()) / 2.0;
    if radius_x == 0.0 || radius_y == 0.0 {
        return;
    }

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let dx = (f64::from(x) - center_x) / radius_x;
            let dy = (f64::from(y) - center_y) / radius_y;
            let d2 = dx * dx + dy * dy;
            let inside = match style {
                ShapeStyle::Filled => d2 <= 1.0,
                ShapeStyle::Outline => (OUTLINE_INNER_EDGE..=1.0).contains(&d2),
            };
            if inside {
                grid.set_cell(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOR: Rgba = Rgba::opaque(120, 40, 40);

    fn painted_count(grid: &PixelGrid) -> usize {
        grid.to_image()
            .pixels()
            .filter(|pixel| pixel.0 != [0, 0, 0, 0])
            .count()
    }

    #[test]
    fn degenerate_radii_paint_nothing() {
        let mut grid = PixelGrid::new(16, 16);
        draw_ellipse(
            &mut grid,
            GridPoint::new(3, 2),
            GridPoint::new(3, 9),
            ShapeStyle::Filled,
            COLOR,
        );
        draw_ellipse(
            &mut grid,
            GridPoint::new(2, 5),
            GridPoint::new(9, 5),
            ShapeStyle::Outline,
            COLOR,
        );
        assert_eq!(painted_count(&grid), 0);
    }

    #[test]
    fn filled_ellipse_matches_the_normalized_distance_test() {
        let mut grid = PixelGrid::new(16, 16);
        let (a, b) = (GridPoint::new(2, 2), GridPoint::new(10, 8));
        draw_ellipse(&mut grid, a, b, ShapeStyle::Filled, COLOR);

        let (cx, cy) = (6.0, 5.0);
        let (rx, ry) = (4.0, 3.0);
        for y in 0..16 {
            for x in 0..16 {
                let dx = (f64::from(x) - cx) / rx;
                let dy = (f64::from(y) - cy) / ry;
                let expected = dx * dx + dy * dy <= 1.0;
                let painted = grid.cell(x, y) == Some(COLOR);
                assert_eq!(painted, expected, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn outline_ellipse_is_a_band_with_an_open_center() {
        let mut grid = PixelGrid::new(16, 16);
        draw_ellipse(
            &mut grid,
            GridPoint::new(1, 1),
            GridPoint::new(13, 13),
            ShapeStyle::Outline,
            COLOR,
        );

        assert_eq!(grid.cell(7, 7), Some(Rgba::TRANSPARENT));
        assert_eq!(grid.cell(7, 1), Some(COLOR));
        assert_eq!(grid.cell(1, 7), Some(COLOR));
        assert!(painted_count(&grid) > 0);
    }

    #[test]
    fn corner_ellipse_leaves_the_rest_of_the_grid_untouched() {
        let mut grid = PixelGrid::new(16, 16);
        draw_ellipse(
            &mut grid,
            GridPoint::new(0, 0),
            GridPoint::new(4, 4),
            ShapeStyle::Filled,
            COLOR,
        );
        assert_eq!(grid.cell(2, 2), Some(COLOR));
        assert_eq!(grid.cell(10, 10), Some(Rgba::TRANSPARENT));
    }
}
