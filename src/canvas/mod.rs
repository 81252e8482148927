//! The live raster buffer and its snapshot type.

use image::RgbaImage;

use crate::geometry::Rgba;

/// Immutable full copy of a [`PixelGrid`] at one instant. Snapshots are
/// owned by whichever stack or frame slot holds them and never alias the
/// live buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    cells: Vec<Rgba>,
}

impl Snapshot {
    /// An all-transparent snapshot, used for fresh animation frames.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Rgba::TRANSPARENT; (width as usize) * (height as usize)],
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<Rgba> {
        cell_index(self.width, self.height, x, y).map(|index| self.cells[index])
    }

    pub fn to_image(&self) -> RgbaImage {
        cells_to_image(self.width, self.height, &self.cells)
    }
}

/// Fixed-size addressable raster; the single source of truth for drawn
/// pixels. Writes outside the bounds are ignored so that brush-size
/// overshoot at the edges stays harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    cells: Vec<Rgba>,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Rgba::TRANSPARENT; (width as usize) * (height as usize)],
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the stored color, or `None` when `(x, y)` is out of bounds.
    pub fn cell(&self, x: i32, y: i32) -> Option<Rgba> {
        cell_index(self.width, self.height, x, y).map(|index| self.cells[index])
    }

    /// Writes one cell. Out-of-bounds writes are silent no-ops.
    pub fn set_cell(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(index) = cell_index(self.width, self.height, x, y) {
            self.cells[index] = color;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Rgba::TRANSPARENT);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }

    /// Overwrites the whole buffer from `snapshot` in one step. A snapshot
    /// of mismatched dimensions is refused; snapshots only ever come from a
    /// grid of the same fixed size.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.width != self.width || snapshot.height != self.height {
            tracing::warn!(
                grid_width = self.width,
                grid_height = self.height,
                snapshot_width = snapshot.width,
                snapshot_height = snapshot.height,
                "refusing restore from mismatched snapshot"
            );
            return;
        }
        self.cells.copy_from_slice(&snapshot.cells);
    }

    pub fn to_image(&self) -> RgbaImage {
        cells_to_image(self.width, self.height, &self.cells)
    }

    /// Copies `source` onto the grid with its top-left at `(offset_x, 0)`.
    /// Columns falling outside the grid are clipped.
    pub fn blit_image(&mut self, source: &RgbaImage, offset_x: i32) {
        for (x, y, pixel) in source.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            self.set_cell(offset_x + x as i32, y as i32, Rgba::new(r, g, b, a));
        }
    }
}

fn cell_index(width: u32, height: u32, x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 {
        return None;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= width || y >= height {
        return None;
    }
    Some((y as usize) * (width as usize) + x as usize)
}

fn cells_to_image(width: u32, height: u32, cells: &[Rgba]) -> RgbaImage {
    let mut raw = Vec::with_capacity(cells.len() * 4);
    for cell in cells {
        raw.extend_from_slice(&cell.channels());
    }
    RgbaImage::from_raw(width, height, raw).expect("cell buffer length matches dimensions")
}
