//! Pointer gesture handling. The input collaborator translates device
//! coordinates into grid coordinates and feeds the three phases here; the
//! alternate-action flag carries right-click erasing.

use super::{EditorSession, ToolKind};
use crate::geometry::GridPoint;
use crate::raster::{
    draw_ellipse, draw_line, draw_rectangle, flood_fill, stamp, BrushInk, ShapeStyle,
};

impl EditorSession {
    fn brush_ink(&self, alt_action: bool) -> BrushInk {
        if alt_action || self.tools.active_tool() == ToolKind::Eraser {
            BrushInk::Erase
        } else {
            BrushInk::Paint(self.tools.color())
        }
    }

    fn shape_style(&self) -> ShapeStyle {
        if self.tools.fill_shapes() {
            ShapeStyle::Filled
        } else {
            ShapeStyle::Outline
        }
    }

    /// Begins a drawing gesture at a grid cell. Records the pre-edit
    /// history state, then either runs the flood fill to completion or
    /// stamps the first brush mark.
    pub fn handle_start(&mut self, x: i32, y: i32, alt_action: bool) {
        let point = GridPoint::new(x, y);
        if self.tools.active_tool() != ToolKind::Fill {
            self.gesture.preview = Some(self.grid.snapshot());
        }
        self.gesture.drawing = true;
        self.gesture.start = point;
        self.gesture.last = Some(point);
        self.history.push_state(&self.grid);

        match self.tools.active_tool() {
            ToolKind::Fill => {
                flood_fill(&mut self.grid, point, self.tools.color());
                self.gesture.drawing = false;
            }
            ToolKind::Pen | ToolKind::Eraser | ToolKind::Rect | ToolKind::Circle => {
                let ink = self.brush_ink(alt_action);
                stamp(&mut self.grid, point, self.tools.brush_size(), ink);
            }
        }
    }

    /// Continues a gesture. Freehand tools extend the stroke with a gapless
    /// line from the previous cell; shape tools re-render their preview
    /// from the drag origin over the pre-gesture snapshot.
    pub fn handle_move(&mut self, x: i32, y: i32, alt_action: bool) {
        if !self.gesture.drawing {
            return;
        }
        let point = GridPoint::new(x, y);
        if self.gesture.last == Some(point) {
            return;
        }

        match self.tools.active_tool() {
            ToolKind::Pen | ToolKind::Eraser => {
                let ink = self.brush_ink(alt_action);
                if let Some(last) = self.gesture.last {
                    draw_line(&mut self.grid, last, point, self.tools.brush_size(), ink);
                }
                self.gesture.last = Some(point);
            }
            ToolKind::Rect => {
                if let Some(preview) = &self.gesture.preview {
                    self.grid.restore(preview);
                }
                let ink = self.brush_ink(alt_action);
                let style = self.shape_style();
                draw_rectangle(&mut self.grid, self.gesture.start, point, style, ink);
            }
            ToolKind::Circle => {
                if let Some(preview) = &self.gesture.preview {
                    self.grid.restore(preview);
                }
                let style = self.shape_style();
                let color = self.tools.color();
                draw_ellipse(&mut self.grid, self.gesture.start, point, style, color);
            }
            ToolKind::Fill => {}
        }
    }

    /// Ends a gesture. Shape tools record the shape-commit history state
    /// and draw their final geometry; all tools then reset the gesture.
    pub fn handle_end(&mut self, x: i32, y: i32, alt_action: bool) {
        if !self.gesture.drawing {
            return;
        }
        let point = GridPoint::new(x, y);

        match self.tools.active_tool() {
            ToolKind::Rect => {
                self.history.push_state(&self.grid);
                let ink = self.brush_ink(alt_action);
                let style = self.shape_style();
                draw_rectangle(&mut self.grid, self.gesture.start, point, style, ink);
            }
            ToolKind::Circle => {
                self.history.push_state(&self.grid);
                let style = self.shape_style();
                let color = self.tools.color();
                draw_ellipse(&mut self.grid, self.gesture.start, point, style, color);
            }
            ToolKind::Pen | ToolKind::Eraser | ToolKind::Fill => {}
        }

        self.gesture.drawing = false;
        self.gesture.last = None;
        self.gesture.preview = None;
    }
}
