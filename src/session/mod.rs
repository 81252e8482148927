//! The editor session: one object owning the live grid, the history
//! stacks, the animation reel, and the active tool configuration. All
//! collaborators reach the engine through this type instead of shared
//! mutable state.

mod gestures;

use std::path::PathBuf;

use image::RgbaImage;

use crate::canvas::{PixelGrid, Snapshot};
use crate::config::EditorConfig;
use crate::error::AppResult;
use crate::geometry::{GridPoint, Rgba};
use crate::history::SnapshotHistory;
use crate::import;
use crate::reel::{AnimationReel, PlaybackState};
use crate::storage::ArtworkSink;

const MIN_BRUSH_SIZE: u32 = 1;
const MAX_BRUSH_SIZE: u32 = 255;

const FRAME_EXPORT_NAME: &str = "pixel-art";
const SPRITESHEET_EXPORT_NAME: &str = "spritesheet";

/// The closed set of drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Pen,
    Eraser,
    Rect,
    Circle,
    Fill,
}

/// Active tool selection plus the brush/color settings the input and
/// toolbar collaborators adjust.
#[derive(Debug, Clone, Copy)]
pub struct ToolState {
    active_tool: ToolKind,
    brush_size: u32,
    fill_shapes: bool,
    color: Rgba,
}

impl ToolState {
    pub const fn new(color: Rgba) -> Self {
        Self {
            active_tool: ToolKind::Pen,
            brush_size: 1,
            fill_shapes: false,
            color,
        }
    }

    pub const fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub const fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub const fn fill_shapes(&self) -> bool {
        self.fill_shapes
    }

    pub const fn color(&self) -> Rgba {
        self.color
    }
}

#[derive(Debug)]
struct GestureState {
    drawing: bool,
    start: GridPoint,
    last: Option<GridPoint>,
    preview: Option<Snapshot>,
}

impl GestureState {
    const fn idle() -> Self {
        Self {
            drawing: false,
            start: GridPoint::new(0, 0),
            last: None,
            preview: None,
        }
    }
}

#[derive(Debug)]
pub struct EditorSession {
    grid: PixelGrid,
    history: SnapshotHistory,
    reel: AnimationReel,
    tools: ToolState,
    gesture: GestureState,
}

impl EditorSession {
    pub fn new(config: &EditorConfig) -> Self {
        let grid = PixelGrid::new(config.grid_size, config.grid_size);
        let history = match config.history_depth {
            Some(depth) => SnapshotHistory::with_depth_limit(depth),
            None => SnapshotHistory::new(),
        };
        let reel = AnimationReel::new(grid.snapshot());
        Self {
            grid,
            history,
            reel,
            tools: ToolState::new(config.starting_color()),
            gesture: GestureState::idle(),
        }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn reel(&self) -> &AnimationReel {
        &self.reel
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    // --- tool/color/brush collaborator seam ---

    pub fn select_tool(&mut self, tool: ToolKind) {
        tracing::debug!(?tool, "tool selected");
        self.tools.active_tool = tool;
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.tools.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    pub fn set_fill_shapes(&mut self, fill_shapes: bool) {
        self.tools.fill_shapes = fill_shapes;
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.tools.color = color;
    }

    // --- history ---

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.grid)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.grid)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Wipes the canvas as a tracked edit.
    pub fn clear_canvas(&mut self) {
        self.history.push_state(&self.grid);
        self.grid.clear();
    }

    // --- animation reel ---

    pub fn add_frame(&mut self) {
        self.reel.add_frame(&mut self.grid);
    }

    pub fn delete_frame(&mut self) -> bool {
        self.reel.delete_frame(&mut self.grid)
    }

    pub fn next_frame(&mut self) {
        self.reel.next_frame(&mut self.grid);
    }

    pub fn prev_frame(&mut self) {
        self.reel.prev_frame(&mut self.grid);
    }

    pub fn select_frame(&mut self, index: usize) -> bool {
        self.reel.select_frame(index, &mut self.grid)
    }

    pub fn play(&mut self) -> bool {
        self.reel.play(&self.grid)
    }

    pub fn stop(&mut self) -> bool {
        self.reel.stop(&mut self.grid)
    }

    /// Driven by the timer collaborator every [`crate::reel::FRAME_INTERVAL`]
    /// while playback runs.
    pub fn tick(&mut self) -> bool {
        self.reel.tick(&mut self.grid)
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.reel.playback_state()
    }

    // --- import collaborator seam ---

    /// Replaces the canvas with a decoded raster, scaled to fit the grid
    /// height and centered horizontally.
    pub fn import_image(&mut self, source: &RgbaImage) -> AppResult<()> {
        let (scaled, offset_x) = import::scale_to_grid(source, self.grid.width(), self.grid.height())?;
        self.grid.clear();
        self.grid.blit_image(&scaled, offset_x);
        Ok(())
    }

    /// Decodes raw image bytes and imports them. Malformed input leaves the
    /// grid untouched and raises a user-visible notification.
    pub fn import_bytes(&mut self, bytes: &[u8]) -> AppResult<()> {
        let decoded = match import::decode_bytes(bytes) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::warn!(%err, "image import failed");
                crate::notification::send(format!("Image import failed: {err}"));
                return Err(err.into());
            }
        };
        self.import_image(&decoded)
    }

    // --- export collaborator seam ---

    /// Hands the live canvas to an export sink as a single frame.
    pub fn export_frame<S: ArtworkSink>(&self, sink: &S) -> AppResult<PathBuf> {
        let path = sink.save_artwork(FRAME_EXPORT_NAME, &self.grid.to_image())?;
        Ok(path)
    }

    /// Hands the composed spritesheet to an export sink. Live edits since
    /// the last frame save are not persisted implicitly.
    pub fn export_spritesheet<S: ArtworkSink>(&self, sink: &S) -> AppResult<PathBuf> {
        let sheet = self.reel.compose_spritesheet();
        let path = sink.save_artwork(SPRITESHEET_EXPORT_NAME, &sheet)?;
        Ok(path)
    }
}

#[cfg(test)]
impl EditorSession {
    pub(crate) fn with_grid_size(size: u32) -> Self {
        let mut config = EditorConfig::default();
        config.grid_size = size;
        Self::new(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brush_size_is_clamped_to_at_least_one() {
        let mut session = EditorSession::with_grid_size(8);
        session.set_brush_size(0);
        assert_eq!(session.tools().brush_size(), 1);
        session.set_brush_size(4);
        assert_eq!(session.tools().brush_size(), 4);
    }

    #[test]
    fn clear_canvas_is_undoable() {
        let mut session = EditorSession::with_grid_size(8);
        session.handle_start(2, 2, false);
        session.handle_end(2, 2, false);
        assert_eq!(session.grid().cell(2, 2), Some(session.tools().color()));

        session.clear_canvas();
        assert_eq!(session.grid().cell(2, 2), Some(Rgba::TRANSPARENT));

        assert!(session.undo());
        assert_eq!(session.grid().cell(2, 2), Some(session.tools().color()));
    }

    #[test]
    fn session_starts_with_one_frame_and_stopped_playback() {
        let session = EditorSession::with_grid_size(8);
        assert_eq!(session.reel().frame_count(), 1);
        assert_eq!(session.playback_state(), PlaybackState::Stopped);
    }

    #[test]
    fn import_replaces_canvas_content_and_is_centered() {
        let mut session = EditorSession::with_grid_size(8);
        session.handle_start(0, 0, false);
        session.handle_end(0, 0, false);

        let mut source = RgbaImage::new(4, 8);
        for pixel in source.pixels_mut() {
            *pixel = image::Rgba([10, 20, 30, 255]);
        }
        session.import_image(&source).expect("import should succeed");

        // 4x8 source lands as a 4-cell-wide column centered in 8 cells.
        assert_eq!(session.grid().cell(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(session.grid().cell(2, 0), Some(Rgba::opaque(10, 20, 30)));
        assert_eq!(session.grid().cell(5, 7), Some(Rgba::opaque(10, 20, 30)));
        assert_eq!(session.grid().cell(6, 7), Some(Rgba::TRANSPARENT));
    }

    struct RecordingSink {
        artworks: std::cell::RefCell<Vec<(String, (u32, u32))>>,
    }

    impl ArtworkSink for RecordingSink {
        fn save_artwork(
            &self,
            name: &str,
            image: &RgbaImage,
        ) -> crate::storage::StorageResult<PathBuf> {
            self.artworks
                .borrow_mut()
                .push((name.to_string(), image.dimensions()));
            Ok(PathBuf::from(format!("/tmp/{name}.png")))
        }
    }

    #[test]
    fn exports_hand_named_rasters_to_the_sink() {
        let mut session = EditorSession::with_grid_size(4);
        session.add_frame();
        session.add_frame();

        let sink = RecordingSink {
            artworks: std::cell::RefCell::new(Vec::new()),
        };
        session.export_frame(&sink).expect("sink accepts the frame");
        session
            .export_spritesheet(&sink)
            .expect("sink accepts the sheet");

        let recorded = sink.artworks.borrow();
        assert_eq!(recorded[0], ("pixel-art".to_string(), (4, 4)));
        assert_eq!(recorded[1], ("spritesheet".to_string(), (12, 4)));
    }

    #[test]
    fn malformed_import_bytes_leave_the_grid_unchanged() {
        let mut session = EditorSession::with_grid_size(8);
        session.handle_start(1, 1, false);
        session.handle_end(1, 1, false);
        let before = session.grid().clone();

        assert!(session.import_bytes(b"definitely not an image").is_err());
        assert_eq!(session.grid(), &before);
    }
}
