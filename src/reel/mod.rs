//! The animation reel: an ordered sequence of frame snapshots, the edit
//! cursor, and the playback transport.

mod playback;

pub use playback::{PlaybackState, Transport, FRAME_INTERVAL};

use image::RgbaImage;

use crate::canvas::{PixelGrid, Snapshot};

/// Frame storage and transport for the animation mode. The reel always
/// holds at least one frame; every navigation persists the live grid into
/// the current frame first, so edits made since the last jump survive.
#[derive(Debug)]
pub struct AnimationReel {
    frames: Vec<Snapshot>,
    current: usize,
    transport: Transport,
}

impl AnimationReel {
    /// Starts a reel whose single frame is the grid's startup state.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            frames: vec![initial],
            current: 0,
            transport: Transport::new(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub const fn current_index(&self) -> usize {
        self.current
    }

    pub fn frame(&self, index: usize) -> Option<&Snapshot> {
        self.frames.get(index)
    }

    pub const fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    pub const fn playback_state(&self) -> PlaybackState {
        self.transport.state()
    }

    /// Persists live edits into the current frame slot.
    pub fn save_current(&mut self, grid: &PixelGrid) {
        self.frames[self.current] = grid.snapshot();
    }

    fn display_current(&self, grid: &mut PixelGrid) {
        grid.restore(&self.frames[self.current]);
    }

    /// Persists the live grid, appends a blank frame, and moves editing to
    /// it.
    pub fn add_frame(&mut self, grid: &mut PixelGrid) {
        self.save_current(grid);
        self.frames.push(Snapshot::blank(grid.width(), grid.height()));
        self.current = self.frames.len() - 1;
        self.display_current(grid);
        tracing::debug!(frame = self.current, "frame added");
    }

    /// Removes the current frame and steps the cursor back. The last
    /// remaining frame cannot be deleted.
    pub fn delete_frame(&mut self, grid: &mut PixelGrid) -> bool {
        if self.frames.len() <= 1 {
            tracing::warn!("refusing to delete the last frame");
            return false;
        }
        self.frames.remove(self.current);
        self.current = self.current.saturating_sub(1);
        self.display_current(grid);
        tracing::debug!(frame = self.current, "frame deleted");
        true
    }

    /// Persists live edits and moves to the next frame, wrapping around.
    pub fn next_frame(&mut self, grid: &mut PixelGrid) {
        self.save_current(grid);
        self.current = (self.current + 1) % self.frames.len();
        self.display_current(grid);
    }

    /// Persists live edits and moves to the previous frame, wrapping
    /// around.
    pub fn prev_frame(&mut self, grid: &mut PixelGrid) {
        self.save_current(grid);
        self.current = (self.current + self.frames.len() - 1) % self.frames.len();
        self.display_current(grid);
    }

    /// Persists live edits and jumps to `index`. Out-of-range indices are
    /// refused.
    pub fn select_frame(&mut self, index: usize, grid: &mut PixelGrid) -> bool {
        if index >= self.frames.len() {
            tracing::warn!(index, frames = self.frames.len(), "frame index out of range");
            return false;
        }
        self.save_current(grid);
        self.current = index;
        self.display_current(grid);
        true
    }

    /// Persists live edits and starts the playback loop. The timer
    /// collaborator then calls [`AnimationReel::tick`] every
    /// [`FRAME_INTERVAL`].
    pub fn play(&mut self, grid: &PixelGrid) -> bool {
        if !self.transport.is_playing() {
            self.save_current(grid);
        }
        self.transport.begin()
    }

    /// Stops playback and restores the frame that was being edited before
    /// playback began.
    pub fn stop(&mut self, grid: &mut PixelGrid) -> bool {
        if !self.transport.halt() {
            return false;
        }
        self.display_current(grid);
        true
    }

    /// One playback step: shows the loop cursor's frame and advances it.
    /// The edit cursor is untouched. No-op while stopped.
    pub fn tick(&mut self, grid: &mut PixelGrid) -> bool {
        let Some(index) = self.transport.advance(self.frames.len()) else {
            return false;
        };
        grid.restore(&self.frames[index]);
        true
    }

    /// Composes all frames left-to-right into one spritesheet raster:
    /// `frame_count × frame_width` wide, one frame tall, frame `i` occupying
    /// columns `[i*w, (i+1)*w)`.
    pub fn compose_spritesheet(&self) -> RgbaImage {
        let frame_width = self.frames[0].width();
        let frame_height = self.frames[0].height();
        let mut sheet = RgbaImage::new(frame_width * self.frames.len() as u32, frame_height);
        for (index, frame) in self.frames.iter().enumerate() {
            let offset = i64::from(frame_width) * index as i64;
            image::imageops::replace(&mut sheet, &frame.to_image(), offset, 0);
        }
        sheet
    }
}
