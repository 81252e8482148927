use std::time::Duration;

/// Fixed playback period for the external timer collaborator.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

/// The playback loop's half of the reel state: a two-state machine plus the
/// loop cursor. The cursor is deliberately separate from the reel's edit
/// cursor, so looping never moves the frame the user is editing.
#[derive(Debug, Default)]
pub struct Transport {
    state: PlaybackState,
    cursor: usize,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    pub const fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing)
    }

    /// Stopped → playing, with the loop cursor rewound to the first frame.
    pub(crate) fn begin(&mut self) -> bool {
        if self.is_playing() {
            tracing::warn!("playback already running");
            return false;
        }
        tracing::debug!("playback started");
        self.state = PlaybackState::Playing;
        self.cursor = 0;
        true
    }

    /// Playing → stopped.
    pub(crate) fn halt(&mut self) -> bool {
        if !self.is_playing() {
            tracing::warn!("playback already stopped");
            return false;
        }
        tracing::debug!("playback stopped");
        self.state = PlaybackState::Stopped;
        true
    }

    /// Yields the frame index to display on this tick and moves the cursor
    /// one step around the loop. `None` while stopped.
    pub(crate) fn advance(&mut self, frame_count: usize) -> Option<usize> {
        if !self.is_playing() || frame_count == 0 {
            return None;
        }
        let shown = self.cursor % frame_count;
        self.cursor = (shown + 1) % frame_count;
        Some(shown)
    }
}
