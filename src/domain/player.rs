//! Playback state of the gallery's video player. The viewer carries it
//! between requests, and each transport control links to the state it
//! produces.

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub playing: bool,
    pub muted: bool,
    /// Playback position as a percentage of the duration.
    pub progress: f64,
}

impl Default for PlayerState {
    fn default() -> Self {
        // Videos start playing as soon as they are shown.
        Self {
            playing: true,
            muted: false,
            progress: 0.0,
        }
    }
}

impl PlayerState {
    pub fn with_muted(muted: bool) -> Self {
        Self { muted, ..Self::default() }
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Move the playhead to `percent` of the video. Values outside 0..=100
    /// are clamped; a non-number leaves the position alone.
    pub fn scrub(&mut self, percent: f64) {
        if percent.is_finite() {
            self.progress = percent.clamp(0.0, 100.0);
        }
    }

    /// The viewer moved to an item that is not a video.
    pub fn reset_for_still(&mut self) {
        self.progress = 0.0;
        self.playing = true;
    }

    /// Query string that reproduces this state, without the default values.
    pub fn query(&self) -> String {
        let mut params = vec![format!("muted={}", if self.muted { 1 } else { 0 })];
        if !self.playing {
            params.push("paused=1".to_string());
        }
        if self.progress > 0.0 {
            params.push(format!("at={}", self.progress));
        }
        params.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles() {
        let mut state = PlayerState::with_muted(true);
        state.toggle_mute();
        assert!(!state.muted);

        assert!(state.playing);
        state.toggle_play();
        assert!(!state.playing);
        state.toggle_play();
        assert!(state.playing);
    }

    #[test]
    fn test_scrub_by_percentage() {
        let mut state = PlayerState::default();
        state.scrub(50.0);
        assert_eq!(state.progress, 50.0);

        state.scrub(150.0);
        assert_eq!(state.progress, 100.0);

        state.scrub(f64::NAN);
        assert_eq!(state.progress, 100.0);
    }

    #[test]
    fn test_still_item_resets_progress() {
        let mut state = PlayerState::default();
        state.toggle_play();
        state.scrub(40.0);
        state.reset_for_still();
        assert_eq!(state.progress, 0.0);
        assert!(state.playing);
    }

    #[test]
    fn test_query_lists_non_defaults() {
        assert_eq!(PlayerState::default().query(), "muted=0");

        let mut state = PlayerState::with_muted(true);
        state.toggle_play();
        state.scrub(30.0);
        assert_eq!(state.query(), "muted=1&paused=1&at=30");
    }
}
