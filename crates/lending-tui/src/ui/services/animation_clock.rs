/// Frame counter for spinners and the agent's typing indicator.
/// Advanced once per UI tick (~50ms).
pub struct AnimationClock {
    frame_counter: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self { frame_counter: 0 }
    }

    pub fn tick(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// Spinner shown next to the active processing stage
    pub fn spinner_char(&self) -> char {
        const SPINNERS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        // Every 2 frames = ~100ms per glyph
        SPINNERS[(self.frame_counter / 2) as usize % SPINNERS.len()]
    }

    /// Bouncing dots while the agent is typing: ".", "..", "...", repeat
    pub fn typing_dots(&self) -> &'static str {
        const DOTS: [&str; 3] = [".", "..", "..."];
        // ~400ms per step
        DOTS[(self.frame_counter / 8) as usize % DOTS.len()]
    }

    /// On/off phase for the "new" badge on freshly arrived items
    pub fn pulse(&self) -> bool {
        self.frame_counter % 16 < 8
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}
