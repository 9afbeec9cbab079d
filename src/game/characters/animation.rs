// Character animation system

use super::state::AnimationState;

/// What happens when a clip reaches its last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Wrap back to frame 0
    Loop,
    /// Stop on the last frame
    Once,
}

/// Timing of one sprite sheet: N equal-width frames shown for a fixed time each
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    /// Number of frames in the sheet
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    pub playback: Playback,
}

impl AnimationClip {
    /// Create a new animation clip (at least one frame)
    pub fn new(frame_count: usize, frame_duration: f32, playback: Playback) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frame_duration,
            playback,
        }
    }

    /// Create a looping animation
    pub fn looping(frame_count: usize, frame_duration: f32) -> Self {
        Self::new(frame_count, frame_duration, Playback::Loop)
    }

    /// Create a one-shot animation that holds its last frame
    pub fn one_shot(frame_count: usize, frame_duration: f32) -> Self {
        Self::new(frame_count, frame_duration, Playback::Once)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }

    /// Index of the frame after `frame`
    pub fn next_frame(&self, frame: usize) -> usize {
        match self.playback {
            Playback::Loop => (frame + 1) % self.frame_count,
            Playback::Once => (frame + 1).min(self.frame_count - 1),
        }
    }

    /// Horizontal texture offset and scale selecting `frame` from the sheet
    pub fn frame_uv(&self, frame: usize) -> (f32, f32) {
        let scale = 1.0 / self.frame_count as f32;
        (frame as f32 * scale, scale)
    }
}

/// One clip per animation state
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSet {
    clips: [AnimationClip; AnimationState::COUNT],
}

impl AnimationSet {
    /// Clips matching the Dude Monster sprite pack
    pub fn standard() -> Self {
        use AnimationState::*;

        let mut clips = [AnimationClip::looping(1, 0.1); AnimationState::COUNT];
        let mut set = |state: AnimationState, clip: AnimationClip| clips[state.index()] = clip;

        set(Idle, AnimationClip::looping(4, 0.1));
        set(Walk, AnimationClip::looping(6, 0.1));
        // Faster running and attacks
        set(Run, AnimationClip::looping(6, 0.08));
        set(Jump, AnimationClip::looping(8, 0.1));
        set(Attack1, AnimationClip::looping(4, 0.08));
        set(Attack2, AnimationClip::looping(6, 0.08));
        set(Hurt, AnimationClip::looping(4, 0.15));
        set(Death, AnimationClip::one_shot(8, 0.1));
        set(Climb, AnimationClip::looping(4, 0.1));
        set(Push, AnimationClip::looping(6, 0.1));
        set(Throw, AnimationClip::looping(4, 0.1));

        Self { clips }
    }

    pub fn clip(&self, state: AnimationState) -> &AnimationClip {
        &self.clips[state.index()]
    }

    /// Sprite sheet file for a state, e.g. `Dude_Monster_Walk_6.png`
    pub fn sheet_file(&self, prefix: &str, state: AnimationState) -> String {
        format!(
            "{}_{}_{}.png",
            prefix,
            state.sheet_name(),
            self.clip(state).frame_count
        )
    }
}

impl Default for AnimationSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Plays the clip of the current state
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    clips: AnimationSet,
    current_state: AnimationState,
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    /// Whether the sprite should be flipped horizontally
    flip_horizontal: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new(AnimationSet::standard())
    }
}

impl AnimationPlayer {
    /// Create a player showing `Idle`
    pub fn new(clips: AnimationSet) -> Self {
        Self {
            clips,
            current_state: AnimationState::Idle,
            current_frame: 0,
            frame_timer: 0.0,
            flip_horizontal: false,
        }
    }

    /// Switch to a state; frame and timer reset only on an actual change
    ///
    /// Returns true if the state changed.
    pub fn play(&mut self, state: AnimationState) -> bool {
        if self.current_state == state {
            return false;
        }
        log::debug!("animation {:?} -> {:?}", self.current_state, state);
        self.current_state = state;
        self.rewind();
        true
    }

    /// Switch to a state and start its clip from frame 0 even if unchanged
    pub fn play_from_start(&mut self, state: AnimationState) {
        self.play(state);
        self.rewind();
    }

    fn rewind(&mut self) {
        self.current_frame = 0;
        self.frame_timer = 0.0;
    }

    /// Advance the frame timer (called every tick)
    ///
    /// At most one frame is advanced per tick, and the timer restarts from
    /// zero rather than carrying the remainder.
    pub fn update(&mut self, dt: f32) {
        let clip = self.clips.clip(self.current_state);

        self.frame_timer += dt;
        if self.frame_timer >= clip.frame_duration {
            self.frame_timer = 0.0;
            self.current_frame = clip.next_frame(self.current_frame);
        }
    }

    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    pub fn state(&self) -> AnimationState {
        self.current_state
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Get the clip of the current state
    pub fn current_clip(&self) -> &AnimationClip {
        self.clips.clip(self.current_state)
    }

    pub fn clips(&self) -> &AnimationSet {
        &self.clips
    }

    /// Get animation data for rendering
    pub fn frame_data(&self) -> AnimationFrameData {
        let clip = self.current_clip();
        let frame_index = self.current_frame.min(clip.frame_count - 1);
        let (uv_offset, uv_scale) = clip.frame_uv(frame_index);

        AnimationFrameData {
            state: self.current_state,
            frame_index,
            uv_offset,
            uv_scale,
            flip_horizontal: self.flip_horizontal,
        }
    }
}

/// Data needed to render the current animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrameData {
    /// Selects the sprite sheet
    pub state: AnimationState,
    pub frame_index: usize,
    /// Left edge of the frame as a fraction of sheet width
    pub uv_offset: f32,
    /// Frame width as a fraction of sheet width
    pub uv_scale: f32,
    pub flip_horizontal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_animation_clip_creation() {
        let clip = AnimationClip::looping(4, 0.125);
        assert_eq!(clip.frame_count, 4);
        assert_eq!(clip.frame_duration, 0.125);
        assert_eq!(clip.playback, Playback::Loop);
        assert_eq!(AnimationClip::looping(0, 0.1).frame_count, 1);
    }

    #[test]
    fn test_animation_clip_duration() {
        let clip = AnimationClip::looping(6, 0.08);
        assert_relative_eq!(clip.total_duration(), 0.48, epsilon = 1e-6);
    }

    #[test]
    fn test_standard_table() {
        let set = AnimationSet::standard();
        let expected = [
            (AnimationState::Idle, 4, 0.1),
            (AnimationState::Walk, 6, 0.1),
            (AnimationState::Run, 6, 0.08),
            (AnimationState::Jump, 8, 0.1),
            (AnimationState::Attack1, 4, 0.08),
            (AnimationState::Attack2, 6, 0.08),
            (AnimationState::Hurt, 4, 0.15),
            (AnimationState::Death, 8, 0.1),
            (AnimationState::Climb, 4, 0.1),
            (AnimationState::Push, 6, 0.1),
            (AnimationState::Throw, 4, 0.1),
        ];
        for (state, frames, duration) in expected {
            let clip = set.clip(state);
            assert_eq!(clip.frame_count, frames, "{:?}", state);
            assert_eq!(clip.frame_duration, duration, "{:?}", state);
        }
        assert_eq!(set.clip(AnimationState::Death).playback, Playback::Once);
    }

    #[test]
    fn test_sheet_file() {
        let set = AnimationSet::standard();
        assert_eq!(
            set.sheet_file("Dude_Monster", AnimationState::Attack2),
            "Dude_Monster_Attack2_6.png"
        );
        assert_eq!(
            set.sheet_file("Dude_Monster", AnimationState::Idle),
            "Dude_Monster_Idle_4.png"
        );
    }

    #[test]
    fn test_frame_advances_once_per_duration() {
        let mut player = AnimationPlayer::default();
        let duration = player.current_clip().frame_duration;

        player.update(duration / 2.0);
        assert_eq!(player.current_frame(), 0);

        player.update(duration);
        assert_eq!(player.current_frame(), 1);
        // Remainder is discarded
        assert_eq!(player.frame_timer, 0.0);
    }

    #[test]
    fn test_big_step_advances_one_frame() {
        let mut player = AnimationPlayer::default();
        player.update(10.0);
        assert_eq!(player.current_frame(), 1);
    }

    #[test]
    fn test_every_state_follows_tick_count() {
        for state in AnimationState::ALL {
            let mut player = AnimationPlayer::default();
            player.play_from_start(state);
            let clip = *player.current_clip();

            for ticks in 1..=(clip.frame_count * 3) {
                player.update(clip.frame_duration);
                let expected = match clip.playback {
                    Playback::Loop => ticks % clip.frame_count,
                    Playback::Once => ticks.min(clip.frame_count - 1),
                };
                assert_eq!(player.current_frame(), expected, "{:?} tick {}", state, ticks);
            }
        }
    }

    #[test]
    fn test_death_holds_last_frame() {
        let mut player = AnimationPlayer::default();
        player.play(AnimationState::Death);
        for _ in 0..20 {
            player.update(0.1);
        }
        assert_eq!(player.current_frame(), 7);
        assert_eq!(player.frame_data().frame_index, 7);
    }

    #[test]
    fn test_play_same_state_keeps_frame() {
        let mut player = AnimationPlayer::default();
        player.play(AnimationState::Walk);
        player.update(0.1);
        assert_eq!(player.current_frame(), 1);

        assert!(!player.play(AnimationState::Walk));
        assert_eq!(player.current_frame(), 1);

        assert!(player.play(AnimationState::Run));
        assert_eq!(player.current_frame(), 0);
        assert_eq!(player.frame_timer, 0.0);
    }

    #[test]
    fn test_play_from_start_rewinds() {
        let mut player = AnimationPlayer::default();
        player.play(AnimationState::Attack1);
        player.update(0.08);
        player.play_from_start(AnimationState::Attack1);
        assert_eq!(player.current_frame(), 0);
    }

    #[test]
    fn test_frame_data_uvs() {
        let mut player = AnimationPlayer::default();
        player.play(AnimationState::Walk);
        player.update(0.1);
        player.update(0.1);
        player.set_flip_horizontal(true);

        let data = player.frame_data();
        assert_eq!(data.state, AnimationState::Walk);
        assert_eq!(data.frame_index, 2);
        assert_relative_eq!(data.uv_offset, 2.0 / 6.0);
        assert_relative_eq!(data.uv_scale, 1.0 / 6.0);
        assert!(data.flip_horizontal);
    }
}
