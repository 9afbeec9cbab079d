// Held-key tracking and per-tick input snapshots

use super::action::Action;
use std::collections::HashSet;

/// Input sampled for one simulation tick
///
/// Holds the actions held this tick and the ones held on the previous tick,
/// so edge detection needs no state outside the snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    current: HashSet<Action>,
    previous: HashSet<Action>,
}

impl InputFrame {
    /// Build a frame from explicit held sets
    pub fn new(
        current: impl IntoIterator<Item = Action>,
        previous: impl IntoIterator<Item = Action>,
    ) -> Self {
        Self {
            current: current.into_iter().collect(),
            previous: previous.into_iter().collect(),
        }
    }

    /// Frame where `held` is down now and nothing was down before
    #[cfg(test)]
    pub fn pressed(held: impl IntoIterator<Item = Action>) -> Self {
        Self::new(held, [])
    }

    /// Check if an action is held this tick
    pub fn is_pressed(&self, action: Action) -> bool {
        self.current.contains(&action)
    }

    /// Check if an action went down since the previous tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.current.contains(&action) && !self.previous.contains(&action)
    }

    /// Horizontal direction (-1.0, 0.0 or 1.0)
    pub fn horizontal(&self) -> f32 {
        let mut horizontal = 0.0;
        if self.is_pressed(Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            horizontal += 1.0;
        }
        horizontal
    }
}

/// Keyboard state for the single local player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Actions that went down since the last sample
    fresh: HashSet<Action>,

    /// Fresh presses already released again before the next sample
    tapped: HashSet<Action>,

    /// Actions reported as held by the previous sample
    previous: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.fresh.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) && self.fresh.contains(&action) {
            // Keep short taps visible to the next sample
            self.tapped.insert(action);
        }
    }

    /// Take the snapshot for this tick and roll the previous-tick state
    pub fn sample(&mut self) -> InputFrame {
        let current: HashSet<Action> = self.pressed.union(&self.tapped).copied().collect();

        // Only actions held without interruption since the last sample count
        // as previously held, so a release and re-press is a new edge
        let mut previous = std::mem::replace(&mut self.previous, current.clone());
        previous.retain(|action| !self.fresh.contains(action));

        self.fresh.clear();
        self.tapped.clear();
        InputFrame { current, previous }
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.fresh.clear();
        self.tapped.clear();
        self.previous.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        assert!(input.pressed.contains(&Action::Jump));

        let frame = input.sample();
        assert!(frame.is_pressed(Action::Jump));
        assert!(frame.just_pressed(Action::Jump));
    }

    #[test]
    fn test_held_is_not_just_pressed_next_tick() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack1);
        assert!(input.sample().just_pressed(Action::Attack1));

        let frame = input.sample();
        assert!(frame.is_pressed(Action::Attack1));
        assert!(!frame.just_pressed(Action::Attack1));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.sample();
        input.release(Action::Jump);

        let frame = input.sample();
        assert!(!frame.is_pressed(Action::Jump));
        assert!(!frame.just_pressed(Action::Jump));
    }

    #[test]
    fn test_tap_between_samples_is_seen_once() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack2);
        input.release(Action::Attack2);

        let frame = input.sample();
        assert!(frame.just_pressed(Action::Attack2));

        let frame = input.sample();
        assert!(!frame.is_pressed(Action::Attack2));
        assert!(!frame.just_pressed(Action::Attack2));
    }

    #[test]
    fn test_retap_of_held_action_is_a_new_edge() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack1);
        assert!(input.sample().just_pressed(Action::Attack1));

        input.release(Action::Attack1);
        input.press(Action::Attack1);
        input.release(Action::Attack1);

        let frame = input.sample();
        assert!(frame.is_pressed(Action::Attack1));
        assert!(frame.just_pressed(Action::Attack1));
        assert!(!input.sample().is_pressed(Action::Attack1));
    }

    #[test]
    fn test_release_and_repress_while_held_is_a_new_edge() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.sample();

        input.release(Action::Jump);
        input.press(Action::Jump);

        let frame = input.sample();
        assert!(frame.just_pressed(Action::Jump));
        let frame = input.sample();
        assert!(frame.is_pressed(Action::Jump));
        assert!(!frame.just_pressed(Action::Jump));
    }

    #[test]
    fn test_long_hold_release_is_not_latched() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft);
        input.sample();
        input.sample();

        input.release(Action::MoveLeft);
        assert!(!input.sample().is_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        input.release(Action::Jump);
        let frame = input.sample();
        assert!(!frame.is_pressed(Action::Jump));
        assert!(!frame.just_pressed(Action::Jump));
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.press(Action::Run);
        input.reset();

        assert!(input.pressed.is_empty());
        assert_eq!(input.sample(), InputFrame::default());
    }

    #[test]
    fn test_horizontal() {
        assert_eq!(InputFrame::default().horizontal(), 0.0);
        assert_eq!(InputFrame::pressed([Action::MoveLeft]).horizontal(), -1.0);
        assert_eq!(InputFrame::pressed([Action::MoveRight]).horizontal(), 1.0);
        assert_eq!(
            InputFrame::pressed([Action::MoveLeft, Action::MoveRight]).horizontal(),
            0.0
        );
    }

    #[test]
    fn test_frame_edges() {
        let frame = InputFrame::new([Action::Attack1, Action::Jump], [Action::Attack1, Action::Damage]);
        assert!(!frame.just_pressed(Action::Attack1));
        assert!(frame.just_pressed(Action::Jump));
        assert!(!frame.is_pressed(Action::Damage));
    }
}
