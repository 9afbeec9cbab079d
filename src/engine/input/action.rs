// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,
    /// Held together with a direction to run instead of walk
    Run,

    // Combat
    Attack1,
    Attack2,

    // Debug triggers
    /// Hit the character (tests the hurt animation)
    Damage,
    Kill,
    Revive,
    /// Cycle through the climb, push and throw poses
    Pose,

    // Meta actions
    Pause,
    Quit,
}

impl Action {
    /// Every action, in the order controls are listed to the player
    pub const ALL: [Action; 12] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Run,
        Action::Attack1,
        Action::Attack2,
        Action::Damage,
        Action::Kill,
        Action::Revive,
        Action::Pose,
        Action::Pause,
        Action::Quit,
    ];

    /// Short description shown in the controls listing
    pub fn description(&self) -> &'static str {
        match self {
            Self::MoveLeft => "move left",
            Self::MoveRight => "move right",
            Self::Jump => "jump",
            Self::Run => "run (hold with a direction)",
            Self::Attack1 => "attack 1",
            Self::Attack2 => "attack 2",
            Self::Damage => "take damage (test)",
            Self::Kill => "die (test)",
            Self::Revive => "revive",
            Self::Pose => "cycle climb / push / throw pose",
            Self::Pause => "pause",
            Self::Quit => "quit",
        }
    }
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    // Future: Add controller support
    // GamepadButton(gilrs::Button),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement (WASD and arrows)
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::ShiftLeft), Action::Run),
        // Attacks
        (InputSource::key(KeyCode::KeyZ), Action::Attack1),
        (InputSource::key(KeyCode::KeyX), Action::Attack2),
        // Debug
        (InputSource::key(KeyCode::KeyH), Action::Damage),
        (InputSource::key(KeyCode::KeyK), Action::Kill),
        (InputSource::key(KeyCode::KeyR), Action::Revive),
        (InputSource::key(KeyCode::KeyC), Action::Pose),
        // Meta
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::KeyA);
        assert_eq!(source, InputSource::Keyboard(KeyCode::KeyA));
    }

    #[test]
    fn test_every_action_has_a_default_binding() {
        let bindings = default_bindings();
        for action in Action::ALL {
            assert!(
                bindings.iter().any(|(_, bound)| *bound == action),
                "{:?} has no default binding",
                action
            );
        }
    }

    #[test]
    fn test_jump_has_three_keys() {
        let jump_keys = default_bindings()
            .into_iter()
            .filter(|(_, action)| *action == Action::Jump)
            .count();
        assert_eq!(jump_keys, 3);
    }

    #[test]
    fn test_no_duplicate_inputs() {
        let bindings = default_bindings();
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in default bindings"
            );
        }
    }
}
