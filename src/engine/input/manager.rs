// Input manager - turns winit keyboard events into per-tick input frames

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::{InputFrame, PlayerInput};
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Coordinates key bindings and held-key state for the local player
///
/// An action stays held while any of its bound keys is down.
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
    /// Bound keys currently down
    held_sources: HashSet<InputSource>,
}

impl InputManager {
    /// Create an input manager with the given bindings
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
            held_sources: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(InputSource::key(key_code), event.state, event.repeat);
        }
    }

    fn process_key(&mut self, source: InputSource, state: ElementState, repeat: bool) {
        let Some(action) = self.config.get_action(source) else {
            return;
        };

        match state {
            ElementState::Pressed => {
                if !repeat && self.held_sources.insert(source) {
                    self.player.press(action);
                }
            }
            ElementState::Released => {
                if self.held_sources.remove(&source) && !self.is_held(action) {
                    self.player.release(action);
                }
            }
        }
    }

    fn is_held(&self, action: Action) -> bool {
        self.config
            .get_sources(action)
            .iter()
            .any(|source| self.held_sources.contains(source))
    }

    /// Snapshot input for the next simulation tick
    pub fn sample(&mut self) -> InputFrame {
        self.player.sample()
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held_sources.clear();
        self.player.reset();
    }

    /// Get the binding table
    pub fn config(&self) -> &InputConfig {
        &self.config
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}
