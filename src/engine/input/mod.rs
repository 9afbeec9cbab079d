// Input handling system
//
// Keyboard input for the single local player, sampled once per tick.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `config`: Key binding table
// - `player`: Held-key tracking and per-tick `InputFrame` snapshots
// - `manager`: Translates winit events through the bindings
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, Action};
//
// let mut input = InputManager::default();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per tick, take a snapshot
// let frame = input.sample();
// if frame.just_pressed(Action::Attack1) {
//     // Attack key went down this tick
// }
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
pub use player::InputFrame;
