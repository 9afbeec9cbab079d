// Character system
//
// This module contains everything related to the playable character:
// - Character entity (movement, attack/hurt timers, animation selection)
// - Character stats and tuning
// - Animation states
// - Sprite-sheet clips and frame timing

pub mod animation;
pub mod character;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::AnimationSet;
pub use character::Character;
pub use state::AnimationState;
pub use stats::CharacterStats;
