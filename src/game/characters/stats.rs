// Character stats - movement tuning, dimensions and timers

use serde::{Deserialize, Serialize};

/// Tunable character properties
///
/// Distances are in normalized device units (the window spans -1..1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterStats {
    // Movement
    /// Horizontal walking speed (units/second)
    pub move_speed: f32,
    /// Speed multiplier while the run modifier is held
    pub run_multiplier: f32,
    /// Upward velocity at take-off
    pub jump_strength: f32,

    // Physics
    /// Vertical acceleration while airborne
    pub gravity: f32,
    /// Height of the ground line
    pub ground_y: f32,
    /// Horizontal range the character must stay inside
    pub min_x: f32,
    pub max_x: f32,

    // Combat
    /// Seconds the character stays hurt after a hit
    pub hurt_duration: f32,

    // Dimensions
    pub width: f32,
    pub height: f32,

    // Spawn
    pub spawn_x: f32,
    pub spawn_y: f32,
}

/// Stats of the demo character
pub const BASE_STATS: CharacterStats = CharacterStats {
    move_speed: 4.0,
    run_multiplier: 1.5,
    jump_strength: 8.0,

    gravity: -15.0,
    ground_y: -0.5,
    min_x: -1.0,
    max_x: 1.0,

    hurt_duration: 0.5,

    width: 0.4,
    height: 0.5,

    spawn_x: 0.0,
    spawn_y: -0.5,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl CharacterStats {
    /// Horizontal speed for the given run modifier state
    pub fn speed(&self, running: bool) -> f32 {
        if running {
            self.move_speed * self.run_multiplier
        } else {
            self.move_speed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = CharacterStats::default();
        assert_eq!(stats.move_speed, 4.0);
        assert_eq!(stats.gravity, -15.0);
        assert_eq!(stats.jump_strength, 8.0);
        assert_eq!(stats.hurt_duration, 0.5);
        assert_eq!(stats.spawn_y, stats.ground_y);
    }

    #[test]
    fn test_speed() {
        let stats = CharacterStats::default();
        assert_eq!(stats.speed(false), 4.0);
        assert_eq!(stats.speed(true), 6.0);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let stats: CharacterStats = serde_json::from_str(r#"{ "move_speed": 2.0 }"#).unwrap();
        assert_eq!(stats.move_speed, 2.0);
        assert_eq!(stats.width, BASE_STATS.width);
    }
}
