// Scrolling background layer

use serde::{Deserialize, Serialize};

use crate::core::math::wrap_unit;

/// Background settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Image file, relative to the asset root
    pub image: String,
    /// Texture widths scrolled per second
    pub scroll_speed: f32,
    /// How many times the texture repeats across the screen
    pub repeat_x: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            image: "Rock1.png".to_string(),
            scroll_speed: 0.1,
            repeat_x: 2.0,
        }
    }
}

/// A full-screen texture whose horizontal UV offset drifts over time
#[derive(Debug, Clone)]
pub struct Background {
    scroll_offset: f32,
    scroll_speed: f32,
    repeat_x: f32,
}

impl Background {
    pub fn new(config: &BackgroundConfig) -> Self {
        Self {
            scroll_offset: 0.0,
            scroll_speed: config.scroll_speed,
            repeat_x: config.repeat_x,
        }
    }

    /// Scroll by `dt` seconds, keeping the offset in [0, 1)
    pub fn update(&mut self, dt: f32) {
        self.scroll_offset = wrap_unit(self.scroll_offset + self.scroll_speed * dt);
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn repeat_x(&self) -> f32 {
        self.repeat_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scrolls_with_time() {
        let mut background = Background::new(&BackgroundConfig::default());
        background.update(0.5);
        assert_relative_eq!(background.scroll_offset(), 0.05);
    }

    #[test]
    fn test_offset_wraps() {
        let mut background = Background::new(&BackgroundConfig {
            scroll_speed: 0.5,
            ..BackgroundConfig::default()
        });
        for _ in 0..5 {
            background.update(0.5);
        }
        assert_relative_eq!(background.scroll_offset(), 0.25);
        assert!(background.scroll_offset() < 1.0);
    }

    #[test]
    fn test_defaults() {
        let config = BackgroundConfig::default();
        assert_eq!(config.image, "Rock1.png");
        assert_eq!(Background::new(&config).repeat_x(), 2.0);
    }
}
