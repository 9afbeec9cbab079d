// Kinematic body moved directly by game code

use glam::Vec2;

/// Axis-aligned body with a centre position and a vertical velocity
///
/// Horizontal motion is positional (input moves the body directly), vertical
/// motion is integrated by [`super::PhysicsWorld::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    /// Centre of the body in world units
    pub position: Vec2,
    /// Full width and height
    pub size: Vec2,
    /// Vertical velocity (units/second, positive = up)
    pub velocity_y: f32,
    /// Whether the body rests on the ground line
    pub on_ground: bool,
}

impl KinematicBody {
    /// Create a body resting on the ground at `position`
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity_y: 0.0,
            on_ground: true,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    /// Leave the ground with an upward velocity
    ///
    /// Returns false (and changes nothing) if the body is already airborne.
    pub fn launch(&mut self, velocity_y: f32) -> bool {
        if !self.on_ground {
            return false;
        }
        self.velocity_y = velocity_y;
        self.on_ground = false;
        true
    }

    /// Move horizontally by `dx` world units
    pub fn translate_x(&mut self, dx: f32) {
        self.position.x += dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_is_grounded() {
        let body = KinematicBody::new(Vec2::new(0.0, -0.5), Vec2::new(0.4, 0.5));
        assert!(body.on_ground);
        assert_eq!(body.velocity_y, 0.0);
        assert_eq!(body.half_width(), 0.2);
    }

    #[test]
    fn test_launch_only_from_ground() {
        let mut body = KinematicBody::new(Vec2::ZERO, Vec2::ONE);
        assert!(body.launch(8.0));
        assert_eq!(body.velocity_y, 8.0);
        assert!(!body.on_ground);

        body.velocity_y = 3.0;
        assert!(!body.launch(8.0));
        assert_eq!(body.velocity_y, 3.0);
    }

    #[test]
    fn test_translate_x() {
        let mut body = KinematicBody::new(Vec2::ZERO, Vec2::ONE);
        body.translate_x(0.25);
        body.translate_x(-0.5);
        assert_eq!(body.position.x, -0.25);
    }
}
