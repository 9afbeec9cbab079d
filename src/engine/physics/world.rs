use crate::core::math::clamp;

use super::body::KinematicBody;

/// Default gravity (units/second², negative = down)
pub const DEFAULT_GRAVITY: f32 = -15.0;

/// Default ground line
pub const DEFAULT_GROUND_Y: f32 = -0.5;

/// The playfield: constant gravity, a flat ground line and a horizontal range
///
/// Integration is explicit Euler: velocity first, then position.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsWorld {
    /// Vertical acceleration applied to airborne bodies
    pub gravity: f32,
    /// Height of the ground line bodies land on
    pub ground_y: f32,
    /// Left edge of the playfield
    pub min_x: f32,
    /// Right edge of the playfield
    pub max_x: f32,
}

impl PhysicsWorld {
    /// Create a world spanning normalized device coordinates horizontally
    pub fn new() -> Self {
        Self::with_gravity(DEFAULT_GRAVITY)
    }

    pub fn with_gravity(gravity: f32) -> Self {
        Self {
            gravity,
            ground_y: DEFAULT_GROUND_Y,
            min_x: -1.0,
            max_x: 1.0,
        }
    }

    pub fn with_ground(mut self, ground_y: f32) -> Self {
        self.ground_y = ground_y;
        self
    }

    pub fn with_bounds(mut self, min_x: f32, max_x: f32) -> Self {
        self.min_x = min_x;
        self.max_x = max_x;
        self
    }

    /// Advance an airborne body by `dt` seconds
    ///
    /// Returns true on the step the body touches the ground.
    pub fn step(&self, body: &mut KinematicBody, dt: f32) -> bool {
        if body.on_ground {
            return false;
        }

        body.velocity_y += self.gravity * dt;
        body.position.y += body.velocity_y * dt;

        if body.position.y <= self.ground_y {
            body.position.y = self.ground_y;
            body.velocity_y = 0.0;
            body.on_ground = true;
            return true;
        }

        false
    }

    /// Keep the body's bounding box inside the horizontal range
    pub fn clamp_horizontal(&self, body: &mut KinematicBody) {
        let half_width = body.half_width();
        body.position.x = clamp(
            body.position.x,
            self.min_x + half_width,
            self.max_x - half_width,
        );
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn body() -> KinematicBody {
        KinematicBody::new(Vec2::new(0.0, DEFAULT_GROUND_Y), Vec2::new(0.4, 0.5))
    }

    #[test]
    fn test_grounded_body_does_not_move() {
        let world = PhysicsWorld::new();
        let mut body = body();
        assert!(!world.step(&mut body, 0.1));
        assert_eq!(body.position.y, DEFAULT_GROUND_Y);
        assert_eq!(body.velocity_y, 0.0);
    }

    #[test]
    fn test_euler_integration() {
        let world = PhysicsWorld::new();
        let mut body = body();
        body.launch(8.0);

        world.step(&mut body, 0.1);
        // v = 8 - 1.5, y = -0.5 + 6.5 * 0.1
        assert_relative_eq!(body.velocity_y, 6.5, epsilon = 1e-5);
        assert_relative_eq!(body.position.y, 0.15, epsilon = 1e-5);
        assert!(!body.on_ground);
    }

    #[test]
    fn test_landing_clamps_to_ground() {
        let world = PhysicsWorld::new();
        let mut body = body();
        body.launch(8.0);

        let mut landed = false;
        for _ in 0..200 {
            if world.step(&mut body, 1.0 / 60.0) {
                landed = true;
                break;
            }
        }

        assert!(landed);
        assert!(body.on_ground);
        assert_eq!(body.position.y, DEFAULT_GROUND_Y);
        assert_eq!(body.velocity_y, 0.0);
    }

    #[test]
    fn test_clamp_horizontal() {
        let world = PhysicsWorld::new();
        let mut body = body();

        body.position.x = 5.0;
        world.clamp_horizontal(&mut body);
        assert_relative_eq!(body.position.x, 0.8);

        body.position.x = -5.0;
        world.clamp_horizontal(&mut body);
        assert_relative_eq!(body.position.x, -0.8);

        body.position.x = 0.3;
        world.clamp_horizontal(&mut body);
        assert_relative_eq!(body.position.x, 0.3);
    }

    #[test]
    fn test_custom_ground_and_bounds() {
        let world = PhysicsWorld::with_gravity(-10.0)
            .with_ground(0.0)
            .with_bounds(-2.0, 2.0);
        let mut body = KinematicBody::new(Vec2::new(10.0, 0.0), Vec2::new(1.0, 1.0));
        world.clamp_horizontal(&mut body);
        assert_eq!(body.position.x, 1.5);

        body.launch(1.0);
        world.step(&mut body, 1.0);
        assert!(body.on_ground);
        assert_eq!(body.position.y, 0.0);
    }
}
