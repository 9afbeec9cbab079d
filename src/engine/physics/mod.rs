// Kinematic physics: gravity, a flat ground line and horizontal bounds

pub mod body;
mod world;

pub use body::KinematicBody;
pub use world::PhysicsWorld;
