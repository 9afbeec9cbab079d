// Game modules: character, background, scene

pub mod background;
pub mod characters;
pub mod scene;

pub use scene::{Scene, SceneTextures};
