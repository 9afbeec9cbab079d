// Demo scene: background + player character

use glam::Vec2;
use log::warn;

use crate::config::DemoConfig;
use crate::engine::assets::AssetLoader;
use crate::engine::input::{Action, InputFrame};
use crate::engine::renderer::{Renderer, SpriteDraw, TextureHandle, TextureWrap};

use super::background::Background;
use super::characters::{AnimationSet, AnimationState, Character};

/// GPU textures used by the scene
///
/// A slot is `None` when its image failed to load; that layer or state is
/// skipped when drawing.
#[derive(Debug, Clone, Default)]
pub struct SceneTextures {
    pub background: Option<TextureHandle>,
    pub sheets: [Option<TextureHandle>; AnimationState::COUNT],
}

impl SceneTextures {
    /// Load the background and one sheet per animation state
    pub fn load(renderer: &mut Renderer, loader: &AssetLoader, config: &DemoConfig) -> Self {
        let mut textures = Self::default();

        textures.background =
            load_or_warn(renderer, loader, &config.background.image, TextureWrap::Repeat);

        let clips = AnimationSet::standard();
        for state in AnimationState::ALL {
            let file = clips.sheet_file(&config.assets.sheet_prefix, state);
            textures.sheets[state.index()] =
                load_or_warn(renderer, loader, &file, TextureWrap::Clamp);
        }

        textures
    }

    pub fn sheet(&self, state: AnimationState) -> Option<TextureHandle> {
        self.sheets[state.index()]
    }
}

fn load_or_warn(
    renderer: &mut Renderer,
    loader: &AssetLoader,
    name: &str,
    wrap: TextureWrap,
) -> Option<TextureHandle> {
    match renderer.load_texture(loader, name, wrap) {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Everything simulated each tick
#[derive(Debug, Clone)]
pub struct Scene {
    background: Background,
    character: Character,
}

impl Scene {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            background: Background::new(&config.background),
            character: Character::new(config.character.clone(), AnimationSet::standard()),
        }
    }

    /// Run one simulation tick
    pub fn update(&mut self, input: &InputFrame, dt: f32) {
        if input.just_pressed(Action::Damage) {
            self.character.take_damage();
        }
        if input.just_pressed(Action::Kill) {
            self.character.kill();
        }
        if input.just_pressed(Action::Revive) {
            self.character.revive();
        }
        if input.just_pressed(Action::Pose) {
            let pose = self.character.state().next_pose();
            self.character.set_state(pose);
        }

        self.character.handle_input(input, dt);
        self.character.update(dt);
        self.background.update(dt);
    }

    /// Sprites to draw this frame, back to front
    pub fn draw_list(&self, textures: &SceneTextures) -> Vec<SpriteDraw> {
        let mut draws = Vec::with_capacity(2);

        if let Some(texture) = textures.background {
            draws.push(SpriteDraw {
                texture,
                center: Vec2::ZERO,
                size: Vec2::splat(2.0),
                uv_offset: Vec2::new(self.background.scroll_offset(), 0.0),
                uv_scale: Vec2::new(self.background.repeat_x(), 1.0),
                flip_x: false,
            });
        }

        let frame = self.character.frame_data();
        if let Some(texture) = textures.sheet(frame.state) {
            draws.push(SpriteDraw {
                texture,
                center: self.character.position(),
                size: self.character.size(),
                uv_offset: Vec2::new(frame.uv_offset, 0.0),
                uv_scale: Vec2::new(frame.uv_scale, 1.0),
                flip_x: frame.flip_horizontal,
            });
        }

        draws
    }

    /// One-line summary of the character, e.g. `Jump, facing left, airborne`
    pub fn status(&self) -> String {
        let character = &self.character;
        let mut status = format!(
            "{:?}, facing {}",
            character.state(),
            if character.facing_right() { "right" } else { "left" }
        );
        if !character.on_ground() {
            status.push_str(", airborne");
        }
        if character.is_attacking() {
            status.push_str(", attacking");
        }
        if character.is_hurt() {
            status.push_str(", hurt");
        }
        if character.is_dead() {
            status.push_str(", dead");
        }
        status
    }

    #[cfg(test)]
    pub fn character(&self) -> &Character {
        &self.character
    }

    #[cfg(test)]
    pub fn background(&self) -> &Background {
        &self.background
    }
}
