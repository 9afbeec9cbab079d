// Character entity: movement, action timers and animation selection

use glam::Vec2;

use crate::engine::input::{Action, InputFrame};
use crate::engine::physics::{KinematicBody, PhysicsWorld};

use super::animation::{AnimationFrameData, AnimationPlayer, AnimationSet};
use super::state::AnimationState;
use super::stats::CharacterStats;

/// Countdown for a self-terminating action (attack, hurt)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionTimer {
    elapsed: f32,
    duration: f32,
}

impl ActionTimer {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    /// Add `dt` seconds; returns true once the duration is reached
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.duration
    }
}

/// The player-controlled character
///
/// Each tick the caller runs [`Character::handle_input`] and then
/// [`Character::update`] with the same delta.
#[derive(Debug, Clone)]
pub struct Character {
    stats: CharacterStats,
    body: KinematicBody,
    world: PhysicsWorld,
    facing_right: bool,
    animation: AnimationPlayer,
    /// Running attack, if any
    attack: Option<ActionTimer>,
    /// Running hurt window, if any
    hurt: Option<ActionTimer>,
    dead: bool,
}

impl Character {
    /// Create a character at the spawn point from `stats`
    pub fn new(stats: CharacterStats, clips: AnimationSet) -> Self {
        let world = PhysicsWorld::with_gravity(stats.gravity)
            .with_ground(stats.ground_y)
            .with_bounds(stats.min_x, stats.max_x);

        let mut body = KinematicBody::new(
            Vec2::new(stats.spawn_x, stats.spawn_y.max(stats.ground_y)),
            Vec2::new(stats.width, stats.height),
        );
        body.on_ground = body.position.y <= stats.ground_y;
        world.clamp_horizontal(&mut body);

        Self {
            stats,
            body,
            world,
            facing_right: true,
            animation: AnimationPlayer::new(clips),
            attack: None,
            hurt: None,
            dead: false,
        }
    }

    /// Apply one tick of sampled input
    ///
    /// Does nothing while hurt or dead. While attacking the character still
    /// moves and can jump, but the attack animation keeps playing.
    pub fn handle_input(&mut self, input: &InputFrame, dt: f32) {
        if self.hurt.is_some() || self.dead {
            return;
        }

        let running = input.is_pressed(Action::Run);
        let horizontal = input.horizontal();
        // Both directions held cancel out but still count as moving, facing right
        let moving = input.is_pressed(Action::MoveLeft) || input.is_pressed(Action::MoveRight);
        if moving {
            self.facing_right = horizontal >= 0.0;
        }
        let delta_x = horizontal * self.stats.speed(running) * dt;

        if input.is_pressed(Action::Jump) && self.body.launch(self.stats.jump_strength) {
            log::debug!("jump from x = {:.2}", self.body.position.x);
        }

        if input.just_pressed(Action::Attack1) {
            self.start_attack(AnimationState::Attack1);
        }
        if input.just_pressed(Action::Attack2) {
            self.start_attack(AnimationState::Attack2);
        }

        self.body.translate_x(delta_x);
        self.world.clamp_horizontal(&mut self.body);
        self.animation.set_flip_horizontal(!self.facing_right);

        if self.attack.is_none() {
            let next = if !self.body.on_ground {
                AnimationState::Jump
            } else if moving && running {
                AnimationState::Run
            } else if moving {
                AnimationState::Walk
            } else if self.state().is_pose() {
                self.state()
            } else {
                AnimationState::Idle
            };
            self.animation.play(next);
        }
    }

    /// Advance timers, physics and the animation frame
    pub fn update(&mut self, dt: f32) {
        if let Some(timer) = self.attack.as_mut() {
            if timer.tick(dt) {
                self.attack = None;
            }
        }

        if let Some(timer) = self.hurt.as_mut() {
            if timer.tick(dt) {
                self.hurt = None;
            }
        }

        if self.world.step(&mut self.body, dt) {
            log::debug!("landed");
        }

        self.animation.update(dt);
    }

    /// Start an attack animation; ignored while attacking, hurt or dead
    ///
    /// The attack lasts one full cycle of its clip.
    pub fn start_attack(&mut self, attack: AnimationState) -> bool {
        if !attack.is_attack() || self.attack.is_some() || self.hurt.is_some() || self.dead {
            return false;
        }

        let duration = self.animation.clips().clip(attack).total_duration();
        self.attack = Some(ActionTimer::new(duration));
        self.animation.play_from_start(attack);
        true
    }

    /// Hit the character; ignored while already hurt or dead
    ///
    /// A running attack is cancelled.
    pub fn take_damage(&mut self) -> bool {
        if self.hurt.is_some() || self.dead {
            return false;
        }

        log::info!("Character hurt");
        // The attack is dropped, not resumed after the hurt window
        self.attack = None;
        self.hurt = Some(ActionTimer::new(self.stats.hurt_duration));
        self.animation.play_from_start(AnimationState::Hurt);
        true
    }

    /// Enter the terminal death state
    pub fn kill(&mut self) {
        if self.dead {
            return;
        }

        log::info!("Character died");
        self.dead = true;
        self.attack = None;
        self.hurt = None;
        self.animation.play_from_start(AnimationState::Death);
    }

    /// Leave the death state and return to idle
    pub fn revive(&mut self) -> bool {
        if !self.dead {
            return false;
        }

        log::info!("Character revived");
        self.dead = false;
        self.animation.play(AnimationState::Idle);
        true
    }

    /// Show an animation directly; ignored while attacking, hurt or dead
    ///
    /// Pose states (Climb, Push, Throw) hold while the character stands still
    /// on the ground. Any other state is replaced by input-driven selection
    /// on the next tick.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.attack.is_some() || self.hurt.is_some() || self.dead {
            return false;
        }
        self.animation.play(state);
        true
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn size(&self) -> Vec2 {
        self.body.size
    }

    pub fn on_ground(&self) -> bool {
        self.body.on_ground
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn state(&self) -> AnimationState {
        self.animation.state()
    }

    pub fn current_frame(&self) -> usize {
        self.animation.current_frame()
    }

    pub fn is_attacking(&self) -> bool {
        self.attack.is_some()
    }

    pub fn is_hurt(&self) -> bool {
        self.hurt.is_some()
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Get the sheet, frame and flip to draw this tick
    pub fn frame_data(&self) -> AnimationFrameData {
        self.animation.frame_data()
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new(CharacterStats::default(), AnimationSet::standard())
    }
}
