// Character animation states

/// The animation a character is showing
///
/// Every state has its own sprite sheet; the discriminant doubles as an index
/// into per-state tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    /// Standing still on ground
    #[default]
    Idle,
    /// Moving horizontally on ground
    Walk,
    /// Moving horizontally with the run modifier held
    Run,
    /// In the air
    Jump,
    Attack1,
    Attack2,
    /// Taking damage
    Hurt,
    /// Terminal: the animation plays once and holds
    Death,
    Climb,
    Push,
    Throw,
}

impl AnimationState {
    /// Number of states
    pub const COUNT: usize = 11;

    /// All states in index order
    pub const ALL: [AnimationState; Self::COUNT] = [
        Self::Idle,
        Self::Walk,
        Self::Run,
        Self::Jump,
        Self::Attack1,
        Self::Attack2,
        Self::Hurt,
        Self::Death,
        Self::Climb,
        Self::Push,
        Self::Throw,
    ];

    /// Position of this state in per-state tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Check if this is one of the attack states
    pub fn is_attack(self) -> bool {
        matches!(self, Self::Attack1 | Self::Attack2)
    }

    /// Check if this is a pose with no input of its own
    pub fn is_pose(self) -> bool {
        matches!(self, Self::Climb | Self::Push | Self::Throw)
    }

    /// Pose shown after this one when cycling poses
    pub fn next_pose(self) -> Self {
        match self {
            Self::Climb => Self::Push,
            Self::Push => Self::Throw,
            _ => Self::Climb,
        }
    }

    /// Get the name used in sprite sheet file names
    pub fn sheet_name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Walk => "Walk",
            Self::Run => "Run",
            Self::Jump => "Jump",
            Self::Attack1 => "Attack1",
            Self::Attack2 => "Attack2",
            Self::Hurt => "Hurt",
            Self::Death => "Death",
            Self::Climb => "Climb",
            Self::Push => "Push",
            Self::Throw => "Throw",
        }
    }
}
