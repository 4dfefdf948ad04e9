//! Discrete action space and the manual (heuristic) key mapping.

use physics::Vec3;

/// Number of discrete actions the agent understands.
pub const ACTION_COUNT: usize = 4;

/// Direction of the last decoded action.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Idle,
    Left,
    Right,
    Forward,
}

impl Direction {
    /// Decode a discrete action index. `None` for anything outside `0..4`.
    #[must_use]
    pub const fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Idle),
            1 => Some(Self::Left),
            2 => Some(Self::Right),
            3 => Some(Self::Forward),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Idle => 0,
            Self::Left => 1,
            Self::Right => 2,
            Self::Forward => 3,
        }
    }

    /// Offset applied to the current position for one step.
    ///
    /// Lateral moves change only `x`, forward moves only `z`.
    #[must_use]
    pub fn displacement(self, step_amount: f32) -> Vec3 {
        match self {
            Self::Idle => Vec3::ZERO,
            Self::Left => Vec3::new(-step_amount, 0.0, 0.0),
            Self::Right => Vec3::new(step_amount, 0.0, 0.0),
            Self::Forward => Vec3::new(0.0, 0.0, step_amount),
        }
    }

    #[must_use]
    pub const fn is_move(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Keys recognised in heuristic mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
}

impl Key {
    /// Parse a key name as written in a key script (`left`, `right`, `up`).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Some(Self::Left),
            "right" | "r" => Some(Self::Right),
            "up" | "u" | "forward" | "f" => Some(Self::Up),
            _ => None,
        }
    }
}

/// Map the keys pressed this frame to an action index.
///
/// Nothing pressed is idle. When several keys are down, `Up` beats `Right`
/// beats `Left`.
#[must_use]
pub fn heuristic(pressed: &[Key]) -> u32 {
    let direction = if pressed.contains(&Key::Up) {
        Direction::Forward
    } else if pressed.contains(&Key::Right) {
        Direction::Right
    } else if pressed.contains(&Key::Left) {
        Direction::Left
    } else {
        Direction::Idle
    };
    direction.index()
}
