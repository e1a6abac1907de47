//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions (rows x columns, row 0 = top)
pub const DEFAULT_ROWS: u32 = 12;
pub const DEFAULT_COLS: u32 = 8;

/// Frame cadence used by the terminal runner (in milliseconds)
pub const TICK_MS: u32 = 16;

/// Default gravity timing (in milliseconds)
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 1000;

/// Soft drop divides the fall interval by this factor
pub const DEFAULT_SOFT_DROP_MULTIPLIER: u32 = 10;

/// Capacity of a falling piece in cells.
///
/// The shipped shape uses 3; the piece type is generalized up to this bound.
pub const MAX_PIECE_CELLS: usize = 8;

/// Landed-block material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Wood,
    Rock,
    Diamond,
    Bomb,
    Missile,
}

impl Material {
    /// All materials, in wire-code order
    pub const ALL: [Material; 5] = [
        Material::Wood,
        Material::Rock,
        Material::Diamond,
        Material::Bomb,
        Material::Missile,
    ];

    /// Compact cell code (0 is reserved for "empty")
    pub fn code(&self) -> u8 {
        match self {
            Material::Wood => 1,
            Material::Rock => 2,
            Material::Diamond => 3,
            Material::Bomb => 4,
            Material::Missile => 5,
        }
    }

    /// Decode a cell code; 0 and unknown codes map to None
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Material::Wood),
            2 => Some(Material::Rock),
            3 => Some(Material::Diamond),
            4 => Some(Material::Bomb),
            5 => Some(Material::Missile),
            _ => None,
        }
    }

    /// Parse material from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wood" => Some(Material::Wood),
            "rock" => Some(Material::Rock),
            "diamond" => Some(Material::Diamond),
            "bomb" => Some(Material::Bomb),
            "missile" => Some(Material::Missile),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Wood => "wood",
            Material::Rock => "rock",
            Material::Diamond => "diamond",
            Material::Bomb => "bomb",
            Material::Missile => "missile",
        }
    }
}

/// Cell on the board (None = empty, Some = landed material)
pub type Cell = Option<Material>;

/// Which side of the duel a board or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Index into per-player arrays
    pub fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The opposing player
    pub fn other(&self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Lateral movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for this direction
    pub fn dc(&self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Per-player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDropStart,
    SoftDropEnd,
    HardDrop,
    Restart,
}

impl PlayerAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(PlayerAction::MoveLeft),
            "moveright" => Some(PlayerAction::MoveRight),
            "rotate" => Some(PlayerAction::Rotate),
            "softdropstart" => Some(PlayerAction::SoftDropStart),
            "softdropend" => Some(PlayerAction::SoftDropEnd),
            "harddrop" => Some(PlayerAction::HardDrop),
            "restart" => Some(PlayerAction::Restart),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::MoveLeft => "moveLeft",
            PlayerAction::MoveRight => "moveRight",
            PlayerAction::Rotate => "rotate",
            PlayerAction::SoftDropStart => "softDropStart",
            PlayerAction::SoftDropEnd => "softDropEnd",
            PlayerAction::HardDrop => "hardDrop",
            PlayerAction::Restart => "restart",
        }
    }
}

/// An input event routed through the duel to one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub player: PlayerId,
    pub action: PlayerAction,
}

impl InputEvent {
    pub fn new(player: PlayerId, action: PlayerAction) -> Self {
        Self { player, action }
    }
}

/// Terminal state of a duel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelOutcome {
    Winner(PlayerId),
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_code_roundtrip() {
        for m in Material::ALL {
            assert_eq!(Material::from_code(m.code()), Some(m));
        }
        assert_eq!(Material::from_code(0), None);
        assert_eq!(Material::from_code(99), None);
    }

    #[test]
    fn test_material_codes_are_distinct_and_nonzero() {
        for m in Material::ALL {
            assert_ne!(m.code(), 0);
        }
        for (i, a) in Material::ALL.iter().enumerate() {
            for b in &Material::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_action_string_roundtrip() {
        let actions = [
            PlayerAction::MoveLeft,
            PlayerAction::MoveRight,
            PlayerAction::Rotate,
            PlayerAction::SoftDropStart,
            PlayerAction::SoftDropEnd,
            PlayerAction::HardDrop,
            PlayerAction::Restart,
        ];
        for action in actions {
            assert_eq!(PlayerAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(PlayerAction::from_str("hold"), None);
    }

    #[test]
    fn test_player_other() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
        assert_eq!(PlayerId::One.index(), 0);
        assert_eq!(PlayerId::Two.index(), 1);
    }

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Left.dc(), -1);
        assert_eq!(Direction::Right.dc(), 1);
    }
}
