//! Facing direction.
//!
//! Which way the player sprite looks. The discriminant is the sprite sheet row
//! holding that direction's walk cycle.

use crate::resources::input::Direction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    #[default]
    Down = 0,
    Left = 1,
    Right = 2,
    Up = 3,
}

impl Facing {
    /// Number of rows a sprite sheet needs to cover every facing.
    pub const COUNT: u32 = 4;

    /// Sprite sheet row for this facing.
    pub fn row(self) -> u32 {
        self as u32
    }
}

impl From<Direction> for Facing {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Facing::Up,
            Direction::Down => Facing::Down,
            Direction::Left => Facing::Left,
            Direction::Right => Facing::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_sheet_layout() {
        assert_eq!(Facing::Down.row(), 0);
        assert_eq!(Facing::Left.row(), 1);
        assert_eq!(Facing::Right.row(), 2);
        assert_eq!(Facing::Up.row(), 3);
    }

    #[test]
    fn test_default_faces_down() {
        assert_eq!(Facing::default(), Facing::Down);
    }

    #[test]
    fn test_from_direction() {
        assert_eq!(Facing::from(Direction::Up), Facing::Up);
        assert_eq!(Facing::from(Direction::Left), Facing::Left);
        assert_eq!(Facing::from(Direction::Right), Facing::Right);
        assert_eq!(Facing::from(Direction::Down), Facing::Down);
    }
}
