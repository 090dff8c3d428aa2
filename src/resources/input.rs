//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. WASD drives the four movement
//! directions; F11 toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;
use smallvec::SmallVec;

/// One of the four on-screen movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid-space contribution of this key to the movement vector.
    ///
    /// Screen directions run along the isometric diagonals, so "up" moves
    /// towards lower x and lower y.
    pub fn grid_vector(self) -> (f32, f32) {
        match self {
            Direction::Up => (-1.0, -1.0),
            Direction::Down => (1.0, 1.0),
            Direction::Left => (-1.0, 1.0),
            Direction::Right => (1.0, -1.0),
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held down.
    pub active: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_left: BoolState,
    pub direction_down: BoolState,
    pub direction_right: BoolState,
    pub mode_debug: BoolState,
    /// Directional key-down edges seen this frame, oldest first.
    pub pressed_this_frame: SmallVec<[Direction; 4]>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound_to(KeyboardKey::KEY_W),
            direction_left: BoolState::bound_to(KeyboardKey::KEY_A),
            direction_down: BoolState::bound_to(KeyboardKey::KEY_S),
            direction_right: BoolState::bound_to(KeyboardKey::KEY_D),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            pressed_this_frame: SmallVec::new(),
        }
    }
}

impl InputState {
    pub fn direction(&self, dir: Direction) -> &BoolState {
        match dir {
            Direction::Up => &self.direction_up,
            Direction::Down => &self.direction_down,
            Direction::Left => &self.direction_left,
            Direction::Right => &self.direction_right,
        }
    }

    pub fn direction_mut(&mut self, dir: Direction) -> &mut BoolState {
        match dir {
            Direction::Up => &mut self.direction_up,
            Direction::Down => &mut self.direction_down,
            Direction::Left => &mut self.direction_left,
            Direction::Right => &mut self.direction_right,
        }
    }

    /// Map a physical key to the direction it is bound to, if any.
    pub fn direction_for_key(&self, key: KeyboardKey) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| self.direction(*dir).key_binding == key)
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.direction(dir).active
    }

    /// Most recent directional key-down edge of this frame.
    pub fn last_pressed(&self) -> Option<Direction> {
        self.pressed_this_frame.last().copied()
    }

    /// Record a key-down edge and mark the key as held.
    ///
    /// Mirrors what the hardware poll does for one key press; handy for
    /// driving the simulation without a window.
    pub fn press(&mut self, dir: Direction) {
        self.direction_mut(dir).active = true;
        self.pressed_this_frame.push(dir);
    }

    pub fn release(&mut self, dir: Direction) {
        self.direction_mut(dir).active = false;
    }

    /// Forget edge information while keeping held keys.
    pub fn clear_edges(&mut self) {
        self.pressed_this_frame.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.direction_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.direction_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.direction_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.direction_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_inputstate_default_nothing_held() {
        let input = InputState::default();
        for dir in Direction::ALL {
            assert!(!input.is_held(dir));
        }
        assert_eq!(input.last_pressed(), None);
    }

    #[test]
    fn test_direction_for_key() {
        let input = InputState::default();
        assert_eq!(input.direction_for_key(KeyboardKey::KEY_W), Some(Direction::Up));
        assert_eq!(input.direction_for_key(KeyboardKey::KEY_D), Some(Direction::Right));
        assert_eq!(input.direction_for_key(KeyboardKey::KEY_SPACE), None);
    }

    #[test]
    fn test_last_pressed_is_most_recent_edge() {
        let mut input = InputState::default();
        input.press(Direction::Up);
        input.press(Direction::Left);
        assert_eq!(input.last_pressed(), Some(Direction::Left));
        assert!(input.is_held(Direction::Up));
        assert!(input.is_held(Direction::Left));
    }

    #[test]
    fn test_clear_edges_keeps_held_keys() {
        let mut input = InputState::default();
        input.press(Direction::Down);
        input.clear_edges();
        assert!(input.is_held(Direction::Down));
        assert_eq!(input.last_pressed(), None);
    }

    #[test]
    fn test_grid_vectors_follow_iso_diagonals() {
        assert_eq!(Direction::Up.grid_vector(), (-1.0, -1.0));
        assert_eq!(Direction::Down.grid_vector(), (1.0, 1.0));
        assert_eq!(Direction::Left.grid_vector(), (-1.0, 1.0));
        assert_eq!(Direction::Right.grid_vector(), (1.0, -1.0));
    }
}
