//! Player actor and its movement state machine.
//!
//! The player walks along the isometric diagonals while WASD is held, plays a
//! four frame walk cycle, and drops off the map for good once it leaves the
//! grid bounds.
//!
//! ```text
//!   Idle <──> Moving ──(out of bounds)──> Falling
//! ```
//!
//! [`Player::update`] is a plain method so the whole state machine can be
//! driven without a world; [`crate::systems::player::player_controller`] calls
//! it once per frame.

use bevy_ecs::prelude::Component;

use crate::components::animation::WalkAnimation;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::resources::input::{Direction, InputState};
use crate::resources::isogrid::IsoGrid;

/// Movement state of the player.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ActorState {
    #[default]
    Idle,
    Moving,
    /// Terminal. `fall_offset` is how far (in pixels) the sprite has dropped.
    Falling { fall_offset: f32 },
}

impl ActorState {
    pub fn is_falling(&self) -> bool {
        matches!(self, ActorState::Falling { .. })
    }

    pub fn fall_offset(&self) -> f32 {
        match self {
            ActorState::Falling { fall_offset } => *fall_offset,
            ActorState::Idle | ActorState::Moving => 0.0,
        }
    }
}

/// What a single [`Player::update`] did to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No net movement this frame.
    Stood,
    Walked,
    /// Left the map this frame.
    StartedFalling,
    /// Was already falling.
    KeptFalling,
}

#[derive(Component, Debug, Clone)]
pub struct Player {
    /// Grid units per second.
    pub speed: f32,
    /// Pixels per second while falling.
    pub fall_speed: f32,
    pub facing: Facing,
    pub animation: WalkAnimation,
    pub state: ActorState,
    /// Last directional key-down seen; picks the facing when several keys are held.
    pub last_direction: Option<Direction>,
}

impl Player {
    pub fn new(speed: f32, fall_speed: f32) -> Self {
        Self {
            speed,
            fall_speed,
            facing: Facing::default(),
            animation: WalkAnimation::default(),
            state: ActorState::Idle,
            last_direction: None,
        }
    }

    pub fn is_falling(&self) -> bool {
        self.state.is_falling()
    }

    pub fn fall_offset(&self) -> f32 {
        self.state.fall_offset()
    }

    pub fn frame_index(&self) -> usize {
        self.animation.frame_index
    }

    /// Advance the state machine by `dt` seconds.
    pub fn update(
        &mut self,
        position: &mut MapPosition,
        dt: f32,
        input: &InputState,
        grid: &IsoGrid,
    ) -> Transition {
        if let ActorState::Falling { fall_offset } = &mut self.state {
            *fall_offset += self.fall_speed * dt;
            return Transition::KeptFalling;
        }

        if let Some(dir) = input.last_pressed() {
            self.last_direction = Some(dir);
        }

        let (mut move_x, mut move_y) = (0.0_f32, 0.0_f32);
        for dir in Direction::ALL {
            if input.is_held(dir) {
                let (dx, dy) = dir.grid_vector();
                move_x += dx;
                move_y += dy;
            }
        }

        if move_x == 0.0 && move_y == 0.0 {
            self.animation.rest();
            self.state = ActorState::Idle;
            return Transition::Stood;
        }

        // Diagonal key combos must not be faster than a single key.
        let length = move_x.hypot(move_y);
        let step = self.speed * dt;
        position.translate(move_x / length * step, move_y / length * step);

        if let Some(dir) = self.last_direction {
            self.facing = Facing::from(dir);
        }

        self.animation.advance(dt);
        self.state = ActorState::Moving;

        // Position is left where it is, out of bounds.
        if !grid.contains(position.pos) {
            self.state = ActorState::Falling { fall_offset: 0.0 };
            return Transition::StartedFalling;
        }

        Transition::Walked
    }
}
