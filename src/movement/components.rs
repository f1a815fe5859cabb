//! Movement domain: components and physics layers for kinematic bodies.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, slopes)
    Ground,
    /// Wall surfaces
    Wall,
}

impl GameLayer {
    /// Layers a kinematic body collides with by default.
    pub fn terrain_mask() -> u32 {
        GameLayer::Ground.to_bits() | GameLayer::Wall.to_bits()
    }
}

#[derive(Component, Debug)]
pub struct Player;

/// Axis-aligned collision volume of a kinematic actor, centered on its transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub size: Vec2,
}

impl Body {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// World-space bounds of the body when centered at `position`.
    pub fn bounds(&self, position: Vec2) -> Rect {
        Rect::from_center_size(position, self.size)
    }
}

/// Per-frame contact flags produced by the resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Contacts {
    pub grounded: bool,
    /// Rise/run of the last floor or ceiling touched this frame.
    /// Only meaningful while `grounded` or `ceiling` is set.
    pub ground_slope: f32,
    pub ceiling: bool,
    pub left: bool,
    pub right: bool,
}

impl Contacts {
    pub fn touching_wall(&self) -> bool {
        self.left || self.right
    }

    pub fn pinched(&self) -> bool {
        self.left && self.right
    }
}

/// Contact flags for this frame plus a snapshot of the last one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactState {
    pub current: Contacts,
    pub previous: Contacts,
    /// Set from jump initiation until the ascent is cut short or gravity takes over.
    pub jumping: bool,
}

impl ContactState {
    /// Snapshot the current flags into `previous`, then clear them.
    pub fn begin_frame(&mut self) {
        self.previous = self.current;
        self.current = Contacts::default();
    }

    pub fn grounded(&self) -> bool {
        self.current.grounded
    }

    pub fn was_grounded(&self) -> bool {
        self.previous.grounded
    }
}

/// Persistent kinematic state of an actor, mutated once per frame by its controller.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    pub velocity: Vec2,
    /// Rate term of the horizontal smoothing spring.
    pub smoothing: f32,
    pub contacts: ContactState,
}

/// Per-actor intent for the current frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1]; vertical is unused by the controller.
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub jump_held: bool,
}

/// Drives an actor back and forth between two x coordinates.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    pub min_x: f32,
    pub max_x: f32,
    pub direction: f32,
}

impl Patrol {
    pub fn new(min_x: f32, max_x: f32) -> Self {
        Self {
            min_x,
            max_x,
            direction: 1.0,
        }
    }

    /// Flip direction when `x` leaves the patrol range and return the axis to feed as input.
    pub fn steer(&mut self, x: f32) -> f32 {
        if x > self.max_x {
            self.direction = -1.0;
        } else if x < self.min_x {
            self.direction = 1.0;
        }
        self.direction
    }
}
