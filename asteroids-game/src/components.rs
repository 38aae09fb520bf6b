use glam::Vec2;
use sat_blit::{
    math_utils::{
        collision_queries::PolyIntersectionQuery,
        impulse::{Motion, RigidBody},
        shape::Shape
    },
    rendering::{transform::Transform, ColorIndex}
};
use crate::constants::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Asteroid,
    Ship,
    Projectile
}

/// Collision polygon plus the offset from the entity position to its center.
#[derive(Clone, Debug)]
pub struct HitShape {
    pub shape: Shape,
    pub center: Vec2,
    pub tint: ColorIndex
}

#[derive(Clone, Debug)]
pub struct EntityData {
    pub motion: Motion,
    /// Degrees.
    pub rotation: f32,
    pub health: i32,
    pub kind: EntityKind,
    pub hit_shape: HitShape
}

impl EntityData {
    pub fn new(kind: EntityKind, position: Vec2, linear: Vec2, hit_shape: HitShape) -> Self {
        Self {
            motion: Motion { position, linear, angular: 0.0 },
            rotation: 0.0,
            health: 0,
            kind,
            hit_shape
        }
    }

    pub fn position(&self) -> Vec2 {
        self.motion.position
    }

    /// Placement used for both drawing and collision.
    pub fn world_transform(&self) -> Transform {
        Transform::from_angle_and_translation(
            self.rotation,
            self.motion.position + self.hit_shape.center
        )
    }

    pub fn collides_with(&self, other: &EntityData) -> bool {
        self.hit_shape.shape.is_intersect(
            self.world_transform(),
            &other.hit_shape.shape,
            other.world_transform()
        )
    }

    /// Minimum translation vector pushing `self` out of `other`.
    pub fn mtv_against(&self, other: &EntityData) -> Option<Vec2> {
        self.hit_shape.shape.intersect(
            self.world_transform(),
            &other.hit_shape.shape,
            other.world_transform()
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AsteroidSize {
    Big,
    Medium,
    Small
}

impl AsteroidSize {
    pub fn radius(self) -> f32 {
        match self {
            AsteroidSize::Big => ASTEROID_RADIUS_BIG,
            AsteroidSize::Medium => ASTEROID_RADIUS_MEDIUM,
            AsteroidSize::Small => ASTEROID_RADIUS_SMALL
        }
    }

    /// What an asteroid of this size breaks into: child size and count.
    pub fn fragments(self) -> Option<(AsteroidSize, usize)> {
        match self {
            AsteroidSize::Big => Some((AsteroidSize::Medium, 4)),
            AsteroidSize::Medium => Some((AsteroidSize::Small, 2)),
            AsteroidSize::Small => None
        }
    }
}

#[derive(Clone, Debug)]
pub struct Asteroid {
    pub size: AsteroidSize,
    /// Jagged outline, drawn and used for mouse picking.
    pub outline: Shape,
    pub entity: EntityData
}

impl RigidBody for Asteroid {
    fn motion(&self) -> &Motion {
        &self.entity.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.entity.motion
    }

    fn radius(&self) -> f32 {
        self.size.radius()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShipState {
    pub is_immune: bool,
    pub last_hit_time: f64,
    pub immune_duration: f32,
    pub draw_trail: bool,
    pub last_time_shot: f64,
    pub shot_cool_down: f32
}

#[derive(Clone, Debug)]
pub struct Ship {
    pub body: Shape,
    pub trail: Shape,
    pub entity: EntityData,
    pub state: ShipState
}

#[derive(Clone, Debug)]
pub struct Projectile {
    pub damage: i32,
    pub radius: f32,
    pub entity: EntityData
}
