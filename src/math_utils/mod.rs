pub mod collision_queries;
pub mod impulse;
pub mod shape;

use glam::Vec2;

pub trait CrossProduct2 where Self: Copy {
    fn cross2(self, other: Self) -> f32;
}

impl CrossProduct2 for Vec2 {
    fn cross2(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }
}

/// Rotation by an angle given in degrees, the unit every entity stores its rotation in.
pub trait Rotate2 where Self: Copy {
    fn rotated_deg(self, degrees: f32) -> Self;
}

impl Rotate2 for Vec2 {
    fn rotated_deg(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vec2::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos
        )
    }
}

/// Unit normal of the edge `a -> b`, taken as `(-dy, dx)`.
///
/// A zero-length edge yields the zero vector.
pub fn edge_normal(a: Vec2, b: Vec2) -> Vec2 {
    (b - a).perp().normalize_or_zero()
}
