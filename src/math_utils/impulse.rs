//! Approximate impulse response for two colliding bodies.
//!
//! The body "radius" stands in for mass (`1 / radius`) and its square for the
//! moment of inertia. Restitution is fixed.

use glam::Vec2;
use crate::math_utils::CrossProduct2;

pub const RESTITUTION: f32 = 0.5;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub linear: Vec2,
    pub angular: f32
}

pub trait RigidBody {
    fn motion(&self) -> &Motion;
    fn motion_mut(&mut self) -> &mut Motion;
    fn radius(&self) -> f32;
}

/// Applies the impulse for `mtv` (as returned by
/// [`PolyIntersectionQuery::intersect`](crate::math_utils::collision_queries::PolyIntersectionQuery::intersect)
/// with `a` first) to both bodies and moves them half the vector apart each.
pub fn resolve_collision(a: &mut impl RigidBody, b: &mut impl RigidBody, mtv: Vec2) {
    let (a_radius, b_radius) = (a.radius(), b.radius());
    let half_mtv = mtv * 0.5;
    let a_motion = a.motion_mut();
    let b_motion = b.motion_mut();

    let point_of_impact = a_motion.position + half_mtv;
    let relative_velocity = a_motion.linear - b_motion.linear;
    let normal = mtv.normalize_or_zero();

    let impulse_magnitude = -(1.0 + RESTITUTION) * relative_velocity.dot(normal) /
        (1.0 / a_radius + 1.0 / b_radius);
    let impulse = normal * impulse_magnitude;

    a_motion.linear += impulse / a_radius;
    b_motion.linear -= impulse / b_radius;

    let a_torque = (point_of_impact - a_motion.position).cross2(impulse);
    let b_torque = (point_of_impact - b_motion.position).cross2(impulse);
    a_motion.angular += a_torque / (a_radius * a_radius);
    b_motion.angular -= b_torque / (b_radius * b_radius);

    a_motion.position += half_mtv;
    b_motion.position -= half_mtv;
}

#[cfg(test)]
mod tests {
    use glam::vec2;
    use super::*;

    struct Disc {
        motion: Motion,
        radius: f32
    }

    impl RigidBody for Disc {
        fn motion(&self) -> &Motion { &self.motion }
        fn motion_mut(&mut self) -> &mut Motion { &mut self.motion }
        fn radius(&self) -> f32 { self.radius }
    }

    fn disc(position: Vec2, linear: Vec2, radius: f32) -> Disc {
        Disc {
            motion: Motion { position, linear, angular: 0.0 },
            radius
        }
    }

    #[test]
    fn approaching_bodies_bounce_with_restitution() {
        let mut a = disc(vec2(0.0, 0.0), vec2(2.0, 0.0), 16.0);
        let mut b = disc(vec2(10.0, 0.0), vec2(-2.0, 0.0), 16.0);
        let mtv = vec2(-2.0, 0.0);
        let normal = mtv.normalize();
        let before = (a.motion.linear - b.motion.linear).dot(normal);

        resolve_collision(&mut a, &mut b, mtv);

        let after = (a.motion().linear - b.motion().linear).dot(normal);
        assert!(before < 0.0);
        assert!(after > 0.0);
        assert!((after + RESTITUTION * before).abs() < 1e-5);
    }

    #[test]
    fn relative_normal_velocity_flips_whatever_the_mtv_sign() {
        let mut a = disc(vec2(0.0, 0.0), vec2(1.0, 0.5), 8.0);
        let mut b = disc(vec2(6.0, 0.0), vec2(-1.0, 0.0), 32.0);
        let mtv = vec2(3.0, 0.0);
        let before = (a.motion.linear - b.motion.linear).dot(mtv.normalize());
        resolve_collision(&mut a, &mut b, mtv);
        let after = (a.motion.linear - b.motion.linear).dot(mtv.normalize());
        assert!((after + RESTITUTION * before).abs() < 1e-5);
    }

    #[test]
    fn heavier_body_changes_velocity_less() {
        let mut small = disc(vec2(0.0, 0.0), vec2(1.0, 0.0), 8.0);
        let mut big = disc(vec2(20.0, 0.0), vec2(-1.0, 0.0), 32.0);
        resolve_collision(&mut small, &mut big, vec2(-4.0, 0.0));
        let small_change = (small.motion.linear - vec2(1.0, 0.0)).length();
        let big_change = (big.motion.linear - vec2(-1.0, 0.0)).length();
        assert!(small_change > big_change);
        assert!((small_change / big_change - 4.0).abs() < 1e-4);
    }

    #[test]
    fn bodies_are_pushed_apart_by_half_the_mtv() {
        let mut a = disc(vec2(0.0, 0.0), Vec2::ZERO, 16.0);
        let mut b = disc(vec2(10.0, 0.0), Vec2::ZERO, 16.0);
        resolve_collision(&mut a, &mut b, vec2(-4.0, 0.0));
        assert_eq!(a.motion.position, vec2(-2.0, 0.0));
        assert_eq!(b.motion.position, vec2(12.0, 0.0));
        assert_eq!(a.motion.linear, Vec2::ZERO);
        assert_eq!(b.motion.linear, Vec2::ZERO);
    }

    #[test]
    fn off_center_contact_spins_the_second_body() {
        let mut a = disc(vec2(0.0, 0.0), vec2(0.0, 1.0), 16.0);
        let mut b = disc(vec2(8.0, 10.0), vec2(0.0, -1.0), 16.0);
        resolve_collision(&mut a, &mut b, vec2(0.0, -4.0));
        // impulse runs along the mtv through the first body's center
        assert_eq!(a.motion.angular, 0.0);
        assert!(b.motion.angular != 0.0);
    }
}
