//! Narrow-phase queries for convex polygons placed with a [`Transform`].
//!
//! Axis tests use the Separating Axis Theorem over the edge normals of both
//! polygons. The returned minimum translation vector points from the second
//! polygon toward the first, so translating the first polygon by it pushes the
//! two apart.

use glam::Vec2;
use crate::math_utils::{edge_normal, Rotate2};
use crate::math_utils::shape::Shape;
use crate::rendering::transform::Transform;

/// Extent of a transformed polygon along an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    pub min: f32,
    pub max: f32
}

impl Projection {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn of(shape: &Shape, transform: Transform, axis: Vec2) -> Self {
        let mut world = shape.world_points(transform).map(|p| p.dot(axis));
        let first = world.next().unwrap_or_default();
        world.fold(Self::new(first, first), |acc, projected| Self {
            min: acc.min.min(projected),
            max: acc.max.max(projected)
        })
    }

    /// Penetration depth of two intervals, or `None` if they are disjoint.
    ///
    /// Touching intervals overlap by zero. The depth is the smaller of the two
    /// ways to pull the intervals apart and carries no sign.
    pub fn overlap(self, other: Projection) -> Option<f32> {
        if self.max < other.min || other.max < self.min {
            return None;
        }
        Some((self.max - other.min).min(other.max - self.min))
    }
}

pub trait PolyIntersectionQuery {
    /// Minimum translation vector separating `self` from `other`, or `None` when
    /// a separating axis exists.
    fn intersect(
        &self, self_transform: Transform,
        other: &Self, other_transform: Transform
    ) -> Option<Vec2>;

    fn is_intersect(
        &self, self_transform: Transform,
        other: &Self, other_transform: Transform
    ) -> bool {
        self.intersect(self_transform, other, other_transform).is_some()
    }
}

impl PolyIntersectionQuery for Shape {
    fn intersect(
        &self, self_transform: Transform,
        other: &Self, other_transform: Transform
    ) -> Option<Vec2> {
        let mut min_overlap = f32::MAX;
        let mut smallest_axis = Vec2::ZERO;

        let axes = world_normals(self, self_transform)
            .chain(world_normals(other, other_transform));
        for axis in axes {
            let lhs = Projection::of(self, self_transform, axis);
            let rhs = Projection::of(other, other_transform, axis);
            let overlap = lhs.overlap(rhs)?;
            if overlap < min_overlap {
                min_overlap = overlap;
                smallest_axis = axis;
            }
        }

        let mtv = smallest_axis.normalize_or_zero() * min_overlap;
        let separation = self_transform.translation() - other_transform.translation();
        if mtv.dot(separation) < 0.0 {
            Some(-mtv)
        } else {
            Some(mtv)
        }
    }
}

fn world_normals(shape: &Shape, transform: Transform) -> impl Iterator<Item = Vec2> + '_ {
    shape.edges().map(move |(a, b)| edge_normal(a, b).rotated_deg(transform.rotation()))
}

pub trait PointInPolyQuery where Self: Copy {
    fn is_in_poly(self, poly_transform: Transform, poly: &Shape) -> bool;
}

impl PointInPolyQuery for Vec2 {
    /// Even-odd ray cast along +x. Points exactly on an edge may land on either side.
    fn is_in_poly(self, poly_transform: Transform, poly: &Shape) -> bool {
        let point = self;
        poly.edges()
            .map(|(a, b)| (poly_transform.apply(a), poly_transform.apply(b)))
            .filter(|&(a, b)| {
                (a.y > point.y) != (b.y > point.y) &&
                    point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
            })
            .count() % 2 != 0
    }
}
