use glam::Vec2;
use crate::rendering::transform::Transform;

/// Convex polygon outline in local (body) space.
///
/// Edges join consecutive points and wrap from the last point back to the first.
/// Every query in [`crate::math_utils::collision_queries`] expects at least three
/// points; fewer is a caller bug and the results are meaningless.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    points: Vec<Vec2>
}

impl Shape {
    pub fn new(points: Vec<Vec2>) -> Self {
        debug_assert!(points.len() >= 3, "a shape needs at least three points, got {}", points.len());
        Self { points }
    }

    /// Axis aligned square centered on the local origin.
    pub fn square(half_extent: f32) -> Self {
        Self::new(vec![
            Vec2::new(-half_extent, -half_extent),
            Vec2::new(half_extent, -half_extent),
            Vec2::new(half_extent, half_extent),
            Vec2::new(-half_extent, half_extent)
        ])
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Local-space edges, `(points[i], points[i + 1])` with wraparound.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let count = self.points.len();
        (0..count).map(move |ix| (self.points[ix], self.points[(ix + 1) % count]))
    }

    pub fn world_points(&self, transform: Transform) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().map(move |&p| transform.apply(p))
    }

    /// Smallest and largest local coordinates, as `(min, max)`.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.points.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(min, max), &p| (min.min(p), max.max(p))
        )
    }
}

impl From<&[(f32, f32)]> for Shape {
    fn from(points: &[(f32, f32)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| Vec2::new(x, y)).collect())
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;
    use super::*;

    #[test]
    fn edges_wrap_around() {
        let triangle = Shape::from(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)][..]);
        let edges: Vec<_> = triangle.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (vec2(0.0, 3.0), vec2(0.0, 0.0)));
    }

    #[test]
    fn bounds_cover_all_points() {
        let shape = Shape::from(&[(-2.0, 1.0), (5.0, -3.0), (1.0, 4.0)][..]);
        assert_eq!(shape.bounds(), (vec2(-2.0, -3.0), vec2(5.0, 4.0)));
    }

    #[test]
    fn world_points_follow_transform() {
        let square = Shape::square(1.0);
        let moved: Vec<_> = square.world_points(Transform::from_translation(vec2(10.0, 0.0))).collect();
        assert_eq!(moved[0], vec2(9.0, -1.0));
        assert_eq!(moved[2], vec2(11.0, 1.0));
    }
}
