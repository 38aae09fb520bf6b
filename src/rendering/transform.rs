use glam::Vec2;
use crate::math_utils::Rotate2;

/// Placement of a local-space polygon in the world: rotate (degrees) about the
/// local origin, then translate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    translation: Vec2,
    rotation: f32
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_identity()
    }
}

impl Transform {
    pub fn from_identity() -> Transform {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0
        }
    }
    pub fn from_translation(translation: Vec2) -> Self {
        Self {
            translation,
            rotation: 0.0
        }
    }
    pub fn from_angle_and_translation(angle: f32, translation: Vec2) -> Self {
        Self {
            translation,
            rotation: angle
        }
    }
    pub fn with_rotation(self, angle: f32) -> Self {
        Self {
            rotation: angle,
            ..self
        }
    }
    pub fn with_translation(self, translation: Vec2) -> Self {
        Self {
            translation,
            ..self
        }
    }

    pub fn translation(&self) -> Vec2 { self.translation }

    pub fn rotation(&self) -> f32 { self.rotation }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    pub fn set_translation(&mut self, translation: Vec2) {
        self.translation = translation;
    }

    pub fn apply(&self, local: Vec2) -> Vec2 {
        local.rotated_deg(self.rotation) + self.translation
    }
}
