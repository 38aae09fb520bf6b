use glam::{vec2, Vec2};
use rand::Rng;
use crate::{
    components::*,
    constants::*,
    subsystems::entity_spawning::random_drift,
    Game
};

/// Teleports an entity that left the screen to the opposite edge. Returns how
/// many of the four edge checks fired, so zero means it stayed in bounds.
pub fn return_to_screen(entity: &mut EntityData, screen: Vec2) -> u32 {
    let position = &mut entity.motion.position;
    let mut wraps = 0;
    if position.x > screen.x {
        position.x = 0.0;
        wraps += 1;
    }
    if position.x < 0.0 {
        position.x = screen.x;
        wraps += 1;
    }
    if position.y > screen.y {
        position.y = 0.0;
        wraps += 1;
    }
    if position.y < 0.0 {
        position.y = screen.y;
        wraps += 1;
    }
    wraps
}

impl EntityData {
    pub fn is_off_screen(&self, screen: Vec2) -> bool {
        let position = self.motion.position;
        position.x > screen.x || position.x < 0.0 || position.y > screen.y || position.y < 0.0
    }
}

impl Game {
    pub fn update_object_positions(&mut self, dt: f32) {
        let screen = self.screen();
        let max_drift = vec2(ASTEROID_MAX_DRIFT, ASTEROID_MAX_DRIFT);

        for asteroid in self.asteroids.iter_mut() {
            let entity = &mut asteroid.entity;
            entity.motion.position += entity.motion.linear * VELOCITY_SCALE * dt;
            entity.rotation += entity.motion.angular * dt;
            if return_to_screen(entity, screen) > 0 {
                // re-enter tumbling in a fresh direction
                entity.rotation += self.rng.gen_range(0..=360) as f32;
                entity.motion.linear = random_drift(&mut self.rng);
            }
            entity.motion.linear = entity.motion.linear.clamp(-max_drift, max_drift);
        }

        for projectile in self.projectiles.iter_mut() {
            let motion = &mut projectile.entity.motion;
            motion.position += motion.linear * VELOCITY_SCALE * dt;
        }
    }
}
