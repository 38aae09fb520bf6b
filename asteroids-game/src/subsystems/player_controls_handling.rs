use glam::{vec2, Vec2};
use sat_blit::math_utils::Rotate2;
use crate::{
    constants::*,
    input::{InputState, KeyCode},
    subsystems::object_positioning::return_to_screen,
    Game
};

impl Game {
    pub fn update_player_controls(&mut self, input: &InputState, dt: f32) {
        let screen = self.screen();
        let ship = &mut self.ship;

        if input.is_key_down(KeyCode::A) {
            ship.entity.rotation -= SHIP_ANGULAR_SPEED_DEGREES * dt;
        }
        if input.is_key_down(KeyCode::D) {
            ship.entity.rotation += SHIP_ANGULAR_SPEED_DEGREES * dt;
        }

        ship.state.draw_trail = input.is_key_down(KeyCode::W);
        if ship.state.draw_trail {
            let thrust = vec2(0.0, 1.0).rotated_deg(ship.entity.rotation) * SHIP_THROTTLE * dt;
            ship.entity.motion.linear += thrust;
        }
        if input.is_key_down(KeyCode::S) {
            ship.entity.motion.linear = ship.entity.motion.linear.lerp(Vec2::ZERO, SHIP_BRAKE_RATE * dt);
        }

        // ship velocity is in pixels per second, unlike asteroids and projectiles
        ship.entity.motion.position += ship.entity.motion.linear * dt;
        return_to_screen(&mut ship.entity, screen);
    }
}
