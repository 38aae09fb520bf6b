use sat_blit::math_utils::collision_queries::PointInPolyQuery;
use crate::{input::InputState, Game};

impl Game {
    /// While the left button is down, every asteroid whose outline contains the
    /// cursor is centered on it. The jump is added to its velocity, so letting
    /// go flings it.
    pub fn update_mouse_drag(&mut self, input: &InputState) {
        if !input.mouse_left_down {
            return;
        }
        let cursor = input.mouse_pos;
        for asteroid in self.asteroids.iter_mut() {
            let entity = &mut asteroid.entity;
            if !cursor.is_in_poly(entity.world_transform(), &asteroid.outline) {
                continue;
            }
            let old_position = entity.motion.position;
            entity.motion.position = cursor - entity.hit_shape.center;
            entity.motion.linear += entity.motion.position - old_position;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{vec2, Vec2};
    use crate::{components::*, subsystems::test_support::*};
    use super::*;

    #[test]
    fn grabbed_asteroid_snaps_to_cursor_and_gains_velocity() {
        let mut game = empty_game();
        let asteroid = asteroid_at(&mut game, AsteroidSize::Big, vec2(200.0, 200.0));
        let grab_at = asteroid.entity.world_transform().translation() + vec2(3.0, -2.0);
        let center = asteroid.entity.hit_shape.center;
        game.asteroids.push(asteroid);

        game.update_mouse_drag(&InputState::new().drag_at(grab_at));

        let entity = &game.asteroids[0].entity;
        assert_eq!(entity.position(), grab_at - center);
        assert!((entity.motion.linear - vec2(3.0, -2.0)).length() < 1e-4);
    }

    #[test]
    fn cursor_outside_outline_leaves_asteroid_alone() {
        let mut game = empty_game();
        let asteroid = asteroid_at(&mut game, AsteroidSize::Small, vec2(200.0, 200.0));
        game.asteroids.push(asteroid);

        game.update_mouse_drag(&InputState::new().drag_at(vec2(600.0, 50.0)));

        assert_eq!(game.asteroids[0].entity.position(), vec2(200.0, 200.0));
        assert_eq!(game.asteroids[0].entity.motion.linear, Vec2::ZERO);
    }

    #[test]
    fn released_button_does_nothing() {
        let mut game = empty_game();
        let asteroid = asteroid_at(&mut game, AsteroidSize::Big, vec2(200.0, 200.0));
        let mut input = InputState::new().drag_at(asteroid.entity.world_transform().translation());
        input.mouse_left_down = false;
        game.asteroids.push(asteroid);

        game.update_mouse_drag(&input);

        assert_eq!(game.asteroids[0].entity.position(), vec2(200.0, 200.0));
    }
}
