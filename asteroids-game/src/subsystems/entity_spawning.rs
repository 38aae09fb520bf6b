use std::f32::consts::TAU;
use glam::{vec2, Vec2};
use rand::Rng;
use sat_blit::math_utils::{shape::Shape, Rotate2};
use crate::{
    components::*,
    config::GameConfig,
    constants::*,
    input::{InputState, KeyCode},
    Game
};

/// Random integer drift in `[-2, 2]` per axis; never the zero vector.
pub fn random_drift(rng: &mut impl Rng) -> Vec2 {
    let drift = vec2(
        rng.gen_range(-ASTEROID_DRIFT_RANGE..=ASTEROID_DRIFT_RANGE) as f32,
        rng.gen_range(-ASTEROID_DRIFT_RANGE..=ASTEROID_DRIFT_RANGE) as f32
    );
    if drift == Vec2::ZERO {
        vec2(1.0, 1.0)
    } else {
        drift
    }
}

impl Asteroid {
    pub fn new(size: AsteroidSize, position: Vec2, linear: Vec2, health: i32, rng: &mut impl Rng) -> Self {
        let radius = size.radius();
        let outline = Shape::new(
            (0..ASTEROID_POINT_COUNT)
                .map(|ix| {
                    let angle = ix as f32 / ASTEROID_POINT_COUNT as f32 * TAU;
                    let jagged_radius = radius * 0.5 + rng.gen_range(0..=50) as f32 / 100.0 * radius;
                    vec2(angle.cos(), angle.sin()) * jagged_radius
                })
                .collect()
        );

        let (min, max) = outline.bounds();
        let hit_shape = HitShape {
            shape: Shape::new(vec![min, vec2(max.x, min.y), max, vec2(min.x, max.y)]),
            center: (max - min) / 2.0,
            tint: HITBOX_COLOR
        };

        let mut entity = EntityData::new(EntityKind::Asteroid, position, linear, hit_shape);
        entity.health = health;
        Self { size, outline, entity }
    }
}

impl Ship {
    pub fn new(config: &GameConfig, position: Vec2) -> Self {
        let hit_shape = HitShape {
            shape: Shape::from(SHIP_HIT_POINTS),
            center: Vec2::ZERO,
            tint: HITBOX_COLOR
        };
        let mut entity = EntityData::new(EntityKind::Ship, position, Vec2::ZERO, hit_shape);
        entity.health = config.ship_start_health;
        Self {
            body: Shape::from(SHIP_BODY_POINTS),
            trail: Shape::from(SHIP_TRAIL_POINTS),
            entity,
            state: ShipState {
                is_immune: false,
                last_hit_time: 0.0,
                immune_duration: config.ship_immune_duration,
                draw_trail: false,
                last_time_shot: 0.0,
                shot_cool_down: config.ship_shot_cool_down
            }
        }
    }
}

impl Projectile {
    pub fn new(damage: i32, radius: f32, position: Vec2, linear: Vec2) -> Self {
        let hit_shape = HitShape {
            shape: Shape::square(radius),
            center: Vec2::ZERO,
            tint: OUTLINE_COLOR
        };
        Self {
            damage,
            radius,
            entity: EntityData::new(EntityKind::Projectile, position, linear, hit_shape)
        }
    }
}

impl Game {
    pub fn spawn_asteroid(&mut self, size: AsteroidSize, position: Vec2, linear: Vec2) {
        let asteroid = Asteroid::new(size, position, linear, self.config.asteroid_start_health, &mut self.rng);
        self.asteroids.push(asteroid);
    }

    pub fn spawn_initial_asteroids(&mut self) {
        let screen = self.screen();
        for _ in 0..self.config.initial_asteroids {
            let position = vec2(
                self.rng.gen_range(0..=screen.x as i32) as f32,
                self.rng.gen_range(0..=screen.y as i32) as f32
            );
            self.spawn_asteroid(AsteroidSize::Big, position, vec2(1.0, 1.0));
        }
        if self.config.head_on_pair {
            self.spawn_asteroid(AsteroidSize::Big, vec2(screen.x, screen.y / 2.0), vec2(-1.0, 0.0));
            self.spawn_asteroid(AsteroidSize::Big, vec2(0.0, screen.y / 2.0), vec2(1.0, 0.0));
        }
    }

    /// Children an asteroid of `size` breaks into when destroyed at `position`.
    pub fn make_fragments(&mut self, size: AsteroidSize, position: Vec2) -> Vec<Asteroid> {
        let (child_size, count) = match size.fragments() {
            Some(fragments) => fragments,
            None => return Vec::new()
        };
        let health = self.config.asteroid_start_health;
        (0..count)
            .map(|_| {
                let drift = random_drift(&mut self.rng);
                Asteroid::new(child_size, position, drift, health, &mut self.rng)
            })
            .collect()
    }

    pub fn update_player_fire(&mut self, input: &InputState, now: f64) {
        if !input.is_key_pressed(KeyCode::Space) || !self.ship.can_fire(now) {
            return;
        }
        self.ship.state.last_time_shot = now;

        let velocity = vec2(0.0, self.config.projectile_speed).rotated_deg(self.ship.entity.rotation);
        let projectile = Projectile::new(
            self.config.projectile_damage,
            self.config.projectile_radius,
            self.ship.entity.position(),
            velocity
        );
        self.projectiles.push(projectile);
        self.stats.projectiles_fired += 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use crate::subsystems::test_support::*;
    use super::*;

    #[test]
    fn asteroid_outline_is_jagged_circle() {
        let mut rng = StdRng::seed_from_u64(1);
        for &size in [AsteroidSize::Big, AsteroidSize::Medium, AsteroidSize::Small].iter() {
            let asteroid = Asteroid::new(size, Vec2::ZERO, Vec2::ZERO, 10, &mut rng);
            let radius = size.radius();
            assert_eq!(asteroid.outline.len(), ASTEROID_POINT_COUNT);
            for p in asteroid.outline.points() {
                let distance = p.length();
                assert!(distance >= radius * 0.5 - 1e-3 && distance <= radius + 1e-3);
            }
        }
    }

    #[test]
    fn asteroid_hit_shape_is_outline_bounding_box() {
        let mut rng = StdRng::seed_from_u64(2);
        let asteroid = Asteroid::new(AsteroidSize::Big, vec2(100.0, 100.0), Vec2::ZERO, 10, &mut rng);
        let (min, max) = asteroid.outline.bounds();
        let hit = &asteroid.entity.hit_shape;
        assert_eq!(hit.shape.points(), &[min, vec2(max.x, min.y), max, vec2(min.x, max.y)]);
        assert_eq!(hit.center, (max - min) / 2.0);
        assert_eq!(asteroid.entity.kind, EntityKind::Asteroid);
        assert_eq!(asteroid.entity.health, 10);
    }

    #[test]
    fn drift_is_bounded_and_never_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let drift = random_drift(&mut rng);
            assert_ne!(drift, Vec2::ZERO);
            assert!(drift.x.abs() <= 2.0 && drift.y.abs() <= 2.0);
        }
    }

    #[test]
    fn fragments_follow_size_tiers() {
        let mut game = empty_game();
        let position = vec2(50.0, 60.0);

        let from_big = game.make_fragments(AsteroidSize::Big, position);
        assert_eq!(from_big.len(), 4);
        assert!(from_big.iter().all(|it| it.size == AsteroidSize::Medium));
        assert!(from_big.iter().all(|it| it.entity.position() == position));

        let from_medium = game.make_fragments(AsteroidSize::Medium, position);
        assert_eq!(from_medium.len(), 2);
        assert!(from_medium.iter().all(|it| it.size == AsteroidSize::Small));

        assert!(game.make_fragments(AsteroidSize::Small, position).is_empty());
    }

    #[test]
    fn new_game_spawns_configured_population() {
        let mut game = Game::new(GameConfig::default(), StdRng::seed_from_u64(4));
        game.start_new_game();
        assert_eq!(game.asteroids.len(), INITIAL_ASTEROID_COUNT + 2);
        assert!(game.asteroids.iter().all(|it| it.size == AsteroidSize::Big));
        assert!(game.projectiles.is_empty());
        assert_eq!(game.ship.entity.health, SHIP_START_HEALTH);
    }

    #[test]
    fn firing_respects_cool_down() {
        let mut game = empty_game();
        let fire = InputState::new().press(KeyCode::Space);

        game.update_player_fire(&fire, 1.0);
        game.update_player_fire(&fire, 1.01);
        assert_eq!(game.projectiles.len(), 1);

        game.update_player_fire(&fire, 1.0 + SHIP_SHOT_COOL_DOWN as f64 + 0.01);
        assert_eq!(game.projectiles.len(), 2);

        game.update_player_fire(&InputState::new().hold(KeyCode::Space), 5.0);
        assert_eq!(game.projectiles.len(), 2);
        assert_eq!(game.stats.projectiles_fired, 2);
    }

    #[test]
    fn projectile_leaves_along_ship_heading() {
        let mut game = empty_game();
        game.ship.entity.rotation = 90.0;
        game.update_player_fire(&InputState::new().press(KeyCode::Space), 1.0);
        let projectile = &game.projectiles[0];
        assert!((projectile.entity.motion.linear - vec2(-PROJECTILE_SPEED, 0.0)).length() < 1e-5);
        assert_eq!(projectile.entity.position(), game.ship.entity.position());
        assert_eq!(projectile.damage, PROJECTILE_DAMAGE);
    }
}
