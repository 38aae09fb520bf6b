use sat_blit::{math_utils::impulse::resolve_collision, utility::StopWatch};
use crate::{
    constants::*,
    Game
};

impl Game {
    pub fn update_collisions(&mut self, now: f64) {
        let _stop_watch = StopWatch::named("collisions");
        self.update_ship_collisions(now);
        self.update_projectile_collisions();
        self.update_asteroid_collisions();
    }

    /// Tints the ship and every asteroid touching it. Contact only costs health
    /// when `ship_takes_damage` is on.
    pub fn update_ship_collisions(&mut self, now: f64) {
        let mut touching = false;
        for asteroid in self.asteroids.iter_mut() {
            if self.ship.entity.collides_with(&asteroid.entity) {
                asteroid.entity.hit_shape.tint = HITBOX_CONTACT_COLOR;
                touching = true;
            } else {
                asteroid.entity.hit_shape.tint = HITBOX_COLOR;
            }
        }

        if !touching {
            self.ship.entity.hit_shape.tint = HITBOX_COLOR;
            return;
        }
        self.ship.entity.hit_shape.tint = HITBOX_CONTACT_COLOR;
        self.stats.ship_contacts += 1;
        if self.config.ship_takes_damage && self.ship.on_hit(now, self.config.ship_hit_damage) {
            tracing::debug!(health = self.ship.entity.health, "ship hit by asteroid");
        }
    }

    pub fn prune_escaped_projectiles(&mut self) {
        let screen = self.screen();
        let mut ix = 0;
        while ix < self.projectiles.len() {
            if self.projectiles[ix].entity.is_off_screen(screen) {
                // the last projectile now sits at `ix`, look at it again
                self.projectiles.swap_discard(ix);
            } else {
                ix += 1;
            }
        }
    }

    /// Tests every asteroid against every live projectile. A projectile is
    /// spent by its first hit; an asteroid stops being tested once its health
    /// runs out. Removals and fragment spawns happen after the scan.
    pub fn update_projectile_collisions(&mut self) {
        self.prune_escaped_projectiles();

        let mut bump_allocator = std::mem::take(&mut self.bump_allocator);
        {
            let mut spent = bumpalo::vec![in &bump_allocator; false; self.projectiles.len()];
            let mut destroyed = bumpalo::collections::Vec::new_in(&bump_allocator);

            for (asteroid_ix, asteroid) in self.asteroids.iter_mut().enumerate() {
                for (projectile_ix, projectile) in self.projectiles.iter().enumerate() {
                    if spent[projectile_ix] || !projectile.entity.collides_with(&asteroid.entity) {
                        continue;
                    }
                    spent[projectile_ix] = true;
                    asteroid.entity.health -= projectile.damage;
                    self.stats.projectile_hits += 1;
                    if asteroid.entity.health <= 0 {
                        destroyed.push(asteroid_ix);
                        break;
                    }
                }
            }

            for projectile_ix in (0..spent.len()).rev() {
                if spent[projectile_ix] {
                    self.projectiles.swap_discard(projectile_ix);
                }
            }

            // descending, so a swap never drags a pending index out of place
            for &asteroid_ix in destroyed.iter().rev() {
                let (size, position) = {
                    let asteroid = &self.asteroids[asteroid_ix];
                    (asteroid.size, asteroid.entity.position())
                };
                let fragments = self.make_fragments(size, position);
                tracing::debug!(?size, ?position, fragments = fragments.len(), "asteroid destroyed");
                if !fragments.is_empty() {
                    self.stats.splits += 1;
                }
                self.stats.asteroids_destroyed += 1;
                self.asteroids.swap_discard(asteroid_ix);
                self.asteroids.extend(fragments);
            }
        }
        bump_allocator.reset();
        self.bump_allocator = bump_allocator;
    }

    /// Every ordered pair of distinct asteroids is tested, so a touching pair
    /// is pushed apart from both sides in one tick.
    pub fn update_asteroid_collisions(&mut self) {
        let count = self.asteroids.len();
        for i in 0..count {
            for j in 0..count {
                if i == j {
                    continue;
                }
                let (a, b) = self.asteroids.pair_mut(i, j);
                if let Some(mtv) = a.entity.mtv_against(&b.entity) {
                    resolve_collision(a, b, mtv);
                    self.stats.asteroid_contacts += 1;
                }
            }
        }
    }
}
