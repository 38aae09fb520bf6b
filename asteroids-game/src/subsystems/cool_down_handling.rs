use crate::{components::*, Game};

impl Ship {
    pub fn can_fire(&self, now: f64) -> bool {
        now - self.state.last_time_shot > self.state.shot_cool_down as f64
    }

    /// Applies contact damage unless the ship is still immune from an earlier
    /// hit. Returns whether damage was taken.
    pub fn on_hit(&mut self, now: f64, damage: i32) -> bool {
        if self.state.is_immune {
            return false;
        }
        self.state.is_immune = true;
        self.state.last_hit_time = now;
        self.entity.health -= damage;
        if self.entity.health <= 0 {
            tracing::info!(health = self.entity.health, "ship destroyed");
        }
        true
    }

    pub fn update_immunity(&mut self, now: f64) {
        if self.state.is_immune && now - self.state.last_hit_time > self.state.immune_duration as f64 {
            self.state.is_immune = false;
        }
    }
}

impl Game {
    pub fn update_immunity(&mut self, now: f64) {
        self.ship.update_immunity(now);
    }
}
