use sat_blit::rendering::Canvas;
use crate::{components::*, constants::*, Game};

const HUD_LINE_HEIGHT: i32 = 20;

fn draw_hit_shape(canvas: &mut impl Canvas, entity: &EntityData) {
    canvas.draw_polygon(
        entity.hit_shape.shape.points(),
        entity.world_transform(),
        entity.hit_shape.tint
    );
}

impl Game {
    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.clear(BACKGROUND_COLOR);

        for asteroid in self.asteroids.iter() {
            draw_hit_shape(canvas, &asteroid.entity);
            canvas.draw_polygon(
                asteroid.outline.points(),
                asteroid.entity.world_transform(),
                OUTLINE_COLOR
            );
        }

        for projectile in self.projectiles.iter() {
            draw_hit_shape(canvas, &projectile.entity);
        }

        { // ship
            let transform = self.ship.entity.world_transform();
            if self.ship.state.draw_trail {
                canvas.draw_polygon(self.ship.trail.points(), transform, TRAIL_COLOR);
            }
            canvas.draw_polygon(self.ship.body.points(), transform, OUTLINE_COLOR);
            draw_hit_shape(canvas, &self.ship.entity);
        }

        for (ix, line) in self.hud_lines().iter().enumerate() {
            canvas.draw_text(0, HUD_LINE_HEIGHT * (ix as i32 + 1), line, OUTLINE_COLOR);
        }
    }

    pub fn hud_lines(&self) -> [String; 5] {
        let entity = &self.ship.entity;
        [
            format!("Velocity: {:.6},{:.6}", entity.motion.linear.x, entity.motion.linear.y),
            format!("Position: {:.6},{:.6}", entity.motion.position.x, entity.motion.position.y),
            format!("Rotation: {:.6}", entity.rotation),
            format!("Health: {}", entity.health),
            format!("Asteroids: {}", self.asteroids.len())
        ]
    }
}
