use sat_blit::rendering::{palette, ColorIndex};

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 450.0;

// entity velocities are stored per "step"; one step is 1/100 of a second
pub const VELOCITY_SCALE: f32 = 100.0;

pub const INITIAL_ASTEROID_COUNT: usize = 10;
pub const ASTEROID_POINT_COUNT: usize = 11;
pub const ASTEROID_RADIUS_BIG: f32 = 32.0;
pub const ASTEROID_RADIUS_MEDIUM: f32 = 16.0;
pub const ASTEROID_RADIUS_SMALL: f32 = 8.0;
pub const ASTEROID_START_HEALTH: i32 = 10;
pub const ASTEROID_MAX_DRIFT: f32 = 2.0;
pub const ASTEROID_DRIFT_RANGE: i32 = 2;

pub const SHIP_START_HEALTH: i32 = 100;
pub const SHIP_HIT_DAMAGE: i32 = 10;
pub const SHIP_IMMUNE_DURATION: f32 = 2.0;
pub const SHIP_SHOT_COOL_DOWN: f32 = 1.0 / 15.0;
pub const SHIP_ANGULAR_SPEED_DEGREES: f32 = 180.0;
pub const SHIP_THROTTLE: f32 = 100.0;
pub const SHIP_BRAKE_RATE: f32 = 2.0;

pub const PROJECTILE_DAMAGE: i32 = 10;
pub const PROJECTILE_RADIUS: f32 = 2.0;
pub const PROJECTILE_SPEED: f32 = 3.0;

pub const HITBOX_COLOR: ColorIndex = palette::BLUE;
pub const HITBOX_CONTACT_COLOR: ColorIndex = palette::RED;
pub const OUTLINE_COLOR: ColorIndex = palette::WHITE;
pub const TRAIL_COLOR: ColorIndex = palette::RED;
pub const BACKGROUND_COLOR: ColorIndex = palette::BLACK;

pub const SHIP_BODY_POINTS: &[(f32, f32)] = &[
    (-10.0, -2.0),
    (0.0, 2.0),
    (10.0, -2.0),
    (0.0, 18.0)
];

pub const SHIP_TRAIL_POINTS: &[(f32, f32)] = &[
    (-5.0, 2.0),
    (5.0, 2.0),
    (0.0, -6.0)
];

pub const SHIP_HIT_POINTS: &[(f32, f32)] = &[
    (-10.0, -2.0),
    (10.0, -2.0),
    (0.0, 18.0)
];
