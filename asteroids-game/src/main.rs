use std::{env, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use glam::{vec2, Vec2};
use rand::{rngs::StdRng, SeedableRng};
use sat_blit::{collections::TrackedVec, rendering::Framebuffer};
use crate::components::{Asteroid, Projectile, Ship};
use crate::config::GameConfig;
use crate::input::{InputState, KeyCode};

mod components;
mod config;
mod constants;
mod input;
mod subsystems;

/// Counters for things that happened during a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameStats {
    pub projectiles_fired: u32,
    pub projectile_hits: u32,
    pub splits: u32,
    pub asteroids_destroyed: u32,
    pub asteroid_contacts: u32,
    pub ship_contacts: u32
}

pub struct Game {
    pub config: GameConfig,
    pub rng: StdRng,
    pub bump_allocator: bumpalo::Bump,
    pub ship: Ship,
    pub asteroids: TrackedVec<Asteroid>,
    pub projectiles: TrackedVec<Projectile>,
    pub stats: GameStats,
    pub simulating: bool
}

impl Game {
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        let ship = Ship::new(&config, Self::ship_spawn_point(&config));
        Self {
            config,
            rng,
            bump_allocator: bumpalo::Bump::new(),
            ship,
            asteroids: TrackedVec::new()
                .with_discard_hook(|asteroid: Asteroid| {
                    tracing::trace!(size = ?asteroid.size, "asteroid released");
                }),
            projectiles: TrackedVec::new()
                .with_discard_hook(|projectile: Projectile| {
                    tracing::trace!(position = ?projectile.entity.position(), "projectile released");
                }),
            stats: GameStats::default(),
            simulating: true
        }
    }

    pub fn screen(&self) -> Vec2 {
        vec2(self.config.screen_width, self.config.screen_height)
    }

    fn ship_spawn_point(config: &GameConfig) -> Vec2 {
        vec2(config.screen_width * 0.625, config.screen_height * 0.5)
    }

    pub fn start_new_game(&mut self) {
        self.asteroids.clear();
        self.projectiles.clear();
        self.stats = GameStats::default();
        self.ship = Ship::new(&self.config, Self::ship_spawn_point(&self.config));
        self.spawn_initial_asteroids();
        tracing::info!(asteroids = self.asteroids.len(), "new game started");
    }

    /// One simulation tick. `now` is the monotonic clock in seconds, `dt` the
    /// frame delta.
    pub fn update(&mut self, input: &InputState, now: f64, dt: f32) {
        if input.is_key_pressed(KeyCode::P) {
            self.simulating = !self.simulating;
            tracing::info!(simulating = self.simulating, "simulation toggled");
        }

        self.update_player_fire(input, now);
        self.update_collisions(now);
        self.update_mouse_drag(input);
        if self.simulating {
            self.update_object_positions(dt);
            self.update_player_controls(input, dt);
            self.update_immunity(now);
        }
    }
}

#[derive(Debug)]
struct Cli {
    config_path: Option<PathBuf>,
    ticks: Option<u32>,
    seed: Option<u64>,
    output_path: Option<PathBuf>
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);

        let mut config_path = None;
        let mut ticks = None;
        let mut seed = None;
        let mut output_path = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--config requires a file path"))?;
                    config_path = Some(PathBuf::from(value));
                }
                "--ticks" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--ticks requires a number"))?;
                    ticks = Some(
                        value
                            .parse::<u32>()
                            .with_context(|| format!("invalid --ticks value: {value}"))?
                    );
                }
                "--seed" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--seed requires a number"))?;
                    seed = Some(
                        value
                            .parse::<u64>()
                            .with_context(|| format!("invalid --seed value: {value}"))?
                    );
                }
                "--out" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--out requires a file path"))?;
                    output_path = Some(PathBuf::from(value));
                }
                "-h" | "--help" => {
                    println!(
                        "Usage: asteroids-game [--config <file.toml>] [--ticks <n>] [--seed <n>] [--out <frame.png>]"
                    );
                    std::process::exit(0);
                }
                other => return Err(anyhow!("unknown argument: {other}. Use --help for usage."))
            }
        }

        Ok(Self { config_path, ticks, seed, output_path })
    }
}

/// Input tape for headless runs: circle while thrusting in bursts, shoot
/// steadily, pause once and resume.
fn autopilot_input(tick: u32) -> InputState {
    let mut input = InputState::new().hold(KeyCode::D);
    if tick % 120 < 40 {
        input = input.hold(KeyCode::W);
    } else if tick % 120 > 100 {
        input = input.hold(KeyCode::S);
    }
    if tick % 6 == 0 {
        input = input.press(KeyCode::Space);
    }
    if tick == 300 || tick == 330 {
        input = input.press(KeyCode::P);
    }
    input
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse()?;
    let mut config = match &cli.config_path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => GameConfig::default()
    };
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(output_path) = cli.output_path {
        config.output_path = output_path;
    }
    config.validate()?;

    let (ticks, dt) = (config.ticks, config.frame_dt);
    let mut game = Game::new(config.clone(), StdRng::seed_from_u64(config.seed));
    game.start_new_game();

    let mut now = 0.0f64;
    for tick in 0..ticks {
        now += dt as f64;
        game.update(&autopilot_input(tick), now, dt);
    }

    let (frame_width, frame_height) = config.frame_size()?;
    let mut frame = Framebuffer::new(frame_width, frame_height);
    game.render(&mut frame);
    for line in frame.text_lines() {
        tracing::info!("{}", line.text);
    }
    tracing::info!(stats = ?game.stats, "run finished");

    frame
        .save_png(&config.output_path)
        .with_context(|| format!("failed to write frame: {}", config.output_path.display()))?;

    println!("Simulated {ticks} ticks.");
    println!("  Asteroids left: {}", game.asteroids.len());
    println!("  Shots fired:    {}", game.stats.projectiles_fired);
    println!("  Splits:         {}", game.stats.splits);
    println!("  Frame:          {}", config.output_path.display());
    Ok(())
}
