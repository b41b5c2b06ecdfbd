//! Fixed-rate frame loop: read crank, spawn, tick, render, wait.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::{ConfigError, SimConfig};
use crate::input::{crank_delta, InputController};
use crate::render::{Framebuffer, Palette, Renderer};
use crate::spawner::Spawner;
use crate::world::World;

/// The platform side of the loop: crank in, pixels out.
pub trait Host {
    /// Current crank angle in degrees, nominally `0..360`.
    fn crank_angle(&mut self) -> f32;

    /// Show a finished frame.
    fn present(&mut self, frame: &Framebuffer, report: &FrameReport);

    /// Checked before every frame; the loop exits once this is true.
    fn should_quit(&self) -> bool {
        false
    }
}

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub column: usize,
    pub spawned: usize,
    pub particles: usize,
}

/// Sleeps until the next scheduled frame.
///
/// A late frame reschedules from now instead of running several frames
/// back to back.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    /// `frame_rate` must give a representable period; [`SimConfig::validate`]
    /// guarantees it.
    #[must_use]
    pub fn new(frame_rate: f32) -> Self {
        let period = Duration::from_secs_f32(1.0 / frame_rate);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }
}

/// Owns the world and everything that feeds it or reads from it.
#[derive(Debug)]
pub struct Game {
    config: SimConfig,
    world: World,
    spawner: Spawner,
    input: InputController,
    renderer: Renderer,
    frame: Framebuffer,
    frames: u64,
    started: bool,
    rest_angle: Option<f32>,
}

impl Game {
    /// # Errors
    /// Any value rejected by [`SimConfig::validate`].
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "{}x{} grid at {} fps, spawning {} every {} tick(s), layout {:?}, seed {}",
            config.width,
            config.height,
            config.frame_rate,
            config.spawn_kind,
            config.spawn_interval,
            config.layout,
            config.seed
        );
        let mut game = Self {
            world: World::new(config.width, config.height, config.seed, config.layout),
            spawner: Spawner::new(config.spawn_interval, config.brush, config.spawn_kind),
            input: InputController::new(config.width),
            renderer: Renderer::default(),
            frame: Framebuffer::new(config.width, config.height),
            frames: 0,
            started: !config.start_paused,
            rest_angle: None,
            config,
        };
        game.renderer.render(game.world.grid(), &mut game.frame);
        Ok(game)
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.renderer = Renderer::new(palette);
        self.renderer.render(self.world.grid(), &mut self.frame);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct access for seeding scenes.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.frame
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether the simulation is running. Only false while a paused start
    /// waits for the crank to move.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Empty the world and redraw.
    pub fn clear(&mut self) {
        self.world.clear();
        self.renderer.render(self.world.grid(), &mut self.frame);
    }

    /// Run one frame: crank to column, spawn, one tick, full redraw.
    pub fn frame(&mut self, angle: f32) -> FrameReport {
        let column = self.input.spawn_column(angle);
        self.frames += 1;
        if !self.started && !self.crank_moved(angle) {
            return FrameReport {
                column,
                spawned: 0,
                particles: self.world.grid().particle_count(),
            };
        }
        let spawned = self.spawner.spawn(&mut self.world, column);
        self.world.tick();
        self.renderer.render(self.world.grid(), &mut self.frame);
        FrameReport {
            column,
            spawned,
            particles: self.world.grid().particle_count(),
        }
    }

    /// The first reading is the rest position; any turn away from it starts
    /// the simulation.
    fn crank_moved(&mut self, angle: f32) -> bool {
        let rest = *self.rest_angle.get_or_insert(angle);
        if crank_delta(rest, angle).abs() > f32::EPSILON {
            info!("Crank moved, simulation started");
            self.started = true;
        }
        self.started
    }

    /// Drive frames at the configured rate until the host asks to stop.
    pub fn run<H: Host>(&mut self, host: &mut H) {
        let mut clock = FrameClock::new(self.config.frame_rate);
        info!("Frame loop started ({:?} per frame)", clock.period());
        while !host.should_quit() {
            let angle = host.crank_angle();
            let report = self.frame(angle);
            host.present(&self.frame, &report);
            clock.wait();
        }
        debug!("world after {} ticks", self.world.ticks());
        info!("Frame loop stopped after {} frames", self.frames);
    }
}
