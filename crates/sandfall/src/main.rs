//! Native entry point: runs the frame loop headless with a synthetic crank.
//!
//! `SANDFALL_CONFIG` names an optional JSON config file and
//! `SANDFALL_FRAMES` an optional frame limit; without it the loop runs
//! until the process is killed.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use sandfall::input::crank_delta;
    use sandfall::{FrameReport, Framebuffer, Host};

    /// Degrees the synthetic crank turns per frame.
    const CRANK_SPEED: f32 = 2.5;

    #[derive(Debug)]
    pub struct HeadlessHost {
        angle: f32,
        frames: u64,
        limit: Option<u64>,
        report_every: u64,
        turned: f32,
        last_angle: f32,
    }

    impl HeadlessHost {
        pub fn new(limit: Option<u64>, frame_rate: f32) -> Self {
            Self {
                angle: 0.0,
                frames: 0,
                limit,
                report_every: (frame_rate.round() as u64).max(1),
                turned: 0.0,
                last_angle: 0.0,
            }
        }
    }

    impl Host for HeadlessHost {
        fn crank_angle(&mut self) -> f32 {
            self.angle = (self.angle + CRANK_SPEED) % 360.0;
            self.angle
        }

        fn present(&mut self, frame: &Framebuffer, report: &FrameReport) {
            self.frames += 1;
            self.turned += crank_delta(self.last_angle, self.angle);
            self.last_angle = self.angle;
            if self.frames % self.report_every == 0 {
                let lit = frame.pack_mono().iter().map(|b| b.count_ones()).sum::<u32>();
                log::info!(
                    "frame {}: column {}, {} particles, {} lit pixels, crank turned {:.0} deg",
                    self.frames,
                    report.column,
                    report.particles,
                    lit,
                    self.turned
                );
                self.turned = 0.0;
            }
        }

        fn should_quit(&self) -> bool {
            self.limit.is_some_and(|limit| self.frames >= limit)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sandfall::{Game, SimConfig};

    env_logger::init();
    log::info!("Sandfall (native) starting...");

    let config = match std::env::var_os("SANDFALL_CONFIG") {
        Some(path) => SimConfig::load(path),
        None => Ok(SimConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let limit = match std::env::var("SANDFALL_FRAMES") {
        Ok(value) => match value.parse::<u64>() {
            Ok(limit) => Some(limit),
            Err(e) => {
                log::error!("SANDFALL_FRAMES must be a frame count: {e}");
                std::process::exit(1);
            }
        },
        Err(_) => None,
    };

    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let mut host = headless::HeadlessHost::new(limit, game.config().frame_rate);
    game.run(&mut host);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser drives frames through `sandfall::wasm::Sandbox`.
}
