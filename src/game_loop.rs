//! Frame-driven game loop
//!
//! The host calls `on_frame` once per presentation frame and only asks for
//! another frame when told to. The loop itself owns no timer.
//!
//! ```text
//!            step() not over
//!           ┌────────────┐
//!           ▼            │
//!       ┌─────────┐ ─────┘       ┌──────────┐
//!  ───▶ │ Running │ ───────────▶ │ GameOver │
//!       └─────────┘  step() over └──────────┘
//!            ▲                        │
//!            └────── restart() ───────┘
//! ```

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::platform::InputSource;
use crate::renderer::{Surface, compose};
use crate::sim::{GameState, step};

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// One physics/collision/render pass per frame
    Running,
    /// Halted until a restart
    GameOver,
}

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Schedule the next frame
    Continue,
    /// Do not schedule another frame
    Halt,
}

/// Single-session game driver
pub struct GameLoop<I> {
    config: GameConfig,
    input: I,
    rng: Pcg32,
    state: GameState,
    phase: LoopPhase,
    /// Frames that ran a physics pass, across all sessions
    frames: u64,
    /// Sessions started, including the first
    sessions: u32,
}

impl<I: InputSource> GameLoop<I> {
    /// Validate the config and start the first session
    pub fn new(config: GameConfig, input: I, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&config, &mut rng);
        log::info!("Session 1 started (seed {})", seed);

        Ok(Self {
            config,
            input,
            rng,
            state,
            phase: LoopPhase::Running,
            frames: 0,
            sessions: 1,
        })
    }

    /// Run one frame: physics, collision, render
    ///
    /// A surface error skips the drawing for this frame only. Physics has
    /// already advanced and the loop keeps running.
    pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameRequest {
        if self.phase == LoopPhase::GameOver {
            return FrameRequest::Halt;
        }

        let sample = self.input.latest_sample();
        self.state = step(&self.state, sample, &self.config, &mut self.rng);
        self.frames += 1;

        let frame = compose(&self.state, sample, &self.config);
        if let Err(e) = surface.present(&frame) {
            log::warn!("Skipping frame {}: {}", self.frames, e);
        }

        if self.state.is_over {
            self.phase = LoopPhase::GameOver;
            log::info!(
                "Game over: session {} scored {}",
                self.sessions,
                self.state.score
            );
            FrameRequest::Halt
        } else {
            FrameRequest::Continue
        }
    }

    /// Replace the session with a fresh one and force the loop into Running
    ///
    /// Returns `true` when the loop was halted and the host must schedule a
    /// frame. Returns `false` when a frame is already pending.
    pub fn restart(&mut self) -> bool {
        let was_halted = self.phase == LoopPhase::GameOver;

        self.state = GameState::new(&self.config, &mut self.rng);
        self.phase = LoopPhase::Running;
        self.sessions += 1;
        log::info!("Session {} started", self.sessions);

        was_halted
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn sessions(&self) -> u32 {
        self.sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Mailbox, NoInput};
    use crate::renderer::RecordingSurface;
    use glam::Vec2;

    /// Drive frames until the loop halts or `max` frames ran
    fn run<I: InputSource>(game: &mut GameLoop<I>, surface: &mut RecordingSurface, max: u32) -> u32 {
        for n in 1..=max {
            if game.on_frame(surface) == FrameRequest::Halt {
                return n;
            }
        }
        max
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let config = GameConfig {
            bird_radius: -5.0,
            ..Default::default()
        };
        assert!(GameLoop::new(config, NoInput, 1).is_err());
    }

    #[test]
    fn test_first_frame_renders_and_continues() {
        let mut game = GameLoop::new(GameConfig::default(), NoInput, 1).unwrap();
        let mut surface = RecordingSurface::new();

        assert_eq!(game.on_frame(&mut surface), FrameRequest::Continue);
        assert_eq!(game.phase(), LoopPhase::Running);
        assert_eq!(surface.presented, 1);
        assert_eq!(game.state().obstacle_x, 635.0);
    }

    #[test]
    fn test_collision_halts_with_final_overlay() {
        let mailbox = Mailbox::new();
        mailbox.publish(Vec2::new(320.0, 0.0));
        let mut game = GameLoop::new(GameConfig::default(), &mailbox, 2).unwrap();
        let mut surface = RecordingSurface::new();

        assert_eq!(game.on_frame(&mut surface), FrameRequest::Halt);
        assert_eq!(game.phase(), LoopPhase::GameOver);
        assert_eq!(surface.presented, 1);
        let last = surface.last.as_ref().unwrap();
        assert!(last.texts().any(|t| t == "Game Over"));
    }

    #[test]
    fn test_game_over_freezes_everything() {
        let mailbox = Mailbox::new();
        mailbox.publish(Vec2::new(320.0, 0.0));
        let mut game = GameLoop::new(GameConfig::default(), &mailbox, 2).unwrap();
        let mut surface = RecordingSurface::new();
        game.on_frame(&mut surface);

        let frozen = *game.state();
        mailbox.publish(Vec2::new(320.0, 240.0));
        for _ in 0..10 {
            assert_eq!(game.on_frame(&mut surface), FrameRequest::Halt);
        }
        assert_eq!(*game.state(), frozen);
        assert_eq!(surface.presented, 1);
        assert_eq!(game.frames(), 1);
    }

    #[test]
    fn test_restart_from_game_over() {
        let config = GameConfig::default();
        let mailbox = Mailbox::new();
        mailbox.publish(Vec2::new(320.0, 480.0));
        let mut game = GameLoop::new(config.clone(), &mailbox, 3).unwrap();
        let mut surface = RecordingSurface::new();
        game.on_frame(&mut surface);
        assert_eq!(game.phase(), LoopPhase::GameOver);

        assert!(game.restart());
        assert_eq!(game.phase(), LoopPhase::Running);
        let s = game.state();
        assert_eq!(s.score, 0);
        assert!(!s.is_over);
        assert_eq!(s.bird_y, config.surface_height / 2.0);
        assert_eq!(s.obstacle_x, config.surface_width);
        assert!(s.gap_offset >= 100.0 && s.gap_offset < 300.0);
        assert_eq!(game.sessions(), 2);

        mailbox.publish(Vec2::new(320.0, 240.0));
        assert_eq!(game.on_frame(&mut surface), FrameRequest::Continue);
    }

    #[test]
    fn test_restart_while_running_reseeds_without_new_frame() {
        let mut game = GameLoop::new(GameConfig::default(), NoInput, 4).unwrap();
        let mut surface = RecordingSurface::new();
        for _ in 0..10 {
            game.on_frame(&mut surface);
        }
        assert_eq!(game.phase(), LoopPhase::Running);

        assert!(!game.restart());
        assert!(!game.restart());
        assert_eq!(game.phase(), LoopPhase::Running);
        assert_eq!(game.state().obstacle_x, 640.0);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.sessions(), 3);
    }

    #[test]
    fn test_render_skip_keeps_physics_running() {
        let mailbox = Mailbox::new();
        mailbox.publish(Vec2::new(320.0, 240.0));
        let mut game = GameLoop::new(GameConfig::default(), &mailbox, 5).unwrap();
        let mut surface = RecordingSurface::new();
        surface.set_available(false);

        for _ in 0..10 {
            assert_eq!(game.on_frame(&mut surface), FrameRequest::Continue);
        }
        assert_eq!(surface.skipped, 10);
        assert_eq!(surface.presented, 0);
        assert_eq!(game.state().obstacle_x, 590.0);

        surface.set_available(true);
        game.on_frame(&mut surface);
        assert_eq!(surface.presented, 1);
    }

    #[test]
    fn test_degraded_input_never_stalls() {
        let mut game = GameLoop::new(GameConfig::default(), NoInput, 6).unwrap();
        let mut surface = RecordingSurface::new();

        // The bird sits at 240 for the whole session; the loop either keeps
        // going or ends on an obstacle, it never errors out.
        let ran = run(&mut game, &mut surface, 2000);
        assert_eq!(game.state().bird_y, 240.0);
        assert_eq!(surface.presented, ran as u64);
    }

    #[test]
    fn test_following_the_gap_scores() {
        let mailbox = Mailbox::new();
        let mut game = GameLoop::new(GameConfig::default(), &mailbox, 7).unwrap();
        let mut surface = RecordingSurface::new();

        for _ in 0..1500 {
            let s = *game.state();
            let gap_center = s.gap_offset + game.config().gap_height / 2.0;
            mailbox.publish(Vec2::new(200.0, gap_center));
            assert_eq!(game.on_frame(&mut surface), FrameRequest::Continue);
        }
        // 141 frames per obstacle at the default speed
        assert_eq!(game.state().score, 10);
        assert!(surface.last.unwrap().texts().any(|t| t == "Score: 10"));
    }
}
