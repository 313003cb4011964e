//! Game state module - the one record owning all gameplay state
//!
//! Ties together the physics integrator, the obstacle track and the
//! collision/score monitor, and runs the phase state machine
//! (`NotStarted → Playing → GameOver`, `GameOver → Playing` on restart).
//!
//! The state is pure and deterministic: no I/O, no clocks. The owner feeds
//! measured elapsed time into [`GameState::tick`] and actions into
//! [`GameState::apply_action`]; everything else is derived.

use arrayvec::ArrayVec;

use tui_flappy_types::{
    GameAction, Phase, TickEvent, BIRD_START_Y, FLAP_IMPULSE,
};

use crate::collision::Monitor;
use crate::obstacle::ObstacleTrack;
use crate::physics;
use crate::scoring::speed_factor;
use crate::snapshot::GameSnapshot;

/// Events produced by one tick. At most one of each kind, so the buffer is
/// stack-allocated.
pub type TickEvents = ArrayVec<TickEvent, 3>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    bird_y: f32,
    bird_vy: f32,
    obstacle: ObstacleTrack,
    monitor: Monitor,
    score: u32,
    /// Session best; survives restarts.
    best: u32,
    phase: Phase,
    paused: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Create a new game on the title screen with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let obstacle = ObstacleTrack::new(seed);
        let monitor = Monitor::new(BIRD_START_Y, obstacle.x());
        Self {
            bird_y: BIRD_START_Y,
            bird_vy: 0.0,
            obstacle,
            monitor,
            score: 0,
            best: 0,
            phase: Phase::NotStarted,
            paused: false,
            episode_id: 0,
        }
    }

    /// Leave the title screen and begin play; no-op once started.
    ///
    /// The starting tap doubles as the first flap.
    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            return;
        }
        self.phase = Phase::Playing;
        self.bird_vy = FLAP_IMPULSE;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    pub fn bird_y(&self) -> f32 {
        self.bird_y
    }

    pub fn bird_vy(&self) -> f32 {
        self.bird_vy
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn obstacle(&self) -> &ObstacleTrack {
        &self.obstacle
    }

    /// Main game tick: integrate physics, advance the obstacle, run the
    /// watchers.
    ///
    /// An `elapsed_ms` of zero leaves every field untouched, and nothing
    /// advances outside the `Playing` phase or while paused.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickEvents {
        let mut events = TickEvents::new();
        if elapsed_ms == 0 || self.paused || self.phase != Phase::Playing {
            return events;
        }
        let dt = elapsed_ms as f32 / 1000.0;

        let (y, vy) = physics::integrate(self.bird_y, self.bird_vy, dt);
        self.bird_y = y;
        self.bird_vy = vy;

        if self.obstacle.advance(dt, speed_factor(self.score)) {
            events.push(TickEvent::CycleCompleted);
        }

        let top = self.obstacle.top_rect();
        let bottom = self.obstacle.bottom_rect();
        let verdict = self
            .monitor
            .observe(self.bird_y, self.obstacle.x(), &top, &bottom);

        if verdict.scored {
            self.score += 1;
            events.push(TickEvent::Scored);
        }
        if verdict.collided {
            self.phase = Phase::GameOver;
            events.push(TickEvent::GameOver);
        }

        // The game-over watcher cancels the obstacle motion in place, once.
        if self.monitor.game_over_rising(self.phase.is_game_over()) {
            self.obstacle.freeze();
            self.best = self.best.max(self.score);
        }

        events
    }

    /// Apply a game action; returns whether it had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Flap => self.flap(),
            GameAction::Pause => {
                if self.phase != Phase::Playing {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// The tap. What it does depends on the phase: start, impulse, or
    /// restart.
    pub fn flap(&mut self) -> bool {
        match self.phase {
            Phase::NotStarted => {
                self.start();
                true
            }
            Phase::Playing => {
                if self.paused {
                    return false;
                }
                // Hard reset, not an increment.
                self.bird_vy = FLAP_IMPULSE;
                true
            }
            Phase::GameOver => {
                self.restart();
                true
            }
        }
    }

    /// Reset to initial values and re-enter play.
    ///
    /// The session best and the RNG stream survive; everything else goes
    /// back to its starting constant.
    pub fn restart(&mut self) {
        self.bird_y = BIRD_START_Y;
        self.bird_vy = 0.0;
        self.obstacle.reset();
        self.monitor.reset(self.bird_y, self.obstacle.x());
        self.score = 0;
        self.paused = false;
        self.phase = Phase::Playing;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Fill a render snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.paused = self.paused;
        out.bird_y = self.bird_y;
        out.bird_vy = self.bird_vy;
        out.bird_rotation = physics::bird_rotation(self.bird_vy);
        out.pipe_x = self.obstacle.x();
        out.gap_offset = self.obstacle.gap_offset();
        out.top_pipe = self.obstacle.top_rect();
        out.bottom_pipe = self.obstacle.bottom_rect();
        out.score = self.score;
        out.best = self.best;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
