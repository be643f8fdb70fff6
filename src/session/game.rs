//! Reset/step driver for training.
//!
//! White is controlled from outside through `step`; Black is played by the
//! session's `MoveSelector`.
//!
//! ## Reset policy
//!
//! `reset` sets up the standard position with Black to move and lets the
//! selector play Black's opening move right away. Control is then handed to
//! White, so every observation returned to the caller has White to move (or
//! the game over). There is no mode in which White opens.

use im::Vector;

use crate::board::Grid;
use crate::core::{ActionRecord, Color, ColorMap, GameRng, GameRngState, SessionConfig, SessionError};
use crate::nn::{PlaneEncoder, StateEncoder};
use crate::rules::{Applied, GameResult, TurnEngine};

use super::observation::{EpisodeStats, Observation, Selection, Snapshot, StepOutcome};
use super::selector::{MoveSelector, UniformRandom};

/// The side controlled through `step`.
pub const EXTERNAL: Color = Color::White;

/// The side played by the session's selector.
pub const INTERNAL: Color = Color::Black;

/// A training session: one game at a time plus counters across episodes.
///
/// ## Example
///
/// ```
/// use rust_draughts::core::SessionConfig;
/// use rust_draughts::session::{GameSession, Selection};
///
/// let mut session = GameSession::new(SessionConfig::default().with_seed(7));
/// let observation = session.reset(None).unwrap();
///
/// let target = observation.legal_destinations[0];
/// let outcome = session.step(Selection::Square(target)).unwrap();
/// assert!(!outcome.rejected);
/// ```
pub struct GameSession {
    config: SessionConfig,
    engine: TurnEngine,
    encoder: PlaneEncoder,
    rng: GameRng,
    selector: Box<dyn MoveSelector>,
    stats: EpisodeStats,
    history: Vector<ActionRecord>,
    done: bool,
}

impl GameSession {
    /// Session whose internal side plays uniformly at random.
    ///
    /// Call `reset` before the first `step`.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_selector(config, Box::new(UniformRandom))
    }

    /// Session with a custom selector for the internal side.
    #[must_use]
    pub fn with_selector(config: SessionConfig, selector: Box<dyn MoveSelector>) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            engine: TurnEngine::new(),
            encoder: PlaneEncoder::new(),
            rng,
            selector,
            stats: EpisodeStats::default(),
            history: Vector::new(),
            done: true,
        }
    }

    /// Use a different plane encoder for observations.
    #[must_use]
    pub fn with_encoder(mut self, encoder: PlaneEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Replace the internal side's selector. Takes effect on its next move.
    pub fn set_selector(&mut self, selector: Box<dyn MoveSelector>) {
        self.selector = selector;
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    #[must_use]
    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    /// Every action played this episode, the opening move included.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The episode has ended (terminated or truncated) or was never started.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue the internal side's random stream from a saved state.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Start a new episode.
    ///
    /// `seed` reseeds the internal side's RNG; `None` continues the current
    /// stream.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<Observation, SessionError> {
        if let Some(seed) = seed {
            self.rng = GameRng::new(seed);
        }

        if self.stats.episodes > 0 {
            let previous = self.stats.total_reward;
            self.stats.best_score = Some(self.stats.best_score.map_or(previous, |b| b.max(previous)));
        }
        self.stats.episodes += 1;
        self.stats.steps = 0;
        self.stats.total_reward = 0.0;
        self.stats.rejected_streak = 0;

        self.engine = TurnEngine::from_position(Grid::standard(), INTERNAL);
        self.history = Vector::new();
        self.done = false;
        log::debug!("episode {} starts", self.stats.episodes);

        if let Err(err) = self.play_half_move() {
            // Nothing can be played from here, so the episode is over.
            self.done = true;
            log::warn!("episode {} has no opening move: {err}", self.stats.episodes);
            return Err(err);
        }
        Ok(self.observation())
    }

    /// Play one external selection and, if the game goes on, the internal
    /// side's reply.
    ///
    /// Both half-moves are committed together. If the reply cannot be played
    /// the external move is rolled back and the session is left exactly as
    /// it was before the call (only the selector and RNG have advanced).
    pub fn step(&mut self, selection: impl Into<Selection>) -> Result<StepOutcome, SessionError> {
        if self.done || self.engine.side_to_move() != Some(EXTERNAL) {
            return Err(SessionError::EpisodeOver);
        }

        let selection = selection.into();
        let destination = selection
            .resolve(self.engine.legal_actions())?
            .filter(|&square| self.engine.legal_actions().contains_destination(square));
        let Some(destination) = destination else {
            return Ok(self.reject(&selection));
        };

        let saved_engine = self.engine.clone();
        let saved_history = self.history.clone();
        let applied = self.engine.apply(destination)?;
        self.record(&applied);

        let rewards = &self.config.rewards;
        let mut reward = if applied.captured > 0 {
            rewards.capture * f64::from(applied.captured)
        } else {
            rewards.step
        };

        let mut result = applied.result;
        if result.is_none() {
            match self.play_half_move() {
                Ok(reply) => result = reply.result,
                Err(err) => {
                    self.engine = saved_engine;
                    self.history = saved_history;
                    log::warn!("reply failed, step rolled back: {err}");
                    return Err(err);
                }
            }
        }
        self.stats.rejected_streak = 0;
        if let Some(result) = result {
            reward = self.outcome_reward(result);
        }

        self.stats.steps += 1;
        let terminated = result.is_some();
        let truncated = !terminated
            && self
                .config
                .max_steps
                .is_some_and(|limit| self.stats.steps >= limit);
        if truncated {
            self.done = true;
            log::info!("episode {} truncated after {} steps", self.stats.episodes, self.stats.steps);
        }

        self.stats.total_reward += reward;
        Ok(StepOutcome {
            observation: self.observation(),
            reward,
            terminated,
            truncated,
            winner: result.map(|r| r.winner),
            rejected: false,
        })
    }

    /// Let the selector play one half-move for whichever side is to move.
    ///
    /// Used for the opening move and the internal side's replies, and for
    /// self-play where both sides are driven by the selector.
    pub fn play_half_move(&mut self) -> Result<Applied, SessionError> {
        if self.done || self.engine.is_terminal() {
            return Err(SessionError::EpisodeOver);
        }

        let legal = self.engine.legal_actions();
        let action = self
            .selector
            .select(self.engine.grid(), legal, &mut self.rng)
            .and_then(|index| legal.get(index))
            .ok_or(SessionError::SelectorDeclined)?;

        let applied = self.engine.apply_action(&action)?;
        self.record(&applied);
        Ok(applied)
    }

    /// Observation for the external side.
    #[must_use]
    pub fn observation(&self) -> Observation {
        let to_move = self.engine.side_to_move();
        let legal_destinations = if to_move == Some(EXTERNAL) {
            self.engine.legal_actions().destinations()
        } else {
            Vec::new()
        };
        Observation {
            state: self.encoder.encode(&self.engine, EXTERNAL),
            legal_destinations,
            to_move,
        }
    }

    /// Board state for renderers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let legal = self.engine.legal_actions();
        Snapshot {
            cells: self.engine.grid().cells().to_vec(),
            legal_destinations: legal.destinations(),
            captures: legal.has_captures(),
            last_paths: self.engine.last_paths().clone(),
            to_move: self.engine.side_to_move(),
            pieces: ColorMap::new(|color| self.engine.pieces(color)),
        }
    }

    fn reject(&mut self, selection: &Selection) -> StepOutcome {
        self.stats.rejected_streak += 1;
        let mut reward = self.config.rewards.illegal;
        log::warn!(
            "rejected selection {:?} ({} in a row)",
            selection,
            self.stats.rejected_streak
        );

        let mut winner = None;
        // A limit of 0 behaves like 1: the first rejection forfeits.
        if let Some(limit) = self.config.illegal_move_limit {
            if self.stats.rejected_streak >= limit {
                if let Ok(result) = self.engine.forfeit(EXTERNAL) {
                    self.finish(result);
                    reward = self.outcome_reward(result);
                    winner = Some(result.winner);
                }
            }
        }

        self.stats.total_reward += reward;
        StepOutcome {
            observation: self.observation(),
            reward,
            terminated: winner.is_some(),
            truncated: false,
            winner,
            rejected: true,
        }
    }

    fn record(&mut self, applied: &Applied) {
        self.history.push_back(ActionRecord {
            color: applied.color,
            action: applied.action.clone(),
            ply: self.engine.ply() - 1,
        });
        if let Some(result) = applied.result {
            self.finish(result);
        }
    }

    fn finish(&mut self, result: GameResult) {
        match result.winner {
            Color::White => self.stats.white_wins += 1,
            Color::Black => self.stats.black_wins += 1,
        }
        self.done = true;
        log::info!(
            "episode {} over: {} wins ({:?})",
            self.stats.episodes,
            result.winner,
            result.reason
        );
    }

    fn outcome_reward(&self, result: GameResult) -> f64 {
        if result.is_winner(EXTERNAL) {
            self.config.rewards.win
        } else {
            self.config.rewards.loss
        }
    }
}
