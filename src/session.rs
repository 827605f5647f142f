use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{SessionError, SessionResult};
use crate::keys::{Catalog, RawKeyEvent};
use crate::matcher::MatchOutcome;
use crate::round::{Round, ROUND_SECS};
use crate::score::Score;

/// Top-level phase of the trainer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum SessionPhase {
    Start,
    Playing,
    GameOver,
}

#[derive(Debug)]
enum Stage {
    Start,
    Playing(Round),
    GameOver(Score),
}

/// Owns the phase machine, the live round while playing, and the last final score
#[derive(Debug)]
pub struct Session<R: Rng = StdRng> {
    stage: Stage,
    catalog: Catalog,
    round_secs: u32,
    rng: R,
}

impl Session<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_catalog(Catalog::default(), ROUND_SECS, rng)
    }

    pub fn with_catalog(catalog: Catalog, round_secs: u32, rng: R) -> Self {
        Self {
            stage: Stage::Start,
            catalog,
            round_secs,
            rng,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.stage {
            Stage::Start => SessionPhase::Start,
            Stage::Playing(_) => SessionPhase::Playing,
            Stage::GameOver(_) => SessionPhase::GameOver,
        }
    }

    /// The live round, while playing
    pub fn round(&self) -> Option<&Round> {
        match &self.stage {
            Stage::Playing(round) => Some(round),
            _ => None,
        }
    }

    /// Last completed score; zero outside of game over
    pub fn final_score(&self) -> Score {
        match self.stage {
            Stage::GameOver(score) => score,
            _ => Score::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn start(&mut self, now: Instant) -> SessionResult<()> {
        self.expect_phase(SessionPhase::Start, SessionPhase::Playing)?;

        let round = Round::with_catalog(self.catalog.clone(), self.round_secs, &mut self.rng, now);
        tracing::info!(
            target_key = %round.target(),
            secs = round.countdown(),
            "round started"
        );
        self.stage = Stage::Playing(round);
        Ok(())
    }

    /// Store the final tally and move to game over. Drops the round and its timers.
    pub fn finish(&mut self, score: Score) -> SessionResult<()> {
        self.expect_phase(SessionPhase::Playing, SessionPhase::GameOver)?;

        tracing::info!(
            correct = score.correct,
            wrong = score.wrong,
            accuracy = score.accuracy(),
            rank = %score.rank(),
            "game over"
        );
        self.stage = Stage::GameOver(score);
        Ok(())
    }

    pub fn restart(&mut self) -> SessionResult<()> {
        self.expect_phase(SessionPhase::GameOver, SessionPhase::Start)?;

        tracing::info!("back to start");
        self.stage = Stage::Start;
        Ok(())
    }

    /// Forward a key press to the live round. `None` unless a round is accepting keys.
    pub fn handle_key(&mut self, event: &RawKeyEvent, now: Instant) -> Option<MatchOutcome> {
        match &mut self.stage {
            Stage::Playing(round) => round.handle_key(event, now, &mut self.rng),
            _ => None,
        }
    }

    /// Fire due round timers. Returns the final score when this poll ended the round.
    pub fn poll(&mut self, now: Instant) -> SessionResult<Option<Score>> {
        let ended = match &mut self.stage {
            Stage::Playing(round) => round.poll(now),
            _ => None,
        };

        if let Some(score) = ended {
            self.finish(score)?;
        }
        Ok(ended)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.round().and_then(Round::next_deadline)
    }

    fn expect_phase(&self, required: SessionPhase, to: SessionPhase) -> SessionResult<()> {
        let from = self.phase();
        if from == required {
            return Ok(());
        }

        tracing::warn!(%from, %to, "invalid session transition");
        Err(SessionError::InvalidTransition { from, to })
    }
}
