use std::time::{Duration, Instant};

use rand::Rng;

use crate::keys::{Catalog, RawKeyEvent, TargetKey};
use crate::matcher::{matches, MatchOutcome};
use crate::score::Score;
use crate::timer::{Interval, OneShot};

/// Length of a round in countdown units
pub const ROUND_SECS: u32 = 60;
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
/// How long Correct/Wrong stays visible before reverting to Idle
pub const FEEDBACK_DECAY: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Idle,
    Correct,
    Wrong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Active,
    Ended,
}

/// One timed round. Single use: once ended it never becomes active again.
#[derive(Debug)]
pub struct Round {
    catalog: Catalog,
    countdown: u32,
    target: TargetKey,
    score: Score,
    feedback: Feedback,
    state: RoundState,
    ticker: Interval,
    decay: OneShot,
}

impl Round {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, now: Instant) -> Self {
        Self::with_catalog(Catalog::default(), ROUND_SECS, rng, now)
    }

    /// A round over `catalog` lasting `secs` ticks (at least one), ticking from `now`
    pub fn with_catalog<R: Rng + ?Sized>(
        catalog: Catalog,
        secs: u32,
        rng: &mut R,
        now: Instant,
    ) -> Self {
        let target = catalog.draw(None, rng);
        let mut ticker = Interval::new(TICK_PERIOD);
        ticker.start(now);

        Self {
            catalog,
            countdown: secs.max(1),
            target,
            score: Score::default(),
            feedback: Feedback::Idle,
            state: RoundState::Active,
            ticker,
            decay: OneShot::new(FEEDBACK_DECAY),
        }
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn target(&self) -> TargetKey {
        self.target
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == RoundState::Active
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// One countdown unit elapsed. Returns the final score on the tick that ends the round.
    pub fn tick(&mut self) -> Option<Score> {
        if !self.is_active() {
            return None;
        }

        self.countdown = self.countdown.saturating_sub(1);
        tracing::trace!(countdown = self.countdown, "tick");

        if self.countdown == 0 {
            self.end();
            return Some(self.score);
        }
        None
    }

    /// Score a raw key press. Returns `None` once the round is over.
    pub fn handle_key<R: Rng + ?Sized>(
        &mut self,
        event: &RawKeyEvent,
        now: Instant,
        rng: &mut R,
    ) -> Option<MatchOutcome> {
        if self.countdown == 0 || !self.is_active() {
            return None;
        }

        let outcome = matches(self.target, event);
        match outcome {
            MatchOutcome::Correct => {
                self.score.correct += 1;
                self.feedback = Feedback::Correct;
                self.target = self.catalog.draw(Some(self.target), rng);
                self.decay.arm(now);
            }
            MatchOutcome::Wrong => {
                self.score.wrong += 1;
                self.feedback = Feedback::Wrong;
                self.decay.arm(now);
            }
            MatchOutcome::Filtered => {}
        }

        tracing::debug!(
            ?event,
            ?outcome,
            target_key = %self.target,
            correct = self.score.correct,
            wrong = self.score.wrong,
            "key handled"
        );
        Some(outcome)
    }

    /// Fire whatever timers are due at `now`. Returns the final score if the round ended.
    pub fn poll(&mut self, now: Instant) -> Option<Score> {
        if self.decay.poll(now) {
            self.feedback = Feedback::Idle;
        }

        while self.ticker.poll(now) {
            if let Some(score) = self.tick() {
                return Some(score);
            }
        }
        None
    }

    /// Earliest pending timer deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.ticker.deadline(), self.decay.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn end(&mut self) {
        self.state = RoundState::Ended;
        self.ticker.cancel();
        self.decay.cancel();
        self.feedback = Feedback::Idle;
        tracing::info!(
            correct = self.score.correct,
            wrong = self.score.wrong,
            "round ended"
        );
    }
}
