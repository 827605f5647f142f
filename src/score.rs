/// Tally of one round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub correct: u32,
    pub wrong: u32,
}

impl Score {
    pub fn new(correct: u32, wrong: u32) -> Self {
        Self { correct, wrong }
    }

    pub fn total(&self) -> u32 {
        self.correct + self.wrong
    }

    /// Percentage of keystrokes that were correct, rounded; 0 with no keystrokes
    pub fn accuracy(&self) -> u32 {
        match self.total() {
            0 => 0,
            total => ((self.correct as f64 / total as f64) * 100.0).round() as u32,
        }
    }

    pub fn rank(&self) -> Rank {
        Rank::for_correct(self.correct)
    }

    pub fn accuracy_tier(&self) -> AccuracyTier {
        AccuracyTier::for_accuracy(self.accuracy())
    }
}

/// Speed rank earned from correct presses in one round
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, strum_macros::Display)]
pub enum Rank {
    Apprentice,
    #[strum(serialize = "Fast Fingers")]
    FastFingers,
    #[strum(serialize = "Pro Typist")]
    ProTypist,
    Grandmaster,
}

impl Rank {
    pub fn for_correct(correct: u32) -> Self {
        match correct {
            60.. => Rank::Grandmaster,
            40..=59 => Rank::ProTypist,
            20..=39 => Rank::FastFingers,
            _ => Rank::Apprentice,
        }
    }
}

/// Coarse bucket used to color the accuracy figure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccuracyTier {
    High,
    Medium,
    Low,
}

impl AccuracyTier {
    pub fn for_accuracy(accuracy: u32) -> Self {
        if accuracy >= 90 {
            AccuracyTier::High
        } else if accuracy >= 70 {
            AccuracyTier::Medium
        } else {
            AccuracyTier::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_rounds() {
        assert_eq!(Score::new(12, 3).accuracy(), 80);
        assert_eq!(Score::new(2, 1).accuracy(), 67);
        assert_eq!(Score::new(1, 2).accuracy(), 33);
        assert_eq!(Score::new(1, 7).accuracy(), 13);
        assert_eq!(Score::new(10, 0).accuracy(), 100);
        assert_eq!(Score::new(0, 4).accuracy(), 0);
    }

    #[test]
    fn test_accuracy_without_keystrokes() {
        assert_eq!(Score::default().accuracy(), 0);
        assert_eq!(Score::default().total(), 0);
    }

    #[test]
    fn test_rank_thresholds() {
        assert_eq!(Rank::for_correct(0), Rank::Apprentice);
        assert_eq!(Rank::for_correct(19), Rank::Apprentice);
        assert_eq!(Rank::for_correct(20), Rank::FastFingers);
        assert_eq!(Rank::for_correct(39), Rank::FastFingers);
        assert_eq!(Rank::for_correct(40), Rank::ProTypist);
        assert_eq!(Rank::for_correct(59), Rank::ProTypist);
        assert_eq!(Rank::for_correct(60), Rank::Grandmaster);
        assert_eq!(Rank::for_correct(250), Rank::Grandmaster);
    }

    #[test]
    fn test_rank_ignores_wrong_presses() {
        assert_eq!(Score::new(45, 100).rank(), Rank::ProTypist);
    }

    #[test]
    fn test_rank_labels() {
        assert_eq!(Rank::Apprentice.to_string(), "Apprentice");
        assert_eq!(Rank::FastFingers.to_string(), "Fast Fingers");
        assert_eq!(Rank::ProTypist.to_string(), "Pro Typist");
        assert_eq!(Rank::Grandmaster.to_string(), "Grandmaster");
    }

    #[test]
    fn test_accuracy_tiers() {
        assert_eq!(AccuracyTier::for_accuracy(100), AccuracyTier::High);
        assert_eq!(AccuracyTier::for_accuracy(90), AccuracyTier::High);
        assert_eq!(AccuracyTier::for_accuracy(89), AccuracyTier::Medium);
        assert_eq!(AccuracyTier::for_accuracy(70), AccuracyTier::Medium);
        assert_eq!(AccuracyTier::for_accuracy(69), AccuracyTier::Low);
        assert_eq!(Score::new(12, 3).accuracy_tier(), AccuracyTier::Medium);
    }
}
