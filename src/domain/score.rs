// src/domain/score.rs

/// Quality band of a final score, used to colour scores in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            ScoreTier::Excellent
        } else if score >= 7.5 {
            ScoreTier::Good
        } else if score >= 6.5 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Medium => "medium",
            ScoreTier::Low => "low",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "score-excellent",
            ScoreTier::Good => "score-good",
            ScoreTier::Medium => "score-medium",
            ScoreTier::Low => "score-low",
        }
    }
}
