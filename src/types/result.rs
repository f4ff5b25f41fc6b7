// src/types/result.rs
//! Normalized analysis results

use serde::Serialize;
use std::fmt;

/// Which range a score was reported on. Set by the normalizer from the
/// active contract; the renderer never guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreScale {
    /// 0 to 100
    Percent,
    /// 0 to 1
    Fraction,
}

impl ScoreScale {
    pub fn factor(&self) -> f64 {
        match self {
            Self::Percent => 1.0,
            Self::Fraction => 100.0,
        }
    }

    pub fn upper_bound(&self) -> f64 {
        match self {
            Self::Percent => 100.0,
            Self::Fraction => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub value: f64,
    pub scale: ScoreScale,
}

impl Score {
    pub fn new(value: f64, scale: ScoreScale) -> Self {
        Self { value, scale }
    }

    pub fn as_percent(&self) -> f64 {
        self.value * self.scale.factor()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningResult {
    pub overall_match_score: Score,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_match: Option<String>,
    pub qualification_match: Option<String>,
    pub summary: Option<String>,
    /// Only the legacy contract reports these.
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Neutral => write!(f, "neutral"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub sentiment_score: Score,
    pub sentiment_label: SentimentLabel,
    pub key_themes: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisResult {
    Screening(ScreeningResult),
    Sentiment(SentimentResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_scales() {
        assert_eq!(Score::new(82.5, ScoreScale::Percent).as_percent(), 82.5);
        assert_eq!(Score::new(0.75, ScoreScale::Fraction).as_percent(), 75.0);
    }

    #[test]
    fn test_sentiment_label_parse() {
        assert_eq!(SentimentLabel::parse("Positive"), Some(SentimentLabel::Positive));
        assert_eq!(SentimentLabel::parse("neutral"), Some(SentimentLabel::Neutral));
        assert_eq!(SentimentLabel::parse(" NEGATIVE "), Some(SentimentLabel::Negative));
        assert_eq!(SentimentLabel::parse("mixed"), None);
    }
}
