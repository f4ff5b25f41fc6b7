// src/analysis/renderer.rs
use serde::Serialize;
use std::fmt;

use crate::types::{AnalysisResult, Score, ScreeningResult, SentimentResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// green
    Positive,
    /// red
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningView {
    pub score: String,
    pub matching_skills: Vec<Badge>,
    pub missing_skills: Vec<Badge>,
    pub experience_match: Option<String>,
    pub qualification_match: Option<String>,
    pub summary: Option<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentView {
    pub score: String,
    pub label: String,
    pub key_themes: Vec<Badge>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DisplayModel {
    Screening(ScreeningView),
    Sentiment(SentimentView),
}

/// One decimal place and a `%` suffix, using the scale the normalizer set.
/// Ties round away from zero, so 82.25 shows as 82.3%.
pub fn format_percent(score: &Score) -> String {
    let rounded = (score.as_percent() * 10.0).round() / 10.0;
    format!("{:.1}%", rounded)
}

fn badges(items: &[String], tone: Tone) -> Vec<Badge> {
    items
        .iter()
        .map(|label| Badge {
            label: label.clone(),
            tone,
        })
        .collect()
}

pub fn render(result: &AnalysisResult) -> DisplayModel {
    match result {
        AnalysisResult::Screening(screening) => DisplayModel::Screening(render_screening(screening)),
        AnalysisResult::Sentiment(sentiment) => DisplayModel::Sentiment(render_sentiment(sentiment)),
    }
}

fn render_screening(result: &ScreeningResult) -> ScreeningView {
    ScreeningView {
        score: format_percent(&result.overall_match_score),
        matching_skills: badges(&result.matching_skills, Tone::Positive),
        missing_skills: badges(&result.missing_skills, Tone::Negative),
        experience_match: result.experience_match.clone(),
        qualification_match: result.qualification_match.clone(),
        summary: result.summary.clone(),
        recommendations: result.recommendations.clone(),
    }
}

fn render_sentiment(result: &SentimentResult) -> SentimentView {
    SentimentView {
        score: format_percent(&result.sentiment_score),
        label: result.sentiment_label.to_string(),
        key_themes: badges(&result.key_themes, Tone::Neutral),
        recommendations: result.recommendations.clone(),
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.tone {
            Tone::Positive => "+ ",
            Tone::Negative => "- ",
            Tone::Neutral => "",
        };
        write!(f, "[{}{}]", marker, self.label)
    }
}

fn write_badges(f: &mut fmt::Formatter<'_>, title: &str, badges: &[Badge]) -> fmt::Result {
    write!(f, "{}:", title)?;
    for badge in badges {
        write!(f, " {}", badge)?;
    }
    writeln!(f)
}

fn write_list(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}:", title)?;
    for item in items {
        writeln!(f, "  - {}", item)?;
    }
    Ok(())
}

impl fmt::Display for DisplayModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Screening(view) => {
                writeln!(f, "Screening Results")?;
                writeln!(f, "Match Score: {}", view.score)?;
                write_badges(f, "Matching Skills", &view.matching_skills)?;
                write_badges(f, "Missing Skills", &view.missing_skills)?;
                if let Some(experience) = &view.experience_match {
                    writeln!(f, "Experience Match: {}", experience)?;
                }
                if let Some(qualification) = &view.qualification_match {
                    writeln!(f, "Qualification Match: {}", qualification)?;
                }
                if let Some(summary) = &view.summary {
                    writeln!(f, "Summary: {}", summary)?;
                }
                write_list(f, "Recommendations", &view.recommendations)
            }
            Self::Sentiment(view) => {
                writeln!(f, "Analysis Results")?;
                writeln!(f, "Sentiment Score: {}", view.score)?;
                writeln!(f, "Overall sentiment: {}", view.label)?;
                write_badges(f, "Key Themes", &view.key_themes)?;
                write_list(f, "Recommendations", &view.recommendations)
            }
        }
    }
}
