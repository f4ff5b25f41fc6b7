// src/analysis/normalizer.rs
//! Checks raw service replies against the configured contract and converts
//! them into typed results. Nothing half-valid gets through.

use serde_json::{Map, Value};
use tracing::error;

use crate::core::config_manager::ScreeningContract;
use crate::error::AnalysisError;
use crate::types::{
    AnalysisKind, AnalysisResult, Score, ScoreScale, ScreeningResult, SentimentLabel,
    SentimentResult,
};

type Object = Map<String, Value>;

#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    screening_contract: ScreeningContract,
}

impl Normalizer {
    pub fn new(screening_contract: ScreeningContract) -> Self {
        Self { screening_contract }
    }

    pub fn normalize(
        &self,
        raw: &Value,
        expected: AnalysisKind,
    ) -> Result<AnalysisResult, AnalysisError> {
        let result = match expected {
            AnalysisKind::Screening => match self.screening_contract {
                ScreeningContract::Current => normalize_screening(raw),
                ScreeningContract::Legacy => normalize_legacy_screening(raw),
            }
            .map(AnalysisResult::Screening),
            AnalysisKind::Sentiment => normalize_sentiment(raw).map(AnalysisResult::Sentiment),
        };

        if let Err(e) = &result {
            error!("{} reply rejected: {}. Raw reply: {}", expected, e, raw);
        }
        result
    }
}

fn normalize_screening(raw: &Value) -> Result<ScreeningResult, AnalysisError> {
    let obj = object(raw)?;
    Ok(ScreeningResult {
        overall_match_score: score(obj, "overallMatchScore", ScoreScale::Percent)?,
        matching_skills: string_list(obj, "matchingSkills")?,
        missing_skills: string_list(obj, "missingSkills")?,
        experience_match: Some(string(obj, "experienceMatch")?),
        qualification_match: Some(string(obj, "qualificationMatch")?),
        summary: Some(string(obj, "summary")?),
        recommendations: Vec::new(),
    })
}

fn normalize_legacy_screening(raw: &Value) -> Result<ScreeningResult, AnalysisError> {
    let obj = object(raw)?;
    Ok(ScreeningResult {
        overall_match_score: score(obj, "match_score", ScoreScale::Fraction)?,
        matching_skills: string_list(obj, "highlighted_skills")?,
        missing_skills: Vec::new(),
        experience_match: None,
        qualification_match: None,
        summary: None,
        recommendations: string_list(obj, "recommendations")?,
    })
}

fn normalize_sentiment(raw: &Value) -> Result<SentimentResult, AnalysisError> {
    let obj = object(raw)?;

    let label_raw = string(obj, "sentiment")?;
    let sentiment_label = SentimentLabel::parse(&label_raw).ok_or_else(|| {
        AnalysisError::ShapeMismatch(format!(
            "`sentiment` must be positive, neutral or negative, got '{}'",
            label_raw
        ))
    })?;

    let recommendations = match obj.get("recommendations") {
        None | Some(Value::Null) => Vec::new(),
        Some(_) => string_list(obj, "recommendations")?,
    };

    Ok(SentimentResult {
        sentiment_score: score(obj, "sentiment_score", ScoreScale::Fraction)?,
        sentiment_label,
        key_themes: string_list(obj, "key_themes")?,
        recommendations,
    })
}

fn object(raw: &Value) -> Result<&Object, AnalysisError> {
    raw.as_object().ok_or_else(|| {
        AnalysisError::ShapeMismatch(format!("expected a JSON object, got {}", type_name(raw)))
    })
}

fn field<'a>(obj: &'a Object, name: &str) -> Result<&'a Value, AnalysisError> {
    obj.get(name)
        .ok_or_else(|| AnalysisError::ShapeMismatch(format!("`{}` is missing", name)))
}

fn score(obj: &Object, name: &str, scale: ScoreScale) -> Result<Score, AnalysisError> {
    let value = field(obj, name)?;
    let number = value.as_f64().ok_or_else(|| {
        AnalysisError::ShapeMismatch(format!(
            "`{}` must be a number, got {}",
            name,
            type_name(value)
        ))
    })?;

    if !(0.0..=scale.upper_bound()).contains(&number) {
        return Err(AnalysisError::ShapeMismatch(format!(
            "`{}` must be between 0 and {}, got {}",
            name,
            scale.upper_bound(),
            number
        )));
    }

    Ok(Score::new(number, scale))
}

fn string(obj: &Object, name: &str) -> Result<String, AnalysisError> {
    let value = field(obj, name)?;
    value.as_str().map(str::to_string).ok_or_else(|| {
        AnalysisError::ShapeMismatch(format!(
            "`{}` must be a string, got {}",
            name,
            type_name(value)
        ))
    })
}

fn string_list(obj: &Object, name: &str) -> Result<Vec<String>, AnalysisError> {
    let value = field(obj, name)?;
    let items = value.as_array().ok_or_else(|| {
        AnalysisError::ShapeMismatch(format!(
            "`{}` must be a list of strings, got {}",
            name,
            type_name(value)
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                AnalysisError::ShapeMismatch(format!(
                    "`{}[{}]` must be a string, got {}",
                    name,
                    index,
                    type_name(item)
                ))
            })
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current_reply() -> Value {
        json!({
            "overallMatchScore": 82.5,
            "matchingSkills": ["Python", "React"],
            "missingSkills": ["AWS"],
            "experienceMatch": "Meets",
            "qualificationMatch": "Meets",
            "summary": "Strong fit"
        })
    }

    fn mismatch(result: Result<AnalysisResult, AnalysisError>) -> String {
        match result {
            Err(AnalysisError::ShapeMismatch(detail)) => detail,
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_current_screening_contract() {
        let normalizer = Normalizer::new(ScreeningContract::Current);
        let result = normalizer
            .normalize(&current_reply(), AnalysisKind::Screening)
            .unwrap();

        let AnalysisResult::Screening(screening) = result else {
            panic!("expected screening result");
        };
        assert_eq!(screening.overall_match_score, Score::new(82.5, ScoreScale::Percent));
        assert_eq!(screening.matching_skills, vec!["Python", "React"]);
        assert_eq!(screening.missing_skills, vec!["AWS"]);
        assert_eq!(screening.summary.as_deref(), Some("Strong fit"));
    }

    #[test]
    fn test_legacy_screening_contract() {
        let normalizer = Normalizer::new(ScreeningContract::Legacy);
        let raw = json!({
            "match_score": 0.73,
            "highlighted_skills": ["Rust"],
            "recommendations": ["Add cloud experience"]
        });

        let AnalysisResult::Screening(screening) =
            normalizer.normalize(&raw, AnalysisKind::Screening).unwrap()
        else {
            panic!("expected screening result");
        };
        assert_eq!(screening.overall_match_score.scale, ScoreScale::Fraction);
        assert_eq!(screening.matching_skills, vec!["Rust"]);
        assert!(screening.missing_skills.is_empty());
        assert_eq!(screening.recommendations, vec!["Add cloud experience"]);
        assert_eq!(screening.summary, None);
    }

    #[test]
    fn test_contract_versions_do_not_mix() {
        let current = Normalizer::new(ScreeningContract::Current);
        let legacy_reply = json!({
            "match_score": 0.73,
            "highlighted_skills": [],
            "recommendations": []
        });
        assert_eq!(
            mismatch(current.normalize(&legacy_reply, AnalysisKind::Screening)),
            "`overallMatchScore` is missing"
        );

        let legacy = Normalizer::new(ScreeningContract::Legacy);
        assert_eq!(
            mismatch(legacy.normalize(&current_reply(), AnalysisKind::Screening)),
            "`match_score` is missing"
        );
    }

    #[test]
    fn test_missing_list_is_rejected() {
        let mut raw = current_reply();
        raw.as_object_mut().unwrap().remove("matchingSkills");
        let normalizer = Normalizer::default();
        assert_eq!(
            mismatch(normalizer.normalize(&raw, AnalysisKind::Screening)),
            "`matchingSkills` is missing"
        );
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let normalizer = Normalizer::default();

        let mut score_as_string = current_reply();
        score_as_string["overallMatchScore"] = json!("82.5");
        assert_eq!(
            mismatch(normalizer.normalize(&score_as_string, AnalysisKind::Screening)),
            "`overallMatchScore` must be a number, got a string"
        );

        let mut list_as_string = current_reply();
        list_as_string["missingSkills"] = json!("AWS");
        assert!(mismatch(normalizer.normalize(&list_as_string, AnalysisKind::Screening))
            .contains("must be a list of strings"));

        let mut list_of_numbers = current_reply();
        list_of_numbers["matchingSkills"] = json!(["Python", 3]);
        assert_eq!(
            mismatch(normalizer.normalize(&list_of_numbers, AnalysisKind::Screening)),
            "`matchingSkills[1]` must be a string, got a number"
        );

        assert!(mismatch(normalizer.normalize(&json!([1, 2]), AnalysisKind::Screening))
            .contains("expected a JSON object"));
    }

    #[test]
    fn test_out_of_range_score_is_rejected() {
        let normalizer = Normalizer::default();
        let mut raw = current_reply();
        raw["overallMatchScore"] = json!(140);
        assert!(mismatch(normalizer.normalize(&raw, AnalysisKind::Screening))
            .contains("between 0 and 100"));

        let sentiment = json!({
            "sentiment_score": 1.5,
            "sentiment": "positive",
            "key_themes": []
        });
        assert!(mismatch(normalizer.normalize(&sentiment, AnalysisKind::Sentiment))
            .contains("between 0 and 1"));
    }

    #[test]
    fn test_sentiment_contract() {
        let normalizer = Normalizer::default();
        let raw = json!({
            "sentiment_score": 0.72,
            "sentiment": "Positive",
            "key_themes": ["team", "work-life balance"]
        });

        let AnalysisResult::Sentiment(sentiment) =
            normalizer.normalize(&raw, AnalysisKind::Sentiment).unwrap()
        else {
            panic!("expected sentiment result");
        };
        assert_eq!(sentiment.sentiment_label, SentimentLabel::Positive);
        assert_eq!(sentiment.sentiment_score, Score::new(0.72, ScoreScale::Fraction));
        assert_eq!(sentiment.key_themes, vec!["team", "work-life balance"]);
        assert!(sentiment.recommendations.is_empty());
    }

    #[test]
    fn test_sentiment_rejects_bad_label_and_recommendations() {
        let normalizer = Normalizer::default();

        let bad_label = json!({
            "sentiment_score": 0.5,
            "sentiment": "mixed",
            "key_themes": []
        });
        assert!(mismatch(normalizer.normalize(&bad_label, AnalysisKind::Sentiment))
            .contains("'mixed'"));

        let bad_recommendations = json!({
            "sentiment_score": 0.5,
            "sentiment": "neutral",
            "key_themes": [],
            "recommendations": "talk to your manager"
        });
        assert!(mismatch(
            normalizer.normalize(&bad_recommendations, AnalysisKind::Sentiment)
        )
        .contains("`recommendations`"));
    }
}
