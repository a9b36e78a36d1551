//! Wire types for game results
//!
//! [`GameReport`] is what a client posts to the relay; [`WebhookPayload`] is
//! what the relay forwards.

use super::error::{RelayError, Result};
use crate::game::GameResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields that must be present and non-empty in every report
pub const REQUIRED_FIELDS: [&str; 3] = ["result", "word", "attempts"];

/// Game result as posted by a client
///
/// Field values are kept as received and forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub result: Value,
    pub word: Value,
    pub attempts: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
}

impl GameReport {
    /// Build the report for a finished game
    ///
    /// Numeric Telegram ids are sent as JSON numbers, anything else as a string.
    #[must_use]
    pub fn from_result(result: &GameResult, telegram_id: Option<&str>) -> Self {
        let telegram_id = telegram_id.map(|id| {
            id.parse::<i64>()
                .map_or_else(|_| Value::String(id.to_string()), Value::from)
        });

        Self {
            result: Value::String(result.outcome.to_string()),
            word: Value::String(result.word.clone()),
            attempts: Value::from(result.attempts),
            telegram_id,
            duration: Some(Value::from(result.duration_secs)),
            timestamp: Some(Value::String(result.finished_at.to_rfc3339())),
        }
    }

    /// Parse and validate a raw request body
    ///
    /// A required field counts as missing when it is absent, `null`, `false`,
    /// `0` or an empty string. Values of any other type are accepted as is.
    ///
    /// # Errors
    ///
    /// - `RelayError::InvalidJson` if the body is not JSON
    /// - `RelayError::MissingFields` if a required field is missing or empty
    pub fn parse(body: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| RelayError::InvalidJson(e.to_string()))?;

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !is_truthy(value.get(field)))
            .collect();
        if !missing.is_empty() {
            return Err(RelayError::MissingFields(missing));
        }

        let field = |name: &str| value.get(name).cloned();
        Ok(Self {
            result: field("result").unwrap_or_default(),
            word: field("word").unwrap_or_default(),
            attempts: field("attempts").unwrap_or_default(),
            telegram_id: field("telegram_id"),
            duration: field("duration"),
            timestamp: field("timestamp"),
        })
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|x| x.abs() > 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Payload delivered to the webhook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<Value>,
    pub result: Value,
    pub word: Value,
    pub attempts: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
}

impl From<GameReport> for WebhookPayload {
    fn from(report: GameReport) -> Self {
        Self {
            telegram_id: report.telegram_id,
            result: report.result,
            word: report.word,
            attempts: report.attempts,
            duration: report.duration,
            timestamp: report.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;
    use serde_json::json;
    use std::time::Duration;

    fn body(value: &Value) -> Vec<u8> {
        serde_json::to_vec(value).unwrap()
    }

    #[test]
    fn parse_full_report() {
        let report = GameReport::parse(&body(&json!({
            "result": "win",
            "word": "СЛОВО",
            "attempts": 3,
            "telegram_id": 12345,
            "duration": 42,
            "timestamp": "2026-10-19T10:00:00Z",
            "extra": "ignored"
        })))
        .unwrap();

        assert_eq!(report.result, json!("win"));
        assert_eq!(report.attempts, json!(3));
        assert_eq!(report.telegram_id, Some(json!(12345)));
    }

    #[test]
    fn parse_minimal_report() {
        let report = GameReport::parse(&body(&json!({
            "result": "lose",
            "word": "ВОЛНА",
            "attempts": 6
        })))
        .unwrap();

        assert!(report.telegram_id.is_none());
        assert!(report.duration.is_none());
    }

    #[test]
    fn parse_reports_each_missing_field() {
        let err = GameReport::parse(&body(&json!({ "word": "ВОЛНА" }))).unwrap_err();
        let RelayError::MissingFields(fields) = err else {
            panic!("expected missing fields, got {err:?}");
        };
        assert_eq!(fields, vec!["result", "attempts"]);
    }

    #[test]
    fn parse_treats_empty_values_as_missing() {
        for bad in [
            json!({ "result": "", "word": "ВОЛНА", "attempts": 1 }),
            json!({ "result": "win", "word": null, "attempts": 1 }),
            json!({ "result": "win", "word": "ВОЛНА", "attempts": 0 }),
            json!({ "result": false, "word": "ВОЛНА", "attempts": 1 }),
        ] {
            assert!(matches!(
                GameReport::parse(&body(&bad)),
                Err(RelayError::MissingFields(_))
            ));
        }
    }

    #[test]
    fn parse_non_object_is_missing_fields() {
        assert!(matches!(
            GameReport::parse(b"[1, 2, 3]"),
            Err(RelayError::MissingFields(_))
        ));
    }

    #[test]
    fn parse_keeps_unexpected_types_verbatim() {
        let report = GameReport::parse(r#"{"result":"win","word":"СЛОВО","attempts":"3"}"#.as_bytes())
            .unwrap();
        assert_eq!(report.attempts, json!("3"));

        let report = GameReport::parse(&body(&json!({
            "result": 1,
            "word": "ВОЛНА",
            "attempts": -1
        })))
        .unwrap();
        assert_eq!(report.result, json!(1));
        assert_eq!(report.attempts, json!(-1));

        let payload = serde_json::to_value(WebhookPayload::from(report)).unwrap();
        assert_eq!(
            payload,
            json!({ "result": 1, "word": "ВОЛНА", "attempts": -1 })
        );
    }

    #[test]
    fn parse_garbage_is_invalid_json() {
        assert!(matches!(
            GameReport::parse(b"not json"),
            Err(RelayError::InvalidJson(_))
        ));
        assert!(matches!(GameReport::parse(b""), Err(RelayError::InvalidJson(_))));
    }

    #[test]
    fn payload_omits_absent_optionals() {
        let report = GameReport::parse(&body(&json!({
            "result": "win",
            "word": "СЛОВО",
            "attempts": 2
        })))
        .unwrap();

        let payload = serde_json::to_value(WebhookPayload::from(report)).unwrap();
        assert_eq!(
            payload,
            json!({ "result": "win", "word": "СЛОВО", "attempts": 2 })
        );
    }

    #[test]
    fn from_result_fills_every_field() {
        let result = GameResult::new(Outcome::Lose, "СЛОВО", 6, Duration::from_secs(90));
        let report = GameReport::from_result(&result, Some("777"));

        assert_eq!(report.result, json!("lose"));
        assert_eq!(report.word, json!("СЛОВО"));
        assert_eq!(report.attempts, json!(6));
        assert_eq!(report.telegram_id, Some(json!(777)));
        assert_eq!(report.duration, Some(json!(90)));
        assert!(report.timestamp.is_some());
    }

    #[test]
    fn from_result_keeps_text_ids_as_strings() {
        let result = GameResult::new(Outcome::Win, "СЛОВО", 1, Duration::ZERO);
        let report = GameReport::from_result(&result, Some("@player"));
        assert_eq!(report.telegram_id, Some(json!("@player")));

        let report = GameReport::from_result(&result, None);
        assert!(report.telegram_id.is_none());
    }
}
