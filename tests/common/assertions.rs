//! Assertion helpers for tests.

use color_match::MatchOutcome;
use huematch::error::AppError;
use huematch::models::MatchResponse;
use pretty_assertions::assert_eq;

/// Assert the outcome is a match for `expected`
pub fn assert_matched(result: &Result<MatchOutcome, AppError>, expected: &str) {
    match result {
        Ok(MatchOutcome::Match { name, distance }) => {
            assert_eq!(name, expected, "Matched the wrong colour (distance {distance})");
        }
        other => panic!("Expected match for '{expected}', got {other:?}"),
    }
}

/// Assert the outcome is an exact match for `expected`
pub fn assert_exact(result: &Result<MatchOutcome, AppError>, expected: &str) {
    assert_matched(result, expected);
    if let Ok(outcome) = result {
        assert!(
            outcome.distance() < 1e-9,
            "Expected exact match, got distance {}",
            outcome.distance()
        );
    }
}

/// Assert the outcome is a rejection and return the nearest entry's name
pub fn assert_no_match(result: &Result<MatchOutcome, AppError>) -> String {
    match result {
        Ok(MatchOutcome::NoMatch {
            max_distance,
            nearest,
        }) => {
            assert!(
                nearest.distance > *max_distance,
                "Nearest {} at {} is within limit {max_distance}",
                nearest.name,
                nearest.distance
            );
            nearest.name.clone()
        }
        other => panic!("Expected no match, got {other:?}"),
    }
}

/// Assert the serialized response carries exactly one error message
pub fn assert_json_error(response: &MatchResponse, expected: &str) {
    let json = serde_json::to_value(response).expect("Response serializes");
    assert_eq!(
        json["errors"],
        serde_json::json!([expected]),
        "Unexpected response: {json}"
    );
    assert!(json.get("colour").is_none(), "Error response has a colour");
}
