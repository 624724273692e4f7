use color_match::MatchOutcome;
use serde::Serialize;

use crate::error::AppError;

/// JSON shape of one match result.
///
/// A match serializes as `{"colour": "navy", "distance": 0.17}`, anything
/// else as `{"errors": ["..."]}`. When several images are matched at once the
/// image path is added as `"image"`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(flatten)]
    pub body: ResponseBody,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ResponseBody {
    Found { colour: String, distance: f64 },
    Errors { errors: Vec<String> },
}

impl ResponseBody {
    pub fn is_found(&self) -> bool {
        matches!(self, ResponseBody::Found { .. })
    }
}

impl From<&MatchOutcome> for ResponseBody {
    fn from(outcome: &MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Match { name, distance } => ResponseBody::Found {
                colour: name.clone(),
                distance: *distance,
            },
            MatchOutcome::NoMatch { max_distance, .. } => ResponseBody::Errors {
                errors: vec![format!("No colour found within {max_distance} units")],
            },
        }
    }
}

impl From<&AppError> for ResponseBody {
    fn from(error: &AppError) -> Self {
        ResponseBody::Errors {
            errors: vec![error.public_message()],
        }
    }
}

impl MatchResponse {
    pub fn new(image: Option<String>, body: ResponseBody) -> Self {
        Self { image, body }
    }

    pub fn from_result(image: Option<String>, result: &Result<MatchOutcome, AppError>) -> Self {
        let body = match result {
            Ok(outcome) => ResponseBody::from(outcome),
            Err(error) => ResponseBody::from(error),
        };
        Self::new(image, body)
    }
}
