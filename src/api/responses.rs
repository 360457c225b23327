use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::errors::ApiError;
use crate::mediator::{Outcome, ValueOutcome};

// Outcome -> HTTP translation, one function per verb shape.

/// POST: failure is 400, anything else is 200 with the payload
pub fn created<T: Serialize>(outcome: ValueOutcome<T>) -> Response {
    match outcome {
        ValueOutcome::Value(value) => (StatusCode::OK, Json(value)).into_response(),
        ValueOutcome::Empty => StatusCode::OK.into_response(),
        ValueOutcome::Failure(failure) => ApiError::from(failure).into_response(),
    }
}

/// GET: failure is 400, a value is 200, nothing found is 204
pub fn fetched<T: Serialize>(outcome: ValueOutcome<T>) -> Response {
    match outcome {
        ValueOutcome::Value(value) => (StatusCode::OK, Json(value)).into_response(),
        ValueOutcome::Empty => StatusCode::NO_CONTENT.into_response(),
        ValueOutcome::Failure(failure) => ApiError::from(failure).into_response(),
    }
}

/// PUT / DELETE: failure is 400, success is 200 without a body
pub fn completed(outcome: Outcome) -> Response {
    match outcome {
        Outcome::Success => StatusCode::OK.into_response(),
        Outcome::Failure(failure) => ApiError::from(failure).into_response(),
    }
}
