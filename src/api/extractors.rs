use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::api::errors::ApiError;
use crate::domain::customer::CustomerId;

/// Customer id taken from the `:id` path segment
///
/// A segment that is not an integer matches no customer route, so it is
/// answered with 404 and the usual `{"error": ...}` body.
pub struct CustomerIdPath(pub CustomerId);

#[async_trait]
impl<S> FromRequestParts<S> for CustomerIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<CustomerId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Unparseable customer id");
                ApiError::not_found("customer id must be an integer")
            })?;

        Ok(CustomerIdPath(id))
    }
}
