use axum::{
    extract::State,
    response::Response,
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::extractors::CustomerIdPath;
use crate::api::responses;
use crate::api::router::AppState;
use crate::application::customer::{
    AddCustomerRequest, AddCustomerResponse, DeleteCustomerRequest, GetCustomerRequest, GetCustomerResponse,
    ListCustomerRequest, ListCustomerResponse, UpdateCustomerRequest,
};

/// Request body for renaming a customer; the id comes from the path
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerBody {
    #[serde(default)]
    pub name: String,
}

/// Create a customer
///
/// POST /customers
pub async fn add_customer(
    State(state): State<AppState>,
    Json(req): Json<AddCustomerRequest>,
) -> Result<Response, ApiError> {
    let outcome = state
        .mediator
        .handle_with::<_, AddCustomerResponse>(req)
        .await
        .map_err(|e| state.fault(e))?;

    Ok(responses::created(outcome))
}

/// Get a customer by ID
///
/// GET /customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    CustomerIdPath(id): CustomerIdPath,
) -> Result<Response, ApiError> {
    let outcome = state
        .mediator
        .handle_with::<_, GetCustomerResponse>(GetCustomerRequest::new(id))
        .await
        .map_err(|e| state.fault(e))?;

    Ok(responses::fetched(outcome))
}

/// List all customers
///
/// GET /customers
pub async fn list_customers(State(state): State<AppState>) -> Result<Response, ApiError> {
    let outcome = state
        .mediator
        .handle_with::<_, ListCustomerResponse>(ListCustomerRequest)
        .await
        .map_err(|e| state.fault(e))?;

    Ok(responses::fetched(outcome))
}

/// Rename a customer
///
/// PUT /customers/:id
pub async fn update_customer(
    State(state): State<AppState>,
    CustomerIdPath(id): CustomerIdPath,
    Json(body): Json<UpdateCustomerBody>,
) -> Result<Response, ApiError> {
    let outcome = state
        .mediator
        .handle(UpdateCustomerRequest::new(id, body.name))
        .await
        .map_err(|e| state.fault(e))?;

    Ok(responses::completed(outcome))
}

/// Delete a customer
///
/// DELETE /customers/:id
pub async fn delete_customer(
    State(state): State<AppState>,
    CustomerIdPath(id): CustomerIdPath,
) -> Result<Response, ApiError> {
    let outcome = state
        .mediator
        .handle(DeleteCustomerRequest::new(id))
        .await
        .map_err(|e| state.fault(e))?;

    Ok(responses::completed(outcome))
}
