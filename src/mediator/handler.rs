use async_trait::async_trait;

use super::errors::HandlerFault;
use super::outcome::{Outcome, ValueOutcome};

/// Handles a request that produces no payload
///
/// Expected rejections are returned as [`Outcome::Failure`]; anything that
/// goes wrong underneath (store unavailable, defect) is an `Err`.
#[async_trait]
pub trait Handler<R>: Send + Sync
where
    R: Send + 'static,
{
    async fn handle(&self, request: R) -> Result<Outcome, HandlerFault>;
}

/// Handles a request that produces a `T` payload
#[async_trait]
pub trait ResponseHandler<R, T>: Send + Sync
where
    R: Send + 'static,
    T: Send + 'static,
{
    async fn handle(&self, request: R) -> Result<ValueOutcome<T>, HandlerFault>;
}
