// API layer module (adapters for controllers)
// Translates HTTP to mediator requests and outcomes back to HTTP

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod router;

pub use router::{router, AppState};
