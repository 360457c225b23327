//! Customers API Library
//!
//! A layered CRUD service: HTTP boundary, request mediator, handlers and an
//! in-memory store. The [`mediator`] module holds the dispatch core: typed
//! handler registry, validation gate and the [`Outcome`](mediator::Outcome)
//! model shared by every operation.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod mediator;
pub mod telemetry;
