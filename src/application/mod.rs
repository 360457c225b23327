// Application layer: use cases dispatched through the mediator

pub mod customer;
pub mod registration;
pub mod validators;

pub use registration::{build_mediator, verify_bindings};
