// Customer domain module

#![allow(clippy::module_inception)]

pub mod customer;

pub use customer::{Customer, CustomerId};
