//! label-service: read-only HTTP API over the Tayco `Labels` and
//! `OrderHeaders` collections.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
