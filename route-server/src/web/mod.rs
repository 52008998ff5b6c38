//! Web layer for the route planner.
//!
//! Provides HTTP endpoints for looking up locations and finding the
//! cheapest route between two of them.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
