//! HTTP API module for the Wage Projection Engine.
//!
//! This module exposes the projection engine, the loss report and the
//! narrative insights over REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ProjectionRequest;
pub use response::{ApiError, ApiErrorResponse, InsightsResponse, SchedulesResponse};
pub use state::AppState;
