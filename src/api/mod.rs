//! HTTP API module for the voucher engine.
//!
//! This module provides the REST API endpoint for processing one voucher
//! batch end-to-end.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ProcessRequest, SourceTableRequest};
pub use response::{ApiError, ProcessResponse};
pub use state::AppState;
