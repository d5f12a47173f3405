//! HTTP gateway for the docsense service.

pub mod documents_api;
pub mod server;
pub mod state;
pub mod upload_api;

pub use server::{build_router, start_server};
pub use state::AppState;
