//! HTTP adapters - REST API implementations.
//!
//! Each area has its own DTOs, handlers and routes; [`router::app`]
//! assembles them over one shared [`AppState`].

pub mod client;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod extract;
pub mod initiative;
pub mod mentorship;
pub mod params;
pub mod portal;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorResponse, SuccessResponse};
pub use extract::ApiJson;
pub use router::{api_router, app};
pub use state::AppState;
