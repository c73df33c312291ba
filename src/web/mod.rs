//! Web module for eduboard.
//!
//! Two surfaces over the same service layer: server-rendered pages and a
//! JSON API mirror of the board operations.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod view;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
