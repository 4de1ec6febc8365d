//! HTTP Layer - 日志文件 RESTful API

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{apply_middleware, build_router, HttpServer, ServerConfig};
pub use state::AppState;
