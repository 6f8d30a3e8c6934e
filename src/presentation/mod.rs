// Presentation layer - HTTP surface
pub mod app_state;
pub mod errors;
pub mod handlers;
pub mod routes;
