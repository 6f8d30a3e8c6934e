// Infrastructure layer - Storage, configuration and rendering adapters
pub mod config;
pub mod http_response;
pub mod memory_store;
pub mod template;
