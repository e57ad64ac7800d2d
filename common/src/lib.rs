pub mod api;
pub mod block;
pub mod config;
pub mod validation;
