pub mod config;
pub mod functions;
pub mod queries;
pub mod utils;
