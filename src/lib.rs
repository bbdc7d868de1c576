pub mod config;
pub mod error;
pub mod fs_util;
pub mod gateway;
pub mod knowledge;
pub mod responder;
pub mod sentiment;
pub mod store;
pub mod types;
