pub mod config;
pub mod logger;
pub mod server;
pub mod session;
mod gate;
mod generator;
mod post;
mod query_string;
mod seed;
mod store;
