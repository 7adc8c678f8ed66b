mod attendance;
mod auth;
pub mod client;
mod employees;
mod tasks;
pub mod types;

pub use client::*;
pub use types::*;
