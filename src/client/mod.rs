//! The client module: the shared request helper and everything it returns.

// region:    --- Modules

mod api_error;
mod api_response;
mod builder;
mod client_impl;
mod client_types;
mod config;

pub use api_error::*;
pub use api_response::*;
pub use builder::*;
pub use client_types::*;
pub use config::*;

// endregion: --- Modules
