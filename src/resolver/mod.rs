//! Resolvers for where requests go (`Endpoint`) and what happens when the session
//! expires (`Navigator`).

// region:    --- Modules

mod endpoint;
mod navigator;

pub use endpoint::*;
pub use navigator::*;

// endregion: --- Modules
