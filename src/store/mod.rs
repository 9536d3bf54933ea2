//! Persisted UI state of the dashboard.
//!
//! Each store keeps its state in memory and writes it through to a `LocalStorage`
//! entry as JSON on every change, so it survives reloads.

// region:    --- Modules

mod dark_mode_store;
mod persisted;
mod user_store;

pub use dark_mode_store::*;
pub use persisted::*;
pub use user_store::*;

// endregion: --- Modules
