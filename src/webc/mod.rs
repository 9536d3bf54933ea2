//! The `webc` module contains a thin HTTP layer on top of `reqwest`.
//! It sends the request shaped by the client and hands back the raw status and body.
//! Status interpretation belongs to `Client`, not here.

// region:    --- Modules

mod error;
mod query;
mod web_client;

pub use error::Error;
pub use query::*;
pub use web_client::*;

type Result<T> = core::result::Result<T, Error>;

// endregion: --- Modules
