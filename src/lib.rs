//! Data-access layer for the certificate administration dashboard.
//!
//! All resource services (certificates, QR codes, courses, partners, signatories,
//! students, users, audits) go through the single request helper of [`Client`],
//! which injects the bearer token, shapes the request per HTTP verb, and normalizes
//! HTTP failures into [`ApiError`].
//!
//! ```no_run
//! # async fn run() -> certadmin::Result<()> {
//! use certadmin::{Client, ClientConfig};
//!
//! let client = Client::builder().with_config(ClientConfig::from_env()?).build()?;
//! let certificates = client.certificates().get_certificates(None).await?;
//! # Ok(())
//! # }
//! ```

// region:    --- Modules

mod client;
mod error;

// -- Flatten
pub use client::*;
pub use error::{Error, Result};

// -- Public Modules
pub mod resolver;
pub mod services;
pub mod storage;
pub mod store;
pub mod webc;

// endregion: --- Modules
