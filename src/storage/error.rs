use derive_more::{Display, From};
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum Error {
	FileRead { path: PathBuf, cause: std::io::Error },
	FileWrite { path: PathBuf, cause: std::io::Error },
	FileInvalidJson { path: PathBuf, cause: serde_json::Error },

	#[from]
	Json(serde_json::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
