//! One service per REST resource of the dashboard API.
//!
//! Every method is a single call to `Client::request` with a literal path and the
//! verb implied by the REST convention. Nothing is validated or transformed here.
//!
//! Services borrow the client: `client.certificates().get_certificate(12).await?`.

// region:    --- Modules

mod resource;

mod audit_service;
mod certificate_service;
mod course_service;
mod partner_service;
mod qr_service;
mod signatory_service;
mod student_service;
mod user_service;

pub use resource::*;

pub use audit_service::*;
pub use certificate_service::*;
pub use course_service::*;
pub use partner_service::*;
pub use qr_service::*;
pub use signatory_service::*;
pub use student_service::*;
pub use user_service::*;

// endregion: --- Modules
