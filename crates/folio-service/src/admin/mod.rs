//! Admin panel services.

pub mod auth;
pub mod form;

pub use auth::AdminAuth;
pub use form::ProjectForm;
