//! Admin domain entities.

pub mod session;

pub use session::AdminSession;
