//! # folio-service
//!
//! Application services for the Folio portfolio site: the two project
//! repositories (bundled snapshot and local store), the query layer that
//! derives category views, the works-page controller, the case-study
//! route, and the demo admin gate.
//!
//! Services follow constructor injection: the key-value store and event
//! bus are handed in at construction time so tests can swap in fakes.

pub mod admin;
pub mod case_study;
pub mod context;
pub mod events;
pub mod query;
pub mod repository;
pub mod works;

pub use admin::{AdminAuth, ProjectForm};
pub use case_study::CaseStudyRoute;
pub use context::SiteContext;
pub use events::EventBus;
pub use query::CategoryCounts;
pub use repository::{BackendKind, DeleteOutcome, ProjectRepository};
pub use works::{WorksController, WorksView};
