//! Project domain entities.

pub mod case_study;
pub mod category;
pub mod image;
pub mod model;

pub use case_study::CaseStudy;
pub use category::Category;
pub use image::{ImageSource, ImageUpload};
pub use model::{Project, ProjectInput, ProjectPatch};
