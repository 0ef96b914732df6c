//! Works gallery page state.

pub mod controller;
pub mod view;

pub use controller::WorksController;
pub use view::WorksView;
