//! Model Referee API Module
//!
//! The web shell: one route serving the questionnaire page, which renders the
//! recommendation and the comparison table when the form is submitted.

pub mod browser;
pub mod handlers;
pub mod models;
pub mod page;
pub mod server;

pub use handlers::*;
pub use models::*;
pub use server::*;
