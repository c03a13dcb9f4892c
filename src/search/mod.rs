pub mod controller;
pub mod query;
pub mod view;

pub use controller::{ResultsController, ResultsStatus};
pub use query::SearchQuery;
