mod client;
mod fetch_error;
pub mod models;
pub mod query;
pub mod view;

pub use client::{EstateClient, EstateSource};
pub use fetch_error::FetchError;
pub use models::{Estate, Info, ResponseEnvelope};
pub use query::EstateQuery;
pub use view::{EstateView, SharedView, ViewState};
