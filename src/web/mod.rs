pub mod search;
pub mod web;

pub use search::{SearchClient, SearchEngine};
pub use web::{get_payload, NetworkError};
