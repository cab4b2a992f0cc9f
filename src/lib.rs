pub mod config;
pub mod console;
pub mod pipeline;
pub mod presenter;
pub mod searchlibs;
pub mod store;
pub mod web;


pub use config::SearchConfig;
pub use pipeline::{RunOutcome, RunState, SearchPipeline};
pub use presenter::{BrowserSurface, DetailLauncher, HostView, ListPresenter, RowContent};
pub use searchlibs::{SearchError, SnackRecord};
pub use store::{IndexError, ResultStore};
pub use web::{NetworkError, SearchClient, SearchEngine};
