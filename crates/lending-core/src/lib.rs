pub mod agent;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod landing;
pub mod models;
pub mod seed;
pub mod store;
pub mod tracing_setup;
pub mod workflow;

pub use config::CoreConfig;
pub use dashboard::{ChatPanel, Dashboard, Page};
pub use error::CoreError;
pub use events::CoreEvent;
