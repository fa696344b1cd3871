pub mod handlers;
pub mod protocol;

pub use handlers::{execute, format_output};
pub use protocol::{CliCommand, SimulateOptions};
