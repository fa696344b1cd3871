pub mod app;
pub mod components;
pub mod format;
pub mod layout;
pub mod services;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::{App, InputMode};
pub use terminal::{init as init_terminal, install_panic_hook, restore as restore_terminal, Tui};
