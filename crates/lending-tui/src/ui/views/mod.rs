mod activity;
mod chat;
mod details;
mod inbox;
mod landing;

pub use activity::render_activity;
pub use chat::render_chat_panel;
pub use details::render_details;
pub use inbox::render_inbox;
pub use landing::render_landing;
