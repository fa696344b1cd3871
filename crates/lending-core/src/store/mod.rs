pub mod activity_store;
pub mod chat_store;
pub mod inbox_store;

pub use activity_store::ActivityLog;
pub use chat_store::{ChatLog, ChatStore};
pub use inbox_store::InboxStore;
