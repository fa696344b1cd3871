pub mod activity;
pub mod chat;
pub mod document;
pub mod draft;
pub mod inbox;
pub mod notice;

pub use activity::{ActivityEntry, ActivityKind};
pub use chat::{ChatAuthor, ChatMessage};
pub use document::{AnalysisStatus, DocumentDescriptor, DocumentKind, LoanSummary};
pub use draft::DraftState;
pub use inbox::{split_address, InboxItem, ItemStatus, Priority, RequestType};
pub use notice::{Notice, NoticeLevel};
