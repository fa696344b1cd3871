//! Canned "intelligence": fixed lookup tables keyed on item identity or
//! keyword, each with a total fallback. Nothing here has side effects.

pub mod chat_responder;
pub mod documents;
pub mod responses;

pub use chat_responder::{respond, welcome_message, CannedAnswer, ChatContext, QUICK_QUESTIONS};
pub use documents::{documents_for, loan_summary};
pub use responses::{draft_response, title_case_local_part};
