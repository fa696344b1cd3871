//! Application-wide constants
//!
//! Default timings and limits for the simulated agent. Every timing here can
//! be overridden through [`crate::config::CoreConfig`].

/// Period between simulated email arrivals while the inbox is open
pub const ARRIVAL_INTERVAL_MS: u64 = 15_000;

/// Period between processing stage advances
pub const STAGE_INTERVAL_MS: u64 = 1_000;

/// Simulated "typing" latency before the chat agent answers
pub const CHAT_REPLY_DELAY_MS: u64 = 1_500;

/// How long a notice stays in the status bar
pub const NOTICE_DURATION_MS: u64 = 3_000;

/// The arrival simulator stops injecting once the inbox holds this many items
pub const INBOX_CAPACITY: usize = 7;

/// Maximum entries kept in the activity log (newest first)
pub const ACTIVITY_LOG_CAPACITY: usize = 20;

/// Operator shown in the landing page header
pub const DEFAULT_OPERATOR_NAME: &str = "Rachel Ji";

/// Signature used at the bottom of every drafted reply
pub const DEPARTMENT_SIGNATURE: &str = "Commercial Lending Department";

/// Notice shown after a drafted reply is sent
pub const SENT_NOTICE: &str = "Successfully Sent";

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "lending-agent";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";
