//! The dashboard controller.
//!
//! `Dashboard` owns every piece of view state (page, inbox, selection,
//! processing run, draft, chat logs, notice, activity feed) plus the
//! scheduler that drives the simulated timers. It is single-threaded: the
//! front end calls actions in response to input and [`Dashboard::advance`]
//! with the elapsed time on every tick.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Local;
use tracing::{debug, info};

use crate::agent::{documents_for, draft_response, respond, welcome_message, ChatContext, QUICK_QUESTIONS};
use crate::config::CoreConfig;
use crate::constants::SENT_NOTICE;
use crate::error::CoreError;
use crate::events::CoreEvent;
use crate::landing::{self, TileStatus};
use crate::models::{
    ActivityKind, ChatAuthor, ChatMessage, DocumentDescriptor, DraftState, InboxItem, ItemStatus, Notice,
};
use crate::seed::{pending_arrivals, seed_inbox};
use crate::store::{ActivityLog, ChatStore, InboxStore};
use crate::workflow::processing::DOCUMENT_RETRIEVAL_STAGE;
use crate::workflow::{ArrivalSimulator, ProcessingAnimator, Scheduler, StepOutcome, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Inbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChatPanel {
    pub open: bool,
    pub minimized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Timer {
    Arrival,
    ProcessingStep,
    ChatReply { item_id: u32, question: String },
    NoticeExpiry,
}

pub struct Dashboard {
    config: CoreConfig,
    page: Page,
    inbox: InboxStore,
    arrivals: ArrivalSimulator,
    processing: ProcessingAnimator,
    draft: DraftState,
    chats: ChatStore,
    chat_panel: ChatPanel,
    notice: Option<Notice>,
    activity: ActivityLog,
    scheduler: Scheduler<Timer>,
    selected: Option<u32>,
    arrival_task: Option<TaskId>,
    processing_task: Option<TaskId>,
    notice_task: Option<TaskId>,
    /// Outstanding chat replies per item
    pending_replies: HashMap<u32, usize>,
}

impl Dashboard {
    /// Dashboard over the built-in demo inbox
    pub fn new(config: CoreConfig) -> Self {
        Self::with_items(config, seed_inbox(), pending_arrivals())
    }

    pub fn with_items(
        config: CoreConfig,
        initial: impl IntoIterator<Item = InboxItem>,
        pending: impl IntoIterator<Item = InboxItem>,
    ) -> Self {
        let arrivals = ArrivalSimulator::new(pending, config.inbox_capacity);
        Self {
            page: Page::Landing,
            inbox: InboxStore::from_items(initial),
            arrivals,
            processing: ProcessingAnimator::new(),
            draft: DraftState::new(),
            chats: ChatStore::new(),
            chat_panel: ChatPanel::default(),
            notice: None,
            activity: ActivityLog::new(),
            scheduler: Scheduler::new(),
            selected: None,
            arrival_task: None,
            processing_task: None,
            notice_task: None,
            pending_replies: HashMap::new(),
            config,
        }
    }

    // ===== Accessors =====

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn inbox(&self) -> &InboxStore {
        &self.inbox
    }

    pub fn items(&self) -> &[InboxItem] {
        self.inbox.items()
    }

    pub fn arrivals(&self) -> &ArrivalSimulator {
        &self.arrivals
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&InboxItem> {
        self.selected.and_then(|id| self.inbox.get(id))
    }

    pub fn processing(&self) -> &ProcessingAnimator {
        &self.processing
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn chat_panel(&self) -> ChatPanel {
        self.chat_panel
    }

    /// Time fed in through [`Self::advance`] so far
    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    /// Documents on file for the selected request
    pub fn selected_documents(&self) -> Vec<DocumentDescriptor> {
        self.selected_item()
            .map(|item| documents_for(item.id, &item.from, &item.loan_account))
            .unwrap_or_default()
    }

    /// Chat history for the selected request
    pub fn chat_messages(&self) -> &[ChatMessage] {
        match self.selected {
            Some(id) => self.chats.messages(id),
            None => &[],
        }
    }

    /// The agent is "typing" while a reply for the selected item is outstanding
    pub fn is_typing(&self) -> bool {
        self.selected
            .and_then(|id| self.pending_replies.get(&id))
            .is_some_and(|count| *count > 0)
    }

    pub fn quick_questions_visible(&self) -> bool {
        self.selected.is_some() && self.chat_messages().len() <= 1
    }

    /// The selected item's run has finished and its draft may be sent
    pub fn can_send(&self) -> bool {
        let Some(item) = self.selected_item() else {
            return false;
        };
        self.processing.is_completed()
            && self.processing.item_id() == Some(item.id)
            && self.draft.has_draft()
            && !self.draft.is_editing()
            && item.status != ItemStatus::Completed
    }

    // ===== Navigation =====

    /// Show the inbox and start the arrival timer
    pub fn open_inbox(&mut self) {
        self.page = Page::Inbox;
        self.arrivals.activate();
        if self.arrival_task.is_none() && !self.arrivals.is_exhausted() {
            let period = self.config.arrival_interval();
            self.arrival_task = Some(self.scheduler.schedule_repeating(Timer::Arrival, period));
        }
        info!(pending = self.arrivals.pending_len(), "Opened inbox");
    }

    /// Return to the landing page; arrivals stop until the inbox is reopened
    pub fn back_to_landing(&mut self) {
        self.page = Page::Landing;
        self.arrivals.deactivate();
        if let Some(task) = self.arrival_task.take() {
            self.scheduler.cancel(task);
        }
        debug!("Back to landing page");
    }

    /// Open a landing tile. Returns true when it navigated somewhere.
    pub fn activate_tile(&mut self, tile_id: &str) -> bool {
        match landing::tile(tile_id) {
            Some(tile) if tile.status == TileStatus::Active => {
                self.open_inbox();
                true
            }
            Some(tile) => {
                self.show_notice(Notice::info(tile.unavailable_notice));
                false
            }
            None => false,
        }
    }

    // ===== Selection and processing =====

    /// Select a visible item. Switching items discards any run in flight.
    pub fn select_item(&mut self, id: u32) -> Result<(), CoreError> {
        if !self.inbox.contains(id) {
            return Err(CoreError::UnknownItem(id));
        }
        if self.selected == Some(id) {
            return Ok(());
        }

        if let Some(previous) = self.selected {
            let in_flight =
                self.processing.is_processing() && self.processing.item_id() == Some(previous);
            if in_flight
                && self.inbox.set_status(previous, ItemStatus::Pending) == Some(ItemStatus::Processing)
            {
                self.record(
                    ActivityKind::StatusChange {
                        from: ItemStatus::Processing,
                        to: ItemStatus::Pending,
                    },
                    previous,
                );
                debug!(item_id = previous, "Discarded in-flight run");
            }
        }
        self.cancel_processing_task();
        self.processing.reset();
        self.draft.clear();
        self.selected = Some(id);
        info!(item_id = id, "Selected item");
        Ok(())
    }

    /// Start the agent on the selected item. No-op while a run is in flight.
    pub fn start_processing(&mut self) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        if self.processing.is_processing() {
            return false;
        }

        self.processing.start(id);
        self.draft.clear();
        self.inbox.clear_new(id);
        if let Some(previous) = self.inbox.set_status(id, ItemStatus::Processing) {
            if previous != ItemStatus::Processing {
                self.record(
                    ActivityKind::StatusChange {
                        from: previous,
                        to: ItemStatus::Processing,
                    },
                    id,
                );
            }
        }

        self.cancel_processing_task();
        let period = self.config.stage_interval();
        self.processing_task = Some(self.scheduler.schedule_repeating(Timer::ProcessingStep, period));
        info!(item_id = id, "Processing started");
        true
    }

    // ===== Draft =====

    pub fn start_editing(&mut self) -> bool {
        self.draft.start_editing()
    }

    pub fn edit_buffer_mut(&mut self) -> Option<&mut String> {
        self.draft.edit_buffer_mut()
    }

    pub fn save_edits(&mut self) -> bool {
        self.draft.save_edits()
    }

    pub fn cancel_edits(&mut self) -> bool {
        self.draft.cancel_edits()
    }

    /// Send the completed draft; marks the item completed and shows a notice
    pub fn send_response(&mut self) -> bool {
        if !self.can_send() {
            return false;
        }
        let Some(id) = self.selected else {
            return false;
        };

        if let Some(previous) = self.inbox.set_status(id, ItemStatus::Completed) {
            self.record(
                ActivityKind::StatusChange {
                    from: previous,
                    to: ItemStatus::Completed,
                },
                id,
            );
        }
        self.record(ActivityKind::EmailSent, id);
        self.show_notice(Notice::success(SENT_NOTICE));
        info!(item_id = id, "Response sent");
        true
    }

    // ===== Chat =====

    /// Open the chat panel, greeting the operator on first open for an item
    pub fn open_chat(&mut self) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        self.chat_panel = ChatPanel {
            open: true,
            minimized: false,
        };

        let greeting_needed = self.chats.log(id).map_or(true, |log| log.is_empty());
        if let Some(item) = self.inbox.get(id).filter(|_| greeting_needed) {
            let documents = documents_for(item.id, &item.from, &item.loan_account);
            let welcome = welcome_message(&ChatContext {
                sender: &item.from,
                loan_account: &item.loan_account,
                documents: &documents,
            });
            self.chats
                .log_mut(id)
                .append(ChatAuthor::Agent, welcome.body, welcome.related_documents, Local::now());
        }
        true
    }

    pub fn close_chat(&mut self) {
        self.chat_panel = ChatPanel::default();
    }

    pub fn toggle_chat_minimized(&mut self) {
        if self.chat_panel.open {
            self.chat_panel.minimized = !self.chat_panel.minimized;
        }
    }

    /// Post a question for the selected item; the answer arrives after the reply delay.
    /// Blank input is ignored.
    pub fn submit_chat(&mut self, text: &str) -> bool {
        let question = text.trim();
        if question.is_empty() {
            return false;
        }
        let Some(id) = self.selected else {
            return false;
        };

        self.chats
            .log_mut(id)
            .append(ChatAuthor::User, question.to_string(), Vec::new(), Local::now());
        let delay = self.config.chat_reply_delay();
        self.scheduler.schedule_once(
            Timer::ChatReply {
                item_id: id,
                question: question.to_string(),
            },
            delay,
        );
        *self.pending_replies.entry(id).or_insert(0) += 1;
        debug!(item_id = id, "Chat question queued");
        true
    }

    pub fn ask_quick_question(&mut self, index: usize) -> bool {
        match QUICK_QUESTIONS.get(index) {
            Some(question) => self.submit_chat(question),
            None => false,
        }
    }

    // ===== Notices =====

    /// Show a notice, replacing any current one and restarting its expiry
    pub fn show_notice(&mut self, notice: Notice) {
        if let Some(task) = self.notice_task.take() {
            self.scheduler.cancel(task);
        }
        let duration = self.config.notice_duration();
        self.notice_task = Some(self.scheduler.schedule_once(Timer::NoticeExpiry, duration));
        self.notice = Some(notice);
    }

    // ===== Timers =====

    /// Feed elapsed time in and run every timer that came due, in due order
    pub fn advance(&mut self, elapsed: Duration) -> Vec<CoreEvent> {
        self.scheduler.advance(elapsed);
        let mut events = Vec::new();
        while let Some(firing) = self.scheduler.poll() {
            match firing.kind {
                Timer::Arrival => self.on_arrival(&mut events),
                Timer::ProcessingStep => self.on_processing_step(&mut events),
                Timer::ChatReply { item_id, question } => self.on_chat_reply(item_id, &question, &mut events),
                Timer::NoticeExpiry => {
                    self.notice = None;
                    self.notice_task = None;
                    events.push(CoreEvent::NoticeExpired);
                }
            }
        }
        events
    }

    fn on_arrival(&mut self, events: &mut Vec<CoreEvent>) {
        let at_ms = u64::try_from(self.scheduler.now().as_millis()).unwrap_or(u64::MAX);
        debug!(at_ms, "Arrival tick");
        if let Some(id) = self.arrivals.tick(&mut self.inbox) {
            self.record(ActivityKind::EmailReceived, id);
            events.push(CoreEvent::ItemArrived { item_id: id });
            info!(item_id = id, "New request arrived");
        }
        if self.arrivals.is_exhausted() {
            if let Some(task) = self.arrival_task.take() {
                self.scheduler.cancel(task);
            }
        }
    }

    fn on_processing_step(&mut self, events: &mut Vec<CoreEvent>) {
        let Some(id) = self.processing.item_id() else {
            self.cancel_processing_task();
            return;
        };

        match self.processing.tick() {
            StepOutcome::Idle => self.cancel_processing_task(),
            StepOutcome::Advanced { stage } => {
                debug!(item_id = id, stage, "Processing stage advanced");
                if stage == DOCUMENT_RETRIEVAL_STAGE + 1 {
                    self.record(ActivityKind::DocumentsAnalyzed, id);
                }
                events.push(CoreEvent::StageAdvanced { item_id: id, stage });
            }
            StepOutcome::Completed => {
                self.cancel_processing_task();
                if let Some(item) = self.inbox.get(id) {
                    let text = draft_response(item.id, &item.from, &item.loan_account);
                    self.draft.set_generated(text);
                }
                self.record(ActivityKind::ResponseGenerated, id);
                events.push(CoreEvent::ProcessingCompleted { item_id: id });
                info!(item_id = id, "Processing completed");
            }
        }
    }

    fn on_chat_reply(&mut self, item_id: u32, question: &str, events: &mut Vec<CoreEvent>) {
        if let Some(count) = self.pending_replies.get_mut(&item_id) {
            *count = count.saturating_sub(1);
        }
        let Some(item) = self.inbox.get(item_id) else {
            return;
        };

        let documents = documents_for(item.id, &item.from, &item.loan_account);
        let answer = respond(
            question,
            &ChatContext {
                sender: &item.from,
                loan_account: &item.loan_account,
                documents: &documents,
            },
        );
        debug!(item_id, rule = ?answer.rule, "Agent replied");
        let message_id =
            self.chats
                .log_mut(item_id)
                .append(ChatAuthor::Agent, answer.body, answer.related_documents, Local::now());
        events.push(CoreEvent::AgentReplied { item_id, message_id });
    }

    fn cancel_processing_task(&mut self) {
        if let Some(task) = self.processing_task.take() {
            self.scheduler.cancel(task);
        }
    }

    fn record(&mut self, kind: ActivityKind, item_id: u32) {
        if let Some(item) = self.inbox.get(item_id) {
            let timestamp = Local::now().format("%H:%M:%S").to_string();
            self.activity.record(kind, item, timestamp);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::ProcessingStatus;

    const SECOND: Duration = Duration::from_secs(1);

    fn dashboard() -> Dashboard {
        Dashboard::new(CoreConfig::default())
    }

    fn ticks(dashboard: &mut Dashboard, n: usize, step: Duration) -> Vec<CoreEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(dashboard.advance(step));
        }
        events
    }

    #[test]
    fn test_starts_on_landing_with_seed() {
        let dashboard = dashboard();
        assert_eq!(dashboard.page(), Page::Landing);
        assert_eq!(dashboard.items().len(), 3);
        assert!(dashboard.selected_item().is_none());
        assert!(dashboard.notice().is_none());
    }

    #[test]
    fn test_no_arrivals_on_landing() {
        let mut dashboard = dashboard();
        let events = dashboard.advance(Duration::from_secs(60));
        assert!(events.is_empty());
        assert_eq!(dashboard.items().len(), 3);
    }

    #[test]
    fn test_end_to_end_arrival_and_processing() {
        let mut dashboard = dashboard();
        dashboard.open_inbox();

        let events = dashboard.advance(Duration::from_secs(15));
        assert_eq!(events, vec![CoreEvent::ItemArrived { item_id: 4 }]);
        assert_eq!(dashboard.items().len(), 4);
        assert_eq!(dashboard.items()[0].id, 4);
        assert!(dashboard.items()[0].is_new);

        dashboard.select_item(4).unwrap();
        assert!(dashboard.start_processing());
        assert_eq!(dashboard.selected_item().unwrap().status, ItemStatus::Processing);
        assert!(!dashboard.selected_item().unwrap().is_new);

        let events = ticks(&mut dashboard, 6, SECOND);
        assert_eq!(events.last(), Some(&CoreEvent::ProcessingCompleted { item_id: 4 }));
        assert_eq!(dashboard.processing().status(), ProcessingStatus::Completed);
        assert_eq!(dashboard.processing().stage(), 6);
        assert_eq!(
            dashboard.draft().text(),
            draft_response(4, "lisa.chen@manufactureplus.com", "LC-2024-0089")
        );
        assert!(dashboard.draft().text().contains("Lisa Chen"));

        // Timer is gone; further time does nothing to the run
        let later = dashboard.advance(Duration::from_secs(5));
        assert!(!later.iter().any(|e| matches!(e, CoreEvent::StageAdvanced { .. })));
    }

    #[test]
    fn test_large_delta_fires_arrivals_up_to_capacity() {
        let mut dashboard = dashboard();
        dashboard.open_inbox();
        let events = dashboard.advance(Duration::from_secs(120));
        let arrived: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                CoreEvent::ItemArrived { item_id } => Some(*item_id),
                _ => None,
            })
            .collect();
        assert_eq!(arrived, vec![4, 5, 7]);
        assert_eq!(dashboard.items().len(), 6);
        assert!(dashboard.arrivals().is_exhausted());
    }

    #[test]
    fn test_leaving_inbox_stops_arrivals() {
        let mut dashboard = dashboard();
        dashboard.open_inbox();
        dashboard.advance(Duration::from_secs(10));
        dashboard.back_to_landing();
        dashboard.advance(Duration::from_secs(30));
        assert_eq!(dashboard.items().len(), 3);

        // Period restarts on re-entry
        dashboard.open_inbox();
        dashboard.advance(Duration::from_secs(14));
        assert_eq!(dashboard.items().len(), 3);
        dashboard.advance(SECOND);
        assert_eq!(dashboard.items().len(), 4);
    }

    #[test]
    fn test_select_unknown_item() {
        let mut dashboard = dashboard();
        let err = dashboard.select_item(42).unwrap_err();
        assert!(matches!(err, CoreError::UnknownItem(42)));
    }

    #[test]
    fn test_reselect_discards_run() {
        let mut dashboard = dashboard();
        dashboard.select_item(1).unwrap();
        dashboard.start_processing();
        ticks(&mut dashboard, 3, SECOND);
        assert_eq!(dashboard.processing().stage(), 3);

        dashboard.select_item(2).unwrap();
        assert_eq!(dashboard.processing().status(), ProcessingStatus::Idle);
        assert_eq!(dashboard.processing().stage(), 0);
        assert_eq!(dashboard.inbox().get(1).unwrap().status, ItemStatus::Pending);

        let events = ticks(&mut dashboard, 10, SECOND);
        assert!(events.is_empty());
        assert_eq!(dashboard.processing().stage(), 0);
        assert!(!dashboard.draft().has_draft());

        let newest = dashboard.activity().entries().next().unwrap();
        assert_eq!(newest.item_id, 1);
        assert_eq!(
            newest.kind,
            ActivityKind::StatusChange {
                from: ItemStatus::Processing,
                to: ItemStatus::Pending
            }
        );
    }

    #[test]
    fn test_reselect_after_completed_run_keeps_status() {
        let mut dashboard = dashboard();
        dashboard.select_item(1).unwrap();
        dashboard.start_processing();
        ticks(&mut dashboard, 6, SECOND);
        assert!(dashboard.processing().is_completed());

        dashboard.select_item(3).unwrap();
        assert_eq!(dashboard.inbox().get(1).unwrap().status, ItemStatus::Processing);
        let newest = dashboard.activity().entries().next().unwrap();
        assert_eq!(newest.kind, ActivityKind::ResponseGenerated);
    }

    #[test]
    fn test_start_while_processing_is_noop() {
        let mut dashboard = dashboard();
        dashboard.select_item(1).unwrap();
        assert!(dashboard.start_processing());
        ticks(&mut dashboard, 2, SECOND);
        assert!(!dashboard.start_processing());
        assert_eq!(dashboard.processing().stage(), 2);
    }

    #[test]
    fn test_restart_from_completed() {
        let mut dashboard = dashboard();
        dashboard.select_item(1).unwrap();
        dashboard.start_processing();
        ticks(&mut dashboard, 6, SECOND);
        assert!(dashboard.processing().is_completed());

        assert!(dashboard.start_processing());
        assert_eq!(dashboard.processing().stage(), 0);
        assert!(!dashboard.draft().has_draft());
    }

    #[test]
    fn test_activity_milestones() {
        let mut dashboard = dashboard();
        dashboard.select_item(1).unwrap();
        dashboard.start_processing();
        ticks(&mut dashboard, 6, SECOND);
        assert!(dashboard.send_response());

        let kinds: Vec<_> = dashboard.activity().entries().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ActivityKind::EmailSent,
                ActivityKind::StatusChange {
                    from: ItemStatus::Processing,
                    to: ItemStatus::Completed
                },
                ActivityKind::ResponseGenerated,
                ActivityKind::DocumentsAnalyzed,
                ActivityKind::StatusChange {
                    from: ItemStatus::Pending,
                    to: ItemStatus::Processing
                },
            ]
        );
    }

    #[test]
    fn test_send_marks_completed_and_notice_expires() {
        let mut dashboard = dashboard();
        dashboard.select_item(1).unwrap();
        assert!(!dashboard.send_response());

        dashboard.start_processing();
        ticks(&mut dashboard, 6, SECOND);
        assert!(dashboard.send_response());
        assert_eq!(dashboard.selected_item().unwrap().status, ItemStatus::Completed);
        assert_eq!(dashboard.notice().unwrap().message, SENT_NOTICE);
        assert!(!dashboard.send_response());

        dashboard.advance(Duration::from_millis(2_999));
        assert!(dashboard.notice().is_some());
        let events = dashboard.advance(Duration::from_millis(1));
        assert_eq!(events, vec![CoreEvent::NoticeExpired]);
        assert!(dashboard.notice().is_none());
    }

    #[test]
    fn test_cannot_send_while_editing() {
        let mut dashboard = dashboard();
        dashboard.select_item(1).unwrap();
        dashboard.start_processing();
        ticks(&mut dashboard, 6, SECOND);

        assert!(dashboard.start_editing());
        dashboard.edit_buffer_mut().unwrap().push_str("\nThanks again.");
        assert!(!dashboard.send_response());
        assert!(dashboard.save_edits());
        assert!(dashboard.draft().text().ends_with("Thanks again."));
        assert!(dashboard.send_response());
    }

    #[test]
    fn test_coming_soon_tile_shows_notice() {
        let mut dashboard = dashboard();
        assert!(!dashboard.activate_tile("qc-validation"));
        assert_eq!(dashboard.page(), Page::Landing);
        assert_eq!(dashboard.notice().unwrap().message, "QC Module - Coming Soon");

        assert!(dashboard.activate_tile(landing::EMAIL_AGENT_TILE));
        assert_eq!(dashboard.page(), Page::Inbox);
    }

    #[test]
    fn test_chat_welcome_and_delayed_reply() {
        let mut dashboard = dashboard();
        dashboard.select_item(1).unwrap();
        assert!(dashboard.open_chat());
        assert_eq!(dashboard.chat_messages().len(), 1);
        assert!(dashboard.chat_messages()[0].is_from_agent());
        assert!(dashboard.quick_questions_visible());

        assert!(dashboard.submit_chat("What's the BALANCE?"));
        assert_eq!(dashboard.chat_messages().len(), 2);
        assert!(dashboard.is_typing());
        assert!(!dashboard.quick_questions_visible());

        dashboard.advance(Duration::from_millis(1_499));
        assert_eq!(dashboard.chat_messages().len(), 2);
        let events = dashboard.advance(Duration::from_millis(1));
        assert!(matches!(events.as_slice(), [CoreEvent::AgentReplied { item_id: 1, .. }]));

        let reply = &dashboard.chat_messages()[2];
        assert!(reply.is_from_agent());
        assert_eq!(reply.related_documents, vec!["Loan Agreement", "Payment Schedule"]);
        assert!(!dashboard.is_typing());
    }

    #[test]
    fn test_blank_chat_input_enqueues_nothing() {
        let mut dashboard = dashboard();
        dashboard.select_item(1).unwrap();
        dashboard.open_chat();
        assert!(!dashboard.submit_chat("   \n"));
        assert!(!dashboard.is_typing());
        assert!(dashboard.advance(Duration::from_secs(5)).is_empty());
        assert_eq!(dashboard.chat_messages().len(), 1);
    }

    #[test]
    fn test_chat_logs_survive_reselection() {
        let mut dashboard = dashboard();
        dashboard.select_item(1).unwrap();
        dashboard.open_chat();
        dashboard.ask_quick_question(4);
        dashboard.select_item(2).unwrap();
        dashboard.advance(Duration::from_secs(2));
        assert!(dashboard.chat_messages().is_empty());

        dashboard.select_item(1).unwrap();
        assert_eq!(dashboard.chat_messages().len(), 3);
        dashboard.open_chat();
        assert_eq!(dashboard.chat_messages().len(), 3);
    }

    #[test]
    fn test_multiple_outstanding_replies() {
        let mut dashboard = dashboard();
        dashboard.select_item(2).unwrap();
        dashboard.submit_chat("credit score?");
        dashboard.advance(Duration::from_millis(500));
        dashboard.submit_chat("maturity?");
        let events = dashboard.advance(Duration::from_secs(2));
        assert_eq!(events.len(), 2);
        assert_eq!(dashboard.chat_messages().len(), 4);
        assert_eq!(dashboard.chat_messages()[2].related_documents, vec!["Credit Report"]);
    }

    #[test]
    fn test_chat_minimize_toggle() {
        let mut dashboard = dashboard();
        dashboard.toggle_chat_minimized();
        assert!(!dashboard.chat_panel().minimized);
        assert!(!dashboard.open_chat());

        dashboard.select_item(3).unwrap();
        dashboard.open_chat();
        dashboard.toggle_chat_minimized();
        assert!(dashboard.chat_panel().minimized);
        dashboard.close_chat();
        assert!(!dashboard.chat_panel().open);
    }
}
