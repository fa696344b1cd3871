use serde::Serialize;

/// Scripted stages shown while the agent "works" on a request
pub const PROCESSING_STAGES: [&str; 6] = [
    "Analyzing email content",
    "Identifying loan account",
    "Retrieving relevant documents",
    "Reviewing loan terms",
    "Calculating payoff amount",
    "Drafting response",
];

/// Index of the stage after which documents count as analyzed
pub const DOCUMENT_RETRIEVAL_STAGE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    Idle,
    Processing,
    Completed,
}

/// How one stage should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Done,
    Active,
    Waiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not processing; the tick was ignored
    Idle,
    /// Moved to `stage`
    Advanced { stage: usize },
    /// Passed the final stage
    Completed,
}

/// Stepper for the processing sequence: `Idle -> Processing -> Completed`.
///
/// The stage index starts at 0, grows by exactly one per tick and never
/// exceeds the stage count.
#[derive(Debug, Clone)]
pub struct ProcessingAnimator {
    item_id: Option<u32>,
    stage: usize,
    status: ProcessingStatus,
}

impl ProcessingAnimator {
    pub fn new() -> Self {
        Self {
            item_id: None,
            stage: 0,
            status: ProcessingStatus::Idle,
        }
    }

    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn item_id(&self) -> Option<u32> {
        self.item_id
    }

    pub fn stage_count(&self) -> usize {
        PROCESSING_STAGES.len()
    }

    pub fn is_processing(&self) -> bool {
        self.status == ProcessingStatus::Processing
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProcessingStatus::Completed
    }

    /// Begin (or restart) a run for `item_id` at stage 0
    pub fn start(&mut self, item_id: u32) {
        self.item_id = Some(item_id);
        self.stage = 0;
        self.status = ProcessingStatus::Processing;
    }

    /// Drop any run and return to idle
    pub fn reset(&mut self) {
        self.item_id = None;
        self.stage = 0;
        self.status = ProcessingStatus::Idle;
    }

    pub fn tick(&mut self) -> StepOutcome {
        if self.status != ProcessingStatus::Processing {
            return StepOutcome::Idle;
        }
        self.stage += 1;
        if self.stage >= PROCESSING_STAGES.len() {
            self.stage = PROCESSING_STAGES.len();
            self.status = ProcessingStatus::Completed;
            StepOutcome::Completed
        } else {
            StepOutcome::Advanced { stage: self.stage }
        }
    }

    pub fn stage_state(&self, index: usize) -> StageState {
        if index < self.stage {
            StageState::Done
        } else if index == self.stage && self.is_processing() {
            StageState::Active
        } else {
            StageState::Waiting
        }
    }

    pub fn stages(&self) -> impl Iterator<Item = (&'static str, StageState)> + '_ {
        PROCESSING_STAGES
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, self.stage_state(i)))
    }

    /// Name of the stage currently running, if any
    pub fn current_stage_name(&self) -> Option<&'static str> {
        if self.is_processing() {
            PROCESSING_STAGES.get(self.stage).copied()
        } else {
            None
        }
    }
}

impl Default for ProcessingAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_started() {
        let mut animator = ProcessingAnimator::new();
        assert_eq!(animator.status(), ProcessingStatus::Idle);
        assert_eq!(animator.tick(), StepOutcome::Idle);
        assert_eq!(animator.stage(), 0);
    }

    #[test]
    fn test_completes_after_one_tick_per_stage() {
        let mut animator = ProcessingAnimator::new();
        animator.start(1);
        for expected in 1..PROCESSING_STAGES.len() {
            assert_eq!(animator.tick(), StepOutcome::Advanced { stage: expected });
            assert_eq!(animator.status(), ProcessingStatus::Processing);
        }
        assert_eq!(animator.tick(), StepOutcome::Completed);
        assert_eq!(animator.status(), ProcessingStatus::Completed);
        assert_eq!(animator.stage(), PROCESSING_STAGES.len());
        // Further ticks are ignored and the index stays bounded
        assert_eq!(animator.tick(), StepOutcome::Idle);
        assert_eq!(animator.stage(), PROCESSING_STAGES.len());
    }

    #[test]
    fn test_restart_resets_index() {
        let mut animator = ProcessingAnimator::new();
        animator.start(1);
        animator.tick();
        animator.tick();
        animator.start(4);
        assert_eq!(animator.stage(), 0);
        assert_eq!(animator.item_id(), Some(4));
        assert!(animator.is_processing());
    }

    #[test]
    fn test_stage_states() {
        let mut animator = ProcessingAnimator::new();
        animator.start(1);
        animator.tick();
        assert_eq!(animator.stage_state(0), StageState::Done);
        assert_eq!(animator.stage_state(1), StageState::Active);
        assert_eq!(animator.stage_state(2), StageState::Waiting);
        assert_eq!(animator.current_stage_name(), Some("Identifying loan account"));
    }

    #[test]
    fn test_completed_shows_all_done() {
        let mut animator = ProcessingAnimator::new();
        animator.start(1);
        for _ in 0..PROCESSING_STAGES.len() {
            animator.tick();
        }
        assert!(animator.stages().all(|(_, state)| state == StageState::Done));
        assert_eq!(animator.current_stage_name(), None);
    }
}
