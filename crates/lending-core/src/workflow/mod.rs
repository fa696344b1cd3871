pub mod arrival;
pub mod processing;
pub mod scheduler;

pub use arrival::ArrivalSimulator;
pub use processing::{ProcessingAnimator, ProcessingStatus, StageState, StepOutcome, PROCESSING_STAGES};
pub use scheduler::{Firing, Scheduler, TaskId};
