/// Options for a headless simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulateOptions {
    /// Arrival periods to run with the inbox open
    pub arrivals: usize,
    /// Item to select and run the agent on afterwards
    pub process: Option<u32>,
    /// Question to ask in that item's chat once processing is done
    pub ask: Option<String>,
}

/// CLI command parsed from arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Visible inbox plus queued arrivals
    Inbox,
    /// Documents and loan terms for a request
    Documents { item_id: u32 },
    /// Drafted reply for a request
    Draft { item_id: u32 },
    /// Canned chat answer for a request
    Ask { item_id: u32, question: String },
    /// Drive the dashboard timers without a terminal
    Simulate(SimulateOptions),
    /// Processing stage names in order
    Stages,
}
